//! Player session
//!
//! Owns the queue state together with the catalog and the track currently
//! loaded, and turns player events ("user clicked next", "track ended",
//! "shuffle toggled") into queue calls.
//!
//! A session is a plain owned value driven from one event stream. Hosts that
//! touch it from several threads share it through [`SharedSession`].

use crate::{
    error::{QueueError, Result},
    locator::TrackLocator,
    manager::QueueManager,
    types::{QueueConfig, QueueSnapshot},
};
use cantor_core::{AlbumId, CantorError, Catalog, Track, TrackId};
use std::sync::{Arc, Mutex};

/// Session shared between threads
pub type SharedSession<C> = Arc<Mutex<PlayerSession<C>>>;

/// One listener's playback session
pub struct PlayerSession<C: Catalog> {
    catalog: C,
    queue: QueueManager,
    current: Option<TrackLocator>,
    /// Album the loaded shuffle generation was drawn from
    shuffled_album: Option<AlbumId>,
}

impl<C: Catalog> PlayerSession<C> {
    /// Create a session with a queue built from `config`
    pub fn new(catalog: C, config: QueueConfig) -> Self {
        Self::with_queue(catalog, QueueManager::new(config))
    }

    /// Create a session around an existing queue manager
    pub fn with_queue(catalog: C, queue: QueueManager) -> Self {
        Self {
            catalog,
            queue,
            current: None,
            shuffled_album: None,
        }
    }

    /// Load a track, making it the current position
    ///
    /// Fails if the album or track is unknown, or the track belongs to
    /// another album.
    ///
    /// Moving to another album in shuffle mode starts a new generation for
    /// that album, leaving out the opened track.
    pub fn open(&mut self, album_id: AlbumId, track_id: TrackId) -> Result<()> {
        if self.catalog.album(&album_id).is_none() {
            return Err(CantorError::AlbumNotFound(album_id).into());
        }
        if self.catalog.track(track_id).is_none() {
            return Err(CantorError::TrackNotFound(track_id).into());
        }
        if !self.catalog.contains(&album_id, track_id) {
            return Err(QueueError::TrackNotInAlbum {
                album: album_id,
                track: track_id,
            });
        }

        let tracks = self.catalog.tracks_by_album(&album_id);
        if self.queue.is_shuffle() {
            if self.shuffled_album.as_ref() == Some(&album_id) {
                self.queue.initialize_queue(&tracks, track_id);
            } else {
                tracing::debug!("Shuffling album {}", album_id);
                self.queue.set_shuffle(true, &tracks, Some(track_id));
                self.shuffled_album = Some(album_id.clone());
            }
        }

        let locator = TrackLocator::new(album_id, track_id);
        tracing::info!("Now playing {}", locator);
        self.current = Some(locator);
        Ok(())
    }

    /// Load the track a locator points at
    pub fn open_locator(&mut self, locator: &TrackLocator) -> Result<()> {
        self.open(locator.album_id.clone(), locator.track_id)
    }

    /// Move to the next track (user pressed "next")
    ///
    /// Returns `None` at the end of the queue; the current track is kept.
    pub fn next(&mut self) -> Option<TrackLocator> {
        let current = self.current.clone()?;
        let tracks = self.catalog.tracks_by_album(&current.album_id);

        let next =
            self.queue
                .advance_to_next_destination(&current.album_id, &tracks, current.track_id);
        self.move_to(next)
    }

    /// Move to the previous track (user pressed "previous")
    pub fn previous(&mut self) -> Option<TrackLocator> {
        let current = self.current.clone()?;
        let tracks = self.catalog.tracks_by_album(&current.album_id);

        let prev = self
            .queue
            .prev_track(&tracks, current.track_id)
            .map(|track| TrackLocator::new(current.album_id.clone(), track.id));
        self.move_to(prev)
    }

    /// The current track finished playing on its own
    pub fn track_ended(&mut self) -> Option<TrackLocator> {
        let next = self.next();
        if next.is_none() {
            tracing::info!("End of queue");
        }
        next
    }

    /// Where "next" would go, without moving
    pub fn peek_next(&self) -> Option<TrackLocator> {
        let current = self.current.as_ref()?;
        let tracks = self.catalog.tracks_by_album(&current.album_id);
        self.queue
            .peek_next_destination(&current.album_id, &tracks, current.track_id)
    }

    /// Flip shuffle mode around the current track
    ///
    /// With nothing loaded the buffer stays empty until a track is opened.
    pub fn toggle_shuffle(&mut self) -> bool {
        let enabled = !self.queue.is_shuffle();
        match self.current.as_ref() {
            Some(current) => {
                let tracks = self.catalog.tracks_by_album(&current.album_id);
                self.shuffled_album = enabled.then(|| current.album_id.clone());
                self.queue
                    .set_shuffle(enabled, &tracks, Some(current.track_id))
            }
            None => {
                self.shuffled_album = None;
                self.queue.set_shuffle(enabled, &[], None)
            }
        }
    }

    pub fn toggle_autoplay(&mut self) -> bool {
        self.queue.toggle_autoplay()
    }

    pub fn current(&self) -> Option<&TrackLocator> {
        self.current.as_ref()
    }

    /// Catalog entry of the current track
    pub fn current_track(&self) -> Option<Track> {
        self.current
            .as_ref()
            .and_then(|current| self.catalog.track(current.track_id))
    }

    pub fn queue(&self) -> &QueueManager {
        &self.queue
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        self.queue.snapshot()
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Wrap the session for use from several threads
    pub fn into_shared(self) -> SharedSession<C> {
        Arc::new(Mutex::new(self))
    }

    fn move_to(&mut self, destination: Option<TrackLocator>) -> Option<TrackLocator> {
        if let Some(locator) = &destination {
            tracing::debug!("Moving to {}", locator);
            self.current = Some(locator.clone());
        }
        destination
    }
}

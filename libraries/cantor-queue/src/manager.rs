//! Queue manager - next/previous derivation
//!
//! Decides what plays after (or before) the current track of an album, in
//! either sequential or shuffle order.
//!
//! Sequential mode walks the album's track list as given. Shuffle mode walks
//! a `ShuffleBuffer` generation; the first generation after enabling shuffle
//! leaves out the track that was playing, later generations (made when one
//! runs out) cover the whole album.
//!
//! Nothing here fails: "no next track" and "current track not in the album"
//! both come back as `None`.

use crate::{
    locator::TrackLocator,
    queue::ShuffleBuffer,
    shuffle::ShuffleGenerator,
    types::{QueueConfig, QueueSnapshot},
};
use cantor_core::{AlbumId, Track, TrackId};
use std::collections::HashSet;

/// Play-queue state for one listening session
#[derive(Debug, Clone)]
pub struct QueueManager {
    autoplay: bool,
    shuffle: bool,
    buffer: ShuffleBuffer,
    generator: ShuffleGenerator,
}

impl QueueManager {
    /// Create a manager from configuration
    pub fn new(config: QueueConfig) -> Self {
        let generator = match config.shuffle_seed {
            Some(seed) => ShuffleGenerator::seeded(seed),
            None => ShuffleGenerator::from_entropy(),
        };
        Self::with_generator(config, generator)
    }

    /// Create a manager with an explicit shuffle generator
    pub fn with_generator(config: QueueConfig, generator: ShuffleGenerator) -> Self {
        Self {
            autoplay: config.autoplay,
            shuffle: config.shuffle,
            buffer: ShuffleBuffer::new(),
            generator,
        }
    }

    // ===== Modes =====

    /// Flip autoplay, returning the new value
    pub fn toggle_autoplay(&mut self) -> bool {
        self.autoplay = !self.autoplay;
        tracing::debug!("Autoplay {}", if self.autoplay { "on" } else { "off" });
        self.autoplay
    }

    /// Flip shuffle mode, returning the new value
    ///
    /// Enabling builds a generation of every track except `current`;
    /// disabling discards the buffer.
    pub fn toggle_shuffle(&mut self, tracks: &[Track], current: TrackId) -> bool {
        self.set_shuffle(!self.shuffle, tracks, Some(current))
    }

    /// Set shuffle mode explicitly
    ///
    /// Re-enabling while already on still starts a new generation.
    pub fn set_shuffle(
        &mut self,
        enabled: bool,
        tracks: &[Track],
        current: Option<TrackId>,
    ) -> bool {
        self.shuffle = enabled;

        if enabled {
            self.regenerate(tracks, current);
        } else {
            self.buffer.clear();
            tracing::debug!("Shuffle off, buffer cleared");
        }

        self.shuffle
    }

    /// Fill an empty shuffle buffer, leaving out `current`
    ///
    /// No-op in sequential mode or when a generation is already loaded. Used
    /// when a session starts (or resumes) with shuffle already on.
    pub fn initialize_queue(&mut self, tracks: &[Track], current: TrackId) {
        if self.shuffle && self.buffer.is_empty() {
            self.regenerate(tracks, Some(current));
        }
    }

    // ===== Navigation =====

    /// Track that plays after `current`, advancing the shuffle cursor
    pub fn next_track<'a>(&mut self, tracks: &'a [Track], current: TrackId) -> Option<&'a Track> {
        if !self.shuffle {
            return self.sequential_next(tracks, current);
        }

        if tracks.len() < 2 {
            return None;
        }

        if self.buffer.is_exhausted() {
            self.regenerate(tracks, None);
        }

        let id = self.buffer.advance()?;
        find_track(tracks, id)
    }

    /// Track that `next_track` would return, without touching any state
    pub fn peek_next_track<'a>(&self, tracks: &'a [Track], current: TrackId) -> Option<&'a Track> {
        if !self.shuffle {
            return self.sequential_next(tracks, current);
        }

        if tracks.len() < 2 {
            return None;
        }

        let id = if self.buffer.is_exhausted() {
            self.generator
                .preview(&candidate_ids(tracks, None))
                .first()
                .copied()?
        } else {
            self.buffer.peek()?
        };
        find_track(tracks, id)
    }

    /// Track that played before `current`
    ///
    /// In shuffle mode this walks back through the current generation only
    /// and never wraps. Autoplay does not wrap backwards either.
    pub fn prev_track<'a>(&mut self, tracks: &'a [Track], current: TrackId) -> Option<&'a Track> {
        if self.shuffle {
            let id = self.buffer.step_back()?;
            return find_track(tracks, id);
        }

        let index = position_of(tracks, current)?;
        index.checked_sub(1).map(|prev| &tracks[prev])
    }

    /// Locator of the next track, without advancing
    pub fn peek_next_destination(
        &self,
        album_id: &AlbumId,
        tracks: &[Track],
        current: TrackId,
    ) -> Option<TrackLocator> {
        self.peek_next_track(tracks, current)
            .map(|track| TrackLocator::new(album_id.clone(), track.id))
    }

    /// Locator of the next track, advancing the shuffle cursor
    pub fn advance_to_next_destination(
        &mut self,
        album_id: &AlbumId,
        tracks: &[Track],
        current: TrackId,
    ) -> Option<TrackLocator> {
        self.next_track(tracks, current)
            .map(|track| TrackLocator::new(album_id.clone(), track.id))
    }

    // ===== State =====

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    /// Current shuffle generation (empty in sequential mode)
    pub fn shuffle_buffer(&self) -> &[TrackId] {
        self.buffer.order()
    }

    /// Index of the next unconsumed shuffle entry
    pub fn cursor(&self) -> usize {
        self.buffer.cursor()
    }

    pub fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            autoplay: self.autoplay,
            shuffle: self.shuffle,
            shuffle_buffer: self.buffer.order().to_vec(),
            cursor: self.buffer.cursor(),
            position: self.buffer.position(),
        }
    }

    // ===== Internals =====

    fn sequential_next<'a>(&self, tracks: &'a [Track], current: TrackId) -> Option<&'a Track> {
        let index = position_of(tracks, current)?;

        match tracks.get(index + 1) {
            Some(next) => Some(next),
            None if self.autoplay => tracks.first(),
            None => None,
        }
    }

    fn regenerate(&mut self, tracks: &[Track], exclude: Option<TrackId>) {
        let candidates = candidate_ids(tracks, exclude);
        let order = self.generator.generate(&candidates);

        tracing::debug!(
            "Shuffle generation {}: {} tracks (excluding {:?})",
            self.generator.generations(),
            order.len(),
            exclude
        );

        self.buffer.replace(order);
    }
}

impl Default for QueueManager {
    fn default() -> Self {
        Self::new(QueueConfig::default())
    }
}

/// Distinct track ids in album order, optionally leaving one out
fn candidate_ids(tracks: &[Track], exclude: Option<TrackId>) -> Vec<TrackId> {
    let mut seen = HashSet::with_capacity(tracks.len());
    tracks
        .iter()
        .map(|t| t.id)
        .filter(|&id| Some(id) != exclude && seen.insert(id))
        .collect()
}

fn position_of(tracks: &[Track], id: TrackId) -> Option<usize> {
    let index = tracks.iter().position(|t| t.id == id);
    if index.is_none() {
        tracing::warn!("Track {} is not in the current album", id);
    }
    index
}

fn find_track(tracks: &[Track], id: TrackId) -> Option<&Track> {
    let track = tracks.iter().find(|t| t.id == id);
    if track.is_none() {
        tracing::warn!("Shuffled track {} is no longer in the album", id);
    }
    track
}

#[cfg(test)]
mod tests {
    use super::*;

    fn album(count: u32) -> Vec<Track> {
        (1..=count)
            .map(|i| Track::new(i, "gabrielle", format!("Track {}", i)))
            .collect()
    }

    fn seeded(seed: u64) -> QueueManager {
        QueueManager::new(QueueConfig {
            shuffle_seed: Some(seed),
            ..QueueConfig::default()
        })
    }

    fn id(track: Option<&Track>) -> Option<u32> {
        track.map(|t| t.id.get())
    }

    #[test]
    fn starts_sequential_without_autoplay() {
        let manager = QueueManager::default();
        assert!(!manager.is_autoplay());
        assert!(!manager.is_shuffle());
        assert!(manager.shuffle_buffer().is_empty());
        assert_eq!(manager.cursor(), 0);
    }

    #[test]
    fn toggle_autoplay_flips() {
        let mut manager = QueueManager::default();
        assert!(manager.toggle_autoplay());
        assert!(!manager.toggle_autoplay());
    }

    #[test]
    fn sequential_next_and_prev() {
        let tracks = album(3);
        let mut manager = QueueManager::default();

        assert_eq!(id(manager.next_track(&tracks, TrackId::new(1))), Some(2));
        assert_eq!(id(manager.next_track(&tracks, TrackId::new(3))), None);
        assert_eq!(id(manager.prev_track(&tracks, TrackId::new(1))), None);
        assert_eq!(id(manager.prev_track(&tracks, TrackId::new(3))), Some(2));
    }

    #[test]
    fn autoplay_wraps_forward_only() {
        let tracks = album(3);
        let mut manager = QueueManager::default();
        manager.toggle_autoplay();

        assert_eq!(id(manager.next_track(&tracks, TrackId::new(3))), Some(1));
        assert_eq!(id(manager.prev_track(&tracks, TrackId::new(1))), None);
    }

    #[test]
    fn unknown_current_track_has_no_neighbours() {
        let tracks = album(3);
        let mut manager = QueueManager::default();
        manager.toggle_autoplay();

        assert_eq!(id(manager.next_track(&tracks, TrackId::new(42))), None);
        assert_eq!(id(manager.prev_track(&tracks, TrackId::new(42))), None);
    }

    #[test]
    fn empty_and_single_track_albums() {
        let mut manager = QueueManager::default();
        assert_eq!(id(manager.next_track(&[], TrackId::new(1))), None);

        let single = album(1);
        assert_eq!(id(manager.next_track(&single, TrackId::new(1))), None);
        assert_eq!(id(manager.prev_track(&single, TrackId::new(1))), None);

        // Autoplay wraps a one-track album onto itself
        manager.toggle_autoplay();
        assert_eq!(id(manager.next_track(&single, TrackId::new(1))), Some(1));

        // Shuffle never does
        manager.toggle_shuffle(&single, TrackId::new(1));
        assert_eq!(id(manager.next_track(&single, TrackId::new(1))), None);
        assert_eq!(id(manager.prev_track(&single, TrackId::new(1))), None);
    }

    #[test]
    fn enabling_shuffle_excludes_current() {
        let tracks = album(5);
        let mut manager = seeded(1);

        assert!(manager.toggle_shuffle(&tracks, TrackId::new(3)));
        assert_eq!(manager.shuffle_buffer().len(), 4);
        assert!(!manager.shuffle_buffer().contains(&TrackId::new(3)));
        assert_eq!(manager.cursor(), 0);
    }

    #[test]
    fn enabling_shuffle_with_absent_current_keeps_every_track() {
        let tracks = album(4);
        let mut manager = seeded(1);

        manager.toggle_shuffle(&tracks, TrackId::new(99));
        assert_eq!(manager.shuffle_buffer().len(), 4);
    }

    #[test]
    fn disabling_shuffle_clears_buffer() {
        let tracks = album(5);
        let mut manager = seeded(2);

        manager.toggle_shuffle(&tracks, TrackId::new(1));
        manager.next_track(&tracks, TrackId::new(1));
        assert!(!manager.toggle_shuffle(&tracks, TrackId::new(1)));

        assert!(manager.shuffle_buffer().is_empty());
        assert_eq!(manager.cursor(), 0);
        // Back to sequential order
        assert_eq!(id(manager.next_track(&tracks, TrackId::new(1))), Some(2));
    }

    #[test]
    fn buffer_deduplicates_track_ids() {
        let mut tracks = album(3);
        tracks.push(Track::new(2, "gabrielle", "Track 2 (again)"));
        let mut manager = seeded(3);

        manager.toggle_shuffle(&tracks, TrackId::new(1));
        let mut buffer = manager.shuffle_buffer().to_vec();
        buffer.sort();
        assert_eq!(buffer, vec![TrackId::new(2), TrackId::new(3)]);
    }

    #[test]
    fn initialize_queue_only_fills_empty_shuffle_buffer() {
        let tracks = album(4);

        // Sequential: nothing happens
        let mut manager = seeded(4);
        manager.initialize_queue(&tracks, TrackId::new(2));
        assert!(manager.shuffle_buffer().is_empty());

        // Resumed with shuffle on: buffer built without the current track
        let mut manager = QueueManager::new(QueueConfig {
            shuffle: true,
            shuffle_seed: Some(4),
            ..QueueConfig::default()
        });
        manager.initialize_queue(&tracks, TrackId::new(2));
        let first = manager.shuffle_buffer().to_vec();
        assert_eq!(first.len(), 3);
        assert!(!first.contains(&TrackId::new(2)));

        // Already populated: left alone
        manager.next_track(&tracks, TrackId::new(2));
        manager.initialize_queue(&tracks, TrackId::new(2));
        assert_eq!(manager.shuffle_buffer(), first.as_slice());
        assert_eq!(manager.cursor(), 1);
    }

    #[test]
    fn shuffle_prev_walks_back_through_generation() {
        let tracks = album(5);
        let mut manager = seeded(5);
        manager.toggle_shuffle(&tracks, TrackId::new(1));
        let order = manager.shuffle_buffer().to_vec();

        let a = manager.next_track(&tracks, TrackId::new(1)).unwrap().id;
        let b = manager.next_track(&tracks, a).unwrap().id;
        let c = manager.next_track(&tracks, b).unwrap().id;
        assert_eq!(vec![a, b, c], order[..3].to_vec());

        assert_eq!(manager.prev_track(&tracks, c).map(|t| t.id), Some(b));
        assert_eq!(manager.prev_track(&tracks, b).map(|t| t.id), Some(a));
        assert_eq!(manager.prev_track(&tracks, a).map(|t| t.id), None);

        // Forward again resumes from where we stepped back to
        assert_eq!(manager.next_track(&tracks, a).map(|t| t.id), Some(b));
    }

    #[test]
    fn shuffle_prev_at_generation_boundary_is_none() {
        let tracks = album(3);
        let mut manager = seeded(6);
        manager.toggle_shuffle(&tracks, TrackId::new(1));

        let mut current = TrackId::new(1);
        for _ in 0..2 {
            current = manager.next_track(&tracks, current).unwrap().id;
        }
        // Crosses into a fresh full generation
        current = manager.next_track(&tracks, current).unwrap().id;
        assert_eq!(manager.shuffle_buffer().len(), 3);
        assert_eq!(manager.cursor(), 1);

        assert!(manager.prev_track(&tracks, current).is_none());
    }

    #[test]
    fn peek_matches_following_next_across_regeneration() {
        let tracks = album(4);
        let mut manager = seeded(7);
        manager.toggle_shuffle(&tracks, TrackId::new(1));

        let mut current = TrackId::new(1);
        for _ in 0..10 {
            let peeked = manager.peek_next_track(&tracks, current).map(|t| t.id);
            assert_eq!(manager.peek_next_track(&tracks, current).map(|t| t.id), peeked);

            let next = manager.next_track(&tracks, current).map(|t| t.id);
            assert_eq!(next, peeked);
            current = next.unwrap();
        }
    }

    #[test]
    fn destinations() {
        let tracks = album(3);
        let album_id = AlbumId::new("gabrielle");
        let mut manager = QueueManager::default();

        let peeked = manager.peek_next_destination(&album_id, &tracks, TrackId::new(2));
        assert_eq!(peeked.unwrap().to_string(), "album/gabrielle/track/3");

        let advanced = manager.advance_to_next_destination(&album_id, &tracks, TrackId::new(3));
        assert!(advanced.is_none());
    }

    #[test]
    fn snapshot_reflects_state() {
        let tracks = album(3);
        let mut manager = seeded(8);
        manager.toggle_autoplay();
        manager.toggle_shuffle(&tracks, TrackId::new(2));
        manager.next_track(&tracks, TrackId::new(2));

        let snapshot = manager.snapshot();
        assert!(snapshot.autoplay);
        assert!(snapshot.shuffle);
        assert_eq!(snapshot.shuffle_buffer.len(), 2);
        assert_eq!(snapshot.cursor, 1);
        assert_eq!(snapshot.position, Some(0));
    }
}

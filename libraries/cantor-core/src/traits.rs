/// Core traits for Cantor
use crate::types::{Album, AlbumId, Track, TrackId};

/// Read-only catalog of albums and tracks
///
/// Implementers decide where the data lives (bundled arrays today, a remote
/// API later). The queue only ever needs an album's ordered track list and
/// id lookups, so that is all this trait exposes.
pub trait Catalog: Send + Sync {
    /// All albums, in catalog order
    fn albums(&self) -> Vec<Album>;

    /// Look up a single album
    fn album(&self, id: &AlbumId) -> Option<Album>;

    /// Tracks of one album in canonical playback order
    ///
    /// Returns an empty list for unknown albums and for albums that have no
    /// tracks yet.
    fn tracks_by_album(&self, id: &AlbumId) -> Vec<Track>;

    /// Look up a track by its catalog-wide id
    fn track(&self, id: TrackId) -> Option<Track>;

    /// Track at `index` (0-based) within an album's playback order
    fn track_by_album_and_index(&self, album: &AlbumId, index: usize) -> Option<Track> {
        self.tracks_by_album(album).into_iter().nth(index)
    }

    /// Whether `track` belongs to `album`
    fn contains(&self, album: &AlbumId, track: TrackId) -> bool {
        self.track(track).is_some_and(|t| &t.album_id == album)
    }
}

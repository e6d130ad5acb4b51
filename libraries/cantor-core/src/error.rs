/// Core error types for Cantor
use crate::types::{AlbumId, TrackId};
use thiserror::Error;

/// Result type alias using `CantorError`
pub type Result<T> = std::result::Result<T, CantorError>;

/// Core error type for Cantor
#[derive(Error, Debug)]
pub enum CantorError {
    /// Album not found
    #[error("Album not found: {0}")]
    AlbumNotFound(AlbumId),

    /// Track not found
    #[error("Track not found: {0}")]
    TrackNotFound(TrackId),

    /// Two tracks share the same id
    #[error("Duplicate track id: {0}")]
    DuplicateTrack(TrackId),

    /// Two albums share the same id
    #[error("Duplicate album id: {0}")]
    DuplicateAlbum(AlbumId),

    /// A track references an album the catalog does not contain
    #[error("Track {track} references unknown album {album}")]
    UnknownAlbum {
        /// Offending track
        track: TrackId,
        /// Album it points at
        album: AlbumId,
    },

    /// Catalog text could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl CantorError {
    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

impl From<toml::de::Error> for CantorError {
    fn from(err: toml::de::Error) -> Self {
        Self::parse(err.to_string())
    }
}

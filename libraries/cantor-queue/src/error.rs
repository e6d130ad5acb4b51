//! Error types for queue management
//!
//! Queue navigation itself never fails; these cover the edges around it
//! (locator parsing, session setup, configuration).

use cantor_core::{AlbumId, CantorError, TrackId};
use thiserror::Error;

/// Queue errors
#[derive(Debug, Error)]
pub enum QueueError {
    /// String is not of the form `album/{albumId}/track/{trackId}`
    #[error("Invalid track locator: {0}")]
    InvalidLocator(String),

    /// Track exists but belongs to another album (or does not exist)
    #[error("Track {track} is not part of album {album}")]
    TrackNotInAlbum { album: AlbumId, track: TrackId },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog error
    #[error(transparent)]
    Catalog(#[from] CantorError),
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;

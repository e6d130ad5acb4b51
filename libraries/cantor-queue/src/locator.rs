//! Navigable track locators (`album/{albumId}/track/{trackId}`)

use crate::error::QueueError;
use cantor_core::{AlbumId, TrackId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a navigation should land
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrackLocator {
    pub album_id: AlbumId,
    pub track_id: TrackId,
}

impl TrackLocator {
    pub fn new(album_id: AlbumId, track_id: TrackId) -> Self {
        Self { album_id, track_id }
    }

    /// Absolute route form, with a leading `/`
    pub fn to_route(&self) -> String {
        format!("/{}", self)
    }
}

impl fmt::Display for TrackLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "album/{}/track/{}", self.album_id, self.track_id)
    }
}

impl FromStr for TrackLocator {
    type Err = QueueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || QueueError::InvalidLocator(s.to_string());
        let path = s.strip_prefix('/').unwrap_or(s);

        let parts: Vec<&str> = path.split('/').collect();
        match parts.as_slice() {
            ["album", album, "track", track] if !album.is_empty() => {
                let track_id = track.parse::<u32>().map_err(|_| invalid())?;
                Ok(Self::new(AlbumId::new(*album), TrackId::new(track_id)))
            }
            _ => Err(invalid()),
        }
    }
}

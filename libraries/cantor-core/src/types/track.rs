//! Track types

use super::{AlbumId, TrackId};
use serde::{Deserialize, Serialize};

/// Musical style tag shown next to a track
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    #[default]
    Epic,
    Celtic,
    Military,
    Festive,
    Parody,
}

/// A track in the catalog
///
/// Only `id` and `album_id` matter for queue ordering and identity; the rest
/// is display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: TrackId,
    pub album_id: AlbumId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Display duration, e.g. `"3:45"`
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub kind: TrackKind,
    /// Audio file stem, absent for tracks that have not been recorded yet
    #[serde(default)]
    pub filename: Option<String>,
}

impl Track {
    /// Create a track with only identity and a title
    pub fn new(id: u32, album_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: TrackId::new(id),
            album_id: AlbumId::new(album_id),
            title: title.into(),
            subtitle: String::new(),
            duration: String::new(),
            kind: TrackKind::default(),
            filename: None,
        }
    }

    /// Whether an audio file is available for this track
    pub fn is_playable(&self) -> bool {
        self.filename.is_some()
    }
}

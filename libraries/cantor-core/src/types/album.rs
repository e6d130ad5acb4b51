//! Album types

use super::AlbumId;
use serde::{Deserialize, Serialize};

/// Release format of an album
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlbumKind {
    #[default]
    Album,
    Ep,
    Single,
    Special,
}

/// An album
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: AlbumId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub cover_image: Option<String>,
    /// Announced track count; may exceed the tracks actually in the catalog
    #[serde(default)]
    pub track_count: u32,
    #[serde(default)]
    pub kind: AlbumKind,
}

impl Album {
    /// Create an album with only an id and a title
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: AlbumId::new(id),
            title: title.into(),
            subtitle: String::new(),
            year: None,
            cover_image: None,
            track_count: 0,
            kind: AlbumKind::Album,
        }
    }
}

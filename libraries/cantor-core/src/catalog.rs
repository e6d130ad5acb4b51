//! In-memory catalog
//!
//! Holds the bundled album and track lists. Data can be built in code or
//! loaded from a TOML/JSON document:
//!
//! ```toml
//! [[albums]]
//! id = "gabrielle"
//! title = "Gabrielle"
//!
//! [[tracks]]
//! id = 1
//! album_id = "gabrielle"
//! title = "De nos jours plus rien ne va"
//! ```

use crate::error::{CantorError, Result};
use crate::traits::Catalog;
use crate::types::{Album, AlbumId, Track, TrackId};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Raw catalog contents as stored on disk
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogData {
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

/// Catalog backed by vectors held in memory
///
/// Track order inside an album is the order tracks appear in `CatalogData`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    albums: Vec<Album>,
    tracks: Vec<Track>,
    /// Track id -> index into `tracks`
    by_id: HashMap<TrackId, usize>,
}

impl InMemoryCatalog {
    /// Build a catalog, validating ids and album references
    pub fn new(data: CatalogData) -> Result<Self> {
        let mut album_ids = HashSet::with_capacity(data.albums.len());
        for album in &data.albums {
            if !album_ids.insert(album.id.clone()) {
                return Err(CantorError::DuplicateAlbum(album.id.clone()));
            }
        }

        let mut by_id = HashMap::with_capacity(data.tracks.len());
        for (index, track) in data.tracks.iter().enumerate() {
            if !album_ids.contains(&track.album_id) {
                return Err(CantorError::UnknownAlbum {
                    track: track.id,
                    album: track.album_id.clone(),
                });
            }
            if by_id.insert(track.id, index).is_some() {
                return Err(CantorError::DuplicateTrack(track.id));
            }
        }

        tracing::debug!(
            "Catalog loaded: {} albums, {} tracks",
            data.albums.len(),
            data.tracks.len()
        );

        Ok(Self {
            albums: data.albums,
            tracks: data.tracks,
            by_id,
        })
    }

    /// Parse a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let data: CatalogData = toml::from_str(text)?;
        Self::new(data)
    }

    /// Parse a JSON document
    pub fn from_json_str(text: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(text)?;
        Self::new(data)
    }

    /// Load a catalog file, picking the format from the extension
    ///
    /// `.json` files are parsed as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_toml_str(&text)
        }
    }

    /// Number of tracks across all albums
    pub fn track_count(&self) -> usize {
        self.tracks.len()
    }
}

impl Catalog for InMemoryCatalog {
    fn albums(&self) -> Vec<Album> {
        self.albums.clone()
    }

    fn album(&self, id: &AlbumId) -> Option<Album> {
        self.albums.iter().find(|a| &a.id == id).cloned()
    }

    fn tracks_by_album(&self, id: &AlbumId) -> Vec<Track> {
        self.tracks
            .iter()
            .filter(|t| &t.album_id == id)
            .cloned()
            .collect()
    }

    fn track(&self, id: TrackId) -> Option<Track> {
        self.by_id.get(&id).map(|&index| self.tracks[index].clone())
    }
}

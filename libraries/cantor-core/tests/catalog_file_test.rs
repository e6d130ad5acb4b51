//! Catalog file loading tests
//!
//! Writes real files to a temp directory and loads them through
//! `InMemoryCatalog::load`, covering both supported formats.

use cantor_core::{AlbumId, CantorError, Catalog, InMemoryCatalog, TrackId};
use std::fs;
use tempfile::TempDir;

const TOML_CATALOG: &str = r#"
[[albums]]
id = "gabrielle"
title = "Gabrielle"
subtitle = "Premier album"
year = 2024
track_count = 8

[[albums]]
id = "noel-2025"
title = "Noël 2025"
kind = "special"

[[tracks]]
id = 1
album_id = "gabrielle"
title = "De nos jours plus rien ne va"
subtitle = "Chant de révolte"
duration = "3:45"
kind = "epic"
filename = "De_nos_jours_plus_rien_de_va"

[[tracks]]
id = 2
album_id = "gabrielle"
title = "Parangon d'une Soldate"
duration = "4:12"
kind = "military"
"#;

const JSON_CATALOG: &str = r#"{
  "albums": [{ "id": "gabrielle", "title": "Gabrielle" }],
  "tracks": [
    { "id": 5, "album_id": "gabrielle", "title": "Brumes d'Émeraude", "kind": "celtic" },
    { "id": 4, "album_id": "gabrielle", "title": "Les Fils de la Terre" }
  ]
}"#;

#[test]
fn test_load_toml_catalog() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, TOML_CATALOG).unwrap();

    let catalog = InMemoryCatalog::load(&path).unwrap();

    assert_eq!(catalog.albums().len(), 2);
    assert_eq!(catalog.track_count(), 2);

    let album = catalog.album(&AlbumId::new("gabrielle")).unwrap();
    assert_eq!(album.year, Some(2024));
    assert_eq!(album.track_count, 8);

    // An announced album with no recorded tracks yet
    assert!(catalog.tracks_by_album(&AlbumId::new("noel-2025")).is_empty());
}

#[test]
fn test_load_json_catalog_by_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, JSON_CATALOG).unwrap();

    let catalog = InMemoryCatalog::load(&path).unwrap();
    let order: Vec<TrackId> = catalog
        .tracks_by_album(&AlbumId::new("gabrielle"))
        .iter()
        .map(|t| t.id)
        .collect();

    // File order wins over id order
    assert_eq!(order, vec![TrackId::new(5), TrackId::new(4)]);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = InMemoryCatalog::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, CantorError::Io(_)));
}

#[test]
fn test_json_with_wrong_shape_is_json_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, r#"{ "tracks": [{ "id": "one" }] }"#).unwrap();

    let err = InMemoryCatalog::load(&path).unwrap_err();
    assert!(matches!(err, CantorError::Json(_)));
}

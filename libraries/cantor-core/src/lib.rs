//! Cantor Core
//!
//! Catalog types, lookups, and error handling shared by the Cantor crates.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Album`, `Track`, `AlbumId`, `TrackId`
//! - **Core Traits**: `Catalog` (album and track lookups)
//! - **Error Handling**: Unified `CantorError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cantor_core::{Catalog, CatalogData, InMemoryCatalog};
//! use cantor_core::types::{Album, AlbumId, Track, TrackId};
//!
//! let data = CatalogData {
//!     albums: vec![Album::new("gabrielle", "Gabrielle")],
//!     tracks: vec![
//!         Track::new(1, "gabrielle", "De nos jours plus rien ne va"),
//!         Track::new(2, "gabrielle", "Parangon d'une Soldate"),
//!     ],
//! };
//!
//! let catalog = InMemoryCatalog::new(data).unwrap();
//! let tracks = catalog.tracks_by_album(&AlbumId::new("gabrielle"));
//! assert_eq!(tracks[1].id, TrackId::new(2));
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use catalog::{CatalogData, InMemoryCatalog};
pub use error::{CantorError, Result};
pub use traits::Catalog;

pub use types::{Album, AlbumId, AlbumKind, Track, TrackId, TrackKind};

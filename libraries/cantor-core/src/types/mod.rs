mod album;
mod ids;
mod track;

pub use album::{Album, AlbumKind};
pub use ids::{AlbumId, TrackId};
pub use track::{Track, TrackKind};

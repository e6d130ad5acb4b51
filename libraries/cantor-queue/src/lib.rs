//! Cantor - Play Queue Management
//!
//! Decides what plays next (or previously) within an album.
//!
//! This crate provides:
//! - Sequential playback with optional autoplay wrap-around
//! - Shuffle playback that visits every track once per cycle
//! - Side-effect free "what's next" previews
//! - Navigable track locators (`album/{albumId}/track/{trackId}`)
//! - A player session tying queue, catalog and current track together
//!
//! # Example: Sequential and Autoplay
//!
//! ```rust
//! use cantor_core::{Track, TrackId};
//! use cantor_queue::QueueManager;
//!
//! let tracks: Vec<Track> = (1..=3)
//!     .map(|i| Track::new(i, "gabrielle", format!("Track {}", i)))
//!     .collect();
//!
//! let mut queue = QueueManager::default();
//! assert_eq!(queue.next_track(&tracks, TrackId::new(1)).map(|t| t.id.get()), Some(2));
//! assert!(queue.next_track(&tracks, TrackId::new(3)).is_none());
//!
//! queue.toggle_autoplay();
//! assert_eq!(queue.next_track(&tracks, TrackId::new(3)).map(|t| t.id.get()), Some(1));
//! ```
//!
//! # Example: Shuffle
//!
//! ```rust
//! use cantor_core::{Track, TrackId};
//! use cantor_queue::{QueueConfig, QueueManager};
//!
//! let tracks: Vec<Track> = (1..=5)
//!     .map(|i| Track::new(i, "gabrielle", format!("Track {}", i)))
//!     .collect();
//!
//! // Seeded for reproducible order
//! let mut queue = QueueManager::new(QueueConfig {
//!     shuffle_seed: Some(42),
//!     ..QueueConfig::default()
//! });
//! queue.toggle_shuffle(&tracks, TrackId::new(3));
//!
//! // Peeking never moves the queue
//! let peeked = queue.peek_next_track(&tracks, TrackId::new(3)).map(|t| t.id);
//! let next = queue.next_track(&tracks, TrackId::new(3)).map(|t| t.id);
//! assert_eq!(peeked, next);
//! assert_ne!(next, Some(TrackId::new(3)));
//! ```

mod error;
mod locator;
mod manager;
mod queue;
mod session;
pub mod shuffle;
pub mod types;

// Public exports
pub use error::{QueueError, Result};
pub use locator::TrackLocator;
pub use manager::QueueManager;
pub use queue::ShuffleBuffer;
pub use session::{PlayerSession, SharedSession};
pub use shuffle::ShuffleGenerator;
pub use types::{QueueConfig, QueueSnapshot};

//! Core types for queue management

use cantor_core::TrackId;
use serde::{Deserialize, Serialize};

/// Configuration for the queue manager
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Wrap from the last track to the first in sequential mode (default: false)
    pub autoplay: bool,

    /// Start in shuffle mode (default: false)
    ///
    /// The shuffle buffer starts empty; it is filled the first time a track
    /// is opened.
    pub shuffle: bool,

    /// Seed for the shuffle generator (default: none, seeded from entropy)
    pub shuffle_seed: Option<u64>,
}

/// Point-in-time view of the queue state, for display and debugging
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueSnapshot {
    pub autoplay: bool,
    pub shuffle: bool,

    /// Current shuffle generation, in play order
    pub shuffle_buffer: Vec<TrackId>,

    /// Index of the next unconsumed entry in `shuffle_buffer`
    pub cursor: usize,

    /// Index of the entry currently playing, if one has been consumed
    pub position: Option<usize>,
}

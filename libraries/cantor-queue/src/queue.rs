//! Shuffle buffer
//!
//! One shuffle generation plus the bookkeeping needed to walk it:
//!
//! ```text
//! order:     [ 5, 2, 7, 1, 3 ]
//!                  ^  ^
//!           position  cursor
//! ```
//!
//! `cursor` is the next unconsumed entry. `position` is the entry that was
//! consumed last (the one playing). Stepping back moves both together, so
//! `cursor == position + 1` whenever `position` is set.

use cantor_core::TrackId;

/// Ordered shuffle generation with a read cursor
#[derive(Debug, Clone, Default)]
pub struct ShuffleBuffer {
    order: Vec<TrackId>,
    cursor: usize,
    position: Option<usize>,
}

impl ShuffleBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a fresh generation
    pub fn replace(&mut self, order: Vec<TrackId>) {
        self.order = order;
        self.cursor = 0;
        self.position = None;
    }

    /// Drop the current generation
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Entry at the cursor, without consuming it
    pub fn peek(&self) -> Option<TrackId> {
        self.order.get(self.cursor).copied()
    }

    /// Consume the entry at the cursor
    pub fn advance(&mut self) -> Option<TrackId> {
        let id = self.peek()?;
        self.position = Some(self.cursor);
        self.cursor += 1;
        Some(id)
    }

    /// Move back to the entry before the one playing
    ///
    /// Returns `None` at the start of the generation; earlier generations are
    /// not retained.
    pub fn step_back(&mut self) -> Option<TrackId> {
        let previous = self.position?.checked_sub(1)?;
        self.position = Some(previous);
        self.cursor = previous + 1;
        Some(self.order[previous])
    }

    /// Whether the next read needs a new generation
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn order(&self) -> &[TrackId] {
        &self.order
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

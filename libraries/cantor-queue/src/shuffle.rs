//! Shuffle generation for queue randomization
//!
//! Every shuffle generation is a Fisher-Yates permutation driven by its own
//! seed. The seed for the *next* generation is drawn ahead of time, so the
//! permutation that would be produced can be previewed without consuming any
//! randomness, and is produced identically once it is actually generated.

use cantor_core::TrackId;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Permute `ids` in place with a uniform Fisher-Yates shuffle
///
/// Deterministic for a given seed.
pub fn permute(ids: &mut [TrackId], seed: u64) {
    let mut rng = StdRng::seed_from_u64(seed);
    ids.shuffle(&mut rng);
}

/// Source of shuffle generations
#[derive(Debug, Clone)]
pub struct ShuffleGenerator {
    rng: StdRng,

    /// Seed the next call to `generate` will use
    pending_seed: u64,

    /// Number of generations produced so far
    generations: u64,
}

impl ShuffleGenerator {
    /// Deterministic generator, for tests and reproducible sessions
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let pending_seed = rng.gen();
        Self {
            rng,
            pending_seed,
            generations: 0,
        }
    }

    /// The permutation the next `generate` call would return
    pub fn preview(&self, candidates: &[TrackId]) -> Vec<TrackId> {
        let mut ids = candidates.to_vec();
        permute(&mut ids, self.pending_seed);
        ids
    }

    /// Produce a new generation and draw the seed for the one after it
    pub fn generate(&mut self, candidates: &[TrackId]) -> Vec<TrackId> {
        let ids = self.preview(candidates);
        self.pending_seed = self.rng.gen();
        self.generations += 1;
        ids
    }

    /// Number of generations produced so far
    pub fn generations(&self) -> u64 {
        self.generations
    }
}

impl Default for ShuffleGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

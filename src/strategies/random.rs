//! A strategy that randomly chooses a legal move.

use super::super::interface::*;
use super::super::rules::legal_moves;
use crate::grid::Grid;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn new() -> Random {
        Random { rng: StdRng::from_entropy() }
    }

    /// A reproducible random mover.
    pub fn seeded(seed: u64) -> Random {
        Random { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Default for Random {
    fn default() -> Self {
        Random::new()
    }
}

impl Strategy for Random {
    fn choose_move(&mut self, grid: &Grid, side: Side, _history: &[Move]) -> Option<Move> {
        legal_moves(grid, side).choose(&mut self.rng).copied()
    }
}

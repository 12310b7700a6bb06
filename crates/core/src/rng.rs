//! RNG module - 7-bag random piece generation
//!
//! Each bag contains one of each piece (I, O, T, S, Z, J, L), shuffled with an
//! unbiased Fisher-Yates shuffle. Pieces are drawn from the bag until it is
//! empty, then a fresh bag is shuffled. Every 7 draws aligned to a bag
//! boundary are therefore a permutation of all kinds.
//!
//! The shuffle RNG is seeded, so the same seed always yields the same piece
//! sequence (useful for tests and replays).

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::types::PieceKind;

const BAG_SIZE: usize = PieceKind::ALL.len();

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceQueue {
    /// Current bag of pieces
    bag: [PieceKind; BAG_SIZE],
    /// Index into current bag
    bag_index: usize,
    rng: StdRng,
    seed: u64,
}

impl PieceQueue {
    /// Create a new piece queue with the given seed
    pub fn new(seed: u64) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        queue.refill();
        queue
    }

    /// Replace the bag with a fresh shuffled permutation of all kinds
    pub fn refill(&mut self) {
        self.bag = PieceKind::ALL;
        self.bag.shuffle(&mut self.rng);
        self.bag_index = 0;
    }

    /// Drop whatever is left of the current bag and start a fresh one
    ///
    /// The RNG keeps running, so the new bag differs from the one the queue
    /// started with.
    pub fn reset(&mut self) {
        self.refill();
    }

    /// Draw the next piece, refilling first if the bag is exhausted
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= BAG_SIZE {
            self.refill();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Peek at the next piece without removing it
    ///
    /// When the bag is empty this previews the next bag on a clone of the RNG,
    /// so the result always matches the following `draw()`.
    pub fn peek(&self) -> PieceKind {
        if self.bag_index < BAG_SIZE {
            return self.bag[self.bag_index];
        }

        let mut preview_rng = self.rng.clone();
        let mut next_bag = PieceKind::ALL;
        next_bag.shuffle(&mut preview_rng);
        next_bag[0]
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }

    /// The seed this queue was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceQueue {
    fn default() -> Self {
        Self::new(1)
    }
}

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::Move;

/// Seeded generator when a seed is given, otherwise one drawn from OS entropy.
pub fn make_rng(seed: Option<u64>) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => SmallRng::from_entropy(),
    }
}

/// Uniform random permutation of `moves` in place.
pub fn shuffle_moves<R: Rng + ?Sized>(moves: &mut [Move], rng: &mut R) {
    moves.shuffle(rng);
}

/// Per-game seed derived from a base seed, so a batch replays identically.
pub fn game_seed(base: u64, index: usize) -> u64 {
    base ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

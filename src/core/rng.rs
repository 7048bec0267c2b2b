//! Deterministic random number generation for deals.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical sequence of deals
//! - **Serializable**: O(1) state capture and restore, so a deal can be replayed
//!
//! ```
//! use hexgarden::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs: Vec<u32> = (0..10).collect();
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG used by the layout generator.
///
/// Uses ChaCha8 for speed while keeping a reproducible, platform-independent
/// stream.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a seed drawn from the thread RNG.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `0..=upper`.
    pub fn gen_index_inclusive(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }

    /// Fisher-Yates shuffle in place.
    ///
    /// Walks from the back, swapping each slot `i` with a uniformly chosen
    /// slot in `0..=i`.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.gen_index_inclusive(i);
            slice.swap(i, j);
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for replaying a deal.
///
/// Uses the ChaCha8 word position, so capture and restore are O(1)
/// regardless of how many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_decides_shuffle() {
        let deck: Vec<u32> = (0..55).collect();
        let shuffled = |seed| {
            let mut d = deck.clone();
            GameRng::new(seed).shuffle(&mut d);
            d
        };

        assert_eq!(shuffled(42), shuffled(42));
        assert_ne!(shuffled(1), shuffled(2));
        assert_eq!(GameRng::new(9).seed(), 9);
    }

    #[test]
    fn test_inclusive_bound_reached() {
        let mut rng = GameRng::new(7);
        let draws: Vec<_> = (0..200).map(|_| rng.gen_index_inclusive(1)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&1));
        assert!(draws.iter().all(|&d| d <= 1));
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_eq!(data.len(), original.len());
        assert_ne!(data, original);

        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(1);
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![9];
        rng.shuffle(&mut one);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        rng.shuffle(&mut [0u8; 55]);

        let state = rng.state();
        let mut expected: Vec<u32> = (0..30).collect();
        rng.shuffle(&mut expected);

        let mut actual: Vec<u32> = (0..30).collect();
        GameRng::from_state(&state).shuffle(&mut actual);
        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_survives_json() {
        let mut rng = GameRng::new(5);
        rng.shuffle(&mut [0u8; 20]);
        let state = rng.state();

        let json = serde_json::to_string(&state).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
        assert_eq!(GameRng::from_state(&back).state(), state);
    }
}

//! RNG module - random sources for deck shuffling
//!
//! Shuffling only needs "a uniform index in `[0, upper]`", expressed by the
//! [`CardRng`] trait. Two sources implement it:
//!
//! - [`EntropyRng`]: seeded from the OS, used for real play
//! - [`SimpleRng`]: a small LCG, used where decks must be reproducible (tests,
//!   benchmarks, `CHARADES_SEED`)
//!
//! [`DeckRng`] picks one of the two at startup.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait CardRng {
    /// Return an index in `[0, upper]` (inclusive).
    fn next_index(&mut self, upper: usize) -> usize;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would only ever produce the increment sequence.
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl CardRng for SimpleRng {
    fn next_index(&mut self, upper: usize) -> usize {
        // High bits of an LCG are the well-mixed ones.
        let bound = (upper as u64) + 1;
        (((self.next_u32() as u64) * bound) >> 32) as usize
    }
}

/// Non-deterministic source backed by an OS-seeded [`StdRng`].
#[derive(Debug, Clone)]
pub struct EntropyRng {
    inner: StdRng,
}

impl EntropyRng {
    pub fn new() -> Self {
        Self {
            inner: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRng {
    fn default() -> Self {
        Self::new()
    }
}

impl CardRng for EntropyRng {
    fn next_index(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }
}

/// Either source, picked at runtime.
#[derive(Debug, Clone)]
pub enum DeckRng {
    Entropy(EntropyRng),
    Seeded(SimpleRng),
}

impl DeckRng {
    /// Seeded when `seed` is given, OS entropy otherwise.
    pub fn from_seed(seed: Option<u32>) -> Self {
        match seed {
            Some(seed) => DeckRng::Seeded(SimpleRng::new(seed)),
            None => DeckRng::Entropy(EntropyRng::new()),
        }
    }
}

impl CardRng for DeckRng {
    fn next_index(&mut self, upper: usize) -> usize {
        match self {
            DeckRng::Entropy(rng) => rng.next_index(upper),
            DeckRng::Seeded(rng) => rng.next_index(upper),
        }
    }
}

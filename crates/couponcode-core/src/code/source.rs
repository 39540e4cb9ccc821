//! Randomness sources for code generation.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use super::alphabet;
use crate::error::Result;

/// Supplies uniformly distributed symbol indices.
pub trait SymbolSource {
    /// Returns an index in `0..bound`. `bound` is never zero.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Adapts any [`rand::Rng`] into a [`SymbolSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing RNG.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<ThreadRng> {
    /// Source backed by the thread-local RNG.
    #[must_use]
    pub fn thread() -> Self {
        Self::new(rand::thread_rng())
    }
}

impl RngSource<StdRng> {
    /// Reproducible source from a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SymbolSource for RngSource<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Deterministic source cycling through a fixed list of indices.
///
/// Each index is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    indices: Vec<usize>,
    pos: usize,
}

impl SequenceSource {
    /// Create a source from raw indices. An empty list yields zeros.
    #[must_use]
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices, pos: 0 }
    }

    /// Create a source that replays the given alphabet symbols in order.
    ///
    /// Separators are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if `symbols` contains anything outside the alphabet.
    pub fn from_symbols(symbols: &str) -> Result<Self> {
        let indices = symbols
            .chars()
            .filter(|&c| c != alphabet::SEPARATOR)
            .map(alphabet::index_of)
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(indices))
    }
}

impl SymbolSource for SequenceSource {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let index = self.indices[self.pos % self.indices.len()];
        self.pos = self.pos.wrapping_add(1);
        index % bound
    }
}

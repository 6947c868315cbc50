//! Injectable randomness for tile spawning.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform choices over a finite set.
pub trait TileSource {
    /// Returns an index uniformly distributed over `0..len`. `len` is non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<S: TileSource + ?Sized> TileSource for &mut S {
    fn pick_index(&mut self, len: usize) -> usize {
        (**self).pick_index(len)
    }
}

/// [`TileSource`] backed by a `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
}

impl<R: Rng> RandomSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSource<StdRng> {
    /// Deterministic source for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TileSource for RandomSource<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed script of indices, wrapping each into range.
///
/// The script cycles once exhausted; an empty script always picks 0.
/// Available to other crates with the `test-util` feature.
#[cfg(any(test, feature = "test-util"))]
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

#[cfg(any(test, feature = "test-util"))]
impl ScriptedSource {
    /// Creates a source that replays `script`.
    pub fn new(script: impl Into<Vec<usize>>) -> Self {
        Self {
            script: script.into(),
            cursor: 0,
        }
    }

    /// Number of picks made so far.
    pub fn picks(&self) -> usize {
        self.cursor
    }
}

#[cfg(any(test, feature = "test-util"))]
impl TileSource for ScriptedSource {
    fn pick_index(&mut self, len: usize) -> usize {
        let raw = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        raw % len
    }
}

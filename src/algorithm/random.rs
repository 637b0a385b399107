//! Randomness sources threaded explicitly through maze generation

use rand::{Rng, SeedableRng, rngs::StdRng};
use std::collections::VecDeque;

use crate::io::error::{Result, invalid_parameter, random_source_failure};

/// Source of uniform random indices
///
/// The builder draws every random decision through this trait, so a seeded or
/// scripted source makes generation fully reproducible. Failures are passed
/// back to the caller untouched.
pub trait RandomSource {
    /// Draw an index uniformly from `0..len`
    ///
    /// # Errors
    ///
    /// Returns an error if `len` is zero or the source cannot produce a value
    fn choose_index(&mut self, len: usize) -> Result<usize>;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn choose_index(&mut self, len: usize) -> Result<usize> {
        (**self).choose_index(len)
    }
}

/// Adapter exposing any `rand` generator as a [`RandomSource`]
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wrap an existing generator
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Release the wrapped generator
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Create a deterministic source from a seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn choose_index(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(invalid_parameter("len", &len, &"cannot choose from nothing"));
        }
        Ok(self.rng.random_range(0..len))
    }
}

/// Seeded standard generator, the default source for reproducible mazes
pub type SeededSource = RngSource<StdRng>;

/// Replays a fixed script of choices
///
/// Each draw consumes the next scripted value reduced modulo `len`. Drawing
/// past the end of the script is a source failure.
#[derive(Clone, Debug, Default)]
pub struct SequenceSource {
    script: VecDeque<usize>,
    consumed: usize,
}

impl SequenceSource {
    /// Create a source replaying `script` in order
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
            consumed: 0,
        }
    }

    /// Number of draws served so far
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Number of scripted values not yet drawn
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for SequenceSource {
    fn choose_index(&mut self, len: usize) -> Result<usize> {
        if len == 0 {
            return Err(invalid_parameter("len", &len, &"cannot choose from nothing"));
        }
        let value = self.script.pop_front().ok_or_else(|| {
            random_source_failure(&format!(
                "script exhausted after {} draws",
                self.consumed
            ))
        })?;
        self.consumed += 1;
        Ok(value % len)
    }
}

//! Library-backed generator.
//!
//! This module provides [`BuiltinGenerator`], a wrapper around
//! `rand::rngs::StdRng` drawing independent uniform integers from the
//! inclusive range `[0, 16384]`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::kind::GeneratorKind;
use crate::sample::Sample;
use crate::SequenceGenerator;

/// Inclusive upper bound of the builtin generator.
///
/// One value wider than the custom generators' `[0, 16384)`.
pub const BUILTIN_MAX_VALUE: u32 = 16_384;

/// Uniform integer generator backed by the standard library RNG.
///
/// # Examples
///
/// ```rust
/// use prng_generators::{BuiltinGenerator, BUILTIN_MAX_VALUE};
///
/// let mut generator = BuiltinGenerator::from_seed(42);
/// let sample = generator.generate(100);
///
/// assert_eq!(sample.len(), 100);
/// assert!(sample.iter().all(|&v| v <= BUILTIN_MAX_VALUE));
/// ```
pub struct BuiltinGenerator {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation, when one was given.
    seed: Option<u64>,
}

impl BuiltinGenerator {
    /// Creates a generator initialised with the given seed.
    ///
    /// The same seed always produces the same sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prng_generators::BuiltinGenerator;
    ///
    /// let mut a = BuiltinGenerator::from_seed(12345);
    /// let mut b = BuiltinGenerator::from_seed(12345);
    /// assert_eq!(a.generate(10), b.generate(10));
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a generator seeded from operating-system entropy.
    #[inline]
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Returns the seed used for initialisation, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draws a single value in `[0, 16384]`.
    #[inline]
    pub fn gen_value(&mut self) -> u32 {
        self.inner.gen_range(0..=BUILTIN_MAX_VALUE)
    }

    /// Fills the buffer with values in `[0, 16384]`.
    ///
    /// Empty buffers are handled gracefully (no operation).
    #[inline]
    pub fn fill(&mut self, buffer: &mut [u32]) {
        for value in buffer.iter_mut() {
            *value = self.gen_value();
        }
    }

    /// Produces `size` independent values in `[0, 16384]`.
    pub fn generate(&mut self, size: usize) -> Sample {
        debug!(size, seed = ?self.seed, "generating builtin sample");
        let mut values = vec![0; size];
        self.fill(&mut values);
        Sample::new(values)
    }
}

impl Default for BuiltinGenerator {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl SequenceGenerator for BuiltinGenerator {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::Builtin
    }

    fn generate(&mut self, size: usize) -> Sample {
        BuiltinGenerator::generate(self, size)
    }
}

/// Generates `size` values with the builtin generator, seeded from entropy.
pub fn std_randint(size: usize) -> Sample {
    BuiltinGenerator::from_entropy().generate(size)
}

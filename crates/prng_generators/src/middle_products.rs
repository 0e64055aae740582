//! Middle-products generator.
//!
//! Each step multiplies the two running seeds and a growing multiplier and
//! keeps the low 14 bits of the product:
//!
//! ```text
//! r  = (r0 * r1 * b) & 16383
//! r0 = r1 + 13
//! r1 = r  + 17
//! b  = b  + 2
//! ```
//!
//! Only the masked bits are observed, and `2^14` divides `2^64`, so wrapping
//! 64-bit multiplication yields the same output as unbounded arithmetic.

use tracing::debug;

use crate::clock::{SystemClock, TimeSource};
use crate::kind::GeneratorKind;
use crate::sample::{Sample, VALUE_MASK};
use crate::SequenceGenerator;

/// Starting value of the multiplier `b`.
pub const INITIAL_MULTIPLIER: u64 = 11;

/// Seeds are drawn from the clock modulo this period.
const SEED_PERIOD: u64 = 128;

const R0_STEP: u64 = 13;
const R1_STEP: u64 = 17;
const MULTIPLIER_STEP: u64 = 2;

/// Initial state of the middle-products recurrence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MiddleProductSeeds {
    /// First running seed.
    pub r0: u64,
    /// Second running seed.
    pub r1: u64,
    /// Multiplier accumulator.
    pub multiplier: u64,
}

impl MiddleProductSeeds {
    /// Creates explicit seeds.
    #[inline]
    pub fn new(r0: u64, r1: u64, multiplier: u64) -> Self {
        Self { r0, r1, multiplier }
    }

    /// Derives both seeds from a single reading of the wall clock:
    /// `(seconds mod 128) + 1`.
    pub fn from_clock<C: TimeSource>(clock: &C) -> Self {
        let seed = clock.unix_seconds() % SEED_PERIOD + 1;
        Self::new(seed, seed, INITIAL_MULTIPLIER)
    }
}

/// Runs the recurrence from explicit seeds.
///
/// # Examples
///
/// ```rust
/// use prng_generators::{middle_products_sequence, MiddleProductSeeds};
///
/// let sample = middle_products_sequence(MiddleProductSeeds::new(1, 1, 11), 3);
/// assert_eq!(sample.values(), &[11, 5096, 15151]);
/// ```
pub fn middle_products_sequence(seeds: MiddleProductSeeds, size: usize) -> Sample {
    let MiddleProductSeeds {
        mut r0,
        mut r1,
        mut multiplier,
    } = seeds;
    let mut values = Vec::with_capacity(size);

    for _ in 0..size {
        let r = r0.wrapping_mul(r1).wrapping_mul(multiplier) & VALUE_MASK;
        values.push(r as u32);

        // r1 takes the emitted value before either seed is bumped
        r0 = r1.wrapping_add(R0_STEP);
        r1 = r + R1_STEP;
        multiplier = multiplier.wrapping_add(MULTIPLIER_STEP);
    }

    Sample::new(values)
}

/// Middle-products generator seeded from a [`TimeSource`].
#[derive(Clone, Debug, Default)]
pub struct MiddleProductGenerator<C = SystemClock> {
    clock: C,
}

impl MiddleProductGenerator<SystemClock> {
    /// Creates a generator wired to the system clock.
    #[inline]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: TimeSource> MiddleProductGenerator<C> {
    /// Creates a generator reading the given clock.
    #[inline]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Reads the clock and derives fresh seeds.
    pub fn seeds(&self) -> MiddleProductSeeds {
        MiddleProductSeeds::from_clock(&self.clock)
    }

    /// Produces `size` values in `[0, 16384)`.
    pub fn generate(&self, size: usize) -> Sample {
        let seeds = self.seeds();
        debug!(size, r0 = seeds.r0, r1 = seeds.r1, "generating middle-products sample");
        middle_products_sequence(seeds, size)
    }
}

impl<C: TimeSource> SequenceGenerator for MiddleProductGenerator<C> {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::MiddleProducts
    }

    fn generate(&mut self, size: usize) -> Sample {
        MiddleProductGenerator::<C>::generate(self, size)
    }
}

/// Generates `size` values with the middle-products method, seeded from the
/// system clock.
pub fn middle_products(size: usize) -> Sample {
    MiddleProductGenerator::new().generate(size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::sample::MAX_VALUE;

    #[test]
    fn test_regression_vector() {
        // 1*1*11 = 11
        // (1+13) * (11+17) * 13 = 14 * 28 * 13 = 5096
        // (28+13) * (5096+17) * 15 = 41 * 5113 * 15 = 3144495 ≡ 15151 (mod 16384)
        let sample = middle_products_sequence(MiddleProductSeeds::new(1, 1, 11), 3);
        assert_eq!(sample.values(), &[11, 5_096, 15_151]);
    }

    #[test]
    fn test_seeds_from_clock() {
        let seeds = MiddleProductSeeds::from_clock(&FixedClock::new(0, 1_000));
        // 1000 mod 128 = 104
        assert_eq!(seeds, MiddleProductSeeds::new(105, 105, INITIAL_MULTIPLIER));
    }

    #[test]
    fn test_seed_range() {
        for seconds in [0_u64, 127, 128, 255, u64::MAX] {
            let seeds = MiddleProductSeeds::from_clock(&FixedClock::new(0, seconds));
            assert!((1..=128).contains(&seeds.r0));
            assert_eq!(seeds.r0, seeds.r1);
        }
    }

    #[test]
    fn test_generator_matches_sequence() {
        let clock = FixedClock::new(0, 12_345);
        let generator = MiddleProductGenerator::with_clock(clock);
        let expected = middle_products_sequence(MiddleProductSeeds::from_clock(&clock), 1_000);
        assert_eq!(generator.generate(1_000), expected);
    }

    #[test]
    fn test_long_run_stays_in_range() {
        let sample = middle_products_sequence(MiddleProductSeeds::new(128, 128, 11), 200_000);
        assert!(sample.iter().all(|&v| v <= MAX_VALUE));
    }

    #[test]
    fn test_zero_size() {
        assert!(middle_products(0).is_empty());
    }
}

//! Linear congruential generator.
//!
//! The recurrence is `r = (MULTIPLIER * r + b) mod MODULUS` starting from
//! [`INITIAL_STATE`], emitting `r mod 16384`. The increment `b` is taken from
//! the high-resolution clock once per [`generate`](LinearCongruentialGenerator::generate)
//! call, so every call reseeds independently.
//!
//! The product `MULTIPLIER * r` exceeds 64 bits, so the state is carried in
//! `u128`.

use tracing::debug;

use crate::clock::{SystemClock, TimeSource};
use crate::kind::GeneratorKind;
use crate::sample::{Sample, RANGE_SIZE};
use crate::SequenceGenerator;

/// Modulus `M = 2^63 - 1`.
pub const MODULUS: u128 = (1 << 63) - 1;

/// Multiplier `2^63`.
pub const MULTIPLIER: u128 = 1 << 63;

/// Starting state `r0` of every sequence.
pub const INITIAL_STATE: u128 = 13;

/// Clock nanoseconds per increment tick.
const NANOS_PER_TICK: u64 = 100;

/// Derives the additive increment from a clock reading in ticks.
///
/// An increment equal to the modulus is degenerate and is moved down by one.
///
/// # Examples
///
/// ```rust
/// use prng_generators::{increment_from_ticks, MODULUS};
///
/// assert_eq!(increment_from_ticks(1_000), 1_000);
/// assert_eq!(increment_from_ticks(MODULUS as u64), MODULUS - 1);
/// ```
#[inline]
pub fn increment_from_ticks(ticks: u64) -> u128 {
    let increment = u128::from(ticks);
    if increment == MODULUS {
        increment - 1
    } else {
        increment
    }
}

/// Runs the recurrence with a fixed increment.
///
/// # Examples
///
/// ```rust
/// use prng_generators::lcg_sequence;
///
/// let sample = lcg_sequence(1_000, 3);
/// assert_eq!(sample.values(), &[1_013, 2_013, 3_013]);
/// ```
pub fn lcg_sequence(increment: u128, size: usize) -> Sample {
    let mut state = INITIAL_STATE;
    let mut values = Vec::with_capacity(size);

    for _ in 0..size {
        state = (MULTIPLIER * state + increment) % MODULUS;
        values.push((state % u128::from(RANGE_SIZE)) as u32);
    }

    Sample::new(values)
}

/// Linear congruential generator seeded from a [`TimeSource`].
///
/// # Examples
///
/// ```rust
/// use prng_generators::{FixedClock, LinearCongruentialGenerator};
///
/// // 100_000 ns → increment 1_000
/// let generator = LinearCongruentialGenerator::with_clock(FixedClock::new(100_000, 0));
/// assert_eq!(generator.generate(2).values(), &[1_013, 2_013]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct LinearCongruentialGenerator<C = SystemClock> {
    clock: C,
}

impl LinearCongruentialGenerator<SystemClock> {
    /// Creates a generator wired to the system clock.
    #[inline]
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: TimeSource> LinearCongruentialGenerator<C> {
    /// Creates a generator reading the given clock.
    #[inline]
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Reads the clock and derives a fresh increment.
    pub fn increment(&self) -> u128 {
        increment_from_ticks(self.clock.high_resolution_nanos() / NANOS_PER_TICK)
    }

    /// Produces `size` values in `[0, 16384)`.
    pub fn generate(&self, size: usize) -> Sample {
        let increment = self.increment();
        debug!(size, increment = %increment, "generating linear congruential sample");
        lcg_sequence(increment, size)
    }
}

impl<C: TimeSource> SequenceGenerator for LinearCongruentialGenerator<C> {
    fn kind(&self) -> GeneratorKind {
        GeneratorKind::LinearCongruential
    }

    fn generate(&mut self, size: usize) -> Sample {
        LinearCongruentialGenerator::<C>::generate(self, size)
    }
}

/// Generates `size` values with the linear congruential method, seeded
/// from the system clock.
pub fn linear_congruent_method(size: usize) -> Sample {
    LinearCongruentialGenerator::new().generate(size)
}

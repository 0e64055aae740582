//! # PRNG Generators
//!
//! Three pseudo-random integer sequence generators sharing one output
//! contract: an ordered [`Sample`] of `u32` values drawn from the 14-bit
//! range used throughout the workspace.
//!
//! ## Generators
//!
//! | Generator | Range | Seeding |
//! |-----------|-------|---------|
//! | [`LinearCongruentialGenerator`] | `[0, 16384)` | increment from high-resolution clock |
//! | [`MiddleProductGenerator`] | `[0, 16384)` | seeds from wall-clock seconds |
//! | [`BuiltinGenerator`] | `[0, 16384]` | `rand::rngs::StdRng` |
//!
//! The builtin generator's range is inclusive of 16384 and therefore one
//! value wider than the two custom generators. This asymmetry is kept.
//!
//! ## Clock Injection
//!
//! The custom generators read the clock through the [`TimeSource`] trait.
//! Production code uses [`SystemClock`]; tests use [`FixedClock`] to pin
//! the seeds and reproduce sequences exactly.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_generators::{FixedClock, MiddleProductGenerator, SequenceGenerator};
//!
//! let mut generator = MiddleProductGenerator::with_clock(FixedClock::new(0, 0));
//! let sample = generator.generate(3);
//!
//! assert_eq!(sample.values(), &[11, 5096, 15151]);
//! ```
//!
//! ## British English Convention
//!
//! Documentation in this crate uses British English spelling
//! ("initialise", "normalise", "behaviour").

mod builtin;
mod clock;
mod kind;
mod lcg;
mod middle_products;
mod sample;

pub use builtin::{std_randint, BuiltinGenerator, BUILTIN_MAX_VALUE};
pub use clock::{FixedClock, SystemClock, TimeSource};
pub use kind::{GeneratorKind, ParseGeneratorKindError};
pub use lcg::{
    increment_from_ticks, lcg_sequence, linear_congruent_method, LinearCongruentialGenerator,
    INITIAL_STATE, MODULUS, MULTIPLIER,
};
pub use middle_products::{
    middle_products, middle_products_sequence, MiddleProductGenerator, MiddleProductSeeds,
    INITIAL_MULTIPLIER,
};
pub use sample::{Sample, MAX_VALUE, NORMALIZATION_CONSTANT, RANGE_SIZE, VALUE_MASK};

/// Common contract of every sequence generator.
///
/// A call to [`generate`](SequenceGenerator::generate) produces exactly
/// `size` values. A size of zero yields an empty sample.
pub trait SequenceGenerator {
    /// Identifies the algorithm behind this generator.
    fn kind(&self) -> GeneratorKind;

    /// Produces a sample of `size` values.
    fn generate(&mut self, size: usize) -> Sample;
}

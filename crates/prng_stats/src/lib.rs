//! # PRNG Statistics
//!
//! Evaluation engine for generated samples:
//!
//! - [`moments`]: mean, population variance, standard deviation and
//!   coefficient of variation of the normalised sample
//! - [`critical`]: the critical-value table consumed by the chi-square test
//! - [`chi_square`]: Sturges'-rule binning and the goodness-of-fit verdicts
//! - [`analysis`]: the combined per-sample report
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_generators::BuiltinGenerator;
//! use prng_stats::{analyze, CriticalValueTable};
//!
//! let table = CriticalValueTable::standard();
//! let sample = BuiltinGenerator::from_seed(7).generate(1_000);
//! let report = analyze(&sample, &table).unwrap();
//!
//! assert_eq!(report.sample_size, 1_000);
//! assert!(report.chi_square.is_finite());
//! ```

pub mod analysis;
pub mod chi_square;
pub mod critical;
pub mod error;
pub mod moments;

pub use analysis::{analyze, round_to, SampleReport, DISPLAY_DIGITS};
pub use chi_square::{
    sturges_interval_count, ChiSquareResult, ChiSquareTest, Interval, IntervalPartition,
    Significance, Verdict,
};
pub use critical::{CriticalValueRow, CriticalValueTable, SignificanceLevel};
pub use error::{Result, StatsError, TableError};
pub use moments::{coefficient_of_variation, mean, std_deviation, variance, Moments};

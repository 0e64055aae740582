//! Error types for sample evaluation.
//!
//! This module provides:
//! - `StatsError`: failures of the moment statistics and the chi-square test
//! - `TableError`: failures building or loading a critical-value table

use thiserror::Error;

/// Result alias for evaluation operations.
pub type Result<T> = std::result::Result<T, StatsError>;

/// Categorised evaluation errors.
///
/// # Examples
/// ```
/// use prng_stats::StatsError;
///
/// let err = StatsError::EmptySample;
/// assert_eq!(err.to_string(), "Empty sample: at least one value is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatsError {
    /// Mean, variance and the chi-square test are undefined for no values.
    #[error("Empty sample: at least one value is required")]
    EmptySample,

    /// The table has no row for the degrees of freedom implied by the
    /// interval count.
    #[error(
        "Unsupported interval count {intervals}: no critical values for {degrees_of_freedom} \
         degrees of freedom (table covers {min_degrees}..={max_degrees})"
    )]
    UnsupportedIntervalCount {
        /// Interval count from Sturges' rule
        intervals: usize,
        /// `intervals - 1`
        degrees_of_freedom: usize,
        /// Smallest degrees of freedom in the table
        min_degrees: usize,
        /// Largest degrees of freedom in the table
        max_degrees: usize,
    },
}

/// Critical-value table construction errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    /// Reading the table file failed.
    #[error("Critical table IO error: {0}")]
    Io(String),

    /// The table file is not valid TOML or has the wrong shape.
    #[error("Critical table parse error: {0}")]
    Parse(String),

    /// A table must hold at least one row.
    #[error("Critical table has no rows")]
    Empty,

    /// Two rows share the same degrees of freedom.
    #[error("Duplicate row for {0} degrees of freedom")]
    DuplicateRow(usize),

    /// Thresholds must be finite, positive and strictly increasing from the
    /// 0.99 level to the 0.90 level.
    #[error("Invalid row for {degrees_of_freedom} degrees of freedom: {values:?}")]
    InvalidRow {
        /// Row key
        degrees_of_freedom: usize,
        /// Offending thresholds
        values: [f64; 3],
    },
}

//! Combined per-sample report: moment statistics on the normalised view
//! plus the chi-square test on raw values.

use std::fmt;

use prng_generators::Sample;
use serde::Serialize;
use tracing::info;

use crate::chi_square::{ChiSquareTest, Verdict};
use crate::critical::CriticalValueTable;
use crate::error::Result;
use crate::moments::Moments;

/// Decimal digits kept when a report is displayed.
pub const DISPLAY_DIGITS: i32 = 6;

/// Rounds `value` to `digits` decimal places.
///
/// # Examples
/// ```
/// use prng_stats::round_to;
///
/// assert_eq!(round_to(0.123_456_789, 6), 0.123457);
/// ```
#[inline]
pub fn round_to(value: f64, digits: i32) -> f64 {
    let scale = 10f64.powi(digits);
    (value * scale).round() / scale
}

/// Everything reported about one sample.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SampleReport {
    /// Number of values
    pub sample_size: usize,
    /// Mean of the normalised sample
    pub mean: f64,
    /// Population variance of the normalised sample
    pub variance: f64,
    /// Standard deviation of the normalised sample
    pub std_deviation: f64,
    /// Coefficient of variation of the normalised sample
    pub coefficient_of_variation: f64,
    /// Chi-square statistic
    pub chi_square: f64,
    /// Interval count used by the chi-square test
    pub intervals: usize,
    /// Uniformity verdict
    pub uniformity: Verdict,
    /// Randomness verdict
    pub randomness: Verdict,
}

impl SampleReport {
    /// Returns a copy with every float rounded to [`DISPLAY_DIGITS`].
    pub fn rounded(&self) -> Self {
        let r = |v: f64| round_to(v, DISPLAY_DIGITS);
        Self {
            mean: r(self.mean),
            variance: r(self.variance),
            std_deviation: r(self.std_deviation),
            coefficient_of_variation: r(self.coefficient_of_variation),
            chi_square: r(self.chi_square),
            ..self.clone()
        }
    }
}

impl fmt::Display for SampleReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.rounded();
        writeln!(f, "Sample size: {}", r.sample_size)?;
        writeln!(f, "Mean: {}", r.mean)?;
        writeln!(f, "Variance: {}", r.variance)?;
        writeln!(f, "Standard deviation: {}", r.std_deviation)?;
        writeln!(f, "Coefficient of variation: {}", r.coefficient_of_variation)?;
        writeln!(f, "Chi-square statistic: {}", r.chi_square)?;
        writeln!(f, "Uniformity: {}", r.uniformity)?;
        write!(f, "Randomness: {}", r.randomness)
    }
}

/// Computes the moments and runs the chi-square test for `sample`.
///
/// # Errors
/// Propagates [`StatsError`](crate::StatsError) from either stage: an empty
/// sample, or a size whose interval count the table does not cover.
pub fn analyze(sample: &Sample, table: &CriticalValueTable) -> Result<SampleReport> {
    let moments = Moments::of_sample(sample)?;
    let chi = ChiSquareTest::new(table).evaluate(sample.values())?;

    info!(
        sample_size = sample.len(),
        statistic = chi.statistic,
        uniformity = %chi.uniformity,
        randomness = %chi.randomness,
        "sample analysed"
    );

    Ok(SampleReport {
        sample_size: sample.len(),
        mean: moments.mean,
        variance: moments.variance,
        std_deviation: moments.std_deviation,
        coefficient_of_variation: moments.coefficient_of_variation,
        chi_square: chi.statistic,
        intervals: chi.intervals,
        uniformity: chi.uniformity,
        randomness: chi.randomness,
    })
}

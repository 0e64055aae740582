//! Descriptive moment statistics.
//!
//! All functions operate on the normalised sample (raw values divided by
//! 16353) and use the population variance (divide by N).

use prng_generators::{Sample, NORMALIZATION_CONSTANT};
use serde::Serialize;

use crate::error::{Result, StatsError};

/// Arithmetic mean.
///
/// # Errors
/// Returns [`StatsError::EmptySample`] for an empty slice.
///
/// # Examples
/// ```
/// use prng_stats::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]).unwrap(), 2.0);
/// ```
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(StatsError::EmptySample);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance: sum of squared deviations divided by N.
///
/// # Errors
/// Returns [`StatsError::EmptySample`] for an empty slice.
pub fn variance(values: &[f64]) -> Result<f64> {
    let m = mean(values)?;
    let sum_sq: f64 = values.iter().map(|&x| (x - m) * (x - m)).sum();
    Ok(sum_sq / values.len() as f64)
}

/// Square root of the population variance.
pub fn std_deviation(values: &[f64]) -> Result<f64> {
    Ok(variance(values)?.sqrt())
}

/// Standard deviation divided by the mean.
///
/// A zero mean yields a non-finite value, as IEEE division does.
pub fn coefficient_of_variation(values: &[f64]) -> Result<f64> {
    Ok(std_deviation(values)? / mean(values)?)
}

/// The four moment statistics of one sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Moments {
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    /// Standard deviation
    pub std_deviation: f64,
    /// Coefficient of variation
    pub coefficient_of_variation: f64,
}

impl Moments {
    /// Computes all four statistics of already normalised values.
    pub fn of_values(values: &[f64]) -> Result<Self> {
        let mean = mean(values)?;
        let variance =
            values.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / values.len() as f64;
        let std_deviation = variance.sqrt();

        Ok(Self {
            mean,
            variance,
            std_deviation,
            coefficient_of_variation: std_deviation / mean,
        })
    }

    /// Computes the statistics of the normalised view of `sample`.
    ///
    /// Sums are accumulated exactly over the raw integers and rescaled by
    /// the normalisation constant afterwards, so a constant sample has a
    /// variance of exactly zero.
    pub fn of_sample(sample: &Sample) -> Result<Self> {
        if sample.is_empty() {
            return Err(StatsError::EmptySample);
        }

        let n = sample.len() as u128;
        let (sum, sum_sq) = sample.iter().fold((0u128, 0u128), |(s, sq), &v| {
            let v = u128::from(v);
            (s + v, sq + v * v)
        });

        // n·Σv² − (Σv)² is N² times the raw population variance
        let scaled_variance = n * sum_sq - sum * sum;
        let mean = sum as f64 / n as f64 / NORMALIZATION_CONSTANT;
        let variance = scaled_variance as f64
            / (n as f64 * n as f64)
            / (NORMALIZATION_CONSTANT * NORMALIZATION_CONSTANT);
        let std_deviation = variance.sqrt();

        Ok(Self {
            mean,
            variance,
            std_deviation,
            coefficient_of_variation: std_deviation / mean,
        })
    }
}

//! Chi-square goodness-of-fit test against the uniform distribution.
//!
//! ## Procedure
//!
//! 1. `k = 1 + floor(log2 N)` intervals (Sturges' rule).
//! 2. Raw boundaries `b_j = j * 16383 / k` for `j = 0..=k`.
//! 3. Integer endpoints `[ceil(b_j), floor(b_{j+1})]`, where an integral
//!    shared boundary belongs to the interval on its right.
//! 4. The last raw boundary is widened by one so that 16383 is binned.
//! 5. `p_j = (right - left + 1) / 16384`.
//! 6. Values are binned with `b_j <= v < b_{j+1}`.
//! 7. `V = sum(count_j^2 / (N * p_j)) - N`.
//! 8. `V` is compared with the critical-value row for `k - 1` degrees of
//!    freedom.
//!
//! ## Verdicts
//!
//! | Statistic | Uniformity | Randomness |
//! |-----------|------------|------------|
//! | `V < c99` | accepted (>= 0.99) | rejected |
//! | `V > c90` | rejected | rejected |
//! | otherwise | accepted (bracket) | accepted (bracket) |
//!
//! A statistic below `c99` fits the hypothesis too well to be random.

use std::fmt;

use prng_generators::{MAX_VALUE, RANGE_SIZE};
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::critical::{CriticalValueRow, CriticalValueTable, SignificanceLevel};
use crate::error::{Result, StatsError};

/// Sturges' rule: `1 + floor(log2 n)`. Zero values yield zero intervals.
///
/// # Examples
/// ```
/// use prng_stats::sturges_interval_count;
///
/// assert_eq!(sturges_interval_count(50), 6);
/// assert_eq!(sturges_interval_count(1_024), 11);
/// assert_eq!(sturges_interval_count(2_000_000), 21);
/// ```
#[inline]
pub fn sturges_interval_count(n: usize) -> usize {
    match n.checked_ilog2() {
        Some(log) => 1 + log as usize,
        None => 0,
    }
}

/// One sub-range of the value domain.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Interval {
    /// Raw lower boundary (inclusive).
    pub lower: f64,
    /// Raw upper boundary (exclusive).
    pub upper: f64,
    /// Smallest integer value in the interval.
    pub left: u32,
    /// Largest integer value in the interval.
    pub right: u32,
    /// Occurrence probability under the uniform hypothesis.
    pub probability: f64,
}

impl Interval {
    /// Returns `true` when `value` falls inside the raw boundaries.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.lower <= value && value < self.upper
    }
}

/// Partition of `[0, 16384)` into equal-width intervals.
///
/// # Examples
/// ```
/// use prng_stats::IntervalPartition;
///
/// let partition = IntervalPartition::new(6);
/// assert_eq!(partition.len(), 6);
/// assert_eq!(partition.locate(0), Some(0));
/// assert_eq!(partition.locate(16_383), Some(5));
/// assert_eq!(partition.locate(16_384), None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct IntervalPartition {
    intervals: Vec<Interval>,
}

impl IntervalPartition {
    /// Builds a partition of `k` intervals. `k = 0` yields an empty
    /// partition.
    pub fn new(k: usize) -> Self {
        let span = f64::from(MAX_VALUE);
        let domain = f64::from(RANGE_SIZE);
        let boundary = |j: usize| j as f64 * span / k as f64;

        let mut intervals: Vec<Interval> = (0..k)
            .map(|j| {
                let lower = boundary(j);
                let upper = boundary(j + 1);
                let left = lower.ceil();
                let mut right = upper.floor();
                if upper == right && j + 1 < k {
                    right -= 1.0;
                }

                Interval {
                    lower,
                    upper,
                    left: left as u32,
                    right: right as u32,
                    probability: (right - left + 1.0) / domain,
                }
            })
            .collect();

        if let Some(last) = intervals.last_mut() {
            last.upper += 1.0;
        }

        Self { intervals }
    }

    /// Builds the partition Sturges' rule picks for `n` values.
    pub fn for_sample_size(n: usize) -> Self {
        Self::new(sturges_interval_count(n))
    }

    /// Number of intervals.
    #[inline]
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// Returns `true` for a partition with no intervals.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// The intervals in ascending order.
    #[inline]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Sum of the interval probabilities.
    pub fn total_probability(&self) -> f64 {
        self.intervals.iter().map(|i| i.probability).sum()
    }

    /// Index of the interval holding `value`, if any.
    pub fn locate(&self, value: u32) -> Option<usize> {
        let x = f64::from(value);
        let index = self.intervals.partition_point(|i| i.upper <= x);
        self.intervals
            .get(index)
            .filter(|i| i.contains(x))
            .map(|_| index)
    }

    /// Counts how many values land in each interval. Values outside every
    /// interval are returned separately.
    pub fn histogram(&self, values: &[u32]) -> (Vec<u64>, usize) {
        let mut counts = vec![0u64; self.intervals.len()];
        let mut outside = 0;

        for &value in values {
            match self.locate(value) {
                Some(index) => counts[index] += 1,
                None => outside += 1,
            }
        }

        (counts, outside)
    }
}

/// Significance annotation attached to an accepted hypothesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Significance {
    /// Accepted at this level or higher.
    AtLeast(SignificanceLevel),
    /// Accepted within `(lower, upper]`.
    Between {
        /// Exclusive lower level
        lower: SignificanceLevel,
        /// Inclusive upper level
        upper: SignificanceLevel,
    },
}

impl fmt::Display for Significance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Significance::AtLeast(level) => write!(f, "significance level >= {}", level),
            Significance::Between { lower, upper } => {
                write!(f, "significance level ({}, {}]", lower, upper)
            }
        }
    }
}

/// Outcome for one hypothesis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    /// Hypothesis accepted, with the level bracket that produced acceptance.
    Accepted(Significance),
    /// Hypothesis rejected.
    Rejected,
}

impl Verdict {
    /// Returns `true` for [`Verdict::Accepted`].
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// The attached significance annotation, if any.
    #[inline]
    pub fn significance(&self) -> Option<Significance> {
        match self {
            Verdict::Accepted(s) => Some(*s),
            Verdict::Rejected => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Accepted(significance) => write!(f, "accepted: {}", significance),
            Verdict::Rejected => f.write_str("rejected"),
        }
    }
}

impl Serialize for Verdict {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Statistic and verdicts of one chi-square test.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChiSquareResult {
    /// The statistic `V`.
    pub statistic: f64,
    /// Interval count `k`.
    pub intervals: usize,
    /// `k - 1`.
    pub degrees_of_freedom: usize,
    /// Observed counts per interval.
    pub observed: Vec<u64>,
    /// Values that fell outside every interval.
    pub out_of_range: usize,
    /// Uniformity hypothesis outcome.
    pub uniformity: Verdict,
    /// Randomness hypothesis outcome.
    pub randomness: Verdict,
}

/// Chi-square engine bound to a critical-value table.
#[derive(Clone, Copy, Debug)]
pub struct ChiSquareTest<'a> {
    table: &'a CriticalValueTable,
}

impl<'a> ChiSquareTest<'a> {
    /// Creates an engine consulting `table`.
    #[inline]
    pub fn new(table: &'a CriticalValueTable) -> Self {
        Self { table }
    }

    /// Runs the test on raw sample values.
    ///
    /// # Errors
    /// - [`StatsError::EmptySample`] for no values
    /// - [`StatsError::UnsupportedIntervalCount`] when the table has no row
    ///   for `k - 1` degrees of freedom
    pub fn evaluate(&self, values: &[u32]) -> Result<ChiSquareResult> {
        if values.is_empty() {
            return Err(StatsError::EmptySample);
        }

        let k = sturges_interval_count(values.len());
        let row = self.table.row_for_intervals(k)?;
        let partition = IntervalPartition::new(k);
        let (observed, out_of_range) = partition.histogram(values);

        let statistic = chi_square_statistic(&observed, partition.intervals(), values.len());
        let (uniformity, randomness) = decide(row, statistic);

        debug!(
            n = values.len(),
            intervals = k,
            statistic,
            out_of_range,
            uniformity = %uniformity,
            randomness = %randomness,
            "chi-square test evaluated"
        );

        Ok(ChiSquareResult {
            statistic,
            intervals: k,
            degrees_of_freedom: k - 1,
            observed,
            out_of_range,
            uniformity,
            randomness,
        })
    }
}

/// `V = sum(count_j^2 / (N * p_j)) - N`.
fn chi_square_statistic(observed: &[u64], intervals: &[Interval], n: usize) -> f64 {
    let n = n as f64;
    let sum: f64 = observed
        .iter()
        .zip(intervals)
        .map(|(&count, interval)| {
            let count = count as f64;
            count * count / (n * interval.probability)
        })
        .sum();
    sum - n
}

/// Maps the statistic onto the uniformity and randomness verdicts.
fn decide(row: &CriticalValueRow, statistic: f64) -> (Verdict, Verdict) {
    let levels = SignificanceLevel::ALL;
    let highest = levels[0];
    let lowest = levels[levels.len() - 1];

    if statistic < row.threshold(highest) {
        return (
            Verdict::Accepted(Significance::AtLeast(highest)),
            Verdict::Rejected,
        );
    }
    if statistic > row.threshold(lowest) {
        return (Verdict::Rejected, Verdict::Rejected);
    }

    // The last bracket whose lower threshold is reached wins, so a statistic
    // sitting exactly on c95 reports (0.90, 0.95].
    let i = (0..levels.len() - 1)
        .rev()
        .find(|&i| row.threshold(levels[i]) <= statistic)
        .unwrap_or(0);
    let bracket = Verdict::Accepted(Significance::Between {
        lower: levels[i + 1],
        upper: levels[i],
    });
    (bracket, bracket)
}

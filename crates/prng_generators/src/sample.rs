//! Sample container shared by all generators.

use serde::Serialize;

/// Number of distinct values produced by the custom generators.
pub const RANGE_SIZE: u32 = 16_384;

/// Largest value produced by the custom generators.
pub const MAX_VALUE: u32 = RANGE_SIZE - 1;

/// Bit mask selecting the low 14 bits (`2^14 - 1`).
pub const VALUE_MASK: u64 = MAX_VALUE as u64;

/// Divisor used to rescale raw values into roughly `[0, 1]` for the
/// moment statistics.
pub const NORMALIZATION_CONSTANT: f64 = 16_353.0;

/// An ordered, immutable sequence of generated integers.
///
/// # Examples
///
/// ```rust
/// use prng_generators::Sample;
///
/// let sample = Sample::from(vec![0, 16353]);
/// assert_eq!(sample.len(), 2);
/// assert_eq!(sample.normalized(), vec![0.0, 1.0]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<u32>,
}

impl Sample {
    /// Wraps an already generated sequence.
    #[inline]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values }
    }

    /// Returns the raw values.
    #[inline]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Returns the number of values.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` when the sample holds no values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over the raw values in generation order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, u32> {
        self.values.iter()
    }

    /// Returns the normalised view: every value divided by
    /// [`NORMALIZATION_CONSTANT`].
    pub fn normalized(&self) -> Vec<f64> {
        self.values
            .iter()
            .map(|&v| f64::from(v) / NORMALIZATION_CONSTANT)
            .collect()
    }

    /// Consumes the sample and returns the underlying vector.
    #[inline]
    pub fn into_vec(self) -> Vec<u32> {
        self.values
    }
}

impl From<Vec<u32>> for Sample {
    fn from(values: Vec<u32>) -> Self {
        Self::new(values)
    }
}

impl FromIterator<u32> for Sample {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl AsRef<[u32]> for Sample {
    fn as_ref(&self) -> &[u32] {
        &self.values
    }
}

impl<'a> IntoIterator for &'a Sample {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

//! Chi-square critical-value table.
//!
//! Each row holds the thresholds at the 0.99, 0.95 and 0.90 significance
//! levels for one number of degrees of freedom. Thresholds increase as the
//! significance level decreases.
//!
//! The table is an immutable resource handed to the chi-square engine.
//! [`CriticalValueTable::standard`] carries the rows for 5 to 22 degrees of
//! freedom; a replacement can be loaded from TOML:
//!
//! ```toml
//! [[rows]]
//! degrees_of_freedom = 5
//! values = [0.55, 1.15, 1.61]
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{StatsError, TableError};

/// Significance levels covered by each table row, highest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SignificanceLevel {
    /// 0.99
    P99,
    /// 0.95
    P95,
    /// 0.90
    P90,
}

impl SignificanceLevel {
    /// Levels in row order.
    pub const ALL: [SignificanceLevel; 3] = [
        SignificanceLevel::P99,
        SignificanceLevel::P95,
        SignificanceLevel::P90,
    ];

    /// Numeric level.
    pub fn value(&self) -> f64 {
        match self {
            SignificanceLevel::P99 => 0.99,
            SignificanceLevel::P95 => 0.95,
            SignificanceLevel::P90 => 0.90,
        }
    }

    /// Position of this level inside a [`CriticalValueRow`].
    pub fn index(&self) -> usize {
        match self {
            SignificanceLevel::P99 => 0,
            SignificanceLevel::P95 => 1,
            SignificanceLevel::P90 => 2,
        }
    }
}

impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.value())
    }
}

/// Thresholds `[c99, c95, c90]` for one number of degrees of freedom.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CriticalValueRow {
    values: [f64; 3],
}

impl CriticalValueRow {
    /// Creates a row from thresholds in level order.
    #[inline]
    pub const fn new(c99: f64, c95: f64, c90: f64) -> Self {
        Self {
            values: [c99, c95, c90],
        }
    }

    /// Returns the threshold for `level`.
    #[inline]
    pub fn threshold(&self, level: SignificanceLevel) -> f64 {
        self.values[level.index()]
    }

    /// Returns all thresholds in level order.
    #[inline]
    pub fn values(&self) -> [f64; 3] {
        self.values
    }

    fn is_valid(&self) -> bool {
        self.values.iter().all(|v| v.is_finite() && *v > 0.0)
            && self.values.windows(2).all(|w| w[0] < w[1])
    }
}

/// Degrees-of-freedom keyed lookup of critical values.
///
/// # Examples
///
/// ```rust
/// use prng_stats::{CriticalValueTable, SignificanceLevel};
///
/// let table = CriticalValueTable::standard();
/// let row = table.row(5).unwrap();
/// assert_eq!(row.threshold(SignificanceLevel::P99), 0.55);
/// assert!(table.row(23).is_err());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CriticalValueTable {
    rows: BTreeMap<usize, CriticalValueRow>,
}

#[derive(Deserialize)]
struct TableFile {
    rows: Vec<RowEntry>,
}

#[derive(Deserialize)]
struct RowEntry {
    degrees_of_freedom: usize,
    values: [f64; 3],
}

const STANDARD_ROWS: [(usize, CriticalValueRow); 18] = [
    (5, CriticalValueRow::new(0.55, 1.15, 1.61)),
    (6, CriticalValueRow::new(0.87, 1.64, 2.20)),
    (7, CriticalValueRow::new(1.24, 2.18, 2.83)),
    (8, CriticalValueRow::new(1.65, 2.73, 3.49)),
    (9, CriticalValueRow::new(2.09, 3.33, 4.17)),
    (10, CriticalValueRow::new(2.56, 3.94, 4.87)),
    (11, CriticalValueRow::new(3.05, 4.57, 5.58)),
    (12, CriticalValueRow::new(3.57, 5.23, 6.30)),
    (13, CriticalValueRow::new(4.11, 5.89, 7.04)),
    (14, CriticalValueRow::new(4.66, 6.57, 7.79)),
    (15, CriticalValueRow::new(5.23, 7.26, 8.5)),
    (16, CriticalValueRow::new(5.81, 7.98, 9.31)),
    (17, CriticalValueRow::new(6.41, 8.67, 10.09)),
    (18, CriticalValueRow::new(7.02, 9.39, 10.87)),
    (19, CriticalValueRow::new(7.63, 10.1, 11.7)),
    (20, CriticalValueRow::new(8.26, 10.9, 12.4)),
    (21, CriticalValueRow::new(8.90, 11.56, 13.2)),
    (22, CriticalValueRow::new(9.54, 12.34, 14.04)),
];

impl CriticalValueTable {
    /// The standard table for 5 to 22 degrees of freedom.
    pub fn standard() -> Self {
        Self {
            rows: STANDARD_ROWS.into_iter().collect(),
        }
    }

    /// Builds a table from `(degrees_of_freedom, row)` pairs.
    ///
    /// # Errors
    /// Rejects empty input, duplicate keys and rows whose thresholds are not
    /// finite, positive and strictly increasing.
    pub fn from_rows<I>(rows: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (usize, CriticalValueRow)>,
    {
        let mut table = BTreeMap::new();
        for (df, row) in rows {
            if !row.is_valid() {
                return Err(TableError::InvalidRow {
                    degrees_of_freedom: df,
                    values: row.values(),
                });
            }
            if table.insert(df, row).is_some() {
                return Err(TableError::DuplicateRow(df));
            }
        }

        if table.is_empty() {
            return Err(TableError::Empty);
        }
        Ok(Self { rows: table })
    }

    /// Parses a table from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, TableError> {
        let file: TableFile =
            toml::from_str(content).map_err(|e| TableError::Parse(e.to_string()))?;
        Self::from_rows(
            file.rows
                .into_iter()
                .map(|r| (r.degrees_of_freedom, CriticalValueRow { values: r.values })),
        )
    }

    /// Loads a table from a TOML file.
    pub fn load(path: &Path) -> Result<Self, TableError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| TableError::Io(e.to_string()))?;
        let table = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), rows = table.len(), "loaded critical-value table");
        Ok(table)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always `false` for a constructed table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Smallest and largest degrees of freedom covered.
    pub fn degrees_range(&self) -> (usize, usize) {
        let min = self.rows.keys().next().copied().unwrap_or_default();
        let max = self.rows.keys().next_back().copied().unwrap_or_default();
        (min, max)
    }

    /// Iterates over rows in ascending degrees of freedom.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &CriticalValueRow)> {
        self.rows.iter().map(|(df, row)| (*df, row))
    }

    /// Looks up the row for `degrees_of_freedom`.
    pub fn row(&self, degrees_of_freedom: usize) -> Result<&CriticalValueRow, StatsError> {
        self.rows
            .get(&degrees_of_freedom)
            .ok_or_else(|| self.unsupported(degrees_of_freedom + 1))
    }

    /// Looks up the row for a partition of `intervals` intervals, i.e.
    /// `intervals - 1` degrees of freedom.
    pub fn row_for_intervals(&self, intervals: usize) -> Result<&CriticalValueRow, StatsError> {
        match intervals.checked_sub(1) {
            Some(df) => self.row(df),
            None => Err(self.unsupported(intervals)),
        }
    }

    fn unsupported(&self, intervals: usize) -> StatsError {
        let (min_degrees, max_degrees) = self.degrees_range();
        StatsError::UnsupportedIntervalCount {
            intervals,
            degrees_of_freedom: intervals.saturating_sub(1),
            min_degrees,
            max_degrees,
        }
    }
}

impl Default for CriticalValueTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_standard_covers_5_to_22() {
        let table = CriticalValueTable::standard();
        assert_eq!(table.len(), 18);
        assert_eq!(table.degrees_range(), (5, 22));
        for df in 5..=22 {
            assert!(table.row(df).is_ok(), "missing row for {} degrees of freedom", df);
        }
    }

    #[test]
    fn test_standard_rows_are_valid() {
        let table = CriticalValueTable::standard();
        let rebuilt = CriticalValueTable::from_rows(table.iter().map(|(df, r)| (df, *r))).unwrap();
        assert_eq!(rebuilt, table);
    }

    #[test]
    fn test_interval_bounds() {
        let table = CriticalValueTable::standard();
        assert!(table.row_for_intervals(6).is_ok());
        assert!(table.row_for_intervals(23).is_ok());

        for k in [0, 4, 24] {
            match table.row_for_intervals(k) {
                Err(StatsError::UnsupportedIntervalCount { intervals, .. }) => {
                    assert_eq!(intervals, k)
                }
                other => panic!("expected unsupported interval count for k={}, got {:?}", k, other),
            }
        }
    }

    #[test]
    fn test_threshold_lookup() {
        let row = CriticalValueTable::standard().row(14).copied().unwrap();
        assert_eq!(row.threshold(SignificanceLevel::P99), 4.66);
        assert_eq!(row.threshold(SignificanceLevel::P95), 6.57);
        assert_eq!(row.threshold(SignificanceLevel::P90), 7.79);
    }

    #[test]
    fn test_level_display() {
        let shown: Vec<String> = SignificanceLevel::ALL.iter().map(|l| l.to_string()).collect();
        assert_eq!(shown, vec!["0.99", "0.95", "0.90"]);
    }

    #[test]
    fn test_from_toml_str() {
        let table = CriticalValueTable::from_toml_str(
            r#"
            [[rows]]
            degrees_of_freedom = 2
            values = [0.02, 0.10, 0.21]

            [[rows]]
            degrees_of_freedom = 3
            values = [0.11, 0.35, 0.58]
            "#,
        )
        .unwrap();

        assert_eq!(table.degrees_range(), (2, 3));
        assert_eq!(table.row(2).unwrap().values(), [0.02, 0.10, 0.21]);
    }

    #[test]
    fn test_rejects_decreasing_row() {
        let result = CriticalValueTable::from_rows([(5, CriticalValueRow::new(2.0, 1.0, 3.0))]);
        assert!(matches!(
            result,
            Err(TableError::InvalidRow { degrees_of_freedom: 5, .. })
        ));
    }

    #[test]
    fn test_rejects_duplicates_and_empty() {
        let row = CriticalValueRow::new(1.0, 2.0, 3.0);
        assert_eq!(
            CriticalValueTable::from_rows([(5, row), (5, row)]),
            Err(TableError::DuplicateRow(5))
        );
        assert_eq!(CriticalValueTable::from_rows([]), Err(TableError::Empty));
    }

    #[test]
    fn test_parse_error() {
        let result = CriticalValueTable::from_toml_str("rows = 3");
        assert!(matches!(result, Err(TableError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[rows]]\ndegrees_of_freedom = 9\nvalues = [2.09, 3.33, 4.17]").unwrap();

        let table = CriticalValueTable::load(file.path()).unwrap();
        assert_eq!(table.len(), 1);

        let missing = CriticalValueTable::load(Path::new("/nonexistent/critical.toml"));
        assert!(matches!(missing, Err(TableError::Io(_))));
    }
}

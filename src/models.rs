//! Core data structures for Cary export parsing.
//!
//! Defines the labeled spectral table, extracted profiles, collection-time
//! logs, and the option enums selecting between loader and time-log modes.

use crate::constants::TIME_SERIES_NAME;
use crate::error::{CaryError, Result};

/// X-axis handling mode for the table loader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisMode {
    /// All series share identical x-axis sample points (fast path).
    ///
    /// The shared axis is never re-verified by default; series recorded with
    /// mismatched axes load silently misaligned.
    Shared,

    /// Each series carries its own x-axis values; the table index becomes the
    /// sorted union of all of them, with gaps where a series has no sample.
    PerSeries,
}

/// Output basis for collection times
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeReference {
    /// Seconds relative to the earliest record (the first spectrum reads 0).
    Relative,

    /// Raw epoch seconds, suitable for combining logs from several files.
    Absolute,
}

/// A labeled table of spectra loaded from a Cary export
///
/// Rows are indexed by the x-axis value (wavelength, time, ...), columns by
/// series title in file order. Missing cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralTable {
    index: Vec<f64>,
    titles: Vec<String>,
    columns: Vec<Vec<Option<f64>>>,
}

impl SpectralTable {
    /// Build a table from parallel parts.
    ///
    /// Invariant (upheld by the loader): `columns` is parallel to `titles`
    /// and every column has the same length as `index`.
    pub(crate) fn new(index: Vec<f64>, titles: Vec<String>, columns: Vec<Vec<Option<f64>>>) -> Self {
        Self {
            index,
            titles,
            columns,
        }
    }

    /// Number of rows (x-axis sample points)
    pub fn n_rows(&self) -> usize {
        self.index.len()
    }

    /// Number of series (columns)
    pub fn n_series(&self) -> usize {
        self.titles.len()
    }

    /// The x-axis values, in stored order
    pub fn index(&self) -> &[f64] {
        &self.index
    }

    /// Series titles, in file order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Values of the first series with the given title
    pub fn column(&self, title: &str) -> Option<&[Option<f64>]> {
        self.titles
            .iter()
            .position(|t| t == title)
            .map(|i| self.columns[i].as_slice())
    }

    /// One row across all series, in column order
    pub fn row(&self, row: usize) -> Vec<Option<f64>> {
        self.columns.iter().map(|col| col[row]).collect()
    }

    /// Single cell by row and series position
    pub fn value(&self, row: usize, series: usize) -> Option<f64> {
        self.columns[series][row]
    }

    /// Replace all column titles, e.g. with collection times.
    ///
    /// Fails if the replacement count does not match the series count.
    pub fn relabel(&mut self, titles: Vec<String>) -> Result<()> {
        if titles.len() != self.titles.len() {
            return Err(CaryError::schema_mismatch(
                "relabel",
                self.titles.len(),
                titles.len(),
            ));
        }
        self.titles = titles;
        Ok(())
    }
}

/// The axis a [`Profile`] is indexed by
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileAxis {
    /// The source table's column titles (default).
    Titles(Vec<String>),

    /// A caller-supplied replacement axis, parallel to the values.
    Values(Vec<f64>),
}

/// A single extracted row of a [`SpectralTable`]
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    /// The x-axis value of the selected row.
    pub x: f64,

    /// The row's values, one per series, in column order.
    pub values: Vec<Option<f64>>,

    /// The axis the values are indexed by.
    pub axis: ProfileAxis,
}

impl Profile {
    /// Number of values in the profile
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the profile holds no values
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Collection times extracted from the log section of an export
///
/// A named series of integer seconds indexed by series title, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeLog {
    titles: Vec<String>,
    seconds: Vec<i64>,
}

impl TimeLog {
    pub(crate) fn new(titles: Vec<String>, seconds: Vec<i64>) -> Self {
        Self { titles, seconds }
    }

    /// Name of the series
    pub fn name(&self) -> &'static str {
        TIME_SERIES_NAME
    }

    /// Number of timed records
    pub fn len(&self) -> usize {
        self.titles.len()
    }

    /// Whether the log holds no records
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Record titles, in file order
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Time values, parallel to the titles
    pub fn seconds(&self) -> &[i64] {
        &self.seconds
    }

    /// Time of the first record with the given title
    pub fn get(&self, title: &str) -> Option<i64> {
        self.titles
            .iter()
            .position(|t| t == title)
            .map(|i| self.seconds[i])
    }

    /// Earliest time in the log, if any
    pub fn min_seconds(&self) -> Option<i64> {
        self.seconds.iter().copied().min()
    }

    /// Iterate over `(title, seconds)` pairs in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.titles
            .iter()
            .map(String::as_str)
            .zip(self.seconds.iter().copied())
    }

    /// Rebase the log so the earliest record reads 0.
    ///
    /// Useful after combining absolute logs from several files.
    pub fn to_relative(&self) -> TimeLog {
        let min = self.min_seconds().unwrap_or(0);
        TimeLog {
            titles: self.titles.clone(),
            seconds: self.seconds.iter().map(|s| s - min).collect(),
        }
    }
}

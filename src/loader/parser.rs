//! Core Cary table loader
//!
//! Reads the tabular section of an export into a [`SpectralTable`]. The file
//! is read whole, prescanned line-by-line for titles and the data row count,
//! and the data block is then handed to the CSV reader.

use std::fs;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, info};

use super::field_parsers::{parse_optional_f64, parse_required_f64};
use super::prescan::Prescan;
use crate::error::{CaryError, Result};
use crate::models::{AxisMode, SpectralTable};

/// Options for [`load_with`]
#[derive(Debug, Clone, Copy)]
pub struct LoadOptions {
    /// X-axis handling mode.
    pub axis_mode: AxisMode,

    /// In shared-axis mode, cross-check every repeated x-column against the
    /// index column instead of discarding them unverified. Off by default;
    /// the default path keeps the format's silent-misalignment behavior.
    pub verify_alignment: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            axis_mode: AxisMode::Shared,
            verify_alignment: false,
        }
    }
}

/// Load the tabular section of a Cary CSV export
pub fn load(path: impl AsRef<Path>, axis_mode: AxisMode) -> Result<SpectralTable> {
    load_with(
        path,
        LoadOptions {
            axis_mode,
            verify_alignment: false,
        },
    )
}

/// Load the tabular section of a Cary CSV export with explicit options
pub fn load_with(path: impl AsRef<Path>, options: LoadOptions) -> Result<SpectralTable> {
    let path = path.as_ref();
    info!("Loading Cary CSV export: {}", path.display());

    let content = fs::read_to_string(path)?;
    let content = content.replace("\r\n", "\n");
    let lines: Vec<&str> = content.split_inclusive('\n').collect();

    let prescan = Prescan::scan(&lines, path)?;
    debug!(
        "Prescan: {} series, {} data rows",
        prescan.titles.len(),
        prescan.data_rows
    );

    // The prescan counted these exact lines, so the slice is in bounds.
    let data = lines[2..2 + prescan.data_rows].concat();

    let table = match options.axis_mode {
        AxisMode::Shared => load_shared_axis(&data, &prescan, path, options.verify_alignment)?,
        AxisMode::PerSeries => load_per_series(&data, &prescan, path)?,
    };

    debug!(
        "Loaded table: {} rows x {} series",
        table.n_rows(),
        table.n_series()
    );
    Ok(table)
}

/// Shared-axis path: column 0 is the table index, the y-columns sit at every
/// other remaining position. The repeated x-columns are discarded without
/// verification unless `verify` is set.
fn load_shared_axis(
    data: &str,
    prescan: &Prescan,
    path: &Path,
    verify: bool,
) -> Result<SpectralTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data.as_bytes());

    let n_series = prescan.titles.len();
    let mut index: Vec<f64> = Vec::with_capacity(prescan.data_rows);
    let mut columns: Vec<Vec<Option<f64>>> =
        vec![Vec::with_capacity(prescan.data_rows); n_series];

    for (row, result) in reader.records().enumerate() {
        let record = result?;

        if row == 0 {
            // Of the raw columns after the index, every other one is a
            // y-column; the rest repeat the x-axis.
            let kept = record.len().saturating_sub(1).div_ceil(2);
            if kept != n_series {
                return Err(CaryError::schema_mismatch(
                    path.display().to_string(),
                    n_series,
                    kept,
                ));
            }
        }

        let x = parse_required_f64(&record, 0, path)?;

        if verify {
            for series in 1..n_series {
                let repeated = parse_required_f64(&record, 2 * series, path)?;
                if repeated != x {
                    return Err(CaryError::invalid_format(
                        path,
                        format!(
                            "x-axis mismatch at data row {}: series {} has {} where the index has {}",
                            row + 1,
                            series + 1,
                            repeated,
                            x
                        ),
                    ));
                }
            }
        }

        index.push(x);
        for (series, column) in columns.iter_mut().enumerate() {
            column.push(parse_optional_f64(&record, 2 * series + 1, path)?);
        }
    }

    Ok(SpectralTable::new(index, prescan.titles.clone(), columns))
}

/// Per-series path: each series keeps its own x-values; the table index is
/// the sorted union of all of them and absent cells are `None`.
fn load_per_series(data: &str, prescan: &Prescan, path: &Path) -> Result<SpectralTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(data.as_bytes());

    let records = reader
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if records.is_empty() {
        return Err(CaryError::invalid_format(path, "no data rows"));
    }

    // A dangling odd final column (trailing delimiter) is ignored.
    let pairs = records[0].len() / 2;
    if pairs > prescan.titles.len() {
        return Err(CaryError::schema_mismatch(
            path.display().to_string(),
            prescan.titles.len(),
            pairs,
        ));
    }

    let mut series_values: Vec<Vec<(f64, f64)>> = Vec::with_capacity(pairs);
    for series in 0..pairs {
        let mut values = Vec::with_capacity(records.len());
        let mut dropped = 0usize;
        for record in &records {
            // A missing y-cell drops the whole pair, matching the export's
            // padding of shorter series with empty cells.
            let Some(y) = parse_optional_f64(record, 2 * series + 1, path)? else {
                dropped += 1;
                continue;
            };
            let Some(x) = parse_optional_f64(record, 2 * series, path)? else {
                return Err(CaryError::invalid_format(
                    path,
                    format!(
                        "series {} has a y-value without an x-value",
                        prescan.titles[series]
                    ),
                ));
            };
            values.push((x, y));
        }
        if dropped > 0 {
            debug!(
                "Series '{}': dropped {} rows with missing y-values",
                prescan.titles[series], dropped
            );
        }
        series_values.push(values);
    }

    // Union index: sorted ascending, deduplicated on exact (bit-equal) values.
    let mut index: Vec<f64> = series_values
        .iter()
        .flat_map(|values| values.iter().map(|(x, _)| *x))
        .collect();
    index.sort_by(f64::total_cmp);
    index.dedup_by(|a, b| a.to_bits() == b.to_bits());

    let mut columns: Vec<Vec<Option<f64>>> = Vec::with_capacity(pairs);
    for values in &series_values {
        let lookup: std::collections::HashMap<u64, f64> = values
            .iter()
            .map(|(x, y)| (x.to_bits(), *y))
            .collect();
        columns.push(
            index
                .iter()
                .map(|x| lookup.get(&x.to_bits()).copied())
                .collect(),
        );
    }

    let titles = prescan.titles[..pairs].to_vec();
    Ok(SpectralTable::new(index, titles, columns))
}

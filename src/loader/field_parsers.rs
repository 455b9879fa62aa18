//! Field parsing utilities for Cary data records
//!
//! Helper functions for pulling numeric values out of CSV records with
//! contextual errors. Empty cells are the export's missing-value marker.

use std::path::Path;

use csv::StringRecord;

use crate::error::{CaryError, Result};

/// Parse a required numeric field (index / x-axis columns)
pub fn parse_required_f64(record: &StringRecord, index: usize, path: &Path) -> Result<f64> {
    let value = record.get(index).ok_or_else(|| {
        CaryError::invalid_format(path, format!("missing required column {index}"))
    })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CaryError::invalid_format(
            path,
            format!("empty value in required column {index}"),
        ));
    }

    trimmed.parse::<f64>().map_err(|e| {
        CaryError::invalid_format(
            path,
            format!("invalid numeric value '{trimmed}' in column {index} ({e})"),
        )
    })
}

/// Parse an optional numeric field; empty or absent cells are `None`
pub fn parse_optional_f64(
    record: &StringRecord,
    index: usize,
    path: &Path,
) -> Result<Option<f64>> {
    match record.get(index).map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<f64>().map(Some).map_err(|e| {
            CaryError::invalid_format(
                path,
                format!("invalid numeric value '{value}' in column {index} ({e})"),
            )
        }),
    }
}

//! Profile extraction from a loaded table
//!
//! A profile is one row of a [`SpectralTable`] — a single x-value's worth of
//! data across all series — selected by nearest match to a target value.

use tracing::debug;

use crate::error::{CaryError, Result};
use crate::models::{Profile, ProfileAxis, SpectralTable};

/// Extract the row whose index value is nearest to `target`.
///
/// The scan walks the stored index in order, tracking the minimum absolute
/// distance seen so far, and stops at the first point where the distance
/// grows. On the sorted axes the instrument records, that is the global
/// nearest match; on an unsorted index the scan stops at the first local
/// minimum and returns that match without error. Ties go to the earlier
/// index.
///
/// If `new_axis` is given and matches the row length, the profile is indexed
/// by it; a length mismatch is silently ignored and the column titles kept.
pub fn profile(
    table: &SpectralTable,
    target: f64,
    new_axis: Option<&[f64]>,
) -> Result<Profile> {
    let mut best_distance = f64::INFINITY;
    let mut best: Option<usize> = None;

    for (i, &x) in table.index().iter().enumerate() {
        let distance = (x - target).abs();
        if distance < best_distance {
            best_distance = distance;
            best = Some(i);
        } else {
            break;
        }
    }

    let best = best.ok_or(CaryError::EmptyTable)?;
    let x = table.index()[best];
    debug!("Profile target {target}: selected index {x} (row {best})");

    let values = table.row(best);
    let axis = match new_axis {
        Some(axis) if axis.len() == values.len() => ProfileAxis::Values(axis.to_vec()),
        _ => ProfileAxis::Titles(table.titles().to_vec()),
    };

    Ok(Profile { x, values, axis })
}

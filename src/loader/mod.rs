//! Cary CSV table loader
//!
//! This module reads the tabular section of a Cary spectrophotometer export
//! into a labeled [`SpectralTable`](crate::models::SpectralTable).
//!
//! ## Architecture
//!
//! The loader is organized into small components:
//! - [`prescan`] - first-line title scan and data-block row counting
//! - [`parser`] - table construction for both axis modes
//! - [`field_parsers`] - numeric cell parsing helpers
//!
//! ## Usage
//!
//! ```no_run
//! use cary_reader::{AxisMode, loader};
//!
//! # fn example() -> cary_reader::Result<()> {
//! let table = loader::load("kinetics.csv", AxisMode::Shared)?;
//! println!("{} rows, {} series", table.n_rows(), table.n_series());
//! # Ok(())
//! # }
//! ```

pub mod field_parsers;
pub mod parser;
pub mod prescan;

#[cfg(test)]
mod tests;

// Re-export main entry points for easy access
pub use parser::{LoadOptions, load, load_with};
pub use prescan::Prescan;

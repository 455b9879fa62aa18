//! Cary CSV export reader
//!
//! A Rust library for parsing CSV exports written by Varian/Agilent Cary
//! spectrophotometer software (not the "3D" CSV variant) into in-memory
//! tabular structures.
//!
//! This library provides three independent operations over the same file
//! format:
//! - Loading the tabular section into a labeled [`SpectralTable`], either
//!   assuming a shared x-axis across all series or outer-joining per-series
//!   axes
//! - Extracting a single-row [`Profile`] nearest to a target x-value
//! - Parsing per-series `Collection Time:` entries from the log section into
//!   a [`TimeLog`] of integer seconds, relative or absolute
//!
//! All operations are pure functions over file contents; nothing is shared
//! or cached between calls.
//!
//! ## Usage
//!
//! ```no_run
//! use cary_reader::{AxisMode, TimeReference, load, load_time, profile};
//!
//! # fn example() -> cary_reader::Result<()> {
//! let table = load("titration.csv", AxisMode::Shared)?;
//! let p = profile(&table, 520.0, None)?;
//! let times = load_time("titration.csv", TimeReference::Relative)?;
//!
//! println!(
//!     "{} spectra, profile at {} nm, first spectrum at t={}s",
//!     table.n_series(),
//!     p.x,
//!     times.seconds().first().copied().unwrap_or(0)
//! );
//! # Ok(())
//! # }
//! ```

pub mod constants;
pub mod error;
pub mod loader;
pub mod models;
pub mod profile;
pub mod time_log;

// Re-export commonly used types and entry points
pub use error::{CaryError, Result};
pub use loader::{LoadOptions, load, load_with};
pub use models::{AxisMode, Profile, ProfileAxis, SpectralTable, TimeLog, TimeReference};
pub use profile::profile;
pub use time_log::load_time;

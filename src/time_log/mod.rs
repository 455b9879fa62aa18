//! Collection-time parsing from Cary export log sections
//!
//! When the log-export option is enabled, the Cary software appends a log
//! section after the tabular block with one timestamp per series. This
//! module extracts those timestamps as a named series of integer seconds.
//!
//! ## Usage
//!
//! ```no_run
//! use cary_reader::{TimeReference, time_log};
//!
//! # fn example() -> cary_reader::Result<()> {
//! let times = time_log::load_time("kinetics.csv", TimeReference::Relative)?;
//! for (title, seconds) in times.iter() {
//!     println!("{title}: {seconds} s");
//! }
//! # Ok(())
//! # }
//! ```

pub mod scanner;

#[cfg(test)]
mod tests;

pub use scanner::load_time;

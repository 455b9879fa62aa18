//! Header prescan for Cary tabular exports
//!
//! Before the structured read, the loader makes a cheap line-oriented pass
//! over the start of the file: the first line yields the ordered series
//! titles, the second line is the sub-header (consumed, not interpreted),
//! and the following lines are counted up to the end of the data block.

use std::path::Path;

use crate::constants::{BLANK_LINE_MAX_LEN, TITLE_DELIMITER};
use crate::error::{CaryError, Result};

/// Result of the prescan pass over an export's tabular section
#[derive(Debug, Clone)]
pub struct Prescan {
    /// Series titles from the first header line, in file order.
    ///
    /// The count equals the number of series, not the number of raw columns;
    /// every series occupies two raw columns (x, y).
    pub titles: Vec<String>,

    /// Number of data rows before the block terminator.
    pub data_rows: usize,
}

impl Prescan {
    /// Scan raw lines (newlines retained) for titles and the data row count.
    ///
    /// `lines` must come from a `split_inclusive('\n')` pass so the blank-line
    /// length check sees the trailing newline, matching the export convention
    /// that an unterminated single-character final line also ends the block.
    pub fn scan(lines: &[&str], path: &Path) -> Result<Self> {
        let first = lines
            .first()
            .ok_or_else(|| CaryError::invalid_format(path, "empty file"))?;

        // The title line carries a trailing delimiter, so the final split
        // segment is always dropped, never parsed as a title.
        let mut titles: Vec<String> = first
            .trim_end_matches(['\r', '\n'])
            .split(TITLE_DELIMITER)
            .map(str::to_string)
            .collect();
        titles.pop();

        if lines.len() < 2 {
            return Err(CaryError::invalid_format(
                path,
                "missing sub-header line after the title line",
            ));
        }

        let data_rows = lines[2..]
            .iter()
            .take_while(|line| line.len() > BLANK_LINE_MAX_LEN)
            .count();

        Ok(Prescan { titles, data_rows })
    }
}

//! Line-oriented scanner for the log section of a Cary export
//!
//! The log section follows the tabular block (separated by a blank line) and
//! holds one record per series: a blank line, a `Title,` line, free-form
//! lines, and a `Collection Time: DD/MM/YYYY HH.MM.SS` line. The scanner is
//! a small state machine over raw lines: blank-skip, title-capture,
//! timestamp-capture.

use std::fs;
use std::path::Path;

use chrono::NaiveDateTime;
use tracing::{debug, info};

use crate::constants::{BLANK_LINE_MAX_LEN, COLLECTION_TIME_FORMAT, COLLECTION_TIME_PREFIX};
use crate::error::{CaryError, Result};
use crate::models::{TimeLog, TimeReference};

/// Raw-line cursor that keeps returning `""` at end of file.
///
/// Lines retain their trailing newline so the scanner's length checks can
/// distinguish a blank line (`"\n"`, length 1) from end of file (length 0).
struct LineCursor<'a> {
    lines: &'a [&'a str],
    pos: usize,
}

impl<'a> LineCursor<'a> {
    fn new(lines: &'a [&'a str]) -> Self {
        Self { lines, pos: 0 }
    }

    fn next_line(&mut self) -> &'a str {
        match self.lines.get(self.pos) {
            Some(line) => {
                self.pos += 1;
                line
            }
            None => "",
        }
    }
}

/// Parse per-series collection times from the log section of an export.
///
/// With [`TimeReference::Relative`] the minimum time is subtracted so the
/// earliest record reads 0; with [`TimeReference::Absolute`] raw epoch
/// seconds are returned (timestamps are interpreted as UTC).
///
/// The scan loop always over-reads one record at end of file and appends a
/// synthetic final pair; the result drops that last pair, so the log holds
/// exactly the records whose timestamp line appeared before EOF.
pub fn load_time(path: impl AsRef<Path>, reference: TimeReference) -> Result<TimeLog> {
    let path = path.as_ref();
    info!("Loading collection times from: {}", path.display());

    let content = fs::read_to_string(path)?;
    let content = content.replace("\r\n", "\n");
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    let mut cursor = LineCursor::new(&lines);

    // Skip the tabular block: the log section starts after the first blank
    // line. A file without one has no log section at all.
    let mut line = cursor.next_line();
    while line != "\n" {
        if line.is_empty() {
            return Err(CaryError::invalid_format(
                path,
                "no log section found (no blank line after the data block)",
            ));
        }
        line = cursor.next_line();
    }

    let mut titles: Vec<String> = Vec::new();
    let mut seconds: Vec<i64> = Vec::new();
    // Carried between records; only ever surfaced through the synthetic
    // final pair, which is always dropped.
    let mut last_time: i64 = 0;

    while !line.is_empty() {
        // Blank-skip: move past the remainder of the previous record.
        while line != "\n" && !line.is_empty() {
            line = cursor.next_line();
        }

        // Title-capture: the title line is the next line ending in a bare
        // comma. A blank or short line means the records are exhausted.
        while !line.ends_with(",\n") {
            line = cursor.next_line();
            if line.len() <= BLANK_LINE_MAX_LEN {
                break;
            }
        }
        let title = line.strip_suffix(",\n").unwrap_or("").to_string();

        // Timestamp-capture: scan forward for the collection time marker.
        while !line.is_empty() {
            line = cursor.next_line();
            if let Some(rest) = line.strip_prefix(COLLECTION_TIME_PREFIX) {
                let value = rest.strip_suffix('\n').unwrap_or(rest);
                let parsed = NaiveDateTime::parse_from_str(value, COLLECTION_TIME_FORMAT)
                    .map_err(|e| CaryError::TimestampParse {
                        path: path.to_path_buf(),
                        value: value.to_string(),
                        source: e,
                    })?;
                last_time = parsed.and_utc().timestamp();
                break;
            }
        }

        titles.push(title);
        seconds.push(last_time);
    }

    // Drop the synthetic final record from the EOF over-read.
    titles.pop();
    seconds.pop();
    debug!("Parsed {} timed records", titles.len());

    match reference {
        TimeReference::Absolute => Ok(TimeLog::new(titles, seconds)),
        TimeReference::Relative => {
            let min = seconds.iter().copied().min().ok_or_else(|| {
                CaryError::invalid_format(path, "log section contains no timestamped records")
            })?;
            let relative = seconds.iter().map(|s| s - min).collect();
            Ok(TimeLog::new(titles, relative))
        }
    }
}

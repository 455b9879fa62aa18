//! Format constants for Cary CSV exports
//!
//! This module contains the fixed markers and formats used by the Cary
//! software when writing "CSV with log data" exports.

// =============================================================================
// Tabular Section Markers
// =============================================================================

/// Delimiter separating series titles on the first header line.
///
/// Each series occupies a two-column block (x, y), so the title line reads
/// `Title 1,,Title 2,,` with a trailing delimiter.
pub const TITLE_DELIMITER: &str = ",,";

/// Maximum raw line length (newline included) treated as a block terminator.
///
/// The data block ends at the first blank line, or at an unterminated
/// single-character line at end of file.
pub const BLANK_LINE_MAX_LEN: usize = 1;

// =============================================================================
// Log Section Markers
// =============================================================================

/// Prefix of the per-series timestamp line in the log section.
pub const COLLECTION_TIME_PREFIX: &str = "Collection Time: ";

/// Timestamp format written by the Cary software after the prefix.
pub const COLLECTION_TIME_FORMAT: &str = "%d/%m/%Y %H.%M.%S";

/// Name of the series returned by the time-log parser.
pub const TIME_SERIES_NAME: &str = "Time (seconds)";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_collection_time_format_parses_export_timestamp() {
        let parsed = NaiveDateTime::parse_from_str("13/01/2021 15.04.37", COLLECTION_TIME_FORMAT)
            .expect("format should parse a real export timestamp");
        assert_eq!(
            parsed.format("%Y-%m-%d %H:%M:%S").to_string(),
            "2021-01-13 15:04:37"
        );
    }

    #[test]
    fn test_collection_time_format_rejects_colon_separated_time() {
        assert!(
            NaiveDateTime::parse_from_str("13/01/2021 15:04:37", COLLECTION_TIME_FORMAT).is_err()
        );
    }
}

//! Tests for the header prescan

use std::path::Path;

use crate::error::CaryError;
use crate::loader::prescan::Prescan;

fn scan(content: &str) -> crate::Result<Prescan> {
    let lines: Vec<&str> = content.split_inclusive('\n').collect();
    Prescan::scan(&lines, Path::new("test.csv"))
}

#[test]
fn test_titles_in_file_order() {
    let prescan = scan("Scan 1,,Scan 2,,Scan 3,,\nwl,abs,wl,abs,wl,abs,\n").unwrap();
    assert_eq!(prescan.titles, vec!["Scan 1", "Scan 2", "Scan 3"]);
    assert_eq!(prescan.data_rows, 0);
}

#[test]
fn test_title_count_is_series_count_not_column_count() {
    // Six raw columns, two series.
    let prescan = scan("A,,B,,\nwl,abs,wl,abs,\n400,1,400,2,\n").unwrap();
    assert_eq!(prescan.titles.len(), 2);
}

#[test]
fn test_missing_trailing_delimiter_drops_last_title() {
    // The final split segment is always discarded, so a title line without
    // the trailing delimiter loses its last title.
    let prescan = scan("Scan 1,,Scan 2\nwl,abs,wl,abs,\n").unwrap();
    assert_eq!(prescan.titles, vec!["Scan 1"]);
}

#[test]
fn test_row_count_stops_at_blank_line() {
    let content = "A,,\nwl,abs,\n400,1,\n401,2,\n\n401,9,\n";
    let prescan = scan(content).unwrap();
    assert_eq!(prescan.data_rows, 2);
}

#[test]
fn test_row_count_runs_to_end_of_file() {
    let content = "A,,\nwl,abs,\n400,1,\n401,2,\n402,3,\n";
    let prescan = scan(content).unwrap();
    assert_eq!(prescan.data_rows, 3);
}

#[test]
fn test_unterminated_single_character_line_ends_the_block() {
    // A final one-character line without a newline is a terminator, not data.
    let content = "A,,\nwl,abs,\n400,1,\n4";
    let prescan = scan(content).unwrap();
    assert_eq!(prescan.data_rows, 1);
}

#[test]
fn test_empty_file_is_invalid() {
    assert!(matches!(scan(""), Err(CaryError::InvalidFormat { .. })));
}

#[test]
fn test_missing_sub_header_is_invalid() {
    assert!(matches!(
        scan("Scan 1,,\n"),
        Err(CaryError::InvalidFormat { .. })
    ));
}

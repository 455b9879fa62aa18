//! Shared test utilities and fixtures for loader tests

use std::io::Write;

use tempfile::NamedTempFile;

mod prescan_tests;

/// Write content to a named temp file and return the handle
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// A shared-axis export: two scans over the same three wavelengths
pub fn create_shared_axis_export() -> String {
    "Scan 1,,Scan 2,,\n\
     Wavelength (nm),Abs,Wavelength (nm),Abs,\n\
     400,0.10,400,0.20,\n\
     401,0.11,401,0.21,\n\
     402,0.12,402,0.22,\n\
     \n\
     Spectrophotometer software version\n"
        .to_string()
}

/// A shared-axis export whose second scan has a shifted x-column
pub fn create_misaligned_export() -> String {
    "Scan 1,,Scan 2,,\n\
     Wavelength (nm),Abs,Wavelength (nm),Abs,\n\
     400,0.10,500,0.20,\n\
     401,0.11,501,0.21,\n"
        .to_string()
}

/// A per-series export: two scans over partially overlapping wavelengths
pub fn create_per_series_export() -> String {
    "Scan A,,Scan B,,\n\
     Wavelength (nm),Abs,Wavelength (nm),Abs,\n\
     400,0.10,401,1.10,\n\
     402,0.12,402,1.12,\n\
     404,0.14,403,1.13,\n"
        .to_string()
}

/// A per-series export where the second scan is shorter than the first
pub fn create_ragged_per_series_export() -> String {
    "Scan A,,Scan B,,\n\
     Wavelength (nm),Abs,Wavelength (nm),Abs,\n\
     400,0.10,500,1.00,\n\
     410,0.20,,,\n\
     420,0.30,,,\n"
        .to_string()
}

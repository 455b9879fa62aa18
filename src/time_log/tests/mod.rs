//! Shared test utilities and fixtures for time-log tests

use std::io::Write;

use tempfile::NamedTempFile;


/// Write content to a named temp file and return the handle
pub fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}

/// An export with a log section holding three timed records, one minute apart
pub fn create_timed_export() -> String {
    "Scan 1,,Scan 2,,Scan 3,,\n\
     Wavelength (nm),Abs,Wavelength (nm),Abs,Wavelength (nm),Abs,\n\
     700,0.50,700,0.60,700,0.70,\n\
     701,0.51,701,0.61,701,0.71,\n\
     \n\
     Method file name\n\
     Scan 1,\n\
     Scan 1\n\
     Collection Time: 13/01/2021 15.04.37\n\
     \n\
     Scan 2,\n\
     Scan 2\n\
     Collection Time: 13/01/2021 15.05.37\n\
     \n\
     Scan 3,\n\
     Scan 3\n\
     Collection Time: 13/01/2021 15.06.37\n"
        .to_string()
}

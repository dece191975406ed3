use chrono::{Datelike, Local};
use std::path::PathBuf;

/// Generate default corrected-data filename with format: hydromet-qc-corrected-{YYMMDD}.csv
pub fn generate_default_corrected_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("hydromet-qc-corrected-{:02}{:02}{:02}.csv", year, month, day);
    PathBuf::from("output").join(filename)
}

/// Generate default check-summary filename with format: hydromet-qc-checks-{YYMMDD}.csv
pub fn generate_default_checks_filename() -> PathBuf {
    let now = Local::now();
    let year = now.year() % 100; // Get last 2 digits of year
    let month = now.month();
    let day = now.day();

    let filename = format!("hydromet-qc-checks-{:02}{:02}{:02}.csv", year, month, day);
    PathBuf::from("output").join(filename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_default_corrected_filename() {
        let filename = generate_default_corrected_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output/"));
        assert!(filename_str.contains("hydromet-qc-corrected-"));
        assert!(filename_str.ends_with(".csv"));
    }

    #[test]
    fn test_generate_default_checks_filename() {
        let filename = generate_default_checks_filename();
        let filename_str = filename.to_string_lossy();

        assert!(filename_str.starts_with("output/"));
        assert!(filename_str.contains("hydromet-qc-checks-"));
        assert!(filename_str.ends_with(".csv"));
    }
}

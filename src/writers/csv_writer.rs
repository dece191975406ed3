use std::path::Path;
use tracing::info;

use crate::error::Result;
use crate::models::{CorrectionLedger, DailySeries, ObsField};

/// Writes the corrected series and the check summary as delimited text.
/// Missing values are written as empty cells.
pub struct CsvWriter {
    delimiter: u8,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self { delimiter: b',' }
    }

    /// Select the output delimiter by name
    pub fn with_delimiter(mut self, delimiter: &str) -> Result<Self> {
        self.delimiter = match delimiter.to_lowercase().as_str() {
            "comma" => b',',
            "space" => b' ',
            "tab" => b'\t',
            _ => {
                return Err(crate::error::ProcessingError::Config(format!(
                    "Unsupported delimiter: {}",
                    delimiter
                )))
            }
        };
        Ok(self)
    }

    /// Write the corrected series, one row per day
    pub fn write_series(&self, series: &DailySeries, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)?;

        let mut header = vec!["Date".to_string()];
        header.extend(ObsField::ALL.iter().map(|field| field.label().to_string()));
        writer.write_record(&header)?;

        for row in series.rows() {
            let mut record = vec![row.date.to_string()];
            record.extend(ObsField::ALL.iter().map(|&field| format_value(row.value(field))));
            writer.write_record(&record)?;
        }

        writer.flush()?;
        info!("wrote {} corrected rows to {}", series.len(), path.display());
        Ok(())
    }

    /// Write the correction ledger, one labeled row per check
    pub fn write_ledger(&self, ledger: &CorrectionLedger, path: &Path) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(self.delimiter)
            .from_path(path)?;

        let mut header = vec!["Check".to_string()];
        header.extend(ObsField::ALL.iter().map(|field| field.label().to_string()));
        writer.write_record(&header)?;

        for entry in ledger.entries() {
            let mut record = vec![entry.check.label().to_string()];
            record.extend(
                ObsField::ALL
                    .iter()
                    .map(|&field| entry.counts.get(field).to_string()),
            );
            writer.write_record(&record)?;
        }

        writer.flush()?;
        info!("wrote check summary to {}", path.display());
        Ok(())
    }
}

fn format_value(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => String::new(),
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DailyObservation, FieldCounts, QualityCheck};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn series() -> DailySeries {
        let date = NaiveDate::from_ymd_opt(2004, 3, 1).unwrap();
        DailySeries::from_rows(vec![DailyObservation::new(
            date,
            None,
            Some(14.4),
            Some(-0.6),
            Some(2.9),
        )])
    }

    #[test]
    fn test_write_series() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrected.csv");

        CsvWriter::new().write_series(&series(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("Date,Precip,Max Temp,Min Temp,Wind Speed")
        );
        // Missing precipitation becomes an empty cell
        assert_eq!(lines.next(), Some("2004-03-01,,14.40,-0.60,2.90"));
    }

    #[test]
    fn test_write_series_space_delimited() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("corrected.txt");

        CsvWriter::new()
            .with_delimiter("space")
            .unwrap()
            .write_series(&series(), &path)
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // Labels containing the delimiter get quoted by the csv writer
        assert!(content.starts_with("Date Precip \"Max Temp\" \"Min Temp\" \"Wind Speed\""));
    }

    #[test]
    fn test_unsupported_delimiter() {
        assert!(CsvWriter::new().with_delimiter("pipe").is_err());
    }

    #[test]
    fn test_write_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("checks.csv");

        let mut ledger = CorrectionLedger::new();
        ledger.set_counts(
            QualityCheck::NoData,
            FieldCounts {
                precip: 2,
                max_temp: 0,
                min_temp: 1,
                wind_speed: 0,
            },
        );
        ledger.add_counts(QualityCheck::GrossError, FieldCounts::zero());
        ledger.add_counts(QualityCheck::Swapped, FieldCounts::temperatures_only(3));
        ledger.add_counts(QualityCheck::Range, FieldCounts::temperatures_only(1));

        CsvWriter::new().write_ledger(&ledger, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Check,Precip,Max Temp,Min Temp,Wind Speed");
        assert_eq!(lines[1], "No Data,2,0,1,0");
        assert_eq!(lines[2], "Gross Error,0,0,0,0");
        assert_eq!(lines[3], "Swapped,0,3,3,0");
        assert_eq!(lines[4], "Range,0,1,1,0");
    }
}

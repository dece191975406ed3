use chrono::NaiveDate;
use memmap2::Mmap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{ProcessingError, Result};
use crate::models::{CorrectionLedger, DailyObservation, DailySeries};
use crate::utils::constants::{DATE_FORMAT_ISO, DATE_FORMAT_US, DEFAULT_BUFFER_SIZE};

/// Reads a whitespace-delimited daily observation file into a series.
///
/// Expected line format: `DATE PRECIP MAX_TEMP MIN_TEMP WIND_SPEED`. Values
/// are taken verbatim, including the -999.00 no-data sentinel; classifying
/// cells as missing is the quality pipeline's job, not the reader's.
pub struct SeriesReader {
    use_mmap: bool,
}

impl SeriesReader {
    pub fn new() -> Self {
        Self { use_mmap: false }
    }

    pub fn with_mmap(use_mmap: bool) -> Self {
        Self { use_mmap }
    }

    /// Read a series and initialize its correction ledger
    pub fn read_series(&self, path: &Path) -> Result<(DailySeries, CorrectionLedger)> {
        let series = if self.use_mmap {
            self.read_series_mmap(path)?
        } else {
            self.read_series_buffered(path)?
        };

        info!(
            "loaded {} daily observations from {}",
            series.len(),
            path.display()
        );

        Ok((series, CorrectionLedger::new()))
    }

    /// Read observations using buffered I/O
    fn read_series_buffered(&self, path: &Path) -> Result<DailySeries> {
        let file = File::open(path)?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);
        let mut series = DailySeries::new();

        for line_result in reader.lines() {
            let line = line_result?;
            if let Some(observation) = self.parse_observation_line(&line)? {
                series.push(observation);
            }
        }

        Ok(series)
    }

    /// Read observations using memory-mapped I/O for large files
    fn read_series_mmap(&self, path: &Path) -> Result<DailySeries> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file)? };
        let content = std::str::from_utf8(&mmap)
            .map_err(|e| ProcessingError::InvalidFormat(format!("Invalid UTF-8: {}", e)))?;

        let mut series = DailySeries::new();
        for line in content.lines() {
            if let Some(observation) = self.parse_observation_line(line)? {
                series.push(observation);
            }
        }

        Ok(series)
    }

    /// Parse a single observation line. Blank lines, a leading header line,
    /// and lines with the wrong field count are skipped; unparseable dates or
    /// numbers are errors.
    fn parse_observation_line(&self, line: &str) -> Result<Option<DailyObservation>> {
        if line.trim().is_empty() {
            return Ok(None);
        }

        let parts: Vec<&str> = line.split_whitespace().collect();

        if parts[0].eq_ignore_ascii_case("date") {
            return Ok(None);
        }

        if parts.len() != 5 {
            debug!("skipping malformed line: '{}'", line);
            return Ok(None);
        }

        let date = Self::parse_date(parts[0])?;
        let precip = Self::parse_value(parts[1], "precipitation")?;
        let max_temp = Self::parse_value(parts[2], "max temperature")?;
        let min_temp = Self::parse_value(parts[3], "min temperature")?;
        let wind_speed = Self::parse_value(parts[4], "wind speed")?;

        Ok(Some(DailyObservation::new(
            date,
            Some(precip),
            Some(max_temp),
            Some(min_temp),
            Some(wind_speed),
        )))
    }

    fn parse_date(s: &str) -> Result<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(s, DATE_FORMAT_ISO) {
            return Ok(date);
        }
        Ok(NaiveDate::parse_from_str(s, DATE_FORMAT_US)?)
    }

    fn parse_value(s: &str, field_name: &str) -> Result<f64> {
        s.parse::<f64>().map_err(|_| {
            ProcessingError::InvalidFormat(format!("Invalid {} value: '{}'", field_name, s))
        })
    }
}

impl Default for SeriesReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ObsField;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_observation_line() {
        let reader = SeriesReader::new();

        let line = "2004-03-01  0.00  14.40  -0.60  2.90";
        let observation = reader.parse_observation_line(line).unwrap().unwrap();

        assert_eq!(
            observation.date,
            NaiveDate::from_ymd_opt(2004, 3, 1).unwrap()
        );
        assert_eq!(observation.precip, Some(0.0));
        assert_eq!(observation.max_temp, Some(14.4));
        assert_eq!(observation.min_temp, Some(-0.6));
        assert_eq!(observation.wind_speed, Some(2.9));
    }

    #[test]
    fn test_sentinel_values_pass_through() {
        let reader = SeriesReader::new();

        let line = "2004-03-01  -999.00  -999.00  5.00  1.50";
        let observation = reader.parse_observation_line(line).unwrap().unwrap();

        // The reader must not classify sentinels; that is the pipeline's job
        assert_eq!(observation.precip, Some(-999.0));
        assert_eq!(observation.max_temp, Some(-999.0));
    }

    #[test]
    fn test_us_date_format() {
        let reader = SeriesReader::new();

        let line = "03/01/2004  0.00  14.40  -0.60  2.90";
        let observation = reader.parse_observation_line(line).unwrap().unwrap();
        assert_eq!(
            observation.date,
            NaiveDate::from_ymd_opt(2004, 3, 1).unwrap()
        );
    }

    #[test]
    fn test_skips_blank_header_and_malformed_lines() {
        let reader = SeriesReader::new();

        assert!(reader.parse_observation_line("").unwrap().is_none());
        assert!(reader.parse_observation_line("   ").unwrap().is_none());
        assert!(reader
            .parse_observation_line("Date Precip MaxTemp MinTemp WindSpeed")
            .unwrap()
            .is_none());
        assert!(reader
            .parse_observation_line("2004-03-01 0.00 14.40")
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_invalid_number_is_an_error() {
        let reader = SeriesReader::new();

        let line = "2004-03-01  0.00  bogus  -0.60  2.90";
        assert!(reader.parse_observation_line(line).is_err());
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let reader = SeriesReader::new();

        let line = "2004-13-41  0.00  14.40  -0.60  2.90";
        assert!(reader.parse_observation_line(line).is_err());
    }

    #[test]
    fn test_read_series_file() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;

        writeln!(temp_file, "2004-03-01  0.00  14.40  -0.60  2.90")?;
        writeln!(temp_file)?;
        writeln!(temp_file, "2004-03-02  -999.00  10.00  2.10  3.20")?;
        writeln!(temp_file, "2004-03-03  1.50  12.00  4.00  1.10")?;

        let reader = SeriesReader::new();
        let (series, ledger) = reader.read_series(temp_file.path())?;

        assert_eq!(series.len(), 3);
        assert_eq!(
            series.value(NaiveDate::from_ymd_opt(2004, 3, 2).unwrap(), ObsField::Precip),
            Some(-999.0)
        );

        // The ledger arrives initialized with the zeroed "No Data" row
        assert_eq!(ledger.entries().len(), 1);
        assert!(ledger.entries()[0].counts.is_zero());

        Ok(())
    }

    #[test]
    fn test_mmap_matches_buffered() -> Result<()> {
        let mut temp_file = NamedTempFile::new()?;
        writeln!(temp_file, "2004-03-01  0.00  14.40  -0.60  2.90")?;
        writeln!(temp_file, "2004-03-02  2.00  11.00  3.00  1.00")?;

        let (buffered, _) = SeriesReader::new().read_series(temp_file.path())?;
        let (mapped, _) = SeriesReader::with_mmap(true).read_series(temp_file.path())?;

        assert_eq!(buffered.rows(), mapped.rows());
        Ok(())
    }
}

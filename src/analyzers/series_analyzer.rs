use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{CorrectionLedger, DailySeries, ObsField};

/// Descriptive statistics for one observed field
#[derive(Debug, Clone, Serialize)]
pub struct FieldSummary {
    pub present: usize,
    pub missing: usize,
    pub mean: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesStatistics {
    pub total_days: usize,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
    pub precip: FieldSummary,
    pub max_temp: FieldSummary,
    pub min_temp: FieldSummary,
    pub wind_speed: FieldSummary,
}

impl SeriesStatistics {
    pub fn field(&self, field: ObsField) -> &FieldSummary {
        match field {
            ObsField::Precip => &self.precip,
            ObsField::MaxTemp => &self.max_temp,
            ObsField::MinTemp => &self.min_temp,
            ObsField::WindSpeed => &self.wind_speed,
        }
    }

    /// Render the statistics as an aligned text table
    pub fn summary(&self, title: &str) -> String {
        let mut summary = String::new();

        summary.push_str(&format!("=== {} ===\n", title));
        summary.push_str(&format!("Days: {}", self.total_days));
        if let Some((first, last)) = self.date_range {
            summary.push_str(&format!(" ({} to {})", first, last));
        }
        summary.push('\n');

        summary.push_str(&format!(
            "{:<12} {:>8} {:>8} {:>10} {:>10} {:>10}\n",
            "Field", "Present", "Missing", "Mean", "Min", "Max"
        ));

        for field in ObsField::ALL {
            let stats = self.field(field);
            summary.push_str(&format!(
                "{:<12} {:>8} {:>8} {:>10} {:>10} {:>10}\n",
                field.label(),
                stats.present,
                stats.missing,
                format_stat(stats.mean),
                format_stat(stats.min),
                format_stat(stats.max)
            ));
        }

        summary
    }
}

fn format_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "-".to_string(),
    }
}

/// Combined output of a processing run, for JSON export
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    pub raw: SeriesStatistics,
    pub corrected: SeriesStatistics,
    pub ledger: CorrectionLedger,
}

/// Computes per-field descriptive statistics over a series, printed before
/// and after correction to show what the checks changed.
pub struct SeriesAnalyzer;

impl SeriesAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, series: &DailySeries) -> SeriesStatistics {
        SeriesStatistics {
            total_days: series.len(),
            date_range: series.date_range(),
            precip: self.summarize_field(series, ObsField::Precip),
            max_temp: self.summarize_field(series, ObsField::MaxTemp),
            min_temp: self.summarize_field(series, ObsField::MinTemp),
            wind_speed: self.summarize_field(series, ObsField::WindSpeed),
        }
    }

    fn summarize_field(&self, series: &DailySeries, field: ObsField) -> FieldSummary {
        let mut present = 0;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;

        for row in series.rows() {
            if let Some(value) = row.value(field) {
                present += 1;
                sum += value;
                min = min.min(value);
                max = max.max(value);
            }
        }

        if present == 0 {
            return FieldSummary {
                present: 0,
                missing: series.len(),
                mean: None,
                min: None,
                max: None,
            };
        }

        FieldSummary {
            present,
            missing: series.len() - present,
            mean: Some(sum / present as f64),
            min: Some(min),
            max: Some(max),
        }
    }
}

impl Default for SeriesAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::ledger::FieldCounts;
use crate::models::observation::{DailyObservation, ObsField};

/// A date-indexed sequence of daily observations. Rows keep their input
/// order; date uniqueness is not enforced.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailySeries {
    rows: Vec<DailyObservation>,
}

impl DailySeries {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows(rows: Vec<DailyObservation>) -> Self {
        Self { rows }
    }

    pub fn push(&mut self, row: DailyObservation) {
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[DailyObservation] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [DailyObservation] {
        &mut self.rows
    }

    /// First row recorded for the given date
    pub fn get(&self, date: NaiveDate) -> Option<&DailyObservation> {
        self.rows.iter().find(|row| row.date == date)
    }

    pub fn value(&self, date: NaiveDate, field: ObsField) -> Option<f64> {
        self.get(date).and_then(|row| row.value(field))
    }

    /// Set a single cell; returns false when no row exists for the date
    pub fn set_value(&mut self, date: NaiveDate, field: ObsField, value: Option<f64>) -> bool {
        match self.rows.iter_mut().find(|row| row.date == date) {
            Some(row) => {
                row.set_value(field, value);
                true
            }
            None => false,
        }
    }

    /// Number of missing cells per field across the whole series
    pub fn missing_counts(&self) -> FieldCounts {
        let mut counts = FieldCounts::zero();
        for row in &self.rows {
            for field in ObsField::ALL {
                if row.value(field).is_none() {
                    counts.increment(field);
                }
            }
        }
        counts
    }

    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.iter().map(|row| row.date).min()?;
        let last = self.rows.iter().map(|row| row.date).max()?;
        Some((first, last))
    }
}

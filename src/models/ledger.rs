use serde::{Deserialize, Serialize};

use crate::models::observation::ObsField;

/// Per-field tally of affected cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCounts {
    pub precip: usize,
    pub max_temp: usize,
    pub min_temp: usize,
    pub wind_speed: usize,
}

impl FieldCounts {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Counts affecting only the two temperature fields, as produced by the
    /// swap and range checks
    pub fn temperatures_only(count: usize) -> Self {
        Self {
            precip: 0,
            max_temp: count,
            min_temp: count,
            wind_speed: 0,
        }
    }

    pub fn get(&self, field: ObsField) -> usize {
        match field {
            ObsField::Precip => self.precip,
            ObsField::MaxTemp => self.max_temp,
            ObsField::MinTemp => self.min_temp,
            ObsField::WindSpeed => self.wind_speed,
        }
    }

    pub fn increment(&mut self, field: ObsField) {
        match field {
            ObsField::Precip => self.precip += 1,
            ObsField::MaxTemp => self.max_temp += 1,
            ObsField::MinTemp => self.min_temp += 1,
            ObsField::WindSpeed => self.wind_speed += 1,
        }
    }

    pub fn add(&mut self, other: &FieldCounts) {
        self.precip += other.precip;
        self.max_temp += other.max_temp;
        self.min_temp += other.min_temp;
        self.wind_speed += other.wind_speed;
    }

    /// Elementwise difference against an earlier snapshot. Missing cells
    /// never revert, so the counts are monotone; saturation guards the
    /// subtraction anyway.
    pub fn diff_from(&self, earlier: &FieldCounts) -> FieldCounts {
        FieldCounts {
            precip: self.precip.saturating_sub(earlier.precip),
            max_temp: self.max_temp.saturating_sub(earlier.max_temp),
            min_temp: self.min_temp.saturating_sub(earlier.min_temp),
            wind_speed: self.wind_speed.saturating_sub(earlier.wind_speed),
        }
    }

    pub fn total(&self) -> usize {
        self.precip + self.max_temp + self.min_temp + self.wind_speed
    }

    pub fn is_zero(&self) -> bool {
        self.total() == 0
    }
}

/// The four quality checks, in their required execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QualityCheck {
    NoData,
    GrossError,
    Swapped,
    Range,
}

impl QualityCheck {
    pub const ALL: [QualityCheck; 4] = [
        QualityCheck::NoData,
        QualityCheck::GrossError,
        QualityCheck::Swapped,
        QualityCheck::Range,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QualityCheck::NoData => "No Data",
            QualityCheck::GrossError => "Gross Error",
            QualityCheck::Swapped => "Swapped",
            QualityCheck::Range => "Range",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerEntry {
    pub check: QualityCheck,
    pub counts: FieldCounts,
}

/// Ordered record of how many cells each quality check altered, one labeled
/// row per check. Created alongside the series with the "No Data" row seeded
/// at zero; the checks fill it in as they run.
#[derive(Debug, Clone, Serialize)]
pub struct CorrectionLedger {
    entries: Vec<LedgerEntry>,
}

impl CorrectionLedger {
    pub fn new() -> Self {
        Self {
            entries: vec![LedgerEntry {
                check: QualityCheck::NoData,
                counts: FieldCounts::zero(),
            }],
        }
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn counts(&self, check: QualityCheck) -> Option<&FieldCounts> {
        self.entries
            .iter()
            .find(|entry| entry.check == check)
            .map(|entry| &entry.counts)
    }

    /// Replace the row for a check, creating it if absent. Used by the
    /// baseline no-data check, whose row is a total rather than an increment.
    pub fn set_counts(&mut self, check: QualityCheck, counts: FieldCounts) {
        match self.entries.iter_mut().find(|entry| entry.check == check) {
            Some(entry) => entry.counts = counts,
            None => self.entries.push(LedgerEntry { check, counts }),
        }
    }

    /// Accumulate an increment into the row for a check, creating it if
    /// absent. A check re-run on its own output adds zero and leaves the
    /// ledger unchanged.
    pub fn add_counts(&mut self, check: QualityCheck, counts: FieldCounts) {
        match self.entries.iter_mut().find(|entry| entry.check == check) {
            Some(entry) => entry.counts.add(&counts),
            None => self.entries.push(LedgerEntry { check, counts }),
        }
    }

    /// Elementwise sum over all rows. For the missing-marking checks this
    /// equals the total missing cells they account for.
    pub fn total_recorded(&self) -> FieldCounts {
        let mut total = FieldCounts::zero();
        for entry in &self.entries {
            total.add(&entry.counts);
        }
        total
    }

    /// Render the ledger as an aligned text table
    pub fn summary(&self) -> String {
        let mut summary = String::new();

        summary.push_str("=== Correction Summary ===\n");
        summary.push_str(&format!(
            "{:<12} {:>8} {:>10} {:>10} {:>12}\n",
            "Check", "Precip", "Max Temp", "Min Temp", "Wind Speed"
        ));

        for entry in &self.entries {
            summary.push_str(&format!(
                "{:<12} {:>8} {:>10} {:>10} {:>12}\n",
                entry.check.label(),
                entry.counts.precip,
                entry.counts.max_temp,
                entry.counts.min_temp,
                entry.counts.wind_speed
            ));
        }

        summary.push_str(&format!(
            "\nTotal affected cells: {}\n",
            self.total_recorded().total()
        ));

        summary
    }
}

impl Default for CorrectionLedger {
    fn default() -> Self {
        Self::new()
    }
}

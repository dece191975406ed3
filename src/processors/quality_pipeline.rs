use tracing::{debug, info};

use crate::models::{CorrectionLedger, DailySeries, FieldCounts, ObsField, QualityCheck};
use crate::utils::constants::{MAX_TEMP_RANGE, NO_DATA_SENTINEL};

/// The four quality checks, applied in a fixed order. Each check mutates the
/// series in place and records its effect in the ledger; later checks operate
/// on the state left by earlier ones, so the order is part of the contract.
pub struct QualityPipeline;

impl QualityPipeline {
    pub fn new() -> Self {
        Self
    }

    /// Run all four checks in their required order
    pub fn run(&self, series: &mut DailySeries, ledger: &mut CorrectionLedger) {
        self.remove_no_data_values(series, ledger);
        self.remove_gross_errors(series, ledger);
        self.fix_swapped_temperatures(series, ledger);
        self.remove_excessive_temperature_ranges(series, ledger);
        info!(
            "quality checks complete: {} cells affected across {} days",
            ledger.total_recorded().total(),
            series.len()
        );
    }

    /// Check 1: replace the -999.00 no-data marker with an explicit missing
    /// value. Sentinel comparison is exact; no tolerance. The ledger row is
    /// the total missing count at this point, the baseline for later checks.
    pub fn remove_no_data_values(&self, series: &mut DailySeries, ledger: &mut CorrectionLedger) {
        for row in series.rows_mut() {
            for field in ObsField::ALL {
                if row.value(field) == Some(NO_DATA_SENTINEL) {
                    row.set_value(field, None);
                }
            }
        }

        let missing = series.missing_counts();
        ledger.set_counts(QualityCheck::NoData, missing);
        debug!("no-data check: {} missing cells", missing.total());
    }

    /// Check 2: mark missing any value outside the physically plausible range
    /// for its field. Fields are screened independently. The ledger row is the
    /// missing-count delta across this check alone, taken as a snapshot diff
    /// so earlier checks are never double-counted.
    pub fn remove_gross_errors(&self, series: &mut DailySeries, ledger: &mut CorrectionLedger) {
        let before = series.missing_counts();

        for row in series.rows_mut() {
            for field in ObsField::ALL {
                if let Some(value) = row.value(field) {
                    if !field.valid_range().contains(&value) {
                        row.set_value(field, None);
                    }
                }
            }
        }

        let removed = series.missing_counts().diff_from(&before);
        ledger.add_counts(QualityCheck::GrossError, removed);
        debug!("gross error check: {} cells removed", removed.total());
    }

    /// Check 3: where min temperature exceeds max temperature, swap the pair.
    /// Inverted extremes are a sensor or labeling mix-up, not bad data, so the
    /// values are kept. Rows with either temperature missing never qualify.
    pub fn fix_swapped_temperatures(&self, series: &mut DailySeries, ledger: &mut CorrectionLedger) {
        let mut count = 0;
        for row in series.rows_mut() {
            if row.temperatures_swapped() {
                row.swap_temperatures();
                count += 1;
            }
        }

        ledger.add_counts(QualityCheck::Swapped, FieldCounts::temperatures_only(count));
        debug!("swap check: {} days corrected", count);
    }

    /// Check 4: where the diurnal range exceeds the credible maximum, discard
    /// both temperatures. An excessive spread discredits both extremes, never
    /// just one side. Must run after the swap check, which changes which rows
    /// qualify.
    pub fn remove_excessive_temperature_ranges(
        &self,
        series: &mut DailySeries,
        ledger: &mut CorrectionLedger,
    ) {
        let mut count = 0;
        for row in series.rows_mut() {
            if row
                .temperature_range()
                .is_some_and(|range| range > MAX_TEMP_RANGE)
            {
                row.max_temp = None;
                row.min_temp = None;
                count += 1;
            }
        }

        ledger.add_counts(QualityCheck::Range, FieldCounts::temperatures_only(count));
        debug!("range check: {} days removed", count);
    }
}

impl Default for QualityPipeline {
    fn default() -> Self {
        Self::new()
    }
}

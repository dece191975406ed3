use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::constants::{
    MAX_VALID_PRECIP, MAX_VALID_TEMP, MAX_VALID_WIND_SPEED, MIN_VALID_PRECIP, MIN_VALID_TEMP,
    MIN_VALID_WIND_SPEED,
};

/// The four observed quantities of a daily station record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObsField {
    Precip,
    MaxTemp,
    MinTemp,
    WindSpeed,
}

impl ObsField {
    pub const ALL: [ObsField; 4] = [
        ObsField::Precip,
        ObsField::MaxTemp,
        ObsField::MinTemp,
        ObsField::WindSpeed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ObsField::Precip => "Precip",
            ObsField::MaxTemp => "Max Temp",
            ObsField::MinTemp => "Min Temp",
            ObsField::WindSpeed => "Wind Speed",
        }
    }

    /// Closed interval of physically plausible values for this field
    pub fn valid_range(&self) -> std::ops::RangeInclusive<f64> {
        match self {
            ObsField::Precip => MIN_VALID_PRECIP..=MAX_VALID_PRECIP,
            ObsField::MaxTemp | ObsField::MinTemp => MIN_VALID_TEMP..=MAX_VALID_TEMP,
            ObsField::WindSpeed => MIN_VALID_WIND_SPEED..=MAX_VALID_WIND_SPEED,
        }
    }
}

/// One day of station measurements. A `None` field is a missing value;
/// comparisons involving a missing value never hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub precip: Option<f64>,
    pub max_temp: Option<f64>,
    pub min_temp: Option<f64>,
    pub wind_speed: Option<f64>,
}

impl DailyObservation {
    pub fn new(
        date: NaiveDate,
        precip: Option<f64>,
        max_temp: Option<f64>,
        min_temp: Option<f64>,
        wind_speed: Option<f64>,
    ) -> Self {
        Self {
            date,
            precip,
            max_temp,
            min_temp,
            wind_speed,
        }
    }

    pub fn value(&self, field: ObsField) -> Option<f64> {
        match field {
            ObsField::Precip => self.precip,
            ObsField::MaxTemp => self.max_temp,
            ObsField::MinTemp => self.min_temp,
            ObsField::WindSpeed => self.wind_speed,
        }
    }

    pub fn set_value(&mut self, field: ObsField, value: Option<f64>) {
        match field {
            ObsField::Precip => self.precip = value,
            ObsField::MaxTemp => self.max_temp = value,
            ObsField::MinTemp => self.min_temp = value,
            ObsField::WindSpeed => self.wind_speed = value,
        }
    }

    /// Diurnal temperature range, when both extremes are present
    pub fn temperature_range(&self) -> Option<f64> {
        match (self.min_temp, self.max_temp) {
            (Some(min), Some(max)) => Some(max - min),
            _ => None,
        }
    }

    /// True when both temperatures are present and min exceeds max
    pub fn temperatures_swapped(&self) -> bool {
        matches!(
            (self.min_temp, self.max_temp),
            (Some(min), Some(max)) if min > max
        )
    }

    pub fn swap_temperatures(&mut self) {
        std::mem::swap(&mut self.min_temp, &mut self.max_temp);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation() -> DailyObservation {
        let date = NaiveDate::from_ymd_opt(2004, 3, 15).unwrap();
        DailyObservation::new(date, Some(2.5), Some(18.0), Some(7.5), Some(3.0))
    }

    #[test]
    fn test_field_access_roundtrip() {
        let mut obs = observation();

        for field in ObsField::ALL {
            assert!(obs.value(field).is_some());
            obs.set_value(field, None);
            assert_eq!(obs.value(field), None);
        }
    }

    #[test]
    fn test_valid_ranges() {
        assert!(ObsField::Precip.valid_range().contains(&25.0));
        assert!(!ObsField::Precip.valid_range().contains(&25.1));
        assert!(ObsField::WindSpeed.valid_range().contains(&0.0));
        assert!(!ObsField::WindSpeed.valid_range().contains(&-0.1));
        assert!(ObsField::MaxTemp.valid_range().contains(&-25.0));
        assert!(!ObsField::MinTemp.valid_range().contains(&35.5));
    }

    #[test]
    fn test_temperature_range() {
        let mut obs = observation();
        assert_eq!(obs.temperature_range(), Some(10.5));

        obs.min_temp = None;
        assert_eq!(obs.temperature_range(), None);
    }

    #[test]
    fn test_temperatures_swapped() {
        let mut obs = observation();
        assert!(!obs.temperatures_swapped());

        obs.min_temp = Some(20.0);
        assert!(obs.temperatures_swapped());

        obs.swap_temperatures();
        assert_eq!(obs.max_temp, Some(20.0));
        assert_eq!(obs.min_temp, Some(18.0));
        assert!(!obs.temperatures_swapped());

        // Missing values never compare as swapped
        obs.max_temp = None;
        obs.min_temp = Some(30.0);
        assert!(!obs.temperatures_swapped());
    }
}

/// Raw source marker for "no measurement taken"
pub const NO_DATA_SENTINEL: f64 = -999.0;

/// Gross error bounds: values outside these closed ranges are physically
/// implausible for a daily station record. Boundary values are valid.
pub const MIN_VALID_PRECIP: f64 = 0.0;
pub const MAX_VALID_PRECIP: f64 = 25.0;
pub const MIN_VALID_WIND_SPEED: f64 = 0.0;
pub const MAX_VALID_WIND_SPEED: f64 = 10.0;
pub const MIN_VALID_TEMP: f64 = -25.0;
pub const MAX_VALID_TEMP: f64 = 35.0;

/// Largest credible difference between daily max and min temperature
pub const MAX_TEMP_RANGE: f64 = 25.0;

/// Date formats accepted in raw data files
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
pub const DATE_FORMAT_US: &str = "%m/%d/%Y";

/// Processing defaults
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB

pub mod constants;
pub mod filename;
pub mod progress;

pub use constants::*;
pub use filename::{generate_default_checks_filename, generate_default_corrected_filename};
pub use progress::ProgressReporter;

pub mod series_analyzer;

pub use series_analyzer::{FieldSummary, QualityReport, SeriesAnalyzer, SeriesStatistics};

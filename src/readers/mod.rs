pub mod series_reader;

pub use series_reader::SeriesReader;

pub mod quality_pipeline;

pub use quality_pipeline::QualityPipeline;

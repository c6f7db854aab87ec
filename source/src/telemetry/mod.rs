//! OTLP metrics pipeline, resource detection and telemetry errors

pub mod error;
pub mod pipeline;
pub mod resource;

pub use error::TelemetryError;
pub use pipeline::MetricsPipeline;

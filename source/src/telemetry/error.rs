//! Telemetry error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("OTLP exporter construction failed: {0}")]
    Exporter(String),

    #[error("Invalid instrument name '{name}': {reason}")]
    InstrumentName { name: String, reason: String },
}

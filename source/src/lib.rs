//! Manual test-data source for an OpenTelemetry metrics collector.
//!
//! Emits synthetic histogram observations over OTLP/gRPC, one observation
//! per line read from standard input. Useful for exercising a collector or
//! metrics backend by hand without writing a full application.

pub mod app;
pub mod core;
pub mod domain;
pub mod telemetry;

//! OTLP metrics pipeline wiring and shutdown

use opentelemetry::global;
use opentelemetry::metrics::{Histogram, Meter, MeterProvider as _};
use opentelemetry_otlp::{MetricExporter, WithExportConfig};
use opentelemetry_sdk::metrics::{
    Aggregation, Instrument, PeriodicReader, SdkMeterProvider, Stream,
};

use super::error::TelemetryError;
use super::resource::get_resource;
use crate::core::config::AppConfig;
use crate::core::constants::{
    EXP_HISTOGRAM_MAX_SCALE, EXP_HISTOGRAM_MAX_SIZE, HISTOGRAM_VIEW_SUFFIX, METER_NAME,
};

/// Owns the meter provider for the lifetime of the run.
///
/// The periodic reader inside the provider collects and exports on its own
/// cadence; this handle only has to stay alive and be shut down once.
pub struct MetricsPipeline {
    provider: SdkMeterProvider,
}

impl MetricsPipeline {
    /// Build the OTLP/gRPC exporter, periodic reader, histogram view and
    /// meter provider, and install the provider as the process-wide default.
    ///
    /// The transport is plaintext; an explicit endpoint is applied only when
    /// configured, otherwise the exporter's environment-driven defaults
    /// (`OTEL_EXPORTER_OTLP_ENDPOINT`, falling back to localhost:4317) apply.
    pub fn init(config: &AppConfig) -> Result<Self, TelemetryError> {
        let mut builder = MetricExporter::builder().with_tonic();
        if let Some(endpoint) = &config.endpoint {
            builder = builder.with_endpoint(endpoint.clone());
        }
        let exporter = builder
            .build()
            .map_err(|e| TelemetryError::Exporter(e.to_string()))?;

        let reader = PeriodicReader::builder(exporter).build();

        let provider = SdkMeterProvider::builder()
            .with_reader(reader)
            .with_resource(get_resource(&config.service_name))
            .with_view(histogram_view)
            .build();

        global::set_meter_provider(provider.clone());
        tracing::debug!(endpoint = ?config.endpoint, "Metrics pipeline initialized");

        Ok(Self { provider })
    }

    /// Meter backing this pipeline's instruments
    pub fn meter(&self) -> Meter {
        self.provider.meter(METER_NAME)
    }

    /// Register the histogram instrument used by the recording loop.
    ///
    /// The SDK silently downgrades invalid instruments to no-ops, so the
    /// name is validated up front and violations surface as errors instead.
    pub fn histogram(
        &self,
        name: &'static str,
        unit: &'static str,
        description: &'static str,
    ) -> Result<Histogram<f64>, TelemetryError> {
        validate_instrument_name(name)?;
        Ok(self
            .meter()
            .f64_histogram(name)
            .with_unit(unit)
            .with_description(description)
            .build())
    }

    /// Flush pending data and release the pipeline.
    ///
    /// Consumes the handle, so shutdown cannot run twice. Errors are logged
    /// at warning level and never alter the exit path.
    pub fn shutdown(self) {
        if let Err(e) = self.provider.shutdown() {
            tracing::warn!(error = %e, "Error shutting down meter provider");
        }
    }
}

/// View replacing the default fixed-bucket aggregation with a bounded base-2
/// exponential histogram for every instrument named like a histogram.
fn histogram_view(instrument: &Instrument) -> Option<Stream> {
    if !is_histogram_name(&instrument.name) {
        return None;
    }
    Some(
        Stream::new().aggregation(Aggregation::Base2ExponentialHistogram {
            max_size: EXP_HISTOGRAM_MAX_SIZE,
            max_scale: EXP_HISTOGRAM_MAX_SCALE,
            record_min_max: false,
        }),
    )
}

fn is_histogram_name(name: &str) -> bool {
    name.ends_with(HISTOGRAM_VIEW_SUFFIX)
}

/// OpenTelemetry instrument naming rules: non-empty, at most 255 characters,
/// leading ASCII letter, remainder in [A-Za-z0-9_.-/].
fn validate_instrument_name(name: &str) -> Result<(), TelemetryError> {
    let invalid = |reason: &str| TelemetryError::InstrumentName {
        name: name.to_string(),
        reason: reason.to_string(),
    };

    if name.is_empty() {
        return Err(invalid("name is empty"));
    }
    if name.len() > 255 {
        return Err(invalid("name exceeds 255 characters"));
    }
    if !name
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic())
    {
        return Err(invalid("name must start with an ASCII letter"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-' | '/'))
    {
        return Err(invalid("name contains characters outside [A-Za-z0-9_.-/]"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SourceMode;

    #[test]
    fn test_init_rejects_malformed_endpoint() {
        let config = AppConfig {
            mode: SourceMode::Random,
            endpoint: Some("http://exa mple:4317".to_string()),
            service_name: "test".to_string(),
        };
        assert!(matches!(
            MetricsPipeline::init(&config),
            Err(TelemetryError::Exporter(_))
        ));
    }

    #[test]
    fn test_histogram_name_matching() {
        assert!(is_histogram_name("otel_manual_histogram"));
        assert!(is_histogram_name("histogram"));
        assert!(!is_histogram_name("otel_manual_counter"));
        assert!(!is_histogram_name("histogram_of_sorts"));
    }

    #[test]
    fn test_validate_instrument_name_accepts_valid() {
        assert!(validate_instrument_name("otel_manual_histogram").is_ok());
        assert!(validate_instrument_name("a.b-c/d_9").is_ok());
    }

    #[test]
    fn test_validate_instrument_name_rejects_invalid() {
        assert!(validate_instrument_name("").is_err());
        assert!(validate_instrument_name("9starts_with_digit").is_err());
        assert!(validate_instrument_name("has space").is_err());
        let long = "a".repeat(256);
        assert!(validate_instrument_name(&long).is_err());
    }
}

//! Observation sink seam between the recording loop and the metrics SDK

use opentelemetry::metrics::Histogram;

/// Write-only destination for observations.
pub trait ObservationSink {
    /// Record one observation with the default (empty) attribute set.
    fn record(&self, value: f64);
}

impl ObservationSink for Histogram<f64> {
    fn record(&self, value: f64) {
        Histogram::record(self, value, &[]);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::ObservationSink;

    /// Collects recorded values for assertions.
    #[derive(Default)]
    pub struct CapturingSink {
        values: Mutex<Vec<f64>>,
    }

    impl CapturingSink {
        pub fn values(&self) -> Vec<f64> {
            self.values.lock().unwrap().clone()
        }
    }

    impl ObservationSink for CapturingSink {
        fn record(&self, value: f64) {
            self.values.lock().unwrap().push(value);
        }
    }
}

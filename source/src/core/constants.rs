// =============================================================================
// Application Identity
// =============================================================================

/// Application name in lowercase (for log filters and identifiers)
pub const APP_NAME_LOWER: &str = "oteltestsource";

/// Default service name attached to every exported metric
pub const DEFAULT_SERVICE_NAME: &str = "oteltestsource";

// =============================================================================
// Environment Variables
// =============================================================================

/// Environment variable for log level/filter
pub const ENV_LOG: &str = "OTELSOURCE_LOG";

/// Environment variable for the observation mode (random or fixed)
pub const ENV_MODE: &str = "OTELSOURCE_MODE";

/// Environment variable for the service name
pub const ENV_SERVICE_NAME: &str = "OTELSOURCE_SERVICE_NAME";

/// Standard OTLP endpoint variable, shared with the exporter's own defaults
pub const ENV_OTLP_ENDPOINT: &str = "OTEL_EXPORTER_OTLP_ENDPOINT";

// =============================================================================
// Instrument Identity
// =============================================================================

/// Meter (instrumentation scope) name
pub const METER_NAME: &str = "test-meter";

/// Histogram instrument name
pub const HISTOGRAM_NAME: &str = "otel_manual_histogram";

/// Histogram unit
pub const HISTOGRAM_UNIT: &str = "ms";

/// Histogram description
pub const HISTOGRAM_DESCRIPTION: &str = "test histogram";

// =============================================================================
// Observation Values
// =============================================================================

/// Exclusive upper bound for random-mode observation values
pub const RANDOM_VALUE_MAX: f64 = 1000.0;

/// Observations recorded once at startup in fixed mode, in order
pub const FIXED_OBSERVATIONS: [f64; 2] = [100.0, 200.0];

// =============================================================================
// Histogram Aggregation View
// =============================================================================

/// Instruments whose name ends with this suffix get the exponential view
pub const HISTOGRAM_VIEW_SUFFIX: &str = "histogram";

/// Maximum bucket count for the base-2 exponential histogram aggregation
pub const EXP_HISTOGRAM_MAX_SIZE: u32 = 160;

/// Maximum scale for the base-2 exponential histogram aggregation
pub const EXP_HISTOGRAM_MAX_SCALE: i8 = 20;

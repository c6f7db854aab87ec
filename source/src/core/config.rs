use std::fmt;

use super::cli::CliConfig;
use super::constants::DEFAULT_SERVICE_NAME;

// =============================================================================
// Source Mode Enum
// =============================================================================

/// Observation value policy for the recording loop.
///
/// The two modes are deliberately separate code paths: random draws a fresh
/// value per input line, fixed records its two values once at startup and
/// then only consumes input as pacing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SourceMode {
    #[default]
    Random,
    Fixed,
}

impl fmt::Display for SourceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceMode::Random => write!(f, "random"),
            SourceMode::Fixed => write!(f, "fixed"),
        }
    }
}

// =============================================================================
// Application Configuration
// =============================================================================

/// Resolved application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Observation value policy
    pub mode: SourceMode,
    /// Explicit OTLP endpoint; when `None` the exporter's own defaults apply
    pub endpoint: Option<String>,
    /// Service name attached to the exported resource
    pub service_name: String,
}

impl AppConfig {
    /// Build the effective configuration from CLI/env values and defaults
    pub fn load(cli: &CliConfig) -> AppConfig {
        AppConfig {
            mode: cli.mode.unwrap_or_default(),
            endpoint: cli.endpoint.clone(),
            service_name: cli
                .service_name
                .clone()
                .unwrap_or_else(|| DEFAULT_SERVICE_NAME.to_string()),
        }
    }
}

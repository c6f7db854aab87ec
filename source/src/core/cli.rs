use clap::Parser;

use super::config::SourceMode;
use super::constants::{ENV_MODE, ENV_OTLP_ENDPOINT, ENV_SERVICE_NAME};

#[derive(Parser)]
#[command(name = "oteltestsource")]
#[command(version, about = "Manual OTLP histogram test-data source", long_about = None)]
pub struct Cli {
    /// Observation mode: a fresh random value per input line, or two fixed
    /// values recorded once at startup
    #[arg(long, short = 'm', env = ENV_MODE, value_parser = parse_mode)]
    pub mode: Option<SourceMode>,

    /// OTLP collector endpoint (e.g. http://localhost:4317)
    #[arg(long, env = ENV_OTLP_ENDPOINT)]
    pub endpoint: Option<String>,

    /// Service name attached to exported metrics
    #[arg(long, env = ENV_SERVICE_NAME)]
    pub service_name: Option<String>,
}

/// Parse observation mode from CLI/env string
fn parse_mode(s: &str) -> Result<SourceMode, String> {
    match s.to_lowercase().as_str() {
        "random" => Ok(SourceMode::Random),
        "fixed" => Ok(SourceMode::Fixed),
        _ => Err(format!(
            "Invalid mode '{}'. Valid options: random, fixed",
            s
        )),
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub mode: Option<SourceMode>,
    pub endpoint: Option<String>,
    pub service_name: Option<String>,
}

/// Parse CLI arguments and return config
pub fn parse() -> CliConfig {
    let cli = Cli::parse();
    CliConfig {
        mode: cli.mode,
        endpoint: cli.endpoint,
        service_name: cli.service_name,
    }
}

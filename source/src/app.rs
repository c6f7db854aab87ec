//! Core application

use anyhow::Result;
use tokio::io::BufReader;

use crate::core::cli;
use crate::core::config::{AppConfig, SourceMode};
use crate::core::constants::{
    APP_NAME_LOWER, ENV_LOG, HISTOGRAM_DESCRIPTION, HISTOGRAM_NAME, HISTOGRAM_UNIT,
};
use crate::domain::{ticker, values};
use crate::telemetry::MetricsPipeline;

pub struct CoreApp;

impl CoreApp {
    /// Run the application with CLI argument parsing
    pub async fn run() -> Result<()> {
        dotenvy::dotenv().ok();
        Self::init_logging();

        tracing::debug!("Application starting");

        let cli_config = cli::parse();
        let config = AppConfig::load(&cli_config);
        tracing::debug!(mode = %config.mode, endpoint = ?config.endpoint, "Configuration loaded");

        // Exporter construction failure is fatal and happens before the
        // pipeline handle exists, so no shutdown runs on this path.
        let pipeline = MetricsPipeline::init(&config)?;

        Self::run_session(&config, pipeline).await
    }

    /// Drive the recording loop, then flush and release the pipeline.
    ///
    /// Every path through this function consumes the pipeline handle exactly
    /// once, including instrument-creation failure and signal exit.
    async fn run_session(config: &AppConfig, pipeline: MetricsPipeline) -> Result<()> {
        let histogram =
            match pipeline.histogram(HISTOGRAM_NAME, HISTOGRAM_UNIT, HISTOGRAM_DESCRIPTION) {
                Ok(histogram) => histogram,
                Err(e) => {
                    pipeline.shutdown();
                    return Err(e.into());
                }
            };

        let input = BufReader::new(tokio::io::stdin());
        let mut output = std::io::stdout();

        tokio::select! {
            result = async {
                match config.mode {
                    SourceMode::Random => {
                        ticker::run_random(input, &mut output, &histogram, values::random_observations()).await
                    }
                    SourceMode::Fixed => ticker::run_fixed(input, &mut output, &histogram).await,
                }
            } => {
                match &result {
                    Ok(recorded) => {
                        tracing::info!(observations = *recorded, "Input closed, exiting");
                    }
                    Err(e) => tracing::warn!(error = %e, "Recording loop failed"),
                }
                pipeline.shutdown();
                result?;
            }
            _ = Self::terminate_signal() => {
                tracing::debug!("Received termination signal, shutting down");
                pipeline.shutdown();
            }
        }

        Ok(())
    }

    /// Resolves when Ctrl+C (or SIGTERM on unix) is received
    async fn terminate_signal() {
        let ctrl_c = async {
            tokio::signal::ctrl_c()
                .await
                .expect("Failed to install Ctrl+C handler");
        };

        #[cfg(unix)]
        let terminate = async {
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
                .expect("Failed to install SIGTERM handler")
                .recv()
                .await;
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<()>();

        tokio::select! {
            _ = ctrl_c => {}
            _ = terminate => {}
        }
    }

    fn init_logging() {
        let default_filter = format!("info,{}=info", APP_NAME_LOWER);

        let filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .unwrap_or(default_filter);

        // Logs go to stderr; stdout is reserved for the observation prompts
        tracing_subscriber::fmt()
            .with_target(false)
            .with_thread_ids(false)
            .with_level(true)
            .with_ansi(true)
            .compact()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}

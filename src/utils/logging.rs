//! Logging setup and configuration

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use crate::config::Config;

pub const LOG_FILE_PREFIX: &str = "spread-monitor.log";

pub struct LoggingGuard {
    pub _guard: tracing_appender::non_blocking::WorkerGuard,
}

/// Directives used when `RUST_LOG` is unset: this crate at `level`, HTTP plumbing at `warn`.
pub fn default_directives(level: &str) -> String {
    format!("warn,arb_spread_monitor={level},reqwest=warn,hyper=warn,hyper_util=warn")
}

pub fn build_env_filter(level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_directives(level))
            .with_context(|| format!("invalid log level '{}'", level)),
    }
}

/// Plain console output for the dashboard; one JSON object per event in the hourly file.
pub fn setup_logging(config: &Config) -> Result<Arc<LoggingGuard>> {
    let file_appender = tracing_appender::rolling::hourly(&config.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true)
                .without_time()
        )
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(non_blocking)
                .with_target(true)
                .with_file(true)
                .with_line_number(true)
                .with_current_span(false)
                .with_span_list(false)
        )
        .with(build_env_filter(&config.log_level)?)
        .try_init()
        .context("global tracing subscriber already installed")?;

    Ok(Arc::new(LoggingGuard { _guard: guard }))
}

pub fn setup_output_directories(config: &Config) -> Result<()> {
    use std::fs;

    fs::create_dir_all(&config.log_dir)
        .with_context(|| format!("creating log directory {}", config.log_dir))?;
    if let Some(parent) = Path::new(&config.preferences_path)
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating preferences directory {}", parent.display()))?;
    }

    Ok(())
}

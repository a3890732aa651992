//! Logging setup
//!
//! Console output is always on; when a log directory is configured, events
//! are additionally written to a daily-rotated `bakeops.log` in that
//! directory. The `RUST_LOG` env var overrides the configured level for
//! each layer.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt};

/// Logging configuration for the server
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default log level (e.g. "info", "debug")
    pub level: String,
    /// File logging is enabled when a directory is set
    pub dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: None,
        }
    }
}

/// Guard that keeps the logging system alive.
///
/// Holds the file appender worker guards; must be kept alive for the
/// duration of the application so buffered log output is flushed.
pub struct LoggingGuard {
    _file_guards: Vec<WorkerGuard>,
}

/// Initialize the global tracing subscriber.
///
/// All filtering is per-layer, so console and file output independently
/// honor `RUST_LOG` with the configured level as fallback.
pub fn init_logging(config: &LoggingConfig) -> anyhow::Result<LoggingGuard> {
    let mut guards: Vec<WorkerGuard> = Vec::new();
    let mut layers: Vec<Box<dyn Layer<Registry> + Send + Sync>> = Vec::new();

    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));
    let console_layer = fmt::layer().with_target(true).with_filter(console_filter);
    layers.push(Box::new(console_layer));

    if let Some(dir) = &config.dir {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

        let appender = RollingFileAppender::new(Rotation::DAILY, dir, "bakeops.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        guards.push(guard);

        let file_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(config.level.clone()));
        let file_layer = fmt::layer()
            .with_writer(writer)
            .with_target(true)
            .with_ansi(false)
            .with_filter(file_filter);
        layers.push(Box::new(file_layer));
    }

    Registry::default()
        .with(layers)
        .try_init()
        .context("Failed to initialize logging")?;

    Ok(LoggingGuard {
        _file_guards: guards,
    })
}

//! TUI configuration and logging setup

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Frontend configuration
///
/// # Environment variables
///
/// | Variable | Default |
/// |----------|---------|
/// | FILA_LOG | info |
/// | FILA_LOG_DIR | ./logs |
#[derive(Debug, Clone)]
pub struct Config {
    pub log_level: String,
    pub log_dir: String,
}

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            log_level: std::env::var("FILA_LOG").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("FILA_LOG_DIR").unwrap_or_else(|_| "./logs".into()),
        }
    }
}

/// Initialize logging to a daily rotating file
///
/// The terminal belongs to the UI, so nothing may write to stdout/stderr.
/// Keep the returned guard alive for the lifetime of the process.
pub fn init_logging(config: &Config) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&config.log_dir)?;

    let appender = tracing_appender::rolling::daily(&config.log_dir, "fila-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(writer).with_ansi(false))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    Ok(guard)
}

//! Tracing subscriber setup for the client binary.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::ClientConfig;

pub const LOG_FILE: &str = "dungeon-bot.log";

/// Installs the global subscriber.
///
/// Logs always go to stderr (stdout carries the turns). With
/// `log_to_file` they are mirrored into [`LOG_FILE`] under the configured
/// log directory; keep the returned guard alive until exit so the file
/// writer flushes.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn setup_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard) = if config.log_to_file {
        let dir = config.log_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

        let appender = tracing_appender::rolling::never(&dir, LOG_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if config.log_to_file {
        tracing::info!(file = %config.log_dir().join(LOG_FILE).display(), "Logging to file");
    }

    Ok(guard)
}

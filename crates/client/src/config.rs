//! Client configuration read from the environment.
use std::env;
use std::path::PathBuf;

use crate::dirs;

/// Settings for the replay client itself; bot thresholds live in
/// [`dungeon_bot::BotConfig`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Directory for the log file; the platform cache dir when unset.
    pub log_dir: Option<PathBuf>,
    /// Mirror logs into a file next to stderr.
    pub log_to_file: bool,
}

impl ClientConfig {
    /// Construct client configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BOT_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `BOT_LOG_TO_FILE` - `true` to also write a log file (default: false)
    pub fn from_env() -> Self {
        Self {
            log_dir: env::var_os("BOT_LOG_DIR").map(PathBuf::from),
            log_to_file: read_env::<bool>("BOT_LOG_TO_FILE").unwrap_or(false),
        }
    }

    /// Where log files go.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(dirs::log_dir)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}

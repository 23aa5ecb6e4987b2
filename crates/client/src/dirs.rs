//! Platform-specific directory utilities.

use std::path::PathBuf;

/// Platform-specific log directory for the bot client.
///
/// Follows platform conventions:
/// - macOS: `~/Library/Caches/dungeon-bot/logs`
/// - Linux: `~/.cache/dungeon-bot/logs` (or `$XDG_CACHE_HOME/dungeon-bot/logs`)
/// - Windows: `%LOCALAPPDATA%\dungeon-bot\cache\logs`
/// - Fallback: `<temp dir>/dungeon-bot/logs`
pub fn log_dir() -> PathBuf {
    let base_dir = directories::ProjectDirs::from("", "", "dungeon-bot")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("dungeon-bot"));

    base_dir.join("logs")
}

//! Replay driver for the dungeon player bot.
//!
//! The `dungeon-bot` binary reads recorded observations (serialized
//! [`game_core::LevelView`]s), hands them to a [`game_core::PlayerController`]
//! one at a time, and prints the chosen turns as JSON. It is a driver, not an
//! engine: it never applies a turn or produces the next observation.
//!
//! ```bash
//! # One turn per observation line
//! dungeon-bot replay run.jsonl
//!
//! # Single observation, stricter health threshold
//! dungeon-bot decide level.json --critical-health 70
//! ```

pub mod commands;
pub mod config;
pub mod dirs;
pub mod logging;
pub mod replay;

pub use config::ClientConfig;
pub use replay::{ReplaySummary, decide_file, replay_file, replay_lines};

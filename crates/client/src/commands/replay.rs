//! Replay a JSON Lines file of recorded observations.

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dungeon_bot::{PlayerBot, TracingReporter};
use game_core::PassController;
use tracing::info;

use super::BotArgs;
use crate::replay::replay_file;

/// Replay recorded observations and print one JSON turn per line
#[derive(Parser, Debug)]
pub struct Replay {
    /// JSON Lines file, one serialized observation per line
    #[arg(value_name = "FILE")]
    input: PathBuf,

    #[command(flatten)]
    bot: BotArgs,
}

impl Replay {
    pub fn execute(self) -> Result<()> {
        let stdout = io::stdout();
        let mut output = stdout.lock();
        let mut reporter = TracingReporter::new("replay");

        info!(input = %self.input.display(), "Replaying observations");

        let summary = if self.bot.pass {
            replay_file(&self.input, &mut output, &mut PassController, &mut reporter)?
        } else {
            let config = self.bot.config();
            info!(critical_health = config.critical_health, "Bot configured");
            replay_file(&self.input, &mut output, &mut PlayerBot::new(config), &mut reporter)?
        };

        info!(
            observations = summary.observations,
            steps = summary.steps,
            attacks = summary.attacks,
            passes = summary.passes,
            "Replay complete"
        );
        Ok(())
    }
}

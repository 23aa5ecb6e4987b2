//! Decide a single turn.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use dungeon_bot::{PlayerBot, TracingReporter};
use game_core::PassController;

use super::BotArgs;
use crate::replay::decide_file;

/// Decide the turn for one observation and print it as JSON
#[derive(Parser, Debug)]
pub struct Decide {
    /// JSON file holding one serialized observation
    #[arg(value_name = "FILE")]
    input: PathBuf,

    #[command(flatten)]
    bot: BotArgs,
}

impl Decide {
    pub fn execute(self) -> Result<()> {
        let mut reporter = TracingReporter::new("decide");
        let turn = if self.bot.pass {
            decide_file(&self.input, &mut PassController, &mut reporter)?
        } else {
            decide_file(&self.input, &mut PlayerBot::new(self.bot.config()), &mut reporter)?
        };

        println!("{}", serde_json::to_string(&turn)?);
        Ok(())
    }
}

//! Subcommands of the `dungeon-bot` binary.

mod decide;
mod replay;

pub use decide::Decide;
pub use replay::Replay;

use clap::Args;
use dungeon_bot::BotConfig;

/// Bot tuning flags shared by every subcommand.
///
/// Flags override `BOT_*` environment variables, which override defaults.
#[derive(Args, Clone, Debug, Default)]
pub struct BotArgs {
    /// Health at or below which the bot only seeks refuge
    #[arg(long, value_name = "HP")]
    critical_health: Option<u32>,

    /// Answer every observation with a pass instead of running the bot
    #[arg(long)]
    pass: bool,
}

impl BotArgs {
    pub fn config(&self) -> BotConfig {
        let mut config = BotConfig::from_env();
        if let Some(health) = self.critical_health {
            config.critical_health = health;
        }
        config
    }
}

//! `dungeon-bot` binary entry point.

use anyhow::Result;
use clap::Parser;
use dungeon_bot_client::commands::{Decide, Replay};
use dungeon_bot_client::{ClientConfig, logging};

/// Drive the dungeon player bot from recorded observations
#[derive(Parser)]
#[command(name = "dungeon-bot")]
#[command(about = "Replay recorded dungeon observations through the player bot", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Replay a JSON Lines file, printing one turn per observation
    Replay(Replay),

    /// Decide the turn for a single observation
    Decide(Decide),
}

fn main() -> Result<()> {
    // Load .env file if it exists (BOT_* settings)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();
    let _guard = logging::setup_logging(&config)?;

    match cli.command {
        Command::Replay(cmd) => cmd.execute(),
        Command::Decide(cmd) => cmd.execute(),
    }
}

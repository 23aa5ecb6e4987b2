//! Feeds recorded observations to a controller and writes its turns.
//!
//! The replay never simulates anything: each recorded observation is handed
//! to the controller as-is, in file order, and the chosen turn is written as
//! one JSON object per line.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use game_core::{GameError, LevelView, MessageReporter, PlayerController, Turn};
use tracing::debug;

/// Tally of a finished replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub observations: usize,
    pub steps: usize,
    pub attacks: usize,
    pub passes: usize,
}

impl ReplaySummary {
    fn record(&mut self, turn: Turn) {
        self.observations += 1;
        match turn {
            Turn::Step(_) => self.steps += 1,
            Turn::Attack(_) => self.attacks += 1,
            Turn::Pass => self.passes += 1,
        }
    }
}

/// Replays a JSON Lines stream of observations.
///
/// Blank lines are skipped. `source` names the input in error messages.
///
/// # Errors
///
/// Malformed observations, controller faults, and write failures, each with
/// the offending line number.
pub fn replay_lines<R, W, C>(
    input: R,
    output: &mut W,
    controller: &mut C,
    reporter: &mut dyn MessageReporter,
    source: &str,
) -> Result<ReplaySummary>
where
    R: BufRead,
    W: Write,
    C: PlayerController,
{
    let mut summary = ReplaySummary::default();

    for (index, line) in input.lines().enumerate() {
        let line_no = index + 1;
        let line = line.with_context(|| format!("{source}:{line_no}: failed to read line"))?;
        if line.trim().is_empty() {
            continue;
        }

        let level: LevelView = serde_json::from_str(&line)
            .with_context(|| format!("{source}:{line_no}: invalid observation"))?;
        let turn = decide(controller, &level, reporter)
            .with_context(|| format!("{source}:{line_no}: controller failed"))?;
        debug!(line = line_no, %turn, "replayed observation");

        serde_json::to_writer(&mut *output, &turn)?;
        writeln!(output)?;
        summary.record(turn);
    }

    output.flush()?;
    Ok(summary)
}

/// [`replay_lines`] over a file on disk.
pub fn replay_file<W, C>(
    path: &Path,
    output: &mut W,
    controller: &mut C,
    reporter: &mut dyn MessageReporter,
) -> Result<ReplaySummary>
where
    W: Write,
    C: PlayerController,
{
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    replay_lines(
        BufReader::new(file),
        output,
        controller,
        reporter,
        &path.display().to_string(),
    )
}

/// Decides a single turn for the observation stored in `path`.
pub fn decide_file<C>(
    path: &Path,
    controller: &mut C,
    reporter: &mut dyn MessageReporter,
) -> Result<Turn>
where
    C: PlayerController,
{
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let level: LevelView = serde_json::from_str(&json)
        .with_context(|| format!("{}: invalid observation", path.display()))?;
    decide(controller, &level, reporter)
        .with_context(|| format!("{}: controller failed", path.display()))
}

fn decide<C>(
    controller: &mut C,
    level: &LevelView,
    reporter: &mut dyn MessageReporter,
) -> Result<Turn>
where
    C: PlayerController,
{
    controller
        .make_turn(level, reporter)
        .map_err(|err| anyhow!("{} [{}]: {err}", err.error_code(), err.severity().as_str()))
}

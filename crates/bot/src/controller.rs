//! The host-facing bot.

use game_core::{LevelView, MessageReporter, PlayerController, Turn};
use tracing::{debug, error};

use crate::config::BotConfig;
use crate::decision::{self, Decision};
use crate::error::BotError;
use crate::memory::WorldMemory;

/// Player controller driven by the decision ladder.
///
/// Owns the cross-turn [`WorldMemory`]; everything else is recomputed from
/// the observation each turn.
#[derive(Clone, Debug, Default)]
pub struct PlayerBot {
    config: BotConfig,
    memory: Option<WorldMemory>,
}

impl PlayerBot {
    pub fn new(config: BotConfig) -> Self {
        Self { config, memory: None }
    }

    /// Memory accumulated so far; `None` before the first turn.
    pub fn memory(&self) -> Option<&WorldMemory> {
        self.memory.as_ref()
    }

    /// Observes the level and runs the ladder, without reporting.
    ///
    /// # Errors
    ///
    /// Fatal cost-model faults; see [`BotError`].
    pub fn decide(&mut self, level: &LevelView) -> Result<Decision, BotError> {
        let memory = match self.memory.take() {
            Some(mut memory) => {
                memory.observe(&level.field, level.player.location);
                memory
            }
            None => WorldMemory::from_field(&level.field),
        };
        let memory = self.memory.insert(memory);

        decision::decide(level, memory, &self.config)
    }
}

impl PlayerController for PlayerBot {
    type Error = BotError;

    fn make_turn(
        &mut self,
        level: &LevelView,
        reporter: &mut dyn MessageReporter,
    ) -> Result<Turn, Self::Error> {
        let decision = self.decide(level).inspect_err(|err| {
            error!(error = %err, player = %level.player.location, "decision aborted");
        })?;

        debug!(
            turn = %decision.turn,
            reason = %decision.reason,
            health = level.player.health,
            "turn decided"
        );
        reporter.report(&decision.to_string());
        Ok(decision.turn)
    }
}

#[cfg(test)]
mod tests {
    use game_core::{Direction, FieldView, GameError, Location};

    use super::*;

    #[test]
    fn first_turn_builds_memory_and_reports() {
        let level = LevelView::from_ascii(["@..E"]).unwrap();
        let mut bot = PlayerBot::default();
        let mut messages: Vec<String> = Vec::new();

        let turn = bot.make_turn(&level, &mut messages).unwrap();

        assert_eq!(turn, Turn::Step(Direction::East));
        assert_eq!(messages, ["step east (explore)"]);
        assert_eq!(bot.memory().and_then(WorldMemory::known_exit), Some(Location::new(3, 0)));
    }

    #[test]
    fn memory_carries_over_between_turns() {
        let mut bot = PlayerBot::new(BotConfig::default());
        let first = LevelView::from_ascii(["@.?", "###"]).unwrap();
        bot.decide(&first).unwrap();

        let second = LevelView::from_ascii(["?@.", "###"]).unwrap();
        bot.decide(&second).unwrap();

        let memory = bot.memory().unwrap();
        assert_eq!(memory.explored().len(), 3);
        assert!(memory.frontier().is_empty());
    }

    #[test]
    fn unmodeled_terrain_aborts_the_turn() {
        let mut level = LevelView::from_ascii(["@..E"]).unwrap();
        let mut bot = PlayerBot::default();
        bot.decide(&level).unwrap();

        level.field = FieldView::from_rows(["..3E"]).unwrap();
        let mut messages: Vec<String> = Vec::new();
        let err = bot.make_turn(&level, &mut messages).unwrap_err();

        assert!(err.severity().is_fatal());
        assert_eq!(err.error_code(), "BOT_UNMODELED_TERRAIN");
        assert!(messages.is_empty());
    }
}

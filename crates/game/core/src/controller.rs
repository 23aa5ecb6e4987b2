//! Abstraction for sourcing the player's turn.
//!
//! Hosts plug in [`PlayerController`] implementations so the same level can be
//! driven by a scripted bot, a replay fixture, or a trivial fallback.

use crate::error::{GameError, NeverError};
use crate::turn::Turn;
use crate::view::LevelView;

/// Write-only diagnostics sink supplied by the host.
///
/// Messages are advisory; controllers never read them back and decisions must
/// not depend on them.
pub trait MessageReporter {
    fn report(&mut self, message: &str);
}

/// Collects messages in memory (handy in tests).
impl MessageReporter for Vec<String> {
    fn report(&mut self, message: &str) {
        self.push(message.to_owned());
    }
}

/// Produces exactly one turn per call, based on the current observation.
///
/// The host calls `make_turn` once per discrete turn and blocks for the
/// result; turns never overlap, so implementations may keep plain mutable
/// state between calls.
pub trait PlayerController {
    type Error: GameError;

    /// Decide the turn for the observed level.
    ///
    /// # Errors
    ///
    /// Implementations return an error only for faults the host should act
    /// on (see [`GameError::severity`]); "nothing useful to do" is `Turn::Pass`.
    fn make_turn(
        &mut self,
        level: &LevelView,
        reporter: &mut dyn MessageReporter,
    ) -> Result<Turn, Self::Error>;
}

/// A controller that always passes.
/// Useful for testing or as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct PassController;

impl PlayerController for PassController {
    type Error = NeverError;

    fn make_turn(
        &mut self,
        _level: &LevelView,
        _reporter: &mut dyn MessageReporter,
    ) -> Result<Turn, Self::Error> {
        Ok(Turn::Pass)
    }
}

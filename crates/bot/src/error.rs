//! Faults raised while deciding a turn.
use game_core::{ErrorSeverity, GameError, Location};

use crate::cost::CostModel;

/// Modeling faults. Every variant is fatal: the active cost model has no rule
/// for what the host reported, so any cost it produced would be a guess.
///
/// "No path" and "nothing to do" are not errors; they fall through the
/// decision ladder and end in [`game_core::Turn::Pass`] at worst.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BotError {
    #[error("{model} cost model has no rule for terrain code {code} at {location}")]
    UnmodeledTerrain {
        model: CostModel,
        location: Location,
        code: u16,
    },

    #[error("{model} cost model was asked about {location}, which is outside the observed field")]
    UnclassifiedCell { model: CostModel, location: Location },
}

impl GameError for BotError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::UnmodeledTerrain { .. } => "BOT_UNMODELED_TERRAIN",
            Self::UnclassifiedCell { .. } => "BOT_UNCLASSIFIED_CELL",
        }
    }
}

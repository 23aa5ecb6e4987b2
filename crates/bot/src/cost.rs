//! Per-objective cost of entering a cell.
//!
//! Every objective weighs the same map differently: a monster is the target
//! when hunting but an obstacle when fleeing. A [`CostModel`] is the small
//! rule table for one objective. Rules are tried top to bottom and the first
//! match wins:
//!
//! | model              | blocked (100)            | free (0)           | floor     |
//! |--------------------|--------------------------|--------------------|-----------|
//! | `approach-monster` | exit, item               | monster            | open      |
//! | `seek-health`      | monster, item            | exit, health pack  | open      |
//! | `flee-monsters`    | monster, item            | exit               | open      |
//! | `approach-item`    | monster, non-upgrade     | upgrade item, exit | open      |
//! | `approach-exit`    | monster, item            | exit               | 1 or open |
//!
//! Walls and traps block under every model and hidden cells always cost 10.
//!
//! "Open" is 10 minus the number of walls and traps among the eight
//! surrounding cells, which steers paths out of cramped, trapped corridors.

use game_core::{CellType, Connectivity, LevelView, Location};

use crate::error::BotError;

/// Cost of a cell the path should avoid unless nothing else connects.
pub const BLOCKED: u32 = 100;
/// Cost of entering a cell that is itself the point of the objective.
pub const FREE: u32 = 0;
/// Open-floor cost before the hazard discount.
pub const BASE_OPEN: u32 = 10;
/// Cost of a remembered cell that is out of sight this turn.
pub const HIDDEN: u32 = 10;
/// Flat floor cost once the exit location is known.
pub const KNOWN_EXIT_STEP: u32 = 1;

/// Rule table for one navigation objective.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum CostModel {
    ApproachMonster,
    SeekHealth,
    FleeMonsters,
    /// Bonuses of the currently equipped item; `(0, 0)` with nothing equipped.
    ApproachItem { attack: i32, defence: i32 },
    ApproachExit { exit_known: bool },
}

/// What stands on a cell besides its terrain.
#[derive(Clone, Copy, Debug, Default)]
struct Occupants {
    monster: bool,
    health_pack: bool,
    /// `Some(is_upgrade)` when an item lies there.
    item: Option<bool>,
}

impl CostModel {
    /// The item model for whatever the player currently has equipped.
    pub fn approach_item(level: &LevelView) -> Self {
        let (attack, defence) = level
            .player
            .equipped
            .as_ref()
            .map_or((0, 0), |item| (item.attack_bonus, item.defence_bonus));
        CostModel::ApproachItem { attack, defence }
    }

    /// Weight of stepping onto `location` this turn.
    ///
    /// # Errors
    ///
    /// [`BotError::UnmodeledTerrain`] for host terrain codes no model covers,
    /// [`BotError::UnclassifiedCell`] for locations outside the field.
    pub fn cost(self, location: Location, level: &LevelView) -> Result<u32, BotError> {
        let cell = level
            .cell(location)
            .ok_or(BotError::UnclassifiedCell { model: self, location })?;
        let occupants = self.occupants(location, level);

        if cell.is_hazard() || self.blocks(cell, occupants) {
            return Ok(BLOCKED);
        }
        if self.frees(cell, occupants) {
            return Ok(FREE);
        }

        match cell {
            CellType::Empty | CellType::PlayerStart => Ok(self.floor_cost(location, level)),
            CellType::Hidden => Ok(HIDDEN),
            CellType::Custom(code) => Err(BotError::UnmodeledTerrain {
                model: self,
                location,
                code,
            }),
            // Settled above by every model.
            CellType::Wall | CellType::Trap | CellType::Exit => Ok(BLOCKED),
        }
    }

    fn occupants(self, location: Location, level: &LevelView) -> Occupants {
        Occupants {
            monster: level.monster_at(location).is_some(),
            health_pack: level.health_pack_at(location).is_some(),
            item: level.item_at(location).map(|item| match self {
                CostModel::ApproachItem { attack, defence } => {
                    item.attack_bonus > attack && item.defence_bonus > defence
                }
                _ => false,
            }),
        }
    }

    fn blocks(self, cell: CellType, occupants: Occupants) -> bool {
        match self {
            CostModel::ApproachMonster => cell == CellType::Exit || occupants.item.is_some(),
            CostModel::SeekHealth | CostModel::FleeMonsters | CostModel::ApproachExit { .. } => {
                occupants.monster || occupants.item.is_some()
            }
            CostModel::ApproachItem { .. } => occupants.monster || occupants.item == Some(false),
        }
    }

    fn frees(self, cell: CellType, occupants: Occupants) -> bool {
        match self {
            CostModel::ApproachMonster => occupants.monster,
            CostModel::SeekHealth => cell == CellType::Exit || occupants.health_pack,
            CostModel::FleeMonsters | CostModel::ApproachExit { .. } => cell == CellType::Exit,
            CostModel::ApproachItem { .. } => {
                occupants.item == Some(true) || cell == CellType::Exit
            }
        }
    }

    fn floor_cost(self, location: Location, level: &LevelView) -> u32 {
        match self {
            CostModel::ApproachExit { exit_known: true } => KNOWN_EXIT_STEP,
            _ => open_cost(location, level),
        }
    }
}

/// [`BASE_OPEN`] minus the walls and traps around `location`.
///
/// Neighbours outside the field do not count.
pub fn open_cost(location: Location, level: &LevelView) -> u32 {
    let hazards = location
        .neighbours(Connectivity::Eight)
        .into_iter()
        .filter(|&next| level.cell(next).is_some_and(CellType::is_hazard))
        .count();
    BASE_OPEN.saturating_sub(hazards as u32)
}

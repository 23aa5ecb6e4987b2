//! Navigation objectives: where to go and how to weigh the way there.
//!
//! An [`Objective`] pairs a [`Goal`] predicate with a [`CostModel`] and runs
//! one [`PathFinder`] query for the player's position.

use game_core::{LevelView, Location};
use tracing::debug;

use crate::cost::CostModel;
use crate::error::BotError;
use crate::memory::WorldMemory;
use crate::path::{PathFinder, PathPlan};

/// Which cells end a search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    /// Any cell holding a monster.
    Monster,
    /// A health pack, the known exit, or a cell bordering the frontier.
    Refuge,
    /// An item that beats the equipped one on both bonuses.
    UpgradeItem,
    /// The known exit or a cell bordering the frontier.
    ExitOrFrontier,
}

impl Goal {
    pub fn matches(self, location: Location, level: &LevelView, memory: &WorldMemory) -> bool {
        match self {
            Goal::Monster => level.monster_at(location).is_some(),
            Goal::Refuge => {
                level.health_pack_at(location).is_some()
                    || exit_or_frontier(location, level, memory)
            }
            Goal::UpgradeItem => level.item_at(location).is_some_and(|item| level.is_upgrade(item)),
            Goal::ExitOrFrontier => exit_or_frontier(location, level, memory),
        }
    }
}

fn exit_or_frontier(location: Location, level: &LevelView, memory: &WorldMemory) -> bool {
    memory.known_exit() == Some(location) || memory.is_frontier_adjacent(location, &level.field)
}

/// One thing the bot can try to walk toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Objective {
    SeekHealth,
    Flee,
    ApproachMonster,
    ApproachItem,
    Explore,
}

impl Objective {
    pub const fn goal(self) -> Goal {
        match self {
            Objective::SeekHealth | Objective::Flee => Goal::Refuge,
            Objective::ApproachMonster => Goal::Monster,
            Objective::ApproachItem => Goal::UpgradeItem,
            Objective::Explore => Goal::ExitOrFrontier,
        }
    }

    pub fn cost_model(self, level: &LevelView, memory: &WorldMemory) -> CostModel {
        match self {
            Objective::SeekHealth => CostModel::SeekHealth,
            Objective::Flee => CostModel::FleeMonsters,
            Objective::ApproachMonster => CostModel::ApproachMonster,
            Objective::ApproachItem => CostModel::approach_item(level),
            Objective::Explore => CostModel::ApproachExit {
                exit_known: memory.known_exit().is_some(),
            },
        }
    }

    /// Plans from the player's position toward this objective.
    ///
    /// # Errors
    ///
    /// Propagates the cost model's fatal faults.
    pub fn plan(
        self,
        level: &LevelView,
        memory: &WorldMemory,
    ) -> Result<Option<PathPlan>, BotError> {
        let goal = self.goal();
        let model = self.cost_model(level, memory);
        let source = level.player.location;

        let plan = PathFinder::new(memory.explored()).plan(
            source,
            |location| goal.matches(location, level, memory),
            |location| model.cost(location, level),
        )?;

        debug!(objective = %self, %goal, %model, ?plan, "planned");
        Ok(plan)
    }
}

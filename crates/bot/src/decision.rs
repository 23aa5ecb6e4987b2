//! The per-turn decision ladder.
//!
//! Rungs are tried strictly in order and the first one that produces a turn
//! wins:
//!
//! 1. **critical_health**: health at or below the threshold, walk toward a
//!    refuge (health pack, known exit, frontier).
//! 2. **melee**: a monster on an adjacent cell. A lone monster is attacked unless
//!    health is critical; otherwise the bot tries to flee toward a refuge.
//! 3. **hunt**: any monster on the level, walk toward the nearest one.
//! 4. **upgrade**: a strictly better item is lying around, go get it.
//! 5. **explore**: walk toward the known exit or the nearest frontier.
//!
//! A rung whose path query finds nothing (or finds the player already on the
//! goal) fails and control falls to the next rung. When every rung fails the
//! bot passes.
//!
//! The tree borrows the observation, so it is rebuilt for every turn; it is a
//! handful of small boxes.

use core::fmt;

use behavior_tree::builder::{condition, labeled, selector, sequence};
use behavior_tree::{Behavior, Node, Status};
use game_core::{LevelView, Location, MonsterView, Turn};
use tracing::debug;

use crate::config::BotConfig;
use crate::error::BotError;
use crate::goal::Objective;
use crate::memory::WorldMemory;

/// Why the bot chose its turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reason {
    /// Walking toward an objective.
    Objective(Objective),
    /// Attacking the monster at `target`.
    Melee { target: Location },
    /// No rung produced a turn.
    Idle,
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reason::Objective(objective) => write!(f, "{objective}"),
            Reason::Melee { target } => write!(f, "melee {target}"),
            Reason::Idle => f.write_str("idle"),
        }
    }
}

/// A turn together with the reason it was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decision {
    pub turn: Turn,
    pub reason: Reason,
}

impl Decision {
    pub const fn idle() -> Self {
        Self {
            turn: Turn::Pass,
            reason: Reason::Idle,
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.turn, self.reason)
    }
}

/// Blackboard the ladder reads and writes during one turn.
pub struct DecisionContext<'a> {
    level: &'a LevelView,
    memory: &'a WorldMemory,
    config: &'a BotConfig,
    decision: Option<Decision>,
}

impl<'a> DecisionContext<'a> {
    pub fn new(level: &'a LevelView, memory: &'a WorldMemory, config: &'a BotConfig) -> Self {
        Self {
            level,
            memory,
            config,
            decision: None,
        }
    }

    pub fn is_health_critical(&self) -> bool {
        self.level.player.health <= self.config.critical_health
    }

    /// Monsters the player can hit this turn.
    pub fn adjacent_monsters(&self) -> impl Iterator<Item = &'a MonsterView> + 'a {
        self.level.adjacent_monsters()
    }

    pub fn in_melee(&self) -> bool {
        self.adjacent_monsters().next().is_some()
    }

    /// Exactly one monster in reach and enough health to fight it.
    pub fn can_duel(&self) -> bool {
        !self.is_health_critical() && self.adjacent_monsters().count() == 1
    }

    pub fn sees_monsters(&self) -> bool {
        !self.level.monsters.is_empty()
    }

    pub fn sees_upgrade(&self) -> bool {
        self.level.has_upgrade_item()
    }

    /// Records the chosen turn.
    ///
    /// # Panics
    ///
    /// Panics if a decision was already recorded this turn, which means two
    /// rungs of the ladder succeeded.
    pub fn commit(&mut self, decision: Decision) {
        if let Some(previous) = self.decision {
            panic!("decision already made this turn ({previous}); second one: {decision}");
        }
        self.decision = Some(decision);
    }

    pub fn take_decision(&mut self) -> Option<Decision> {
        self.decision.take()
    }
}

// ============================================================================
// Leaves
// ============================================================================

/// Plans toward an objective and steps onto the first cell of the path.
pub struct StepToward(pub Objective);

impl<'a> Behavior<DecisionContext<'a>, BotError> for StepToward {
    fn tick(&self, ctx: &mut DecisionContext<'a>) -> Result<Status, BotError> {
        let objective = self.0;
        let Some(plan) = objective.plan(ctx.level, ctx.memory)? else {
            return Ok(Status::Failure);
        };
        let Some(step) = plan.first_step else {
            debug!(%objective, goal = %plan.goal, "already standing on the goal");
            return Ok(Status::Failure);
        };
        let Some(turn) = Turn::step_toward(ctx.level.player.location, step) else {
            return Ok(Status::Failure);
        };

        ctx.commit(Decision {
            turn,
            reason: Reason::Objective(objective),
        });
        Ok(Status::Success)
    }
}

/// Attacks the weakest adjacent monster (lowest location on ties).
pub struct AttackWeakest;

impl<'a> Behavior<DecisionContext<'a>, BotError> for AttackWeakest {
    fn tick(&self, ctx: &mut DecisionContext<'a>) -> Result<Status, BotError> {
        let player = ctx.level.player.location;
        let Some(target) = ctx
            .adjacent_monsters()
            .min_by_key(|monster| (monster.health, monster.location))
        else {
            return Ok(Status::Failure);
        };
        let Some(turn) = Turn::attack_toward(player, target.location) else {
            return Ok(Status::Failure);
        };

        ctx.commit(Decision {
            turn,
            reason: Reason::Melee {
                target: target.location,
            },
        });
        Ok(Status::Success)
    }
}

// ============================================================================
// Ladder
// ============================================================================

type Rung<'a> = Node<'a, DecisionContext<'a>, BotError>;

fn guard<'a>(check: fn(&DecisionContext<'a>) -> bool) -> Rung<'a> {
    condition(check)
}

fn step_toward<'a>(objective: Objective) -> Rung<'a> {
    Box::new(StepToward(objective))
}

fn attack_weakest<'a>() -> Rung<'a> {
    Box::new(AttackWeakest)
}

/// Builds the priority ladder for one turn.
pub fn ladder<'a>() -> Rung<'a> {
    selector(vec![
        labeled(
            "critical_health",
            sequence(vec![
                guard(DecisionContext::is_health_critical),
                step_toward(Objective::SeekHealth),
            ]),
        ),
        labeled(
            "melee",
            sequence(vec![
                guard(DecisionContext::in_melee),
                selector(vec![
                    sequence(vec![guard(DecisionContext::can_duel), attack_weakest()]),
                    step_toward(Objective::Flee),
                ]),
            ]),
        ),
        labeled(
            "hunt",
            sequence(vec![
                guard(DecisionContext::sees_monsters),
                step_toward(Objective::ApproachMonster),
            ]),
        ),
        labeled(
            "upgrade",
            sequence(vec![
                guard(DecisionContext::sees_upgrade),
                step_toward(Objective::ApproachItem),
            ]),
        ),
        labeled("explore", step_toward(Objective::Explore)),
    ])
}

/// Decides one turn for the observed level.
///
/// `memory` must already include this turn's observation.
///
/// # Errors
///
/// Fatal cost-model faults from any rung abort the whole decision.
pub fn decide(
    level: &LevelView,
    memory: &WorldMemory,
    config: &BotConfig,
) -> Result<Decision, BotError> {
    let mut ctx = DecisionContext::new(level, memory, config);
    ladder().tick(&mut ctx)?;

    let decision = ctx.take_decision().unwrap_or_else(|| {
        debug!(player = %level.player.location, "no rung produced a turn, passing");
        Decision::idle()
    });
    Ok(decision)
}

//! Decision-and-navigation core of the dungeon player bot.
//!
//! Each turn the [`PlayerBot`] folds the observation into its [`WorldMemory`],
//! then walks a strict priority ladder ([`decision`]) whose rungs each run one
//! shortest-path query ([`PathFinder`]) weighted by an objective-specific
//! [`CostModel`]. The first rung that yields a step or an attack decides the
//! turn; if none does, the bot passes.
//!
//! The crate is synchronous and does no I/O. Hosts talk to it only through
//! [`game_core::PlayerController`].

pub mod config;
pub mod controller;
pub mod cost;
pub mod decision;
pub mod error;
pub mod goal;
pub mod memory;
pub mod path;
pub mod reporter;

pub use config::BotConfig;
pub use controller::PlayerBot;
pub use cost::CostModel;
pub use decision::{Decision, DecisionContext, Reason, decide};
pub use error::BotError;
pub use goal::{Goal, Objective};
pub use memory::WorldMemory;
pub use path::{PathFinder, PathPlan};
pub use reporter::TracingReporter;

//! Observation and turn contract shared by dungeon hosts and player controllers.
//!
//! `game-core` defines what a controller sees each turn ([`LevelView`]) and what
//! it may answer ([`Turn`]). Hosts build a fresh view per turn, hand it to a
//! [`PlayerController`] together with a [`MessageReporter`], and apply the
//! returned turn. Nothing in this crate reaches into host internals; the view
//! and the turn are the whole interface.
pub mod controller;
pub mod error;
pub mod field;
pub mod location;
pub mod turn;
pub mod view;

pub use controller::{MessageReporter, PassController, PlayerController};
pub use error::{ErrorSeverity, GameError, NeverError};
pub use field::{CellType, FieldError, FieldView};
pub use location::{Connectivity, Location, Offset};
pub use turn::{Direction, Turn};
pub use view::{HealthPackView, ItemView, LevelView, MonsterView, PlayerView};

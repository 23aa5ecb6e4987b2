//! The answer a controller gives for one turn.

use core::fmt;

use crate::location::{Location, Offset};

// ============================================================================
// Direction
// ============================================================================

/// Compass direction of a single step or attack.
///
/// Coordinate system: Y-axis increases downward (south), X-axis increases
/// rightward (east), matching field row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    /// Returns the offset for this direction.
    pub const fn offset(self) -> Offset {
        match self {
            Direction::North => Offset::new(0, -1),
            Direction::South => Offset::new(0, 1),
            Direction::East => Offset::new(1, 0),
            Direction::West => Offset::new(-1, 0),
            Direction::NorthEast => Offset::new(1, -1),
            Direction::NorthWest => Offset::new(-1, -1),
            Direction::SouthEast => Offset::new(1, 1),
            Direction::SouthWest => Offset::new(-1, 1),
        }
    }

    /// Maps a unit or diagonal vector back to a direction.
    ///
    /// Returns `None` for the zero vector and for anything longer than one step.
    pub fn from_offset(offset: Offset) -> Option<Self> {
        Self::all().into_iter().find(|d| d.offset() == offset)
    }

    /// Returns all 8 directions.
    pub const fn all() -> [Direction; 8] {
        [
            Direction::North,
            Direction::South,
            Direction::East,
            Direction::West,
            Direction::NorthEast,
            Direction::NorthWest,
            Direction::SouthEast,
            Direction::SouthWest,
        ]
    }
}

// ============================================================================
// Turn
// ============================================================================

/// Exactly one action per turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "kind", content = "direction", rename_all = "snake_case")
)]
pub enum Turn {
    /// Move one cell.
    Step(Direction),
    /// Hit whatever occupies the adjacent cell.
    Attack(Direction),
    /// Explicit no-op turn.
    Pass,
}

impl Turn {
    /// Step from `from` onto the adjacent cell `to`.
    pub fn step_toward(from: Location, to: Location) -> Option<Self> {
        Direction::from_offset(to - from).map(Turn::Step)
    }

    /// Attack the adjacent cell `target` from `from`.
    pub fn attack_toward(from: Location, target: Location) -> Option<Self> {
        Direction::from_offset(target - from).map(Turn::Attack)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Turn::Step(direction) => write!(f, "step {direction}"),
            Turn::Attack(direction) => write!(f, "attack {direction}"),
            Turn::Pass => f.write_str("pass"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_round_trip_through_directions() {
        for direction in Direction::all() {
            assert_eq!(Direction::from_offset(direction.offset()), Some(direction));
        }
        assert_eq!(Direction::from_offset(Offset::new(0, 0)), None);
        assert_eq!(Direction::from_offset(Offset::new(2, 0)), None);
    }

    #[test]
    fn north_is_up_the_rows() {
        let from = Location::new(2, 2);
        assert_eq!(
            Turn::step_toward(from, Location::new(2, 1)),
            Some(Turn::Step(Direction::North))
        );
        assert_eq!(
            Turn::attack_toward(from, Location::new(3, 3)),
            Some(Turn::Attack(Direction::SouthEast))
        );
        assert_eq!(Turn::step_toward(from, Location::new(4, 2)), None);
    }

    #[test]
    fn display_is_readable() {
        assert_eq!(Turn::Step(Direction::NorthWest).to_string(), "step north_west");
        assert_eq!(Turn::Pass.to_string(), "pass");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn turns_serialize_as_tagged_objects() {
        let json = serde_json::to_string(&Turn::Attack(Direction::East)).unwrap();
        assert_eq!(json, r#"{"kind":"attack","direction":"east"}"#);
        let pass: Turn = serde_json::from_str(r#"{"kind":"pass"}"#).unwrap();
        assert_eq!(pass, Turn::Pass);
    }
}

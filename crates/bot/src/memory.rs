//! What the bot remembers about the level between turns.
//!
//! The host only reports what is visible this turn, so the bot keeps three
//! facts across turns of one run:
//!
//! - **explored**: every cell ever seen as walkable floor (the path graph),
//! - **frontier**: cells seen as hidden that have never been seen since,
//! - **exit**: the exit location, once it has been seen unambiguously.
//!
//! Seeing the player standing on [`CellType::PlayerStart`] marks a new run and
//! wipes the memory.

use std::collections::BTreeSet;

use game_core::{CellType, Connectivity, FieldView, Location};
use tracing::{debug, info};

/// Cross-turn knowledge of one run through a level.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WorldMemory {
    explored: BTreeSet<Location>,
    frontier: BTreeSet<Location>,
    exit: Option<Location>,
}

impl WorldMemory {
    /// Derives memory from a single observation, as at the start of a run.
    pub fn from_field(field: &FieldView) -> Self {
        let explored = field
            .cells()
            .filter(|(_, cell)| cell.is_walkable())
            .map(|(location, _)| location)
            .collect();
        let frontier = field.cells_of_type(CellType::Hidden).collect();

        Self {
            explored,
            frontier,
            exit: sole_exit(field),
        }
    }

    /// Folds this turn's observation into the memory.
    ///
    /// Explored cells only accumulate and the frontier only shrinks, unless
    /// the player is back on its start cell, in which case everything is
    /// rebuilt from `field` alone.
    pub fn observe(&mut self, field: &FieldView, player: Location) {
        if field.get(player) == Some(CellType::PlayerStart) {
            self.reset(field);
            return;
        }

        let before = self.explored.len();
        self.explored.extend(
            field
                .cells()
                .filter(|(_, cell)| cell.is_walkable())
                .map(|(location, _)| location),
        );
        self.frontier
            .retain(|&location| field.get(location) == Some(CellType::Hidden));

        if self.exit.is_none() {
            self.exit = sole_exit(field);
            if let Some(exit) = self.exit {
                info!(%exit, "exit discovered");
            }
        }

        debug!(
            explored = self.explored.len(),
            newly_explored = self.explored.len() - before,
            frontier = self.frontier.len(),
            "memory updated"
        );
    }

    /// Forgets the previous run and starts over from `field`.
    pub fn reset(&mut self, field: &FieldView) {
        *self = Self::from_field(field);
        info!(
            explored = self.explored.len(),
            frontier = self.frontier.len(),
            exit = ?self.exit,
            "memory reset at run start"
        );
    }

    pub fn explored(&self) -> &BTreeSet<Location> {
        &self.explored
    }

    pub fn frontier(&self) -> &BTreeSet<Location> {
        &self.frontier
    }

    pub fn known_exit(&self) -> Option<Location> {
        self.exit
    }

    pub fn is_explored(&self, location: Location) -> bool {
        self.explored.contains(&location)
    }

    /// True for a cell orthogonally next to a frontier cell that `field` still
    /// reports as hidden; standing there is the way to look into the unknown.
    pub fn is_frontier_adjacent(&self, location: Location, field: &FieldView) -> bool {
        location
            .neighbours(Connectivity::Four)
            .into_iter()
            .any(|next| self.frontier.contains(&next) && field.get(next) == Some(CellType::Hidden))
    }
}

/// The exit location when exactly one exit cell is visible.
fn sole_exit(field: &FieldView) -> Option<Location> {
    let mut exits = field.cells_of_type(CellType::Exit);
    let exit = exits.next()?;
    exits.next().is_none().then_some(exit)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(rows: &[&str]) -> FieldView {
        FieldView::from_rows(rows.iter().copied()).unwrap()
    }

    #[test]
    fn first_observation_splits_floor_and_frontier() {
        let memory = WorldMemory::from_field(&field(&["#S.?", "#.E?"]));

        assert_eq!(memory.explored().len(), 4);
        assert!(memory.is_explored(Location::new(2, 1)));
        assert_eq!(
            memory.frontier().iter().copied().collect::<Vec<_>>(),
            [Location::new(3, 0), Location::new(3, 1)]
        );
        assert_eq!(memory.known_exit(), Some(Location::new(2, 1)));
    }

    #[test]
    fn explored_grows_and_frontier_shrinks() {
        let mut memory = WorldMemory::from_field(&field(&["S.??", "####"]));
        let player = Location::new(1, 0);

        memory.observe(&field(&["?..?", "####"]), player);
        assert!(memory.is_explored(Location::new(0, 0)));
        assert!(memory.is_explored(Location::new(2, 0)));
        assert_eq!(memory.frontier().iter().copied().collect::<Vec<_>>(), [Location::new(3, 0)]);

        // Cells that went dark again never rejoin the frontier.
        memory.observe(&field(&["????", "####"]), player);
        assert_eq!(memory.explored().len(), 3);
        assert_eq!(memory.frontier().len(), 1);
    }

    #[test]
    fn exit_is_recorded_once_and_kept() {
        let mut memory = WorldMemory::from_field(&field(&["S..", "???"]));
        let player = Location::new(1, 0);
        assert_eq!(memory.known_exit(), None);

        memory.observe(&field(&["...", "E??"]), player);
        assert_eq!(memory.known_exit(), Some(Location::new(0, 1)));

        memory.observe(&field(&["...", ".?E"]), player);
        assert_eq!(memory.known_exit(), Some(Location::new(0, 1)));
    }

    #[test]
    fn ambiguous_exits_are_not_recorded() {
        let memory = WorldMemory::from_field(&field(&["E.S.E"]));
        assert_eq!(memory.known_exit(), None);
    }

    #[test]
    fn standing_on_start_resets_the_run() {
        let mut memory = WorldMemory::from_field(&field(&["S.E", "..."]));
        memory.observe(&field(&["...", "..."]), Location::new(1, 1));
        assert_eq!(memory.explored().len(), 6);

        memory.observe(&field(&["S??", "?#?"]), Location::new(0, 0));
        assert_eq!(memory.explored().iter().copied().collect::<Vec<_>>(), [Location::ORIGIN]);
        assert_eq!(memory.frontier().len(), 4);
        assert_eq!(memory.known_exit(), None);
    }

    #[test]
    fn frontier_adjacency_requires_a_still_hidden_neighbour() {
        let first = field(&["S.?", "..#"]);
        let memory = WorldMemory::from_field(&first);

        assert!(memory.is_frontier_adjacent(Location::new(1, 0), &first));
        assert!(!memory.is_frontier_adjacent(Location::new(1, 1), &first));

        let revealed = field(&["...", "..#"]);
        assert!(!memory.is_frontier_adjacent(Location::new(1, 0), &revealed));
    }
}

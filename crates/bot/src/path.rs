//! Shortest-path queries over the explored part of the level.
//!
//! The graph is the set of explored cells connected orthogonally; entering a
//! cell costs whatever the caller's cost function says. The search is plain
//! Dijkstra that stops at the first goal it settles, and only ever answers
//! with the single next step: the ladder re-plans from scratch every turn.

use std::cmp::Reverse;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};

use game_core::{Connectivity, Location};

/// Answer to a path query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathPlan {
    /// The goal cell the search settled first.
    pub goal: Location,
    /// Cell to step onto next, or `None` when the source already is the goal.
    pub first_step: Option<Location>,
    /// Sum of entry costs along the path.
    pub cost: u32,
}

/// Dijkstra over a set of explored cells.
#[derive(Clone, Copy, Debug)]
pub struct PathFinder<'m> {
    explored: &'m BTreeSet<Location>,
}

impl<'m> PathFinder<'m> {
    pub fn new(explored: &'m BTreeSet<Location>) -> Self {
        Self { explored }
    }

    /// Finds the cheapest explored goal reachable from `source`.
    ///
    /// `source` is always part of the graph, explored or not; every other node
    /// and every goal must be explored. Among goals at equal distance the
    /// smallest [`Location`] wins, so results are reproducible.
    ///
    /// Returns `Ok(None)` when no explored cell satisfies `is_goal` or none of
    /// them is reachable.
    ///
    /// # Errors
    ///
    /// Stops at the first error returned by `cost` and hands it back.
    pub fn plan<G, F, E>(
        &self,
        source: Location,
        mut is_goal: G,
        mut cost: F,
    ) -> Result<Option<PathPlan>, E>
    where
        G: FnMut(Location) -> bool,
        F: FnMut(Location) -> Result<u32, E>,
    {
        let goals: BTreeSet<Location> = self
            .explored
            .iter()
            .copied()
            .filter(|&cell| is_goal(cell))
            .collect();
        if goals.is_empty() {
            return Ok(None);
        }

        let mut distance = BTreeMap::from([(source, 0u32)]);
        let mut previous: BTreeMap<Location, Location> = BTreeMap::new();
        let mut settled = BTreeSet::new();
        let mut queue = BinaryHeap::from([Reverse((0u32, source))]);

        while let Some(Reverse((dist, node))) = queue.pop() {
            if !settled.insert(node) {
                continue;
            }

            if goals.contains(&node) {
                return Ok(Some(PathPlan {
                    goal: node,
                    first_step: first_step(&previous, source, node),
                    cost: dist,
                }));
            }

            for next in node.neighbours(Connectivity::Four) {
                if !self.explored.contains(&next) || settled.contains(&next) {
                    continue;
                }
                let candidate = dist.saturating_add(cost(next)?);
                if distance.get(&next).is_none_or(|&known| candidate < known) {
                    distance.insert(next, candidate);
                    previous.insert(next, node);
                    queue.push(Reverse((candidate, next)));
                }
            }
        }

        Ok(None)
    }
}

/// Walks predecessor links back from `goal` to the cell right after `source`.
fn first_step(
    previous: &BTreeMap<Location, Location>,
    source: Location,
    goal: Location,
) -> Option<Location> {
    let mut step = goal;
    while let Some(&before) = previous.get(&step) {
        if before == source {
            return Some(step);
        }
        step = before;
    }
    None
}

//! Compares the path finder against brute-force BFS on random grids.

use std::collections::{BTreeSet, VecDeque};
use std::convert::Infallible;

use dungeon_bot::PathFinder;
use game_core::{Connectivity, Location};

const SIZE: i32 = 9;

/// Tiny deterministic generator so failures reproduce.
struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn chance(&mut self, percent: u64) -> bool {
        self.next() % 100 < percent
    }
}

/// Hop count from `from` to the nearest goal, moving only through `cells`.
fn bfs(cells: &BTreeSet<Location>, from: Location, goals: &BTreeSet<Location>) -> Option<u32> {
    let mut seen = BTreeSet::from([from]);
    let mut queue = VecDeque::from([(from, 0)]);
    while let Some((at, hops)) = queue.pop_front() {
        if goals.contains(&at) {
            return Some(hops);
        }
        for next in at.neighbours(Connectivity::Four) {
            if cells.contains(&next) && seen.insert(next) {
                queue.push_back((next, hops + 1));
            }
        }
    }
    None
}

#[test]
fn first_step_lies_on_a_shortest_route() {
    let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);

    for round in 0..200 {
        let mut cells = BTreeSet::new();
        let mut goals = BTreeSet::new();
        for y in 0..SIZE {
            for x in 0..SIZE {
                if rng.chance(70) {
                    let cell = Location::new(x, y);
                    cells.insert(cell);
                    if rng.chance(5) {
                        goals.insert(cell);
                    }
                }
            }
        }
        let Some(&source) = cells.iter().nth(rng.next() as usize % cells.len().max(1)) else {
            continue;
        };

        let plan = PathFinder::new(&cells)
            .plan(source, |cell| goals.contains(&cell), |_| Ok::<_, Infallible>(1))
            .expect("uniform cost never fails");
        let expected = bfs(&cells, source, &goals);

        match (plan, expected) {
            (None, None) => {}
            (Some(plan), Some(hops)) => {
                assert_eq!(plan.cost, hops, "round {round}: cost differs from BFS");
                assert!(goals.contains(&plan.goal), "round {round}: goal not in goal set");
                match plan.first_step {
                    None => assert_eq!(plan.goal, source, "round {round}"),
                    Some(step) => {
                        assert_eq!(
                            step.manhattan_distance(source),
                            1,
                            "round {round}: not adjacent"
                        );
                        assert_eq!(
                            bfs(&cells, step, &goals),
                            Some(hops - 1),
                            "round {round}: step is off every shortest route"
                        );
                    }
                }
            }
            (plan, hops) => panic!("round {round}: planner {plan:?} vs bfs {hops:?}"),
        }
    }
}

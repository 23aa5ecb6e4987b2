//! Builder utilities for ergonomic behavior tree construction.
//!
//! Instead of writing verbose `Box::new(Sequence::new(vec![...]))`, use
//! `sequence(vec![...])`. Every helper returns a boxed [`Node`] so calls nest.

use crate::{Condition, Labeled, Node, Selector, Sequence};

/// Creates a sequence node.
#[inline]
pub fn sequence<'n, C: 'n, E: 'n>(children: Vec<Node<'n, C, E>>) -> Node<'n, C, E> {
    Box::new(Sequence::new(children))
}

/// Creates a selector node.
#[inline]
pub fn selector<'n, C: 'n, E: 'n>(children: Vec<Node<'n, C, E>>) -> Node<'n, C, E> {
    Box::new(Selector::new(children))
}

/// Creates a condition leaf from a predicate.
#[inline]
pub fn condition<'n, C: 'n, E: 'n, F>(check: F) -> Node<'n, C, E>
where
    F: Fn(&C) -> bool + 'n,
{
    Box::new(Condition::new(check))
}

/// Wraps a subtree so its outcome shows up in traces under `label`.
#[inline]
pub fn labeled<'n, C: 'n, E: 'n>(label: &'static str, child: Node<'n, C, E>) -> Node<'n, C, E> {
    Box::new(Labeled::new(label, child))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn builds_nested_ladder() {
        let tree: Node<'static, u32> = selector(vec![
            labeled("small", condition(|v: &u32| *v < 10)),
            sequence(vec![
                condition(|v: &u32| *v % 2 == 0),
                condition(|v: &u32| *v > 100),
            ]),
        ]);

        assert_eq!(tree.tick(&mut 3), Ok(Status::Success));
        assert_eq!(tree.tick(&mut 200), Ok(Status::Success));
        assert_eq!(tree.tick(&mut 201), Ok(Status::Failure));
        assert_eq!(tree.tick(&mut 50), Ok(Status::Failure));
    }
}

//! Composite behavior nodes.
//!
//! Composite nodes control the execution flow of multiple children:
//! [`Sequence`] (AND logic) and [`Selector`] (OR logic, i.e. a priority ladder).

use crate::{Behavior, Node, Status};

/// Executes children in order until one fails.
///
/// Analogous to a short-circuited `&&`; succeeds only if every child succeeds.
pub struct Sequence<'n, C, E> {
    children: Vec<Node<'n, C, E>>,
}

impl<'n, C, E> Sequence<'n, C, E> {
    /// Creates a new sequence with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty. A sequence with no children is
    /// meaningless and likely indicates a programming error.
    pub fn new(children: Vec<Node<'n, C, E>>) -> Self {
        assert!(
            !children.is_empty(),
            "Sequence must have at least one child"
        );
        Self { children }
    }
}

impl<C, E> Behavior<C, E> for Sequence<'_, C, E> {
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        for child in &self.children {
            if child.tick(ctx)?.is_failure() {
                return Ok(Status::Failure);
            }
        }
        Ok(Status::Success)
    }
}

/// Executes children in order until one succeeds.
///
/// Analogous to a short-circuited `||`. Children are rungs of a strict
/// priority ladder: earlier children always preempt later ones.
pub struct Selector<'n, C, E> {
    children: Vec<Node<'n, C, E>>,
}

impl<'n, C, E> Selector<'n, C, E> {
    /// Creates a new selector with the given children.
    ///
    /// # Panics
    ///
    /// Panics if `children` is empty.
    pub fn new(children: Vec<Node<'n, C, E>>) -> Self {
        assert!(
            !children.is_empty(),
            "Selector must have at least one child"
        );
        Self { children }
    }
}

impl<C, E> Behavior<C, E> for Selector<'_, C, E> {
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        for child in &self.children {
            if child.tick(ctx)?.is_success() {
                return Ok(Status::Success);
            }
        }
        Ok(Status::Failure)
    }
}

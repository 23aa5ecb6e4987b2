//! Core behavior trait.
//!
//! [`Behavior`] is generic over the context (blackboard) `C` the nodes read
//! and write, and over the fault type `E` a node may raise. Trees that cannot
//! fault use the default `E = Infallible`.

use core::convert::Infallible;

use crate::Status;

/// A behavior tree node that can be evaluated against a context.
pub trait Behavior<C, E = Infallible> {
    /// Evaluate this node once.
    ///
    /// # Errors
    ///
    /// A fault is not a failure: composites stop immediately and hand the
    /// error to the caller instead of trying the next child.
    fn tick(&self, ctx: &mut C) -> Result<Status, E>;
}

/// Boxed node borrowing data for `'n`; the unit composites are built from.
pub type Node<'n, C, E = Infallible> = Box<dyn Behavior<C, E> + 'n>;

impl<C, E, B> Behavior<C, E> for Box<B>
where
    B: Behavior<C, E> + ?Sized,
{
    #[inline]
    fn tick(&self, ctx: &mut C) -> Result<Status, E> {
        (**self).tick(ctx)
    }
}

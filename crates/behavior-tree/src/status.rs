//! Status returned by behavior nodes.

/// The result of a tick that did not fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// Conditions: the check held. Actions: the decision was made.
    Success,

    /// Conditions: the check did not hold. Actions: nothing applicable.
    Failure,
}

impl Status {
    /// Maps a predicate result onto a status.
    #[inline]
    pub fn from_bool(holds: bool) -> Self {
        if holds { Status::Success } else { Status::Failure }
    }

    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, Status::Success)
    }

    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, Status::Failure)
    }
}

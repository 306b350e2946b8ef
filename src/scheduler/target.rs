//! The contract between the scheduler and whatever it drives

use crate::sort::SortError;
use std::fmt;

/// Handle returned by [`super::TickScheduler::register`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(pub(crate) u64);

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Anything the scheduler can advance one step per tick
pub trait TickTarget {
    fn can_advance(&self) -> bool;

    /// Take one step and report whether another one is possible.
    ///
    /// Only called while [`TickTarget::can_advance`] is true.
    fn advance_one(&mut self) -> Result<bool, SortError>;
}

impl<T: TickTarget + ?Sized> TickTarget for Box<T> {
    fn can_advance(&self) -> bool {
        (**self).can_advance()
    }

    fn advance_one(&mut self) -> Result<bool, SortError> {
        (**self).advance_one()
    }
}

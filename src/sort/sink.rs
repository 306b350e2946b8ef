//! Move sinks: the collaborators told about every exchange
//!
//! An algorithm owns exactly one sink and calls
//! [`MoveSink::notify_exchange`] once for every exchange it performs, before
//! `step()` returns. Comparisons that do not exchange are never reported.
//!
//! - [`NoopSink`]: discards notifications
//! - [`MoveLog`]: records every pair, and can replay them onto another slice
//! - [`crate::chart::Chart`]: the bar-chart model driven by the UI

use super::errors::SortError;

/// Receives one notification per element exchange
pub trait MoveSink {
    /// Called with `left < right`, both valid positions in the bound sequence.
    fn notify_exchange(&mut self, left: usize, right: usize);
}

impl<S: MoveSink + ?Sized> MoveSink for &mut S {
    fn notify_exchange(&mut self, left: usize, right: usize) {
        (**self).notify_exchange(left, right);
    }
}

/// Check that an exchange pair is strictly increasing and inside `0..len`.
pub fn validate_exchange(left: usize, right: usize, len: usize) -> Result<(), SortError> {
    if left >= right || right >= len {
        return Err(SortError::IndexPolicy { left, right, len });
    }
    Ok(())
}

/// A sink that ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl MoveSink for NoopSink {
    fn notify_exchange(&mut self, _left: usize, _right: usize) {}
}

/// A sink that records the exchanges it is told about, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    exchanges: Vec<(usize, usize)>,
}

impl MoveLog {
    pub fn new() -> Self {
        MoveLog {
            exchanges: Vec::new(),
        }
    }

    /// All recorded exchanges, oldest first
    pub fn exchanges(&self) -> &[(usize, usize)] {
        &self.exchanges
    }

    pub fn len(&self) -> usize {
        self.exchanges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exchanges.is_empty()
    }

    /// Apply every recorded exchange to `values` in order.
    ///
    /// Replaying the log of a finished sort onto a copy of its original input
    /// must reproduce the algorithm's own final sequence.
    pub fn replay<T>(&self, values: &mut [T]) -> Result<(), SortError> {
        for &(left, right) in &self.exchanges {
            validate_exchange(left, right, values.len())?;
            values.swap(left, right);
        }
        Ok(())
    }
}

impl MoveSink for MoveLog {
    fn notify_exchange(&mut self, left: usize, right: usize) {
        self.exchanges.push((left, right));
    }
}

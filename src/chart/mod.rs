//! Bar-chart model mirrored from exchange notifications
//!
//! [`Chart`] never sees the algorithm's sequence. It starts from a copy of
//! the input and applies each exchange it is told about, which is exactly
//! what a rendering layer has to do. The UI draws it; the tests use it to
//! check that the notifications alone reproduce the sorted result.

use crate::sort::sink::{validate_exchange, MoveSink};

/// Bar heights plus the bookkeeping the chart pane displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chart {
    bars: Vec<u32>,
    last_exchange: Option<(usize, usize)>,
    exchanges: u64,
}

impl Chart {
    pub fn new(bars: Vec<u32>) -> Self {
        Chart {
            bars,
            last_exchange: None,
            exchanges: 0,
        }
    }

    pub fn bars(&self) -> &[u32] {
        &self.bars
    }

    /// Tallest bar, used to scale the drawing
    pub fn max_height(&self) -> u32 {
        self.bars.iter().copied().max().unwrap_or(0)
    }

    /// The pair exchanged most recently
    pub fn last_exchange(&self) -> Option<(usize, usize)> {
        self.last_exchange
    }

    /// Number of exchanges applied
    pub fn exchanges(&self) -> u64 {
        self.exchanges
    }
}

impl MoveSink for Chart {
    fn notify_exchange(&mut self, left: usize, right: usize) {
        if let Err(e) = validate_exchange(left, right, self.bars.len()) {
            debug_assert!(false, "{}", e);
            tracing::error!(%e, "ignoring exchange");
            return;
        }
        self.bars.swap(left, right);
        self.last_exchange = Some((left, right));
        self.exchanges += 1;
    }
}

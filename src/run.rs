//! A bound algorithm together with the chart it drives
//!
//! [`SortRun`] is what the UI registers with the scheduler: an [`AnySort`]
//! whose move sink is the [`Chart`] being drawn.

use crate::chart::Chart;
use crate::scheduler::TickTarget;
use crate::sort::{AlgorithmKind, AnySort, SortError, StepSort};

/// One algorithm sorting one copy of the input
#[derive(Debug)]
pub struct SortRun {
    kind: AlgorithmKind,
    sort: AnySort<u32, Chart>,
}

impl SortRun {
    /// Bind `kind` to its own copy of `values`, mirrored into a fresh chart.
    pub fn new(kind: AlgorithmKind, values: &[u32], seed: u64) -> Result<Self, SortError> {
        let chart = Chart::new(values.to_vec());
        let sort = kind.bind(values.to_vec(), chart, seed)?;
        Ok(SortRun { kind, sort })
    }

    pub fn kind(&self) -> AlgorithmKind {
        self.kind
    }

    pub fn chart(&self) -> &Chart {
        self.sort.sink()
    }

    /// The algorithm's own sequence
    pub fn values(&self) -> &[u32] {
        self.sort.elements()
    }

    pub fn moves(&self) -> u64 {
        self.sort.moves()
    }

    pub fn is_finished(&self) -> bool {
        !self.sort.can_advance()
    }
}

impl TickTarget for SortRun {
    fn can_advance(&self) -> bool {
        self.sort.can_advance()
    }

    fn advance_one(&mut self) -> Result<bool, SortError> {
        self.sort.step()?;
        let more = self.sort.can_advance();
        if !more {
            tracing::info!(
                algorithm = self.kind.key(),
                moves = self.sort.moves(),
                exchanges = self.chart().exchanges(),
                "sort finished"
            );
        }
        Ok(more)
    }
}

//! Step-state sorting engine
//!
//! Every algorithm here is an explicit state machine: it owns the sequence it
//! sorts plus a cursor saying exactly where it is, and each call to
//! [`StepSort::step`] performs one elementary unit of work (one comparison,
//! possibly followed by one exchange). Nothing relies on the call stack
//! surviving between steps, so a driver can pause after any step and resume
//! later.
//!
//! # Algorithms
//!
//! - [`bubble`]: adjacent comparison sweeps with a shrinking right bound
//! - [`insertion`]: walks each new element left into the sorted prefix
//! - [`quick`]: Lomuto partitioning over an explicit stack of frames
//! - [`heap`]: build-max-heap then extraction, with a resumable sift cursor
//!
//! # Contract
//!
//! - `bind` rejects an empty sequence with [`SortError::InvalidInput`]
//! - `step` after `can_advance()` went false fails with
//!   [`SortError::IllegalState`], every time
//! - each exchange is reported to the bound [`MoveSink`] exactly once, as
//!   `(left, right)` with `left < right`, before `step` returns
//! - bubble and insertion are stable; quick and heap are not

pub mod bubble;
pub mod errors;
pub mod heap;
pub mod insertion;
pub mod quick;
mod sequence;
pub mod sink;

pub use bubble::BubbleSort;
pub use errors::SortError;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use quick::QuickSort;
pub use sink::{MoveLog, MoveSink, NoopSink};

use std::fmt;
use std::str::FromStr;

/// An algorithm that can be advanced one elementary move at a time
pub trait StepSort {
    /// Human-readable algorithm name
    fn name(&self) -> &'static str;

    /// Whether [`StepSort::step`] may be called. Once false, stays false.
    fn can_advance(&self) -> bool;

    /// Perform exactly one unit of work.
    fn step(&mut self) -> Result<(), SortError>;

    /// Number of completed steps
    fn moves(&self) -> u64;

    /// Step until done, returning how many steps were taken.
    fn run_to_end(&mut self) -> Result<u64, SortError> {
        let start = self.moves();
        while self.can_advance() {
            self.step()?;
        }
        Ok(self.moves() - start)
    }
}

/// Which algorithm to bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlgorithmKind {
    Bubble,
    Insertion,
    Quick,
    RandomizedQuick,
    Heap,
}

impl AlgorithmKind {
    pub const ALL: [AlgorithmKind; 5] = [
        AlgorithmKind::Bubble,
        AlgorithmKind::Insertion,
        AlgorithmKind::Quick,
        AlgorithmKind::RandomizedQuick,
        AlgorithmKind::Heap,
    ];

    /// Display name, as shown in the UI
    pub fn description(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "Bubble Sort",
            AlgorithmKind::Insertion => "Insertion Sort",
            AlgorithmKind::Quick => "Quick Sort",
            AlgorithmKind::RandomizedQuick => "Randomized Quick Sort",
            AlgorithmKind::Heap => "Heap Sort",
        }
    }

    /// Short name accepted on the command line
    pub fn key(self) -> &'static str {
        match self {
            AlgorithmKind::Bubble => "bubble",
            AlgorithmKind::Insertion => "insertion",
            AlgorithmKind::Quick => "quick",
            AlgorithmKind::RandomizedQuick => "random-quick",
            AlgorithmKind::Heap => "heap",
        }
    }

    /// The next kind in [`AlgorithmKind::ALL`], wrapping around
    pub fn next(self) -> Self {
        let index = Self::ALL.iter().position(|k| *k == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    /// Whether equal elements keep their input order
    pub fn is_stable(self) -> bool {
        matches!(self, AlgorithmKind::Bubble | AlgorithmKind::Insertion)
    }

    /// Bind a fresh instance of this algorithm. `seed` is only used by the
    /// randomized quicksort.
    pub fn bind<T: Ord, S: MoveSink>(
        self,
        elements: Vec<T>,
        sink: S,
        seed: u64,
    ) -> Result<AnySort<T, S>, SortError> {
        let sort = match self {
            AlgorithmKind::Bubble => AnySort::Bubble(BubbleSort::bind(elements, sink)?),
            AlgorithmKind::Insertion => AnySort::Insertion(InsertionSort::bind(elements, sink)?),
            AlgorithmKind::Quick => AnySort::Quick(QuickSort::bind(elements, sink)?),
            AlgorithmKind::RandomizedQuick => {
                AnySort::Quick(QuickSort::bind_randomized(elements, sink, seed)?)
            }
            AlgorithmKind::Heap => AnySort::Heap(HeapSort::bind(elements, sink)?),
        };
        tracing::debug!(algorithm = self.key(), "bound sequence");
        Ok(sort)
    }
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for AlgorithmKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.key() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(|k| k.key()).collect();
                format!(
                    "unknown algorithm '{}' (expected one of: {})",
                    s,
                    known.join(", ")
                )
            })
    }
}

/// Any of the step-state algorithms, dispatched by `match`
#[derive(Debug)]
pub enum AnySort<T, S> {
    Bubble(BubbleSort<T, S>),
    Insertion(InsertionSort<T, S>),
    Quick(QuickSort<T, S>),
    Heap(HeapSort<T, S>),
}

impl<T: Ord, S: MoveSink> AnySort<T, S> {
    pub fn elements(&self) -> &[T] {
        match self {
            AnySort::Bubble(s) => s.elements(),
            AnySort::Insertion(s) => s.elements(),
            AnySort::Quick(s) => s.elements(),
            AnySort::Heap(s) => s.elements(),
        }
    }

    pub fn sink(&self) -> &S {
        match self {
            AnySort::Bubble(s) => s.sink(),
            AnySort::Insertion(s) => s.sink(),
            AnySort::Quick(s) => s.sink(),
            AnySort::Heap(s) => s.sink(),
        }
    }

    pub fn into_parts(self) -> (Vec<T>, S) {
        match self {
            AnySort::Bubble(s) => s.into_parts(),
            AnySort::Insertion(s) => s.into_parts(),
            AnySort::Quick(s) => s.into_parts(),
            AnySort::Heap(s) => s.into_parts(),
        }
    }
}

impl<T: Ord, S: MoveSink> StepSort for AnySort<T, S> {
    fn name(&self) -> &'static str {
        match self {
            AnySort::Bubble(s) => s.name(),
            AnySort::Insertion(s) => s.name(),
            AnySort::Quick(s) => s.name(),
            AnySort::Heap(s) => s.name(),
        }
    }

    fn can_advance(&self) -> bool {
        match self {
            AnySort::Bubble(s) => s.can_advance(),
            AnySort::Insertion(s) => s.can_advance(),
            AnySort::Quick(s) => s.can_advance(),
            AnySort::Heap(s) => s.can_advance(),
        }
    }

    fn step(&mut self) -> Result<(), SortError> {
        match self {
            AnySort::Bubble(s) => s.step(),
            AnySort::Insertion(s) => s.step(),
            AnySort::Quick(s) => s.step(),
            AnySort::Heap(s) => s.step(),
        }
    }

    fn moves(&self) -> u64 {
        match self {
            AnySort::Bubble(s) => s.moves(),
            AnySort::Insertion(s) => s.moves(),
            AnySort::Quick(s) => s.moves(),
            AnySort::Heap(s) => s.moves(),
        }
    }
}

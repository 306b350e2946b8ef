//! Quicksort with an explicit stack of partition frames
//!
//! The recursive descent of quicksort is replaced by a [`Frame`] describing
//! the partition in progress and a `Vec<Frame>` of sub-ranges still waiting
//! to be partitioned. Because all progress lives in those two fields, a step
//! boundary can fall anywhere, including in the middle of a partition.
//!
//! # Partitioning
//!
//! Lomuto scheme with the pivot at `right`:
//!
//! ```text
//! [left .. store)      elements <= pivot
//! [store .. scan)      elements >  pivot
//! [scan .. right)      not yet examined
//! right                the pivot
//! ```
//!
//! Once `scan` reaches `right` the pivot is exchanged into `store`. The right
//! sub-range is pushed, the left sub-range is descended into directly (the
//! tail call), and when the left side is trivial the next frame is popped.
//!
//! The randomized variant differs only in how a frame begins: its first step
//! picks a random position in the range and exchanges it into `right`, so
//! the stepping logic that follows is identical.

use super::errors::SortError;
use super::sequence::Sequence;
use super::sink::MoveSink;
use super::StepSort;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// One partition in progress, or waiting on the stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub left: usize,
    pub right: usize,
    /// Next slot for an element that belongs left of the pivot
    pub store: usize,
    pub scan: usize,
    /// False until a randomized frame has swapped its pivot into `right`
    pub pivot_ready: bool,
}

impl Frame {
    fn new(left: usize, right: usize, pivot_ready: bool) -> Self {
        Frame {
            left,
            right,
            store: left,
            scan: left,
            pivot_ready,
        }
    }
}

/// How each frame chooses its pivot
#[derive(Debug, Clone)]
pub enum PivotRule {
    /// The last element of the range
    Last,
    /// A uniformly random element, moved into the last position first
    Random(StdRng),
}

/// Quicksort driven one comparison at a time
#[derive(Debug)]
pub struct QuickSort<T, S> {
    seq: Sequence<T, S>,
    pivot_rule: PivotRule,
    current: Option<Frame>,
    pending: Vec<Frame>,
    moves: u64,
}

impl<T: Ord, S: MoveSink> QuickSort<T, S> {
    /// Bind with the classic last-element pivot.
    pub fn bind(elements: Vec<T>, sink: S) -> Result<Self, SortError> {
        Self::bind_with(elements, sink, PivotRule::Last)
    }

    /// Bind with a random pivot per partition, reproducible from `seed`.
    pub fn bind_randomized(elements: Vec<T>, sink: S, seed: u64) -> Result<Self, SortError> {
        Self::bind_with(
            elements,
            sink,
            PivotRule::Random(StdRng::seed_from_u64(seed)),
        )
    }

    pub fn bind_with(elements: Vec<T>, sink: S, pivot_rule: PivotRule) -> Result<Self, SortError> {
        let seq = Sequence::new(elements, sink)?;
        let mut sort = QuickSort {
            seq,
            pivot_rule,
            current: None,
            pending: Vec::new(),
            moves: 0,
        };
        let last = sort.seq.len() - 1;
        sort.current = sort.frame(0, last);
        Ok(sort)
    }

    pub fn elements(&self) -> &[T] {
        self.seq.elements()
    }

    pub fn sink(&self) -> &S {
        self.seq.sink()
    }

    pub fn into_parts(self) -> (Vec<T>, S) {
        self.seq.into_parts()
    }

    /// The partition in progress, if any
    pub fn current_frame(&self) -> Option<&Frame> {
        self.current.as_ref()
    }

    /// Number of sub-ranges waiting on the explicit stack
    pub fn pending_frames(&self) -> usize {
        self.pending.len()
    }

    /// A frame for `left..=right`, or `None` when the range is already sorted
    fn frame(&self, left: usize, right: usize) -> Option<Frame> {
        if left >= right {
            return None;
        }
        let pivot_ready = matches!(self.pivot_rule, PivotRule::Last);
        Some(Frame::new(left, right, pivot_ready))
    }

    fn choose_pivot(&mut self, frame: &mut Frame) {
        if let PivotRule::Random(rng) = &mut self.pivot_rule {
            let chosen = rng.random_range(frame.left..=frame.right);
            self.seq.exchange(chosen, frame.right);
        }
        frame.pivot_ready = true;
    }

    fn scan_one(&mut self, frame: &mut Frame) {
        if !self.seq.greater(frame.scan, frame.right) {
            self.seq.exchange(frame.store, frame.scan);
            frame.store += 1;
        }
        frame.scan += 1;
    }

    /// Place the pivot and decide which frame runs next.
    fn finish_partition(&mut self, frame: Frame) -> Option<Frame> {
        let pivot = frame.store;
        self.seq.exchange(pivot, frame.right);

        if let Some(right) = self.frame(pivot + 1, frame.right) {
            self.pending.push(right);
        }

        let left = if pivot > frame.left {
            self.frame(frame.left, pivot - 1)
        } else {
            None
        };
        left.or_else(|| self.pending.pop())
    }
}

impl<T: Ord, S: MoveSink> StepSort for QuickSort<T, S> {
    fn name(&self) -> &'static str {
        match self.pivot_rule {
            PivotRule::Last => "Quick Sort",
            PivotRule::Random(_) => "Randomized Quick Sort",
        }
    }

    fn can_advance(&self) -> bool {
        self.current.is_some()
    }

    fn step(&mut self) -> Result<(), SortError> {
        let Some(mut frame) = self.current.take() else {
            return Err(SortError::IllegalState {
                algorithm: self.name(),
                moves: self.moves,
            });
        };

        self.current = if !frame.pivot_ready {
            self.choose_pivot(&mut frame);
            Some(frame)
        } else if frame.scan < frame.right {
            self.scan_one(&mut frame);
            Some(frame)
        } else {
            self.finish_partition(frame)
        };

        self.moves += 1;
        Ok(())
    }

    fn moves(&self) -> u64 {
        self.moves
    }
}

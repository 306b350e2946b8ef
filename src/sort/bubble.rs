//! Bubble sort, one adjacent comparison per step

use super::errors::SortError;
use super::sequence::Sequence;
use super::sink::MoveSink;
use super::StepSort;

/// Bubble sort driven one comparison at a time.
///
/// Each step compares `(moving, moving + 1)` and exchanges them when out of
/// order. When `moving` reaches `right_bound` the sweep restarts at 0 with a
/// bound one smaller. Equal neighbours are never exchanged, so the sort is
/// stable.
#[derive(Debug)]
pub struct BubbleSort<T, S> {
    seq: Sequence<T, S>,
    right_bound: usize,
    moving: usize,
    moves: u64,
}

impl<T: Ord, S: MoveSink> BubbleSort<T, S> {
    pub fn bind(elements: Vec<T>, sink: S) -> Result<Self, SortError> {
        let seq = Sequence::new(elements, sink)?;
        let right_bound = seq.len() - 1;
        Ok(BubbleSort {
            seq,
            right_bound,
            moving: 0,
            moves: 0,
        })
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
}

impl<T: Ord, S: MoveSink> StepSort for BubbleSort<T, S> {
    fn name(&self) -> &'static str {
        "Bubble Sort"
    }

    fn can_advance(&self) -> bool {
        self.right_bound > 0
    }

    fn step(&mut self) -> Result<(), SortError> {
        if !self.can_advance() {
            return Err(SortError::IllegalState {
                algorithm: self.name(),
                moves: self.moves,
            });
        }

        if self.seq.greater(self.moving, self.moving + 1) {
            self.seq.exchange(self.moving, self.moving + 1);
        }

        self.moving += 1;
        if self.moving == self.right_bound {
            self.moving = 0;
            self.right_bound -= 1;
        }

        self.moves += 1;
        Ok(())
    }

    fn moves(&self) -> u64 {
        self.moves
    }
}

//! Insertion sort, one comparison per step

use super::errors::SortError;
use super::sequence::Sequence;
use super::sink::MoveSink;
use super::StepSort;

/// Insertion sort driven one comparison at a time.
///
/// `sorted_boundary` is the index of the element being inserted; everything
/// before it is sorted. `moving` walks that element left while its left
/// neighbour is strictly greater. A comparison that finds the pair in order
/// still consumes a step and moves on to the next element.
#[derive(Debug)]
pub struct InsertionSort<T, S> {
    seq: Sequence<T, S>,
    sorted_boundary: usize,
    moving: usize,
    moves: u64,
}

impl<T: Ord, S: MoveSink> InsertionSort<T, S> {
    pub fn bind(elements: Vec<T>, sink: S) -> Result<Self, SortError> {
        let seq = Sequence::new(elements, sink)?;
        Ok(InsertionSort {
            seq,
            sorted_boundary: 1,
            moving: 1,
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

    fn advance_boundary(&mut self) {
        self.sorted_boundary += 1;
        self.moving = self.sorted_boundary;
    }
}

impl<T: Ord, S: MoveSink> StepSort for InsertionSort<T, S> {
    fn name(&self) -> &'static str {
        "Insertion Sort"
    }

    fn can_advance(&self) -> bool {
        self.sorted_boundary < self.seq.len()
    }

    fn step(&mut self) -> Result<(), SortError> {
        if !self.can_advance() {
            return Err(SortError::IllegalState {
                algorithm: self.name(),
                moves: self.moves,
            });
        }

        if !self.seq.greater(self.moving - 1, self.moving) {
            self.advance_boundary();
        } else {
            self.seq.exchange(self.moving - 1, self.moving);
            if self.moving == 1 {
                self.advance_boundary();
            } else {
                self.moving -= 1;
            }
        }

        self.moves += 1;
        Ok(())
    }

    fn moves(&self) -> u64 {
        self.moves
    }
}

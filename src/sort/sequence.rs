//! The owned sequence every algorithm sorts in place

use super::errors::SortError;
use super::sink::{validate_exchange, MoveSink};
use std::cmp::Ordering;

/// A non-empty sequence bound together with the sink that mirrors it.
///
/// All mutation goes through [`Sequence::exchange`], which is the only place
/// a sink is notified. Exchanging a position with itself is a no-op and is
/// not reported.
#[derive(Debug)]
pub struct Sequence<T, S> {
    elements: Vec<T>,
    sink: S,
}

impl<T: Ord, S: MoveSink> Sequence<T, S> {
    pub fn new(elements: Vec<T>, sink: S) -> Result<Self, SortError> {
        if elements.is_empty() {
            return Err(SortError::empty_sequence());
        }
        Ok(Sequence { elements, sink })
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn compare(&self, a: usize, b: usize) -> Ordering {
        self.elements[a].cmp(&self.elements[b])
    }

    /// True when the element at `a` is strictly greater than the one at `b`
    pub fn greater(&self, a: usize, b: usize) -> bool {
        self.compare(a, b) == Ordering::Greater
    }

    /// Swap two positions and report the pair to the sink, lowest index first.
    pub fn exchange(&mut self, a: usize, b: usize) {
        if a == b {
            return;
        }
        let (left, right) = if a < b { (a, b) } else { (b, a) };
        debug_assert!(
            validate_exchange(left, right, self.elements.len()).is_ok(),
            "exchange ({}, {}) outside sequence of length {}",
            left,
            right,
            self.elements.len()
        );
        self.elements.swap(left, right);
        self.sink.notify_exchange(left, right);
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_parts(self) -> (Vec<T>, S) {
        (self.elements, self.sink)
    }
}

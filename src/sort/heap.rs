//! Heap sort with a resumable sift-down cursor
//!
//! Two phases share one [`SiftCursor`]:
//!
//! 1. **Build**: the `for root in (0..n/2).rev()` driver loop becomes a
//!    `next_root` value. Each step sifts the current root down one level;
//!    when a level causes no demotion the next root is started.
//! 2. **Extract**: when no sift is active, one step exchanges the root with
//!    `sorted_boundary`, shrinks the heap, and starts a fresh sift at 0.
//!    Each following step sifts that root down one level.
//!
//! Only one sift is ever paused at a time, so no call stack is needed.

use super::errors::SortError;
use super::sequence::Sequence;
use super::sink::MoveSink;
use super::StepSort;

/// One sift-down in progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiftCursor {
    pub node: usize,
    pub heap_size: usize,
    pub left_child: usize,
    pub right_child: usize,
}

impl SiftCursor {
    fn new(node: usize, heap_size: usize) -> Self {
        SiftCursor {
            node,
            heap_size,
            left_child: 2 * node + 1,
            right_child: 2 * node + 2,
        }
    }

    fn has_children(&self) -> bool {
        self.left_child < self.heap_size
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapPhase {
    /// Building the max-heap; `next_root` is the root to sift after the current one
    Build {
        next_root: Option<usize>,
    },
    Extract,
}

/// Heap sort driven one sift level at a time
#[derive(Debug)]
pub struct HeapSort<T, S> {
    seq: Sequence<T, S>,
    phase: HeapPhase,
    sift: Option<SiftCursor>,
    /// Last index of the unsorted prefix; everything after it is final
    sorted_boundary: usize,
    done: bool,
    moves: u64,
}

impl<T: Ord, S: MoveSink> HeapSort<T, S> {
    pub fn bind(elements: Vec<T>, sink: S) -> Result<Self, SortError> {
        let seq = Sequence::new(elements, sink)?;
        let n = seq.len();

        let (phase, sift) = if n < 2 {
            (HeapPhase::Extract, None)
        } else {
            let root = n / 2 - 1;
            (
                HeapPhase::Build {
                    next_root: root.checked_sub(1),
                },
                Some(SiftCursor::new(root, n)),
            )
        };

        let mut sort = HeapSort {
            seq,
            phase,
            sift,
            sorted_boundary: n - 1,
            done: false,
            moves: 0,
        };
        sort.update_done();
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

    pub fn phase(&self) -> HeapPhase {
        self.phase
    }

    pub fn sift_cursor(&self) -> Option<&SiftCursor> {
        self.sift.as_ref()
    }

    /// Compare a node with its children and demote it one level if needed.
    ///
    /// Returns the cursor for the next level, or `None` once the node stays
    /// put or lands on a leaf. Equal children favour the left.
    fn sift_level(&mut self, cursor: SiftCursor) -> Option<SiftCursor> {
        let mut largest = cursor.node;
        if cursor.left_child < cursor.heap_size && self.seq.greater(cursor.left_child, largest) {
            largest = cursor.left_child;
        }
        if cursor.right_child < cursor.heap_size && self.seq.greater(cursor.right_child, largest) {
            largest = cursor.right_child;
        }
        if largest == cursor.node {
            return None;
        }

        self.seq.exchange(cursor.node, largest);
        let next = SiftCursor::new(largest, cursor.heap_size);
        next.has_children().then_some(next)
    }

    fn after_sift(&mut self) {
        if let HeapPhase::Build { next_root } = self.phase {
            match next_root {
                Some(root) => {
                    self.sift = Some(SiftCursor::new(root, self.seq.len()));
                    self.phase = HeapPhase::Build {
                        next_root: root.checked_sub(1),
                    };
                }
                None => self.phase = HeapPhase::Extract,
            }
        }
    }

    fn extract_root(&mut self) {
        let boundary = self.sorted_boundary;
        self.seq.exchange(0, boundary);
        self.sorted_boundary -= 1;

        let root = SiftCursor::new(0, boundary);
        self.sift = root.has_children().then_some(root);
    }

    fn update_done(&mut self) {
        self.done =
            self.phase == HeapPhase::Extract && self.sift.is_none() && self.sorted_boundary == 0;
    }
}

impl<T: Ord, S: MoveSink> StepSort for HeapSort<T, S> {
    fn name(&self) -> &'static str {
        "Heap Sort"
    }

    fn can_advance(&self) -> bool {
        !self.done
    }

    fn step(&mut self) -> Result<(), SortError> {
        if self.done {
            return Err(SortError::IllegalState {
                algorithm: self.name(),
                moves: self.moves,
            });
        }

        match self.sift {
            Some(cursor) => {
                self.sift = self.sift_level(cursor);
                if self.sift.is_none() {
                    self.after_sift();
                }
            }
            None => self.extract_root(),
        }

        self.update_done();
        self.moves += 1;
        Ok(())
    }

    fn moves(&self) -> u64 {
        self.moves
    }
}

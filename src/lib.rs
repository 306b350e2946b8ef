//! # Introduction
//!
//! sortty animates sorting algorithms one elementary move at a time. Each
//! algorithm is re-expressed as an explicit state machine that can be paused
//! after any comparison or exchange, and a tick scheduler advances a set of
//! them on a timer until none can move any further. The result is drawn as
//! bar charts in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input → StepSort (+ Chart sink) → SortRun → TickScheduler → TUI
//! ```
//!
//! 1. [`input`]: generates the values to sort from a seedable RNG.
//! 2. [`sort`]: the step-state algorithms (bubble, insertion, quick,
//!    randomized quick, heap) and the [`sort::MoveSink`] contract through
//!    which every exchange is reported.
//! 3. [`chart`]: the bar model, a move sink mirroring each exchange.
//! 4. [`run`]: one algorithm bound to its chart, exposed as a
//!    [`scheduler::TickTarget`].
//! 5. [`scheduler`]: advances every registered target once per tick, at a
//!    clamped rate multiplier.
//! 6. [`config`]: what a session sorts and how fast.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! ## Stepping one algorithm by hand
//!
//! ```
//! use sortty::sort::{BubbleSort, MoveLog, StepSort};
//!
//! let mut sort = BubbleSort::bind(vec![3, 1, 2], MoveLog::new()).unwrap();
//! while sort.can_advance() {
//!     sort.step().unwrap();
//! }
//! assert_eq!(sort.elements(), &[1, 2, 3]);
//! assert_eq!(sort.sink().exchanges(), &[(0, 1), (1, 2)]);
//! ```

pub mod chart;
pub mod config;
pub mod input;
pub mod run;
pub mod scheduler;
pub mod sort;
pub mod ui;

//! Error types for the step-state sorting engine
//!
//! This module defines [`SortError`], covering every way a driver or an
//! algorithm can break the stepping contract. None of these are transient:
//! each one is a programming error in the caller or in an algorithm, so
//! nothing here is ever retried.

use thiserror::Error;

/// Errors raised by step-state algorithms and the tick scheduler
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    /// The sequence handed to `bind` cannot be sorted step by step
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// `step()` was called on an algorithm that has no moves left
    #[error("{algorithm} has no moves left (stopped after {moves} moves)")]
    IllegalState { algorithm: &'static str, moves: u64 },

    /// An exchange pair that is out of range or not strictly increasing
    #[error("exchange ({left}, {right}) violates index policy for a sequence of length {len}")]
    IndexPolicy {
        left: usize,
        right: usize,
        len: usize,
    },
}

impl SortError {
    pub(crate) fn empty_sequence() -> Self {
        SortError::InvalidInput {
            reason: "one or more elements is required, zero is not allowed".to_string(),
        }
    }
}

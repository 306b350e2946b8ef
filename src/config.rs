//! Session configuration
//!
//! A [`Config`] says what to sort and how fast. `main` builds one from the
//! command line; the UI rebuilds its runs from it whenever the user changes
//! algorithm, size, or arrangement.

use crate::input::Arrangement;
use crate::scheduler::{RATE_DEFAULT, RATE_HIGH, RATE_LOW};
use crate::sort::AlgorithmKind;
use thiserror::Error;

/// Largest number of elements a session may sort
pub const MAX_ELEMENTS: usize = 400;
pub const DEFAULT_ELEMENTS: usize = 50;
/// Largest number of elements when two algorithms share the screen
pub const MAX_COMPARE_ELEMENTS: usize = 200;
/// At most this many algorithms run side by side
pub const MAX_ALGORITHMS: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("at least one algorithm must be selected")]
    NoAlgorithm,

    #[error("at most {max} algorithms can run side by side, got {0}", max = MAX_ALGORITHMS)]
    TooManyAlgorithms(usize),

    #[error("element count must be between 1 and {max}, got {count}")]
    ElementCount { count: usize, max: usize },

    #[error("rate must be between {low} and {high}, got {0}", low = RATE_LOW, high = RATE_HIGH)]
    Rate(u32),
}

/// What one session sorts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub algorithms: Vec<AlgorithmKind>,
    pub element_count: usize,
    pub arrangement: Arrangement,
    /// Tick delay multiplier, see [`crate::scheduler::TickScheduler::set_rate`]
    pub rate: u32,
    pub seed: u64,
}

impl Config {
    pub fn new(algorithm: AlgorithmKind) -> Self {
        Config {
            algorithms: vec![algorithm],
            element_count: DEFAULT_ELEMENTS,
            arrangement: Arrangement::default(),
            rate: RATE_DEFAULT,
            seed: 0,
        }
    }

    /// Run `second` next to the first algorithm on the same input
    pub fn with_comparison(mut self, second: AlgorithmKind) -> Self {
        self.algorithms.truncate(1);
        self.algorithms.push(second);
        self
    }

    pub fn with_element_count(mut self, count: usize) -> Self {
        self.element_count = count;
        self
    }

    pub fn with_arrangement(mut self, arrangement: Arrangement) -> Self {
        self.arrangement = arrangement;
        self
    }

    pub fn with_rate(mut self, rate: u32) -> Self {
        self.rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn is_comparison(&self) -> bool {
        self.algorithms.len() > 1
    }

    /// Element limit for the number of algorithms shown
    pub fn max_elements(&self) -> usize {
        if self.is_comparison() {
            MAX_COMPARE_ELEMENTS
        } else {
            MAX_ELEMENTS
        }
    }

    /// Check the limits. The scheduler would clamp an out-of-range rate on
    /// its own, but a command line asking for one is rejected up front.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithm);
        }
        if self.algorithms.len() > MAX_ALGORITHMS {
            return Err(ConfigError::TooManyAlgorithms(self.algorithms.len()));
        }
        let max = self.max_elements();
        if self.element_count == 0 || self.element_count > max {
            return Err(ConfigError::ElementCount {
                count: self.element_count,
                max,
            });
        }
        if !(RATE_LOW..=RATE_HIGH).contains(&self.rate) {
            return Err(ConfigError::Rate(self.rate));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(AlgorithmKind::Bubble)
    }
}

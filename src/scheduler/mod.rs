//! Tick scheduler that advances a set of step-state algorithms on a timer
//!
//! The scheduler is cooperative and single-threaded. Its timer is a deadline
//! that the driver's event loop polls, so at most one tick is ever pending
//! and a tick always runs to completion before the next one is scheduled.
//!
//! # States
//!
//! ```text
//!            start()                      tick with active targets
//!   Idle ─────────────▶ Running(deadline) ◀──────────────┐
//!    ▲                     │    │                         │
//!    └──────── stop() ─────┘    └── poll(now) fires ──────┘
//!                               (no target active: Running, no deadline)
//! ```
//!
//! A round in which no target can advance leaves the scheduler Running with
//! nothing pending ([`TickScheduler::is_quiescent`]). The driver decides when
//! to call [`TickScheduler::stop`].

mod target;

pub use target::{TargetId, TickTarget};

use crate::sort::SortError;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::{debug, trace, warn};

/// Fastest rate multiplier
pub const RATE_LOW: u32 = 1;
/// Slowest rate multiplier
pub const RATE_HIGH: u32 = 100;
pub const RATE_DEFAULT: u32 = 50;
/// Delay per unit of rate multiplier
pub const DELAY_BASE: Duration = Duration::from_millis(5);

/// Whether a timer is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    /// `next_tick` is `None` once a round left no target able to advance
    Running {
        next_tick: Option<Instant>,
    },
}

/// Result of one tick round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    /// Targets that took a step this round
    pub advanced: usize,
    /// Whether any target can still advance after the round
    pub active: bool,
}

/// Drives registered [`TickTarget`]s, one step each per tick, in
/// registration order
pub struct TickScheduler<T: TickTarget = Box<dyn TickTarget>> {
    order: Vec<TargetId>,
    targets: FxHashMap<TargetId, T>,
    next_id: u64,
    rate: u32,
    state: SchedulerState,
    ticks: u64,
}

impl<T: TickTarget> TickScheduler<T> {
    pub fn new() -> Self {
        TickScheduler {
            order: Vec::new(),
            targets: FxHashMap::default(),
            next_id: 0,
            rate: RATE_DEFAULT,
            state: SchedulerState::Idle,
            ticks: 0,
        }
    }

    // ========== Registry ==========

    /// Add a target after all existing ones
    pub fn register(&mut self, target: T) -> TargetId {
        let id = TargetId(self.next_id);
        self.next_id += 1;
        self.order.push(id);
        self.targets.insert(id, target);
        debug!(%id, "registered tick target");
        id
    }

    /// Remove a target, handing it back to the caller
    pub fn unregister(&mut self, id: TargetId) -> Option<T> {
        let target = self.targets.remove(&id)?;
        self.order.retain(|other| *other != id);
        debug!(%id, "unregistered tick target");
        Some(target)
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.targets.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn target(&self, id: TargetId) -> Option<&T> {
        self.targets.get(&id)
    }

    pub fn target_mut(&mut self, id: TargetId) -> Option<&mut T> {
        self.targets.get_mut(&id)
    }

    /// Registered targets in registration order
    pub fn targets(&self) -> impl Iterator<Item = (TargetId, &T)> + '_ {
        self.order
            .iter()
            .filter_map(move |id| self.targets.get(id).map(|t| (*id, t)))
    }

    // ========== Rate ==========

    /// Set the rate multiplier, clamped into `[RATE_LOW, RATE_HIGH]`.
    ///
    /// A pending tick keeps its deadline; the new delay applies from the next
    /// reschedule.
    pub fn set_rate(&mut self, multiplier: u32) {
        self.rate = multiplier.clamp(RATE_LOW, RATE_HIGH);
    }

    pub fn rate(&self) -> u32 {
        self.rate
    }

    /// Delay between ticks at the current rate
    pub fn delay(&self) -> Duration {
        DELAY_BASE * self.rate
    }

    // ========== Timer ==========

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, SchedulerState::Running { .. })
    }

    /// Running, but the last round left nothing to advance
    pub fn is_quiescent(&self) -> bool {
        self.state == SchedulerState::Running { next_tick: None }
    }

    /// Number of tick rounds run so far
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Schedule the first tick one delay after `now`.
    pub fn start(&mut self, now: Instant) {
        if self.is_running() {
            warn!("TickScheduler::start() called but the timer is already running");
            return;
        }
        self.state = SchedulerState::Running {
            next_tick: Some(now + self.delay()),
        };
        debug!(
            rate = self.rate,
            targets = self.len(),
            "tick scheduler started"
        );
    }

    /// Cancel any pending tick.
    pub fn stop(&mut self) {
        if !self.is_running() {
            warn!("TickScheduler::stop() called but the timer is not running");
            return;
        }
        self.state = SchedulerState::Idle;
        debug!(ticks = self.ticks, "tick scheduler stopped");
    }

    /// Time left until the pending tick, zero if it is overdue
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        match self.state {
            SchedulerState::Running {
                next_tick: Some(deadline),
            } => Some(deadline.saturating_duration_since(now)),
            _ => None,
        }
    }

    /// Fire the pending tick if its deadline has passed.
    ///
    /// Returns `Ok(None)` when nothing was due.
    pub fn poll(&mut self, now: Instant) -> Result<Option<TickOutcome>, SortError> {
        let SchedulerState::Running {
            next_tick: Some(deadline),
        } = self.state
        else {
            return Ok(None);
        };
        if now < deadline {
            return Ok(None);
        }

        let outcome = self.tick()?;
        self.state = SchedulerState::Running {
            next_tick: outcome.active.then(|| now + self.delay()),
        };
        if !outcome.active {
            debug!(ticks = self.ticks, "no tick target can advance");
        }
        Ok(Some(outcome))
    }

    /// Run one round: every target that can advance takes exactly one step.
    ///
    /// Does not touch the timer, so a driver may call this directly to
    /// single-step while Idle.
    pub fn tick(&mut self) -> Result<TickOutcome, SortError> {
        let mut outcome = TickOutcome::default();
        for id in &self.order {
            let Some(target) = self.targets.get_mut(id) else {
                continue;
            };
            if !target.can_advance() {
                continue;
            }
            outcome.advanced += 1;
            if target.advance_one()? {
                outcome.active = true;
            }
        }
        self.ticks += 1;
        trace!(
            tick = self.ticks,
            advanced = outcome.advanced,
            active = outcome.active,
            "tick"
        );
        Ok(outcome)
    }
}

impl<T: TickTarget> Default for TickScheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

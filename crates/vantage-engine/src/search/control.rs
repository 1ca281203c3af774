//! Search control: the per-move clock.
//!
//! Cancellation is coarse. The clock is only consulted between iterations;
//! an iteration that has started always runs to completion.

use std::time::{Duration, Instant};

use crate::time::should_continue;

/// Decides whether iterative deepening may start another iteration.
#[derive(Debug, Clone)]
pub struct SearchControl {
    start: Instant,
    budget: Option<Duration>,
}

impl SearchControl {
    /// Control with a time budget; the clock starts now.
    pub fn new_timed(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget: Some(budget),
        }
    }

    /// Control without a time budget; only the depth cap stops the search.
    pub fn new_infinite() -> Self {
        Self {
            start: Instant::now(),
            budget: None,
        }
    }

    /// Time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Whether another iteration should start. See [`should_continue`].
    pub fn should_start_iteration(&self) -> bool {
        self.budget
            .is_none_or(|budget| should_continue(self.elapsed(), budget))
    }
}

//! Time management: per-move budgets and the iteration gate.

use std::time::Duration;

/// Whether iterative deepening may start another iteration.
///
/// Continues only while the time left in the budget exceeds twice the time
/// already spent on this move. Each extra ply costs a multiple of the
/// previous one, so an iteration that would not finish is never started.
///
/// Always `false` once `elapsed >= budget`.
#[inline]
pub fn should_continue(elapsed: Duration, budget: Duration) -> bool {
    budget.saturating_sub(elapsed) > elapsed.saturating_mul(2)
}

/// Budget for one move from the mover's clock.
///
/// `remaining / divisor` plus three quarters of the increment, never more
/// than the time actually left. A zero divisor is treated as one.
pub fn budget_from_clock(remaining: Duration, increment: Duration, divisor: u32) -> Duration {
    let base = remaining / divisor.max(1);
    let bonus = increment * 3 / 4;
    (base + bonus).min(remaining)
}

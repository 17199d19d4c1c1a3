//! Compact builders for hand-written test problems.
//!
//! # Example
//!
//! ```
//! use rota_test::builders::{day_slot, problem, worker};
//!
//! let problem = problem(
//!     1,
//!     vec![worker("a"), worker("b")],
//!     vec![day_slot("early", 0, 6, 14), day_slot("late", 0, 14, 22)],
//! );
//! assert_eq!(problem.slot_count(), 2);
//! ```

use rota_config::SchedulerConfig;
use rota_core::{Minutes, SchedulingProblem, Slot, WorkHour, Worker, MINUTES_PER_DAY};

/// A worker whose name equals its id.
pub fn worker(id: &str) -> Worker {
    Worker::new(id, id)
}

/// A single-span slot on `day` from `start_hour` to `end_hour` with
/// multiplier 1. `end_hour` may exceed 24 for overnight shifts.
pub fn day_slot(id: &str, day: i64, start_hour: i64, end_hour: i64) -> Slot {
    let base = day * MINUTES_PER_DAY;
    slot_at(id, base + start_hour * 60, base + end_hour * 60, 1.0)
}

/// A single-span slot at absolute minute offsets.
pub fn slot_at(id: &str, start: Minutes, end: Minutes, multiplier: f64) -> Slot {
    Slot::new(id).with_work_hour(WorkHour::new(start, end, multiplier))
}

/// Builds a problem, panicking on invalid input.
pub fn problem(horizon_days: u32, workers: Vec<Worker>, slots: Vec<Slot>) -> SchedulingProblem {
    SchedulingProblem::new(horizon_days, workers, slots)
        .unwrap_or_else(|e| panic!("invalid test problem: {e}"))
}

/// A seeded configuration bounded by proposal count.
pub fn quick_config(seed: u64, steps: u64) -> SchedulerConfig {
    SchedulerConfig::new()
        .with_random_seed(seed)
        .with_step_count_limit(steps)
}

use std::cmp::max;

use rota_config::ExtendedLeaveRule;
use rota_core::{Interval, Minutes, Schedule, SchedulingProblem, SlotIdx, WorkerIdx, MINUTES_PER_DAY};

use super::{DiscardReason, Violation};

/// Leaves separated by at most this much count as one period.
const MERGE_GAP: Minutes = MINUTES_PER_DAY;

/// Merges a worker's applicable leaves into continuous periods.
fn leave_periods(problem: &SchedulingProblem, worker: WorkerIdx, rule: &ExtendedLeaveRule) -> Vec<Interval> {
    let mut periods: Vec<Interval> = Vec::new();
    let leaves = problem
        .worker(worker)
        .approved_leaves
        .iter()
        .filter(|leave| rule.applies_to(&leave.leave_type));
    for leave in leaves {
        match periods.last_mut() {
            Some(last) if leave.start - last.end() <= MERGE_GAP => {
                *last = Interval::new(last.start(), max(last.end(), leave.end));
            }
            _ => periods.push(leave.interval()),
        }
    }
    periods
}

/// For each worker and each merged leave period of at least the rule's
/// length, the first slot starting strictly after the period's end.
pub(super) fn required_assignments(
    problem: &SchedulingProblem,
    rule: &ExtendedLeaveRule,
) -> Vec<(SlotIdx, WorkerIdx)> {
    let minimum = Minutes::from(rule.minimum_continuous_days) * MINUTES_PER_DAY;
    let chronological = problem.chronological_slots();
    let mut required = Vec::new();
    for worker in 0..problem.worker_count() {
        for period in leave_periods(problem, worker, rule) {
            if period.len() < minimum {
                continue;
            }
            let first_after = chronological
                .iter()
                .copied()
                .find(|&slot| problem.slot(slot).start() > period.end());
            if let Some(slot) = first_after {
                required.push((slot, worker));
            }
        }
    }
    required
}

pub(super) fn check(schedule: &Schedule, required: &[(SlotIdx, WorkerIdx)]) -> Result<(), Violation> {
    for &(slot, worker) in required {
        if schedule.get(slot) != Some(worker) {
            return Err(Violation::at(
                DiscardReason::FirstShiftAfterExtendedLeaveMissed,
                slot,
                worker,
            ));
        }
    }
    Ok(())
}

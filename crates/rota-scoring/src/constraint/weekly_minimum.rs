use rota_config::WeeklyMinimumRule;
use rota_core::{Interval, Minutes, SchedulingProblem, SlotIdx, MINUTES_PER_DAY, MINUTES_PER_WEEK};

use super::{DiscardReason, Violation};

/// Complete 7-day windows of the horizon, starting at the rule's offset.
fn windows(problem: &SchedulingProblem, rule: &WeeklyMinimumRule) -> Vec<Interval> {
    let horizon_end = problem.horizon_minutes();
    let mut start = Minutes::from(rule.week_start_offset_days) * MINUTES_PER_DAY;
    let mut windows = Vec::new();
    while start + MINUTES_PER_WEEK <= horizon_end {
        windows.push(Interval::new(start, start + MINUTES_PER_WEEK));
        start += MINUTES_PER_WEEK;
    }
    windows
}

/// Every worker needs `min_shifts` standard-workday slots starting in each
/// window, unless on leave for the whole window.
pub(super) fn check(
    problem: &SchedulingProblem,
    by_worker: &[Vec<SlotIdx>],
    rule: &WeeklyMinimumRule,
) -> Result<(), Violation> {
    let windows = windows(problem, rule);
    for (worker, slots) in by_worker.iter().enumerate() {
        let worker_ref = problem.worker(worker);
        for window in &windows {
            if worker_ref.leave_minutes_within(window, true) >= window.len() {
                continue;
            }
            let held = slots
                .iter()
                .map(|&slot| problem.slot(slot))
                .filter(|slot| slot.starts_on_standard_workday && window.contains(slot.start()))
                .count();
            if held < rule.min_shifts as usize {
                return Err(Violation::new(
                    DiscardReason::MinimumShiftsPerWeekUnmet,
                    None,
                    Some(worker),
                ));
            }
        }
    }
    Ok(())
}

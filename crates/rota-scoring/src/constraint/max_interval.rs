use std::cmp::max;

use rota_core::{Interval, Minutes, SchedulingProblem, SlotIdx};

use super::{DiscardReason, Violation};

/// No worker may go longer than `limit` minutes without a shift.
///
/// Gaps run from the horizon start to the first shift, between consecutive
/// shifts, and from the last shift to the horizon end. Approved leave inside a
/// gap does not count towards it. A gap is attributed to the slot that closes
/// it; the trailing gap has no slot.
pub(super) fn check(
    problem: &SchedulingProblem,
    by_worker: &[Vec<SlotIdx>],
    limit: Minutes,
) -> Result<(), Violation> {
    let horizon_end = problem.horizon_minutes();
    for (worker, slots) in by_worker.iter().enumerate() {
        let worker_ref = problem.worker(worker);
        let exceeds = |gap: Interval| {
            gap.len() > limit && gap.len() - worker_ref.leave_minutes_within(&gap, true) > limit
        };

        let mut cursor: Minutes = 0;
        for &slot in slots {
            let slot_ref = problem.slot(slot);
            if let Some(gap) = Interval::try_new(cursor, slot_ref.start()) {
                if exceeds(gap) {
                    return Err(Violation::new(
                        DiscardReason::MaxIntervalBetweenShiftsExceeded,
                        Some(slot),
                        Some(worker),
                    ));
                }
            }
            cursor = max(cursor, slot_ref.end());
        }
        if let Some(gap) = Interval::try_new(cursor, horizon_end) {
            if exceeds(gap) {
                return Err(Violation::new(
                    DiscardReason::MaxIntervalBetweenShiftsExceeded,
                    None,
                    Some(worker),
                ));
            }
        }
    }
    Ok(())
}

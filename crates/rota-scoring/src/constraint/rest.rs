use rota_config::RestTier;
use rota_core::{SchedulingProblem, Slot, SlotIdx, WorkerIdx};

use super::{DiscardReason, Violation};

/// Returns true if `before` followed by `after` leaves too little rest under
/// any tier. Tiers are independent: every tier whose threshold covers the
/// first shift's inconvenience applies.
fn too_short(before: &Slot, after: &Slot, tiers: &[RestTier]) -> bool {
    let inconvenience = before.inconvenience();
    let rest = after.start() - before.end();
    tiers.iter().any(|tier| {
        inconvenience <= tier.inconvenience_less_or_equal_than && rest < tier.minimum_rest_minutes
    })
}

/// Attributed to the shift that starts too early.
pub(super) fn check(
    problem: &SchedulingProblem,
    by_worker: &[Vec<SlotIdx>],
    tiers: &[RestTier],
) -> Result<(), Violation> {
    if tiers.is_empty() {
        return Ok(());
    }
    for (worker, slots) in by_worker.iter().enumerate() {
        for pair in slots.windows(2) {
            let (before, after) = (pair[0], pair[1]);
            if too_short(problem.slot(before), problem.slot(after), tiers) {
                return Err(Violation::at(DiscardReason::MinimumRestViolation, after, worker));
            }
        }
    }
    Ok(())
}

/// Checks the rest before and after `slot` against the worker's neighbouring
/// shifts.
pub(super) fn check_pair(
    problem: &SchedulingProblem,
    worker_slots: &[SlotIdx],
    slot: SlotIdx,
    worker: WorkerIdx,
    tiers: &[RestTier],
) -> Result<(), Violation> {
    if tiers.is_empty() {
        return Ok(());
    }
    let rank = problem.chronological_rank(slot);
    let at = worker_slots.partition_point(|&held| problem.chronological_rank(held) < rank);
    let candidate = problem.slot(slot);

    let previous = at.checked_sub(1).map(|i| problem.slot(worker_slots[i]));
    let next = worker_slots.get(at).map(|&held| problem.slot(held));

    let clash = previous.is_some_and(|before| too_short(before, candidate, tiers))
        || next.is_some_and(|after| too_short(candidate, after, tiers));
    if clash {
        Err(Violation::at(DiscardReason::MinimumRestViolation, slot, worker))
    } else {
        Ok(())
    }
}

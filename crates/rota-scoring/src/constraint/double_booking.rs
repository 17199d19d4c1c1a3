use rota_core::{SchedulingProblem, SlotIdx, WorkerIdx};

use super::{DiscardReason, Violation};

/// `by_worker[w]` holds worker `w`'s slots in chronological order.
///
/// A clash is attributed to the later of the two slots.
pub(super) fn check(problem: &SchedulingProblem, by_worker: &[Vec<SlotIdx>]) -> Result<(), Violation> {
    for (worker, slots) in by_worker.iter().enumerate() {
        for (i, &earlier) in slots.iter().enumerate() {
            let earlier_slot = problem.slot(earlier);
            let end = earlier_slot.end();
            for &later in slots[i + 1..]
                .iter()
                .take_while(|&&later| problem.slot(later).start() < end)
            {
                if earlier_slot.overlaps(problem.slot(later)) {
                    return Err(Violation::at(DiscardReason::DoubleBooking, later, worker));
                }
            }
        }
    }
    Ok(())
}

pub(super) fn check_pair(
    problem: &SchedulingProblem,
    worker_slots: &[SlotIdx],
    slot: SlotIdx,
    worker: WorkerIdx,
) -> Result<(), Violation> {
    let candidate = problem.slot(slot);
    let clash = worker_slots
        .iter()
        .any(|&held| held == slot || candidate.overlaps(problem.slot(held)));
    if clash {
        Err(Violation::at(DiscardReason::DoubleBooking, slot, worker))
    } else {
        Ok(())
    }
}

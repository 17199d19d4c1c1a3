use rota_core::{Schedule, SchedulingProblem, SlotIdx, WorkerIdx};

use super::{DiscardReason, Violation};

pub(super) fn check(problem: &SchedulingProblem, schedule: &Schedule) -> Result<(), Violation> {
    schedule
        .assigned_pairs()
        .try_for_each(|(slot, worker)| check_pair(problem, slot, worker))
}

#[inline]
pub(super) fn check_pair(
    problem: &SchedulingProblem,
    slot: SlotIdx,
    worker: WorkerIdx,
) -> Result<(), Violation> {
    if problem.is_qualified(worker, slot) {
        Ok(())
    } else {
        Err(Violation::at(DiscardReason::QualificationMismatch, slot, worker))
    }
}

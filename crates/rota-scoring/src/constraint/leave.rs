use rota_core::{Schedule, SchedulingProblem, SlotIdx, WorkerIdx};

use super::{DiscardReason, Violation};

pub(super) fn check(problem: &SchedulingProblem, schedule: &Schedule) -> Result<(), Violation> {
    schedule
        .assigned_pairs()
        .try_for_each(|(slot, worker)| check_pair(problem, slot, worker))
}

/// Fails if any work hour of the slot touches an approved leave.
pub(super) fn check_pair(
    problem: &SchedulingProblem,
    slot: SlotIdx,
    worker: WorkerIdx,
) -> Result<(), Violation> {
    let worker_ref = problem.worker(worker);
    if worker_ref.approved_leaves.is_empty() {
        return Ok(());
    }
    let on_leave = problem
        .slot(slot)
        .work_hours
        .iter()
        .any(|hour| worker_ref.leave_overlapping(&hour.interval()).is_some());
    if on_leave {
        Err(Violation::at(DiscardReason::LeaveConflict, slot, worker))
    } else {
        Ok(())
    }
}

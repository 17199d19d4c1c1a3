//! Candidate schedules: one optional worker per slot.

use std::collections::HashMap;

use super::{SchedulingProblem, SlotId, SlotIdx, WorkerId, WorkerIdx};
use crate::error::{Result, RotaError};

/// A slot paired with its worker, expressed with caller-facing ids.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Assignment {
    pub slot_id: SlotId,
    pub worker_id: Option<WorkerId>,
}

impl Assignment {
    pub fn new(slot_id: impl Into<SlotId>, worker_id: Option<WorkerId>) -> Self {
        Self {
            slot_id: slot_id.into(),
            worker_id,
        }
    }
}

/// A (possibly partial) schedule.
///
/// Entries are index-aligned with [`SchedulingProblem::slots`], so a slot can
/// never appear twice.
///
/// # Examples
///
/// ```
/// use rota_core::{Schedule, SchedulingProblem, Slot, WorkHour, Worker};
///
/// let problem = SchedulingProblem::new(
///     1,
///     vec![Worker::new("w1", "Ana")],
///     vec![Slot::new("s1").with_work_hour(WorkHour::new(0, 480, 1.0))],
/// ).unwrap();
///
/// let mut schedule = Schedule::for_problem(&problem);
/// assert!(!schedule.is_complete());
/// schedule.assign(0, Some(0));
/// assert!(schedule.is_complete());
/// assert_eq!(schedule.assignments(&problem)[0].worker_id.as_ref().unwrap().as_str(), "w1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Schedule {
    assigned: Vec<Option<WorkerIdx>>,
}

impl Schedule {
    /// A schedule with every slot unassigned.
    pub fn unassigned(slot_count: usize) -> Self {
        Self {
            assigned: vec![None; slot_count],
        }
    }

    /// A schedule holding only the caller's pre-assignments.
    pub fn for_problem(problem: &SchedulingProblem) -> Self {
        Self {
            assigned: (0..problem.slot_count())
                .map(|slot| problem.pinned_worker(slot))
                .collect(),
        }
    }

    /// Builds a schedule from caller-facing assignments.
    ///
    /// Slots without an assignment keep their pre-assignment, if any.
    ///
    /// # Errors
    ///
    /// Fails if an assignment names an unknown slot or worker.
    pub fn from_assignments(
        problem: &SchedulingProblem,
        assignments: &[Assignment],
    ) -> Result<Self> {
        let slot_index: HashMap<&SlotId, SlotIdx> = problem
            .slots()
            .iter()
            .enumerate()
            .map(|(idx, slot)| (&slot.id, idx))
            .collect();

        let mut schedule = Self::for_problem(problem);
        for assignment in assignments {
            let slot = *slot_index
                .get(&assignment.slot_id)
                .ok_or_else(|| RotaError::UnknownSlot(assignment.slot_id.clone()))?;
            let worker = match &assignment.worker_id {
                Some(id) => Some(problem.worker_idx(id).ok_or_else(|| {
                    RotaError::UnknownWorker {
                        slot: assignment.slot_id.clone(),
                        worker: id.clone(),
                    }
                })?),
                None => None,
            };
            schedule.assign(slot, worker);
        }
        Ok(schedule)
    }

    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }

    #[inline]
    pub fn get(&self, slot: SlotIdx) -> Option<WorkerIdx> {
        self.assigned[slot]
    }

    #[inline]
    pub fn assign(&mut self, slot: SlotIdx, worker: Option<WorkerIdx>) {
        self.assigned[slot] = worker;
    }

    /// Iterates `(slot, worker)` over every slot.
    pub fn iter(&self) -> impl Iterator<Item = (SlotIdx, Option<WorkerIdx>)> + '_ {
        self.assigned.iter().copied().enumerate()
    }

    /// Iterates `(slot, worker)` over assigned slots only.
    pub fn assigned_pairs(&self) -> impl Iterator<Item = (SlotIdx, WorkerIdx)> + '_ {
        self.assigned
            .iter()
            .enumerate()
            .filter_map(|(slot, worker)| worker.map(|w| (slot, w)))
    }

    pub fn is_complete(&self) -> bool {
        self.assigned.iter().all(Option::is_some)
    }

    pub fn unassigned_slots(&self) -> impl Iterator<Item = SlotIdx> + '_ {
        self.assigned
            .iter()
            .enumerate()
            .filter(|(_, worker)| worker.is_none())
            .map(|(slot, _)| slot)
    }

    /// Slots held by each worker, in chronological order.
    ///
    /// The outer vector is indexed by [`WorkerIdx`].
    pub fn slots_by_worker(&self, problem: &SchedulingProblem) -> Vec<Vec<SlotIdx>> {
        let mut by_worker = vec![Vec::new(); problem.worker_count()];
        for &slot in problem.chronological_slots() {
            if let Some(worker) = self.assigned[slot] {
                by_worker[worker].push(slot);
            }
        }
        by_worker
    }

    /// Converts to caller-facing assignments, in input slot order.
    pub fn assignments(&self, problem: &SchedulingProblem) -> Vec<Assignment> {
        self.iter()
            .map(|(slot, worker)| Assignment {
                slot_id: problem.slot(slot).id.clone(),
                worker_id: worker.map(|w| problem.worker(w).id.clone()),
            })
            .collect()
    }
}

//! Mutation of pooled schedules.

use rand::Rng;
use rota_core::{Schedule, SchedulingProblem, SlotIdx, WorkerIdx};
use rota_scoring::ConstraintEvaluator;

/// Reassigns a few random slots of an existing schedule to random qualified
/// workers.
///
/// Only qualification is considered when drawing a worker; the result must
/// still pass full evaluation.
#[derive(Clone, Debug)]
pub struct MutationProposer {
    /// Slots that may change, each with its qualified workers.
    mutable: Vec<(SlotIdx, Vec<WorkerIdx>)>,
    size: usize,
}

impl MutationProposer {
    /// `size` is the number of reassignments per proposal.
    pub fn new(problem: &SchedulingProblem, evaluator: &ConstraintEvaluator, size: usize) -> Self {
        let required: Vec<SlotIdx> = evaluator
            .required_assignments()
            .iter()
            .map(|&(slot, _)| slot)
            .collect();
        let mutable = (0..problem.slot_count())
            .filter(|&slot| problem.pinned_worker(slot).is_none() && !required.contains(&slot))
            .filter_map(|slot| {
                let qualified: Vec<WorkerIdx> = (0..problem.worker_count())
                    .filter(|&worker| problem.is_qualified(worker, slot))
                    .collect();
                (qualified.len() > 1).then_some((slot, qualified))
            })
            .collect();
        Self { mutable, size }
    }

    /// Returns true if no slot has an alternative worker.
    pub fn is_exhausted(&self) -> bool {
        self.mutable.is_empty()
    }

    /// Returns a mutated copy of `base`.
    pub fn propose<R: Rng>(&self, base: &Schedule, rng: &mut R) -> Schedule {
        let mut schedule = base.clone();
        if self.mutable.is_empty() {
            return schedule;
        }
        for _ in 0..self.size {
            let (slot, qualified) = &self.mutable[rng.random_range(0..self.mutable.len())];
            let worker = qualified[rng.random_range(0..qualified.len())];
            schedule.assign(*slot, Some(worker));
        }
        schedule
    }
}

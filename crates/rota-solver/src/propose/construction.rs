//! Randomized constructive proposals.

use rand::seq::SliceRandom;
use rand::Rng;
use rota_core::{Schedule, SchedulingProblem, SlotIdx, WorkerIdx};
use rota_scoring::{ConstraintEvaluator, DiscardReason, Violation};

/// Fills slots in chronological order, favouring the least-loaded workers.
///
/// For each open slot the workers passing the placement check are ranked by
/// inconvenience carried so far (normalized by availability) and one is
/// drawn with linearly decreasing weights: the least-loaded of `n` eligible
/// workers has weight `n`, the most loaded weight `1`.
#[derive(Clone, Debug)]
pub struct ConstructiveProposer {
    /// Slot fixed by a rule rather than by the caller, with its worker.
    required: Vec<(SlotIdx, WorkerIdx)>,
    availability: Vec<f64>,
}

impl ConstructiveProposer {
    pub fn new(problem: &SchedulingProblem, evaluator: &ConstraintEvaluator) -> Self {
        let required = evaluator
            .required_assignments()
            .iter()
            .copied()
            .filter(|&(slot, _)| problem.pinned_worker(slot).is_none())
            .collect();
        let availability = (0..problem.worker_count())
            .map(|worker| problem.availability_ratio(worker))
            .collect();
        Self {
            required,
            availability,
        }
    }

    /// Builds a complete schedule.
    ///
    /// # Errors
    ///
    /// When some slot has no eligible worker, returns a violation naming that
    /// slot and the check that eliminated the last candidates.
    pub fn propose<R: Rng>(
        &self,
        problem: &SchedulingProblem,
        evaluator: &ConstraintEvaluator,
        rng: &mut R,
    ) -> Result<Schedule, Violation> {
        let mut schedule = Schedule::for_problem(problem);
        for &(slot, worker) in &self.required {
            schedule.assign(slot, Some(worker));
        }

        let mut by_worker = schedule.slots_by_worker(problem);
        let mut load = vec![0.0; problem.worker_count()];
        for (slot, worker) in schedule.assigned_pairs() {
            load[worker] += problem.slot(slot).inconvenience();
        }

        let mut eligible: Vec<WorkerIdx> = Vec::with_capacity(problem.worker_count());
        for &slot in problem.chronological_slots() {
            if schedule.get(slot).is_some() {
                continue;
            }

            eligible.clear();
            let mut deepest: Option<DiscardReason> = None;
            for (worker, held) in by_worker.iter().enumerate() {
                match evaluator.check_placement(problem, held, slot, worker) {
                    Ok(()) => eligible.push(worker),
                    Err(violation) => deepest = deepest.max(Some(violation.reason)),
                }
            }
            if eligible.is_empty() {
                let reason = deepest.unwrap_or(DiscardReason::QualificationMismatch);
                return Err(Violation::new(reason, Some(slot), None));
            }

            // Shuffle first so equally loaded workers are drawn fairly.
            eligible.shuffle(rng);
            eligible.sort_by(|&a, &b| {
                self.weighted_load(&load, a)
                    .total_cmp(&self.weighted_load(&load, b))
            });
            let worker = eligible[pick_decreasing(eligible.len(), rng)];

            schedule.assign(slot, Some(worker));
            let rank = problem.chronological_rank(slot);
            let held = &mut by_worker[worker];
            let at = held.partition_point(|&s| problem.chronological_rank(s) < rank);
            held.insert(at, slot);
            load[worker] += problem.slot(slot).inconvenience();
        }
        Ok(schedule)
    }

    fn weighted_load(&self, load: &[f64], worker: WorkerIdx) -> f64 {
        let ratio = self.availability[worker];
        if ratio > 0.0 {
            load[worker] / ratio
        } else {
            f64::MAX
        }
    }
}

/// Draws an index in `0..n` with weight `n - i` for index `i`.
fn pick_decreasing<R: Rng>(n: usize, rng: &mut R) -> usize {
    let total = n * (n + 1) / 2;
    let mut ticket = rng.random_range(0..total);
    for i in 0..n {
        let weight = n - i;
        if ticket < weight {
            return i;
        }
        ticket -= weight;
    }
    n - 1
}

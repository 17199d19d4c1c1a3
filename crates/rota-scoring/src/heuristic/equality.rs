use rota_core::{Schedule, SchedulingProblem};

use super::normalized_spread;

/// Per-worker load divided by availability, for workers available at all.
fn normalized_loads<F>(problem: &SchedulingProblem, schedule: &Schedule, load_of: F) -> Vec<f64>
where
    F: Fn(usize) -> f64,
{
    let mut loads = vec![0.0; problem.worker_count()];
    for (slot, worker) in schedule.assigned_pairs() {
        loads[worker] += load_of(slot);
    }
    loads
        .into_iter()
        .enumerate()
        .filter_map(|(worker, load)| {
            let ratio = problem.availability_ratio(worker);
            (ratio > 0.0).then(|| load / ratio)
        })
        .collect()
}

/// Spread of total inconvenience per worker.
pub(super) fn inconvenience_equality(problem: &SchedulingProblem, schedule: &Schedule) -> f64 {
    let loads = normalized_loads(problem, schedule, |slot| problem.slot(slot).inconvenience());
    normalized_spread(&loads)
}

/// Spread of assigned slot counts per worker.
pub(super) fn slot_equality(problem: &SchedulingProblem, schedule: &Schedule) -> f64 {
    let loads = normalized_loads(problem, schedule, |_| 1.0);
    normalized_spread(&loads)
}

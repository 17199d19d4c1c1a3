use rota_config::ProximityPreference;
use rota_core::{Schedule, SchedulingProblem};

use super::squash;

/// Gaps between each worker's consecutive shifts, in chronological slot
/// positions, divided by the expected period `slot_count / worker_count`.
fn relative_gaps(problem: &SchedulingProblem, schedule: &Schedule) -> Vec<f64> {
    if problem.worker_count() == 0 || problem.slot_count() == 0 {
        return Vec::new();
    }
    let period = problem.slot_count() as f64 / problem.worker_count() as f64;
    schedule
        .slots_by_worker(problem)
        .iter()
        .flat_map(|slots| {
            slots.windows(2).map(|pair| {
                let gap = problem.chronological_rank(pair[1]) - problem.chronological_rank(pair[0]);
                gap as f64 / period
            })
        })
        .collect()
}

pub(super) fn slot_proximity(
    problem: &SchedulingProblem,
    schedule: &Schedule,
    preference: ProximityPreference,
) -> f64 {
    let gaps = relative_gaps(problem, schedule);
    if gaps.is_empty() {
        return 0.0;
    }
    let count = gaps.len() as f64;
    match preference {
        ProximityPreference::Spread => {
            let rms = (gaps.iter().map(|d| (d - 1.0).powi(2)).sum::<f64>() / count).sqrt();
            squash(rms)
        }
        ProximityPreference::Cluster => gaps.iter().map(|&d| squash(d)).sum::<f64>() / count,
    }
}

//! Per-worker summary of a schedule.

use super::{Schedule, SchedulingProblem, WorkerId};
use crate::time::Minutes;

/// Load carried by one worker in a schedule.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkerStats {
    pub worker_id: WorkerId,
    pub shift_count: usize,
    pub total_minutes: Minutes,
    pub total_inconvenience: f64,
    /// Share of the horizon the worker is available, in `[0, 1]`.
    pub availability_ratio: f64,
    /// `total_inconvenience` minus the worker's expected share of the
    /// assigned inconvenience. Positive means overloaded.
    pub inconvenience_deviation: f64,
}

/// Load summary for every worker of a problem.
///
/// # Examples
///
/// ```
/// use rota_core::{Schedule, ScheduleStats, SchedulingProblem, Slot, WorkHour, Worker};
///
/// let problem = SchedulingProblem::new(
///     1,
///     vec![Worker::new("a", "A"), Worker::new("b", "B")],
///     vec![
///         Slot::new("s1").with_work_hour(WorkHour::new(0, 120, 1.0)),
///         Slot::new("s2").with_work_hour(WorkHour::new(120, 240, 1.0)),
///     ],
/// ).unwrap();
///
/// let mut schedule = Schedule::for_problem(&problem);
/// schedule.assign(0, Some(0));
/// schedule.assign(1, Some(0));
///
/// let stats = ScheduleStats::compute(&problem, &schedule);
/// assert_eq!(stats.workers[0].shift_count, 2);
/// assert_eq!(stats.workers[0].inconvenience_deviation, 2.0);
/// assert_eq!(stats.workers[1].inconvenience_deviation, -2.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScheduleStats {
    /// One entry per worker, in problem order.
    pub workers: Vec<WorkerStats>,
    pub assigned_slots: usize,
    pub unassigned_slots: usize,
}

impl ScheduleStats {
    pub fn compute(problem: &SchedulingProblem, schedule: &Schedule) -> Self {
        let mut workers: Vec<WorkerStats> = problem
            .workers()
            .iter()
            .enumerate()
            .map(|(idx, worker)| WorkerStats {
                worker_id: worker.id.clone(),
                shift_count: 0,
                total_minutes: 0,
                total_inconvenience: 0.0,
                availability_ratio: problem.availability_ratio(idx),
                inconvenience_deviation: 0.0,
            })
            .collect();

        let mut assigned_slots = 0;
        for (slot, worker) in schedule.assigned_pairs() {
            let slot = problem.slot(slot);
            let entry = &mut workers[worker];
            entry.shift_count += 1;
            entry.total_minutes += slot.total_minutes();
            entry.total_inconvenience += slot.inconvenience();
            assigned_slots += 1;
        }

        let total: f64 = workers.iter().map(|w| w.total_inconvenience).sum();
        let capacity: f64 = workers.iter().map(|w| w.availability_ratio).sum();
        if capacity > 0.0 {
            for entry in &mut workers {
                let expected = total * entry.availability_ratio / capacity;
                entry.inconvenience_deviation = entry.total_inconvenience - expected;
            }
        }

        Self {
            workers,
            assigned_slots,
            unassigned_slots: schedule.len() - assigned_slots,
        }
    }

    /// Largest absolute inconvenience deviation over all workers.
    pub fn max_deviation(&self) -> f64 {
        self.workers
            .iter()
            .map(|w| w.inconvenience_deviation.abs())
            .fold(0.0, f64::max)
    }
}

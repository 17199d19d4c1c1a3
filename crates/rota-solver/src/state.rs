//! Snapshots of a search invocation.

use std::collections::BTreeSet;
use std::time::Duration;

use rota_core::{Assignment, Schedule, ScheduleScore, ScheduleStats, SchedulingProblem, SlotId};
use rota_scoring::{DiscardTally, HeuristicScore};

use crate::commit::AssignmentSink;
use crate::termination::TerminationReason;

/// A valid schedule with its aggregate score and sub-scores.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredSchedule {
    pub schedule: Schedule,
    /// Weighted mean of `heuristic_scores`, lower is better.
    pub score: ScheduleScore,
    pub heuristic_scores: Vec<HeuristicScore>,
}

impl ScoredSchedule {
    pub fn new(schedule: Schedule, score: ScheduleScore, heuristic_scores: Vec<HeuristicScore>) -> Self {
        Self {
            schedule,
            score,
            heuristic_scores,
        }
    }

    /// The sub-score with the given display name.
    pub fn heuristic(&self, name: &str) -> Option<&HeuristicScore> {
        self.heuristic_scores.iter().find(|h| h.name == name)
    }

    /// Caller-facing assignments, in input slot order.
    pub fn assignments(&self, problem: &SchedulingProblem) -> Vec<Assignment> {
        self.schedule.assignments(problem)
    }

    pub fn stats(&self, problem: &SchedulingProblem) -> ScheduleStats {
        ScheduleStats::compute(problem, &self.schedule)
    }

    /// Hands every assigned `(slot, worker)` pair to `sink`, in input slot
    /// order, and returns how many were handed over.
    ///
    /// # Errors
    ///
    /// Stops at and returns the sink's first error.
    pub fn commit<K: AssignmentSink>(
        &self,
        problem: &SchedulingProblem,
        sink: &mut K,
    ) -> Result<usize, K::Error> {
        let mut committed = 0;
        for (slot, worker) in self.schedule.assigned_pairs() {
            sink.assign(&problem.slot(slot).id, &problem.worker(worker).id)?;
            committed += 1;
        }
        Ok(committed)
    }
}

/// Whether a search is still running.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverStatus {
    #[default]
    NotStarted,
    Solving,
    Terminated(TerminationReason),
}

/// Everything known about a search at one point in time.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchedulerState {
    /// Best schedules first, at most `keep_top_count` of them.
    pub top_schedules: Vec<ScoredSchedule>,
    pub discarded: DiscardTally,
    /// Slots implicated in hard-constraint conflicts while no valid schedule
    /// was known.
    pub problem_slot_ids: BTreeSet<SlotId>,
    /// Proposals made.
    pub cycle_count: u64,
    /// Proposals that passed every hard constraint.
    pub computed: u64,
    pub elapsed: Duration,
    pub status: SolverStatus,
}

impl SchedulerState {
    pub fn best(&self) -> Option<&ScoredSchedule> {
        self.top_schedules.first()
    }

    pub fn is_terminated(&self) -> bool {
        matches!(self.status, SolverStatus::Terminated(_))
    }

    pub fn termination_reason(&self) -> Option<TerminationReason> {
        match self.status {
            SolverStatus::Terminated(reason) => Some(reason),
            _ => None,
        }
    }
}

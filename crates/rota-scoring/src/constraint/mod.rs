//! Hard constraint checks.
//!
//! [`ConstraintEvaluator::evaluate`] runs the checks below in order, each
//! over every assignment before the next one starts, and stops at the first
//! violation:
//!
//! 1. qualification
//! 2. approved leave (unless leave is ignored)
//! 3. double booking
//! 4. maximum interval between shifts
//! 5. minimum standard-workday shifts per week
//! 6. minimum rest
//! 7. first shift after extended leave
//!
//! [`ConstraintEvaluator::check_placement`] runs checks 1, 2, 3 and 6 for a
//! single worker on a single slot, for proposers that build schedules one
//! slot at a time.

mod double_booking;
mod extended_leave;
mod leave;
mod max_interval;
mod qualification;
mod reason;
mod rest;
mod weekly_minimum;

#[cfg(test)]
mod tests;

pub use reason::DiscardReason;

use rota_config::{RestTier, SchedulerConfig, WeeklyMinimumRule};
use rota_core::{Minutes, Schedule, SchedulingProblem, SlotId, SlotIdx, WorkerIdx, MINUTES_PER_DAY};

/// A failed hard constraint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Violation {
    pub reason: DiscardReason,
    /// The slot the violation is attributed to, if any.
    pub slot: Option<SlotIdx>,
    pub worker: Option<WorkerIdx>,
}

impl Violation {
    pub fn new(reason: DiscardReason, slot: Option<SlotIdx>, worker: Option<WorkerIdx>) -> Self {
        Self {
            reason,
            slot,
            worker,
        }
    }

    pub(crate) fn at(reason: DiscardReason, slot: SlotIdx, worker: WorkerIdx) -> Self {
        Self::new(reason, Some(slot), Some(worker))
    }

    /// Id of the attributed slot.
    pub fn slot_id<'a>(&self, problem: &'a SchedulingProblem) -> Option<&'a SlotId> {
        self.slot.map(|slot| &problem.slot(slot).id)
    }
}

/// Runs the hard checks enabled by a configuration.
///
/// Built once per invocation; rule tables that only depend on the problem
/// are precomputed.
#[derive(Clone, Debug)]
pub struct ConstraintEvaluator {
    respect_leave_schedule: bool,
    rest_tiers: Vec<RestTier>,
    max_interval: Option<Minutes>,
    weekly_minimum: Option<WeeklyMinimumRule>,
    required: Vec<(SlotIdx, WorkerIdx)>,
}

impl ConstraintEvaluator {
    pub fn new(problem: &SchedulingProblem, config: &SchedulerConfig) -> Self {
        let rules = &config.rules;
        let required = rules
            .first_shift_after_extended_leave
            .as_ref()
            .map(|rule| extended_leave::required_assignments(problem, rule))
            .unwrap_or_default();

        Self {
            respect_leave_schedule: config.respect_leave_schedule,
            rest_tiers: rules.minimum_rest.clone(),
            max_interval: rules
                .max_interval_between_shifts_days
                .map(|days| Minutes::from(days) * MINUTES_PER_DAY),
            weekly_minimum: rules.minimum_shifts_per_week,
            required,
        }
    }

    /// Slots that must go to a given worker, as `(slot, worker)` pairs.
    pub fn required_assignments(&self) -> &[(SlotIdx, WorkerIdx)] {
        &self.required
    }

    /// Checks a whole (possibly partial) schedule.
    ///
    /// # Errors
    ///
    /// Returns the first violation, in check order.
    pub fn evaluate(&self, problem: &SchedulingProblem, schedule: &Schedule) -> Result<(), Violation> {
        qualification::check(problem, schedule)?;
        if self.respect_leave_schedule {
            leave::check(problem, schedule)?;
        }

        let by_worker = schedule.slots_by_worker(problem);
        double_booking::check(problem, &by_worker)?;
        if let Some(limit) = self.max_interval {
            max_interval::check(problem, &by_worker, limit)?;
        }
        if let Some(rule) = &self.weekly_minimum {
            weekly_minimum::check(problem, &by_worker, rule)?;
        }
        rest::check(problem, &by_worker, &self.rest_tiers)?;
        extended_leave::check(schedule, &self.required)
    }

    /// Checks whether `worker` may take `slot` given the slots it already
    /// holds.
    ///
    /// `worker_slots` must be ordered by chronological rank.
    ///
    /// # Errors
    ///
    /// Returns the first violation among qualification, leave, double
    /// booking and rest.
    pub fn check_placement(
        &self,
        problem: &SchedulingProblem,
        worker_slots: &[SlotIdx],
        slot: SlotIdx,
        worker: WorkerIdx,
    ) -> Result<(), Violation> {
        qualification::check_pair(problem, slot, worker)?;
        if self.respect_leave_schedule {
            leave::check_pair(problem, slot, worker)?;
        }
        double_booking::check_pair(problem, worker_slots, slot, worker)?;
        rest::check_pair(problem, worker_slots, slot, worker, &self.rest_tiers)
    }
}

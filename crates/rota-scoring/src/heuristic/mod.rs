//! Soft objectives scoring valid schedules.
//!
//! Every heuristic maps a schedule to `[0, 1]`, lower is better, and is a
//! pure function of the problem and the schedule. [`HeuristicSet`] combines
//! the enabled heuristics into one [`ScheduleScore`].

mod balance;
mod equality;
mod non_workday;
mod proximity;


pub use balance::normalized_spread;
pub(crate) use balance::squash;

use std::fmt;

use rota_config::{HeuristicsConfig, ProximityPreference};
use rota_core::{Schedule, ScheduleScore, SchedulingProblem};

/// A built-in heuristic with its parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum HeuristicKind {
    /// Inconvenience per worker, normalized by availability, should be equal.
    InconvenienceEquality,
    /// Slot counts per worker, normalized by availability, should be equal.
    SlotEquality,
    /// Gaps between a worker's shifts should match the preference.
    SlotProximity(ProximityPreference),
    /// A worker's first shift of a week should rarely be on a non-workday.
    NonWorkdayFirstShift { non_workdays_per_week: f64 },
}

impl HeuristicKind {
    /// Stable display name.
    pub const fn name(&self) -> &'static str {
        match self {
            HeuristicKind::InconvenienceEquality => "Worker Inconvenience Equality",
            HeuristicKind::SlotEquality => "Worker Slot Equality",
            HeuristicKind::SlotProximity(_) => "Worker Slot Proximity",
            HeuristicKind::NonWorkdayFirstShift { .. } => "Avoid Non-Work Day First Shift",
        }
    }

    /// Scores `schedule`, in `[0, 1]`.
    pub fn evaluate(&self, problem: &SchedulingProblem, schedule: &Schedule) -> f64 {
        let value = match *self {
            HeuristicKind::InconvenienceEquality => {
                equality::inconvenience_equality(problem, schedule)
            }
            HeuristicKind::SlotEquality => equality::slot_equality(problem, schedule),
            HeuristicKind::SlotProximity(preference) => {
                proximity::slot_proximity(problem, schedule, preference)
            }
            HeuristicKind::NonWorkdayFirstShift {
                non_workdays_per_week,
            } => non_workday::non_workday_first_shift(problem, schedule, non_workdays_per_week),
        };
        if value.is_nan() {
            1.0
        } else {
            value.clamp(0.0, 1.0)
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One named sub-score of a scored schedule.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeuristicScore {
    pub name: String,
    pub weight: f64,
    /// In `[0, 1]`, lower is better.
    pub value: f64,
}

/// The enabled heuristics and their weights.
///
/// # Examples
///
/// ```
/// use rota_config::HeuristicsConfig;
/// use rota_scoring::HeuristicSet;
///
/// let set = HeuristicSet::from_config(&HeuristicsConfig::default());
/// assert_eq!(set.len(), 4);
///
/// let none = HeuristicSet::from_config(&HeuristicsConfig::disabled());
/// assert!(none.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HeuristicSet {
    entries: Vec<(HeuristicKind, f64)>,
}

impl HeuristicSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from configured weights, skipping zero weights.
    pub fn from_config(config: &HeuristicsConfig) -> Self {
        Self::new()
            .with(
                HeuristicKind::InconvenienceEquality,
                config.inconvenience_equality_weight,
            )
            .with(HeuristicKind::SlotEquality, config.slot_equality_weight)
            .with(
                HeuristicKind::SlotProximity(config.proximity_preference),
                config.slot_proximity_weight,
            )
            .with(
                HeuristicKind::NonWorkdayFirstShift {
                    non_workdays_per_week: config.non_workdays_per_week,
                },
                config.non_workday_first_shift_weight,
            )
    }

    /// Adds a heuristic. Non-positive weights disable it.
    pub fn with(mut self, kind: HeuristicKind, weight: f64) -> Self {
        if weight > 0.0 {
            self.entries.push((kind, weight));
        }
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(HeuristicKind, f64)> {
        self.entries.iter()
    }

    /// Scores a valid schedule.
    ///
    /// Returns the weighted mean of the enabled heuristics, or zero when
    /// none is enabled, together with each sub-score.
    pub fn evaluate(
        &self,
        problem: &SchedulingProblem,
        schedule: &Schedule,
    ) -> (ScheduleScore, Vec<HeuristicScore>) {
        let scores: Vec<HeuristicScore> = self
            .entries
            .iter()
            .map(|&(kind, weight)| HeuristicScore {
                name: kind.name().to_string(),
                weight,
                value: kind.evaluate(problem, schedule),
            })
            .collect();

        let total_weight: f64 = scores.iter().map(|s| s.weight).sum();
        if total_weight <= 0.0 {
            return (ScheduleScore::ZERO, scores);
        }
        let weighted: f64 = scores.iter().map(|s| s.weight * s.value).sum();
        (ScheduleScore::of(weighted / total_weight), scores)
    }
}

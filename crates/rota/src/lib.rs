//! Rota - fair shift auto-fill scheduling in Rust
//!
//! Describe workers, their qualifications and leave, and the slots to fill;
//! the scheduler returns the best assignments it found, ranked by fairness.
//!
//! # Example
//!
//! ```rust
//! use rota::prelude::*;
//!
//! let problem = SchedulingProblem::new(
//!     2,
//!     vec![Worker::new("ana", "Ana"), Worker::new("ben", "Ben")],
//!     vec![
//!         Slot::new("mon-early").with_work_hour(WorkHour::new(6 * 60, 14 * 60, 1.0)),
//!         Slot::new("mon-late").with_work_hour(WorkHour::new(14 * 60, 22 * 60, 1.5)),
//!     ],
//! )
//! .unwrap();
//! let config = SchedulerConfig::new().with_random_seed(7).with_step_count_limit(100);
//!
//! let state = rota::auto_fill(problem, config).unwrap();
//! assert!(state.best().is_some());
//! ```

// Domain model
pub use rota_core::{
    Assignment, Interval, Leave, Minutes, Schedule, ScheduleScore, ScheduleStats,
    SchedulingProblem, Slot, SlotId, SlotIdx, WorkHour, Worker, WorkerId, WorkerIdx,
    WorkerStats, MINUTES_PER_DAY, MINUTES_PER_HOUR, MINUTES_PER_WEEK,
};
pub use rota_core::{Result, RotaError};

// Configuration
pub use rota_config::{
    ConfigError, ExtendedLeaveRule, HeuristicsConfig, ProximityPreference, RestTier,
    RulesConfig, SchedulerConfig, SearchConfig, TerminationConfig, WeeklyMinimumRule,
    DEFAULT_TIME_LIMIT,
};

// Scoring
pub use rota_scoring::{
    ConstraintEvaluator, DiscardReason, DiscardTally, HeuristicKind, HeuristicScore, HeuristicSet,
    Violation,
};

// Search
pub use rota_solver::{
    AssignmentSink, CancelToken, Scheduler, SchedulerHandle, SchedulerState, ScoredSchedule,
    SolverStatus, TerminationReason,
};

/// Progress channel used by [`Scheduler::subscribe`] and
/// [`SchedulerHandle::subscribe`].
pub use tokio::sync::watch;

mod run;
pub use run::{auto_fill, auto_fill_from_file, spawn_auto_fill};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{
        Assignment, Leave, Schedule, ScheduleScore, SchedulingProblem, Slot, WorkHour, Worker,
    };
    pub use super::{
        ExtendedLeaveRule, HeuristicsConfig, ProximityPreference, SchedulerConfig,
        WeeklyMinimumRule,
    };
    pub use super::{
        AssignmentSink, DiscardReason, Scheduler, SchedulerHandle, SchedulerState,
        ScoredSchedule, TerminationReason,
    };
}

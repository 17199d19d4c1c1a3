//! Rota search engine
//!
//! This crate provides the auto-fill scheduler:
//! - [`Scheduler`] - runs one search invocation, blocking or on its own thread
//! - Proposers - randomized construction and mutation of pool members
//! - [`SchedulePool`] - the top-K result pool
//! - Termination conditions
//! - [`SchedulerState`] snapshots published over a `tokio::sync::watch` channel
//!
//! # Example
//!
//! ```
//! use rota_config::SchedulerConfig;
//! use rota_core::{SchedulingProblem, Slot, WorkHour, Worker};
//! use rota_solver::Scheduler;
//!
//! let problem = SchedulingProblem::new(
//!     1,
//!     vec![Worker::new("a", "Ana"), Worker::new("b", "Ben")],
//!     vec![
//!         Slot::new("early").with_work_hour(WorkHour::new(6 * 60, 14 * 60, 1.0)),
//!         Slot::new("late").with_work_hour(WorkHour::new(14 * 60, 22 * 60, 1.5)),
//!     ],
//! ).unwrap();
//! let config = SchedulerConfig::new().with_random_seed(1).with_step_count_limit(50);
//!
//! let state = Scheduler::new(problem, config).unwrap().solve();
//! let best = state.best().unwrap();
//! assert!(best.schedule.is_complete());
//! ```

pub mod commit;
pub mod handle;
pub mod pool;
pub mod propose;
pub mod scheduler;
pub mod scope;
pub mod state;
pub mod termination;

pub use commit::AssignmentSink;
pub use handle::{CancelToken, SchedulerHandle};
pub use pool::{Admission, SchedulePool};
pub use propose::{ConstructiveProposer, MutationProposer};
pub use scheduler::Scheduler;
pub use scope::SolverScope;
pub use state::{SchedulerState, ScoredSchedule, SolverStatus};
pub use termination::{Termination, TerminationReason};

//! Rota Core - Domain model and core types for shift auto-fill
//!
//! This crate provides the fundamental abstractions for Rota:
//! - Time intervals measured in minutes from the horizon start
//! - Workers, leave, slots and work hours
//! - The validated [`SchedulingProblem`] and candidate [`Schedule`]s
//! - The aggregate [`ScheduleScore`]

pub mod domain;
pub mod error;
pub mod score;
pub mod time;

pub use domain::{
    Assignment, Leave, Schedule, ScheduleStats, SchedulingProblem, Slot, SlotId, SlotIdx, WorkHour,
    Worker, WorkerId, WorkerIdx, WorkerStats,
};
pub use error::{Result, RotaError};
pub use score::ScheduleScore;
pub use time::{Interval, Minutes, MINUTES_PER_DAY, MINUTES_PER_HOUR, MINUTES_PER_WEEK};

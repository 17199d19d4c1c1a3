//! Domain model: workers, slots, problems and schedules.

mod problem;
mod schedule;
mod slot;
mod stats;
mod worker;

#[cfg(test)]
mod tests;

pub use problem::{SchedulingProblem, SlotIdx, WorkerIdx};
pub use schedule::{Assignment, Schedule};
pub use slot::{Slot, SlotId, WorkHour};
pub use stats::{ScheduleStats, WorkerStats};
pub use worker::{Leave, Worker, WorkerId};

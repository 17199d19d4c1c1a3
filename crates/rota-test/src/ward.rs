//! A hospital ward rota with day, evening and night shifts.
//!
//! # Example
//!
//! ```
//! use rota_test::ward::WardRota;
//!
//! let ward = WardRota::new(6, 14).build();
//! assert_eq!(ward.slot_count(), 14 * 3);
//! assert_eq!(ward.worker_count(), 6);
//! ```

use rota_core::{Leave, SchedulingProblem, Slot, WorkHour, Worker, MINUTES_PER_DAY};

/// Builder for a ward rota.
///
/// Every day has a day shift (07-15, multiplier 1), an evening shift (15-23,
/// multiplier 1.5) and a night shift (23-07, multiplier 2). Days 5 and 6 of
/// each week are non-workdays. Night shifts require the `night` qualification,
/// held by every other worker.
#[derive(Clone, Debug)]
pub struct WardRota {
    workers: usize,
    days: u32,
    leaves: Vec<(usize, Leave)>,
}

impl WardRota {
    pub fn new(workers: usize, days: u32) -> Self {
        Self {
            workers,
            days,
            leaves: Vec::new(),
        }
    }

    /// Gives worker `worker` approved leave over whole days `[from, to)`.
    pub fn with_leave(mut self, worker: usize, from: i64, to: i64, leave_type: &str) -> Self {
        self.leaves.push((
            worker,
            Leave::new(from * MINUTES_PER_DAY, to * MINUTES_PER_DAY, leave_type),
        ));
        self
    }

    pub fn worker_id(index: usize) -> String {
        format!("nurse-{index:02}")
    }

    pub fn workers(&self) -> Vec<Worker> {
        (0..self.workers)
            .map(|i| {
                let mut worker = Worker::new(Self::worker_id(i), format!("Nurse {i}"))
                    .with_qualification("ward");
                if i % 2 == 0 {
                    worker = worker.with_qualification("night");
                }
                for (_, leave) in self.leaves.iter().filter(|(w, _)| *w == i) {
                    worker = worker.with_leave(leave.clone());
                }
                worker
            })
            .collect()
    }

    pub fn slots(&self) -> Vec<Slot> {
        let mut slots = Vec::with_capacity(self.days as usize * 3);
        for day in 0..i64::from(self.days) {
            let base = day * MINUTES_PER_DAY;
            let workday = day % 7 < 5;
            slots.push(
                Slot::new(format!("d{day}-day"))
                    .with_work_hour(WorkHour::new(base + 7 * 60, base + 15 * 60, 1.0))
                    .on_standard_workday(workday)
                    .requiring("ward"),
            );
            slots.push(
                Slot::new(format!("d{day}-evening"))
                    .with_work_hour(WorkHour::new(base + 15 * 60, base + 23 * 60, 1.5))
                    .on_standard_workday(workday)
                    .requiring("ward"),
            );
            slots.push(
                Slot::new(format!("d{day}-night"))
                    .with_work_hour(WorkHour::new(base + 23 * 60, base + 31 * 60, 2.0))
                    .on_standard_workday(workday)
                    .requiring("night"),
            );
        }
        slots
    }

    /// Builds the problem, panicking on invalid input.
    pub fn build(&self) -> SchedulingProblem {
        SchedulingProblem::new(self.days, self.workers(), self.slots())
            .unwrap_or_else(|e| panic!("invalid ward rota: {e}"))
    }
}

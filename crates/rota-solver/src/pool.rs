//! The top-K result pool.

use std::ops::Index;

use crate::state::ScoredSchedule;

/// Outcome of offering a schedule to the pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    /// Admitted in first place.
    NewBest,
    /// Admitted below first place.
    Admitted,
    /// Not better than the K-th member of a full pool.
    Rejected,
    /// An identical schedule is already pooled.
    Duplicate,
}

impl Admission {
    /// Returns true if the pool changed.
    pub fn is_admitted(self) -> bool {
        matches!(self, Admission::NewBest | Admission::Admitted)
    }
}

/// Best schedules found so far, ascending by score.
///
/// Ties keep the earlier-discovered schedule ahead.
///
/// # Examples
///
/// ```
/// use rota_core::{Schedule, ScheduleScore};
/// use rota_solver::{Admission, SchedulePool, ScoredSchedule};
///
/// let scored = |worker: usize, score: f64| {
///     let mut schedule = Schedule::unassigned(1);
///     schedule.assign(0, Some(worker));
///     ScoredSchedule::new(schedule, ScheduleScore::of(score), Vec::new())
/// };
///
/// let mut pool = SchedulePool::new(2);
/// assert_eq!(pool.offer(scored(0, 0.5)), Admission::NewBest);
/// assert_eq!(pool.offer(scored(1, 0.7)), Admission::Admitted);
/// assert_eq!(pool.offer(scored(2, 0.9)), Admission::Rejected);
/// assert_eq!(pool.offer(scored(3, 0.1)), Admission::NewBest);
/// assert_eq!(pool.len(), 2);
/// assert_eq!(pool.best().unwrap().score, ScheduleScore::of(0.1));
/// ```
#[derive(Clone, Debug)]
pub struct SchedulePool {
    capacity: usize,
    entries: Vec<ScoredSchedule>,
}

impl SchedulePool {
    /// Creates an empty pool holding at most `capacity` schedules.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity + 1),
        }
    }

    /// Inserts `candidate` after every member scoring lower or equal, then
    /// evicts beyond capacity.
    pub fn offer(&mut self, candidate: ScoredSchedule) -> Admission {
        let at = self
            .entries
            .partition_point(|entry| entry.score <= candidate.score);
        if at >= self.capacity {
            return Admission::Rejected;
        }
        if self
            .entries
            .iter()
            .any(|entry| entry.score == candidate.score && entry.schedule == candidate.schedule)
        {
            return Admission::Duplicate;
        }
        self.entries.insert(at, candidate);
        self.entries.truncate(self.capacity);
        if at == 0 {
            Admission::NewBest
        } else {
            Admission::Admitted
        }
    }

    pub fn best(&self) -> Option<&ScoredSchedule> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredSchedule> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[ScoredSchedule] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<ScoredSchedule> {
        self.entries
    }
}

impl Index<usize> for SchedulePool {
    type Output = ScoredSchedule;

    fn index(&self, index: usize) -> &ScoredSchedule {
        &self.entries[index]
    }
}

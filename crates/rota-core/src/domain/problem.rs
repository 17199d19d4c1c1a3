//! The validated input of one scheduling invocation.

use std::collections::{HashMap, HashSet};

use super::{Slot, Worker, WorkerId};
use crate::error::{Result, RotaError};
use crate::time::{Interval, Minutes, MINUTES_PER_DAY};

/// Index of a worker inside a [`SchedulingProblem`].
pub type WorkerIdx = usize;

/// Index of a slot inside a [`SchedulingProblem`].
pub type SlotIdx = usize;

/// Workers, slots and the planning horizon, checked once and then read-only.
///
/// Construction fails with a descriptive [`RotaError`] on malformed input,
/// so search code can rely on every slot having at least one well-formed
/// work hour and every pre-assigned worker existing.
#[derive(Debug, Clone)]
pub struct SchedulingProblem {
    horizon_days: u32,
    workers: Vec<Worker>,
    slots: Vec<Slot>,
    worker_index: HashMap<WorkerId, WorkerIdx>,
    pinned: Vec<Option<WorkerIdx>>,
    chronological: Vec<SlotIdx>,
    chronological_rank: Vec<usize>,
}

impl SchedulingProblem {
    /// Validates the input and builds lookup tables.
    ///
    /// # Errors
    ///
    /// Returns the first problem found: empty horizon, duplicate ids, slots
    /// without work hours, inverted or overlapping intervals, invalid
    /// multipliers, or pre-assignments to unknown workers.
    ///
    /// Each worker's approved leave is sorted by start, whatever order it was
    /// supplied in.
    pub fn new(horizon_days: u32, mut workers: Vec<Worker>, slots: Vec<Slot>) -> Result<Self> {
        if horizon_days == 0 {
            return Err(RotaError::EmptyHorizon);
        }

        let mut worker_index = HashMap::with_capacity(workers.len());
        for (idx, worker) in workers.iter_mut().enumerate() {
            worker.approved_leaves.sort_by_key(|leave| (leave.start, leave.end));
            if worker_index.insert(worker.id.clone(), idx).is_some() {
                return Err(RotaError::DuplicateWorker(worker.id.clone()));
            }
            if let Some(leave) = worker.approved_leaves.iter().find(|l| l.end <= l.start) {
                return Err(RotaError::InvalidLeave {
                    worker: worker.id.clone(),
                    start: leave.start,
                    end: leave.end,
                });
            }
        }

        let mut slot_ids = HashSet::with_capacity(slots.len());
        let mut pinned = Vec::with_capacity(slots.len());
        for slot in &slots {
            if !slot_ids.insert(&slot.id) {
                return Err(RotaError::DuplicateSlot(slot.id.clone()));
            }
            if slot.work_hours.is_empty() {
                return Err(RotaError::EmptySlot(slot.id.clone()));
            }
            for work_hour in &slot.work_hours {
                if work_hour.end <= work_hour.start {
                    return Err(RotaError::InvalidWorkHour {
                        slot: slot.id.clone(),
                        start: work_hour.start,
                        end: work_hour.end,
                    });
                }
                let multiplier = work_hour.inconvenience_multiplier;
                if !multiplier.is_finite() || multiplier < 0.0 {
                    return Err(RotaError::InvalidInconvenience {
                        slot: slot.id.clone(),
                        multiplier,
                    });
                }
            }
            let mut hours: Vec<_> = slot.work_hours.iter().collect();
            hours.sort_by_key(|work_hour| work_hour.start);
            if let Some(pair) = hours.windows(2).find(|pair| pair[1].start < pair[0].end) {
                return Err(RotaError::InvalidWorkHour {
                    slot: slot.id.clone(),
                    start: pair[1].start,
                    end: pair[1].end,
                });
            }
            let pin = match &slot.assigned_worker {
                Some(worker) => Some(*worker_index.get(worker).ok_or_else(|| {
                    RotaError::UnknownWorker {
                        slot: slot.id.clone(),
                        worker: worker.clone(),
                    }
                })?),
                None => None,
            };
            pinned.push(pin);
        }

        let mut chronological: Vec<SlotIdx> = (0..slots.len()).collect();
        chronological.sort_by_key(|&idx| (slots[idx].start(), slots[idx].end(), idx));
        let mut chronological_rank = vec![0; slots.len()];
        for (rank, &idx) in chronological.iter().enumerate() {
            chronological_rank[idx] = rank;
        }

        Ok(Self {
            horizon_days,
            workers,
            slots,
            worker_index,
            pinned,
            chronological,
            chronological_rank,
        })
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    /// The planning horizon `[0, days × 1440)`.
    pub fn horizon(&self) -> Interval {
        Interval::new(0, self.horizon_minutes())
    }

    pub fn horizon_minutes(&self) -> Minutes {
        Minutes::from(self.horizon_days) * MINUTES_PER_DAY
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    #[inline]
    pub fn worker(&self, idx: WorkerIdx) -> &Worker {
        &self.workers[idx]
    }

    #[inline]
    pub fn slot(&self, idx: SlotIdx) -> &Slot {
        &self.slots[idx]
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn worker_idx(&self, id: &WorkerId) -> Option<WorkerIdx> {
        self.worker_index.get(id).copied()
    }

    /// The worker fixed on `slot` by the caller, if any.
    #[inline]
    pub fn pinned_worker(&self, slot: SlotIdx) -> Option<WorkerIdx> {
        self.pinned[slot]
    }

    /// Slot indices ordered by start, then end, then input position.
    pub fn chronological_slots(&self) -> &[SlotIdx] {
        &self.chronological
    }

    /// Position of `slot` in [`chronological_slots`](Self::chronological_slots).
    #[inline]
    pub fn chronological_rank(&self, slot: SlotIdx) -> usize {
        self.chronological_rank[slot]
    }

    #[inline]
    pub fn is_qualified(&self, worker: WorkerIdx, slot: SlotIdx) -> bool {
        self.workers[worker].has_any_qualification(&self.slots[slot].required_qualifications)
    }

    /// Share of the horizon the worker is available for work, in `(0, 1]`.
    ///
    /// Only non-personal leave reduces availability. Returns `0.0` for a
    /// worker on work leave for the whole horizon.
    pub fn availability_ratio(&self, worker: WorkerIdx) -> f64 {
        let horizon = self.horizon();
        let away = self.workers[worker].leave_minutes_within(&horizon, false);
        1.0 - away as f64 / horizon.len() as f64
    }
}

//! Slots: shift positions that need exactly one worker.

use std::fmt;

use smallvec::SmallVec;

use super::WorkerId;
use crate::time::{Interval, Minutes, MINUTES_PER_HOUR};

/// Stable identifier of a slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SlotId(String);

impl SlotId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SlotId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SlotId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A contiguous span of a slot with its own inconvenience multiplier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkHour {
    pub start: Minutes,
    pub end: Minutes,
    /// Weight of one hour of this span, e.g. 1.0 for office hours and 2.0
    /// for nights.
    pub inconvenience_multiplier: f64,
}

impl WorkHour {
    pub fn new(start: Minutes, end: Minutes, inconvenience_multiplier: f64) -> Self {
        Self {
            start,
            end,
            inconvenience_multiplier,
        }
    }

    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }

    #[inline]
    pub fn duration(&self) -> Minutes {
        self.end - self.start
    }

    /// Hours worked times the multiplier.
    #[inline]
    pub fn inconvenience(&self) -> f64 {
        self.duration() as f64 / MINUTES_PER_HOUR as f64 * self.inconvenience_multiplier
    }
}

/// A shift position.
///
/// # Examples
///
/// ```
/// use rota_core::{Slot, WorkHour};
///
/// let night = Slot::new("mon-night")
///     .with_work_hour(WorkHour::new(22 * 60, 24 * 60, 1.5))
///     .with_work_hour(WorkHour::new(24 * 60, 30 * 60, 2.0))
///     .requiring("nurse");
///
/// assert_eq!(night.start(), 22 * 60);
/// assert_eq!(night.end(), 30 * 60);
/// assert_eq!(night.inconvenience(), 2.0 * 1.5 + 6.0 * 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    pub id: SlotId,
    pub work_hours: SmallVec<[WorkHour; 2]>,
    pub starts_on_standard_workday: bool,
    /// Workers must hold at least one of these. Empty means anyone.
    pub required_qualifications: SmallVec<[String; 2]>,
    /// A worker fixed by the caller; search never changes it.
    pub assigned_worker: Option<WorkerId>,
}

impl Slot {
    pub fn new(id: impl Into<SlotId>) -> Self {
        Self {
            id: id.into(),
            work_hours: SmallVec::new(),
            starts_on_standard_workday: true,
            required_qualifications: SmallVec::new(),
            assigned_worker: None,
        }
    }

    pub fn with_work_hour(mut self, work_hour: WorkHour) -> Self {
        let at = self.work_hours.partition_point(|w| w.start <= work_hour.start);
        self.work_hours.insert(at, work_hour);
        self
    }

    pub fn on_standard_workday(mut self, standard: bool) -> Self {
        self.starts_on_standard_workday = standard;
        self
    }

    pub fn requiring(mut self, qualification: impl Into<String>) -> Self {
        self.required_qualifications.push(qualification.into());
        self
    }

    pub fn pre_assigned(mut self, worker: impl Into<WorkerId>) -> Self {
        self.assigned_worker = Some(worker.into());
        self
    }

    /// First minute of the slot.
    pub fn start(&self) -> Minutes {
        self.work_hours.iter().map(|w| w.start).min().unwrap_or(0)
    }

    /// Minute right after the slot's last work hour.
    pub fn end(&self) -> Minutes {
        self.work_hours.iter().map(|w| w.end).max().unwrap_or(0)
    }

    /// The smallest interval containing every work hour.
    pub fn span(&self) -> Interval {
        Interval::new(self.start(), self.end())
    }

    /// Total minutes worked.
    pub fn total_minutes(&self) -> Minutes {
        self.work_hours.iter().map(WorkHour::duration).sum()
    }

    /// Σ hours × multiplier over all work hours.
    pub fn inconvenience(&self) -> f64 {
        self.work_hours.iter().map(WorkHour::inconvenience).sum()
    }

    /// Returns true if any work hour of both slots overlap.
    pub fn overlaps(&self, other: &Slot) -> bool {
        if !self.span().overlaps(&other.span()) {
            return false;
        }
        self.work_hours.iter().any(|a| {
            other
                .work_hours
                .iter()
                .any(|b| a.interval().overlaps(&b.interval()))
        })
    }

    /// Returns true if any work hour overlaps `interval`.
    pub fn overlaps_interval(&self, interval: &Interval) -> bool {
        self.work_hours
            .iter()
            .any(|w| w.interval().overlaps(interval))
    }
}

//! Workers and their approved leave.

use std::collections::BTreeSet;
use std::fmt;

use crate::time::{covered_minutes, Interval, Minutes};

/// Stable identifier of a worker.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct WorkerId(String);

impl WorkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for WorkerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// An approved leave interval.
///
/// `start` and `end` are minute offsets from the horizon start; the interval
/// is half-open.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leave {
    pub start: Minutes,
    pub end: Minutes,
    /// Leave type tag, e.g. "vacation" or "training".
    pub leave_type: String,
    /// Whether the leave counts against the worker's personal time.
    ///
    /// Personal leave does not lower the share of work a worker is expected
    /// to carry.
    pub is_personal: bool,
}

impl Leave {
    /// Creates a non-personal leave.
    pub fn new(start: Minutes, end: Minutes, leave_type: impl Into<String>) -> Self {
        Self {
            start,
            end,
            leave_type: leave_type.into(),
            is_personal: false,
        }
    }

    /// Creates a leave that counts against personal time.
    pub fn personal(start: Minutes, end: Minutes, leave_type: impl Into<String>) -> Self {
        Self {
            is_personal: true,
            ..Self::new(start, end, leave_type)
        }
    }

    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

/// A worker that can be assigned to slots.
///
/// Immutable for the duration of a search.
///
/// # Examples
///
/// ```
/// use rota_core::{Leave, Worker};
///
/// let worker = Worker::new("w1", "Ana")
///     .with_qualification("nurse")
///     .with_leave(Leave::new(0, 1440, "vacation"));
///
/// assert!(worker.has_any_qualification(&["nurse".to_string()]));
/// assert!(worker.has_any_qualification(&[]));
/// assert_eq!(worker.approved_leaves.len(), 1);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Worker {
    pub id: WorkerId,
    pub name: String,
    pub qualifications: BTreeSet<String>,
    /// Approved leave, ordered by start once part of a
    /// [`SchedulingProblem`](super::SchedulingProblem).
    pub approved_leaves: Vec<Leave>,
}

impl Worker {
    pub fn new(id: impl Into<WorkerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            qualifications: BTreeSet::new(),
            approved_leaves: Vec::new(),
        }
    }

    pub fn with_qualification(mut self, qualification: impl Into<String>) -> Self {
        self.qualifications.insert(qualification.into());
        self
    }

    pub fn with_qualifications<I, Q>(mut self, qualifications: I) -> Self
    where
        I: IntoIterator<Item = Q>,
        Q: Into<String>,
    {
        self.qualifications
            .extend(qualifications.into_iter().map(Into::into));
        self
    }

    /// Adds an approved leave, keeping leaves ordered by start.
    pub fn with_leave(mut self, leave: Leave) -> Self {
        let at = self
            .approved_leaves
            .partition_point(|l| l.start <= leave.start);
        self.approved_leaves.insert(at, leave);
        self
    }

    /// Returns true if the worker holds at least one of `required`.
    ///
    /// An empty requirement is satisfied by everyone.
    pub fn has_any_qualification(&self, required: &[String]) -> bool {
        required.is_empty() || required.iter().any(|q| self.qualifications.contains(q))
    }

    /// Returns the first leave overlapping `interval`.
    pub fn leave_overlapping(&self, interval: &Interval) -> Option<&Leave> {
        self.approved_leaves
            .iter()
            .take_while(|l| l.start < interval.end())
            .find(|l| l.interval().overlaps(interval))
    }

    /// Minutes of `window` covered by approved leave.
    ///
    /// With `include_personal = false` personal leave is ignored.
    pub fn leave_minutes_within(&self, window: &Interval, include_personal: bool) -> Minutes {
        let intervals: Vec<Interval> = self
            .approved_leaves
            .iter()
            .filter(|l| include_personal || !l.is_personal)
            .filter(|l| l.start < l.end)
            .map(Leave::interval)
            .collect();
        covered_minutes(&intervals, window)
    }
}

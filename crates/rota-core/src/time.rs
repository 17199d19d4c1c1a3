//! Minute-based time arithmetic.
//!
//! All instants are minute offsets from the start of the planning horizon.

use std::cmp::{max, min};
use std::fmt;

/// A minute offset from the start of the planning horizon.
pub type Minutes = i64;

pub const MINUTES_PER_HOUR: Minutes = 60;
pub const MINUTES_PER_DAY: Minutes = 24 * MINUTES_PER_HOUR;
pub const MINUTES_PER_WEEK: Minutes = 7 * MINUTES_PER_DAY;

/// A half-open interval `[start, end)` of minutes.
///
/// # Invariants
/// `start` must always be less than or equal to `end`. Input data is checked
/// by problem validation before intervals are built from it.
///
/// # Examples
///
/// ```
/// use rota_core::Interval;
///
/// let night = Interval::new(22 * 60, 30 * 60);
/// let morning = Interval::new(30 * 60, 38 * 60);
/// assert!(!night.overlaps(&morning));
/// assert_eq!(night.len(), 8 * 60);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Interval {
    start: Minutes,
    end: Minutes,
}

impl Interval {
    /// Creates a new interval.
    #[inline]
    pub fn new(start: Minutes, end: Minutes) -> Self {
        debug_assert!(start <= end, "Invalid interval: start must not exceed end");
        Self { start, end }
    }

    /// Creates a new interval, or `None` if `start > end`.
    #[inline]
    pub fn try_new(start: Minutes, end: Minutes) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    #[inline]
    pub const fn start(&self) -> Minutes {
        self.start
    }

    #[inline]
    pub const fn end(&self) -> Minutes {
        self.end
    }

    /// Length in minutes.
    #[inline]
    pub const fn len(&self) -> Minutes {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    #[inline]
    pub const fn contains(&self, minute: Minutes) -> bool {
        self.start <= minute && minute < self.end
    }

    /// Returns true if both intervals share at least one minute.
    #[inline]
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Returns the common part of both intervals, if any.
    pub fn intersection(&self, other: &Interval) -> Option<Interval> {
        let start = max(self.start, other.start);
        let end = min(self.end, other.end);
        (start < end).then_some(Interval { start, end })
    }

    /// Number of minutes shared by both intervals.
    #[inline]
    pub fn overlap_len(&self, other: &Interval) -> Minutes {
        self.intersection(other).map_or(0, |i| i.len())
    }
}

impl fmt::Debug for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Total minutes of `window` covered by the union of `intervals`.
///
/// `intervals` must be sorted by start. Overlapping intervals are merged, so
/// no minute is counted twice.
pub fn covered_minutes<'a, I>(intervals: I, window: &Interval) -> Minutes
where
    I: IntoIterator<Item = &'a Interval>,
{
    let mut covered = 0;
    let mut cursor = window.start;
    for interval in intervals {
        if interval.start >= window.end {
            break;
        }
        let start = max(interval.start, cursor);
        let end = min(interval.end, window.end);
        if start < end {
            covered += end - start;
            cursor = end;
        }
    }
    covered
}

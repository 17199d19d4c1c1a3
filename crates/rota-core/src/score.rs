//! ScheduleScore - aggregate quality of a valid schedule

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Aggregate heuristic score of a schedule, in `[0, 1]`. Lower is better.
///
/// Totally ordered, so pools can be sorted and ties resolved
/// deterministically.
///
/// # Examples
///
/// ```
/// use rota_core::ScheduleScore;
///
/// let good = ScheduleScore::of(0.1);
/// let bad = ScheduleScore::of(0.7);
///
/// assert!(good < bad);
/// assert_eq!(ScheduleScore::of(1.5), ScheduleScore::WORST);
/// assert_eq!(ScheduleScore::of(f64::NAN), ScheduleScore::WORST);
/// ```
#[derive(Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ScheduleScore {
    value: f64,
}

impl ScheduleScore {
    /// The best possible score.
    pub const ZERO: ScheduleScore = ScheduleScore { value: 0.0 };

    /// The worst possible score.
    pub const WORST: ScheduleScore = ScheduleScore { value: 1.0 };

    /// Creates a score, clamping into `[0, 1]`. NaN maps to the worst score.
    #[inline]
    pub fn of(value: f64) -> Self {
        if value.is_nan() {
            return Self::WORST;
        }
        Self {
            value: value.clamp(0.0, 1.0),
        }
    }

    #[inline]
    pub const fn value(&self) -> f64 {
        self.value
    }
}

impl Ord for ScheduleScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.total_cmp(&other.value)
    }
}

impl PartialOrd for ScheduleScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScheduleScore {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for ScheduleScore {}

impl Hash for ScheduleScore {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.to_bits().hash(state);
    }
}

impl fmt::Debug for ScheduleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScheduleScore({})", self.value)
    }
}

impl fmt::Display for ScheduleScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.value)
    }
}

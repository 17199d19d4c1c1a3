//! Why a candidate schedule was rejected.

use std::fmt;

/// Classification of a hard-constraint rejection.
///
/// Variants are declared in check order, so `Ord` follows the order in which
/// the evaluator tries them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiscardReason {
    QualificationMismatch,
    LeaveConflict,
    DoubleBooking,
    MaxIntervalBetweenShiftsExceeded,
    MinimumShiftsPerWeekUnmet,
    MinimumRestViolation,
    FirstShiftAfterExtendedLeaveMissed,
}

impl DiscardReason {
    /// Number of variants.
    pub const COUNT: usize = 7;

    /// Every variant, in check order.
    pub const ALL: [DiscardReason; Self::COUNT] = [
        DiscardReason::QualificationMismatch,
        DiscardReason::LeaveConflict,
        DiscardReason::DoubleBooking,
        DiscardReason::MaxIntervalBetweenShiftsExceeded,
        DiscardReason::MinimumShiftsPerWeekUnmet,
        DiscardReason::MinimumRestViolation,
        DiscardReason::FirstShiftAfterExtendedLeaveMissed,
    ];

    /// Position in [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable display name.
    pub const fn name(self) -> &'static str {
        match self {
            DiscardReason::QualificationMismatch => "Qualification mismatch",
            DiscardReason::LeaveConflict => "Leave conflict",
            DiscardReason::DoubleBooking => "Double booking",
            DiscardReason::MaxIntervalBetweenShiftsExceeded => {
                "Max interval between shifts exceeded"
            }
            DiscardReason::MinimumShiftsPerWeekUnmet => "Minimum shifts per week unmet",
            DiscardReason::MinimumRestViolation => "Minimum rest violation",
            DiscardReason::FirstShiftAfterExtendedLeaveMissed => {
                "First shift after extended leave missed"
            }
        }
    }
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

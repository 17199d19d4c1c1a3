//! Rejection counters.

use std::fmt;

use crate::constraint::DiscardReason;

/// Number of rejected candidates per [`DiscardReason`].
///
/// Counters only ever increase.
///
/// # Examples
///
/// ```
/// use rota_scoring::{DiscardReason, DiscardTally};
///
/// let mut tally = DiscardTally::new();
/// tally.record(DiscardReason::DoubleBooking);
/// tally.record(DiscardReason::DoubleBooking);
///
/// assert_eq!(tally.get(DiscardReason::DoubleBooking), 2);
/// assert_eq!(tally.get(DiscardReason::LeaveConflict), 0);
/// assert_eq!(tally.total(), 2);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscardTally {
    counts: [u64; DiscardReason::COUNT],
}

impl DiscardTally {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn record(&mut self, reason: DiscardReason) {
        self.counts[reason.index()] += 1;
    }

    #[inline]
    pub fn get(&self, reason: DiscardReason) -> u64 {
        self.counts[reason.index()]
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterates every reason with its count, in check order.
    pub fn iter(&self) -> impl Iterator<Item = (DiscardReason, u64)> + '_ {
        DiscardReason::ALL
            .iter()
            .map(move |&reason| (reason, self.counts[reason.index()]))
    }

    /// The reason with the highest count, if anything was rejected.
    pub fn dominant(&self) -> Option<(DiscardReason, u64)> {
        self.iter()
            .filter(|&(_, count)| count > 0)
            .max_by_key(|&(reason, count)| (count, std::cmp::Reverse(reason)))
    }

    /// Returns true if no counter is lower than in `earlier`.
    pub fn dominates(&self, earlier: &DiscardTally) -> bool {
        self.counts
            .iter()
            .zip(earlier.counts.iter())
            .all(|(now, then)| now >= then)
    }
}

impl fmt::Display for DiscardTally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (reason, count) in self.iter().filter(|&(_, count)| count > 0) {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{reason}: {count}")?;
            first = false;
        }
        if first {
            f.write_str("none")?;
        }
        Ok(())
    }
}

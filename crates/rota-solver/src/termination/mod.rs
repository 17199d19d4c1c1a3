//! Termination conditions for a search invocation.

mod composite;
mod external;
mod step_count;
mod time;
mod unimproved;

use std::fmt::{self, Debug};

use crate::scope::SolverScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use step_count::StepCountTermination;
pub use time::TimeTermination;
pub use unimproved::UnimprovedStepCountTermination;

/// Why a search stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    TimeLimit,
    StepLimit,
    Unimproved,
    Cancelled,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TerminationReason::TimeLimit => "time limit",
            TerminationReason::StepLimit => "step limit",
            TerminationReason::Unimproved => "unimproved",
            TerminationReason::Cancelled => "cancelled",
        };
        f.write_str(name)
    }
}

/// Trait for determining when to stop searching.
///
/// Checked once per cycle, before the next proposal.
pub trait Termination: Send + Debug {
    /// Returns the reason to stop, or `None` to keep going.
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason>;

    /// Returns true if searching should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope) -> bool {
        self.check(solver_scope).is_some()
    }
}

/// An unset optional condition never terminates.
impl<T: Termination> Termination for Option<T> {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        self.as_ref().and_then(|t| t.check(solver_scope))
    }
}

#[cfg(test)]
mod tests;

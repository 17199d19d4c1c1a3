//! Termination based on lack of improvement.

use super::{Termination, TerminationReason};
use crate::scope::SolverScope;

/// Terminates if the pool has not changed for a number of proposals.
///
/// This is useful to avoid spending the whole time budget once the search
/// has plateaued.
///
/// # Example
///
/// ```
/// use rota_solver::termination::{Termination, UnimprovedStepCountTermination};
/// use rota_solver::SolverScope;
///
/// let term = UnimprovedStepCountTermination::new(2);
/// let mut scope = SolverScope::new(Some(0));
/// scope.start_solving();
///
/// scope.increment_cycle_count();
/// scope.record_improvement();
/// scope.increment_cycle_count();
/// assert!(!term.is_terminated(&scope));
/// scope.increment_cycle_count();
/// assert!(term.is_terminated(&scope));
/// ```
#[derive(Debug, Clone)]
pub struct UnimprovedStepCountTermination {
    limit: u64,
}

impl UnimprovedStepCountTermination {
    /// Creates a termination that stops after `limit` proposals without
    /// improvement.
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for UnimprovedStepCountTermination {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        (solver_scope.cycles_since_improvement() >= self.limit)
            .then_some(TerminationReason::Unimproved)
    }
}

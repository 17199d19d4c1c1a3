//! Cycle-count-based termination.

use super::{Termination, TerminationReason};
use crate::scope::SolverScope;

/// Terminates after a number of proposals.
#[derive(Debug, Clone)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }
}

impl Termination for StepCountTermination {
    fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
        (solver_scope.cycle_count() >= self.limit).then_some(TerminationReason::StepLimit)
    }
}

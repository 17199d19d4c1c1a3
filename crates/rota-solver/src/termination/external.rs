//! External termination via a cancel token.

use super::{Termination, TerminationReason};
use crate::handle::CancelToken;
use crate::scope::SolverScope;

/// Terminates when the cancel token is triggered.
///
/// # Example
///
/// ```
/// use rota_solver::termination::{ExternalTermination, Termination};
/// use rota_solver::{CancelToken, SolverScope};
///
/// let token = CancelToken::new();
/// let term = ExternalTermination::new(token.clone());
/// let scope = SolverScope::new(Some(0));
///
/// assert!(!term.is_terminated(&scope));
/// token.cancel();
/// assert!(term.is_terminated(&scope));
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTermination {
    token: CancelToken,
}

impl ExternalTermination {
    /// Creates a termination that checks the given token.
    pub fn new(token: CancelToken) -> Self {
        Self { token }
    }
}

impl Termination for ExternalTermination {
    fn check(&self, _solver_scope: &SolverScope) -> Option<TerminationReason> {
        self.token
            .is_cancelled()
            .then_some(TerminationReason::Cancelled)
    }
}

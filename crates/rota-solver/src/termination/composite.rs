//! Composite termination condition (OR).
//!
//! Uses macro-generated tuple implementations for zero type erasure.

use std::fmt::Debug;

use super::{Termination, TerminationReason};
use crate::scope::SolverScope;

/// Combines multiple terminations with OR logic (any must terminate).
///
/// Wraps a tuple of terminations. The reason reported is that of the first
/// child, in tuple order, that wants to stop.
///
/// # Examples
///
/// ```
/// use rota_solver::termination::{
///     OrTermination, StepCountTermination, Termination, TerminationReason, TimeTermination,
/// };
/// use rota_solver::SolverScope;
///
/// // Terminate after 30 seconds OR 2 cycles
/// let termination = OrTermination((
///     TimeTermination::seconds(30),
///     StepCountTermination::new(2),
/// ));
///
/// let mut scope = SolverScope::new(Some(0));
/// scope.start_solving();
/// assert!(!termination.is_terminated(&scope));
/// scope.increment_cycle_count();
/// scope.increment_cycle_count();
/// assert_eq!(termination.check(&scope), Some(TerminationReason::StepLimit));
/// ```
#[derive(Debug)]
pub struct OrTermination<T>(pub T);

impl<T> OrTermination<T> {
    /// Creates a new OR termination from a tuple of terminations.
    pub fn new(terminations: T) -> Self {
        Self(terminations)
    }
}

/// Generates `Termination` implementations for OR tuples.
macro_rules! impl_or_termination {
    ($($idx:tt: $T:ident),+) => {
        impl<$($T),+> Termination for OrTermination<($($T,)+)>
        where
            $($T: Termination,)+
        {
            fn check(&self, solver_scope: &SolverScope) -> Option<TerminationReason> {
                None$(.or_else(|| (self.0).$idx.check(solver_scope)))+
            }
        }
    };
}

impl_or_termination!(0: T0);
impl_or_termination!(0: T0, 1: T1);
impl_or_termination!(0: T0, 1: T1, 2: T2);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3);
impl_or_termination!(0: T0, 1: T1, 2: T2, 3: T3, 4: T4);

//! Tests for termination conditions.

use std::thread;
use std::time::Duration;

use super::*;
use crate::handle::CancelToken;

fn started_scope() -> SolverScope {
    let mut scope = SolverScope::new(Some(42));
    scope.start_solving();
    scope
}

#[test]
fn test_time_termination() {
    let scope = started_scope();
    assert!(!TimeTermination::seconds(60).is_terminated(&scope));

    thread::sleep(Duration::from_millis(5));
    assert_eq!(
        TimeTermination::millis(1).check(&scope),
        Some(TerminationReason::TimeLimit)
    );
}

#[test]
fn test_time_termination_before_start() {
    let scope = SolverScope::new(Some(42));
    assert!(!TimeTermination::millis(0).is_terminated(&scope));
}

#[test]
fn test_step_count_termination() {
    let mut scope = started_scope();
    let term = StepCountTermination::new(3);

    for _ in 0..2 {
        scope.increment_cycle_count();
        assert!(!term.is_terminated(&scope));
    }
    scope.increment_cycle_count();
    assert_eq!(term.check(&scope), Some(TerminationReason::StepLimit));
}

#[test]
fn test_unimproved_resets_on_improvement() {
    let mut scope = started_scope();
    let term = UnimprovedStepCountTermination::new(3);

    for _ in 0..2 {
        scope.increment_cycle_count();
    }
    scope.record_improvement();
    for _ in 0..2 {
        scope.increment_cycle_count();
        assert!(!term.is_terminated(&scope));
    }
    scope.increment_cycle_count();
    assert_eq!(term.check(&scope), Some(TerminationReason::Unimproved));
}

#[test]
fn test_optional_termination() {
    let scope = started_scope();
    let unset: Option<StepCountTermination> = None;
    assert!(!unset.is_terminated(&scope));
    assert!(Some(StepCountTermination::new(0)).is_terminated(&scope));
}

#[test]
fn test_or_reports_first_reason_in_order() {
    let token = CancelToken::new();
    token.cancel();
    let mut scope = started_scope();
    scope.increment_cycle_count();

    let term = OrTermination((
        ExternalTermination::new(token),
        StepCountTermination::new(1),
    ));
    assert_eq!(term.check(&scope), Some(TerminationReason::Cancelled));

    let term = OrTermination((
        StepCountTermination::new(1),
        None::<ExternalTermination>,
        UnimprovedStepCountTermination::new(1),
    ));
    assert_eq!(term.check(&scope), Some(TerminationReason::StepLimit));
}

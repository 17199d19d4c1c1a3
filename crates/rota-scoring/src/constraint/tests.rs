//! Tests for the hard constraint checks.

use rota_config::{ExtendedLeaveRule, SchedulerConfig, WeeklyMinimumRule};
use rota_core::{Leave, Schedule, SchedulingProblem, WorkHour, MINUTES_PER_DAY};
use rota_test::builders::{day_slot, problem, worker};

use super::*;

fn evaluator(problem: &SchedulingProblem, config: &SchedulerConfig) -> ConstraintEvaluator {
    ConstraintEvaluator::new(problem, config)
}

fn schedule_of(problem: &SchedulingProblem, assignment: &[Option<usize>]) -> Schedule {
    let mut schedule = Schedule::for_problem(problem);
    for (slot, worker) in assignment.iter().enumerate() {
        schedule.assign(slot, *worker);
    }
    schedule
}

// ============================================================================
// Qualification and leave
// ============================================================================

#[test]
fn test_qualification_mismatch() {
    let problem = problem(
        1,
        vec![worker("a")],
        vec![day_slot("s1", 0, 8, 16).requiring("X")],
    );
    let eval = evaluator(&problem, &SchedulerConfig::default());
    let schedule = schedule_of(&problem, &[Some(0)]);

    let violation = eval.evaluate(&problem, &schedule).unwrap_err();
    assert_eq!(violation.reason, DiscardReason::QualificationMismatch);
    assert_eq!(violation.slot_id(&problem).map(|id| id.as_str()), Some("s1"));
    assert_eq!(violation.worker, Some(0));
}

#[test]
fn test_unassigned_slots_are_not_checked() {
    let problem = problem(
        1,
        vec![worker("a")],
        vec![day_slot("s1", 0, 8, 16).requiring("X")],
    );
    let eval = evaluator(&problem, &SchedulerConfig::default());
    assert!(eval.evaluate(&problem, &Schedule::for_problem(&problem)).is_ok());
}

#[test]
fn test_leave_conflict_and_ignore_flag() {
    let problem = problem(
        2,
        vec![worker("a").with_leave(Leave::new(MINUTES_PER_DAY, 2 * MINUTES_PER_DAY, "vacation"))],
        vec![day_slot("s1", 1, 8, 16)],
    );
    let schedule = schedule_of(&problem, &[Some(0)]);

    let strict = evaluator(&problem, &SchedulerConfig::default());
    let violation = strict.evaluate(&problem, &schedule).unwrap_err();
    assert_eq!(violation.reason, DiscardReason::LeaveConflict);

    let lenient = evaluator(
        &problem,
        &SchedulerConfig::default().with_respect_leave_schedule(false),
    );
    assert!(lenient.evaluate(&problem, &schedule).is_ok());
}

#[test]
fn test_leave_conflict_with_leaves_out_of_order() {
    let mut away = worker("a");
    away.approved_leaves = vec![
        Leave::new(5 * MINUTES_PER_DAY, 6 * MINUTES_PER_DAY, "vacation"),
        Leave::new(0, MINUTES_PER_DAY, "vacation"),
    ];
    let problem = problem(7, vec![away], vec![day_slot("s1", 0, 8, 16)]);
    let eval = evaluator(&problem, &SchedulerConfig::default());

    let violation = eval
        .evaluate(&problem, &schedule_of(&problem, &[Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::LeaveConflict);
    assert_eq!(violation.slot, Some(0));
}

#[test]
fn test_leave_touching_shift_boundary_is_fine() {
    let problem = problem(
        1,
        vec![worker("a").with_leave(Leave::new(16 * 60, 20 * 60, "appointment"))],
        vec![day_slot("s1", 0, 8, 16)],
    );
    let eval = evaluator(&problem, &SchedulerConfig::default());
    assert!(eval.evaluate(&problem, &schedule_of(&problem, &[Some(0)])).is_ok());
}

// ============================================================================
// Double booking
// ============================================================================

#[test]
fn test_double_booking_attributed_to_later_slot() {
    let problem = problem(
        1,
        vec![worker("a")],
        vec![day_slot("late", 0, 12, 20), day_slot("early", 0, 8, 16)],
    );
    let eval = evaluator(&problem, &SchedulerConfig::default());

    let violation = eval
        .evaluate(&problem, &schedule_of(&problem, &[Some(0), Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::DoubleBooking);
    assert_eq!(violation.slot, Some(0));
}

#[test]
fn test_split_shift_break_can_be_covered() {
    let split = rota_core::Slot::new("split")
        .with_work_hour(WorkHour::new(8 * 60, 12 * 60, 1.0))
        .with_work_hour(WorkHour::new(16 * 60, 20 * 60, 1.0));
    let problem = problem(
        1,
        vec![worker("a")],
        vec![split, day_slot("gap", 0, 12, 16), day_slot("late", 0, 19, 22)],
    );
    let eval = evaluator(&problem, &SchedulerConfig::default());

    assert!(eval
        .evaluate(&problem, &schedule_of(&problem, &[Some(0), Some(0), None]))
        .is_ok());
    let violation = eval
        .evaluate(&problem, &schedule_of(&problem, &[Some(0), None, Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::DoubleBooking);
    assert_eq!(violation.slot, Some(2));
}

#[test]
fn test_checks_run_in_order() {
    // Both a double booking and a qualification mismatch: qualification wins.
    let problem = problem(
        1,
        vec![worker("a")],
        vec![day_slot("s1", 0, 8, 16), day_slot("s2", 0, 8, 16).requiring("X")],
    );
    let eval = evaluator(&problem, &SchedulerConfig::default());

    let violation = eval
        .evaluate(&problem, &schedule_of(&problem, &[Some(0), Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::QualificationMismatch);
}

// ============================================================================
// Max interval and weekly minimum
// ============================================================================

#[test]
fn test_max_interval_deducts_leave() {
    let slots = vec![day_slot("d0", 0, 8, 16), day_slot("d2", 2, 8, 16)];
    let config = SchedulerConfig::default().with_max_interval_between_shifts(1);

    let plain = problem(3, vec![worker("a")], slots.clone());
    let violation = evaluator(&plain, &config)
        .evaluate(&plain, &schedule_of(&plain, &[Some(0), Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::MaxIntervalBetweenShiftsExceeded);
    assert_eq!(violation.slot, Some(1));

    let on_leave = problem(
        3,
        vec![worker("a").with_leave(Leave::personal(MINUTES_PER_DAY, 2 * MINUTES_PER_DAY, "off"))],
        slots,
    );
    assert!(evaluator(&on_leave, &config)
        .evaluate(&on_leave, &schedule_of(&on_leave, &[Some(0), Some(0)]))
        .is_ok());
}

#[test]
fn test_max_interval_trailing_gap_has_no_slot() {
    let problem = problem(3, vec![worker("a")], vec![day_slot("d0", 0, 0, 8)]);
    let config = SchedulerConfig::default().with_max_interval_between_shifts(1);

    let violation = evaluator(&problem, &config)
        .evaluate(&problem, &schedule_of(&problem, &[Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::MaxIntervalBetweenShiftsExceeded);
    assert_eq!(violation.slot, None);
    assert_eq!(violation.worker, Some(0));
}

#[test]
fn test_weekly_minimum() {
    // Two weeks; worker b has nothing in week two.
    let problem = problem(
        14,
        vec![worker("a"), worker("b")],
        vec![
            day_slot("w1-a", 0, 8, 16),
            day_slot("w1-b", 1, 8, 16),
            day_slot("w2-a", 8, 8, 16),
        ],
    );
    let config = SchedulerConfig::default().with_minimum_shifts_per_week(WeeklyMinimumRule::new(1));
    let eval = evaluator(&problem, &config);

    let violation = eval
        .evaluate(&problem, &schedule_of(&problem, &[Some(0), Some(1), Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::MinimumShiftsPerWeekUnmet);
    assert_eq!(violation.worker, Some(1));
    assert_eq!(violation.slot, None);
}

#[test]
fn test_weekly_minimum_exempts_full_leave_and_partial_weeks() {
    let problem = problem(
        10,
        vec![
            worker("a"),
            worker("b").with_leave(Leave::new(0, 7 * MINUTES_PER_DAY, "vacation")),
        ],
        vec![day_slot("s1", 2, 8, 16)],
    );
    let config = SchedulerConfig::default().with_minimum_shifts_per_week(WeeklyMinimumRule::new(1));
    let eval = evaluator(&problem, &config);

    assert!(eval.evaluate(&problem, &schedule_of(&problem, &[Some(0)])).is_ok());
}

#[test]
fn test_weekly_minimum_ignores_non_workday_slots() {
    let problem = problem(
        7,
        vec![worker("a")],
        vec![day_slot("sat", 5, 8, 16).on_standard_workday(false)],
    );
    let config = SchedulerConfig::default().with_minimum_shifts_per_week(WeeklyMinimumRule::new(1));

    let violation = evaluator(&problem, &config)
        .evaluate(&problem, &schedule_of(&problem, &[Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::MinimumShiftsPerWeekUnmet);
}

// ============================================================================
// Rest
// ============================================================================

#[test]
fn test_rest_violation() {
    // 300 minutes between the shifts, tier asks for 480.
    let problem = problem(
        2,
        vec![worker("a")],
        vec![day_slot("first", 0, 0, 8), day_slot("second", 0, 13, 21)],
    );
    let config = SchedulerConfig::default().with_rest_tier(50.0, 480);

    let violation = evaluator(&problem, &config)
        .evaluate(&problem, &schedule_of(&problem, &[Some(0), Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::MinimumRestViolation);
    assert_eq!(violation.slot, Some(1));
}

#[test]
fn test_rest_tier_threshold_applies_to_first_shift() {
    // First shift has inconvenience 8, above the tier threshold of 5.
    let problem = problem(
        2,
        vec![worker("a")],
        vec![day_slot("first", 0, 0, 8), day_slot("second", 0, 13, 21)],
    );
    let config = SchedulerConfig::default().with_rest_tier(5.0, 480);

    assert!(evaluator(&problem, &config)
        .evaluate(&problem, &schedule_of(&problem, &[Some(0), Some(0)]))
        .is_ok());
}

#[test]
fn test_rest_tiers_are_independent() {
    let problem = problem(
        2,
        vec![worker("a")],
        vec![day_slot("first", 0, 0, 8), day_slot("second", 0, 18, 22)],
    );
    // 600 minutes of rest: fine for the first tier, too short for the second.
    let config = SchedulerConfig::default()
        .with_rest_tier(10.0, 480)
        .with_rest_tier(100.0, 660);

    let violation = evaluator(&problem, &config)
        .evaluate(&problem, &schedule_of(&problem, &[Some(0), Some(0)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::MinimumRestViolation);
}

// ============================================================================
// Placement
// ============================================================================

#[test]
fn test_check_placement_looks_both_ways() {
    let problem = problem(
        2,
        vec![worker("a")],
        vec![
            day_slot("morning", 0, 0, 8),
            day_slot("afternoon", 0, 12, 16),
            day_slot("night", 0, 20, 24),
        ],
    );
    let config = SchedulerConfig::default().with_rest_tier(50.0, 240);
    let eval = evaluator(&problem, &config);

    assert!(eval.check_placement(&problem, &[], 1, 0).is_ok());
    assert!(eval.check_placement(&problem, &[0], 1, 0).is_ok());
    // Afternoon ends at 16:00, night starts at 20:00: exactly 240 minutes.
    assert!(eval.check_placement(&problem, &[2], 1, 0).is_ok());

    let tighter = evaluator(&problem, &SchedulerConfig::default().with_rest_tier(50.0, 241));
    let before = tighter.check_placement(&problem, &[2], 1, 0).unwrap_err();
    assert_eq!(before.reason, DiscardReason::MinimumRestViolation);
    let after = tighter.check_placement(&problem, &[0], 1, 0).unwrap_err();
    assert_eq!(after.reason, DiscardReason::MinimumRestViolation);
}

#[test]
fn test_check_placement_order() {
    let problem = problem(
        1,
        vec![worker("a").with_leave(Leave::new(0, 60, "doctor"))],
        vec![day_slot("s1", 0, 0, 8).requiring("X"), day_slot("s2", 0, 0, 8)],
    );
    let eval = evaluator(&problem, &SchedulerConfig::default());

    assert_eq!(
        eval.check_placement(&problem, &[], 0, 0).unwrap_err().reason,
        DiscardReason::QualificationMismatch
    );
    assert_eq!(
        eval.check_placement(&problem, &[], 1, 0).unwrap_err().reason,
        DiscardReason::LeaveConflict
    );

    let lenient = evaluator(
        &problem,
        &SchedulerConfig::default().with_respect_leave_schedule(false),
    );
    assert_eq!(
        lenient.check_placement(&problem, &[0], 1, 0).unwrap_err().reason,
        DiscardReason::DoubleBooking
    );
}

// ============================================================================
// First shift after extended leave
// ============================================================================

#[test]
fn test_first_shift_after_extended_leave() {
    // Two vacation blocks 12 hours apart merge into one 10-day period.
    let returning = worker("a")
        .with_leave(Leave::new(0, 5 * MINUTES_PER_DAY, "vacation"))
        .with_leave(Leave::new(
            5 * MINUTES_PER_DAY + 12 * 60,
            10 * MINUTES_PER_DAY,
            "vacation",
        ));
    let problem = problem(
        12,
        vec![returning, worker("b")],
        vec![day_slot("d11", 11, 8, 16), day_slot("d10", 10, 8, 16)],
    );
    let config = SchedulerConfig::default().with_first_shift_after_extended_leave(
        ExtendedLeaveRule::new(7).with_leave_type("vacation"),
    );
    let eval = evaluator(&problem, &config);

    assert_eq!(eval.required_assignments(), &[(1, 0)]);
    let violation = eval
        .evaluate(&problem, &schedule_of(&problem, &[Some(0), Some(1)]))
        .unwrap_err();
    assert_eq!(violation.reason, DiscardReason::FirstShiftAfterExtendedLeaveMissed);
    assert_eq!(violation.slot, Some(1));
    assert!(eval
        .evaluate(&problem, &schedule_of(&problem, &[Some(1), Some(0)]))
        .is_ok());
}

#[test]
fn test_extended_leave_ignores_other_types_and_short_periods() {
    let problem = problem(
        12,
        vec![worker("a")
            .with_leave(Leave::new(0, 10 * MINUTES_PER_DAY, "training"))
            .with_leave(Leave::new(10 * MINUTES_PER_DAY, 11 * MINUTES_PER_DAY, "vacation"))],
        vec![day_slot("d11", 11, 8, 16)],
    );
    let config = SchedulerConfig::default().with_first_shift_after_extended_leave(
        ExtendedLeaveRule::new(7).with_leave_type("vacation"),
    );
    assert!(evaluator(&problem, &config).required_assignments().is_empty());
}

#[test]
fn test_extended_leave_merges_leaves_out_of_order() {
    let mut returning = worker("a");
    returning.approved_leaves = vec![
        Leave::new(5 * MINUTES_PER_DAY, 8 * MINUTES_PER_DAY, "vacation"),
        Leave::new(0, 5 * MINUTES_PER_DAY, "vacation"),
    ];
    let problem = problem(
        10,
        vec![returning, worker("b")],
        vec![day_slot("d8", 8, 8, 16)],
    );
    let config = SchedulerConfig::default()
        .with_first_shift_after_extended_leave(ExtendedLeaveRule::new(7));

    assert_eq!(evaluator(&problem, &config).required_assignments(), &[(0, 0)]);
}

#[test]
fn test_slot_starting_at_leave_end_is_not_the_first_shift() {
    let problem = problem(
        9,
        vec![worker("a").with_leave(Leave::new(0, 7 * MINUTES_PER_DAY, "vacation"))],
        vec![day_slot("night", 7, 0, 8), day_slot("day", 7, 8, 16)],
    );
    let config = SchedulerConfig::default()
        .with_first_shift_after_extended_leave(ExtendedLeaveRule::new(7));

    assert_eq!(evaluator(&problem, &config).required_assignments(), &[(1, 0)]);
}

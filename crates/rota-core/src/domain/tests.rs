//! Tests for domain types (problem validation, schedules, stats).

use crate::domain::*;
use crate::error::RotaError;
use crate::time::{Interval, MINUTES_PER_DAY};

fn day_slot(id: &str, day: i64, start_hour: i64, end_hour: i64) -> Slot {
    let base = day * MINUTES_PER_DAY;
    Slot::new(id).with_work_hour(WorkHour::new(
        base + start_hour * 60,
        base + end_hour * 60,
        1.0,
    ))
}

// ============================================================================
// Problem validation
// ============================================================================

mod problem_tests {
    use super::*;

    #[test]
    fn test_rejects_zero_horizon() {
        let err = SchedulingProblem::new(0, vec![], vec![]).unwrap_err();
        assert!(matches!(err, RotaError::EmptyHorizon));
    }

    #[test]
    fn test_rejects_slot_without_work_hours() {
        let err = SchedulingProblem::new(1, vec![], vec![Slot::new("s1")]).unwrap_err();
        assert!(matches!(err, RotaError::EmptySlot(id) if id.as_str() == "s1"));
    }

    #[test]
    fn test_rejects_inverted_work_hour() {
        let slot = Slot::new("s1").with_work_hour(WorkHour::new(100, 100, 1.0));
        let err = SchedulingProblem::new(1, vec![], vec![slot]).unwrap_err();
        assert!(matches!(err, RotaError::InvalidWorkHour { start: 100, end: 100, .. }));
    }

    #[test]
    fn test_rejects_negative_multiplier() {
        let slot = Slot::new("s1").with_work_hour(WorkHour::new(0, 60, -1.0));
        let err = SchedulingProblem::new(1, vec![], vec![slot]).unwrap_err();
        assert!(matches!(err, RotaError::InvalidInconvenience { .. }));
    }

    #[test]
    fn test_rejects_duplicates() {
        let err = SchedulingProblem::new(
            1,
            vec![Worker::new("w", "A"), Worker::new("w", "B")],
            vec![],
        )
        .unwrap_err();
        assert!(matches!(err, RotaError::DuplicateWorker(_)));

        let err = SchedulingProblem::new(
            1,
            vec![],
            vec![day_slot("s", 0, 8, 16), day_slot("s", 0, 16, 20)],
        )
        .unwrap_err();
        assert!(matches!(err, RotaError::DuplicateSlot(_)));
    }

    #[test]
    fn test_rejects_unknown_pre_assignment() {
        let slot = day_slot("s1", 0, 8, 16).pre_assigned("ghost");
        let err = SchedulingProblem::new(1, vec![Worker::new("w", "A")], vec![slot]).unwrap_err();
        assert!(matches!(err, RotaError::UnknownWorker { .. }));
    }

    #[test]
    fn test_rejects_inverted_leave() {
        let worker = Worker::new("w", "A").with_leave(Leave::new(50, 10, "vacation"));
        let err = SchedulingProblem::new(1, vec![worker], vec![]).unwrap_err();
        assert!(matches!(err, RotaError::InvalidLeave { .. }));
    }

    #[test]
    fn test_rejects_overlapping_work_hours() {
        let slot = Slot::new("s1")
            .with_work_hour(WorkHour::new(8 * 60, 12 * 60, 1.0))
            .with_work_hour(WorkHour::new(11 * 60, 14 * 60, 1.0));
        let err = SchedulingProblem::new(1, vec![], vec![slot]).unwrap_err();
        assert!(matches!(
            err,
            RotaError::InvalidWorkHour { start: 660, end: 840, .. }
        ));

        let back_to_back = Slot::new("s2")
            .with_work_hour(WorkHour::new(12 * 60, 16 * 60, 1.0))
            .with_work_hour(WorkHour::new(8 * 60, 12 * 60, 1.0));
        assert!(SchedulingProblem::new(1, vec![], vec![back_to_back]).is_ok());
    }

    #[test]
    fn test_sorts_leaves_supplied_out_of_order() {
        let mut worker = Worker::new("w", "A");
        worker.approved_leaves = vec![
            Leave::new(5 * MINUTES_PER_DAY, 6 * MINUTES_PER_DAY, "vacation"),
            Leave::new(0, MINUTES_PER_DAY, "vacation"),
        ];
        let problem = SchedulingProblem::new(8, vec![worker], vec![]).unwrap();
        let leaves = &problem.worker(0).approved_leaves;

        assert_eq!(leaves[0].start, 0);
        assert_eq!(leaves[1].start, 5 * MINUTES_PER_DAY);
        assert!(problem
            .worker(0)
            .leave_overlapping(&Interval::new(8 * 60, 16 * 60))
            .is_some());
        assert!((problem.availability_ratio(0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_chronological_order() {
        let problem = SchedulingProblem::new(
            2,
            vec![],
            vec![
                day_slot("late", 1, 8, 16),
                day_slot("early", 0, 8, 16),
                day_slot("early-short", 0, 8, 12),
            ],
        )
        .unwrap();

        assert_eq!(problem.chronological_slots(), &[2, 1, 0]);
        assert_eq!(problem.chronological_rank(0), 2);
        assert_eq!(problem.chronological_rank(2), 0);
    }

    #[test]
    fn test_availability_ignores_personal_leave() {
        let worker = Worker::new("w", "A")
            .with_leave(Leave::new(0, MINUTES_PER_DAY, "training"))
            .with_leave(Leave::personal(MINUTES_PER_DAY, 2 * MINUTES_PER_DAY, "vacation"));
        let problem = SchedulingProblem::new(4, vec![worker], vec![]).unwrap();

        assert!((problem.availability_ratio(0) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn test_qualification_any_of() {
        let problem = SchedulingProblem::new(
            1,
            vec![
                Worker::new("nurse", "N").with_qualification("nurse"),
                Worker::new("clerk", "C"),
            ],
            vec![day_slot("s1", 0, 8, 16).requiring("nurse").requiring("doctor")],
        )
        .unwrap();

        assert!(problem.is_qualified(0, 0));
        assert!(!problem.is_qualified(1, 0));
    }
}

// ============================================================================
// Worker and slot helpers
// ============================================================================

mod worker_slot_tests {
    use super::*;

    #[test]
    fn test_leave_overlapping() {
        let worker = Worker::new("w", "A")
            .with_leave(Leave::new(500, 600, "b"))
            .with_leave(Leave::new(100, 200, "a"));

        assert_eq!(worker.approved_leaves[0].leave_type, "a");
        assert!(worker.leave_overlapping(&Interval::new(200, 500)).is_none());
        let hit = worker.leave_overlapping(&Interval::new(150, 160)).unwrap();
        assert_eq!(hit.leave_type, "a");
    }

    #[test]
    fn test_leave_minutes_merges_overlaps() {
        let worker = Worker::new("w", "A")
            .with_leave(Leave::new(0, 100, "a"))
            .with_leave(Leave::new(50, 150, "b"))
            .with_leave(Leave::personal(140, 300, "c"));

        let window = Interval::new(0, 1000);
        assert_eq!(worker.leave_minutes_within(&window, false), 150);
        assert_eq!(worker.leave_minutes_within(&window, true), 300);
    }

    #[test]
    fn test_slot_overlap_uses_work_hours() {
        // Split shift with a break from 12:00 to 14:00.
        let split = Slot::new("split")
            .with_work_hour(WorkHour::new(8 * 60, 12 * 60, 1.0))
            .with_work_hour(WorkHour::new(14 * 60, 18 * 60, 1.0));
        let lunch = day_slot("lunch", 0, 12, 14);
        let evening = day_slot("evening", 0, 17, 20);

        assert!(!split.overlaps(&lunch));
        assert!(split.overlaps(&evening));
        assert_eq!(split.total_minutes(), 8 * 60);
    }
}

// ============================================================================
// Schedule
// ============================================================================

mod schedule_tests {
    use super::*;

    fn problem() -> SchedulingProblem {
        SchedulingProblem::new(
            2,
            vec![Worker::new("a", "A"), Worker::new("b", "B")],
            vec![
                day_slot("s-late", 1, 8, 16),
                day_slot("s-early", 0, 8, 16).pre_assigned("b"),
                day_slot("s-mid", 0, 18, 22),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_for_problem_keeps_pins() {
        let problem = problem();
        let schedule = Schedule::for_problem(&problem);

        assert_eq!(schedule.get(1), Some(1));
        assert_eq!(schedule.unassigned_slots().collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn test_slots_by_worker_is_chronological() {
        let problem = problem();
        let mut schedule = Schedule::for_problem(&problem);
        schedule.assign(0, Some(1));
        schedule.assign(2, Some(1));

        let by_worker = schedule.slots_by_worker(&problem);
        assert!(by_worker[0].is_empty());
        assert_eq!(by_worker[1], vec![1, 2, 0]);
    }

    #[test]
    fn test_from_assignments() {
        let problem = problem();
        let schedule = Schedule::from_assignments(
            &problem,
            &[Assignment::new("s-late", Some(WorkerId::new("a")))],
        )
        .unwrap();

        assert_eq!(schedule.get(0), Some(0));
        assert_eq!(schedule.get(1), Some(1));
        assert_eq!(schedule.get(2), None);

        let round = schedule.assignments(&problem);
        assert_eq!(round[0].slot_id.as_str(), "s-late");
        assert_eq!(round[2].worker_id, None);
    }

    #[test]
    fn test_from_assignments_rejects_unknown_ids() {
        let problem = problem();
        let err = Schedule::from_assignments(&problem, &[Assignment::new("nope", None)])
            .unwrap_err();
        assert!(matches!(err, RotaError::UnknownSlot(_)));

        let err = Schedule::from_assignments(
            &problem,
            &[Assignment::new("s-mid", Some(WorkerId::new("ghost")))],
        )
        .unwrap_err();
        assert!(matches!(err, RotaError::UnknownWorker { .. }));
    }
}

// ============================================================================
// Stats
// ============================================================================

mod stats_tests {
    use super::*;

    #[test]
    fn test_deviation_respects_availability() {
        // Worker b is on work leave half the horizon, so expects half the load.
        let problem = SchedulingProblem::new(
            2,
            vec![
                Worker::new("a", "A"),
                Worker::new("b", "B").with_leave(Leave::new(0, MINUTES_PER_DAY, "training")),
            ],
            vec![
                day_slot("s1", 1, 0, 3),
                day_slot("s2", 1, 3, 6),
                day_slot("s3", 1, 6, 9),
            ],
        )
        .unwrap();

        let mut schedule = Schedule::for_problem(&problem);
        schedule.assign(0, Some(0));
        schedule.assign(1, Some(0));
        schedule.assign(2, Some(1));

        let stats = ScheduleStats::compute(&problem, &schedule);
        assert_eq!(stats.assigned_slots, 3);
        assert_eq!(stats.unassigned_slots, 0);
        assert!(stats.workers[0].inconvenience_deviation.abs() < 1e-9);
        assert!(stats.workers[1].inconvenience_deviation.abs() < 1e-9);
        assert_eq!(stats.workers[0].total_minutes, 6 * 60);
    }
}

use rota_core::{Minutes, Schedule, SchedulingProblem, MINUTES_PER_WEEK};

use super::squash;

/// Share of weekly first shifts that fall on non-workdays, beyond what
/// `non_workdays_per_week / 7` predicts.
///
/// Weeks are 7-day windows from the horizon start; a trailing partial week
/// counts as a week.
pub(super) fn non_workday_first_shift(
    problem: &SchedulingProblem,
    schedule: &Schedule,
    non_workdays_per_week: f64,
) -> f64 {
    let mut total = 0u32;
    let mut on_non_workday = 0u32;
    for slots in schedule.slots_by_worker(problem) {
        let mut last_week: Option<Minutes> = None;
        for slot in slots {
            let slot_ref = problem.slot(slot);
            let week = slot_ref.start().div_euclid(MINUTES_PER_WEEK);
            if last_week == Some(week) {
                continue;
            }
            last_week = Some(week);
            total += 1;
            if !slot_ref.starts_on_standard_workday {
                on_non_workday += 1;
            }
        }
    }
    if total == 0 {
        return 0.0;
    }

    let expected = f64::from(total) * non_workdays_per_week / 7.0;
    let excess = (f64::from(on_non_workday) - expected).max(0.0);
    let deviation = if expected > 0.0 {
        excess / expected
    } else {
        excess
    };
    squash(deviation)
}

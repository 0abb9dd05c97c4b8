//! Study schedule generation.

use std::num::IntErrorKind;

use studyplan_core::{Error, Result, ScheduleSession};

/// Longest schedule, in days.
pub const MAX_DAYS: i64 = 7;

/// Parse a raw `hours` field. Surrounding whitespace and a leading sign are accepted.
///
/// Integers outside the `i64` range saturate; only non-integers are rejected.
pub fn parse_hours(raw: &str) -> Result<i64> {
    match raw.trim().parse::<i64>() {
        Ok(hours) => Ok(hours),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(Error::InvalidHours(raw.to_string())),
        },
    }
}

/// Split `total_hours` into one session per day, at most [`MAX_DAYS`] days.
///
/// Each day gets `max(1, remaining / days_left)` hours; flooring leftovers go
/// to the last day. Non-positive totals still produce a single one-hour day.
pub fn generate_study_plan(subject: &str, total_hours: i64) -> Vec<ScheduleSession> {
    let days = total_hours.clamp(1, MAX_DAYS);

    // Widened so `remaining` cannot overflow at the i64 extremes.
    let mut allotted: Vec<i128> = Vec::with_capacity(days as usize);
    let mut remaining = i128::from(total_hours);
    for day in 1..=days {
        let days_left = i128::from(days - day + 1);
        let hours = remaining.div_euclid(days_left).max(1);
        allotted.push(hours);
        remaining -= hours;
    }
    if remaining > 0 {
        if let Some(last) = allotted.last_mut() {
            *last += remaining;
        }
    }

    allotted
        .into_iter()
        .zip(1..)
        .map(|(hours, day)| ScheduleSession {
            day_label: format!("Day {}", day),
            // Each share is at most max(1, total_hours), so it fits back in i64.
            hours: i64::try_from(hours).unwrap_or(i64::MAX),
            focus: format!("{} - topic {}", subject, day),
        })
        .collect()
}

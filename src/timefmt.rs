//! Relative time display for posts.
//!
//! Both functions are pure: callers pick the time zone by converting the
//! timestamps first, e.g. `created_at.with_timezone(&chrono::Local)`.

use std::fmt;

use chrono::{DateTime, TimeZone};

const HOURS_PER_DAY: i64 = 24;
const HOURS_PER_WEEK: i64 = 7 * HOURS_PER_DAY;

/// Format `created` relative to `now`.
///
/// - under 1 hour: `Just now` (also for timestamps in the future)
/// - under 24 hours: `<N>h ago`
/// - under 7 days: `<N>d ago`
/// - otherwise the absolute date, `month/day/year`, in `created`'s zone
pub fn format_relative<Tz>(now: DateTime<Tz>, created: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    let hours = now.signed_duration_since(created.clone()).num_hours();

    if hours < 1 {
        "Just now".to_string()
    } else if hours < HOURS_PER_DAY {
        format!("{}h ago", hours)
    } else if hours < HOURS_PER_WEEK {
        format!("{}d ago", hours / HOURS_PER_DAY)
    } else {
        format_date(created)
    }
}

/// Absolute date as shown on posts and the profile "Joined" line, in the
/// calendar of `at`'s time zone
pub fn format_date<Tz>(at: DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format("%-m/%-d/%Y").to_string()
}

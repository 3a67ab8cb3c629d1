//! Rolling per-day window of completed tasks and focus minutes.
//!
//! Days are calendar days in the timezone of the `now` passed in, so local
//! time gives local-midnight boundaries. Tasks are bucketed by their creation
//! date: a task created on Monday and completed on Thursday counts for Monday.

use chrono::{DateTime, Days, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::session::SessionEntry;
use crate::task::Task;

pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Longest window [`rolling_window`] will build.
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Aggregates for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBucket {
    pub date: NaiveDate,
    pub tasks_completed: u32,
    pub focus_minutes: u64,
}

/// The `days` calendar days ending today, oldest first.
pub fn window_dates(today: NaiveDate, days: u32) -> Vec<NaiveDate> {
    (0..days)
        .rev()
        .filter_map(|back| today.checked_sub_days(Days::new(u64::from(back))))
        .collect()
}

/// One bucket per day for the last `days` days, oldest first.
///
/// `days` is capped at [`MAX_WINDOW_DAYS`]. Session entries that are not focus
/// sessions, have a negative duration or a date not written as `YYYY-MM-DD`
/// are ignored.
pub fn rolling_window<Tz: TimeZone>(
    tasks: &[Task],
    sessions: &[SessionEntry],
    now: &DateTime<Tz>,
    days: u32,
) -> Vec<DailyBucket> {
    if days > MAX_WINDOW_DAYS {
        tracing::debug!(days, max = MAX_WINDOW_DAYS, "capping window length");
    }
    let days = days.min(MAX_WINDOW_DAYS);
    let tz = now.timezone();
    let dates = window_dates(now.date_naive(), days);
    let Some(first) = dates.first().copied() else {
        return Vec::new();
    };

    let mut completed: HashMap<NaiveDate, u32> = HashMap::new();
    for task in tasks.iter().filter(|t| t.completed) {
        let day = task.created_at.with_timezone(&tz).date_naive();
        if day >= first {
            *completed.entry(day).or_default() += 1;
        }
    }

    let mut focus: HashMap<NaiveDate, u64> = HashMap::new();
    let mut skipped = 0usize;
    for session in sessions.iter().filter(|s| s.is_focus()) {
        match session.day() {
            Some(day) if session.is_well_formed() => {
                let minutes = focus.entry(day).or_default();
                *minutes = minutes.saturating_add(session.duration_minutes.unsigned_abs());
            }
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        tracing::debug!(skipped, "ignored malformed focus sessions");
    }

    dates
        .into_iter()
        .map(|date| DailyBucket {
            date,
            tasks_completed: completed.get(&date).copied().unwrap_or(0),
            focus_minutes: focus.get(&date).copied().unwrap_or(0),
        })
        .collect()
}

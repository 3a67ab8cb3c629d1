//! Pomodoro session log entries, as handed over by the time-tracking store.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Session type counted as focus time.
pub const FOCUS_KIND: &str = "focus";

/// Wire format of [`SessionEntry::date`].
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One logged session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionEntry {
    /// Calendar date, `YYYY-MM-DD`
    pub date: String,
    /// Session type (`focus`, `break`, ...)
    #[serde(rename = "type")]
    pub kind: String,
    pub duration_minutes: i64,
}

impl SessionEntry {
    pub fn focus(date: NaiveDate, duration_minutes: i64) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            kind: FOCUS_KIND.to_string(),
            duration_minutes,
        }
    }

    pub fn is_focus(&self) -> bool {
        self.kind == FOCUS_KIND
    }

    /// Date of the session, if the date string is a calendar date written
    /// exactly as `YYYY-MM-DD`.
    ///
    /// chrono also parses unpadded fields, leading spaces and a `+` year
    /// sign; those strings never equal a bucket date and are rejected.
    pub fn day(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, DATE_FORMAT)
            .ok()
            .filter(|day| day.format(DATE_FORMAT).to_string() == self.date)
    }

    /// Whether the entry can be aggregated at all.
    pub fn is_well_formed(&self) -> bool {
        self.duration_minutes >= 0 && self.day().is_some()
    }
}

/// Parse a raw session log, dropping entries that do not deserialize.
///
/// One bad entry never discards the rest of the log.
pub fn parse_session_log(raw: &[serde_json::Value]) -> Vec<SessionEntry> {
    raw.iter()
        .enumerate()
        .filter_map(|(index, value)| {
            match serde_json::from_value::<SessionEntry>(value.clone()) {
                Ok(entry) => Some(entry),
                Err(e) => {
                    tracing::warn!(index, error = %e, "skipping malformed session entry");
                    None
                }
            }
        })
        .collect()
}

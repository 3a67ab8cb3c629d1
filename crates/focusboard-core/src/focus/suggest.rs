//! Next-task suggestion and dashboard insights.
//!
//! Both read the same open-task view as the sorter and depend on the hour of
//! the injected `now`.

use chrono::{DateTime, TimeZone, Timelike, Utc};
use serde::{Deserialize, Serialize};

use super::score::FocusScorer;
use crate::config::InsightsConfig;
use crate::task::{Task, TaskCategory, TaskPriority};

/// Bonus added to a task that suits the current part of the day.
pub const TIME_OF_DAY_BONUS: u16 = 10;

/// Part of the day, by local hour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPeriod {
    /// 06:00-11:59
    Morning,
    /// 12:00-13:59
    Lunch,
    /// 14:00-17:59
    Afternoon,
    /// 18:00-21:59
    Evening,
}

impl DayPeriod {
    pub fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            6..=11 => Some(Self::Morning),
            12..=13 => Some(Self::Lunch),
            14..=17 => Some(Self::Afternoon),
            18..=21 => Some(Self::Evening),
            _ => None,
        }
    }

    pub fn hint(&self) -> &'static str {
        match self {
            Self::Morning => "Morning: a good time for complex, creative work",
            Self::Lunch => "Lunch: take a well-earned break",
            Self::Afternoon => "Afternoon: suited to collaborative tasks",
            Self::Evening => "Evening: keep to short, simple tasks",
        }
    }
}

/// Whether a task suits the hour it is being picked at.
///
/// Mornings favour long tasks, afternoons design work, evenings short tasks.
fn suits_hour(task: &Task, hour: u32) -> bool {
    match hour {
        6..=11 => task.estimated_time.is_some_and(|m| m > 60),
        12..=17 => task.category == TaskCategory::Design,
        18..=23 => task.estimated_time.is_some_and(|m| m > 0 && m <= 30),
        _ => false,
    }
}

/// Pick the open task to work on next.
///
/// Ranks by Focus Score plus [`TIME_OF_DAY_BONUS`] for tasks that suit the
/// current hour. Ties fall back to pinned first, newest first, then id.
pub fn suggest_next_task<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    now: &DateTime<Tz>,
) -> Option<&'a Task> {
    let scorer = FocusScorer::at(now);
    let hour = now.hour();

    tasks
        .iter()
        .filter(|t| t.is_open())
        .map(|t| {
            let bonus = if suits_hour(t, hour) { TIME_OF_DAY_BONUS } else { 0 };
            (t, u16::from(scorer.score(t)) + bonus)
        })
        .min_by(|(ta, sa), (tb, sb)| {
            sb.cmp(sa)
                .then_with(|| tb.is_priority.cmp(&ta.is_priority))
                .then_with(|| tb.created_at.cmp(&ta.created_at))
                .then_with(|| ta.id.cmp(&tb.id))
        })
        .map(|(t, _)| t)
}

/// A dashboard insight derived from the task list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Insight {
    DayPeriod { period: DayPeriod },
    UrgentPending { count: usize },
    Overdue { count: usize },
    Stale { count: usize },
    BreakEarned { completed_today: usize },
    QuickWins { count: usize },
}

impl Insight {
    pub fn message(&self) -> String {
        match self {
            Insight::DayPeriod { period } => period.hint().to_string(),
            Insight::UrgentPending { count } => {
                format!("{count} urgent task(s) - start with the shortest?")
            }
            Insight::Overdue { count } => format!("{count} overdue task(s) - prioritize today"),
            Insight::Stale { count } => {
                format!("{count} task(s) open for over a week - split them up?")
            }
            Insight::BreakEarned { completed_today } => {
                format!("{completed_today} tasks completed today - time for a 10 minute break?")
            }
            Insight::QuickWins { count } => {
                format!("{count} quick task(s) available - quick wins!")
            }
        }
    }
}

/// Build the list of insights, in display order. Empty categories are omitted.
pub fn smart_insights<Tz: TimeZone>(
    tasks: &[Task],
    now: &DateTime<Tz>,
    config: &InsightsConfig,
) -> Vec<Insight> {
    let today = now.date_naive();
    let now_utc = now.with_timezone(&Utc);
    let tz = now.timezone();
    let open: Vec<&Task> = tasks.iter().filter(|t| t.is_open()).collect();

    let mut insights = Vec::new();

    if let Some(period) = DayPeriod::from_hour(now.hour()) {
        insights.push(Insight::DayPeriod { period });
    }

    let urgent = open
        .iter()
        .filter(|t| t.priority == TaskPriority::Urgent || t.category == TaskCategory::Urgent)
        .count();
    if urgent > 0 {
        insights.push(Insight::UrgentPending { count: urgent });
    }

    let overdue = open
        .iter()
        .filter(|t| t.due_date.is_some_and(|d| d < today))
        .count();
    if overdue > 0 {
        insights.push(Insight::Overdue { count: overdue });
    }

    let stale = open
        .iter()
        .filter(|t| {
            now_utc.signed_duration_since(t.created_at).num_days()
                > i64::from(config.stale_after_days)
        })
        .count();
    if stale > 0 {
        insights.push(Insight::Stale { count: stale });
    }

    let completed_today = tasks
        .iter()
        .filter(|t| t.completed && t.created_at.with_timezone(&tz).date_naive() == today)
        .count();
    if completed_today >= config.break_after_completed as usize {
        insights.push(Insight::BreakEarned { completed_today });
    }

    let quick = open
        .iter()
        .filter(|t| {
            t.estimated_time
                .is_some_and(|m| m > 0 && m <= config.quick_win_minutes)
        })
        .count();
    if quick > 0 {
        insights.push(Insight::QuickWins { count: quick });
    }

    insights
}

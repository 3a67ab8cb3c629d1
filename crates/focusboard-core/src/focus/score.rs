//! Focus Score calculation.
//!
//! Calculates a task's Focus Score (0-100) from three terms:
//! - Explicit priority (low 10, medium 20, high 30, urgent 40)
//! - Deadline proximity, counted in whole calendar days
//! - Stagnation, a penalty for tasks created long ago
//!
//! The score depends on the current time, so it is recomputed on every read
//! and never stored on the task.

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::task::{Task, TaskPriority};

pub const MIN_SCORE: u8 = 0;
pub const MAX_SCORE: u8 = 100;

/// Points contributed by the explicit priority.
pub fn priority_points(priority: TaskPriority) -> i32 {
    match priority {
        TaskPriority::Low => 10,
        TaskPriority::Medium => 20,
        TaskPriority::High => 30,
        TaskPriority::Urgent => 40,
    }
}

/// Bonus for an approaching or missed due date.
///
/// - Overdue: 40
/// - Due today: 35
/// - Due tomorrow: 25
/// - Due within 3 days: 15
/// - Due within 7 days: 8
/// - Later or no due date: 0
pub fn deadline_bonus(due_date: Option<NaiveDate>, today: NaiveDate) -> i32 {
    let Some(due) = due_date else {
        return 0;
    };

    match (due - today).num_days() {
        d if d < 0 => 40,
        0 => 35,
        1 => 25,
        d if d <= 3 => 15,
        d if d <= 7 => 8,
        _ => 0,
    }
}

/// Penalty for a task left open since long ago: more than 14 days costs 10,
/// more than 7 days costs 5.
pub fn stagnation_penalty(age: Duration) -> i32 {
    if age > Duration::days(14) {
        10
    } else if age > Duration::days(7) {
        5
    } else {
        0
    }
}

/// The three terms of a score next to the clamped result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusBreakdown {
    pub priority_points: i32,
    pub deadline_bonus: i32,
    pub stagnation_penalty: i32,
    pub score: u8,
}

/// Scores tasks against one fixed instant.
///
/// "Today" is the calendar date of `now` in the timezone it was given in,
/// so a caller passing local time gets local-midnight day boundaries.
#[derive(Debug, Clone, Copy)]
pub struct FocusScorer {
    now: DateTime<Utc>,
    today: NaiveDate,
}

impl FocusScorer {
    pub fn at<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self {
            now: now.with_timezone(&Utc),
            today: now.date_naive(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Focus Score in `[0, 100]`.
    pub fn score(&self, task: &Task) -> u8 {
        self.breakdown(task).score
    }

    pub fn breakdown(&self, task: &Task) -> FocusBreakdown {
        let priority_points = priority_points(task.priority);
        let deadline_bonus = deadline_bonus(task.due_date, self.today);
        let stagnation_penalty =
            stagnation_penalty(self.now.signed_duration_since(task.created_at));

        let raw = priority_points + deadline_bonus - stagnation_penalty;
        let score = raw.clamp(i32::from(MIN_SCORE), i32::from(MAX_SCORE)) as u8;

        FocusBreakdown {
            priority_points,
            deadline_bonus,
            stagnation_penalty,
            score,
        }
    }
}

/// Convenience function to score a single task at `now`.
pub fn compute_focus_score<Tz: TimeZone>(task: &Task, now: &DateTime<Tz>) -> u8 {
    FocusScorer::at(now).score(task)
}

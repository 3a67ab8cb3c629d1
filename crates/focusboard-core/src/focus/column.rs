//! Temporal board columns (today / upcoming / distant).

use chrono::{DateTime, Days, TimeZone};

use crate::task::{Task, TaskPriority, TaskStatus, TemporalColumn};

/// Index of the phase currently being worked on.
///
/// One past the highest phase whose validation task is completed, or 0 when no
/// phase has been validated yet.
pub fn current_phase(tasks: &[Task]) -> u32 {
    tasks
        .iter()
        .filter(|t| t.is_validation && t.completed)
        .filter_map(|t| t.phase_index)
        .max()
        .map_or(0, |p| p.saturating_add(1))
}

/// Column for `task`, with `all_tasks` giving the project phase context.
pub fn temporal_column<Tz: TimeZone>(
    task: &Task,
    all_tasks: &[Task],
    now: &DateTime<Tz>,
) -> TemporalColumn {
    column_in_phase(task, current_phase(all_tasks), now)
}

/// Assign every task to a column, computing the phase context once.
pub fn group_by_column<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    now: &DateTime<Tz>,
) -> Vec<(&'a Task, TemporalColumn)> {
    let phase = current_phase(tasks);
    tasks
        .iter()
        .map(|t| (t, column_in_phase(t, phase, now)))
        .collect()
}

fn column_in_phase<Tz: TimeZone>(task: &Task, phase: u32, now: &DateTime<Tz>) -> TemporalColumn {
    if task.completed {
        return TemporalColumn::Today;
    }
    if let Some(column) = task.temporal_column {
        return column;
    }
    if task.status == TaskStatus::InProgress {
        return TemporalColumn::Today;
    }
    if task.phase_index.is_some_and(|p| p > phase) {
        return TemporalColumn::Distant;
    }
    if task.is_priority || matches!(task.priority, TaskPriority::Urgent | TaskPriority::High) {
        return TemporalColumn::Today;
    }

    let Some(due) = task.due_date else {
        return TemporalColumn::Upcoming;
    };
    let today = now.date_naive();
    if due <= today {
        TemporalColumn::Today
    } else if today.checked_add_days(Days::new(30)).map_or(true, |limit| due < limit) {
        TemporalColumn::Upcoming
    } else {
        TemporalColumn::Distant
    }
}

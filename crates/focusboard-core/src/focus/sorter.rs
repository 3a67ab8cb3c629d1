//! Column ordering for boards and lists.
//!
//! Criteria, in order:
//! 1. Incomplete tasks before completed ones
//! 2. The pinned task before everything else (regardless of score)
//! 3. Focus Score, highest first
//! 4. Creation time, newest first
//! 5. Id, ascending, so the order is total

use chrono::{DateTime, TimeZone};
use std::cmp::Ordering;

use super::score::FocusScorer;
use crate::task::Task;

/// Compare two tasks whose scores are already known.
fn compare(a: (&Task, u8), b: (&Task, u8)) -> Ordering {
    let (ta, sa) = a;
    let (tb, sb) = b;
    ta.completed
        .cmp(&tb.completed)
        .then_with(|| tb.is_priority.cmp(&ta.is_priority))
        .then_with(|| sb.cmp(&sa))
        .then_with(|| tb.created_at.cmp(&ta.created_at))
        .then_with(|| ta.id.cmp(&tb.id))
}

/// Return the tasks in column order. The input slice is left as is.
pub fn sort_for_column<'a, Tz: TimeZone>(tasks: &'a [Task], now: &DateTime<Tz>) -> Vec<&'a Task> {
    sort_with_scores(tasks, now)
        .into_iter()
        .map(|(task, _)| task)
        .collect()
}

/// Column order with each task's Focus Score alongside.
///
/// Scores are computed once per task rather than once per comparison.
pub fn sort_with_scores<'a, Tz: TimeZone>(
    tasks: &'a [Task],
    now: &DateTime<Tz>,
) -> Vec<(&'a Task, u8)> {
    let scorer = FocusScorer::at(now);
    let mut scored: Vec<(&Task, u8)> = tasks.iter().map(|t| (t, scorer.score(t))).collect();
    scored.sort_by(|a, b| compare(*a, *b));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskPriority;
    use chrono::{Duration, Utc};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 20, 14, 0, 0).unwrap()
    }

    fn task(id: &str) -> Task {
        Task::new("Test task", now()).with_id(id)
    }

    fn ids(sorted: &[&Task]) -> Vec<String> {
        sorted.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn incomplete_before_completed() {
        let tasks = vec![task("1").completed(), task("2")];
        assert_eq!(ids(&sort_for_column(&tasks, &now())), vec!["2", "1"]);
    }

    #[test]
    fn completed_urgent_still_sorts_after_open_low() {
        let tasks = vec![
            task("done").with_priority(TaskPriority::Urgent).completed(),
            task("open").with_priority(TaskPriority::Low),
        ];
        assert_eq!(ids(&sort_for_column(&tasks, &now())), vec!["open", "done"]);
    }

    #[test]
    fn pinned_task_first_even_with_lower_score() {
        let tasks = vec![
            task("1").with_priority(TaskPriority::Urgent),
            task("2").with_priority(TaskPriority::Low).pinned(),
        ];
        assert_eq!(ids(&sort_for_column(&tasks, &now())), vec!["2", "1"]);
    }

    #[test]
    fn sorts_by_score_descending() {
        let tasks = vec![
            task("1").with_priority(TaskPriority::Low),
            task("2").with_priority(TaskPriority::Urgent),
            task("3").with_priority(TaskPriority::Medium),
        ];
        assert_eq!(ids(&sort_for_column(&tasks, &now())), vec!["2", "3", "1"]);
    }

    #[test]
    fn equal_scores_put_newest_first() {
        let mut older = task("1");
        older.created_at = now() - Duration::seconds(1);
        let tasks = vec![older, task("2")];
        assert_eq!(ids(&sort_for_column(&tasks, &now())), vec!["2", "1"]);
    }

    #[test]
    fn full_ties_break_on_id() {
        let tasks = vec![task("b"), task("c"), task("a")];
        assert_eq!(ids(&sort_for_column(&tasks, &now())), vec!["a", "b", "c"]);
    }

    #[test]
    fn input_is_not_mutated() {
        let tasks = vec![task("1").completed(), task("2")];
        let before = tasks.clone();
        let _ = sort_for_column(&tasks, &now());
        assert_eq!(tasks, before);
    }

    #[test]
    fn scores_travel_with_tasks() {
        let tasks = vec![
            task("low").with_priority(TaskPriority::Low),
            task("high").with_priority(TaskPriority::High),
        ];
        let sorted = sort_with_scores(&tasks, &now());
        assert_eq!(sorted[0].0.id, "high");
        assert_eq!(sorted[0].1, 30);
        assert_eq!(sorted[1].1, 10);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(sort_for_column(&[], &now()).is_empty());
    }
}

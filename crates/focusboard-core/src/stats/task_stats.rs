//! Dashboard-level task statistics.

use chrono::{DateTime, Days, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

use super::productivity::completion_rate;
use crate::config::AnalyticsConfig;
use crate::task::{Task, TaskCategory, TaskPriority, TaskStatus};

/// Aggregate counters for the task widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Completed tasks created today
    pub today_completed: usize,
    pub today_created: usize,
    /// Open tasks whose due date is before today
    pub overdue: usize,
    /// Percentage, 0-100
    pub completion_rate: u32,
    /// Mean `actualTime` of completed tasks that recorded one, in minutes
    pub average_completion_time: u32,
    pub by_category: BTreeMap<TaskCategory, usize>,
    pub by_priority: BTreeMap<TaskPriority, usize>,
    pub by_status: BTreeMap<TaskStatus, usize>,
    /// Consecutive days with at least one completed task
    pub streak: u32,
    /// Tasks created per day over the configured span, one decimal
    pub tasks_per_day: f64,
    pub most_productive_category: TaskCategory,
}

/// Compute [`TaskStats`] for a snapshot.
///
/// Every day-level figure uses calendar days in the timezone of `now` and
/// buckets tasks by creation date.
pub fn task_stats<Tz: TimeZone>(
    tasks: &[Task],
    now: &DateTime<Tz>,
    config: &AnalyticsConfig,
) -> TaskStats {
    let tz = now.timezone();
    let today = now.date_naive();
    let created_day = |t: &Task| t.created_at.with_timezone(&tz).date_naive();

    let completed: Vec<&Task> = tasks.iter().filter(|t| t.completed).collect();
    let today_completed = completed.iter().filter(|t| created_day(t) == today).count();
    let today_created = tasks.iter().filter(|t| created_day(t) == today).count();
    let overdue = tasks
        .iter()
        .filter(|t| !t.completed && t.due_date.is_some_and(|d| d < today))
        .count();

    let mut by_category: BTreeMap<TaskCategory, usize> =
        TaskCategory::ALL.iter().map(|c| (*c, 0)).collect();
    let mut by_priority: BTreeMap<TaskPriority, usize> =
        TaskPriority::ALL.iter().map(|p| (*p, 0)).collect();
    let mut by_status: BTreeMap<TaskStatus, usize> =
        TaskStatus::ALL.iter().map(|s| (*s, 0)).collect();
    for task in tasks {
        *by_category.entry(task.category).or_default() += 1;
        *by_priority.entry(task.priority).or_default() += 1;
        *by_status.entry(task.status).or_default() += 1;
    }

    let completion_days: HashSet<NaiveDate> = completed.iter().map(|t| created_day(t)).collect();

    TaskStats {
        total: tasks.len(),
        completed: completed.len(),
        pending: tasks.len() - completed.len(),
        today_completed,
        today_created,
        overdue,
        completion_rate: completion_rate(completed.len(), tasks.len()),
        average_completion_time: average_actual_time(&completed),
        by_category,
        by_priority,
        by_status,
        streak: completion_streak(&completion_days, today, config.streak_lookback_days),
        tasks_per_day: tasks_per_day(
            tasks,
            &now.with_timezone(&Utc),
            config.tasks_per_day_span_days,
        ),
        most_productive_category: most_productive_category(&completed),
    }
}

fn average_actual_time(completed: &[&Task]) -> u32 {
    let times: Vec<u64> = completed
        .iter()
        .filter_map(|t| t.actual_time)
        .filter(|&m| m > 0)
        .map(u64::from)
        .collect();
    if times.is_empty() {
        return 0;
    }
    let mean = times.iter().sum::<u64>() as f64 / times.len() as f64;
    mean.round() as u32
}

/// Count consecutive days with a completion, walking back from today.
///
/// An empty today does not break the streak: counting then starts from
/// yesterday. At most `lookback_days` days are inspected.
pub fn completion_streak(days: &HashSet<NaiveDate>, today: NaiveDate, lookback_days: u32) -> u32 {
    let mut streak = 0;
    for back in 0..lookback_days {
        let Some(day) = today.checked_sub_days(Days::new(u64::from(back))) else {
            break;
        };
        if days.contains(&day) {
            streak += 1;
        } else if back > 0 {
            break;
        }
    }
    streak
}

fn tasks_per_day(tasks: &[Task], now: &DateTime<Utc>, span_days: u32) -> f64 {
    if span_days == 0 {
        return 0.0;
    }
    let since = *now - chrono::Duration::days(i64::from(span_days));
    let recent = tasks.iter().filter(|t| t.created_at >= since).count();
    (recent as f64 / f64::from(span_days) * 10.0).round() / 10.0
}

/// Category with the most completed tasks.
///
/// Ties go to the earlier category in [`TaskCategory::ALL`]; with nothing
/// completed the answer is `work`.
pub fn most_productive_category(completed: &[&Task]) -> TaskCategory {
    if completed.is_empty() {
        return TaskCategory::Work;
    }
    let count = |c: TaskCategory| completed.iter().filter(|t| t.category == c).count();
    let mut best = TaskCategory::ALL[0];
    let mut best_count = count(best);
    for category in TaskCategory::ALL.into_iter().skip(1) {
        let n = count(category);
        if n > best_count {
            best = category;
            best_count = n;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 20, 15, 0, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 5, d).unwrap()
    }

    fn created_days_ago(days: i64) -> Task {
        Task::new("t", now() - Duration::days(days))
    }

    #[test]
    fn empty_snapshot() {
        let stats = task_stats(&[], &now(), &AnalyticsConfig::default());
        assert_eq!(stats.total, 0);
        assert_eq!(stats.completion_rate, 0);
        assert_eq!(stats.average_completion_time, 0);
        assert_eq!(stats.streak, 0);
        assert_eq!(stats.tasks_per_day, 0.0);
        assert_eq!(stats.most_productive_category, TaskCategory::Work);
        assert_eq!(stats.by_category.len(), 5);
        assert!(stats.by_status.values().all(|&n| n == 0));
    }

    #[test]
    fn counts_and_breakdowns() {
        let tasks = vec![
            created_days_ago(0).with_category(TaskCategory::Dev).completed(),
            created_days_ago(0).with_priority(TaskPriority::Urgent),
            created_days_ago(2)
                .with_status(TaskStatus::InProgress)
                .with_due_date(day(19)),
            created_days_ago(3).with_due_date(day(10)).completed(),
        ];
        let stats = task_stats(&tasks, &now(), &AnalyticsConfig::default());

        assert_eq!(stats.total, 4);
        assert_eq!(stats.completed, 2);
        assert_eq!(stats.pending, 2);
        assert_eq!(stats.today_completed, 1);
        assert_eq!(stats.today_created, 2);
        assert_eq!(stats.overdue, 1);
        assert_eq!(stats.completion_rate, 50);
        assert_eq!(stats.by_category[&TaskCategory::Dev], 1);
        assert_eq!(stats.by_category[&TaskCategory::Work], 3);
        assert_eq!(stats.by_priority[&TaskPriority::Urgent], 1);
        assert_eq!(stats.by_status[&TaskStatus::Done], 2);
        assert_eq!(stats.by_status[&TaskStatus::InProgress], 1);
        assert_eq!(stats.by_status[&TaskStatus::Backlog], 0);
    }

    #[test]
    fn average_ignores_missing_and_zero_actual_time() {
        let tasks = vec![
            created_days_ago(1).with_actual_time(25).completed(),
            created_days_ago(1).with_actual_time(50).completed(),
            created_days_ago(1).with_actual_time(0).completed(),
            created_days_ago(1).completed(),
            created_days_ago(1).with_actual_time(500),
        ];
        let stats = task_stats(&tasks, &now(), &AnalyticsConfig::default());
        // (25 + 50) / 2 = 37.5
        assert_eq!(stats.average_completion_time, 38);
    }

    #[test]
    fn streak_counts_consecutive_days() {
        let days: HashSet<_> = [day(20), day(19), day(18), day(16)].into_iter().collect();
        assert_eq!(completion_streak(&days, day(20), 365), 3);
    }

    #[test]
    fn streak_survives_an_empty_today() {
        let days: HashSet<_> = [day(19), day(18)].into_iter().collect();
        assert_eq!(completion_streak(&days, day(20), 365), 2);
    }

    #[test]
    fn streak_breaks_on_two_empty_days() {
        let days: HashSet<_> = [day(18), day(17)].into_iter().collect();
        assert_eq!(completion_streak(&days, day(20), 365), 0);
    }

    #[test]
    fn streak_is_bounded_by_lookback() {
        let days: HashSet<_> = (1..=20).map(day).collect();
        assert_eq!(completion_streak(&days, day(20), 5), 5);
        assert_eq!(completion_streak(&days, day(20), 0), 0);
    }

    #[test]
    fn streak_uses_creation_day_in_local_time() {
        // 2026-05-19 23:30 UTC is the 20th at UTC+2
        let created = Utc.with_ymd_and_hms(2026, 5, 19, 23, 30, 0).unwrap();
        let late = Task::new("t", created).completed();
        let plus_two = now().with_timezone(&FixedOffset::east_opt(2 * 3600).unwrap());
        let stats = task_stats(&[late], &plus_two, &AnalyticsConfig::default());
        assert_eq!(stats.today_completed, 1);
        assert_eq!(stats.streak, 1);
    }

    #[test]
    fn tasks_per_day_over_span() {
        let mut tasks: Vec<Task> = (0..10).map(created_days_ago).collect();
        tasks.push(created_days_ago(40));
        let stats = task_stats(&tasks, &now(), &AnalyticsConfig::default());
        // 10 / 30 = 0.333...
        assert_eq!(stats.tasks_per_day, 0.3);

        let config = AnalyticsConfig {
            tasks_per_day_span_days: 4,
            ..AnalyticsConfig::default()
        };
        let stats = task_stats(&tasks, &now(), &config);
        // days 0..=4 fall inside the span: 5 / 4
        assert_eq!(stats.tasks_per_day, 1.3);
    }

    #[test]
    fn most_productive_picks_highest_count() {
        let tasks = [
            created_days_ago(1).with_category(TaskCategory::Design).completed(),
            created_days_ago(1).with_category(TaskCategory::Design).completed(),
            created_days_ago(1).with_category(TaskCategory::Dev).completed(),
            created_days_ago(1).with_category(TaskCategory::Urgent),
            created_days_ago(1).with_category(TaskCategory::Urgent),
            created_days_ago(1).with_category(TaskCategory::Urgent),
        ];
        let completed: Vec<&Task> = tasks.iter().filter(|t| t.completed).collect();
        assert_eq!(most_productive_category(&completed), TaskCategory::Design);
    }

    #[test]
    fn most_productive_ties_follow_category_order() {
        let tasks = [
            created_days_ago(1).with_category(TaskCategory::Personal).completed(),
            created_days_ago(1).with_category(TaskCategory::Design).completed(),
        ];
        let completed: Vec<&Task> = tasks.iter().collect();
        assert_eq!(most_productive_category(&completed), TaskCategory::Design);
    }

    #[test]
    fn serializes_camel_case_maps() {
        let stats = task_stats(&[created_days_ago(0)], &now(), &AnalyticsConfig::default());
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["byStatus"]["in-progress"], 0);
        assert_eq!(json["byStatus"]["todo"], 1);
        assert_eq!(json["byCategory"]["work"], 1);
        assert_eq!(json["mostProductiveCategory"], "work");
        assert_eq!(json["todayCreated"], 1);
    }
}

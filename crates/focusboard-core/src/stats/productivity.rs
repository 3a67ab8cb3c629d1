//! Completion summary and the configured analytics entry point.

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use super::session::SessionEntry;
use super::task_stats::{task_stats, TaskStats};
use super::window::{rolling_window, DailyBucket};
use crate::config::AnalyticsConfig;
use crate::task::Task;

/// Completion counters for a task snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivitySummary {
    /// Percentage of completed tasks, rounded
    pub completion_rate: u32,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
}

/// `round(completed / total * 100)`, or 0 for an empty snapshot.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

pub fn analyze_productivity_patterns(tasks: &[Task]) -> ProductivitySummary {
    let completed_tasks = tasks.iter().filter(|t| t.completed).count();
    ProductivitySummary {
        completion_rate: completion_rate(completed_tasks, tasks.len()),
        total_tasks: tasks.len(),
        completed_tasks,
        pending_tasks: tasks.len() - completed_tasks,
    }
}

/// Full dashboard report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductivityReport {
    pub summary: ProductivitySummary,
    pub window: Vec<DailyBucket>,
    pub tasks: TaskStats,
}

/// Runs the analytics with the window and lookback settings from
/// [`AnalyticsConfig`].
#[derive(Debug, Clone, Default)]
pub struct ProductivityAnalyzer {
    config: AnalyticsConfig,
}

impl ProductivityAnalyzer {
    pub fn new(config: AnalyticsConfig) -> Self {
        Self { config }
    }

    pub fn summary(&self, tasks: &[Task]) -> ProductivitySummary {
        analyze_productivity_patterns(tasks)
    }

    pub fn window<Tz: TimeZone>(
        &self,
        tasks: &[Task],
        sessions: &[SessionEntry],
        now: &DateTime<Tz>,
    ) -> Vec<DailyBucket> {
        rolling_window(tasks, sessions, now, self.config.window_days)
    }

    pub fn task_stats<Tz: TimeZone>(&self, tasks: &[Task], now: &DateTime<Tz>) -> TaskStats {
        task_stats(tasks, now, &self.config)
    }

    pub fn report<Tz: TimeZone>(
        &self,
        tasks: &[Task],
        sessions: &[SessionEntry],
        now: &DateTime<Tz>,
    ) -> ProductivityReport {
        ProductivityReport {
            summary: self.summary(tasks),
            window: self.window(tasks, sessions, now),
            tasks: self.task_stats(tasks, now),
        }
    }
}

//! Productivity analytics.
//!
//! This module provides:
//! - Parsing of the external pomodoro session log
//! - A rolling per-day window of completed tasks and focus minutes
//! - Completion summaries and extended dashboard statistics

mod productivity;
mod session;
mod task_stats;
mod window;

pub use productivity::{
    analyze_productivity_patterns, completion_rate, ProductivityAnalyzer, ProductivityReport,
    ProductivitySummary,
};
pub use session::{parse_session_log, SessionEntry, DATE_FORMAT, FOCUS_KIND};
pub use task_stats::{completion_streak, most_productive_category, task_stats, TaskStats};
pub use window::{rolling_window, window_dates, DailyBucket, DEFAULT_WINDOW_DAYS, MAX_WINDOW_DAYS};

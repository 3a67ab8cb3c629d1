//! # Focusboard Core Library
//!
//! Task prioritization engine behind the Focusboard dashboard. It decides which
//! task should be worked on next and produces the productivity figures shown
//! on the dashboard widgets. The CLI binary drives the same library.
//!
//! ## Architecture
//!
//! - **Heuristics**: keyword tables that suggest a category, duration and
//!   priority from a task title
//! - **Focus**: the 0-100 Focus Score, column ordering, next-task suggestion,
//!   insights and temporal board columns
//! - **Stats**: rolling daily windows, completion summaries and streaks
//! - **Config**: TOML-based analytics and insight settings
//!
//! Every function that depends on the current time takes it as an argument.
//! Calendar days are taken in the timezone of that argument.
//!
//! ## Key Components
//!
//! - [`Task`]: Task record as stored by the task store
//! - [`FocusScorer`]: Focus Score at a fixed instant
//! - [`ProductivityAnalyzer`]: Configured analytics
//! - [`Config`]: Application configuration management

pub mod config;
pub mod error;
pub mod focus;
pub mod heuristics;
pub mod stats;
pub mod task;

pub use config::{AnalyticsConfig, Config, InsightsConfig};
pub use error::{ConfigError, CoreError, Result, ValidationError};
pub use focus::{
    compute_focus_score, group_by_column, smart_insights, sort_for_column, suggest_next_task,
    temporal_column, FocusBreakdown, FocusScorer, Insight,
};
pub use heuristics::{
    classify_category, classify_priority, estimate_duration, suggest, TaskSuggestion,
};
pub use stats::{
    analyze_productivity_patterns, rolling_window, task_stats, DailyBucket, ProductivityAnalyzer,
    ProductivityReport, ProductivitySummary, SessionEntry, TaskStats,
};
pub use task::{
    duration_to_effort, effort_to_duration, parse_snapshot, Effort, Subtask, Task, TaskCategory,
    TaskPriority, TaskStatus, TemporalColumn,
};

//! Focus ranking.
//!
//! This module provides:
//! - The Focus Score (0-100) for a single task
//! - Column ordering built on the score plus explicit tie-breaks
//! - Next-task suggestion and dashboard insights
//! - Temporal board column assignment
//!
//! Every entry point takes the current time as an argument.

mod column;
mod score;
mod sorter;
mod suggest;

pub use column::{current_phase, group_by_column, temporal_column};
pub use score::{
    compute_focus_score, deadline_bonus, priority_points, stagnation_penalty, FocusBreakdown,
    FocusScorer, MAX_SCORE, MIN_SCORE,
};
pub use sorter::{sort_for_column, sort_with_scores};
pub use suggest::{smart_insights, suggest_next_task, DayPeriod, Insight, TIME_OF_DAY_BONUS};

//! Task record shared by every engine component.
//!
//! The task store owns these records; the engine only reads snapshots of them.
//! Field names serialize in camelCase and `createdAt` as epoch milliseconds so
//! that store snapshots deserialize without a translation layer.

mod effort;
mod pin;

pub use effort::{duration_to_effort, effort_to_duration, Effort};
pub use pin::{clear_priority_task, priority_task, set_priority_task};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ValidationError};

/// Board status of a task.
///
/// Not tied to [`Task::completed`]; the two fields may disagree.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Backlog,
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Backlog,
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Done,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

/// Category of a task.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Dev,
    Design,
    Personal,
    #[default]
    Work,
    Urgent,
}

impl TaskCategory {
    /// Fixed category order, also used to break ties in statistics.
    pub const ALL: [TaskCategory; 5] = [
        TaskCategory::Dev,
        TaskCategory::Design,
        TaskCategory::Personal,
        TaskCategory::Work,
        TaskCategory::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "dev",
            Self::Design => "design",
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Urgent => "urgent",
        }
    }
}

/// Explicit priority of a task.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub const ALL: [TaskPriority; 4] = [
        TaskPriority::Low,
        TaskPriority::Medium,
        TaskPriority::High,
        TaskPriority::Urgent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

/// Board column a task is displayed in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TemporalColumn {
    Today,
    Upcoming,
    Distant,
}

impl TemporalColumn {
    pub const ALL: [TemporalColumn; 3] = [
        TemporalColumn::Today,
        TemporalColumn::Upcoming,
        TemporalColumn::Distant,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Upcoming => "upcoming",
            Self::Distant => "distant",
        }
    }
}

macro_rules! display_and_parse {
    ($ty:ty, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                <$ty>::ALL
                    .into_iter()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| ValidationError::UnknownVariant {
                        field: $field,
                        value: s.to_string(),
                    })
            }
        }
    };
}

display_and_parse!(TaskStatus, "status");
display_and_parse!(TaskCategory, "category");
display_and_parse!(TaskPriority, "priority");
display_and_parse!(TemporalColumn, "column");

/// Checklist item under a task. Not used by scoring.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Subtask {
    pub title: String,
    #[serde(default)]
    pub completed: bool,
}

/// A work item as held by the task store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub category: TaskCategory,
    #[serde(default)]
    pub priority: TaskPriority,
    /// Pinned flag. At most one task in a collection holds it.
    #[serde(default)]
    pub is_priority: bool,
    /// Calendar due date, no time of day
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    /// Creation timestamp, never mutated after creation
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
    /// Estimated duration in minutes
    #[serde(default)]
    pub estimated_time: Option<u32>,
    /// Minutes actually spent
    #[serde(default)]
    pub actual_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtasks: Vec<Subtask>,
    #[serde(default)]
    pub project_id: Option<String>,
    /// Manual board column override
    #[serde(default)]
    pub temporal_column: Option<TemporalColumn>,
    /// Project phase this task belongs to
    #[serde(default)]
    pub phase_index: Option<u32>,
    /// Marks the task that validates (closes) its phase
    #[serde(default)]
    pub is_validation: bool,
}

impl Task {
    /// Create a new open task with default metadata.
    pub fn new(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Task {
            id: format!("task-{}-{}", created_at.timestamp(), uuid::Uuid::new_v4()),
            title: title.into(),
            completed: false,
            status: TaskStatus::Todo,
            category: TaskCategory::Work,
            priority: TaskPriority::Medium,
            is_priority: false,
            due_date: None,
            created_at,
            estimated_time: None,
            actual_time: None,
            subtasks: Vec::new(),
            project_id: None,
            temporal_column: None,
            phase_index: None,
            is_validation: false,
        }
    }

    /// Create a task pre-filled from the title heuristics.
    ///
    /// The suggested values are only defaults; callers may overwrite them
    /// before handing the task to the store.
    pub fn from_title(title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        let title = title.into();
        let suggestion = crate::heuristics::suggest(&title);
        Task {
            category: suggestion.category,
            priority: suggestion.priority,
            estimated_time: Some(suggestion.estimated_time),
            ..Task::new(title, created_at)
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_category(mut self, category: TaskCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_estimated_time(mut self, minutes: u32) -> Self {
        self.estimated_time = Some(minutes);
        self
    }

    pub fn with_actual_time(mut self, minutes: u32) -> Self {
        self.actual_time = Some(minutes);
        self
    }

    pub fn with_phase(mut self, phase_index: u32, is_validation: bool) -> Self {
        self.phase_index = Some(phase_index);
        self.is_validation = is_validation;
        self
    }

    pub fn with_column(mut self, column: TemporalColumn) -> Self {
        self.temporal_column = Some(column);
        self
    }

    /// Mark the task completed and move it to the done status.
    pub fn completed(mut self) -> Self {
        self.completed = true;
        self.status = TaskStatus::Done;
        self
    }

    pub fn pinned(mut self) -> Self {
        self.is_priority = true;
        self
    }

    /// Open means neither flagged completed nor sitting in the done status.
    pub fn is_open(&self) -> bool {
        !self.completed && self.status != TaskStatus::Done
    }

    /// Effort bucket of the estimated duration, if one is set.
    pub fn effort(&self) -> Option<Effort> {
        self.estimated_time.map(|m| duration_to_effort(i64::from(m)))
    }
}

/// Parse a store snapshot: a JSON array of tasks.
pub fn parse_snapshot(json: &str) -> Result<Vec<Task>> {
    let tasks: Vec<Task> = serde_json::from_str(json)?;
    tracing::debug!(count = tasks.len(), "parsed task snapshot");
    Ok(tasks)
}

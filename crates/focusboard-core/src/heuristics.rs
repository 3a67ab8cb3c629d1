//! Title heuristics used to pre-fill a task at creation time.
//!
//! Each classifier walks an ordered rule table top-down and returns the
//! outcome of the first rule whose keyword group occurs anywhere in the
//! lowercased title. Position inside the title does not matter, only rule
//! order does.
//!
//! The urgent group contains "important", and the priority table checks it
//! before the literal "important" rule, so that rule never fires for a title
//! that reaches it. Tests pin this down.

use serde::{Deserialize, Serialize};

use crate::task::{TaskCategory, TaskPriority};

/// One row of a precedence table.
#[derive(Debug, Clone, Copy)]
pub struct Rule<T: 'static> {
    pub keywords: &'static [&'static str],
    pub outcome: T,
}

const URGENT: &[&str] = &[
    "urgent",
    "asap",
    "critique",
    "important",
    "aujourd'hui",
    "maintenant",
    "vite",
];
const DEV: &[&str] = &[
    "bug", "fix", "code", "api", "debug", "deploy", "commit", "merge", "test",
];
const DESIGN: &[&str] = &[
    "design",
    "maquette",
    "figma",
    "ui",
    "ux",
    "mockup",
    "prototype",
    "wireframe",
];
const WORK: &[&str] = &[
    "réunion",
    "meeting",
    "client",
    "présentation",
    "rapport",
    "email",
    "call",
];
const PERSONAL: &[&str] = &[
    "acheter",
    "courses",
    "rdv",
    "médecin",
    "famille",
    "perso",
    "personnel",
];

const QUICK: &[&str] = &["quick", "rapide", "simple", "petit", "fix"];
const MEDIUM: &[&str] = &["créer", "ajouter", "modifier", "update"];
const LONG: &[&str] = &["refactor", "refonte", "complet", "projet", "développer"];

pub const CATEGORY_RULES: &[Rule<TaskCategory>] = &[
    Rule {
        keywords: URGENT,
        outcome: TaskCategory::Urgent,
    },
    Rule {
        keywords: DEV,
        outcome: TaskCategory::Dev,
    },
    Rule {
        keywords: DESIGN,
        outcome: TaskCategory::Design,
    },
    Rule {
        keywords: WORK,
        outcome: TaskCategory::Work,
    },
    Rule {
        keywords: PERSONAL,
        outcome: TaskCategory::Personal,
    },
];
pub const DEFAULT_CATEGORY: TaskCategory = TaskCategory::Work;

/// Quick is checked before long, and long before medium.
pub const DURATION_RULES: &[Rule<u32>] = &[
    Rule {
        keywords: QUICK,
        outcome: 15,
    },
    Rule {
        keywords: LONG,
        outcome: 120,
    },
    Rule {
        keywords: MEDIUM,
        outcome: 45,
    },
];
pub const DEFAULT_DURATION: u32 = 30;

pub const PRIORITY_RULES: &[Rule<TaskPriority>] = &[
    Rule {
        keywords: URGENT,
        outcome: TaskPriority::Urgent,
    },
    Rule {
        keywords: &["important"],
        outcome: TaskPriority::High,
    },
    Rule {
        keywords: &["plus tard", "maybe"],
        outcome: TaskPriority::Low,
    },
];
pub const DEFAULT_PRIORITY: TaskPriority = TaskPriority::Medium;

/// Outcome of the first matching rule, or `default`.
pub fn first_match<T: Copy>(title: &str, rules: &[Rule<T>], default: T) -> T {
    let lower = title.to_lowercase();
    rules
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| lower.contains(kw)))
        .map_or(default, |rule| rule.outcome)
}

/// Guess a category from a title. Defaults to [`TaskCategory::Work`].
pub fn classify_category(title: &str) -> TaskCategory {
    first_match(title, CATEGORY_RULES, DEFAULT_CATEGORY)
}

/// Guess a duration in minutes from a title. Defaults to 30.
pub fn estimate_duration(title: &str) -> u32 {
    first_match(title, DURATION_RULES, DEFAULT_DURATION)
}

/// Guess a priority from a title. Defaults to [`TaskPriority::Medium`].
pub fn classify_priority(title: &str) -> TaskPriority {
    first_match(title, PRIORITY_RULES, DEFAULT_PRIORITY)
}

/// Creation-time suggestion for a new task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSuggestion {
    pub category: TaskCategory,
    pub estimated_time: u32,
    pub priority: TaskPriority,
}

/// Run all three classifiers over one title.
pub fn suggest(title: &str) -> TaskSuggestion {
    TaskSuggestion {
        category: classify_category(title),
        estimated_time: estimate_duration(title),
        priority: classify_priority(title),
    }
}

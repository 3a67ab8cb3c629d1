//! Single-pin operations.
//!
//! At most one task in a collection carries `is_priority`. The flag is only
//! ever changed through these functions, which clear and set in the same pass.
//! Scoring and ordering assume the invariant holds and never repair it.

use super::Task;

/// Pin the task with `id`, unpinning every other task.
///
/// Returns `false` and leaves the collection untouched when no task has `id`.
pub fn set_priority_task(tasks: &mut [Task], id: &str) -> bool {
    if !tasks.iter().any(|t| t.id == id) {
        tracing::debug!(task_id = id, "pin ignored: no such task");
        return false;
    }

    for task in tasks.iter_mut() {
        task.is_priority = task.id == id;
    }
    tracing::debug!(task_id = id, "task pinned");
    true
}

/// Unpin every task. Returns how many flags were cleared.
pub fn clear_priority_task(tasks: &mut [Task]) -> usize {
    let mut cleared = 0;
    for task in tasks.iter_mut().filter(|t| t.is_priority) {
        task.is_priority = false;
        cleared += 1;
    }
    cleared
}

/// The pinned task, unless it has been completed.
pub fn priority_task(tasks: &[Task]) -> Option<&Task> {
    tasks.iter().find(|t| t.is_priority && !t.completed)
}

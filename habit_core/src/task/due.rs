//! TodoDueFilter - Todos due before a deadline

use super::{Clock, Task, TaskType};
use chrono::{DateTime, Utc};

/// Todos with a due date strictly before `deadline`, in list order
pub fn todos_due_by(tasks: &[Task], deadline: DateTime<Utc>) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|task| task.task_type == TaskType::Todo)
        .filter(|task| matches!(task.date, Some(date) if date < deadline))
        .collect()
}

/// Todos due by the end of the clock's current day
pub fn todos_due_today<'a>(tasks: &'a [Task], clock: &impl Clock) -> Vec<&'a Task> {
    todos_due_by(tasks, clock.end_of_day())
}

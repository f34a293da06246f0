//! Tasks - Habits, dailies, todos and rewards as delivered by the task source
//!
//! Task lists are ordered; every consumer in this crate preserves that order.

mod clock;
mod due;

pub use clock::{end_of_day_in, Clock, FixedClock, SystemClock};
pub use due::{todos_due_by, todos_due_today};

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Kind of task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    Habit,
    Daily,
    Todo,
    Reward,
}

/// One checklist entry under a daily or todo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl ChecklistItem {
    pub fn new(completed: bool) -> Self {
        ChecklistItem {
            text: String::new(),
            completed,
        }
    }
}

/// A single task
///
/// `value` and `priority` are required for every task type; the flags,
/// checklist and date only exist upstream for the types that use them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    #[serde(default)]
    pub text: String,
    /// Due today (dailies only)
    #[serde(default)]
    pub is_due: bool,
    #[serde(default)]
    pub completed: bool,
    /// Task health score, unclamped
    pub value: f64,
    /// Difficulty multiplier, usually one of 0.1, 1, 1.5, 2
    pub priority: f64,
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
    /// Due date (todos only)
    #[serde(default, deserialize_with = "optional_date")]
    pub date: Option<DateTime<Utc>>,
}

impl Task {
    /// A task of the given type with value 0, priority 1 and nothing else set
    pub fn new(task_type: TaskType) -> Self {
        Task {
            id: None,
            task_type,
            text: String::new(),
            is_due: false,
            completed: false,
            value: 0.0,
            priority: 1.0,
            checklist: Vec::new(),
            date: None,
        }
    }

    /// A daily that is due today and not yet done
    pub fn due_daily(value: f64, priority: f64) -> Self {
        Task::new(TaskType::Daily)
            .with_value(value)
            .with_priority(priority)
            .with_due(true)
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    pub fn with_priority(mut self, priority: f64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due(mut self, is_due: bool) -> Self {
        self.is_due = is_due;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Checklist with the given completion flags, in order
    pub fn with_checklist(mut self, completed: &[bool]) -> Self {
        self.checklist = completed.iter().map(|c| ChecklistItem::new(*c)).collect();
        self
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    /// Daily that will cause damage if left as is
    pub fn is_unfinished_due_daily(&self) -> bool {
        self.task_type == TaskType::Daily && self.is_due && !self.completed
    }

    pub fn completed_checklist_items(&self) -> usize {
        self.checklist.iter().filter(|item| item.completed).count()
    }
}

/// Parse a task list, order preserved
pub fn parse_tasks(json: &str) -> Result<Vec<Task>> {
    Ok(serde_json::from_str(json)?)
}

// Upstream sends "" or null for todos without a due date
fn optional_date<'de, D>(deserializer: D) -> std::result::Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|date| Some(date.with_timezone(&Utc)))
            .map_err(serde::de::Error::custom),
    }
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier of a task, unique within a [`TaskBoard`](super::TaskBoard).
pub type TaskId = i64;

/// A committed task as sent to the scheduling backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub task_id: TaskId,
    pub description: String,
    /// Duration in days.
    pub days_required: i64,
    pub deadline: NaiveDate,
    /// Prerequisite task ids, in the order they were attached.
    pub dependencies: Vec<TaskId>,
}

impl Task {
    pub fn new(
        task_id: TaskId,
        description: impl Into<String>,
        days_required: i64,
        deadline: NaiveDate,
    ) -> Self {
        Self {
            task_id,
            description: description.into(),
            days_required,
            deadline,
            dependencies: Vec::new(),
        }
    }

    pub fn with_dependencies(mut self, dependencies: Vec<TaskId>) -> Self {
        self.dependencies = dependencies;
        self
    }
}

/// A task record returned by the backend.
///
/// The deadline is kept as the backend's string so that a reformatted date
/// is still displayed instead of failing the whole response. Any fields the
/// backend adds beyond the five task fields are kept in `annotations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    pub task_id: TaskId,
    pub description: String,
    pub days_required: i64,
    pub deadline: String,
    #[serde(default)]
    pub dependencies: Vec<TaskId>,
    #[serde(flatten)]
    pub annotations: BTreeMap<String, serde_json::Value>,
}

/// Comma-joined dependency list, or `None` when there are no dependencies.
pub fn format_dependencies(dependencies: &[TaskId]) -> String {
    if dependencies.is_empty() {
        return "None".to_string();
    }
    dependencies
        .iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render an annotation value without the quotes serde_json puts on strings.
pub fn format_annotation(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

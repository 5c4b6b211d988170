use chrono::NaiveDate;

use super::task::{Task, TaskId};

/// Reasons a draft cannot be committed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("All fields are required")]
    MissingField,
    #[error("Task ID must be a whole number")]
    InvalidTaskId,
    #[error("Days required must be a whole number")]
    InvalidDaysRequired,
    #[error("Task ID must be unique")]
    DuplicateTaskId(TaskId),
}

/// The task currently being composed in the form.
///
/// Numeric fields hold the raw text the user typed; they are only parsed
/// when the draft is committed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub task_id: String,
    pub description: String,
    pub days_required: String,
    pub deadline: Option<NaiveDate>,
    /// Only the board moves ids in and out, keeping the pool consistent.
    pub(super) dependencies: Vec<TaskId>,
}

impl TaskDraft {
    fn has_missing_field(&self) -> bool {
        self.task_id.trim().is_empty()
            || self.description.trim().is_empty()
            || self.days_required.trim().is_empty()
            || self.deadline.is_none()
    }

    /// Parse the draft into a task. Uniqueness is checked by the board.
    pub fn to_task(&self) -> Result<Task, ValidationError> {
        if self.has_missing_field() {
            return Err(ValidationError::MissingField);
        }
        let task_id = self
            .task_id
            .trim()
            .parse::<TaskId>()
            .map_err(|_| ValidationError::InvalidTaskId)?;
        let days_required = self
            .days_required
            .trim()
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidDaysRequired)?;
        let deadline = self.deadline.ok_or(ValidationError::MissingField)?;

        Ok(Task::new(task_id, self.description.clone(), days_required, deadline)
            .with_dependencies(self.dependencies.clone()))
    }

    /// Attached dependency ids, in attach order.
    pub fn dependencies(&self) -> &[TaskId] {
        &self.dependencies
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

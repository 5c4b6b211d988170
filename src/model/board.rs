use std::collections::BTreeSet;

use super::draft::{TaskDraft, ValidationError};
use super::task::{Task, TaskId};

/// The editing state of one planner window: committed tasks, the draft
/// being composed, and the pool of ids the draft may depend on.
///
/// Pool invariant: committed ids, plus ids detached from the draft, minus
/// ids attached to the draft.
#[derive(Debug, Clone, Default)]
pub struct TaskBoard {
    tasks: Vec<Task>,
    available: BTreeSet<TaskId>,
    pub draft: TaskDraft,
    error: Option<ValidationError>,
}

impl TaskBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn contains(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.task_id == id)
    }

    /// Ids that can still be attached to the draft, ascending.
    pub fn available_dependencies(&self) -> impl Iterator<Item = TaskId> + '_ {
        self.available.iter().copied()
    }

    pub fn has_available_dependencies(&self) -> bool {
        !self.available.is_empty()
    }

    /// The last validation failure, cleared on a successful commit.
    pub fn error(&self) -> Option<&ValidationError> {
        self.error.as_ref()
    }

    /// Commit the draft. On failure the collection is untouched and the
    /// error is kept for display.
    pub fn add_task(&mut self) -> Result<TaskId, ValidationError> {
        match self.try_commit() {
            Ok(id) => {
                self.error = None;
                Ok(id)
            }
            Err(e) => {
                tracing::debug!(error = %e, "draft rejected");
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn try_commit(&mut self) -> Result<TaskId, ValidationError> {
        let task = self.draft.to_task()?;
        if self.contains(task.task_id) {
            return Err(ValidationError::DuplicateTaskId(task.task_id));
        }

        let id = task.task_id;
        self.available.extend(task.dependencies.iter().copied());
        self.available.insert(id);
        tracing::info!(
            task_id = id,
            dependencies = task.dependencies.len(),
            "task added"
        );
        self.tasks.push(task);
        self.draft.clear();
        Ok(id)
    }

    /// Remove a task and retract its id from the pool and the draft.
    /// Unknown ids are ignored. Committed tasks that depend on `id` keep
    /// their reference.
    pub fn delete_task(&mut self, id: TaskId) {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.task_id != id);
        self.available.remove(&id);
        self.draft.dependencies.retain(|&d| d != id);
        if self.tasks.len() != before {
            tracing::info!(task_id = id, "task deleted");
        }
    }

    /// Move `id` from the pool into the draft. Returns false if it was not
    /// available.
    pub fn attach(&mut self, id: TaskId) -> bool {
        if !self.available.remove(&id) {
            return false;
        }
        self.draft.dependencies.push(id);
        tracing::debug!(dependency = id, "dependency attached");
        true
    }

    /// Move `id` from the draft back into the pool. Returns false if it was
    /// not attached.
    pub fn detach(&mut self, id: TaskId) -> bool {
        let before = self.draft.dependencies.len();
        self.draft.dependencies.retain(|&d| d != id);
        if self.draft.dependencies.len() == before {
            return false;
        }
        self.available.insert(id);
        tracing::debug!(dependency = id, "dependency detached");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fill(board: &mut TaskBoard, id: &str, description: &str, days: &str, deadline: &str) {
        board.draft.task_id = id.to_string();
        board.draft.description = description.to_string();
        board.draft.days_required = days.to_string();
        board.draft.deadline = NaiveDate::parse_from_str(deadline, "%Y-%m-%d").ok();
    }

    fn pool(board: &TaskBoard) -> Vec<TaskId> {
        board.available_dependencies().collect()
    }

    #[test]
    fn distinct_adds_grow_by_one() {
        let mut board = TaskBoard::new();
        for (n, id) in ["10", "3", "7", "1"].into_iter().enumerate() {
            fill(&mut board, id, "work", "2", "2024-03-01");
            board.add_task().unwrap();
            assert_eq!(board.tasks().len(), n + 1);
        }
        let ids: Vec<_> = board.tasks().iter().map(|t| t.task_id).collect();
        assert_eq!(ids, vec![10, 3, 7, 1]);
        assert_eq!(ids.iter().collect::<BTreeSet<_>>().len(), ids.len());
        assert_eq!(pool(&board), vec![1, 3, 7, 10]);
    }

    #[test]
    fn successful_add_resets_draft_and_error() {
        let mut board = TaskBoard::new();
        fill(&mut board, "1", "", "3", "2024-01-10");
        assert!(board.add_task().is_err());
        assert!(board.error().is_some());

        fill(&mut board, "1", "Design", "3", "2024-01-10");
        assert_eq!(board.add_task(), Ok(1));
        assert_eq!(board.draft, TaskDraft::default());
        assert!(board.error().is_none());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut board = TaskBoard::new();
        fill(&mut board, "1", "Design", "3", "2024-01-10");
        board.add_task().unwrap();

        fill(&mut board, "1", "Again", "4", "2024-01-12");
        assert_eq!(board.add_task(), Err(ValidationError::DuplicateTaskId(1)));
        assert_eq!(board.tasks().len(), 1);
        assert_eq!(board.tasks()[0].description, "Design");
        assert_eq!(board.error(), Some(&ValidationError::DuplicateTaskId(1)));
        // The draft is kept so the user can fix the id.
        assert_eq!(board.draft.description, "Again");
    }

    #[test]
    fn missing_field_leaves_collection_unchanged() {
        let mut board = TaskBoard::new();
        fill(&mut board, "1", "Design", "3", "2024-01-10");
        board.draft.deadline = None;
        assert_eq!(board.add_task(), Err(ValidationError::MissingField));
        assert!(board.tasks().is_empty());
        assert!(pool(&board).is_empty());
    }

    #[test]
    fn attach_then_detach_restores_pool() {
        let mut board = TaskBoard::new();
        for id in ["1", "2", "3"] {
            fill(&mut board, id, "work", "1", "2024-01-01");
            board.add_task().unwrap();
        }
        let before = pool(&board);

        assert!(board.attach(2));
        assert_eq!(pool(&board), vec![1, 3]);
        assert_eq!(board.draft.dependencies, vec![2]);

        assert!(board.detach(2));
        assert_eq!(pool(&board), before);
        assert!(board.draft.dependencies.is_empty());
    }

    #[test]
    fn draft_dependencies_track_picker_moves() {
        let mut board = TaskBoard::new();
        for id in ["4", "9"] {
            fill(&mut board, id, "work", "1", "2024-01-01");
            board.add_task().unwrap();
        }
        board.attach(9);
        board.attach(4);
        assert_eq!(board.draft.dependencies(), &[9, 4]);

        board.detach(9);
        assert_eq!(board.draft.dependencies(), &[4]);
        assert_eq!(pool(&board), vec![9]);

        board.delete_task(4);
        assert!(board.draft.dependencies().is_empty());
        assert_eq!(pool(&board), vec![9]);
    }

    #[test]
    fn attach_and_detach_ignore_unknown_ids() {
        let mut board = TaskBoard::new();
        fill(&mut board, "1", "work", "1", "2024-01-01");
        board.add_task().unwrap();

        assert!(!board.attach(99));
        assert!(board.attach(1));
        assert!(!board.attach(1));
        assert_eq!(board.draft.dependencies, vec![1]);
        assert!(!board.detach(5));
        assert!(pool(&board).is_empty());
    }

    #[test]
    fn delete_retracts_id_everywhere() {
        let mut board = TaskBoard::new();
        for id in ["1", "2"] {
            fill(&mut board, id, "work", "1", "2024-01-01");
            board.add_task().unwrap();
        }
        board.attach(1);

        board.delete_task(1);
        assert_eq!(board.tasks().len(), 1);
        assert!(!board.contains(1));
        assert_eq!(pool(&board), vec![2]);
        assert!(board.draft.dependencies.is_empty());

        board.delete_task(2);
        assert!(board.tasks().is_empty());
        assert!(pool(&board).is_empty());
    }

    #[test]
    fn delete_unknown_id_is_noop() {
        let mut board = TaskBoard::new();
        fill(&mut board, "1", "work", "1", "2024-01-01");
        board.add_task().unwrap();
        board.delete_task(42);
        assert_eq!(board.tasks().len(), 1);
        assert_eq!(pool(&board), vec![1]);
    }

    #[test]
    fn delete_keeps_references_in_committed_tasks() {
        let mut board = TaskBoard::new();
        fill(&mut board, "1", "Design", "3", "2024-01-10");
        board.add_task().unwrap();
        board.attach(1);
        fill(&mut board, "2", "Build", "5", "2024-01-20");
        board.add_task().unwrap();

        board.delete_task(1);
        assert_eq!(board.tasks()[0].dependencies, vec![1]);
    }

    #[test]
    fn design_then_build_scenario() {
        let mut board = TaskBoard::new();
        fill(&mut board, "1", "Design", "3", "2024-01-10");
        board.add_task().unwrap();
        assert_eq!(pool(&board), vec![1]);

        fill(&mut board, "2", "Build", "5", "2024-01-20");
        assert!(board.attach(1));
        assert!(pool(&board).is_empty());
        board.add_task().unwrap();

        assert_eq!(board.tasks().len(), 2);
        assert_eq!(board.tasks()[1].dependencies, vec![1]);
        assert!(board.tasks()[0].dependencies.is_empty());
        assert_eq!(pool(&board), vec![1, 2]);
    }
}

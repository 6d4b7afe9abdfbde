//! Bucketed task store and reducer operations.

use crate::board::{BoardError, BoardResult};
use crate::model::task::{Task, TaskDraft, TaskId, TaskStatus};
use log::{debug, info, warn};
use uuid::Uuid;

/// Owned board state. One ordered bucket per [`TaskStatus`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskBoard {
    buckets: [Vec<Task>; 3],
}

fn slot(status: TaskStatus) -> usize {
    match status {
        TaskStatus::Todo => 0,
        TaskStatus::InProgress => 1,
        TaskStatus::Done => 2,
    }
}

impl TaskBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the tasks of one bucket in display order.
    pub fn list_tasks(&self, status: TaskStatus) -> &[Task] {
        &self.buckets[slot(status)]
    }

    /// Total number of tasks across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Locates a task by id as `(bucket, index)`.
    pub fn position(&self, id: TaskId) -> Option<(TaskStatus, usize)> {
        TaskStatus::ALL.into_iter().find_map(|status| {
            self.list_tasks(status)
                .iter()
                .position(|task| task.id == id)
                .map(|index| (status, index))
        })
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.position(id)
            .map(|(status, index)| &self.list_tasks(status)[index])
    }

    /// Iterates every task, bucket by bucket in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Task> + '_ {
        self.buckets.iter().flatten()
    }

    /// Creates a task with a fresh id at the end of the draft's bucket.
    ///
    /// No field validation happens here; forms validate before submitting.
    pub fn create(&mut self, draft: TaskDraft) -> Task {
        let task = Task::from_draft(Uuid::new_v4(), draft);
        self.bucket_mut(task.status).push(task.clone());
        info!(
            "event=task_created module=board status=ok task_id={} bucket={}",
            task.id, task.status
        );
        task
    }

    /// Replaces a task's fields, keeping its id.
    ///
    /// The task always lands at the end of the draft's bucket, even when the
    /// status is unchanged.
    ///
    /// # Errors
    /// - `BoardError::NotFound` when no bucket holds `id`; the board is untouched.
    pub fn update(&mut self, id: TaskId, draft: TaskDraft) -> BoardResult<Task> {
        let (from, index) = self.position(id).ok_or_else(|| {
            warn!("event=task_update module=board status=not_found task_id={id}");
            BoardError::NotFound(id)
        })?;
        self.bucket_mut(from).remove(index);

        let task = Task::from_draft(id, draft);
        self.bucket_mut(task.status).push(task.clone());
        info!(
            "event=task_updated module=board status=ok task_id={id} from={from} to={}",
            task.status
        );
        Ok(task)
    }

    /// Removes a task from whichever bucket holds it.
    ///
    /// # Errors
    /// - `BoardError::NotFound` when no bucket holds `id`.
    pub fn remove(&mut self, id: TaskId) -> BoardResult<Task> {
        let (status, index) = self.position(id).ok_or_else(|| {
            warn!("event=task_remove module=board status=not_found task_id={id}");
            BoardError::NotFound(id)
        })?;
        let task = self.bucket_mut(status).remove(index);
        info!("event=task_removed module=board status=ok task_id={id} bucket={status}");
        Ok(task)
    }

    /// Inserts a fully formed task at the end of its bucket.
    ///
    /// Used for seed data; a task whose id is already present is skipped.
    pub(crate) fn insert_existing(&mut self, task: Task) -> bool {
        if self.position(task.id).is_some() {
            debug!(
                "event=task_insert module=board status=skipped reason=duplicate_id task_id={}",
                task.id
            );
            return false;
        }
        self.bucket_mut(task.status).push(task);
        true
    }

    pub(super) fn bucket_mut(&mut self, status: TaskStatus) -> &mut Vec<Task> {
        &mut self.buckets[slot(status)]
    }
}

#[cfg(test)]
mod tests {
    use super::TaskBoard;
    use crate::model::task::{TaskDraft, TaskStatus};

    #[test]
    fn buckets_are_independent() {
        let mut board = TaskBoard::new();
        board.create(TaskDraft::new("a", TaskStatus::Done));
        assert!(board.list_tasks(TaskStatus::Todo).is_empty());
        assert!(board.list_tasks(TaskStatus::InProgress).is_empty());
        assert_eq!(board.list_tasks(TaskStatus::Done).len(), 1);
    }

    #[test]
    fn insert_existing_skips_duplicate_ids() {
        let mut board = TaskBoard::new();
        let task = board.create(TaskDraft::new("a", TaskStatus::Todo));
        let mut copy = task.clone();
        copy.status = TaskStatus::Done;
        assert!(!board.insert_existing(copy));
        assert_eq!(board.len(), 1);
        assert_eq!(board.position(task.id), Some((TaskStatus::Todo, 0)));
    }
}

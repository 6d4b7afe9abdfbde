//! Drag controller: turns a finished drag gesture into one board mutation.
//!
//! # Invariants
//! - Cancelled and same-position drops never touch the board.
//! - The gesture is validated before any bucket is modified.
//! - Destination indexes are interpreted after the task is removed from its
//!   source, so same-bucket reorders follow ordered-list semantics.

use crate::board::store::TaskBoard;
use crate::board::{BoardError, BoardResult};
use crate::model::task::{Task, TaskId, TaskStatus};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

/// A position inside one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DragLocation {
    pub bucket: TaskStatus,
    pub index: usize,
}

impl DragLocation {
    pub fn new(bucket: TaskStatus, index: usize) -> Self {
        Self { bucket, index }
    }
}

/// A completed drag-and-drop gesture.
///
/// `destination` is `None` when the card was released outside every column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragGesture {
    pub task_id: TaskId,
    pub source: DragLocation,
    pub destination: Option<DragLocation>,
}

impl DragGesture {
    pub fn new(task_id: TaskId, source: DragLocation, destination: DragLocation) -> Self {
        Self {
            task_id,
            source,
            destination: Some(destination),
        }
    }

    pub fn cancelled(task_id: TaskId, source: DragLocation) -> Self {
        Self {
            task_id,
            source,
            destination: None,
        }
    }
}

/// What a drop did to the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// Released outside any bucket.
    Cancelled,
    /// Released at its own position.
    Unchanged,
    /// Moved; `to.index` is the index the task now occupies.
    Moved {
        task: Task,
        from: DragLocation,
        to: DragLocation,
    },
}

impl DropOutcome {
    pub fn is_moved(&self) -> bool {
        matches!(self, Self::Moved { .. })
    }
}

impl TaskBoard {
    /// Applies a drag gesture.
    ///
    /// # Errors
    /// - `BoardError::NotFound` when `task_id` is not on the board.
    /// - `BoardError::StaleGesture` when `source` does not hold `task_id`.
    pub fn apply_drop(&mut self, gesture: &DragGesture) -> BoardResult<DropOutcome> {
        let Some(destination) = gesture.destination else {
            debug!(
                "event=task_drop module=board status=cancelled task_id={}",
                gesture.task_id
            );
            return Ok(DropOutcome::Cancelled);
        };
        if destination == gesture.source {
            debug!(
                "event=task_drop module=board status=unchanged task_id={}",
                gesture.task_id
            );
            return Ok(DropOutcome::Unchanged);
        }

        let source = gesture.source;
        let holds_task = self
            .list_tasks(source.bucket)
            .get(source.index)
            .is_some_and(|task| task.id == gesture.task_id);
        if !holds_task {
            if self.position(gesture.task_id).is_none() {
                warn!(
                    "event=task_drop module=board status=not_found task_id={}",
                    gesture.task_id
                );
                return Err(BoardError::NotFound(gesture.task_id));
            }
            warn!(
                "event=task_drop module=board status=stale task_id={} bucket={} index={}",
                gesture.task_id, source.bucket, source.index
            );
            return Err(BoardError::StaleGesture {
                task_id: gesture.task_id,
                source,
            });
        }

        let mut task = self.bucket_mut(source.bucket).remove(source.index);
        task.status = destination.bucket;

        let target = self.bucket_mut(destination.bucket);
        let index = destination.index.min(target.len());
        target.insert(index, task.clone());

        let to = DragLocation::new(destination.bucket, index);
        info!(
            "event=task_moved module=board status=ok task_id={} from={}[{}] to={}[{}]",
            task.id, source.bucket, source.index, to.bucket, to.index
        );
        Ok(DropOutcome::Moved {
            task,
            from: source,
            to,
        })
    }
}

//! Kanban task board: bucketed task store, reducer and drag controller.
//!
//! # Responsibility
//! - Own every board task, partitioned into the three status buckets.
//! - Expose create/update/remove and drop as the only mutation surface.
//!
//! # Invariants
//! - Each task id appears in exactly one bucket.
//! - A task's `status` equals the key of the bucket holding it.
//! - A failed operation leaves the board unchanged.

pub mod drag;
pub mod seed;
pub mod store;

use crate::model::task::TaskId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub use drag::{DragGesture, DragLocation, DropOutcome};
pub use store::TaskBoard;

/// Result type used by board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// Errors from board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// No bucket holds a task with this id.
    NotFound(TaskId),
    /// The gesture's source position no longer holds the dragged task.
    StaleGesture {
        task_id: TaskId,
        source: DragLocation,
    },
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::StaleGesture { task_id, source } => write!(
                f,
                "drag source {}[{}] does not hold task {task_id}",
                source.bucket, source.index
            ),
        }
    }
}

impl Error for BoardError {}

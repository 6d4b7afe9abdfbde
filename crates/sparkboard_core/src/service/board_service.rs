//! Board use-case service.
//!
//! # Responsibility
//! - Be the single mutation surface presentation code uses for the board.
//! - Validate form drafts and gate deletes behind a confirmation dialog.
//! - Describe every applied change as a [`BoardNotice`] for the UI toast.
//!
//! # Invariants
//! - The board is only mutated through `TaskBoard` reducer operations.
//! - A declined confirmation or failed validation never mutates the board.

use crate::board::{BoardError, DragGesture, DropOutcome, TaskBoard};
use crate::model::form::FormErrors;
use crate::model::task::{Task, TaskDraft, TaskId, TaskStatus};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, BoardServiceError>;

/// Errors from board service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardServiceError {
    /// The submitted draft failed form validation.
    Invalid(FormErrors),
    Board(BoardError),
}

impl Display for BoardServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Invalid(err) => write!(f, "invalid task form: {err}"),
            Self::Board(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Invalid(err) => Some(err),
            Self::Board(err) => Some(err),
        }
    }
}

impl From<BoardError> for BoardServiceError {
    fn from(value: BoardError) -> Self {
        Self::Board(value)
    }
}

impl From<FormErrors> for BoardServiceError {
    fn from(value: FormErrors) -> Self {
        Self::Invalid(value)
    }
}

/// Short user-facing description of an applied change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardNotice {
    pub title: &'static str,
    pub message: String,
}

impl BoardNotice {
    fn created() -> Self {
        Self {
            title: "Task Created",
            message: "New task has been created successfully.".to_string(),
        }
    }

    fn updated() -> Self {
        Self {
            title: "Task Updated",
            message: "Task has been updated successfully.".to_string(),
        }
    }

    fn deleted() -> Self {
        Self {
            title: "Task Deleted",
            message: "Task has been deleted successfully.".to_string(),
        }
    }

    fn moved(to: TaskStatus) -> Self {
        Self {
            title: "Task Moved",
            message: format!("Task moved to {}.", to.label()),
        }
    }
}

/// An applied board change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardChange {
    pub task: Task,
    pub notice: BoardNotice,
}

/// What the delete confirmation dialog is asked about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    pub task_id: TaskId,
    pub task_title: String,
    pub title: &'static str,
    pub message: &'static str,
}

/// Yes/no confirmation shown before a task is deleted.
pub trait ConfirmDialog {
    fn confirm(&mut self, prompt: &DeletePrompt) -> bool;
}

impl<F> ConfirmDialog for F
where
    F: FnMut(&DeletePrompt) -> bool,
{
    fn confirm(&mut self, prompt: &DeletePrompt) -> bool {
        self(prompt)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The dialog was declined; nothing changed.
    Cancelled,
    Deleted(BoardChange),
}

/// One rendered board column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardColumn<'a> {
    pub status: TaskStatus,
    pub label: &'static str,
    pub tasks: &'a [Task],
}

impl BoardColumn<'_> {
    /// Count shown in the column header.
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// Board facade owning the session's task board.
#[derive(Debug, Clone, Default)]
pub struct BoardService {
    board: TaskBoard,
}

impl BoardService {
    pub fn new(board: TaskBoard) -> Self {
        Self { board }
    }

    pub fn seeded() -> Self {
        Self::new(TaskBoard::seeded())
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &TaskBoard {
        &self.board
    }

    pub fn list_tasks(&self, status: TaskStatus) -> &[Task] {
        self.board.list_tasks(status)
    }

    /// Columns in display order.
    pub fn columns(&self) -> Vec<BoardColumn<'_>> {
        TaskStatus::ALL
            .into_iter()
            .map(|status| BoardColumn {
                status,
                label: status.label(),
                tasks: self.board.list_tasks(status),
            })
            .collect()
    }

    /// Validates a create-form submission and adds the task.
    pub fn submit_create(&mut self, draft: TaskDraft) -> ServiceResult<BoardChange> {
        draft.validate()?;
        let task = self.board.create(draft);
        Ok(BoardChange {
            task,
            notice: BoardNotice::created(),
        })
    }

    /// Validates an edit-form submission and applies it.
    pub fn submit_edit(&mut self, id: TaskId, draft: TaskDraft) -> ServiceResult<BoardChange> {
        draft.validate()?;
        let task = self.board.update(id, draft)?;
        Ok(BoardChange {
            task,
            notice: BoardNotice::updated(),
        })
    }

    /// Asks `dialog` for confirmation, then removes the task.
    ///
    /// # Errors
    /// - `BoardError::NotFound` before the dialog is shown when `id` is unknown.
    pub fn request_delete<D>(&mut self, id: TaskId, dialog: &mut D) -> ServiceResult<DeleteOutcome>
    where
        D: ConfirmDialog + ?Sized,
    {
        let task = self.board.get(id).ok_or(BoardError::NotFound(id))?;
        let prompt = DeletePrompt {
            task_id: id,
            task_title: task.title.clone(),
            title: "Delete Task",
            message: "Are you sure you want to delete this task? This action cannot be undone.",
        };
        if !dialog.confirm(&prompt) {
            info!("event=task_delete module=board_service status=cancelled task_id={id}");
            return Ok(DeleteOutcome::Cancelled);
        }

        let task = self.board.remove(id)?;
        Ok(DeleteOutcome::Deleted(BoardChange {
            task,
            notice: BoardNotice::deleted(),
        }))
    }

    /// Applies a finished drag gesture.
    ///
    /// Returns `None` when the drop was cancelled or landed where it started.
    pub fn drop_task(&mut self, gesture: &DragGesture) -> ServiceResult<Option<BoardChange>> {
        match self.board.apply_drop(gesture)? {
            DropOutcome::Cancelled | DropOutcome::Unchanged => Ok(None),
            DropOutcome::Moved { task, to, .. } => Ok(Some(BoardChange {
                task,
                notice: BoardNotice::moved(to.bucket),
            })),
        }
    }
}

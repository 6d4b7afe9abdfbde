//! Task domain model for the kanban board.
//!
//! # Responsibility
//! - Define the task record, its status buckets and priority levels.
//! - Provide the id-less draft payload submitted by create/edit forms.
//!
//! # Invariants
//! - `id` is assigned once by the board and never changes.
//! - `status` always names the bucket the task is stored in.
//! - `due_date` is opaque text; the core never parses it.

use crate::model::form::FormErrors;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a board task.
pub type TaskId = Uuid;

/// Board bucket a task belongs to.
///
/// Serialized with the bucket keys used by the board wire shape.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Buckets in column order.
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Done];

    /// Stable bucket key.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Column heading shown to users.
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Task urgency. Also used by projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

/// One unit of work on the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: Priority,
    pub due_date: String,
    pub status: TaskStatus,
}

impl Task {
    /// Builds a task from a submitted draft under an existing identity.
    pub fn from_draft(id: TaskId, draft: TaskDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            assignee: draft.assignee,
            priority: draft.priority,
            due_date: draft.due_date,
            status: draft.status,
        }
    }

    /// Returns the editable fields, used to prefill the edit form.
    pub fn to_draft(&self) -> TaskDraft {
        TaskDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            assignee: self.assignee.clone(),
            priority: self.priority,
            due_date: self.due_date.clone(),
            status: self.status,
        }
    }
}

/// Task payload without identity, as produced by the create/edit form.
///
/// `Default` matches a freshly opened create form: blank text, `Medium`
/// priority, `todo` status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub priority: Priority,
    pub due_date: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, status: TaskStatus) -> Self {
        Self {
            title: title.into(),
            status,
            ..Self::default()
        }
    }

    /// Applies the task form's required-field rules.
    ///
    /// The board itself accepts any draft; this runs at the form boundary.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("title", &self.title, "Task title is required");
        errors.require("description", &self.description, "Description is required");
        errors.require("assignee", &self.assignee, "Assignee is required");
        errors.require("dueDate", &self.due_date, "Due date is required");
        errors.into_result()
    }
}

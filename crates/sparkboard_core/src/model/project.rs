//! Project domain model.
//!
//! # Invariants
//! - `progress` is a percentage in `0..=100`.
//! - A project always has at least one team member.

use crate::model::form::FormErrors;
use crate::model::task::Priority;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Catalog-assigned project identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub u32);

impl Display for ProjectId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Project lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: String,
    pub team_members: u32,
    pub progress: u8,
    pub priority: Priority,
}

impl Project {
    pub fn from_draft(id: ProjectId, draft: ProjectDraft) -> Self {
        Self {
            id,
            title: draft.title.trim().to_string(),
            description: draft.description,
            status: draft.status,
            due_date: draft.due_date,
            team_members: draft.team_members,
            progress: draft.progress,
            priority: draft.priority,
        }
    }

    pub fn to_draft(&self) -> ProjectDraft {
        ProjectDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
            due_date: self.due_date.clone(),
            team_members: self.team_members,
            progress: self.progress,
            priority: self.priority,
        }
    }

    /// Whether the project still counts as active work.
    pub fn is_active(&self) -> bool {
        self.status != ProjectStatus::Completed
    }
}

/// Project form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub status: ProjectStatus,
    pub due_date: String,
    pub team_members: u32,
    pub progress: u8,
    pub priority: Priority,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: ProjectStatus::Planning,
            due_date: String::new(),
            team_members: 1,
            progress: 0,
            priority: Priority::Medium,
        }
    }
}

impl ProjectDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    /// Applies the project form rules, reporting every failing field.
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("title", &self.title, "Project title is required");
        if self.team_members < 1 {
            errors.insert("teamMembers", "Team members must be at least 1");
        }
        if self.progress > 100 {
            errors.insert("progress", "Progress must be between 0 and 100");
        }
        errors.into_result()
    }
}

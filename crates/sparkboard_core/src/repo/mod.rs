//! In-memory stores for the dashboard's project, team and calendar views.
//!
//! # Responsibility
//! - Own session state for each view behind a small CRUD surface.
//! - Enforce form validation on every write path.
//!
//! # Invariants
//! - Write paths call the draft's `validate()` before mutating.
//! - Ids are allocated as `max(existing) + 1` and never change afterwards.
//! - Missing ids surface as `NotFound` errors, never silent no-ops.

pub mod calendar_repo;
pub mod member_repo;
pub mod project_repo;

use crate::model::event::EventId;
use crate::model::form::FormErrors;
use crate::model::member::MemberId;
use crate::model::project::ProjectId;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error for project/team/calendar operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(FormErrors),
    ProjectNotFound(ProjectId),
    MemberNotFound(MemberId),
    EventNotFound(EventId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid form input: {err}"),
            Self::ProjectNotFound(id) => write!(f, "project not found: {id}"),
            Self::MemberNotFound(id) => write!(f, "team member not found: {id}"),
            Self::EventNotFound(id) => write!(f, "calendar event not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            _ => None,
        }
    }
}

impl From<FormErrors> for RepoError {
    fn from(value: FormErrors) -> Self {
        Self::Validation(value)
    }
}

/// Next id for a store whose current ids are `ids`.
pub(crate) fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max.saturating_add(1))
}

/// Case-insensitive substring match used by list filters and search.
pub(crate) fn contains_folded(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

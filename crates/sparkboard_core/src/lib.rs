//! Core domain logic for the Sparkboard project dashboard.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use board::seed::seed_task_id;
pub use board::{BoardError, BoardResult, DragGesture, DragLocation, DropOutcome, TaskBoard};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::event::{CalendarEvent, EventDraft, EventId, EventKind};
pub use model::form::FormErrors;
pub use model::member::{MemberDraft, MemberId, MemberStatus, TeamMember};
pub use model::project::{Project, ProjectDraft, ProjectId, ProjectStatus};
pub use model::task::{Priority, Task, TaskDraft, TaskId, TaskStatus};
pub use repo::calendar_repo::Calendar;
pub use repo::member_repo::TeamRoster;
pub use repo::project_repo::ProjectCatalog;
pub use repo::{RepoError, RepoResult};
pub use search::global::{search_all, SearchCategory, SearchHit, SearchQuery, SearchTarget};
pub use service::board_service::{
    BoardChange, BoardColumn, BoardNotice, BoardService, BoardServiceError, ConfirmDialog,
    DeleteOutcome, DeletePrompt, ServiceResult,
};
pub use service::dashboard::{Dashboard, DashboardStats};

/// Minimal health-check API for integration checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

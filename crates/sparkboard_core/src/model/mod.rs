//! Dashboard domain model.
//!
//! # Responsibility
//! - Define the records shown by board, project, team and calendar views.
//! - Keep form payloads (drafts) separate from identified records.
//!
//! # Invariants
//! - Identities are assigned by the owning store, never by drafts.

pub mod event;
pub mod form;
pub mod member;
pub mod project;
pub mod task;

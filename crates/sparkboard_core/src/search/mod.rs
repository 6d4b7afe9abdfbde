//! Cross-view search entry points.
//!
//! # Responsibility
//! - Match one query against projects, team members, tasks and events.
//! - Keep result shaping (titles, descriptions, grouping) inside core.

pub mod global;

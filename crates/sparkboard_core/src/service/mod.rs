//! Use-case services consumed by presentation code.
//!
//! # Responsibility
//! - Put form validation and delete confirmation in front of the board.
//! - Aggregate the per-view stores into one session dashboard.

pub mod board_service;
pub mod dashboard;

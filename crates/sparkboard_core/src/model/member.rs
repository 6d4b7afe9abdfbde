//! Team member domain model.

use crate::model::form::FormErrors;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Avatar assigned when the member form leaves the field untouched.
pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(pub u32);

impl Display for MemberId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Presence shown next to a member card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemberStatus {
    #[default]
    Active,
    Away,
    Offline,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: MemberId,
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub status: MemberStatus,
    pub projects: u32,
}

impl TeamMember {
    pub fn from_draft(id: MemberId, draft: MemberDraft) -> Self {
        Self {
            id,
            name: draft.name.trim().to_string(),
            role: draft.role.trim().to_string(),
            email: draft.email.trim().to_string(),
            phone: draft.phone.trim().to_string(),
            avatar: draft.avatar,
            status: draft.status,
            projects: draft.projects,
        }
    }

    pub fn to_draft(&self) -> MemberDraft {
        MemberDraft {
            name: self.name.clone(),
            role: self.role.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            avatar: self.avatar.clone(),
            status: self.status,
            projects: self.projects,
        }
    }
}

/// Member form payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberDraft {
    pub name: String,
    pub role: String,
    pub email: String,
    pub phone: String,
    pub avatar: String,
    pub status: MemberStatus,
    pub projects: u32,
}

impl Default for MemberDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            role: String::new(),
            email: String::new(),
            phone: String::new(),
            avatar: DEFAULT_AVATAR_URL.to_string(),
            status: MemberStatus::Active,
            projects: 0,
        }
    }
}

impl MemberDraft {
    pub fn validate(&self) -> Result<(), FormErrors> {
        let mut errors = FormErrors::new();
        errors.require("name", &self.name, "Full name is required");
        errors.require("email", &self.email, "Email is required");
        errors.require("phone", &self.phone, "Phone is required");
        errors.into_result()
    }
}

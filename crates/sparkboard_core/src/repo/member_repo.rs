//! Team roster.

use crate::model::member::{MemberDraft, MemberId, MemberStatus, TeamMember};
use crate::repo::{next_id, RepoError, RepoResult};
use log::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamRoster {
    members: Vec<TeamMember>,
}

impl TeamRoster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded() -> Self {
        let seeds = [
            (
                "Sarah Johnson",
                "Project Manager",
                "sarah@mindsparks.com",
                "+1 (555) 123-4567",
                "https://images.unsplash.com/photo-1494790108755-2616b612d5c1?w=150&h=150&fit=crop&crop=face",
                MemberStatus::Active,
                5,
            ),
            (
                "Mike Chen",
                "Frontend Developer",
                "mike@mindsparks.com",
                "+1 (555) 234-5678",
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
                MemberStatus::Active,
                3,
            ),
            (
                "Emily Rodriguez",
                "UI/UX Designer",
                "emily@mindsparks.com",
                "+1 (555) 345-6789",
                "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=face",
                MemberStatus::Active,
                4,
            ),
            (
                "David Wilson",
                "Backend Developer",
                "david@mindsparks.com",
                "+1 (555) 456-7890",
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
                MemberStatus::Away,
                2,
            ),
        ];

        let members = seeds
            .into_iter()
            .zip(1..)
            .map(
                |((name, role, email, phone, avatar, status, projects), id)| TeamMember {
                    id: MemberId(id),
                    name: name.to_string(),
                    role: role.to_string(),
                    email: email.to_string(),
                    phone: phone.to_string(),
                    avatar: avatar.to_string(),
                    status,
                    projects,
                },
            )
            .collect();
        Self { members }
    }

    pub fn list(&self) -> &[TeamMember] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, id: MemberId) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id == id)
    }

    pub fn add(&mut self, draft: MemberDraft) -> RepoResult<TeamMember> {
        draft.validate()?;
        let id = MemberId(next_id(self.members.iter().map(|member| member.id.0)));
        let member = TeamMember::from_draft(id, draft);
        self.members.push(member.clone());
        info!("event=member_added module=team status=ok member_id={id}");
        Ok(member)
    }

    pub fn edit(&mut self, id: MemberId, draft: MemberDraft) -> RepoResult<TeamMember> {
        draft.validate()?;
        let slot = self
            .members
            .iter_mut()
            .find(|member| member.id == id)
            .ok_or_else(|| {
                warn!("event=member_edit module=team status=not_found member_id={id}");
                RepoError::MemberNotFound(id)
            })?;
        *slot = TeamMember::from_draft(id, draft);
        info!("event=member_edited module=team status=ok member_id={id}");
        Ok(slot.clone())
    }

    pub fn remove(&mut self, id: MemberId) -> RepoResult<TeamMember> {
        let index = self
            .members
            .iter()
            .position(|member| member.id == id)
            .ok_or_else(|| {
                warn!("event=member_remove module=team status=not_found member_id={id}");
                RepoError::MemberNotFound(id)
            })?;
        let removed = self.members.remove(index);
        info!("event=member_removed module=team status=ok member_id={id}");
        Ok(removed)
    }
}

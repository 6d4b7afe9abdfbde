//! Project catalog.
//!
//! # Invariants
//! - Catalog order is insertion order; edits keep a project's position.
//! - Filtering never reorders.

use crate::model::project::{Project, ProjectDraft, ProjectId, ProjectStatus};
use crate::model::task::Priority;
use crate::repo::{contains_folded, next_id, RepoError, RepoResult};
use log::{info, warn};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
}

impl ProjectCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog with the dashboard's starting projects.
    pub fn seeded() -> Self {
        let seeds = [
            (
                "MindSparks Website Redesign",
                "Complete overhaul of the company website with modern design and improved UX",
                ProjectStatus::InProgress,
                "Jan 30, 2024",
                5,
                75,
                Priority::High,
            ),
            (
                "Mobile App Development",
                "React Native mobile application for iOS and Android platforms",
                ProjectStatus::InProgress,
                "Feb 15, 2024",
                3,
                45,
                Priority::High,
            ),
            (
                "Brand Identity Update",
                "Refresh brand guidelines, logo, and marketing materials",
                ProjectStatus::Completed,
                "Jan 10, 2024",
                4,
                100,
                Priority::Medium,
            ),
            (
                "Data Analytics Platform",
                "Build internal analytics dashboard for business intelligence",
                ProjectStatus::Planning,
                "Mar 1, 2024",
                6,
                15,
                Priority::Low,
            ),
        ];

        let projects = seeds
            .into_iter()
            .zip(1..)
            .map(
                |((title, description, status, due_date, team_members, progress, priority), id)| {
                    Project {
                        id: ProjectId(id),
                        title: title.to_string(),
                        description: description.to_string(),
                        status,
                        due_date: due_date.to_string(),
                        team_members,
                        progress,
                        priority,
                    }
                },
            )
            .collect();
        Self { projects }
    }

    pub fn list(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Validates and appends a new project.
    pub fn add(&mut self, draft: ProjectDraft) -> RepoResult<Project> {
        draft.validate()?;
        let id = ProjectId(next_id(self.projects.iter().map(|project| project.id.0)));
        let project = Project::from_draft(id, draft);
        self.projects.push(project.clone());
        info!("event=project_added module=projects status=ok project_id={id}");
        Ok(project)
    }

    /// Validates and replaces a project in place.
    pub fn edit(&mut self, id: ProjectId, draft: ProjectDraft) -> RepoResult<Project> {
        draft.validate()?;
        let slot = self
            .projects
            .iter_mut()
            .find(|project| project.id == id)
            .ok_or_else(|| {
                warn!("event=project_edit module=projects status=not_found project_id={id}");
                RepoError::ProjectNotFound(id)
            })?;
        *slot = Project::from_draft(id, draft);
        info!("event=project_edited module=projects status=ok project_id={id}");
        Ok(slot.clone())
    }

    pub fn delete(&mut self, id: ProjectId) -> RepoResult<Project> {
        let index = self
            .projects
            .iter()
            .position(|project| project.id == id)
            .ok_or(RepoError::ProjectNotFound(id))?;
        let removed = self.projects.remove(index);
        info!("event=project_deleted module=projects status=ok project_id={id}");
        Ok(removed)
    }

    /// Projects whose title or description contains `term`, ignoring case.
    ///
    /// A blank term matches every project.
    pub fn filter(&self, term: &str) -> Vec<&Project> {
        let needle = term.trim().to_lowercase();
        self.projects
            .iter()
            .filter(|project| {
                needle.is_empty()
                    || contains_folded(&project.title, &needle)
                    || contains_folded(&project.description, &needle)
            })
            .collect()
    }
}

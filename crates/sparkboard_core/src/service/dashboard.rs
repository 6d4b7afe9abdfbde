//! Session dashboard aggregate.
//!
//! # Responsibility
//! - Own one store per view for the lifetime of a session.
//! - Derive headline stats from live state.

use crate::model::task::TaskStatus;
use crate::repo::calendar_repo::Calendar;
use crate::repo::member_repo::TeamRoster;
use crate::repo::project_repo::ProjectCatalog;
use crate::service::board_service::BoardService;

/// Headline counters shown on the overview page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub active_projects: usize,
    pub team_members: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
}

#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    board: BoardService,
    projects: ProjectCatalog,
    team: TeamRoster,
    calendar: Calendar,
}

impl Dashboard {
    pub fn new(
        board: BoardService,
        projects: ProjectCatalog,
        team: TeamRoster,
        calendar: Calendar,
    ) -> Self {
        Self {
            board,
            projects,
            team,
            calendar,
        }
    }

    /// Dashboard with every view's starting data.
    pub fn seeded() -> Self {
        Self::new(
            BoardService::seeded(),
            ProjectCatalog::seeded(),
            TeamRoster::seeded(),
            Calendar::seeded(),
        )
    }

    pub fn board(&self) -> &BoardService {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut BoardService {
        &mut self.board
    }

    pub fn projects(&self) -> &ProjectCatalog {
        &self.projects
    }

    pub fn projects_mut(&mut self) -> &mut ProjectCatalog {
        &mut self.projects
    }

    pub fn team(&self) -> &TeamRoster {
        &self.team
    }

    pub fn team_mut(&mut self) -> &mut TeamRoster {
        &mut self.team
    }

    pub fn calendar(&self) -> &Calendar {
        &self.calendar
    }

    pub fn calendar_mut(&mut self) -> &mut Calendar {
        &mut self.calendar
    }

    pub fn stats(&self) -> DashboardStats {
        DashboardStats {
            active_projects: self
                .projects
                .list()
                .iter()
                .filter(|project| project.is_active())
                .count(),
            team_members: self.team.len(),
            completed_tasks: self.board.list_tasks(TaskStatus::Done).len(),
            in_progress_tasks: self.board.list_tasks(TaskStatus::InProgress).len(),
        }
    }
}

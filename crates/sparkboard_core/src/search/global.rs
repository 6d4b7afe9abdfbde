//! Dashboard-wide keyword search.
//!
//! # Invariants
//! - Blank queries return no hits.
//! - Hits are grouped by category (projects, team, tasks, calendar) and keep
//!   source order inside each group.
//! - Matching is a case-insensitive substring test on title or description.

use crate::model::event::EventId;
use crate::model::member::MemberId;
use crate::model::project::ProjectId;
use crate::model::task::TaskId;
use crate::repo::contains_folded;
use crate::service::dashboard::Dashboard;
use log::debug;

/// Result category, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SearchCategory {
    Projects,
    Team,
    Tasks,
    Calendar,
}

impl SearchCategory {
    pub fn label(self) -> &'static str {
        match self {
            Self::Projects => "Projects",
            Self::Team => "Team",
            Self::Tasks => "Tasks",
            Self::Calendar => "Calendar",
        }
    }
}

/// Identity of the record behind a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchTarget {
    Project(ProjectId),
    Member(MemberId),
    Task(TaskId),
    Event(EventId),
}

impl SearchTarget {
    pub fn category(self) -> SearchCategory {
        match self {
            Self::Project(_) => SearchCategory::Projects,
            Self::Member(_) => SearchCategory::Team,
            Self::Task(_) => SearchCategory::Tasks,
            Self::Event(_) => SearchCategory::Calendar,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    /// Restricts hits to one category.
    pub category: Option<SearchCategory>,
    /// Maximum number of hits to return.
    pub limit: usize,
}

impl SearchQuery {
    /// Query over every category with the default limit.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            category: None,
            limit: 50,
        }
    }

    pub fn in_category(mut self, category: SearchCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub target: SearchTarget,
    pub title: String,
    pub description: String,
}

impl SearchHit {
    pub fn category(&self) -> SearchCategory {
        self.target.category()
    }
}

/// Searches every dashboard view.
pub fn search_all(dashboard: &Dashboard, query: &SearchQuery) -> Vec<SearchHit> {
    let needle = query.text.trim().to_lowercase();
    if needle.is_empty() || query.limit == 0 {
        return Vec::new();
    }

    let projects = dashboard.projects().list().iter().map(|project| SearchHit {
        target: SearchTarget::Project(project.id),
        title: project.title.clone(),
        description: project.description.clone(),
    });
    let members = dashboard.team().list().iter().map(|member| SearchHit {
        target: SearchTarget::Member(member.id),
        title: member.name.clone(),
        description: format!("{} - {}", member.role, member.email),
    });
    let tasks = dashboard.board().board().iter().map(|task| SearchHit {
        target: SearchTarget::Task(task.id),
        title: task.title.clone(),
        description: task.description.clone(),
    });
    let events = dashboard.calendar().list().iter().map(|event| SearchHit {
        target: SearchTarget::Event(event.id),
        title: event.title.clone(),
        description: format!("{} {}", event.date, event.time),
    });

    let category = query.category;
    let hits: Vec<SearchHit> = projects
        .chain(members)
        .chain(tasks)
        .chain(events)
        .filter(|hit| category.is_none_or(|wanted| hit.category() == wanted))
        .filter(|hit| {
            contains_folded(&hit.title, &needle) || contains_folded(&hit.description, &needle)
        })
        .take(query.limit)
        .collect();

    debug!(
        "event=search module=search status=ok hits={} category={}",
        hits.len(),
        category.map_or("all", SearchCategory::label)
    );
    hits
}

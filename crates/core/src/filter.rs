//! Project filtering.
//!
//! A filter combines a free-text id query with optional exact-match facets
//! for priority and status. All three predicates are AND-combined and
//! unset facets are permissive, so the default filter matches everything.
//! Filtering is pure: identical inputs always yield identical results.

use crate::model::{Priority, Project, Status};

/// The current search/filter state of the dashboard table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    /// Case-insensitive substring match on the project id.
    pub id_query: String,
    pub priority: Option<Priority>,
    pub status: Option<Status>,
}

impl ProjectFilter {
    /// Whether a single project passes all three predicates.
    pub fn matches(&self, project: &Project) -> bool {
        self.matches_id(project)
            && self.priority.is_none_or(|p| project.priority == p)
            && self.status.is_none_or(|s| project.status == s)
    }

    fn matches_id(&self, project: &Project) -> bool {
        project
            .id
            .to_lowercase()
            .contains(&self.id_query.to_lowercase())
    }
}

/// Apply the filter, preserving store order.
pub fn filter_projects<'a>(projects: &'a [Project], filter: &ProjectFilter) -> Vec<&'a Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}

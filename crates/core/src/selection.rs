//! Detail-view selection binding.

use crate::model::Project;

/// Tracks the single project backing the detail drawer.
///
/// Closing the drawer keeps the remembered project; it is only replaced on
/// the next selection. That mirrors the observed dashboard behavior and is
/// cosmetic only, since the drawer is not rendered while closed.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    project: Option<Project>,
    open: bool,
}

impl Selection {
    /// Remember `project` and open the detail view.
    pub fn select(&mut self, project: Project) {
        self.project = Some(project);
        self.open = true;
    }

    /// Close the detail view without clearing the remembered project.
    pub fn clear(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The remembered project, whether or not the view is open.
    pub fn current(&self) -> Option<&Project> {
        self.project.as_ref()
    }

    /// The project to render in the detail view: set only while open.
    pub fn viewed(&self) -> Option<&Project> {
        if self.open { self.project.as_ref() } else { None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Priority, Status, User};
    use chrono::NaiveDate;

    fn project(id: &str) -> Project {
        Project {
            id: id.to_string(),
            title: String::new(),
            description: String::new(),
            team_members: vec![],
            priority: Priority::Medium,
            status: Status::Pending,
            progress: 0,
            tasks_completed: 0,
            total_tasks: 20,
            deadline: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
            budget: 0,
            created_by: User::local(),
        }
    }

    #[test]
    fn select_opens_with_the_project() {
        let mut selection = Selection::default();
        selection.select(project("PRJ-001"));

        assert!(selection.is_open());
        assert_eq!(selection.viewed().unwrap().id, "PRJ-001");
    }

    #[test]
    fn clear_closes_but_remembers() {
        let mut selection = Selection::default();
        selection.select(project("PRJ-001"));
        selection.clear();

        assert!(!selection.is_open());
        assert!(selection.viewed().is_none());
        // Stale reference survives until the next select.
        assert_eq!(selection.current().unwrap().id, "PRJ-001");
    }

    #[test]
    fn reselect_replaces_the_remembered_project() {
        let mut selection = Selection::default();
        selection.select(project("PRJ-001"));
        selection.clear();
        selection.select(project("PRJ-002"));

        assert_eq!(selection.viewed().unwrap().id, "PRJ-002");
    }
}

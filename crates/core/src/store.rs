//! In-memory project store.
//!
//! Holds the ordered project collection backing the dashboard table. The
//! only mutations are a wholesale initialize after the bulk load and a
//! prepend-on-create; there is no update or delete.

use chrono::NaiveDate;

use crate::error::CoreError;
use crate::model::{CreateProjectInput, Project, User};

/// Ordered project collection, most-recent-first for created projects.
///
/// Ids are assigned from a monotonic counter seeded by the bulk load, so
/// they stay unique no matter how the collection is later filtered or
/// paginated.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    next_seq: u32,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents wholesale. Used once, after bulk generation.
    ///
    /// The id counter restarts at the loaded count; generated projects
    /// already carry ids from their post numbers.
    pub fn initialize(&mut self, projects: Vec<Project>) {
        self.next_seq = projects.len() as u32;
        self.projects = projects;
    }

    /// Create a project from form input and prepend it.
    ///
    /// Validates the input (non-blank title), resolves the selected team
    /// member ids against the user pool (unknown ids are dropped), assigns
    /// the next id from the monotonic counter, and returns the new record.
    pub fn create(
        &mut self,
        input: CreateProjectInput,
        users: &[User],
        today: NaiveDate,
    ) -> Result<&Project, CoreError> {
        input.check()?;

        let team_members: Vec<User> = users
            .iter()
            .filter(|u| input.team_member_ids.contains(&u.id))
            .cloned()
            .collect();

        self.next_seq += 1;
        let id = format!("PRJ-{:03}", self.next_seq);
        let project = Project::from_input(id, input, team_members, today);

        self.projects.insert(0, project);
        Ok(&self.projects[0])
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

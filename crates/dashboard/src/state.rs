//! The dashboard state machine.
//!
//! Owns the project store, the filter, the current page, and the selection
//! binding, and enforces the invariants between them: the page resets to 1
//! whenever the filter changes and is clamped whenever the filtered set
//! shrinks, so an empty non-first page is never reachable.
//!
//! Loads are tagged with a generation counter. A result carrying a
//! superseded generation is discarded, which guards against a slow fetch
//! applying itself over a newer load.

use chrono::NaiveDate;
use taskflow_core::error::CoreError;
use taskflow_core::filter::{filter_projects, ProjectFilter};
use taskflow_core::model::{CreateProjectInput, Priority, Project, Status, User};
use taskflow_core::pagination;
use taskflow_core::selection::Selection;
use taskflow_core::stats::DashboardStats;
use taskflow_core::store::ProjectStore;

#[derive(Debug, Default)]
pub struct DashboardState {
    store: ProjectStore,
    users: Vec<User>,
    filter: ProjectFilter,
    page: usize,
    selection: Selection,
    loading: bool,
    load_generation: u64,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    // -- Loading ------------------------------------------------------------

    /// Start a load: raises the loading flag and returns the generation
    /// token that must accompany the eventual result.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.load_generation
    }

    /// Apply a successful load. Stale generations are discarded.
    ///
    /// Returns whether the result was applied.
    pub fn complete_load(&mut self, generation: u64, users: Vec<User>, projects: Vec<Project>) -> bool {
        if !self.accept_generation(generation) {
            return false;
        }
        self.users = users;
        self.store.initialize(projects);
        self.page = 1;
        self.loading = false;
        true
    }

    /// Record a failed load: clears the loading flag and leaves the store
    /// empty. Stale generations are discarded.
    pub fn fail_load(&mut self, generation: u64) -> bool {
        if !self.accept_generation(generation) {
            return false;
        }
        self.loading = false;
        true
    }

    fn accept_generation(&self, generation: u64) -> bool {
        if generation != self.load_generation {
            tracing::debug!(
                generation,
                current = self.load_generation,
                "Discarding stale load result",
            );
            return false;
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    // -- Filtering ----------------------------------------------------------

    pub fn filter(&self) -> &ProjectFilter {
        &self.filter
    }

    pub fn set_id_query(&mut self, query: impl Into<String>) {
        self.filter.id_query = query.into();
        self.page = 1;
    }

    pub fn set_priority(&mut self, priority: Option<Priority>) {
        self.filter.priority = priority;
        self.page = 1;
    }

    pub fn set_status(&mut self, status: Option<Status>) {
        self.filter.status = status;
        self.page = 1;
    }

    /// The filtered list in store order.
    pub fn filtered(&self) -> Vec<&Project> {
        filter_projects(self.store.projects(), &self.filter)
    }

    // -- Pagination ---------------------------------------------------------

    /// Current 1-based page, always within `[1, max(1, total_pages)]`.
    pub fn page(&self) -> usize {
        pagination::clamp_page(self.page, self.total_pages())
    }

    pub fn total_pages(&self) -> usize {
        pagination::total_pages(self.filtered().len())
    }

    /// The projects visible on the current page.
    pub fn page_items(&self) -> Vec<&Project> {
        let filtered = self.filtered();
        pagination::page_slice(&filtered, self.page()).to_vec()
    }

    pub fn page_window(&self) -> std::ops::RangeInclusive<usize> {
        pagination::page_window(self.page(), self.total_pages())
    }

    /// 1-based `(first, last, total)` for the "Showing X-Y of N" label.
    pub fn showing(&self) -> (usize, usize, usize) {
        let count = self.filtered().len();
        let (first, last) = pagination::showing_range(self.page(), count);
        (first, last, count)
    }

    /// Jump to a page, clamped into range.
    pub fn set_page(&mut self, page: usize) {
        self.page = pagination::clamp_page(page, self.total_pages());
    }

    /// Go back one page; a no-op on page 1.
    pub fn prev_page(&mut self) {
        self.page = pagination::prev_page(self.page());
    }

    /// Advance one page; a no-op on the last page.
    pub fn next_page(&mut self) {
        self.page = pagination::next_page(self.page(), self.total_pages());
    }

    // -- Creation -----------------------------------------------------------

    /// Create a project from form input and prepend it to the store.
    ///
    /// The current page is kept; the new record appears on page 1 of an
    /// unfiltered view.
    pub fn create_project(
        &mut self,
        input: CreateProjectInput,
        today: NaiveDate,
    ) -> Result<Project, CoreError> {
        let project = self.store.create(input, &self.users, today)?.clone();
        tracing::info!(id = %project.id, title = %project.title, "Project created");
        Ok(project)
    }

    // -- Selection ----------------------------------------------------------

    /// Open the detail view for a project by id.
    ///
    /// Returns false when no project with that id exists.
    pub fn select_project(&mut self, id: &str) -> bool {
        let Some(project) = self.store.projects().iter().find(|p| p.id == id) else {
            return false;
        };
        let project = project.clone();
        self.selection.select(project);
        true
    }

    /// Close the detail view.
    pub fn close_detail(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // -- Stats --------------------------------------------------------------

    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_projects(self.store.projects())
    }

    pub fn project_count(&self) -> usize {
        self.store.len()
    }
}

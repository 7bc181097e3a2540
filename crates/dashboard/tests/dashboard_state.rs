//! End-to-end tests for the dashboard state machine: load, filter,
//! paginate, create, select.

use chrono::NaiveDate;
use taskflow_core::model::{CreateProjectInput, Priority, Project, Status, User};
use taskflow_dashboard::state::DashboardState;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
}

fn users(n: i64) -> Vec<User> {
    (1..=n)
        .map(|id| User {
            id,
            name: format!("User {id}"),
            email: format!("user{id}@example.com"),
        })
        .collect()
}

fn project(seq: usize, priority: Priority, status: Status) -> Project {
    Project {
        id: format!("PRJ-{seq:03}"),
        title: format!("Project {seq}"),
        description: String::new(),
        team_members: users(3),
        priority,
        status,
        progress: match status {
            Status::Completed => 100,
            Status::Active => 75,
            Status::Pending => 25,
        },
        tasks_completed: 5,
        total_tasks: 20,
        deadline: today(),
        budget: 10_000,
        created_by: User::local(),
    }
}

/// Twelve projects: odd sequence numbers are high/active, even are
/// medium/pending.
fn loaded_state() -> DashboardState {
    let mut state = DashboardState::new();
    let generation = state.begin_load();
    let projects: Vec<Project> = (1..=12)
        .map(|i| {
            if i % 2 == 1 {
                project(i, Priority::High, Status::Active)
            } else {
                project(i, Priority::Medium, Status::Pending)
            }
        })
        .collect();
    assert!(state.complete_load(generation, users(5), projects));
    state
}

// -- Loading ----------------------------------------------------------------

#[test]
fn load_populates_and_clears_loading() {
    let state = loaded_state();
    assert!(!state.is_loading());
    assert_eq!(state.project_count(), 12);
    assert_eq!(state.page(), 1);
}

#[test]
fn failed_load_leaves_table_empty() {
    let mut state = DashboardState::new();
    let generation = state.begin_load();
    assert!(state.is_loading());

    assert!(state.fail_load(generation));
    assert!(!state.is_loading());
    assert_eq!(state.project_count(), 0);
    assert_eq!(state.showing(), (0, 0, 0));
}

#[test]
fn stale_load_result_is_discarded() {
    let mut state = DashboardState::new();
    let first = state.begin_load();
    let second = state.begin_load();

    // The slow first load finishes after a newer load began.
    assert!(!state.complete_load(first, users(5), vec![project(1, Priority::High, Status::Active)]));
    assert_eq!(state.project_count(), 0);
    assert!(state.is_loading());

    assert!(state.complete_load(second, users(5), vec![project(2, Priority::High, Status::Active)]));
    assert_eq!(state.project_count(), 1);
    assert!(!state.is_loading());

    // A stale failure cannot clobber the applied result either.
    assert!(!state.fail_load(first));
    assert_eq!(state.project_count(), 1);
}

// -- Pagination -------------------------------------------------------------

#[test]
fn twelve_projects_paginate_five_five_two() {
    let mut state = loaded_state();

    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.page_window(), 1..=3);
    assert_eq!(state.page_items().len(), 5);
    assert_eq!(state.showing(), (1, 5, 12));

    state.next_page();
    assert_eq!(state.page_items().len(), 5);

    state.next_page();
    assert_eq!(state.page_items().len(), 2);
    assert_eq!(state.showing(), (11, 12, 12));

    // No-op at the last page.
    state.next_page();
    assert_eq!(state.page(), 3);
}

#[test]
fn prev_at_first_page_is_a_noop() {
    let mut state = loaded_state();
    state.prev_page();
    assert_eq!(state.page(), 1);
}

#[test]
fn set_page_clamps_out_of_range_jumps() {
    let mut state = loaded_state();
    state.set_page(99);
    assert_eq!(state.page(), 3);
    state.set_page(0);
    assert_eq!(state.page(), 1);
}

// -- Filtering --------------------------------------------------------------

#[test]
fn filter_change_resets_to_first_page() {
    let mut state = loaded_state();
    state.set_page(3);

    state.set_priority(Some(Priority::High));
    assert_eq!(state.page(), 1);
    // Six high-priority projects -> two pages.
    assert_eq!(state.total_pages(), 2);
}

#[test]
fn shrinking_filter_never_strands_the_page() {
    let mut state = loaded_state();
    state.set_priority(Some(Priority::High));
    state.set_page(2);

    // Narrow further: only one match remains.
    state.set_id_query("PRJ-001");
    assert_eq!(state.page(), 1);
    assert_eq!(state.page_items().len(), 1);
}

#[test]
fn id_and_facet_filters_are_and_combined() {
    let mut state = loaded_state();

    // PRJ-002 exists but is medium priority, so the high facet excludes it.
    state.set_id_query("PRJ-002");
    state.set_priority(Some(Priority::High));
    assert!(state.page_items().is_empty());
    assert_eq!(state.showing(), (0, 0, 0));
}

#[test]
fn facet_filters_are_permissive_when_unset() {
    let mut state = loaded_state();
    state.set_priority(Some(Priority::High));
    state.set_priority(None);
    assert_eq!(state.filtered().len(), 12);
}

// -- Creation ---------------------------------------------------------------

#[test]
fn created_project_prepends_with_next_id() {
    let mut state = loaded_state();

    let input = CreateProjectInput {
        title: "Launch".to_string(),
        ..Default::default()
    };
    let created = state.create_project(input, today()).unwrap();

    assert_eq!(created.id, "PRJ-013");
    assert_eq!(created.status, Status::Pending);
    assert_eq!(created.progress, 0);
    assert_eq!(created.tasks_completed, 0);
    assert!(created.team_members.is_empty());

    // The new record leads the unfiltered first page.
    assert_eq!(state.page_items()[0].id, "PRJ-013");
    assert_eq!(state.total_pages(), 3);
    assert_eq!(state.showing(), (1, 5, 13));
}

#[test]
fn create_rejects_blank_titles() {
    let mut state = loaded_state();
    let input = CreateProjectInput {
        title: "  ".to_string(),
        ..Default::default()
    };
    assert!(state.create_project(input, today()).is_err());
    assert_eq!(state.project_count(), 12);
}

#[test]
fn create_resolves_team_against_loaded_users() {
    let mut state = loaded_state();
    let input = CreateProjectInput {
        title: "Launch".to_string(),
        team_member_ids: vec![1, 4, 77],
        ..Default::default()
    };
    let created = state.create_project(input, today()).unwrap();
    let ids: Vec<_> = created.team_members.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![1, 4]);
}

#[test]
fn created_project_is_reachable_through_the_filter() {
    let mut state = loaded_state();
    let input = CreateProjectInput {
        title: "Launch".to_string(),
        team_member_ids: vec![2],
        ..Default::default()
    };
    state.create_project(input, today()).unwrap();

    // The same view can immediately narrow down to the new record.
    state.set_id_query("PRJ-013".to_string());
    let rows = state.page_items();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].title, "Launch");
    assert_eq!(state.showing(), (1, 1, 1));
}

// -- Selection --------------------------------------------------------------

#[test]
fn row_selection_drives_the_detail_view() {
    let mut state = loaded_state();

    assert!(state.select_project("PRJ-007"));
    assert_eq!(state.selection().viewed().unwrap().id, "PRJ-007");

    state.close_detail();
    assert!(state.selection().viewed().is_none());
    // Remembered until the next selection.
    assert_eq!(state.selection().current().unwrap().id, "PRJ-007");
}

#[test]
fn selecting_an_unknown_id_is_a_noop() {
    let mut state = loaded_state();
    assert!(!state.select_project("PRJ-999"));
    assert!(state.selection().viewed().is_none());
}

// -- Stats ------------------------------------------------------------------

#[test]
fn stats_track_the_store() {
    let state = loaded_state();
    let stats = state.stats();
    assert_eq!(stats.active_projects, 6);
    assert_eq!(stats.total_tasks, 240);
    assert_eq!(stats.team_members, 3);
    assert_eq!(stats.completion_rate, 0);
}

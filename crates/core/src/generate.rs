//! Synthetic project generation.
//!
//! Maps raw posts from the upstream test API into fully populated
//! [`Project`] records with randomized but constrained fields. The RNG is
//! injected so tests can drive generation with a seeded generator.

use chrono::{Duration, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use crate::error::CoreError;
use crate::model::{Priority, Project, Status, User, TOTAL_TASKS};
use crate::types::{PostId, UserId};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest generated team.
pub const MIN_TEAM_SIZE: usize = 2;

/// Largest generated team.
pub const MAX_TEAM_SIZE: usize = 5;

/// Earliest deadline offset from today, in days.
pub const MIN_DEADLINE_DAYS: i64 = 10;

/// Latest deadline offset from today, in days.
pub const MAX_DEADLINE_DAYS: i64 = 89;

/// Budget floor shared by all generated projects.
pub const BASE_BUDGET: i64 = 10_000;

/// Per-post budget increment.
pub const BUDGET_PER_POST: i64 = 1_000;

/// Priority cycle indexed by `post.id % 3`.
const PRIORITY_CYCLE: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// A post as returned by the upstream test API.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPost {
    pub id: PostId,
    #[serde(rename = "userId")]
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

// ---------------------------------------------------------------------------
// Generation
// ---------------------------------------------------------------------------

/// Generate one project from a raw post and the fetched user pool.
///
/// Randomized fields: team roster (unbiased partial Fisher-Yates sample of
/// 2-5 users, clamped to the pool size), progress (0-100, with status
/// derived from it), and deadline (today + 10-89 days). Everything else is
/// deterministic in the post: id, title/description, priority cycle, and
/// budget.
///
/// The creator is `users[post.user_id - 1]`, falling back to the first user
/// when the post references an id outside the pool. An empty pool is a
/// validation error; the caller is expected to skip generation entirely
/// when the fetch produced no users.
pub fn generate_project(
    post: &RawPost,
    users: &[User],
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<Project, CoreError> {
    let first = users
        .first()
        .ok_or_else(|| CoreError::Validation("cannot generate projects from an empty user pool".to_string()))?;

    let team_size = rng.random_range(MIN_TEAM_SIZE..=MAX_TEAM_SIZE).min(users.len());
    let mut pool: Vec<&User> = users.iter().collect();
    let (picked, _) = pool.partial_shuffle(rng, team_size);
    let team_members: Vec<User> = picked.iter().map(|u| (*u).clone()).collect();

    let progress: i32 = rng.random_range(0..=100);
    let deadline = today + Duration::days(rng.random_range(MIN_DEADLINE_DAYS..=MAX_DEADLINE_DAYS));

    let created_by = usize::try_from(post.user_id - 1)
        .ok()
        .and_then(|i| users.get(i))
        .unwrap_or(first)
        .clone();

    Ok(Project {
        id: format!("PRJ-{:03}", post.id),
        title: post.title.clone(),
        description: post.body.clone(),
        team_members,
        priority: PRIORITY_CYCLE[post.id.rem_euclid(3) as usize],
        status: Status::from_progress(progress),
        progress,
        tasks_completed: progress / 5,
        total_tasks: TOTAL_TASKS,
        deadline,
        budget: BASE_BUDGET + post.id * BUDGET_PER_POST,
        created_by,
    })
}

/// Generate one project per post, in post order.
pub fn generate_projects(
    posts: &[RawPost],
    users: &[User],
    today: NaiveDate,
    rng: &mut impl Rng,
) -> Result<Vec<Project>, CoreError> {
    posts
        .iter()
        .map(|post| generate_project(post, users, today, rng))
        .collect()
}

//! Project and user entity models and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::types::UserId;

/// Fixed number of tasks every project is sized at.
pub const TOTAL_TASKS: i32 = 20;

/// Flat budget assigned to user-created projects.
pub const USER_PROJECT_BUDGET: i64 = 5_000;

/// A user as returned by the upstream test API.
///
/// Fetched once at startup and never mutated. Projects reference users by
/// value; there is no delete path, so no ownership bookkeeping is needed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

impl User {
    /// The stand-in creator attached to locally created projects.
    pub fn local() -> Self {
        Self {
            id: 1,
            name: "You".to_string(),
            email: "you@example.com".to_string(),
        }
    }
}

/// Project priority. Cycles deterministically by post id for generated
/// projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(CoreError::Validation(format!(
                "Invalid priority '{other}'. Must be one of: high, medium, low"
            ))),
        }
    }
}

/// Project status. Derived from progress for generated projects; always
/// [`Status::Pending`] for user-created ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Pending,
    Completed,
}

impl Status {
    /// Derivation rule for generated projects: 100 is completed, above 50
    /// is active, everything else is pending.
    pub fn from_progress(progress: i32) -> Self {
        if progress == 100 {
            Status::Completed
        } else if progress > 50 {
            Status::Active
        } else {
            Status::Pending
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Pending => "pending",
            Status::Completed => "completed",
        }
    }
}

impl std::str::FromStr for Status {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Status::Active),
            "pending" => Ok(Status::Pending),
            "completed" => Ok(Status::Completed),
            other => Err(CoreError::Validation(format!(
                "Invalid status '{other}'. Must be one of: active, pending, completed"
            ))),
        }
    }
}

/// A project record as rendered in the dashboard table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Display id, `PRJ-` followed by a 3-digit zero-padded sequence.
    pub id: String,
    pub title: String,
    pub description: String,
    /// Ordered team roster; 2-5 members for generated projects.
    pub team_members: Vec<User>,
    pub priority: Priority,
    pub status: Status,
    /// Percent complete, 0-100.
    pub progress: i32,
    pub tasks_completed: i32,
    pub total_tasks: i32,
    /// Calendar date only; time of day is discarded.
    pub deadline: NaiveDate,
    pub budget: i64,
    pub created_by: User,
}

impl Project {
    /// Build a user-created project from validated form input.
    ///
    /// User-created projects are always `Pending` with zero progress
    /// regardless of any other field, unlike generated projects whose
    /// status is derived from progress.
    pub fn from_input(
        id: String,
        input: CreateProjectInput,
        team_members: Vec<User>,
        today: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: input.title,
            description: input.description,
            team_members,
            priority: input.priority,
            status: Status::Pending,
            progress: 0,
            tasks_completed: 0,
            total_tasks: TOTAL_TASKS,
            deadline: input.deadline.unwrap_or(today),
            budget: USER_PROJECT_BUDGET,
            created_by: User::local(),
        }
    }
}

/// Form input for creating a project.
///
/// The only hard requirement is a non-blank title; every other field
/// accepts its default silently. Team members are referenced by user id and
/// resolved against the fetched user pool (unknown ids are dropped).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProjectInput {
    #[validate(custom(function = validate_title))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Defaults to today if omitted.
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub team_member_ids: Vec<UserId>,
}

impl CreateProjectInput {
    /// Run form validation, mapping validator output into [`CoreError`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

fn validate_title(title: &str) -> Result<(), ValidationError> {
    if title.trim().is_empty() {
        return Err(ValidationError::new("title_blank")
            .with_message("title must not be blank".into()));
    }
    Ok(())
}

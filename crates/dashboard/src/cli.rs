//! Command-line interface for the one-shot shell.
//!
//! Each invocation loads the data, applies the requested interactions
//! (create, filter, page, selection), prints the resulting view, and
//! exits. Facet values parse through the core enums' `FromStr` impls, so
//! the accepted spellings match the wire format exactly.

use clap::Parser;
use taskflow_core::model::{Priority, Status};
use taskflow_core::types::UserId;

#[derive(Debug, Parser)]
#[command(name = "taskflow-dashboard", about = "Project dashboard over the placeholder API")]
pub struct ViewOptions {
    /// Case-insensitive substring filter on project ids.
    #[arg(long)]
    pub search: Option<String>,

    /// Priority facet: high, medium, or low.
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Status facet: active, pending, or completed.
    #[arg(long)]
    pub status: Option<Status>,

    /// 1-based page to show, clamped into range.
    #[arg(long)]
    pub page: Option<usize>,

    /// Open the detail view for a project id.
    #[arg(long, value_name = "ID")]
    pub select: Option<String>,

    /// Create a project with this title before rendering.
    #[arg(long, value_name = "TITLE")]
    pub create: Option<String>,

    /// Comma-separated team member ids for `--create`.
    #[arg(long, value_delimiter = ',', requires = "create", value_name = "IDS")]
    pub team: Vec<UserId>,

    /// Flip the theme mode and persist it.
    #[arg(long)]
    pub toggle_theme: bool,
}

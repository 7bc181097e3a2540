//! Plain-text rendering shell.
//!
//! Renders the pipeline's outputs (stat cards, the current table page, the
//! pagination strip, and the detail view) as text. No state lives here;
//! everything is a pure function of [`DashboardState`] and the theme mode.

use std::fmt::Write;

use taskflow_core::model::Project;
use taskflow_core::palette::{color_from_id, team_color_indices};
use taskflow_core::theme::ThemeMode;

use crate::state::DashboardState;

/// Team avatars shown before collapsing into a `+N` overflow marker.
const MAX_TEAM_AVATARS: usize = 4;

/// Render the full dashboard view.
pub fn render_dashboard(state: &DashboardState, mode: ThemeMode) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "TaskFlow Pro ({} mode)", mode.as_str());
    let _ = writeln!(out);

    if state.is_loading() {
        let _ = writeln!(out, "Loading projects...");
        return out;
    }

    for card in state.stats().cards() {
        let _ = writeln!(out, "{} {}: {}", card.trend.symbol(), card.label, card.value);
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "{:<24} {:<18} {:<8} {:<9} {:>8}  {}",
        "PROJECT", "TEAM", "PRIORITY", "STATUS", "PROGRESS", "DEADLINE"
    );
    for project in state.page_items() {
        let _ = writeln!(out, "{}", render_row(project));
    }

    let (first, last, total) = state.showing();
    let _ = writeln!(out);
    let _ = writeln!(out, "Showing {first}-{last} of {total}");

    let current = state.page();
    let strip: Vec<String> = state
        .page_window()
        .map(|p| {
            if p == current {
                format!("[{p}]")
            } else {
                p.to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "Prev {} Next", strip.join(" "));

    if let Some(project) = state.selection().viewed() {
        let _ = writeln!(out);
        out.push_str(&render_detail(project));
    }

    out
}

fn render_row(project: &Project) -> String {
    let glyph: String = project.title.chars().take(2).collect::<String>().to_uppercase();
    let heading = format!("{} {} #{}", glyph, truncate(&project.title, 20), project.id);

    format!(
        "{:<24} {:<18} {:<8} {:<9} {:>7}%  {}",
        truncate(&heading, 24),
        team_summary(project),
        project.priority.as_str(),
        project.status.as_str(),
        project.progress,
        project.deadline.format("%b %d, %Y"),
    )
}

/// Terminal color per palette slot (indigo, amber, emerald, red, blue).
const ANSI_PALETTE: [&str; 5] = ["35", "33", "32", "31", "34"];

/// Team member initials tinted with their avatar colors, collapsed past
/// four into a `+N` marker.
fn team_summary(project: &Project) -> String {
    let indices = team_color_indices(&project.team_members);
    let mut initials: Vec<String> = project
        .team_members
        .iter()
        .take(MAX_TEAM_AVATARS)
        .zip(&indices)
        .map(|(member, &idx)| {
            let initial = member
                .name
                .chars()
                .next()
                .map(|c| c.to_uppercase().to_string())
                .unwrap_or_default();
            format!("\x1b[{}m{}\x1b[0m", ANSI_PALETTE[idx], initial)
        })
        .collect();

    if project.team_members.len() > MAX_TEAM_AVATARS {
        initials.push(format!("+{}", project.team_members.len() - MAX_TEAM_AVATARS));
    }
    initials.join(" ")
}

/// Render the detail view for the selected project.
pub fn render_detail(project: &Project) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "=== {} ({})", project.title, color_from_id(&project.id));
    let _ = writeln!(
        out,
        "Description: {}",
        if project.description.is_empty() {
            "No description"
        } else {
            &project.description
        }
    );

    let members: Vec<&str> = project.team_members.iter().map(|u| u.name.as_str()).collect();
    let _ = writeln!(out, "Team: {}", members.join(", "));
    let _ = writeln!(out, "Priority: {}", project.priority.as_str());
    let _ = writeln!(out, "Status: {}", project.status.as_str());
    let _ = writeln!(out, "Deadline: {}", project.deadline);
    let _ = writeln!(
        out,
        "Progress: {}% ({}/{} tasks)",
        project.progress, project.tasks_completed, project.total_tasks
    );
    let _ = writeln!(out, "Budget: ${}", project.budget);
    let _ = writeln!(out, "Created by: {}", project.created_by.name);

    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        text.chars().take(max).collect()
    }
}

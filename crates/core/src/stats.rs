//! Dashboard stat cards.
//!
//! The four headline figures above the table, computed from the live
//! project collection.

use std::collections::HashSet;

use crate::model::{Project, Status};

/// Direction tag for the stat-card arrow glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
    Neutral,
}

impl Trend {
    pub fn symbol(&self) -> char {
        match self {
            Trend::Positive => '↑',
            Trend::Negative => '↓',
            Trend::Neutral => '→',
        }
    }
}

/// One headline card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatCard {
    pub label: &'static str,
    pub value: i64,
    pub trend: Trend,
}

/// Headline figures for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashboardStats {
    /// Projects currently in `Active` status.
    pub active_projects: usize,
    /// Sum of `total_tasks` across all projects.
    pub total_tasks: i64,
    /// Distinct users appearing on any team roster.
    pub team_members: usize,
    /// Percent of projects in `Completed` status, 0 for an empty store.
    pub completion_rate: u32,
}

impl DashboardStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        let active_projects = projects.iter().filter(|p| p.status == Status::Active).count();
        let completed = projects.iter().filter(|p| p.status == Status::Completed).count();
        let total_tasks = projects.iter().map(|p| i64::from(p.total_tasks)).sum();

        let team_members = projects
            .iter()
            .flat_map(|p| p.team_members.iter().map(|u| u.id))
            .collect::<HashSet<_>>()
            .len();

        let completion_rate = if projects.is_empty() {
            0
        } else {
            (completed * 100 / projects.len()) as u32
        };

        Self {
            active_projects,
            total_tasks,
            team_members,
            completion_rate,
        }
    }

    /// The cards in display order. Trends compare against nothing here
    /// (there is no prior period), so completion drives the only signal:
    /// above half completed reads positive, an empty store reads neutral.
    pub fn cards(&self) -> Vec<StatCard> {
        let completion_trend = if self.total_tasks == 0 {
            Trend::Neutral
        } else if self.completion_rate >= 50 {
            Trend::Positive
        } else {
            Trend::Negative
        };

        vec![
            StatCard {
                label: "Active Projects",
                value: self.active_projects as i64,
                trend: Trend::Neutral,
            },
            StatCard {
                label: "Total Tasks",
                value: self.total_tasks,
                trend: Trend::Neutral,
            },
            StatCard {
                label: "Team Members",
                value: self.team_members as i64,
                trend: Trend::Neutral,
            },
            StatCard {
                label: "Completion Rate",
                value: i64::from(self.completion_rate),
                trend: completion_trend,
            },
        ]
    }
}

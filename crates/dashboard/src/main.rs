use std::time::Duration;

use chrono::Utc;
use clap::Parser;
use taskflow_client::PlaceholderClient;
use taskflow_core::generate::generate_projects;
use taskflow_core::model::CreateProjectInput;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taskflow_dashboard::cli::ViewOptions;
use taskflow_dashboard::config::DashboardConfig;
use taskflow_dashboard::state::DashboardState;
use taskflow_dashboard::{prefs, render};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskflow_dashboard=info,taskflow_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = DashboardConfig::from_env();
    tracing::info!(api = %config.api_base_url, "Loaded dashboard configuration");

    let opts = ViewOptions::parse();

    // --- Theme preference ---
    let mut mode = prefs::load_theme(&config.theme_file);
    if opts.toggle_theme {
        mode = mode.toggle();
        prefs::save_theme(&config.theme_file, mode)?;
        tracing::info!(mode = mode.as_str(), "Theme preference updated");
    }

    // --- Data load ---
    let client = PlaceholderClient::new(
        &config.api_base_url,
        Duration::from_secs(config.request_timeout_secs),
    )?;

    let mut state = DashboardState::new();
    let generation = state.begin_load();
    let today = Utc::now().date_naive();

    match client.fetch_dashboard_data().await {
        Ok((users, posts)) => {
            let mut rng = rand::rng();
            match generate_projects(&posts, &users, today, &mut rng) {
                Ok(projects) => {
                    state.complete_load(generation, users, projects);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Project generation failed; table stays empty");
                    state.fail_load(generation);
                }
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load dashboard data; table stays empty");
            state.fail_load(generation);
        }
    }

    // --- Interactions ---
    if let Some(title) = opts.create {
        let input = CreateProjectInput {
            title,
            team_member_ids: opts.team,
            ..Default::default()
        };
        if let Err(e) = state.create_project(input, today) {
            tracing::warn!(error = %e, "Create rejected; rendering without it");
        }
    }

    if let Some(query) = opts.search {
        state.set_id_query(query);
    }
    if opts.priority.is_some() {
        state.set_priority(opts.priority);
    }
    if opts.status.is_some() {
        state.set_status(opts.status);
    }
    if let Some(page) = opts.page {
        state.set_page(page);
    }
    if let Some(id) = opts.select {
        if !state.select_project(&id) {
            tracing::warn!(%id, "No project with that id; nothing selected");
        }
    }

    print!("{}", render::render_dashboard(&state, mode));
    Ok(())
}

pub mod cli;
pub mod core;
pub mod providers;

use anyhow::Result;
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

use crate::core::config::AppConfig;
use crate::core::controller::DashboardController;
use crate::core::source::DashboardDataSource;
use crate::core::state::LoadStatus;

/// Commands the binary dispatches into the library.
pub enum AppCommand {
    /// Dashboard backed by the analysis API.
    Show { date: Option<NaiveDate> },
    /// Dashboard backed by the bundled sample dataset.
    Demo { date: Option<NaiveDate> },
}

pub async fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Brent dashboard starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let (source, date_override): (Arc<dyn DashboardDataSource>, Option<NaiveDate>) = match command {
        AppCommand::Show { date } => (
            Arc::new(providers::api::ApiDataSource::new(&config.api.base_url)?),
            date,
        ),
        AppCommand::Demo { date } => (Arc::new(providers::sample::SampleDataSource::new()), date),
    };
    let selected_date = date_override.unwrap_or(config.dashboard.selected_date);

    let controller =
        DashboardController::new(source, selected_date, config.dashboard.window_days);

    let pb = cli::ui::new_spinner("Loading dashboard data...");
    controller.load_dashboard().await;
    controller.select_date(selected_date).await;
    pb.finish_and_clear();

    let state = controller.snapshot().await;
    println!("{}", cli::dashboard::render(&state, controller.window_days()));

    if state.status == LoadStatus::Error {
        let message = state
            .error
            .unwrap_or_else(|| "Dashboard load failed".to_string());
        anyhow::bail!(message);
    }
    Ok(())
}

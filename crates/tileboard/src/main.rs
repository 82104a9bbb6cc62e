use anyhow::{Context, Result};
use clap::Parser;

mod app;
mod cli;
mod config;
mod keymap;
mod logging;

use app::{Dashboard, DashboardFlags};
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load(&cli).context("failed to load configuration")?;

    // Held until exit so buffered log lines are flushed.
    let _log_guard = logging::init(
        config.program.log_file.as_deref(),
        config.program.log_level.as_deref(),
    )?;

    let flags = DashboardFlags::from_config(&config)?;
    tracing::info!(
        widgets = flags.board.len(),
        catalog = flags.board.catalog().len(),
        columns = flags.columns,
        "starting dashboard"
    );

    let dashboard = tileboard_runtime::run_with::<Dashboard>(flags, config.program_options())
        .await
        .context("dashboard exited with an error")?;

    tracing::info!(widgets = dashboard.board().len(), "dashboard closed");
    Ok(())
}

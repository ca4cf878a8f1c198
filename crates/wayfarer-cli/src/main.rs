//! Wayfarer CLI Application
//!
//! Command-line interface for the wayfarer trip lifecycle scheduler.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;
use wayfarer_core::TripSchedulerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let scheduler = TripSchedulerBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize scheduler")?;

    let renderer = TerminalRenderer::new(!no_color);
    let cli = Cli::new(scheduler, renderer);

    info!("Wayfarer started");

    match command {
        User { command } => cli.handle_user_command(command).await,
        Trip { command } => cli.handle_trip_command(command).await,
        Tasks => cli.list_tasks().await,
        Notifications => cli.list_notifications().await,
        Run(run_args) => cli.run(run_args).await,
        Reconcile => cli.reconcile().await,
    }
}

//! Command handlers bridging parsed arguments to scheduler operations.

use std::time::Duration;

use anyhow::{Context, Result};
use wayfarer_core::{
    display::{CreateResult, Notifications, OperationStatus, ScheduledTasks, Trips, Users},
    TripScheduler,
};

use crate::{
    args::{RunArgs, TripCommands, UserCommands},
    renderer::TerminalRenderer,
};

/// Executes CLI commands against a scheduler and renders the results.
pub struct Cli {
    scheduler: TripScheduler,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(scheduler: TripScheduler, renderer: TerminalRenderer) -> Self {
        Self {
            scheduler,
            renderer,
        }
    }

    pub async fn handle_user_command(&self, command: UserCommands) -> Result<()> {
        match command {
            UserCommands::Add(args) => {
                let user = self
                    .scheduler
                    .create_user(&args.into())
                    .await
                    .context("Failed to create user")?;
                self.renderer.render(&CreateResult::new(user).to_string())
            }
            UserCommands::List => {
                let users = self
                    .scheduler
                    .list_users()
                    .await
                    .context("Failed to list users")?;
                self.renderer.render(&Users(users).to_string())
            }
            UserCommands::Delete(args) => {
                let id = args.id;
                self.scheduler
                    .delete_user(&args.into())
                    .await
                    .context("Failed to delete user")?;
                self.renderer.render(
                    &OperationStatus::success(format!("Deleted user {id} and their trips"))
                        .to_string(),
                )
            }
        }
    }

    pub async fn handle_trip_command(&self, command: TripCommands) -> Result<()> {
        match command {
            TripCommands::Add(args) => {
                let trip = self
                    .scheduler
                    .create_trip(&args.into())
                    .await
                    .context("Failed to create trip")?;
                self.renderer.render(&CreateResult::new(trip).to_string())
            }
            TripCommands::List(args) => {
                let trips = self
                    .scheduler
                    .list_trips(&args.into())
                    .await
                    .context("Failed to list trips")?;
                self.renderer.render(&Trips(trips).to_string())
            }
            TripCommands::Show(args) => {
                let id = args.id;
                match self
                    .scheduler
                    .get_trip(&args.into())
                    .await
                    .context("Failed to get trip")?
                {
                    Some(trip) => self.renderer.render(&trip.to_string()),
                    None => self
                        .renderer
                        .render(&OperationStatus::failure(format!("Trip {id} not found")).to_string()),
                }
            }
            TripCommands::Cancel(args) => {
                let id = args.id;
                self.scheduler
                    .cancel_trip(&args.into())
                    .await
                    .context("Failed to cancel trip")?;
                self.renderer.render(
                    &OperationStatus::success(format!(
                        "Cancelled trip {id} and removed its scheduled tasks"
                    ))
                    .to_string(),
                )
            }
            TripCommands::Delete(args) => {
                let id = args.id;
                self.scheduler
                    .delete_trip(&args.into())
                    .await
                    .context("Failed to delete trip")?;
                self.renderer
                    .render(&OperationStatus::success(format!("Deleted trip {id}")).to_string())
            }
        }
    }

    pub async fn list_tasks(&self) -> Result<()> {
        let tasks = self
            .scheduler
            .pending_tasks()
            .await
            .context("Failed to list pending tasks")?;
        self.renderer.render(&ScheduledTasks(tasks).to_string())
    }

    pub async fn list_notifications(&self) -> Result<()> {
        let notifications = self
            .scheduler
            .notifications()
            .await
            .context("Failed to list notifications")?;
        self.renderer
            .render(&Notifications(notifications).to_string())
    }

    pub async fn run(&self, args: RunArgs) -> Result<()> {
        if args.once {
            let executed = self
                .scheduler
                .run_due_tasks()
                .await
                .context("Dispatch pass failed")?;
            self.renderer.render(
                &OperationStatus::success(format!("Executed {executed} due task(s)")).to_string(),
            )
        } else {
            self.scheduler
                .run(Duration::from_secs(args.interval_secs))
                .await
                .context("Dispatcher failed")
        }
    }

    pub async fn reconcile(&self) -> Result<()> {
        let installed = self
            .scheduler
            .reconcile()
            .await
            .context("Reconcile failed")?;
        self.renderer.render(
            &OperationStatus::success(format!("Reconciled, {installed} task(s) installed"))
                .to_string(),
        )
    }
}

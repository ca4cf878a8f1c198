//! Draining the durable task registry.
//!
//! The dispatcher polls for due tasks and hands each to its executor. A
//! completed or permanently failed task is removed from the registry; a
//! transient failure is pushed back with exponential backoff. Executors are
//! idempotent, so re-delivery after a crash between execution and removal is
//! harmless.

use std::time::Duration;

use jiff::{tz::TimeZone, Timestamp, ToSpan};
use log::{info, warn};
use tokio::task;

use super::{lifecycle, TripScheduler};
use crate::{
    db::Database,
    error::{Result, WayfarerError},
    models::TripStatus,
    tasks::{retry_backoff_secs, TaskOutcome},
    worker,
};

impl TripScheduler {
    /// Executes every task whose fire time has passed and returns how many
    /// were attempted.
    ///
    /// Tasks run in fire-time order. [`TaskOutcome::Success`] and
    /// [`TaskOutcome::Failure`] both remove the registry row; only
    /// [`TaskOutcome::Retry`] keeps it, pushed out by a backoff that doubles
    /// per attempt up to one hour.
    pub async fn run_due_tasks(&self) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let due = db.due_tasks(Timestamp::now())?;
            let count = due.len();

            for scheduled in due {
                match worker::execute_task(&mut db, &scheduled) {
                    TaskOutcome::Success => {
                        db.cancel_task(&scheduled.name)?;
                    }
                    TaskOutcome::Failure => {
                        warn!("Task {} failed permanently, dropping it", scheduled.name);
                        db.cancel_task(&scheduled.name)?;
                    }
                    TaskOutcome::Retry => {
                        let delay = retry_backoff_secs(scheduled.attempts);
                        let next = scheduled.fire_at.max(Timestamp::now());
                        let fire_at = next.checked_add(delay.seconds())?;
                        warn!(
                            "Task {} hit a transient error, retrying in {delay}s",
                            scheduled.name
                        );
                        db.reschedule_task(&scheduled.name, fire_at, scheduled.attempts + 1)?;
                    }
                }
            }

            Ok(count)
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Runs the dispatcher loop forever, draining due tasks once per poll
    /// interval. Transient errors are logged and the loop keeps going.
    pub async fn run(&self, poll_interval: Duration) -> Result<()> {
        info!(
            "Dispatcher running, polling every {}s",
            poll_interval.as_secs()
        );
        loop {
            match self.run_due_tasks().await {
                Ok(0) => {}
                Ok(n) => info!("Dispatched {n} due task(s)"),
                Err(e) => warn!("Dispatch pass failed: {e}"),
            }
            tokio::time::sleep(poll_interval).await;
        }
    }

    /// Recomputes and re-installs the task set for every PLANNED and ONGOING
    /// trip, returning how many tasks were written.
    ///
    /// Replace-by-name semantics make this safe to run at any time: tasks
    /// that already exist are overwritten with the freshly computed fire
    /// time, and tasks whose instant has passed are simply not produced.
    /// Useful after a crash left a trip without its tasks.
    pub async fn reconcile(&self) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let now = Timestamp::now();
            let tz = TimeZone::system();

            let mut installed = 0;
            for status in [TripStatus::Planned, TripStatus::Ongoing] {
                for trip in db.list_trips_by_status(status)? {
                    let tasks = lifecycle::plan_trip_tasks(&trip, now, &tz)?;
                    for t in &tasks {
                        db.schedule_task(t)?;
                    }
                    installed += tasks.len();
                }
            }
            info!("Reconciled scheduled tasks, {installed} installed");

            Ok(installed)
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

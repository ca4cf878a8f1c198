//! Trip operations for the TripScheduler.

use jiff::{tz::TimeZone, Timestamp};
use log::{debug, info};
use tokio::task;

use super::{lifecycle, TripScheduler};
use crate::{
    db::Database,
    error::{Result, WayfarerError},
    models::{Notification, Trip, TripStatus},
    params::{CreateTrip, Id, ListTrips},
    tasks::{all_task_names, ScheduledTask},
};

impl TripScheduler {
    /// Creates a new trip (status PLANNED) and installs every deferred
    /// action its dates imply: up to two reminders and two status
    /// transitions, each under its deterministic task name.
    ///
    /// The insert commits first so the generated id is available for task
    /// names; the installs then run in the same blocking section. A crash in
    /// between leaves a trip without tasks, repairable via
    /// [`TripScheduler::reconcile`].
    pub async fn create_trip(&self, params: &CreateTrip) -> Result<Trip> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            let trip = db.create_trip(&params)?;

            let tasks = lifecycle::plan_trip_tasks(&trip, Timestamp::now(), &TimeZone::system())?;
            for t in &tasks {
                db.schedule_task(t)?;
            }
            info!(
                "Created trip {} ({}), installed {} scheduled task(s)",
                trip.id,
                trip.name,
                tasks.len()
            );

            Ok(trip)
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a trip by its ID.
    pub async fn get_trip(&self, params: &Id) -> Result<Option<Trip>> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_trip(trip_id)
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists a user's trips, optionally restricted to a single status.
    pub async fn list_trips(&self, params: &ListTrips) -> Result<Vec<Trip>> {
        let db_path = self.db_path.clone();
        let params = *params;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_trips(params.user_id, params.status)
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Cancels a trip: sets status to CANCELLED (authoritative, regardless
    /// of current status), then tears down all four named tasks whether or
    /// not they were ever installed. Cancelling an absent task is a no-op,
    /// so cancelling twice produces no error.
    ///
    /// An executor already mid-flight when cancellation commits may still
    /// complete and write a stale status; there is no fencing token
    /// (documented limitation).
    pub async fn cancel_trip(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_trip_status(trip_id, TripStatus::Cancelled)?;

            for name in all_task_names(trip_id) {
                if db.cancel_task(&name)? {
                    debug!("Cancelled scheduled task {name}");
                }
            }
            info!("Cancelled trip {trip_id}");

            Ok(())
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Permanently deletes a trip and tears down its scheduled tasks. This
    /// is an explicit user action; the lifecycle core itself never deletes
    /// trips.
    pub async fn delete_trip(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let trip_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_trip(trip_id)?;
            for name in all_task_names(trip_id) {
                db.cancel_task(&name)?;
            }
            Ok(())
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all pending scheduled tasks ordered by fire time.
    pub async fn pending_tasks(&self) -> Result<Vec<ScheduledTask>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.pending_tasks()
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists delivered notifications, most recent first.
    pub async fn notifications(&self) -> Result<Vec<Notification>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_notifications()
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

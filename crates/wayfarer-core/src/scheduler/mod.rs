//! High-level async API for the trip lifecycle scheduler.
//!
//! [`TripScheduler`] is the central coordinator: it persists trips, computes
//! and installs the deferred actions their dates imply (two reminders and two
//! status transitions), tears them down on cancellation, and drains the
//! durable task registry when work becomes due.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐    ┌──────────────────┐    ┌─────────────────┐
//! │  TripScheduler  │───▶│ lifecycle (pure) │    │    Database     │
//! │ (async facade)  │    │ plan_trip_tasks  │───▶│ trips / tasks / │
//! │                 │───▶│ worker executors │    │ notifications   │
//! └─────────────────┘    └──────────────────┘    └─────────────────┘
//! ```
//!
//! All public operations are async and wrap blocking SQLite work in
//! `tokio::task::spawn_blocking`, opening a short-lived [`crate::db::Database`]
//! per call. The trip store and the task registry share a database file but
//! are not transactionally coupled: a crash between "trip created" and "tasks
//! installed" (or between "status set to CANCELLED" and "tasks cancelled")
//! leaves them transiently inconsistent, which [`TripScheduler::reconcile`]
//! can repair on demand.

use std::path::PathBuf;

pub mod builder;
pub mod dispatcher;
pub mod lifecycle;
pub mod trip_ops;
pub mod user_ops;

pub use builder::TripSchedulerBuilder;

/// Main interface for managing trips and their scheduled lifecycle tasks.
pub struct TripScheduler {
    pub(crate) db_path: PathBuf,
}

impl TripScheduler {
    /// Creates a new scheduler with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}

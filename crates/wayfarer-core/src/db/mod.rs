//! Database operations and SQLite management.
//!
//! Low-level persistence for the wayfarer trip planner: trips, users, the
//! durable scheduled-task registry, and delivered notifications. Handles the
//! SQLite connection and schema and provides specialized query interfaces
//! per table.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod notification_queries;
pub mod task_queries;
pub mod trip_queries;
pub mod user_queries;

/// Database connection and operations handler.
///
/// Constructed explicitly and passed to the scheduler and executors; there is
/// no process-wide singleton. Each async facade operation opens a short-lived
/// handle inside `spawn_blocking`.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}

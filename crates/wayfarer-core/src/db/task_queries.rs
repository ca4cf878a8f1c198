//! The durable scheduled-task registry.
//!
//! A job table with delayed delivery: rows survive process restarts, names
//! are the replace/cancel key, and `fire_at` decides when the dispatcher
//! picks a task up. Together with idempotent executors this gives
//! at-least-once delivery without any OS-level work scheduler.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, WayfarerError},
    tasks::{NewTask, ScheduledTask, TaskKind},
};

// Replace semantics: installing under an existing name atomically swaps the
// prior instance out and resets its retry counter.
const UPSERT_TASK_SQL: &str = "INSERT INTO tasks (name, kind, payload, fire_at, attempts, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, 0, ?5, ?5) ON CONFLICT(name) DO UPDATE SET kind = excluded.kind, payload = excluded.payload, fire_at = excluded.fire_at, attempts = 0, updated_at = excluded.updated_at";
const DELETE_TASK_SQL: &str = "DELETE FROM tasks WHERE name = ?1";
const SELECT_TASK_SQL: &str = "SELECT name, kind, payload, fire_at, attempts, created_at, updated_at FROM tasks WHERE name = ?1";
const SELECT_PENDING_TASKS_SQL: &str = "SELECT name, kind, payload, fire_at, attempts, created_at, updated_at FROM tasks ORDER BY fire_at ASC";
const SELECT_DUE_TASKS_SQL: &str = "SELECT name, kind, payload, fire_at, attempts, created_at, updated_at FROM tasks WHERE fire_at <= ?1 ORDER BY fire_at ASC";
const RESCHEDULE_TASK_SQL: &str =
    "UPDATE tasks SET fire_at = ?1, attempts = ?2, updated_at = ?3 WHERE name = ?4";

fn task_from_row(row: &Row<'_>) -> rusqlite::Result<ScheduledTask> {
    let kind_str: String = row.get(1)?;
    let kind = kind_str.parse::<TaskKind>().map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid task kind: {kind_str}"),
            )),
        )
    })?;

    let fire_at_ms: i64 = row.get(3)?;
    let fire_at = Timestamp::from_millisecond(fire_at_ms).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(3, Type::Integer, Box::new(e))
    })?;

    Ok(ScheduledTask {
        name: row.get(0)?,
        kind,
        payload: row.get(2)?,
        fire_at,
        attempts: row.get(4)?,
        created_at: row.get::<_, String>(5)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, Type::Text, Box::new(e))
        })?,
        updated_at: row.get::<_, String>(6)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e))
        })?,
    })
}

impl super::Database {
    /// Installs a task under its unique name, replacing any prior instance
    /// with that name.
    pub fn schedule_task(&mut self, task: &NewTask) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPSERT_TASK_SQL,
                params![
                    task.name,
                    task.kind.as_str(),
                    task.payload,
                    task.fire_at.as_millisecond(),
                    &now,
                ],
            )
            .map_err(|e| WayfarerError::database_error("Failed to schedule task", e))?;
        Ok(())
    }

    /// Removes a task by name. Cancelling an absent name is a no-op, not an
    /// error; returns whether a row was actually removed.
    pub fn cancel_task(&mut self, name: &str) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_TASK_SQL, params![name])
            .map_err(|e| WayfarerError::database_error("Failed to cancel task", e))?;
        Ok(rows_affected > 0)
    }

    /// Retrieves a task by name.
    pub fn get_task(&self, name: &str) -> Result<Option<ScheduledTask>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TASK_SQL)
            .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![name], task_from_row)
            .optional()
            .map_err(|e| WayfarerError::database_error("Failed to query task", e))
    }

    /// Lists all pending tasks ordered by fire time.
    pub fn pending_tasks(&self) -> Result<Vec<ScheduledTask>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PENDING_TASKS_SQL)
            .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;

        let rows = stmt
            .query_map([], task_from_row)
            .map_err(|e| WayfarerError::database_error("Failed to query tasks", e))?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row.db_context("Failed to read task row")?);
        }
        Ok(tasks)
    }

    /// Lists tasks whose fire time has arrived, oldest first.
    pub fn due_tasks(&self, now: Timestamp) -> Result<Vec<ScheduledTask>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_DUE_TASKS_SQL)
            .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;

        let rows = stmt
            .query_map(params![now.as_millisecond()], task_from_row)
            .map_err(|e| WayfarerError::database_error("Failed to query due tasks", e))?;

        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row.db_context("Failed to read task row")?);
        }
        Ok(tasks)
    }

    /// Pushes a task's fire time out after a failed attempt and records the
    /// attempt count. The row may have been replaced or cancelled since it
    /// was claimed; a zero-row update is not an error.
    pub fn reschedule_task(&mut self, name: &str, fire_at: Timestamp, attempts: u32) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                RESCHEDULE_TASK_SQL,
                params![fire_at.as_millisecond(), attempts, &now, name],
            )
            .map_err(|e| WayfarerError::database_error("Failed to reschedule task", e))?;
        Ok(())
    }
}

//! The notification sink: delivered reminders, deduplicated by key.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, WayfarerError},
    models::Notification,
};

// INSERT OR REPLACE keyed on dedupe_key: the same logical reminder delivered
// twice overwrites rather than duplicates.
const UPSERT_NOTIFICATION_SQL: &str = "INSERT OR REPLACE INTO notifications (dedupe_key, trip_id, title, body, delivered_at) VALUES (?1, ?2, ?3, ?4, ?5)";
const SELECT_NOTIFICATION_SQL: &str = "SELECT dedupe_key, trip_id, title, body, delivered_at FROM notifications WHERE dedupe_key = ?1";
const SELECT_ALL_NOTIFICATIONS_SQL: &str = "SELECT dedupe_key, trip_id, title, body, delivered_at FROM notifications ORDER BY delivered_at DESC";

fn notification_from_row(row: &Row<'_>) -> rusqlite::Result<Notification> {
    Ok(Notification {
        dedupe_key: row.get(0)?,
        trip_id: row.get(1)?,
        title: row.get(2)?,
        body: row.get(3)?,
        delivered_at: row.get::<_, String>(4)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, Type::Text, Box::new(e))
        })?,
    })
}

impl super::Database {
    /// Delivers a notification under its deduplication key.
    pub fn record_notification(
        &mut self,
        dedupe_key: i64,
        trip_id: i64,
        title: &str,
        body: &str,
    ) -> Result<()> {
        let now = Timestamp::now().to_string();
        self.connection
            .execute(
                UPSERT_NOTIFICATION_SQL,
                params![dedupe_key, trip_id, title, body, &now],
            )
            .map_err(|e| WayfarerError::database_error("Failed to record notification", e))?;
        Ok(())
    }

    /// Retrieves a delivered notification by its deduplication key.
    pub fn get_notification(&self, dedupe_key: i64) -> Result<Option<Notification>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_NOTIFICATION_SQL)
            .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![dedupe_key], notification_from_row)
            .optional()
            .map_err(|e| WayfarerError::database_error("Failed to query notification", e))
    }

    /// Lists delivered notifications, most recent first.
    pub fn list_notifications(&self) -> Result<Vec<Notification>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_NOTIFICATIONS_SQL)
            .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;

        let rows = stmt
            .query_map([], notification_from_row)
            .map_err(|e| WayfarerError::database_error("Failed to query notifications", e))?;

        let mut notifications = Vec::new();
        for row in rows {
            notifications.push(row.db_context("Failed to read notification row")?);
        }
        Ok(notifications)
    }
}

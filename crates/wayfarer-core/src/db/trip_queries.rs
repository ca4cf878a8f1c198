//! Trip CRUD operations and queries.

use jiff::{civil::Date, Timestamp};
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, WayfarerError},
    models::{TransportType, Trip, TripStatus},
    params::CreateTrip,
};

const INSERT_TRIP_SQL: &str = "INSERT INTO trips (user_id, name, description, location, transport, budget, currency, start_date, end_date, status, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)";
const SELECT_TRIP_SQL: &str = "SELECT id, user_id, name, description, location, transport, budget, currency, start_date, end_date, status, created_at, updated_at FROM trips WHERE id = ?1";
const SELECT_TRIPS_BY_USER_SQL: &str = "SELECT id, user_id, name, description, location, transport, budget, currency, start_date, end_date, status, created_at, updated_at FROM trips WHERE user_id = ?1 ORDER BY start_date ASC";
const SELECT_TRIPS_BY_USER_AND_STATUS_SQL: &str = "SELECT id, user_id, name, description, location, transport, budget, currency, start_date, end_date, status, created_at, updated_at FROM trips WHERE user_id = ?1 AND status = ?2 ORDER BY start_date ASC";
const SELECT_TRIPS_BY_STATUS_SQL: &str = "SELECT id, user_id, name, description, location, transport, budget, currency, start_date, end_date, status, created_at, updated_at FROM trips WHERE status = ?1 ORDER BY start_date ASC";
const UPDATE_TRIP_STATUS_SQL: &str = "UPDATE trips SET status = ?1, updated_at = ?2 WHERE id = ?3";
const DELETE_TRIP_SQL: &str = "DELETE FROM trips WHERE id = ?1";

/// Maps a full trip row; the column order matches the SELECT statements
/// above.
fn trip_from_row(row: &Row<'_>) -> rusqlite::Result<Trip> {
    let parse_text = |idx: usize, what: &str, value: &str| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            Type::Text,
            Box::new(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("Invalid {what}: {value}"),
            )),
        )
    };

    let transport_str: String = row.get(5)?;
    let transport = transport_str
        .parse::<TransportType>()
        .map_err(|_| parse_text(5, "transport type", &transport_str))?;

    let status_str: String = row.get(10)?;
    let status = status_str
        .parse::<TripStatus>()
        .map_err(|_| parse_text(10, "trip status", &status_str))?;

    Ok(Trip {
        id: row.get(0)?,
        user_id: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        location: row.get(4)?,
        transport,
        budget: row.get(6)?,
        currency: row.get(7)?,
        start_date: row.get::<_, String>(8)?.parse::<Date>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(8, Type::Text, Box::new(e))
        })?,
        end_date: row.get::<_, String>(9)?.parse::<Date>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(9, Type::Text, Box::new(e))
        })?,
        status,
        created_at: row.get::<_, String>(11)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(11, Type::Text, Box::new(e))
        })?,
        updated_at: row.get::<_, String>(12)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(12, Type::Text, Box::new(e))
        })?,
    })
}

impl super::Database {
    /// Inserts a new trip with status PLANNED and returns the stored row
    /// including its generated identifier. Scheduling depends on that id, so
    /// creation commits before any task is installed.
    pub fn create_trip(&mut self, params: &CreateTrip) -> Result<Trip> {
        params.validate()?;

        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let now = Timestamp::now();
        let now_str = now.to_string();

        tx.execute(
            INSERT_TRIP_SQL,
            params![
                params.user_id,
                params.name,
                params.description,
                params.location,
                params.transport.as_str(),
                params.budget,
                params.currency,
                params.start_date.to_string(),
                params.end_date.to_string(),
                TripStatus::Planned.as_str(),
                &now_str,
                &now_str,
            ],
        )
        .map_err(|e| WayfarerError::database_error("Failed to insert trip", e))?;

        let id = tx.last_insert_rowid();

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Trip {
            id,
            user_id: params.user_id,
            name: params.name.clone(),
            description: params.description.clone(),
            location: params.location.clone(),
            transport: params.transport,
            budget: params.budget,
            currency: params.currency.clone(),
            start_date: params.start_date,
            end_date: params.end_date,
            status: TripStatus::Planned,
            created_at: now,
            updated_at: now,
        })
    }

    /// Retrieves a trip by its ID.
    pub fn get_trip(&self, id: i64) -> Result<Option<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIP_SQL)
            .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id], trip_from_row)
            .optional()
            .map_err(|e| WayfarerError::database_error("Failed to query trip", e))
    }

    /// Lists a user's trips ordered by start date, optionally restricted to
    /// a single status.
    pub fn list_trips(&self, user_id: i64, status: Option<TripStatus>) -> Result<Vec<Trip>> {
        let mut trips = Vec::new();

        match status {
            Some(status) => {
                let mut stmt = self
                    .connection
                    .prepare(SELECT_TRIPS_BY_USER_AND_STATUS_SQL)
                    .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;
                let rows = stmt
                    .query_map(params![user_id, status.as_str()], trip_from_row)
                    .map_err(|e| WayfarerError::database_error("Failed to query trips", e))?;
                for row in rows {
                    trips.push(row.db_context("Failed to read trip row")?);
                }
            }
            None => {
                let mut stmt = self
                    .connection
                    .prepare(SELECT_TRIPS_BY_USER_SQL)
                    .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;
                let rows = stmt
                    .query_map(params![user_id], trip_from_row)
                    .map_err(|e| WayfarerError::database_error("Failed to query trips", e))?;
                for row in rows {
                    trips.push(row.db_context("Failed to read trip row")?);
                }
            }
        }

        Ok(trips)
    }

    /// Lists every trip currently in the given status, across all users.
    /// Used by the reconciliation pass over non-terminal trips.
    pub fn list_trips_by_status(&self, status: TripStatus) -> Result<Vec<Trip>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_TRIPS_BY_STATUS_SQL)
            .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;

        let rows = stmt
            .query_map(params![status.as_str()], trip_from_row)
            .map_err(|e| WayfarerError::database_error("Failed to query trips", e))?;

        let mut trips = Vec::new();
        for row in rows {
            trips.push(row.db_context("Failed to read trip row")?);
        }
        Ok(trips)
    }

    /// Sets a trip's status. Idempotent partial update: writing the current
    /// status again is harmless. Signals [`WayfarerError::TripNotFound`] when
    /// the identifier does not exist.
    pub fn update_trip_status(&mut self, id: i64, status: TripStatus) -> Result<()> {
        let now = Timestamp::now().to_string();
        let rows_affected = self
            .connection
            .execute(UPDATE_TRIP_STATUS_SQL, params![status.as_str(), &now, id])
            .map_err(|e| WayfarerError::database_error("Failed to update trip status", e))?;

        if rows_affected == 0 {
            return Err(WayfarerError::TripNotFound { id });
        }

        Ok(())
    }

    /// Permanently deletes a trip. The lifecycle core never calls this; it
    /// exists for explicit user action only.
    pub fn delete_trip(&mut self, id: i64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_TRIP_SQL, params![id])
            .map_err(|e| WayfarerError::database_error("Failed to delete trip", e))?;

        if rows_affected == 0 {
            return Err(WayfarerError::TripNotFound { id });
        }

        Ok(())
    }
}

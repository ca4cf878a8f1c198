//! User CRUD operations.

use jiff::Timestamp;
use rusqlite::{params, types::Type, OptionalExtension, Row};

use crate::{
    error::{DatabaseResultExt, Result, WayfarerError},
    models::User,
    params::CreateUser,
};

const INSERT_USER_SQL: &str = "INSERT INTO users (username, created_at) VALUES (?1, ?2)";
const SELECT_USER_SQL: &str = "SELECT id, username, created_at FROM users WHERE id = ?1";
const SELECT_ALL_USERS_SQL: &str = "SELECT id, username, created_at FROM users ORDER BY id ASC";
const DELETE_USER_SQL: &str = "DELETE FROM users WHERE id = ?1";

fn user_from_row(row: &Row<'_>) -> rusqlite::Result<User> {
    Ok(User {
        id: row.get(0)?,
        username: row.get(1)?,
        created_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
        })?,
    })
}

impl super::Database {
    /// Registers a new user. Fails on a duplicate username (unique
    /// constraint).
    pub fn create_user(&mut self, params: &CreateUser) -> Result<User> {
        params.validate()?;

        let now = Timestamp::now();
        self.connection
            .execute(INSERT_USER_SQL, params![params.username, now.to_string()])
            .map_err(|e| WayfarerError::database_error("Failed to insert user", e))?;

        Ok(User {
            id: self.connection.last_insert_rowid(),
            username: params.username.clone(),
            created_at: now,
        })
    }

    /// Retrieves a user by ID.
    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_USER_SQL)
            .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;

        stmt.query_row(params![id], user_from_row)
            .optional()
            .map_err(|e| WayfarerError::database_error("Failed to query user", e))
    }

    /// Lists all registered users.
    pub fn list_users(&self) -> Result<Vec<User>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_USERS_SQL)
            .map_err(|e| WayfarerError::database_error("Failed to prepare query", e))?;

        let rows = stmt
            .query_map([], user_from_row)
            .map_err(|e| WayfarerError::database_error("Failed to query users", e))?;

        let mut users = Vec::new();
        for row in rows {
            users.push(row.db_context("Failed to read user row")?);
        }
        Ok(users)
    }

    /// Deletes a user. The schema cascade removes their trips; pending
    /// scheduled tasks are not touched and fail permanently when they fire
    /// against the missing trips.
    pub fn delete_user(&mut self, id: i64) -> Result<()> {
        let rows_affected = self
            .connection
            .execute(DELETE_USER_SQL, params![id])
            .map_err(|e| WayfarerError::database_error("Failed to delete user", e))?;

        if rows_affected == 0 {
            return Err(WayfarerError::UserNotFound { id });
        }

        Ok(())
    }
}

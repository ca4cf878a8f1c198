//! User operations for the TripScheduler.

use tokio::task;

use super::TripScheduler;
use crate::{
    db::Database,
    error::{Result, WayfarerError},
    models::User,
    params::{CreateUser, Id},
};

impl TripScheduler {
    /// Registers a new user.
    pub async fn create_user(&self, params: &CreateUser) -> Result<User> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.create_user(&params)
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a user by ID.
    pub async fn get_user(&self, params: &Id) -> Result<Option<User>> {
        let db_path = self.db_path.clone();
        let user_id = params.id;

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_user(user_id)
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all registered users.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_users()
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a user; the schema cascade removes their trips.
    pub async fn delete_user(&self, params: &Id) -> Result<()> {
        let db_path = self.db_path.clone();
        let user_id = params.id;

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_user(user_id)
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}

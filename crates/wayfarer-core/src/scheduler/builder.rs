//! Builder for creating and configuring TripScheduler instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::TripScheduler;
use crate::{
    db::Database,
    error::{Result, WayfarerError},
};

/// Builder for creating and configuring TripScheduler instances.
#[derive(Debug, Clone)]
pub struct TripSchedulerBuilder {
    database_path: Option<PathBuf>,
}

impl TripSchedulerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/wayfarer/wayfarer.db` or
    /// `~/.local/share/wayfarer/wayfarer.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured scheduler instance, initializing the schema.
    ///
    /// # Errors
    ///
    /// Returns `WayfarerError::FileSystem` if the database path is invalid
    /// Returns `WayfarerError::Database` if database initialization fails
    pub async fn build(self) -> Result<TripScheduler> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WayfarerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), WayfarerError>(())
        })
        .await
        .map_err(|e| WayfarerError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(TripScheduler::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("wayfarer")
            .place_data_file("wayfarer.db")
            .map_err(|e| WayfarerError::XdgDirectory(e.to_string()))
    }
}

impl Default for TripSchedulerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

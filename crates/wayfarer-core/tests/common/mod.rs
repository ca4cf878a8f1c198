use std::path::PathBuf;

use jiff::civil::Date;
use tempfile::TempDir;
use wayfarer_core::{params::CreateTrip, TransportType, TripScheduler, TripSchedulerBuilder};

/// Helper function to create a test scheduler backed by a throwaway database
pub async fn create_test_scheduler() -> (TempDir, PathBuf, TripScheduler) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let scheduler = TripSchedulerBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create scheduler");
    (temp_dir, db_path, scheduler)
}

/// Helper function to build trip creation parameters with sensible defaults
pub fn trip_params(user_id: i64, name: &str, start_date: Date, end_date: Date) -> CreateTrip {
    CreateTrip {
        user_id,
        name: name.to_string(),
        description: None,
        location: "Somewhere".to_string(),
        transport: TransportType::Plane,
        budget: 0.0,
        currency: String::new(),
        start_date,
        end_date,
    }
}

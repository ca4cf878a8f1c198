//! Core library for the Wayfarer trip lifecycle scheduler.
//!
//! This crate provides the business logic for managing trips and the deferred
//! work their dates imply: database operations, the durable named-task
//! registry, lifecycle planning, task executors, and error handling.
//!
//! A trip moves through a simple state machine (PLANNED, ONGOING, FINISHED,
//! CANCELLED). Creating a trip installs up to four named tasks in a durable
//! registry (two reminders before the start date and the two status
//! transitions); the dispatcher drains tasks as they come due, and cancelling
//! a trip tears its tasks down again.
//!
//! # Quick Start
//!
//! ```rust
//! use wayfarer_core::{params::{CreateTrip, CreateUser}, TripSchedulerBuilder};
//! use jiff::civil::date;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let scheduler = TripSchedulerBuilder::new()
//!     .with_database_path(Some("trips.db"))
//!     .build()
//!     .await?;
//!
//! let user = scheduler
//!     .create_user(&CreateUser { username: "ada".to_string() })
//!     .await?;
//!
//! let trip = scheduler
//!     .create_trip(&CreateTrip {
//!         user_id: user.id,
//!         name: "Kyoto".to_string(),
//!         description: None,
//!         location: "Kyoto, Japan".to_string(),
//!         transport: Default::default(),
//!         budget: 1500.0,
//!         currency: "EUR".to_string(),
//!         start_date: date(2026, 9, 1),
//!         end_date: date(2026, 9, 8),
//!     })
//!     .await?;
//! println!("Created trip: {}", trip);
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod scheduler;
pub mod tasks;
pub mod worker;

// Re-export commonly used types
pub use db::Database;
pub use display::{
    CreateResult, DeleteResult, Notifications, OperationStatus, ScheduledTasks, Trips, Users,
};
pub use error::{Result, WayfarerError};
pub use models::{LocalDateTime, Notification, TransportType, Trip, TripStatus, User};
pub use params::{CreateTrip, CreateUser, Id, ListTrips};
pub use scheduler::{TripScheduler, TripSchedulerBuilder};
pub use tasks::{NewTask, ScheduledTask, TaskKind, TaskOutcome};

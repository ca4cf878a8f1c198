//! Parameter structures for wayfarer operations.
//!
//! Shared, interface-agnostic parameter structs. CLI argument types wrap
//! these with clap derives and convert via `From`, so the core stays free of
//! framework dependencies: framework concerns live at the edges, validation
//! lives here.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, WayfarerError},
    models::{TransportType, TripStatus},
};

/// Generic parameters for operations requiring just an ID.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Id {
    /// The ID of the resource to operate on
    pub id: i64,
}

/// Parameters for registering a new user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUser {
    /// Unique username (required, non-empty)
    pub username: String,
}

impl CreateUser {
    /// Validate the username is non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(WayfarerError::invalid_input(
                "username",
                "Username must not be empty",
            ));
        }
        Ok(())
    }
}

/// Parameters for creating a new trip.
///
/// The trip is always created as [`TripStatus::Planned`]; status is not a
/// caller choice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTrip {
    /// Owning user ID
    pub user_id: i64,
    /// Name of the trip (required)
    pub name: String,
    /// Optional detailed description
    pub description: Option<String>,
    /// Destination (free text)
    pub location: String,
    /// Mode of transport
    #[serde(default)]
    pub transport: TransportType,
    /// Budgeted amount
    #[serde(default)]
    pub budget: f64,
    /// Free-text currency code
    #[serde(default)]
    pub currency: String,
    /// First day of the trip
    pub start_date: Date,
    /// Last day of the trip
    pub end_date: Date,
}

impl CreateTrip {
    /// Validate creation parameters.
    ///
    /// The scheduler relies on `start_date <= end_date` without re-checking,
    /// so the invariant is enforced here at the entry point.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(WayfarerError::invalid_input(
                "name",
                "Trip name must not be empty",
            ));
        }
        if self.start_date > self.end_date {
            return Err(WayfarerError::invalid_input(
                "end_date",
                format!(
                    "End date {} is before start date {}",
                    self.end_date, self.start_date
                ),
            ));
        }
        Ok(())
    }
}

/// Parameters for listing a user's trips.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ListTrips {
    /// Owning user ID
    pub user_id: i64,
    /// Restrict the listing to a single status
    pub status: Option<TripStatus>,
}

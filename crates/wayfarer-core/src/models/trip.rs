//! The trip entity, the anchor of the lifecycle core.

use std::fmt;

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use super::{LocalDateTime, TransportType, TripStatus};

/// Represents a planned journey with its dates, budget, and lifecycle status.
///
/// Trips are created as [`TripStatus::Planned`] and advanced automatically by
/// the scheduled transition executors, or cancelled by the user. The core
/// never deletes trips; deletion is an explicit user action (or a cascade
/// from deleting the owning user).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    /// Unique identifier, assigned on creation and stable for the trip's
    /// lifetime. Scheduled task names are derived from it.
    pub id: i64,

    /// Identifier of the owning user
    pub user_id: i64,

    /// Name of the trip
    pub name: String,

    /// Optional free-text description
    pub description: Option<String>,

    /// Destination; free text
    pub location: String,

    /// Mode of transport
    #[serde(default)]
    pub transport: TransportType,

    /// Budgeted amount
    pub budget: f64,

    /// Free-text currency code
    pub currency: String,

    /// First day of the trip (calendar date, no time-of-day)
    pub start_date: Date,

    /// Last day of the trip; creation validates `start_date <= end_date`
    pub end_date: Date,

    /// Current lifecycle status
    #[serde(default)]
    pub status: TripStatus,

    /// Timestamp when the trip was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the trip was last modified (UTC)
    pub updated_at: Timestamp,
}

impl fmt::Display for Trip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        // Metadata section
        writeln!(f, "- Status: {}", self.status.with_icon())?;
        writeln!(f, "- Location: {}", self.location)?;
        writeln!(f, "- Dates: {} to {}", self.start_date, self.end_date)?;
        writeln!(f, "- Transport: {}", self.transport)?;
        if self.budget > 0.0 {
            writeln!(f, "- Budget: {:.2} {}", self.budget, self.currency)?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;
        writeln!(f, "- Updated: {}", LocalDateTime(&self.updated_at))?;

        // Description as a paragraph
        if let Some(desc) = &self.description {
            writeln!(f)?;
            writeln!(f, "{desc}")?;
        }

        Ok(())
    }
}

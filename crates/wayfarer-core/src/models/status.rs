//! Status and transport enumerations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of trip statuses.
///
/// The lifecycle is a small state machine: `Planned` → `Ongoing` →
/// `Finished`, with `Cancelled` reachable from `Planned` or `Ongoing`.
/// `Finished` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    /// Trip has been created and not yet started
    #[default]
    Planned,

    /// Trip is underway (start date reached)
    Ongoing,

    /// Trip has ended (end date reached)
    Finished,

    /// Trip was cancelled by the user; terminal
    Cancelled,
}

impl FromStr for TripStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "planned" => Ok(TripStatus::Planned),
            "ongoing" => Ok(TripStatus::Ongoing),
            "finished" => Ok(TripStatus::Finished),
            "cancelled" => Ok(TripStatus::Cancelled),
            _ => Err(format!("Invalid trip status: {s}")),
        }
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TripStatus {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TripStatus::Planned => "planned",
            TripStatus::Ongoing => "ongoing",
            TripStatus::Finished => "finished",
            TripStatus::Cancelled => "cancelled",
        }
    }

    /// Get status with consistent icon formatting for display.
    pub fn with_icon(&self) -> &'static str {
        match self {
            TripStatus::Planned => "○ Planned",
            TripStatus::Ongoing => "➤ Ongoing",
            TripStatus::Finished => "✓ Finished",
            TripStatus::Cancelled => "✗ Cancelled",
        }
    }

    /// True for states that accept no further transitions.
    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Finished | TripStatus::Cancelled)
    }
}

/// Mode of transport for a trip. Descriptive metadata only; the scheduler
/// never branches on it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TransportType {
    Plane,
    Train,
    Bus,
    Car,
    #[default]
    Other,
}

impl FromStr for TransportType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plane" => Ok(TransportType::Plane),
            "train" => Ok(TransportType::Train),
            "bus" => Ok(TransportType::Bus),
            "car" => Ok(TransportType::Car),
            "other" => Ok(TransportType::Other),
            _ => Err(format!("Invalid transport type: {s}")),
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TransportType {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportType::Plane => "plane",
            TransportType::Train => "train",
            TransportType::Bus => "bus",
            TransportType::Car => "car",
            TransportType::Other => "other",
        }
    }
}

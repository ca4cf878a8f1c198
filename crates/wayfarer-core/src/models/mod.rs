//! Data models for trips, users, and notifications.
//!
//! The core domain models of the wayfarer trip planner. Each model implements
//! [`std::fmt::Display`] and formats as readable markdown, so the same data
//! renders consistently in lists, creation results, and detail views (richer
//! contextual wrappers live in [`crate::display`]).

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

mod notification;
mod status;
mod trip;
mod user;


pub use notification::Notification;
pub use status::{TransportType, TripStatus};
pub use trip::Trip;
pub use user::User;

/// A wrapper around [`Timestamp`] that formats it in the system timezone
/// via `Display`.
///
/// The format is `YYYY-MM-DD HH:MM:SS TZ`. The wrapper only holds a
/// reference; formatting happens when `Display::fmt` is called.
pub struct LocalDateTime<'a>(pub &'a Timestamp);

impl<'a> LocalDateTime<'a> {
    /// Create a new `LocalDateTime` wrapper around a timestamp reference.
    pub fn new(timestamp: &'a Timestamp) -> Self {
        Self(timestamp)
    }
}

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(TimeZone::system())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

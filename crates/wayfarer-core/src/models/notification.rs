//! Delivered reminder notifications.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::LocalDateTime;

/// A user-visible reminder that has been delivered by the notification sink.
///
/// `dedupe_key` is the primary key: delivering the same logical reminder
/// twice overwrites the row instead of duplicating it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Deduplication key: base id + trip id + days-before count
    pub dedupe_key: i64,

    /// Trip the reminder belongs to
    pub trip_id: i64,

    /// Notification title
    pub title: String,

    /// Notification body
    pub body: String,

    /// Timestamp when the reminder was (last) delivered (UTC)
    pub delivered_at: Timestamp,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "{}", self.body)?;
        writeln!(f)?;
        writeln!(
            f,
            "- Trip ID: {} — delivered {}",
            self.trip_id,
            LocalDateTime(&self.delivered_at)
        )?;
        Ok(())
    }
}

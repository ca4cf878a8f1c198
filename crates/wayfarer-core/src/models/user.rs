//! The user entity. Authentication lives outside this crate; the row exists
//! to carry trip ownership and the cascading delete.

use std::fmt;

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::LocalDateTime;

/// A registered user. Deleting a user removes their trips via the schema's
/// cascade; pending scheduled tasks for those trips are untouched and fail
/// permanently when they fire against a missing trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Unique identifier for the user
    pub id: i64,

    /// Unique username
    pub username: String,

    /// Timestamp when the user registered (UTC)
    pub created_at: Timestamp,
}

impl fmt::Display for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- **{}** (ID: {}) — registered {}",
            self.username,
            self.id,
            LocalDateTime(&self.created_at)
        )
    }
}

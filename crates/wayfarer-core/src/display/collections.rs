//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use crate::{
    models::{Notification, Trip, User},
    tasks::ScheduledTask,
};

/// Newtype wrapper for displaying collections of trips.
///
/// Renders each trip with its own Display implementation and handles empty
/// collections gracefully.
pub struct Trips(pub Vec<Trip>);

impl Trips {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Trips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No trips found.")
        } else {
            for trip in &self.0 {
                write!(f, "{trip}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying the pending task registry.
pub struct ScheduledTasks(pub Vec<ScheduledTask>);

impl ScheduledTasks {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for ScheduledTasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No pending tasks.")
        } else {
            for task in &self.0 {
                write!(f, "{task}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying delivered notifications.
pub struct Notifications(pub Vec<Notification>);

impl Notifications {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Notifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No notifications delivered.")
        } else {
            for notification in &self.0 {
                write!(f, "{notification}")?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying registered users.
pub struct Users(pub Vec<User>);

impl Users {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Users {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No users found.")
        } else {
            for user in &self.0 {
                write!(f, "{user}")?;
            }
            Ok(())
        }
    }
}

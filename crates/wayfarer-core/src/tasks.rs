//! The scheduled-task contract: names, kinds, payloads, and outcomes.
//!
//! Every deferred action a trip needs is stored in the durable task registry
//! under a deterministic name derived from the trip id and the task kind.
//! The naming scheme is a persisted contract: names must remain stable across
//! versions so cancellation can find previously scheduled work.

use std::{fmt, str::FromStr};

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Base offset for notification dedupe keys. Part of the persisted contract;
/// changing it would re-deliver previously deduplicated reminders.
pub const NOTIFICATION_ID_BASE: i64 = 100;

/// Retry backoff base (seconds).
const BACKOFF_BASE_SECS: i64 = 30;

/// Retry backoff ceiling (seconds).
const BACKOFF_CAP_SECS: i64 = 3600;

/// The kind of deferred work a task row carries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskKind {
    /// Emit a user-visible reminder N days before the start date
    Reminder,
    /// Advance the trip to ONGOING at start-of-day of the start date
    StartTrip,
    /// Advance the trip to FINISHED at start-of-day of the end date
    EndTrip,
}

impl TaskKind {
    /// Convert to database string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskKind::Reminder => "reminder",
            TaskKind::StartTrip => "start_trip",
            TaskKind::EndTrip => "end_trip",
        }
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reminder" => Ok(TaskKind::Reminder),
            "start_trip" => Ok(TaskKind::StartTrip),
            "end_trip" => Ok(TaskKind::EndTrip),
            _ => Err(format!("Invalid task kind: {s}")),
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Unique task name for the 3-day reminder of a trip.
pub fn three_day_reminder_name(trip_id: i64) -> String {
    format!("trip_{trip_id}_3days")
}

/// Unique task name for the 1-day reminder of a trip.
pub fn one_day_reminder_name(trip_id: i64) -> String {
    format!("trip_{trip_id}_1day")
}

/// Unique task name for the PLANNED → ONGOING transition of a trip.
pub fn start_trip_name(trip_id: i64) -> String {
    format!("trip_{trip_id}_startTrip")
}

/// Unique task name for the → FINISHED transition of a trip.
pub fn end_trip_name(trip_id: i64) -> String {
    format!("trip_{trip_id}_endTrip")
}

/// All four task names for a trip, in reminder-then-transition order.
///
/// Cancellation tears these down regardless of which were ever installed;
/// cancelling an absent name is a no-op.
pub fn all_task_names(trip_id: i64) -> [String; 4] {
    [
        three_day_reminder_name(trip_id),
        one_day_reminder_name(trip_id),
        start_trip_name(trip_id),
        end_trip_name(trip_id),
    ]
}

/// Payload for reminder tasks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReminderPayload {
    pub trip_id: i64,
    pub trip_name: String,
    pub days_before: i64,
}

impl ReminderPayload {
    /// Deduplication key for the resulting notification: base offset plus
    /// trip id plus days-before count. The two reminders of one trip never
    /// collide with each other.
    pub fn dedupe_key(&self) -> i64 {
        NOTIFICATION_ID_BASE + self.trip_id + self.days_before
    }
}

/// Payload for status-transition tasks.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransitionPayload {
    pub trip_id: i64,
}

/// A task to install in the registry.
#[derive(Debug, Clone)]
pub struct NewTask {
    /// Unique, deterministic name; scheduling under an existing name
    /// replaces the prior instance
    pub name: String,
    pub kind: TaskKind,
    /// JSON-encoded payload (`ReminderPayload` or `TransitionPayload`)
    pub payload: String,
    /// Instant at which the task becomes due
    pub fire_at: Timestamp,
}

/// A task row read back from the registry.
#[derive(Debug, Clone)]
pub struct ScheduledTask {
    pub name: String,
    pub kind: TaskKind,
    pub payload: String,
    pub fire_at: Timestamp,
    /// Number of times this task has been attempted and retried
    pub attempts: u32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl fmt::Display for ScheduledTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "- `{}` ({}) fires {}{}",
            self.name,
            self.kind,
            crate::models::LocalDateTime(&self.fire_at),
            if self.attempts > 0 {
                format!(" — {} attempt(s) so far", self.attempts)
            } else {
                String::new()
            }
        )
    }
}

/// What an executor reports back to the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskOutcome {
    /// Work completed; the task row is removed
    Success,
    /// Transient failure; the task is re-delivered after a backoff
    Retry,
    /// Permanent failure (malformed payload, missing trip); no retry
    Failure,
}

/// Exponential retry delay in seconds for the given attempt count,
/// capped at one hour.
pub fn retry_backoff_secs(attempts: u32) -> i64 {
    let shift = attempts.min(16);
    (BACKOFF_BASE_SECS << shift).min(BACKOFF_CAP_SECS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_names_match_persisted_contract() {
        assert_eq!(three_day_reminder_name(9), "trip_9_3days");
        assert_eq!(one_day_reminder_name(9), "trip_9_1day");
        assert_eq!(start_trip_name(9), "trip_9_startTrip");
        assert_eq!(end_trip_name(9), "trip_9_endTrip");
    }

    #[test]
    fn all_task_names_covers_every_kind() {
        let names = all_task_names(3);
        assert_eq!(
            names,
            [
                "trip_3_3days".to_string(),
                "trip_3_1day".to_string(),
                "trip_3_startTrip".to_string(),
                "trip_3_endTrip".to_string(),
            ]
        );
    }

    #[test]
    fn task_kind_round_trips_through_strings() {
        for kind in [TaskKind::Reminder, TaskKind::StartTrip, TaskKind::EndTrip] {
            let parsed: TaskKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert!("cron".parse::<TaskKind>().is_err());
    }

    #[test]
    fn dedupe_keys_distinguish_trips_and_day_counts() {
        let three = ReminderPayload {
            trip_id: 42,
            trip_name: "Lisbon".to_string(),
            days_before: 3,
        };
        let one = ReminderPayload {
            days_before: 1,
            ..three.clone()
        };
        let other_trip = ReminderPayload {
            trip_id: 43,
            ..three.clone()
        };

        assert_eq!(three.dedupe_key(), 145);
        assert_ne!(three.dedupe_key(), one.dedupe_key());
        assert_ne!(three.dedupe_key(), other_trip.dedupe_key());
    }

    #[test]
    fn dedupe_key_is_stable_for_same_trip_and_days() {
        let a = ReminderPayload {
            trip_id: 5,
            trip_name: "A".to_string(),
            days_before: 1,
        };
        let b = ReminderPayload {
            trip_id: 5,
            trip_name: "renamed".to_string(),
            days_before: 1,
        };
        assert_eq!(a.dedupe_key(), b.dedupe_key());
    }

    #[test]
    fn backoff_grows_and_caps() {
        assert_eq!(retry_backoff_secs(0), 30);
        assert_eq!(retry_backoff_secs(1), 60);
        assert_eq!(retry_backoff_secs(2), 120);
        assert_eq!(retry_backoff_secs(10), 3600);
        assert_eq!(retry_backoff_secs(u32::MAX), 3600);
    }

    #[test]
    fn reminder_payload_round_trips_through_json() {
        let payload = ReminderPayload {
            trip_id: 7,
            trip_name: "Oslo".to_string(),
            days_before: 3,
        };
        let json = serde_json::to_string(&payload).unwrap();
        let back: ReminderPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(back, payload);
    }
}

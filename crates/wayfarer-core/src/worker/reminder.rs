//! Reminder executor: renders and emits one trip reminder.
//!
//! Delivery is fire-and-forget: once the payload parses, the task reports
//! success even if the sink write fails (the failure is logged). A missing
//! or invalid trip id is a permanent failure, not a retry.

use log::{info, warn};

use crate::{
    db::Database,
    tasks::{ReminderPayload, TaskOutcome},
};

pub(super) fn execute(db: &mut Database, payload: &str) -> TaskOutcome {
    let payload: ReminderPayload = match serde_json::from_str(payload) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Discarding reminder task with malformed payload: {e}");
            return TaskOutcome::Failure;
        }
    };

    if payload.trip_id <= 0 {
        warn!(
            "Discarding reminder task with invalid trip id {}",
            payload.trip_id
        );
        return TaskOutcome::Failure;
    }

    let title = format!("{}-Day Reminder: {}", payload.days_before, payload.trip_name);
    let body = format!(
        "Your trip starts in {} days! Pack your bags.",
        payload.days_before
    );

    if let Err(e) =
        db.record_notification(payload.dedupe_key(), payload.trip_id, &title, &body)
    {
        warn!(
            "Failed to deliver reminder for trip {}: {e}",
            payload.trip_id
        );
    } else {
        info!(
            "Delivered {}-day reminder for trip {}",
            payload.days_before, payload.trip_id
        );
    }

    TaskOutcome::Success
}

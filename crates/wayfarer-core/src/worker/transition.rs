//! Status-transition executors.
//!
//! One executor per transition, identical apart from the target status. The
//! write is unconditional: the executor does not verify the trip's current
//! status before transitioning, so a stale task that survives cancellation
//! can overwrite a terminal status.

use log::{info, warn};

use crate::{
    db::Database,
    error::WayfarerError,
    models::TripStatus,
    tasks::{TaskOutcome, TransitionPayload},
};

pub(super) fn execute(db: &mut Database, payload: &str, target: TripStatus) -> TaskOutcome {
    let payload: TransitionPayload = match serde_json::from_str(payload) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Discarding transition task with malformed payload: {e}");
            return TaskOutcome::Failure;
        }
    };

    match db.update_trip_status(payload.trip_id, target) {
        Ok(()) => {
            info!("Trip {} transitioned to {target}", payload.trip_id);
            TaskOutcome::Success
        }
        // The trip was deleted after scheduling; retrying can never succeed.
        Err(WayfarerError::TripNotFound { id }) => {
            warn!("Discarding transition task for missing trip {id}");
            TaskOutcome::Failure
        }
        Err(e) if e.is_transient() => {
            warn!(
                "Transient store error transitioning trip {} to {target}, will retry: {e}",
                payload.trip_id
            );
            TaskOutcome::Retry
        }
        Err(e) => {
            warn!(
                "Unrecoverable error transitioning trip {} to {target}: {e}",
                payload.trip_id
            );
            TaskOutcome::Failure
        }
    }
}

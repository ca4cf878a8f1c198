//! Task executors: the units of work the dispatcher invokes when a
//! scheduled task becomes due.
//!
//! Each invocation is isolated and stateless: the executor gets the task's
//! payload and a store handle, applies its single effect, and reports a
//! [`TaskOutcome`]. Executors may run years after scheduling and may be
//! re-delivered (at-least-once), so every effect here is idempotent.

mod reminder;
mod transition;

use crate::{
    db::Database,
    models::TripStatus,
    tasks::{ScheduledTask, TaskKind, TaskOutcome},
};

/// Executes one due task, dispatching on its kind.
pub fn execute_task(db: &mut Database, task: &ScheduledTask) -> TaskOutcome {
    match task.kind {
        TaskKind::Reminder => reminder::execute(db, &task.payload),
        TaskKind::StartTrip => transition::execute(db, &task.payload, TripStatus::Ongoing),
        TaskKind::EndTrip => transition::execute(db, &task.payload, TripStatus::Finished),
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use jiff::Timestamp;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::{
        params::{CreateTrip, CreateUser},
        tasks::{ReminderPayload, TransitionPayload},
    };

    fn test_db() -> (NamedTempFile, Database) {
        let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
        let db = Database::new(temp_file.path()).expect("Failed to create test database");
        (temp_file, db)
    }

    fn seed_trip(db: &mut Database) -> i64 {
        let user = db
            .create_user(&CreateUser {
                username: "traveler".to_string(),
            })
            .expect("Failed to create user");
        db.create_trip(&CreateTrip {
            user_id: user.id,
            name: "Lisbon".to_string(),
            description: None,
            location: "Lisbon".to_string(),
            transport: Default::default(),
            budget: 0.0,
            currency: String::new(),
            start_date: date(2030, 4, 10),
            end_date: date(2030, 4, 17),
        })
        .expect("Failed to create trip")
        .id
    }

    fn task(kind: TaskKind, payload: String) -> ScheduledTask {
        ScheduledTask {
            name: "test_task".to_string(),
            kind,
            payload,
            fire_at: Timestamp::now(),
            attempts: 0,
            created_at: Timestamp::now(),
            updated_at: Timestamp::now(),
        }
    }

    #[test]
    fn start_transition_moves_planned_to_ongoing() {
        let (_f, mut db) = test_db();
        let trip_id = seed_trip(&mut db);

        let payload = serde_json::to_string(&TransitionPayload { trip_id }).unwrap();
        let outcome = execute_task(&mut db, &task(TaskKind::StartTrip, payload));

        assert_eq!(outcome, TaskOutcome::Success);
        let trip = db.get_trip(trip_id).unwrap().unwrap();
        assert_eq!(trip.status, TripStatus::Ongoing);
    }

    #[test]
    fn end_transition_moves_to_finished() {
        let (_f, mut db) = test_db();
        let trip_id = seed_trip(&mut db);

        let payload = serde_json::to_string(&TransitionPayload { trip_id }).unwrap();
        let outcome = execute_task(&mut db, &task(TaskKind::EndTrip, payload));

        assert_eq!(outcome, TaskOutcome::Success);
        let trip = db.get_trip(trip_id).unwrap().unwrap();
        assert_eq!(trip.status, TripStatus::Finished);
    }

    #[test]
    fn transition_is_idempotent_on_redelivery() {
        let (_f, mut db) = test_db();
        let trip_id = seed_trip(&mut db);
        let payload = serde_json::to_string(&TransitionPayload { trip_id }).unwrap();

        let first = execute_task(&mut db, &task(TaskKind::StartTrip, payload.clone()));
        let second = execute_task(&mut db, &task(TaskKind::StartTrip, payload));

        assert_eq!(first, TaskOutcome::Success);
        assert_eq!(second, TaskOutcome::Success);
        let trip = db.get_trip(trip_id).unwrap().unwrap();
        assert_eq!(trip.status, TripStatus::Ongoing);
    }

    #[test]
    fn malformed_transition_payload_is_permanent_failure() {
        let (_f, mut db) = test_db();

        let outcome = execute_task(&mut db, &task(TaskKind::StartTrip, "not json".to_string()));
        assert_eq!(outcome, TaskOutcome::Failure);
    }

    #[test]
    fn transition_against_missing_trip_is_permanent_failure() {
        let (_f, mut db) = test_db();

        let payload = serde_json::to_string(&TransitionPayload { trip_id: 9999 }).unwrap();
        let outcome = execute_task(&mut db, &task(TaskKind::EndTrip, payload));
        assert_eq!(outcome, TaskOutcome::Failure);
    }

    #[test]
    fn reminder_records_notification_under_dedupe_key() {
        let (_f, mut db) = test_db();
        let trip_id = seed_trip(&mut db);

        let payload = ReminderPayload {
            trip_id,
            trip_name: "Lisbon".to_string(),
            days_before: 3,
        };
        let json = serde_json::to_string(&payload).unwrap();
        let outcome = execute_task(&mut db, &task(TaskKind::Reminder, json));
        assert_eq!(outcome, TaskOutcome::Success);

        let stored = db
            .get_notification(payload.dedupe_key())
            .unwrap()
            .expect("notification should be recorded");
        assert_eq!(stored.title, "3-Day Reminder: Lisbon");
        assert_eq!(stored.body, "Your trip starts in 3 days! Pack your bags.");
        assert_eq!(stored.trip_id, trip_id);
    }

    #[test]
    fn reminders_for_different_day_counts_do_not_collide() {
        let (_f, mut db) = test_db();
        let trip_id = seed_trip(&mut db);

        for days_before in [3, 1] {
            let payload = ReminderPayload {
                trip_id,
                trip_name: "Lisbon".to_string(),
                days_before,
            };
            let json = serde_json::to_string(&payload).unwrap();
            assert_eq!(
                execute_task(&mut db, &task(TaskKind::Reminder, json)),
                TaskOutcome::Success
            );
        }

        assert_eq!(db.list_notifications().unwrap().len(), 2);
    }

    #[test]
    fn redelivered_reminder_overwrites_instead_of_duplicating() {
        let (_f, mut db) = test_db();
        let trip_id = seed_trip(&mut db);

        let payload = ReminderPayload {
            trip_id,
            trip_name: "Lisbon".to_string(),
            days_before: 1,
        };
        let json = serde_json::to_string(&payload).unwrap();
        execute_task(&mut db, &task(TaskKind::Reminder, json.clone()));
        execute_task(&mut db, &task(TaskKind::Reminder, json));

        assert_eq!(db.list_notifications().unwrap().len(), 1);
    }

    #[test]
    fn reminder_with_invalid_trip_id_is_permanent_failure() {
        let (_f, mut db) = test_db();

        let json = r#"{"trip_id": -1, "trip_name": "Ghost", "days_before": 3}"#;
        let outcome = execute_task(&mut db, &task(TaskKind::Reminder, json.to_string()));
        assert_eq!(outcome, TaskOutcome::Failure);
        assert!(db.list_notifications().unwrap().is_empty());
    }
}

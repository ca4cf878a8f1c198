//! Lifecycle planning: which deferred actions a trip requires.
//!
//! The computation is pure: given a trip, the current instant, and a
//! timezone it returns the task set to install. No state is held between
//! scheduling and execution; re-running the computation later (e.g. from the
//! reconciliation pass) converges on the same names, and replace-by-name
//! semantics make re-installation idempotent.

use jiff::{civil::Date, tz::TimeZone, Timestamp, ToSpan};

use crate::{
    error::Result,
    models::Trip,
    tasks::{
        end_trip_name, one_day_reminder_name, start_trip_name, three_day_reminder_name, NewTask,
        ReminderPayload, TaskKind, TransitionPayload,
    },
};

/// The instant a calendar day begins in the given timezone.
fn start_of_day(date: Date, tz: &TimeZone) -> Result<Timestamp> {
    Ok(date.to_zoned(tz.clone())?.timestamp())
}

/// Computes the deferred actions a freshly created (or reconciled) trip
/// requires, relative to `now`:
///
/// 1. a reminder at start-of-day three days before the start date,
/// 2. a reminder at start-of-day one day before the start date,
/// 3. the PLANNED → ONGOING transition at start-of-day of the start date,
/// 4. the → FINISHED transition at start-of-day of the end date.
///
/// Each action is included only when its instant is strictly in the future;
/// anything already past is silently skipped. A trip whose start date has
/// passed therefore gets no reminders and no start transition, and stays
/// PLANNED until user action.
pub fn plan_trip_tasks(trip: &Trip, now: Timestamp, tz: &TimeZone) -> Result<Vec<NewTask>> {
    let mut tasks = Vec::with_capacity(4);

    for (days_before, name) in [
        (3, three_day_reminder_name(trip.id)),
        (1, one_day_reminder_name(trip.id)),
    ] {
        let remind_date = trip.start_date.checked_sub(days_before.days())?;
        let fire_at = start_of_day(remind_date, tz)?;
        if fire_at > now {
            let payload = ReminderPayload {
                trip_id: trip.id,
                trip_name: trip.name.clone(),
                days_before,
            };
            tasks.push(NewTask {
                name,
                kind: TaskKind::Reminder,
                payload: serde_json::to_string(&payload)?,
                fire_at,
            });
        }
    }

    let transition_payload = serde_json::to_string(&TransitionPayload { trip_id: trip.id })?;

    let starts_at = start_of_day(trip.start_date, tz)?;
    if starts_at > now {
        tasks.push(NewTask {
            name: start_trip_name(trip.id),
            kind: TaskKind::StartTrip,
            payload: transition_payload.clone(),
            fire_at: starts_at,
        });
    }

    let ends_at = start_of_day(trip.end_date, tz)?;
    if ends_at > now {
        tasks.push(NewTask {
            name: end_trip_name(trip.id),
            kind: TaskKind::EndTrip,
            payload: transition_payload,
            fire_at: ends_at,
        });
    }

    Ok(tasks)
}

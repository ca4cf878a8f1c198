use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color flag for testing
fn wayfarer_cmd() -> Command {
    let mut cmd = Command::cargo_bin("wayfarer").expect("Failed to find wayfarer binary");
    cmd.arg("--no-color");
    cmd
}

/// Creates a user and returns nothing; tests rely on it getting ID 1 in a
/// fresh database.
fn seed_user(db_arg: &str) {
    wayfarer_cmd()
        .args(["--database-file", db_arg, "user", "add", "ada"])
        .assert()
        .success();
}

#[test]
fn test_cli_add_user() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "user",
            "add",
            "ada",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created user with ID: 1"))
        .stdout(predicate::str::contains("ada"));
}

#[test]
fn test_cli_list_users() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No users found."));

    seed_user(db_arg);

    wayfarer_cmd()
        .args(["--database-file", db_arg, "user", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ada"));
}

#[test]
fn test_cli_add_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    seed_user(db_arg);

    wayfarer_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "add",
            "1",
            "Kyoto",
            "--location",
            "Kyoto, Japan",
            "--transport",
            "train",
            "--start-date",
            "2030-04-01",
            "--end-date",
            "2030-04-08",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created trip with ID: 1"))
        .stdout(predicate::str::contains("Kyoto"))
        .stdout(predicate::str::contains("Planned"));
}

#[test]
fn test_cli_add_trip_rejects_inverted_dates() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    seed_user(db_arg);

    wayfarer_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "add",
            "1",
            "Backwards",
            "--start-date",
            "2030-04-08",
            "--end-date",
            "2030-04-01",
        ])
        .assert()
        .failure();
}

#[test]
fn test_cli_trip_add_installs_tasks() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    seed_user(db_arg);

    wayfarer_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "add",
            "1",
            "Kyoto",
            "--start-date",
            "2030-04-01",
            "--end-date",
            "2030-04-08",
        ])
        .assert()
        .success();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "tasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("trip_1_3days"))
        .stdout(predicate::str::contains("trip_1_1day"))
        .stdout(predicate::str::contains("trip_1_startTrip"))
        .stdout(predicate::str::contains("trip_1_endTrip"));
}

#[test]
fn test_cli_cancel_trip_clears_tasks() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    seed_user(db_arg);

    wayfarer_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "add",
            "1",
            "Doomed",
            "--start-date",
            "2030-04-01",
            "--end-date",
            "2030-04-08",
        ])
        .assert()
        .success();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "trip", "cancel", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled trip 1"));

    wayfarer_cmd()
        .args(["--database-file", db_arg, "tasks"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No pending tasks."));

    wayfarer_cmd()
        .args(["--database-file", db_arg, "trip", "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));
}

#[test]
fn test_cli_list_trips_with_status_filter() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    seed_user(db_arg);

    for name in ["Keeper", "Dropped"] {
        wayfarer_cmd()
            .args([
                "--database-file",
                db_arg,
                "trip",
                "add",
                "1",
                name,
                "--start-date",
                "2030-04-01",
                "--end-date",
                "2030-04-08",
            ])
            .assert()
            .success();
    }
    wayfarer_cmd()
        .args(["--database-file", db_arg, "trip", "cancel", "2"])
        .assert()
        .success();

    wayfarer_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "list",
            "1",
            "--status",
            "planned",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Keeper"))
        .stdout(predicate::str::contains("Dropped").not());
}

#[test]
fn test_cli_show_missing_trip() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "trip",
            "show",
            "42",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trip 42 not found"));
}

#[test]
fn test_cli_run_once_with_nothing_due() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "run",
            "--once",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Executed 0 due task(s)"));
}

#[test]
fn test_cli_reconcile() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");
    let db_arg = db_path.to_str().unwrap();
    seed_user(db_arg);

    wayfarer_cmd()
        .args([
            "--database-file",
            db_arg,
            "trip",
            "add",
            "1",
            "Kyoto",
            "--start-date",
            "2030-04-01",
            "--end-date",
            "2030-04-08",
        ])
        .assert()
        .success();

    wayfarer_cmd()
        .args(["--database-file", db_arg, "reconcile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 task(s) installed"));
}

#[test]
fn test_cli_notifications_empty() {
    let temp_dir = create_cli_test_environment();
    let db_path = temp_dir.path().join("cli_test.db");

    wayfarer_cmd()
        .args([
            "--database-file",
            db_path.to_str().unwrap(),
            "notifications",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No notifications delivered."));
}

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

#[test]
fn test_help_command() {
    let mut cmd = Command::cargo_bin("stridecoach").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Training plan parser"))
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("metrics"))
        .stdout(predicate::str::contains("report"));
}

#[test]
fn test_plan_table_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.md");
    fs::write(&path, "| Week | Mon | Tue |\n|---|---|---|\n| 1 | 5km | - |\n").unwrap();

    let mut cmd = Command::cargo_bin("stridecoach").unwrap();
    cmd.arg("plan").arg("--file").arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Parsed 1 weeks (table format)"))
        .stdout(predicate::str::contains("Mon 5km (run)"))
        .stdout(predicate::str::contains("Tue - (rest)"))
        .stdout(predicate::str::contains("Wed Rest (rest)"));
}

#[test]
fn test_plan_json_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plan.md");
    fs::write(&path, "### Monday\nRest day\n### Tuesday\n5km tempo run\n").unwrap();

    let mut cmd = Command::cargo_bin("stridecoach").unwrap();
    cmd.arg("plan").arg("--file").arg(&path).arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"weekTitle\": \"Training Plan\""))
        .stdout(predicate::str::contains("\"type\": \"rest\""));
}

#[test]
fn test_metrics_on_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("activities.json");
    fs::write(&path, "[]").unwrap();

    let mut cmd = Command::cargo_bin("stridecoach").unwrap();
    cmd.arg("metrics")
        .arg("--activities")
        .arg(&path)
        .arg("--as-of")
        .arg("2025-06-15T12:00:00Z")
        .arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"load7\": 0.0"))
        .stdout(predicate::str::contains("\"progressScore\": 50"))
        .stdout(predicate::str::contains("\"asOf\": \"2025-06-15T12:00:00Z\""));
}

#[test]
fn test_as_of_from_environment() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("activities.csv");
    fs::write(
        &path,
        "type,startTime,distanceM,movingS\nRun,2025-06-14T07:00:00Z,5000,1800\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("stridecoach").unwrap();
    cmd.env("STRIDECOACH_AS_OF", "2025-06-15T12:00:00Z")
        .arg("metrics")
        .arg("--activities")
        .arg(&path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Load 7d 30, 28d 30, ratio 4.00"))
        .stdout(predicate::str::contains("- consistency: 7 (Very Low)"));
}

#[test]
fn test_report_written_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let activities = dir.path().join("activities.json");
    let out = dir.path().join("report.md");
    fs::write(
        &activities,
        r#"[{"type":"Run","startTime":"2025-06-14T07:00:00Z","distanceM":8000,"movingS":2730,"averageHr":150}]"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("stridecoach").unwrap();
    cmd.arg("report")
        .arg("--activities")
        .arg(&activities)
        .arg("--as-of")
        .arg("2025-06-15T12:00:00Z")
        .arg("--out")
        .arg(&out);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let report = fs::read_to_string(&out).unwrap();
    assert!(report.contains("No training plan uploaded."));
    assert!(report.contains("2025-06-14 Run: 8.00 km in 45.5 min (5:41/km, avg HR 150)"));
}

#[test]
fn test_missing_activities_file_fails() {
    let mut cmd = Command::cargo_bin("stridecoach").unwrap();
    cmd.arg("metrics").arg("--activities").arg("/nonexistent/activities.json");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

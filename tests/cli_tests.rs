use predicates::prelude::*;

mod common;
use common::{holidays_yaml, rc, temp_file, SAMPLE_TRANSCRIPT};

#[test]
fn parse_prints_events() {
    let transcript = temp_file("cli_parse", "txt", SAMPLE_TRANSCRIPT);

    rc().args(["parse", &transcript])
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed 1 event(s)"))
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("2025-03-06 9:05 AM"));
}

#[test]
fn parse_reads_stdin_dash() {
    rc().args(["parse", "-"])
        .write_stdin(SAMPLE_TRANSCRIPT)
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsed 1 event(s)"));
}

#[test]
fn parse_json_is_machine_readable() {
    let transcript = temp_file("cli_parse_json", "txt", SAMPLE_TRANSCRIPT);

    let out = rc()
        .args(["parse", &transcript, "--json"])
        .output()
        .expect("run parse --json");
    assert!(out.status.success());

    let v: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("stdout must be valid JSON");
    assert_eq!(v["events"].as_array().map(|a| a.len()), Some(1));
    assert_eq!(v["events"][0]["employee_name"], "John Doe");
}

#[test]
fn list_classifies_date_wise() {
    let transcript = temp_file("cli_list", "txt", SAMPLE_TRANSCRIPT);

    // 9:05 AM → 6:10 PM is 9h05m on a Thursday: Full Day
    rc().args(["list", &transcript])
        .assert()
        .success()
        .stdout(predicate::str::contains("2025-03-06"))
        .stdout(predicate::str::contains("Full Day"));
}

#[test]
fn list_honors_holiday_calendar() {
    let transcript = temp_file(
        "cli_list_holiday",
        "txt",
        "14 Mar, 2025\nJohn Doe, 9:05 AM?\nCI RO\nJohn Doe, 6:10 PM?\nCO RO\n",
    );
    let holidays = holidays_yaml("cli_list_holiday");

    rc().args(["list", &transcript, "--holidays", &holidays])
        .assert()
        .success()
        .stdout(predicate::str::contains("Holiday"));
}

#[test]
fn list_with_no_records_prints_notice() {
    let transcript = temp_file("cli_list_empty", "txt", "6 Mar, 2025\nhello everyone\n");

    rc().args(["list", &transcript])
        .assert()
        .success()
        .stdout(predicate::str::contains("No attendance records found."));
}

#[test]
fn list_marks_low_hours_day_ab() {
    // 9:05 AM → 11:05 AM is 2h on a Thursday: low-hours absent
    let transcript = temp_file(
        "cli_list_low",
        "txt",
        "6 Mar, 2025\nJohn Doe, 9:05 AM?\nCI RO\nJohn Doe, 11:05 AM?\nCO RO\n",
    );

    rc().args(["list", &transcript])
        .assert()
        .success()
        .stdout(predicate::str::contains("AB"));
}

#[test]
fn pivot_summarizes_month() {
    let transcript = temp_file("cli_pivot", "txt", SAMPLE_TRANSCRIPT);

    rc().args(["pivot", &transcript, "--period", "2025-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== 2025-03 ==="))
        .stdout(predicate::str::contains("John Doe"))
        .stdout(predicate::str::contains("late marks: 0"));
}

#[test]
fn pivot_period_defaults_to_transcript_month() {
    let transcript = temp_file("cli_pivot_default", "txt", SAMPLE_TRANSCRIPT);

    rc().args(["pivot", &transcript])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== 2025-03 ==="));
}

#[test]
fn pivot_rejects_bad_period() {
    let transcript = temp_file("cli_pivot_bad", "txt", SAMPLE_TRANSCRIPT);

    rc().args(["pivot", &transcript, "--period", "banana"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));
}

#[test]
fn config_check_reports_defaults_ok() {
    rc().args(["--test", "config", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration OK."));
}

#[test]
fn custom_config_changes_rules() {
    // with a 10h full-day bar the sample day is only a Half Day
    let cfg = temp_file(
        "cli_custom_cfg",
        "yaml",
        "low_hours_threshold: 5.0\nfull_day_threshold: 10.0\nlate_cutoff: \"10:00:00\"\noffice_codes: [ro, mo, rso, do, wfh]\n",
    );
    let transcript = temp_file("cli_custom_cfg", "txt", SAMPLE_TRANSCRIPT);

    rc().args(["--config", &cfg, "list", &transcript])
        .assert()
        .success()
        .stdout(predicate::str::contains("Half Day"));
}

use predicates::prelude::*;
use std::fs;

mod common;
use common::{rc, temp_file, temp_out, SAMPLE_TRANSCRIPT};

#[test]
fn export_csv_writes_summary_rows() {
    let transcript = temp_file("export_csv", "txt", SAMPLE_TRANSCRIPT);
    let out = temp_out("export_csv", "csv");

    rc().args([
        "export",
        &transcript,
        "--period",
        "2025-03",
        "--format",
        "csv",
        "--out",
        &out,
    ])
    .assert()
    .success()
    .stdout(predicate::str::contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("csv written");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some("employee,period,present_days,late_marks,total_hours,days_worked,average_hours")
    );
    let row = lines.next().expect("one data row");
    assert!(row.starts_with("John Doe,2025-03,"));
}

#[test]
fn export_json_contains_cells() {
    let transcript = temp_file("export_json", "txt", SAMPLE_TRANSCRIPT);
    let out = temp_out("export_json", "json");

    rc().args([
        "export",
        &transcript,
        "--period",
        "2025-03",
        "--format",
        "json",
        "--out",
        &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("json written");
    let v: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
    assert_eq!(v[0]["employee_name"], "John Doe");
    assert_eq!(v[0]["cells"]["6"]["status"], "FullDay");
    // the sample month has 31 days of cells
    assert_eq!(v[0]["cells"].as_object().map(|o| o.len()), Some(31));
}

#[test]
fn export_refuses_overwrite_without_force() {
    let transcript = temp_file("export_force", "txt", SAMPLE_TRANSCRIPT);
    let out = temp_file("export_force_existing", "csv", "already here");

    rc().args([
        "export",
        &transcript,
        "--period",
        "2025-03",
        "--out",
        &out,
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("already exists"));

    // unchanged without --force
    assert_eq!(fs::read_to_string(&out).expect("file intact"), "already here");

    rc().args([
        "export",
        &transcript,
        "--period",
        "2025-03",
        "--out",
        &out,
        "--force",
    ])
    .assert()
    .success();

    assert_ne!(fs::read_to_string(&out).expect("file rewritten"), "already here");
}

#[test]
fn export_with_roster_includes_absent_employee() {
    let transcript = temp_file("export_roster", "txt", SAMPLE_TRANSCRIPT);
    let roster = temp_file(
        "export_roster_list",
        "yaml",
        "- id: 1\n  name: John Doe\n- id: 2\n  name: Jane Roe\n",
    );
    let out = temp_out("export_roster", "csv");

    rc().args([
        "export",
        &transcript,
        "--period",
        "2025-03",
        "--roster",
        &roster,
        "--out",
        &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("csv written");
    assert!(content.contains("John Doe"));
    // on the roster but never in the transcript: a zero row, not a missing one
    assert!(content.contains("Jane Roe,2025-03,0"));
}

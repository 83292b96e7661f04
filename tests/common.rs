#![allow(dead_code)]
use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rc() -> Command {
    Command::cargo_bin("rollcall").expect("binary built")
}

/// Transcript used across tests: one full CI/CO pair.
pub const SAMPLE_TRANSCRIPT: &str = "6 Mar, 2025
John Doe, 9:05 AM?
CI RO
John Doe, 6:10 PM?
CO RO
";

/// Write content into a unique temp file and return its path.
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::write(&p, content).expect("write temp file");
    p
}

/// Create a temporary output file path and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rollcall_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Minimal holiday calendar: Holi on 2025-03-14 for RO/MO.
pub fn holidays_yaml(name: &str) -> String {
    temp_file(
        name,
        "yaml",
        "- date: \"2025-03-14\"\n  name: Holi\n  locations: [ro, mo]\n",
    )
}

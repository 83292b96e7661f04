//! CLI surface: argument definitions plus the helpers shared by the
//! command handlers (transcript input, collaborator files, period
//! resolution). The engine itself stays free of I/O; everything
//! file-shaped happens here.

pub mod commands;
pub mod parser;

use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::employee::Employee;
use crate::models::holiday::Holiday;
use crate::utils::date::{parse_date, parse_period};
use std::fs;
use std::io::Read;

/// Read a transcript from a file, or from stdin when the path is "-".
pub fn read_transcript(file: &str) -> AppResult<String> {
    if file == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(file)?)
    }
}

/// Load the holiday calendar (YAML list), empty when no file given.
pub fn load_holidays(file: Option<&str>) -> AppResult<Vec<Holiday>> {
    match file {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        }
        None => Ok(Vec::new()),
    }
}

/// Load the roster (YAML list); with no file the roster is derived from
/// the distinct employee names in the records, in first-seen order.
pub fn load_roster(file: Option<&str>, records: &[DayRecord]) -> AppResult<Vec<Employee>> {
    if let Some(path) = file {
        let content = fs::read_to_string(path)?;
        return Ok(serde_yaml::from_str(&content)?);
    }

    let mut roster: Vec<Employee> = Vec::new();
    for r in records {
        if !roster.iter().any(|e| e.name == r.employee_name) {
            roster.push(Employee::new(roster.len() as u32 + 1, &r.employee_name));
        }
    }
    Ok(roster)
}

/// Resolve the pivot period: explicit `--period YYYY-MM`, else the month
/// of the first record whose date parses.
pub fn resolve_period(period: Option<&str>, records: &[DayRecord]) -> AppResult<(i32, u32)> {
    use chrono::Datelike;

    if let Some(p) = period {
        return parse_period(p);
    }

    records
        .iter()
        .find_map(|r| parse_date(&r.date))
        .map(|d| (d.year(), d.month()))
        .ok_or_else(|| {
            AppError::InvalidPeriod(
                "no parseable record date; pass --period YYYY-MM".to_string(),
            )
        })
}

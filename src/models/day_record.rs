use super::raw_event::clock_of;
use super::status::DayStatus;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Merged attendance for one employee on one day.
/// Identity key is `(employee_name, date)`; the aggregator guarantees at
/// most one record per key. `work_hours` is the sum of all leg deltas for
/// the day, not `out − in` of the extremes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayRecord {
    pub employee_name: String,
    /// "YYYY-MM-DD" when the block header parsed, else the literal
    /// first line of the block.
    pub date: String,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub work_hours: f64,
    pub location_code: Option<String>,
    #[serde(default)]
    pub status: DayStatus,
}

impl DayRecord {
    pub fn new(employee_name: &str, date: &str) -> Self {
        Self {
            employee_name: employee_name.to_string(),
            date: date.to_string(),
            in_time: None,
            out_time: None,
            work_hours: 0.0,
            location_code: None,
            status: DayStatus::Blank,
        }
    }

    /// Time-of-day of the first check-in, when it parses.
    pub fn clock_in(&self) -> Option<NaiveTime> {
        clock_of(self.in_time.as_deref(), &self.date)
    }

    /// One punch boundary is missing.
    pub fn has_open_boundary(&self) -> bool {
        self.in_time.is_none() || self.out_time.is_none()
    }

    /// Lowercased whitespace tokens of the location code.
    pub fn location_tokens(&self) -> Vec<String> {
        self.location_code
            .as_deref()
            .unwrap_or("")
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect()
    }
}

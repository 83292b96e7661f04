use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveTime};

/// Date patterns accepted on a transcript's first line, tried in order.
/// "6 Mar, 2025", "Mar 6,2025", "6 Mar 2025", "Mar 6 2025",
/// "March 6, 2025", "6 March, 2025", "2025-03-06".
pub const TRANSCRIPT_DATE_FORMATS: &[&str] = &[
    "%d %b, %Y",
    "%b %d,%Y",
    "%d %b %Y",
    "%b %d %Y",
    "%B %d, %Y",
    "%d %B, %Y",
    "%Y-%m-%d",
];

/// Clock formats seen in pasted headers: "9:05 AM", "18:10:00", "18:10".
const CLOCK_FORMATS: &[&str] = &["%I:%M %p", "%I:%M:%S %p", "%H:%M:%S", "%H:%M"];

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// First transcript pattern that parses wins; the result is normalized to
/// "YYYY-MM-DD". None means the caller keeps the raw line as a literal
/// fallback date.
pub fn parse_transcript_date(line: &str) -> Option<NaiveDate> {
    TRANSCRIPT_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(line, fmt).ok())
}

pub fn parse_clock(s: &str) -> Option<NaiveTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    CLOCK_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(s, fmt).ok())
}

/// "YYYY-MM" → (year, month).
pub fn parse_period(p: &str) -> AppResult<(i32, u32)> {
    if let Ok(d) = NaiveDate::parse_from_str(&(p.to_string() + "-01"), "%Y-%m-%d") {
        return Ok((d.year(), d.month()));
    }
    Err(AppError::InvalidPeriod(p.to_string()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let Some(mut d) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return out;
    };

    while d.month() == month {
        out.push(d);
        match d.succ_opt() {
            Some(next) => d = next,
            None => break,
        }
    }

    out
}

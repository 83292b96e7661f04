//! Day classification: one merged record + the holiday calendar + the
//! weekday → a labeled cell.
//!
//! Pure transform: the input record is never mutated, repeated calls with
//! the same inputs return the same label. Rules run in strict priority
//! order, first match wins.

use crate::models::day_record::DayRecord;
use crate::models::holiday::{holiday_on, Holiday};
use crate::models::status::DayStatus;
use crate::models::summary::ClassifiedCell;
use chrono::{NaiveTime, Weekday};
use std::collections::HashSet;

/// Thresholds and the in-office allowlist, injected instead of scattered
/// literals. `Default` is the canonical rule set.
#[derive(Debug, Clone)]
pub struct ClassifierConfig {
    pub low_hours_threshold: f64,
    pub full_day_threshold: f64,
    pub late_cutoff: NaiveTime,
    pub office_codes: HashSet<String>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            low_hours_threshold: 5.0,
            full_day_threshold: 8.5,
            // 10:00:00 exactly is not late; the check is a strict "after".
            late_cutoff: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN),
            office_codes: ["ro", "mo", "rso", "do", "wfh"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl ClassifierConfig {
    /// A location code whose tokens never touch the office allowlist
    /// marks a site visit.
    pub fn is_site_visit(&self, record: &DayRecord) -> bool {
        let tokens = record.location_tokens();
        !tokens.is_empty() && tokens.iter().all(|t| !self.office_codes.contains(t))
    }
}

/// Classify one day. Always returns a label; malformed fields degrade to
/// the weekday table rather than erroring.
pub fn classify_day(
    record: &DayRecord,
    holidays: &[Holiday],
    weekday: Weekday,
    cfg: &ClassifierConfig,
) -> ClassifiedCell {
    let hours = record.work_hours;

    // 1. Holiday overrides everything, including recorded hours.
    if holiday_on(holidays, &record.date, record.location_code.as_deref()).is_some() {
        return ClassifiedCell::of(DayStatus::Holiday);
    }

    let site_visit = cfg.is_site_visit(record);

    // 2. Partial punch with enough accumulated hours to look real.
    if !site_visit
        && record.status != DayStatus::Absent
        && hours >= cfg.low_hours_threshold
        && record.has_open_boundary()
    {
        return ClassifiedCell::of(DayStatus::Incomplete);
    }

    // 3. Site visit (never on Sunday).
    if weekday != Weekday::Sun && site_visit {
        let status = if record.has_open_boundary() {
            DayStatus::SiteVisitIncomplete
        } else {
            DayStatus::SiteVisitPresent
        };
        return ClassifiedCell::of(status);
    }

    // 4. Hours were logged but not enough: the bold "AB" variant.
    if record.status != DayStatus::Absent && hours < cfg.low_hours_threshold {
        return ClassifiedCell::of(DayStatus::AbsentLow);
    }

    // 5. Sunday table; the late-mark rule never applies here.
    if weekday == Weekday::Sun {
        let status = if hours < cfg.low_hours_threshold {
            DayStatus::Absent
        } else if hours < cfg.full_day_threshold {
            DayStatus::HalfDay
        } else {
            DayStatus::FullDay
        };
        return ClassifiedCell::of(status);
    }

    // 6. Weekday table.
    let status = if hours < cfg.low_hours_threshold {
        DayStatus::Absent
    } else if hours < cfg.full_day_threshold {
        DayStatus::HalfDay
    } else if is_late(record, cfg) {
        DayStatus::LateMark
    } else {
        DayStatus::FullDay
    };

    ClassifiedCell::of(status)
}

/// Rule 7: a past, non-Sunday, non-holiday date with no record at all.
/// Used only by the monthly pivot, never by the date-wise listing.
pub fn absent_placeholder() -> ClassifiedCell {
    ClassifiedCell::of(DayStatus::Absent)
}

/// Strictly after the cutoff; an unparseable check-in is never late.
fn is_late(record: &DayRecord, cfg: &ClassifierConfig) -> bool {
    match record.clock_in() {
        Some(t) => t > cfg.late_cutoff,
        None => false,
    }
}

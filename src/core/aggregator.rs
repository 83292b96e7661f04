//! Event merging: raw CI/CO legs → one `DayRecord` per (employee, date).
//!
//! Safe to call repeatedly as new blocks arrive for the same day;
//! `merge_into` folds fresh events into records produced earlier.

use crate::models::day_record::DayRecord;
use crate::models::raw_event::RawEvent;
use crate::models::status::DayStatus;
use crate::utils::date::parse_clock;

/// Merge a batch of raw events into day records, one per
/// `(employee_name, date)`. Record order follows first appearance.
pub fn merge_events(events: &[RawEvent]) -> Vec<DayRecord> {
    merge_into(Vec::new(), events)
}

/// Fold `events` into an existing record set. Merge rules per key:
/// earliest in, latest out, summed leg hours, first non-empty location.
/// A `Late Mark` already carried by a record survives the merge.
pub fn merge_into(mut records: Vec<DayRecord>, events: &[RawEvent]) -> Vec<DayRecord> {
    for ev in events {
        let idx = records
            .iter()
            .position(|r| r.employee_name == ev.employee_name && r.date == ev.date);

        let rec = match idx {
            Some(i) => &mut records[i],
            None => {
                records.push(DayRecord::new(&ev.employee_name, &ev.date));
                let last = records.len() - 1;
                &mut records[last]
            }
        };

        merge_event(rec, ev);
    }

    records
}

fn merge_event(rec: &mut DayRecord, ev: &RawEvent) {
    if let Some(stamp) = &ev.in_time {
        rec.in_time = Some(earlier(rec.in_time.take(), stamp.clone(), &rec.date));
    }
    if let Some(stamp) = &ev.out_time {
        rec.out_time = Some(later(rec.out_time.take(), stamp.clone(), &rec.date));
    }

    // Each leg contributes its own delta; hours accumulate by addition.
    rec.work_hours += ev.leg_hours();

    // First non-empty location wins, later values do not override.
    if rec.location_code.is_none() {
        if let Some(loc) = &ev.location_code {
            if !loc.is_empty() {
                rec.location_code = Some(loc.clone());
            }
        }
    }

    // A Late Mark set downstream and re-merged is never downgraded here.
    if rec.status != DayStatus::LateMark {
        rec.status = DayStatus::Blank;
    }
}

/// Chronological minimum of two "date time" stamps for the same day.
/// An unparseable candidate never replaces an existing value.
fn earlier(current: Option<String>, candidate: String, date: &str) -> String {
    pick(current, candidate, date, |cur, cand| cand < cur)
}

/// Chronological maximum, same rules as `earlier`.
fn later(current: Option<String>, candidate: String, date: &str) -> String {
    pick(current, candidate, date, |cur, cand| cand > cur)
}

fn pick<F>(current: Option<String>, candidate: String, date: &str, replace: F) -> String
where
    F: Fn(chrono::NaiveTime, chrono::NaiveTime) -> bool,
{
    let Some(current) = current else {
        return candidate;
    };

    let clock = |stamp: &str| {
        let rest = stamp.strip_prefix(date).unwrap_or(stamp).trim();
        parse_clock(rest)
    };

    match (clock(&current), clock(&candidate)) {
        (Some(cur), Some(cand)) if replace(cur, cand) => candidate,
        (None, Some(_)) => candidate,
        _ => current,
    }
}

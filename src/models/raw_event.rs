use super::event_kind::EventKind;
use crate::utils::date::parse_clock;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// One check-in/check-out leg extracted from a transcript.
/// Ephemeral: produced by the parser and consumed immediately by the
/// aggregator. `in_time`/`out_time` hold the full "date time" strings as
/// pasted (date part normalized when the block header parsed).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawEvent {
    pub employee_name: String,
    pub date: String,
    pub kind: EventKind,
    pub in_time: Option<String>,
    pub out_time: Option<String>,
    pub location_code: Option<String>,
}

impl RawEvent {
    /// Leg is waiting for a CO: has an in boundary but no out yet.
    pub fn is_open(&self) -> bool {
        self.in_time.is_some() && self.out_time.is_none()
    }

    /// Time-of-day of the in boundary, when it parses.
    pub fn clock_in(&self) -> Option<NaiveTime> {
        clock_of(self.in_time.as_deref(), &self.date)
    }

    /// Time-of-day of the out boundary, when it parses.
    pub fn clock_out(&self) -> Option<NaiveTime> {
        clock_of(self.out_time.as_deref(), &self.date)
    }

    /// Hours contributed by this leg alone: out − in when both
    /// boundaries parse, zero otherwise. Negative spans clamp to zero.
    pub fn leg_hours(&self) -> f64 {
        match (self.clock_in(), self.clock_out()) {
            (Some(ci), Some(co)) => {
                let mins = (co - ci).num_minutes();
                if mins > 0 {
                    mins as f64 / 60.0
                } else {
                    0.0
                }
            }
            _ => 0.0,
        }
    }
}

/// Strip the leading date from a "date time" string and parse the rest as
/// a clock time. The date part may itself be a literal fallback containing
/// spaces, so the strip is by prefix, not by token position.
pub(crate) fn clock_of(stamp: Option<&str>, date: &str) -> Option<NaiveTime> {
    let stamp = stamp?;
    let rest = stamp.strip_prefix(date).unwrap_or(stamp).trim();
    parse_clock(rest)
}

//! Transcript parsing: one pasted block → raw CI/CO events plus the
//! non-attendance chatter worth keeping.
//!
//! The input is whatever a human copied out of a chat window, so this
//! module never fails: unparseable dates fall back to the literal line,
//! check-outs with no matching check-in become orphan events, and
//! anything that is not a two-line CI/CO pair is treated as a message.

use crate::models::event_kind::EventKind;
use crate::models::message::OtherMessage;
use crate::models::raw_event::RawEvent;
use crate::utils::date::parse_transcript_date;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Everything extracted from one pasted block.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParseOutcome {
    pub events: Vec<RawEvent>,
    pub messages: Vec<OtherMessage>,
}

/// The historical filter for non-attendance lines: keep a message only if
/// its body contains a literal `C`. Carried over as-is; the likely intent
/// is catching CI/CO-adjacent chatter.
pub fn keeps_attendance_chatter(body: &str) -> bool {
    body.contains('C')
}

/// Parse one free-text block. The first line is the common date for the
/// whole block; the rest is walked two lines at a time looking for
/// header + CI/CO detail pairs.
pub fn parse_transcript(text: &str) -> ParseOutcome {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    if lines.is_empty() {
        return ParseOutcome::default();
    }

    let date = match parse_transcript_date(lines[0]) {
        Some(d) => d.format("%Y-%m-%d").to_string(),
        // Recoverable: keep the raw line as a literal date string.
        None => lines[0].to_string(),
    };

    let detail_re = Regex::new(r"(?i)^(ci|co)\b[ \t]*(.*)$").unwrap();

    let mut events: Vec<RawEvent> = Vec::new();
    let mut messages: Vec<OtherMessage> = Vec::new();

    let mut i = 1;
    while i < lines.len() {
        let line = lines[i];

        // -----------------------------
        // Two-line CI/CO pattern
        // -----------------------------
        if i + 1 < lines.len() {
            if let Some((kind, location)) = parse_detail(&detail_re, lines[i + 1]) {
                let (name, time) = parse_header(line);
                let stamp = if time.is_empty() {
                    date.clone()
                } else {
                    format!("{} {}", date, time)
                };

                match kind {
                    EventKind::CheckIn => events.push(RawEvent {
                        employee_name: name,
                        date: date.clone(),
                        kind,
                        in_time: Some(stamp),
                        out_time: None,
                        location_code: location,
                    }),
                    EventKind::CheckOut => close_or_orphan(&mut events, &date, name, stamp, location),
                }

                i += 2;
                continue;
            }
        }

        // -----------------------------
        // Message fallback
        // -----------------------------
        if line.contains(',') && i + 1 < lines.len() {
            // "Sender, TIME?" header + body on the next line
            let (sender, time) = parse_header(line);
            push_message(&mut messages, &date, sender, time, lines[i + 1]);
            i += 2;
        } else {
            // Single sender-less line is its own body
            push_message(&mut messages, &date, String::new(), String::new(), line);
            i += 1;
        }
    }

    ParseOutcome { events, messages }
}

/// Header line "Name, TIME?": name before the first comma, time is the
/// remainder with one trailing `?` stripped. No comma means the whole
/// line is the name.
fn parse_header(line: &str) -> (String, String) {
    match line.split_once(',') {
        Some((name, rest)) => {
            let time = rest.trim().trim_end_matches('?').trim();
            (name.trim().to_string(), time.to_string())
        }
        None => (line.trim_end_matches('?').trim().to_string(), String::new()),
    }
}

/// Detail line "CI RO" / "CO Client Site": first token the kind, the
/// rest of the line the location code.
fn parse_detail(re: &Regex, line: &str) -> Option<(EventKind, Option<String>)> {
    let caps = re.captures(line)?;
    let kind = EventKind::from_token(&caps[1])?;
    let location = caps[2].trim();
    let location = if location.is_empty() {
        None
    } else {
        Some(location.to_string())
    };
    Some((kind, location))
}

/// A CO closes the most recent open leg for the same employee and date.
/// With nothing to close it is kept as an orphan, never discarded.
fn close_or_orphan(
    events: &mut Vec<RawEvent>,
    date: &str,
    name: String,
    stamp: String,
    location: Option<String>,
) {
    let open = events
        .iter()
        .rposition(|e| e.employee_name == name && e.date == date && e.is_open());

    match open {
        Some(idx) => {
            let ev = &mut events[idx];
            ev.out_time = Some(stamp);
            if location.is_some() {
                ev.location_code = location;
            }
        }
        None => events.push(RawEvent {
            employee_name: name,
            date: date.to_string(),
            kind: EventKind::CheckOut,
            in_time: None,
            out_time: Some(stamp),
            location_code: location,
        }),
    }
}

fn push_message(
    messages: &mut Vec<OtherMessage>,
    date: &str,
    sender: String,
    time: String,
    body: &str,
) {
    if keeps_attendance_chatter(body) {
        messages.push(OtherMessage {
            sender_name: sender,
            text: body.to_string(),
            time,
            date: date.to_string(),
        });
    }
}

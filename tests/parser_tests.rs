use rollcall::core::aggregator::merge_events;
use rollcall::core::parser::{keeps_attendance_chatter, parse_transcript};
use rollcall::models::event_kind::EventKind;

mod common;
use common::SAMPLE_TRANSCRIPT;

#[test]
fn round_trip_single_pair() {
    let outcome = parse_transcript(SAMPLE_TRANSCRIPT);

    // CI and CO collapse into one event at parse time
    assert_eq!(outcome.events.len(), 1);
    assert!(outcome.messages.is_empty());

    let records = merge_events(&outcome.events);
    assert_eq!(records.len(), 1);

    let rec = &records[0];
    assert_eq!(rec.employee_name, "John Doe");
    assert_eq!(rec.date, "2025-03-06");
    assert_eq!(rec.in_time.as_deref(), Some("2025-03-06 9:05 AM"));
    assert_eq!(rec.out_time.as_deref(), Some("2025-03-06 6:10 PM"));
    assert_eq!(rec.location_code.as_deref(), Some("RO"));
}

#[test]
fn empty_input_yields_empty_results() {
    let outcome = parse_transcript("\n   \n\n");
    assert!(outcome.events.is_empty());
    assert!(outcome.messages.is_empty());
}

#[test]
fn date_patterns_normalize_to_iso() {
    for header in [
        "6 Mar, 2025",
        "Mar 6,2025",
        "6 Mar 2025",
        "Mar 6 2025",
        "March 6, 2025",
        "6 March, 2025",
        "2025-03-06",
    ] {
        let text = format!("{}\nJane Roe, 9:00 AM?\nCI MO\n", header);
        let outcome = parse_transcript(&text);
        assert_eq!(
            outcome.events[0].date, "2025-03-06",
            "pattern failed: {}",
            header
        );
    }
}

#[test]
fn unparseable_date_falls_back_to_literal() {
    let text = "sometime last week\nJane Roe, 9:00 AM?\nCI MO\n";
    let outcome = parse_transcript(text);
    assert_eq!(outcome.events.len(), 1);
    assert_eq!(outcome.events[0].date, "sometime last week");
    assert_eq!(
        outcome.events[0].in_time.as_deref(),
        Some("sometime last week 9:00 AM")
    );
}

#[test]
fn orphan_co_is_kept_not_dropped() {
    let text = "6 Mar, 2025\nJohn Doe, 6:10 PM?\nCO RO\n";
    let outcome = parse_transcript(text);

    assert_eq!(outcome.events.len(), 1);
    let ev = &outcome.events[0];
    assert_eq!(ev.kind, EventKind::CheckOut);
    assert!(ev.in_time.is_none());
    assert_eq!(ev.out_time.as_deref(), Some("2025-03-06 6:10 PM"));
}

#[test]
fn co_closes_most_recent_open_leg() {
    // two open CIs; the CO closes the second one
    let text = "6 Mar, 2025
John Doe, 9:00 AM?
CI RO
John Doe, 2:00 PM?
CI Client Site
John Doe, 4:00 PM?
CO Client Site
";
    let outcome = parse_transcript(text);
    assert_eq!(outcome.events.len(), 2);

    let first = &outcome.events[0];
    assert!(first.is_open(), "first leg must stay open");

    let second = &outcome.events[1];
    assert_eq!(second.in_time.as_deref(), Some("2025-03-06 2:00 PM"));
    assert_eq!(second.out_time.as_deref(), Some("2025-03-06 4:00 PM"));
    assert_eq!(second.location_code.as_deref(), Some("Client Site"));
}

#[test]
fn co_for_other_employee_becomes_orphan() {
    let text = "6 Mar, 2025
John Doe, 9:00 AM?
CI RO
Jane Roe, 6:00 PM?
CO RO
";
    let outcome = parse_transcript(text);
    assert_eq!(outcome.events.len(), 2);
    assert!(outcome.events[0].is_open());
    assert!(outcome.events[1].in_time.is_none());
    assert_eq!(outcome.events[1].employee_name, "Jane Roe");
}

#[test]
fn chatter_filter_keeps_only_c_bodies() {
    assert!(keeps_attendance_chatter("forgot to CI yesterday"));
    assert!(!keeps_attendance_chatter("running late today"));

    let text = "6 Mar, 2025
Jane Roe, 9:12 AM?
forgot my CO yesterday
John Doe, 9:30 AM?
good morning all
";
    let outcome = parse_transcript(text);
    assert!(outcome.events.is_empty());
    assert_eq!(outcome.messages.len(), 1);

    let msg = &outcome.messages[0];
    assert_eq!(msg.sender_name, "Jane Roe");
    assert_eq!(msg.time, "9:12 AM");
    assert_eq!(msg.text, "forgot my CO yesterday");
    assert_eq!(msg.date, "2025-03-06");
}

#[test]
fn single_line_without_comma_is_its_own_body() {
    let text = "6 Mar, 2025\nCI pending approval\n";
    // no detail line follows, so this is a sender-less message
    let outcome = parse_transcript(text);
    assert!(outcome.events.is_empty());
    assert_eq!(outcome.messages.len(), 1);
    assert!(outcome.messages[0].sender_name.is_empty());
}

#[test]
fn parser_never_panics_on_garbage() {
    for text in [
        ",,,,\nCI\nCO\n",
        "2025-03-06\nX,\nCI\n",
        "no date\n?\n??, \nCO    \n",
    ] {
        let _ = parse_transcript(text);
    }
}

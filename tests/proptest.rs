//! Property-based tests for chatpulse.
//!
//! These tests generate random exports to find edge cases.

use proptest::prelude::*;

use chatpulse::config::ParserConfig;
use chatpulse::core::stats::{UserScope, activity_heatmap, most_busy_users, monthly_timeline};
use chatpulse::parser::ChatLogParser;
use chatpulse::parsing::{count_timestamps, split_sender};

fn parser() -> ChatLogParser {
    ChatLogParser::with_config(ParserConfig::new().with_log_warnings(false))
}

/// A well-formed entry: (day, month, year, hour12, minute, pm, sender, body).
fn arb_entry() -> impl Strategy<Value = String> {
    (
        1u32..=28,
        1u32..=12,
        0u32..=99,
        1u32..=12,
        0u32..=59,
        any::<bool>(),
        // Fast: select from predefined senders
        prop::sample::select(vec![
            "Alice",
            "Bob",
            "Dr. J. Smith",
            "+1 555-0100",
            "Иван",
            "村上",
        ]),
        // Fast: select from predefined bodies
        prop::sample::select(vec![
            "Hello",
            "meet at 12:30",
            "line one\nline two",
            "note: milk",
            "Special;chars\"here",
            "🎉🔥 emoji",
            "",
        ]),
    )
        .prop_map(|(d, m, y, h, min, pm, sender, body)| {
            let meridiem = if pm { "PM" } else { "AM" };
            format!("{d}/{m}/{y:02}, {h}:{min:02} {meridiem} - {sender}: {body}")
        })
}

/// A well-formed export of up to `max_len` entries.
fn arb_export(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(arb_entry(), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // ============================================
    // PARSER PROPERTIES
    // ============================================

    /// The parser never panics, whatever the input
    #[test]
    fn parse_never_panics(text in "\\PC*") {
        let _ = parser().parse(&text);
    }

    /// The parser never panics on arbitrary bytes
    #[test]
    fn parse_bytes_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..512)) {
        let _ = parser().parse_bytes(&bytes);
    }

    /// One record per timestamp token, for any input
    #[test]
    fn record_count_equals_token_count(text in "[0-9/:, APMapm\\-a-z\n]{0,200}") {
        let records = parser().parse(&text);
        prop_assert_eq!(records.len(), count_timestamps(&text));
    }

    /// Well-formed entries come back in order, with their sender and body
    #[test]
    fn entries_round_trip_in_order(entries in arb_export(30)) {
        let text = entries.join("\n");
        let records = parser().parse(&text);

        prop_assert_eq!(records.len(), entries.len());
        for (record, entry) in records.iter().zip(&entries) {
            prop_assert!(record.date().is_some());
            let (_, segment) = entry.split_once(" - ").unwrap();
            let (user, message) = split_sender(segment);
            prop_assert_eq!(record.user(), user);
            prop_assert_eq!(record.message(), message);
        }
    }

    /// Derived fields are all present or all absent
    #[test]
    fn derived_fields_follow_date(text in "[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}, [0-9]{1,2}:[0-9]{2} [AP]M - A: x") {
        let records = parser().parse(&text);
        prop_assert_eq!(records.len(), 1);
        let r = &records[0];
        let dated = r.date().is_some();
        prop_assert_eq!(r.only_date().is_some(), dated);
        prop_assert_eq!(r.year().is_some(), dated);
        prop_assert_eq!(r.month().is_some(), dated);
        prop_assert_eq!(r.day_name().is_some(), dated);
        prop_assert_eq!(r.hour().is_some(), dated);
        prop_assert_eq!(r.minute().is_some(), dated);
        prop_assert_eq!(r.period().is_some(), dated);
    }

    // ============================================
    // STATISTICS PROPERTIES
    // ============================================

    /// Busy-user counts add up to the number of records
    #[test]
    fn busy_users_cover_all_records(entries in arb_export(30)) {
        let records = parser().parse(&entries.join("\n"));
        let busy = most_busy_users(&records, usize::MAX);
        let total: usize = busy.top.iter().map(|(_, n)| n).sum();
        prop_assert_eq!(total, records.len());
    }

    /// Time buckets count every dated record exactly once
    #[test]
    fn time_buckets_count_dated_records(entries in arb_export(30)) {
        let records = parser().parse(&entries.join("\n"));
        let dated = records.iter().filter(|r| r.has_date()).count();

        let monthly: usize = monthly_timeline(&records, &UserScope::Overall)
            .iter()
            .map(|m| m.messages)
            .sum();
        prop_assert_eq!(monthly, dated);
        prop_assert_eq!(activity_heatmap(&records, &UserScope::Overall).total(), dated);
    }
}

//! Strict parsing of timestamp tokens.
//!
//! A token is parsed against a single pattern, `day/month/2-digit-year,
//! hour:minute` with a 12-hour clock when an `AM`/`PM` marker is present and
//! a 24-hour clock otherwise. Anything else (four-digit years, a missing
//! comma, impossible dates such as 31 February, `13:00 PM`) yields `None`.
//!
//! Whitespace is normalized first: exports use ordinary spaces, no-break
//! spaces or no space at all between the minutes and the marker.

use chrono::NaiveDateTime;

use crate::config::DateOrder;

/// Parses a timestamp token.
///
/// # Example
///
/// ```
/// use chatpulse::config::DateOrder;
/// use chatpulse::parsing::parse_timestamp;
///
/// let dt = parse_timestamp("15/1/24, 9:30 PM", DateOrder::DayFirst).unwrap();
/// assert_eq!(dt.to_string(), "2024-01-15 21:30:00");
///
/// assert!(parse_timestamp("15/1/2024, 9:30 PM", DateOrder::DayFirst).is_none());
/// ```
pub fn parse_timestamp(token: &str, order: DateOrder) -> Option<NaiveDateTime> {
    let normalized = normalize(token);
    let has_meridiem = normalized.ends_with("AM") || normalized.ends_with("PM");

    let format = match (order, has_meridiem) {
        (DateOrder::DayFirst, true) => "%d/%m/%y, %I:%M %p",
        (DateOrder::DayFirst, false) => "%d/%m/%y, %H:%M",
        (DateOrder::MonthFirst, true) => "%m/%d/%y, %I:%M %p",
        (DateOrder::MonthFirst, false) => "%m/%d/%y, %H:%M",
    };

    NaiveDateTime::parse_from_str(&normalized, format).ok()
}

/// Collapses whitespace runs to one ASCII space, uppercases the meridiem and
/// separates it from the minutes.
fn normalize(token: &str) -> String {
    let mut out = String::with_capacity(token.len() + 1);
    let mut pending_space = false;

    for c in token.trim().chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space {
            out.push(' ');
            pending_space = false;
        }
        out.push(c.to_ascii_uppercase());
    }

    if (out.ends_with("AM") || out.ends_with("PM")) && !out.ends_with(" AM") && !out.ends_with(" PM")
    {
        out.insert(out.len() - 2, ' ');
    }

    out
}

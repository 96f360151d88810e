//! Separates the sender name from the message body.

use std::sync::LazyLock;

use regex::Regex;

use crate::record::GROUP_NOTIFICATION;

// Shortest prefix (at least one character) ending in a colon followed by
// whitespace. `(?s)` lets the prefix and body span lines.
static SENDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^(.+?):\s(.*)$").expect("sender pattern is valid"));

/// Splits a segment into `(user, message)`.
///
/// The first `": "` in the segment ends the sender name, so names may
/// contain other punctuation (`"Dr. J. Smith"`, `"+1 555-0100"`) but never
/// the separator itself. Segments without a separator are group
/// notifications. Both parts are trimmed.
///
/// # Example
///
/// ```
/// use chatpulse::parsing::split_sender;
///
/// assert_eq!(split_sender("Alice: hi there\n"), ("Alice", "hi there"));
/// assert_eq!(
///     split_sender("Alice added Bob"),
///     ("group_notification", "Alice added Bob")
/// );
/// ```
pub fn split_sender(segment: &str) -> (&str, &str) {
    match SENDER_RE.captures(segment) {
        Some(caps) => {
            let user = caps.get(1).map_or("", |m| m.as_str());
            let body = caps.get(2).map_or("", |m| m.as_str());
            (user.trim(), body.trim())
        }
        None => (GROUP_NOTIFICATION, segment.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_sender() {
        assert_eq!(split_sender("Bob: hello there"), ("Bob", "hello there"));
    }

    #[test]
    fn test_notification() {
        assert_eq!(
            split_sender("Messages to this group are now secured.\n"),
            (GROUP_NOTIFICATION, "Messages to this group are now secured.")
        );
    }

    #[test]
    fn test_first_separator_wins() {
        assert_eq!(
            split_sender("Alice: note: bring snacks"),
            ("Alice", "note: bring snacks")
        );
    }

    #[test]
    fn test_punctuation_in_name() {
        assert_eq!(split_sender("Dr. J. Smith: ok"), ("Dr. J. Smith", "ok"));
        assert_eq!(split_sender("+1 555-0100: call me"), ("+1 555-0100", "call me"));
    }

    #[test]
    fn test_colon_without_space_is_not_separator() {
        assert_eq!(
            split_sender("Meeting moved to 12:30"),
            (GROUP_NOTIFICATION, "Meeting moved to 12:30")
        );
    }

    #[test]
    fn test_multiline_body() {
        assert_eq!(
            split_sender("Alice: first\nsecond\n\n"),
            ("Alice", "first\nsecond")
        );
    }

    #[test]
    fn test_empty_body() {
        assert_eq!(split_sender("Alice: "), ("Alice", ""));
    }

    #[test]
    fn test_leading_separator_needs_a_name() {
        assert_eq!(split_sender(": hello"), (GROUP_NOTIFICATION, ": hello"));
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        assert_eq!(split_sender("  Alice  :   hi  \n"), ("Alice", "hi"));
    }

    #[test]
    fn test_empty_segment() {
        assert_eq!(split_sender(""), (GROUP_NOTIFICATION, ""));
    }
}

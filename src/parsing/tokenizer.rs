//! Splits a chat export into `(timestamp, segment)` pairs.
//!
//! Every message in an export starts with a timestamp followed by `" - "`:
//!
//! ```text
//! 15/01/24, 10:30 AM - Alice: Hello
//! continued on a second line
//! 15/01/24, 10:31 AM - Bob: Hi
//! ```
//!
//! The tokenizer walks the matches of [`TIMESTAMP_PATTERN`] once, left to
//! right, and pairs each timestamp with the text up to the next match (or
//! end of input). Text before the first timestamp is discarded.

use std::iter::Peekable;
use std::sync::LazyLock;

use regex::{CaptureMatches, Regex};

/// Timestamp token followed by the `" - "` separator.
///
/// Capture group 1 is the timestamp itself:
/// `D{1,2}/D{1,2}/D{2,4},? H{1,2}:MM` with an optional `AM`/`PM` marker.
pub const TIMESTAMP_PATTERN: &str =
    r"(\d{1,2}/\d{1,2}/\d{2,4},?\s\d{1,2}:\d{2}(?:\s?[AaPp][Mm])?)\s-\s";

static TIMESTAMP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TIMESTAMP_PATTERN).expect("timestamp pattern is valid"));

/// One message-sized slice of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// The raw timestamp text, without the separator.
    pub timestamp: &'a str,
    /// Everything between the separator and the next timestamp.
    pub segment: &'a str,
    /// Byte offset of the timestamp in the input.
    pub offset: usize,
}

/// Iterator over the tokens of an export. Created by [`tokens`].
pub struct Tokens<'a> {
    text: &'a str,
    matches: Peekable<CaptureMatches<'static, 'a>>,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let caps = self.matches.next()?;
        let whole = caps.get(0)?;
        let timestamp = caps.get(1)?;

        let segment_end = self
            .matches
            .peek()
            .and_then(|next| next.get(0))
            .map_or(self.text.len(), |m| m.start());

        Some(Token {
            timestamp: timestamp.as_str(),
            segment: &self.text[whole.end()..segment_end],
            offset: whole.start(),
        })
    }
}

/// Returns a lazy iterator over the tokens of `text`.
pub fn tokens(text: &str) -> Tokens<'_> {
    Tokens {
        text,
        matches: TIMESTAMP_RE.captures_iter(text).peekable(),
    }
}

/// Collects all tokens of `text`.
///
/// # Example
///
/// ```
/// use chatpulse::parsing::tokenize;
///
/// let tokens = tokenize("1/1/24, 10:00 AM - Alice: hi\n1/1/24, 10:05 AM - Bob: yo");
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0].timestamp, "1/1/24, 10:00 AM");
/// assert_eq!(tokens[0].segment, "Alice: hi\n");
/// assert_eq!(tokens[1].segment, "Bob: yo");
/// ```
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    tokens(text).collect()
}

/// Counts timestamp tokens without building segments.
pub fn count_timestamps(text: &str) -> usize {
    TIMESTAMP_RE.find_iter(text).count()
}

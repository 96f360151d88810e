//! The chat log parser.
//!
//! [`ChatLogParser`] turns the plain-text export of a chat into an ordered
//! list of [`MessageRecord`]s. It never fails on malformed text:
//!
//! - input without any timestamp yields an empty list and a
//!   [`ParseWarning::NoTimestampsFound`]
//! - a timestamp that cannot be parsed yields a record with no date and a
//!   [`ParseWarning::TimestampParseFailure`]
//! - lines without a `"name: "` prefix become `group_notification` records
//!
//! Only reading from disk can fail, see [`ChatLogParser::parse_file`].
//!
//! # Example
//!
//! ```rust
//! use chatpulse::parser::ChatLogParser;
//!
//! let parser = ChatLogParser::new();
//! let records = parser.parse("1/1/24, 10:00 AM - Alice: hi\n1/1/24, 10:05 AM - Bob: hello there");
//!
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].user(), "Alice");
//! assert_eq!(records[1].message(), "hello there");
//! assert_eq!(records[1].minute(), Some(5));
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::MessageRecord;
use crate::config::ParserConfig;
use crate::error::{ChatpulseError, ParseWarning, Result};
use crate::parsing::{parse_timestamp, split_sender, tokens};

/// Records of one export together with the diagnostics raised for it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseReport {
    /// Parsed records in source order.
    pub records: Vec<MessageRecord>,
    /// Non-fatal problems, in the order they were found.
    pub warnings: Vec<ParseWarning>,
}

impl ParseReport {
    /// Returns `true` if no records were found.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Returns the number of records whose timestamp could not be parsed.
    pub fn invalid_dates(&self) -> usize {
        self.warnings.iter().filter(|w| w.is_per_record()).count()
    }

    /// Consumes the report, returning the records.
    pub fn into_records(self) -> Vec<MessageRecord> {
        self.records
    }
}

/// Parser for plain-text chat exports.
///
/// The parser holds no state besides its configuration and can be shared
/// between threads.
#[derive(Debug, Clone, Default)]
pub struct ChatLogParser {
    config: ParserConfig,
}

impl ChatLogParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self {
            config: ParserConfig::default(),
        }
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses an export, returning only the records.
    ///
    /// Warnings are logged (unless disabled) and otherwise dropped; use
    /// [`parse_report`](Self::parse_report) to inspect them.
    pub fn parse(&self, text: &str) -> Vec<MessageRecord> {
        self.parse_report(text).into_records()
    }

    /// Parses an export, returning records and diagnostics.
    pub fn parse_report(&self, text: &str) -> ParseReport {
        let mut report = ParseReport::default();
        let mut timestamps = 0usize;

        for (index, token) in tokens(text).enumerate() {
            timestamps += 1;

            let date = parse_timestamp(token.timestamp, self.config.date_order);
            if date.is_none() {
                report.warnings.push(ParseWarning::TimestampParseFailure {
                    index,
                    token: token.timestamp.to_string(),
                });
            }

            let (user, message) = split_sender(token.segment);
            report.records.push(MessageRecord::new(date, user, message));
        }

        if timestamps == 0 {
            report.warnings.push(ParseWarning::NoTimestampsFound);
        } else if report.records.len() != timestamps {
            report.warnings.push(ParseWarning::RecordCountMismatch {
                timestamps,
                records: report.records.len(),
            });
        }

        debug!(
            bytes = text.len(),
            records = report.records.len(),
            warnings = report.warnings.len(),
            "parsed chat export"
        );

        if self.config.log_warnings {
            for warning in &report.warnings {
                warn!("{warning}");
            }
        }

        report
    }

    /// Parses raw bytes, replacing invalid UTF-8 sequences with U+FFFD.
    pub fn parse_bytes(&self, bytes: &[u8]) -> ParseReport {
        self.parse_report(&String::from_utf8_lossy(bytes))
    }

    /// Reads and parses an export file.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::Io`] if the file cannot be read and
    /// [`ChatpulseError::InputTooLarge`] if it exceeds
    /// [`ParserConfig::max_input_bytes`].
    pub fn read_report(&self, path: &Path) -> Result<ParseReport> {
        let size = fs::metadata(path)?.len();
        if size > self.config.max_input_bytes {
            return Err(ChatpulseError::input_too_large(
                self.config.max_input_bytes,
                size,
                Some(path.to_path_buf()),
            ));
        }

        let bytes = fs::read(path)?;
        debug!(path = %path.display(), bytes = bytes.len(), "read chat export");
        Ok(self.parse_bytes(&bytes))
    }

    /// Reads and parses an export file, returning only the records.
    pub fn parse_file(&self, path: &Path) -> Result<Vec<MessageRecord>> {
        self.read_report(path).map(ParseReport::into_records)
    }
}

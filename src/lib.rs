//! # Chatpulse
//!
//! A Rust library for turning plain-text chat exports into a table of
//! timestamped, attributed messages, and for computing activity statistics
//! over that table.
//!
//! ## Overview
//!
//! An export is a stream of entries that each start with a timestamp such
//! as `12/03/24, 9:41 PM - `, followed by `Sender: message` or by a system
//! notification. Entries may span several lines. Chatpulse:
//!
//! - splits the export into one [`MessageRecord`] per timestamp
//! - parses the timestamp strictly, keeping the record with an empty date
//!   when it does not fit
//! - derives calendar features (year, month, weekday, hour, period)
//! - writes the records as CSV, JSON or JSON Lines
//! - computes timelines, activity maps, busy users, common words and emoji
//!
//! Parsing never fails: malformed text yields [`ParseWarning`]s, not errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use chatpulse::prelude::*;
//!
//! let parser = ChatLogParser::new();
//! let records = parser.parse(concat!(
//!     "1/1/24, 10:00 AM - Messages to this group are now secured.\n",
//!     "1/1/24, 10:00 AM - Alice: hi\n",
//!     "1/1/24, 10:05 AM - Bob: hello\nthere\n",
//! ));
//!
//! assert_eq!(records.len(), 3);
//! assert!(records[0].is_notification());
//! assert_eq!(records[2].message(), "hello\nthere");
//! assert_eq!(records[2].period(), Some("10-11"));
//! ```
//!
//! ## Several Exports
//!
//! ```rust,no_run
//! use chatpulse::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let session = ChatSession::from_paths(&["family.txt", "work.txt"], &ChatLogParser::new())?;
//!
//!     let scope = session.scope("Alice")?;
//!     let stats = fetch_stats(session.records(), &scope, &StatsConfig::default());
//!     println!("{} messages, {} links", stats.messages, stats.links);
//!
//!     write_csv(&session.rows(), "records.csv", &OutputConfig::new().with_source())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: [`ChatLogParser`](parser::ChatLogParser), [`ParseReport`](parser::ParseReport)
//! - [`parsing`]: tokenizer, timestamp and sender steps of the parser
//! - [`record`]: [`MessageRecord`] and calendar helpers
//! - [`config`]: [`ParserConfig`](config::ParserConfig), [`StatsConfig`](config::StatsConfig)
//! - [`core`]: sessions, filters, statistics and output writers
//! - [`format`]: [`OutputFormat`](format::OutputFormat) selection
//! - [`error`]: [`ChatpulseError`], [`ParseWarning`], [`Result`]
//! - `cli`, `logging`: command-line support (feature `cli`)
//! - [`prelude`]: Convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
#[cfg(feature = "cli")]
pub mod logging;
pub mod parser;
pub mod parsing;
pub mod record;

// Re-export the main types at the crate root for convenience
pub use error::{ChatpulseError, ParseWarning, Result};
pub use record::MessageRecord;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatpulse::prelude::*;
/// ```
pub mod prelude {
    pub use crate::MessageRecord;
    pub use crate::error::{ChatpulseError, ParseWarning, Result};
    pub use crate::record::GROUP_NOTIFICATION;

    pub use crate::parser::{ChatLogParser, ParseReport};

    pub use crate::config::{DateOrder, ParserConfig, StatsConfig};

    pub use crate::core::filter::{FilterConfig, apply_filters};
    pub use crate::core::models::{OutputConfig, Row, rows_from};
    pub use crate::core::session::{ChatFile, ChatSession};
    pub use crate::core::stats::{
        UserScope, activity_heatmap, daily_timeline, fetch_stats, month_activity_map,
        monthly_timeline, most_busy_users, user_list, week_activity_map,
    };
    pub use crate::core::words::{emoji_usage, most_common_words};

    #[cfg(feature = "csv-output")]
    pub use crate::core::output::{to_csv, write_csv};
    #[cfg(feature = "json-output")]
    pub use crate::core::output::{to_json, to_jsonl, write_json, write_jsonl};

    pub use crate::format::{OutputFormat, to_format_string, write_to_format};
}

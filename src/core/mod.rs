//! Analysis and output on top of parsed records.
//!
//! This module contains:
//! - [`session`] - Several exports analysed together
//! - [`filter`] - Record filtering by date and user
//! - [`stats`] - Counts, timelines, activity maps and busy users
//! - [`words`] - Word and emoji frequencies
//! - [`models`] - Output rows and their configuration
//! - [`output`] - Format writers (CSV, JSON, JSONL)
//!
//! # Quick Start
//!
//! ```rust
//! use chatpulse::config::StatsConfig;
//! use chatpulse::core::{ChatSession, UserScope, fetch_stats, most_busy_users};
//! use chatpulse::parser::ChatLogParser;
//!
//! let mut session = ChatSession::new();
//! session.add_export(
//!     "chat.txt",
//!     "1/1/24, 10:00 AM - Alice: hi\n1/1/24, 10:01 AM - Bob: hey\n1/1/24, 10:02 AM - Alice: ok",
//!     &ChatLogParser::new(),
//! );
//!
//! let stats = fetch_stats(session.records(), &UserScope::Overall, &StatsConfig::default());
//! assert_eq!(stats.messages, 3);
//! assert_eq!(most_busy_users(session.records(), 1).top[0].0, "Alice");
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod session;
pub mod stats;
pub mod words;

pub use filter::{FilterConfig, apply_filters};
pub use models::{OutputConfig, Row, rows_from};
pub use session::{ChatFile, ChatSession};
pub use stats::{
    ActivityCount, ActivityHeatmap, BusyUsers, ChatStats, DailyCount, MonthlyCount, OVERALL,
    UserScope, UserShare, activity_heatmap, daily_timeline, fetch_stats, month_activity_map,
    monthly_timeline, most_busy_users, user_list, week_activity_map,
};
pub use words::{emoji_usage, most_common_words};

#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{to_json, to_jsonl, write_json, write_jsonl};

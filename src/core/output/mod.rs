//! Output format writers.
//!
//! This module provides writers for different output formats:
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of records - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one record per line - requires `json-output` feature
//!
//! Every format carries the same twelve record fields in schema order
//! (`date`, `user`, `message`, `only_date`, `year`, `month_num`, `month`,
//! `day`, `day_name`, `hour`, `minute`, `period`), plus `source` when
//! [`OutputConfig::include_source`](crate::core::models::OutputConfig) is set.
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatpulse::Result<()> {
//! use chatpulse::core::models::{OutputConfig, rows_from};
//! use chatpulse::core::output::{to_csv, write_csv, write_jsonl};
//! use chatpulse::parser::ChatLogParser;
//!
//! let records = ChatLogParser::new().parse("1/1/24, 10:00 AM - Alice: Hello!");
//! let rows = rows_from(&records);
//! let config = OutputConfig::new();
//!
//! write_csv(&rows, "chat_records.csv", &config)?;
//! write_jsonl(&rows, "chat_records.jsonl", &config)?;
//!
//! let csv_string = to_csv(&rows, &config)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{CSV_HEADER, to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};

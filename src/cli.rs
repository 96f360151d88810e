//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Args`] - CLI argument structure (for use with clap)
//! - [`OutputFormat`] - Output format options
//!
//! ```rust
//! use chatpulse::cli::Args;
//! use clap::Parser;
//!
//! let args = Args::parse_from(["chatpulse", "chat.txt", "--stats", "--top", "3"]);
//! assert_eq!(args.inputs, vec!["chat.txt"]);
//! assert_eq!(args.top, Some(3));
//! ```

use clap::{Parser, ValueEnum};

use crate::config::{DateOrder, ParserConfig, StatsConfig};
use crate::core::filter::FilterConfig;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Default output path; its extension follows `--format`.
pub const DEFAULT_OUTPUT: &str = "chat_records.csv";

/// Turn exported chat logs into a table of timestamped messages
/// and print activity statistics.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatpulse")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatpulse chat.txt
    chatpulse chat.txt -o records.json --format json
    chatpulse family.txt work.txt --source-column --stats
    chatpulse chat.txt --after 2024-01-01 --user Alice --stats
    chatpulse us_chat.txt --month-first")]
pub struct Args {
    /// Paths to exported chat logs
    #[arg(required = true, value_name = "INPUT")]
    pub inputs: Vec<String>,

    /// Path to output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: OutputFormat,

    /// Keep messages on or after this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub after: Option<String>,

    /// Keep messages on or before this date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub before: Option<String>,

    /// Keep messages from this user only; also scopes --stats
    #[arg(long, value_name = "USER")]
    pub user: Option<String>,

    /// Print a statistics report
    #[arg(long)]
    pub stats: bool,

    /// Number of entries in the busiest-users and common-words lists
    #[arg(long, value_name = "N")]
    pub top: Option<usize>,

    /// Add a column with the name of the export each message came from
    #[arg(long)]
    pub source_column: bool,

    /// Dates are month/day/year
    #[arg(long)]
    pub month_first: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Returns the output path, switching the default file's extension to
    /// the selected format.
    pub fn output_path(&self) -> String {
        if self.output != DEFAULT_OUTPUT {
            return self.output.clone();
        }

        let format: crate::format::OutputFormat = self.format.into();
        format.adjust_path(DEFAULT_OUTPUT).display().to_string()
    }

    /// Builds the parser configuration.
    pub fn parser_config(&self) -> ParserConfig {
        let order = if self.month_first {
            DateOrder::MonthFirst
        } else {
            DateOrder::DayFirst
        };
        ParserConfig::new().with_date_order(order)
    }

    /// Builds the filter configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::InvalidDate`](crate::ChatpulseError::InvalidDate)
    /// for malformed `--after`/`--before` values.
    pub fn filter_config(&self) -> Result<FilterConfig> {
        let mut filter = FilterConfig::new();
        if let Some(ref after) = self.after {
            filter = filter.with_date_from(after)?;
        }
        if let Some(ref before) = self.before {
            filter = filter.with_date_to(before)?;
        }
        if let Some(ref user) = self.user {
            filter = filter.with_user(user.clone());
        }
        Ok(filter)
    }

    /// Builds the statistics configuration.
    pub fn stats_config(&self) -> StatsConfig {
        match self.top {
            Some(n) => StatsConfig::new().with_top_n(n).with_common_words_n(n),
            None => StatsConfig::new(),
        }
    }

    /// Builds the output configuration.
    pub fn output_config(&self) -> OutputConfig {
        if self.source_column {
            OutputConfig::new().with_source()
        } else {
            OutputConfig::new()
        }
    }
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter (default)
    #[default]
    Csv,
    /// JSON array of records
    Json,
    /// JSON Lines - one record per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", crate::format::OutputFormat::from(*self))
    }
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

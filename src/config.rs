//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - how chat exports are read and parsed
//! - [`StatsConfig`] - knobs for the statistics functions
//!
//! # Example
//!
//! ```rust
//! use chatpulse::config::{DateOrder, ParserConfig};
//! use chatpulse::parser::ChatLogParser;
//!
//! let config = ParserConfig::new()
//!     .with_date_order(DateOrder::MonthFirst)
//!     .with_log_warnings(false);
//!
//! let parser = ChatLogParser::with_config(config);
//! ```

use serde::{Deserialize, Serialize};

/// Order of the day and month numbers in a timestamp token.
///
/// Exports follow the phone's locale: most locales write `15/01/24`,
/// US phones write `1/15/24`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// `day/month/year` (default)
    #[default]
    DayFirst,
    /// `month/day/year`
    MonthFirst,
}

/// Configuration for chat export parsing.
///
/// # Example
///
/// ```rust
/// use chatpulse::config::ParserConfig;
///
/// let config = ParserConfig::new().with_max_input_bytes(64 * 1024 * 1024);
/// assert_eq!(config.max_input_bytes, 64 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Which of the first two date numbers is the day (default: day first)
    pub date_order: DateOrder,

    /// Forward parse warnings to `tracing` (default: true)
    pub log_warnings: bool,

    /// Largest export accepted when reading from disk (default: 512MB)
    pub max_input_bytes: u64,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            date_order: DateOrder::DayFirst,
            log_warnings: true,
            max_input_bytes: 512 * 1024 * 1024, // 512MB
        }
    }
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the date order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }

    /// Enables or disables logging of parse warnings.
    #[must_use]
    pub fn with_log_warnings(mut self, enabled: bool) -> Self {
        self.log_warnings = enabled;
        self
    }

    /// Sets the maximum input size in bytes.
    #[must_use]
    pub fn with_max_input_bytes(mut self, size: u64) -> Self {
        self.max_input_bytes = size;
        self
    }
}

/// Configuration for the statistics functions.
///
/// # Example
///
/// ```rust
/// use chatpulse::config::StatsConfig;
///
/// let config = StatsConfig::new()
///     .with_common_words_n(5)
///     .with_stop_words(["lol", "ok"]);
/// assert!(config.is_stop_word("ok"));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsConfig {
    /// Number of users in "most busy users" (default: 10)
    pub top_n: usize,

    /// Number of words in "most common words" (default: 20)
    pub common_words_n: usize,

    /// Body text the export uses for attachments (default: `<Media omitted>`)
    pub media_placeholder: String,

    /// Stop words added to the built-in English list
    pub extra_stop_words: Vec<String>,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            top_n: 10,
            common_words_n: 20,
            media_placeholder: "<Media omitted>".to_string(),
            extra_stop_words: Vec::new(),
        }
    }
}

impl StatsConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of busy users reported.
    #[must_use]
    pub fn with_top_n(mut self, n: usize) -> Self {
        self.top_n = n;
        self
    }

    /// Sets the number of common words reported.
    #[must_use]
    pub fn with_common_words_n(mut self, n: usize) -> Self {
        self.common_words_n = n;
        self
    }

    /// Sets the media placeholder text.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholder = placeholder.into();
        self
    }

    /// Adds stop words (compared lowercase).
    #[must_use]
    pub fn with_stop_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stop_words
            .extend(words.into_iter().map(|w| w.into().to_lowercase()));
        self
    }

    /// Returns `true` if `word` (already lowercase) should be ignored.
    pub fn is_stop_word(&self, word: &str) -> bool {
        crate::core::words::STOP_WORDS.contains(&word)
            || self.extra_stop_words.iter().any(|w| w == word)
    }
}

//! The parsed message record.
//!
//! This module provides [`MessageRecord`], the output unit of the parser and
//! the row type of the record table consumed by the statistics and output
//! modules.
//!
//! # Schema
//!
//! A record serializes to exactly these fields, in this order:
//!
//! | Field | Type | Description |
//! |-------|------|-------------|
//! | `date` | `Option<NaiveDateTime>` | Parsed timestamp, `None` if the token was invalid |
//! | `user` | `String` | Sender name, or `group_notification` |
//! | `message` | `String` | Trimmed message body |
//! | `only_date` | `Option<NaiveDate>` | Calendar date |
//! | `year` | `Option<i32>` | |
//! | `month_num` | `Option<u32>` | 1–12 |
//! | `month` | `Option<String>` | English month name |
//! | `day` | `Option<u32>` | Day of month |
//! | `day_name` | `Option<String>` | English weekday name |
//! | `hour` | `Option<u32>` | 0–23 |
//! | `minute` | `Option<u32>` | 0–59 |
//! | `period` | `Option<String>` | Hour bucket label such as `"9-10"` or `"23-0"` |
//!
//! The derived fields are computed once in [`MessageRecord::new`] and are
//! either all present or all absent, matching `date`.
//!
//! # Example
//!
//! ```
//! use chatpulse::MessageRecord;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(23, 15, 0);
//! let record = MessageRecord::new(date, "Alice", "hi");
//!
//! assert_eq!(record.month(), Some("January"));
//! assert_eq!(record.period(), Some("23-0"));
//! ```

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

/// Sender value used for lines without a `"name: "` prefix.
///
/// Group events such as "Alice added Bob" or the encryption notice carry
/// no sender in the export and are attributed to this pseudo-user.
pub const GROUP_NOTIFICATION: &str = "group_notification";

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Returns the English name of a month (1-based).
pub fn month_name(month_num: u32) -> Option<&'static str> {
    let index = usize::try_from(month_num).ok()?.checked_sub(1)?;
    MONTH_NAMES.get(index).copied()
}

/// Returns the English name of a weekday.
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Returns the hour bucket label for an hour of the day.
///
/// ```
/// use chatpulse::record::period_label;
///
/// assert_eq!(period_label(9), "9-10");
/// assert_eq!(period_label(23), "23-0");
/// ```
pub fn period_label(hour: u32) -> String {
    format!("{}-{}", hour, (hour + 1) % 24)
}

mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(dt) => serializer.serialize_str(&dt.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref() {
            None | Some("") => Ok(None),
            Some(s) => NaiveDateTime::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

/// One message of a chat export.
///
/// Records are created by the parser and are not meant to be mutated
/// afterwards; fields are public for serde and pattern matching, but the
/// accessors are the intended read API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageRecord {
    /// When the message was sent, `None` if the timestamp was invalid.
    #[serde(with = "date_format")]
    pub date: Option<NaiveDateTime>,

    /// Sender display name or [`GROUP_NOTIFICATION`].
    pub user: String,

    /// Message body, trimmed. May contain inner newlines.
    pub message: String,

    /// Calendar date of `date`.
    pub only_date: Option<NaiveDate>,

    /// Year of `date`.
    pub year: Option<i32>,

    /// Month number (1–12).
    pub month_num: Option<u32>,

    /// English month name.
    pub month: Option<String>,

    /// Day of the month.
    pub day: Option<u32>,

    /// English weekday name.
    pub day_name: Option<String>,

    /// Hour of the day (0–23).
    pub hour: Option<u32>,

    /// Minute (0–59).
    pub minute: Option<u32>,

    /// Hour bucket label, `"H-H+1"` modulo 24.
    pub period: Option<String>,
}

impl MessageRecord {
    /// Creates a record and derives its calendar fields from `date`.
    pub fn new(
        date: Option<NaiveDateTime>,
        user: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let mut record = Self {
            date,
            user: user.into(),
            message: message.into(),
            only_date: None,
            year: None,
            month_num: None,
            month: None,
            day: None,
            day_name: None,
            hour: None,
            minute: None,
            period: None,
        };

        if let Some(dt) = date {
            record.only_date = Some(dt.date());
            record.year = Some(dt.year());
            record.month_num = Some(dt.month());
            record.month = month_name(dt.month()).map(str::to_string);
            record.day = Some(dt.day());
            record.day_name = Some(weekday_name(dt.weekday()).to_string());
            record.hour = Some(dt.hour());
            record.minute = Some(dt.minute());
            record.period = Some(period_label(dt.hour()));
        }

        record
    }

    /// Creates a group notification (a line without sender).
    pub fn notification(date: Option<NaiveDateTime>, message: impl Into<String>) -> Self {
        Self::new(date, GROUP_NOTIFICATION, message)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the timestamp, if it could be parsed.
    pub fn date(&self) -> Option<NaiveDateTime> {
        self.date
    }

    /// Returns the sender name.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Returns the message body.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the calendar date.
    pub fn only_date(&self) -> Option<NaiveDate> {
        self.only_date
    }

    /// Returns the year.
    pub fn year(&self) -> Option<i32> {
        self.year
    }

    /// Returns the month number (1–12).
    pub fn month_num(&self) -> Option<u32> {
        self.month_num
    }

    /// Returns the English month name.
    pub fn month(&self) -> Option<&str> {
        self.month.as_deref()
    }

    /// Returns the day of the month.
    pub fn day(&self) -> Option<u32> {
        self.day
    }

    /// Returns the English weekday name.
    pub fn day_name(&self) -> Option<&str> {
        self.day_name.as_deref()
    }

    /// Returns the weekday.
    pub fn weekday(&self) -> Option<Weekday> {
        self.date.map(|dt| dt.weekday())
    }

    /// Returns the hour of the day.
    pub fn hour(&self) -> Option<u32> {
        self.hour
    }

    /// Returns the minute.
    pub fn minute(&self) -> Option<u32> {
        self.minute
    }

    /// Returns the hour bucket label.
    pub fn period(&self) -> Option<&str> {
        self.period.as_deref()
    }

    /// Returns `true` if this record is a group notification.
    pub fn is_notification(&self) -> bool {
        self.user == GROUP_NOTIFICATION
    }

    /// Returns `true` if the timestamp was parsed successfully.
    pub fn has_date(&self) -> bool {
        self.date.is_some()
    }
}

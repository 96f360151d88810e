//! Descriptive statistics over parsed records.
//!
//! Every function takes the records to analyse (a slice, a
//! [`ChatSession`](crate::core::session::ChatSession) iterator, anything
//! yielding `&MessageRecord`) and, where it makes sense, a [`UserScope`]
//! selecting one user or the whole conversation.
//!
//! Records without a parsed date are counted by [`fetch_stats`] and
//! [`most_busy_users`] but skipped by every time-bucketed aggregation.
//!
//! # Example
//!
//! ```
//! use chatpulse::config::StatsConfig;
//! use chatpulse::core::stats::{UserScope, fetch_stats, monthly_timeline};
//! use chatpulse::parser::ChatLogParser;
//!
//! let records = ChatLogParser::new().parse(concat!(
//!     "1/1/24, 10:00 AM - Alice: see https://example.com\n",
//!     "2/1/24, 11:00 AM - Bob: <Media omitted>\n",
//!     "3/2/24, 9:00 PM - Alice: nice one\n",
//! ));
//!
//! let stats = fetch_stats(&records, &UserScope::Overall, &StatsConfig::default());
//! assert_eq!(stats.messages, 3);
//! assert_eq!(stats.media, 1);
//! assert_eq!(stats.links, 1);
//!
//! let timeline = monthly_timeline(&records, &UserScope::Overall);
//! assert_eq!(timeline[0].label, "January-2024");
//! assert_eq!(timeline[0].messages, 2);
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use chrono::{NaiveDate, Weekday};
use regex::Regex;
use serde::Serialize;

use crate::MessageRecord;
use crate::config::StatsConfig;
use crate::record::{month_name, period_label, weekday_name};

/// Name of the pseudo-user that stands for the whole conversation.
pub const OVERALL: &str = "Overall";

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:https?://|www\.)[^\s<>]+").expect("url pattern is valid")
});

/// Which records an analysis looks at.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum UserScope {
    /// Every record.
    #[default]
    Overall,
    /// Records of one user (exact name).
    User(String),
}

impl UserScope {
    /// Creates a scope for one user.
    pub fn user(name: impl Into<String>) -> Self {
        UserScope::User(name.into())
    }

    /// Returns `true` if `record` is inside this scope.
    pub fn contains(&self, record: &MessageRecord) -> bool {
        match self {
            UserScope::Overall => true,
            UserScope::User(name) => record.user() == name,
        }
    }

    /// Returns the selected user name, `None` for the whole conversation.
    pub fn user_name(&self) -> Option<&str> {
        match self {
            UserScope::Overall => None,
            UserScope::User(name) => Some(name),
        }
    }
}

impl fmt::Display for UserScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserScope::Overall => write!(f, "{OVERALL}"),
            UserScope::User(name) => write!(f, "{name}"),
        }
    }
}

impl FromStr for UserScope {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == OVERALL {
            Ok(UserScope::Overall)
        } else {
            Ok(UserScope::User(s.to_string()))
        }
    }
}

fn scoped<'a, I>(records: I, scope: &'a UserScope) -> impl Iterator<Item = &'a MessageRecord> + 'a
where
    I: IntoIterator<Item = &'a MessageRecord>,
    I::IntoIter: 'a,
{
    records.into_iter().filter(move |r| scope.contains(r))
}

/// Counts occurrences of keys, returning them by count descending and, on
/// ties, in order of first appearance.
pub(crate) fn rank_by_count<K, I>(keys: I) -> Vec<(K, usize)>
where
    K: Eq + std::hash::Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut order: Vec<K> = Vec::new();
    let mut counts: HashMap<K, usize> = HashMap::new();

    for key in keys {
        let count = counts.entry(key.clone()).or_insert(0);
        if *count == 0 {
            order.push(key);
        }
        *count += 1;
    }

    let mut ranked: Vec<(K, usize)> = order
        .into_iter()
        .map(|k| {
            let n = counts.get(&k).copied().unwrap_or_default();
            (k, n)
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
}

/// Returns the distinct users, sorted, with [`OVERALL`] first.
pub fn user_list<'a, I>(records: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let mut users: Vec<String> = records.into_iter().map(|r| r.user().to_string()).collect();
    users.sort();
    users.dedup();
    users.insert(0, OVERALL.to_string());
    users
}

// ============================================================================
// Top statistics
// ============================================================================

/// Headline numbers of a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ChatStats {
    /// Number of records.
    pub messages: usize,
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Number of media placeholders.
    pub media: usize,
    /// Number of links.
    pub links: usize,
}

/// Counts messages, words, media and links.
pub fn fetch_stats<'a, I>(records: I, scope: &'a UserScope, config: &StatsConfig) -> ChatStats
where
    I: IntoIterator<Item = &'a MessageRecord>,
    I::IntoIter: 'a,
{
    let mut stats = ChatStats::default();

    for record in scoped(records, scope) {
        stats.messages += 1;
        stats.words += record.message().split_whitespace().count();
        if record.message() == config.media_placeholder {
            stats.media += 1;
        }
        stats.links += URL_RE.find_iter(record.message()).count();
    }

    stats
}

// ============================================================================
// Timelines
// ============================================================================

/// Messages in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub year: i32,
    pub month_num: u32,
    /// English month name.
    pub month: String,
    /// `"<Month>-<Year>"`, e.g. `"January-2024"`.
    pub label: String,
    pub messages: usize,
}

/// Message counts per month, in chronological order.
pub fn monthly_timeline<'a, I>(records: I, scope: &'a UserScope) -> Vec<MonthlyCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
    I::IntoIter: 'a,
{
    let mut buckets: BTreeMap<(i32, u32), usize> = BTreeMap::new();
    for record in scoped(records, scope) {
        if let (Some(year), Some(month)) = (record.year(), record.month_num()) {
            *buckets.entry((year, month)).or_insert(0) += 1;
        }
    }

    buckets
        .into_iter()
        .map(|((year, month_num), messages)| {
            let month = month_name(month_num).unwrap_or_default().to_string();
            MonthlyCount {
                label: format!("{month}-{year}"),
                year,
                month_num,
                month,
                messages,
            }
        })
        .collect()
}

/// Messages on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub messages: usize,
}

/// Message counts per day, in chronological order. Days without messages
/// are not listed.
pub fn daily_timeline<'a, I>(records: I, scope: &'a UserScope) -> Vec<DailyCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
    I::IntoIter: 'a,
{
    let mut buckets: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for date in scoped(records, scope).filter_map(MessageRecord::only_date) {
        *buckets.entry(date).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(date, messages)| DailyCount { date, messages })
        .collect()
}

// ============================================================================
// Activity maps
// ============================================================================

/// Messages in one named bucket (weekday or month).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityCount {
    pub name: String,
    pub messages: usize,
}

fn ranked_buckets(counts: Vec<(&'static str, usize)>) -> Vec<ActivityCount> {
    let mut active: Vec<ActivityCount> = counts
        .into_iter()
        .filter(|(_, n)| *n > 0)
        .map(|(name, messages)| ActivityCount {
            name: name.to_string(),
            messages,
        })
        .collect();
    // stable: ties keep calendar order
    active.sort_by(|a, b| b.messages.cmp(&a.messages));
    active
}

/// Messages per weekday, busiest first.
pub fn week_activity_map<'a, I>(records: I, scope: &'a UserScope) -> Vec<ActivityCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
    I::IntoIter: 'a,
{
    let mut counts = [0usize; 7];
    for weekday in scoped(records, scope).filter_map(MessageRecord::weekday) {
        counts[weekday.num_days_from_monday() as usize] += 1;
    }

    ranked_buckets(
        WEEKDAYS
            .iter()
            .map(|&d| (weekday_name(d), counts[d.num_days_from_monday() as usize]))
            .collect(),
    )
}

/// Messages per calendar month (all years together), busiest first.
pub fn month_activity_map<'a, I>(records: I, scope: &'a UserScope) -> Vec<ActivityCount>
where
    I: IntoIterator<Item = &'a MessageRecord>,
    I::IntoIter: 'a,
{
    let mut counts = [0usize; 12];
    for month in scoped(records, scope).filter_map(MessageRecord::month_num) {
        if let Some(slot) = (month as usize).checked_sub(1).and_then(|i| counts.get_mut(i)) {
            *slot += 1;
        }
    }

    ranked_buckets(
        (1..=12u32)
            .filter_map(|m| month_name(m).map(|name| (name, counts[m as usize - 1])))
            .collect(),
    )
}

/// Weekday × hour-of-day message counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityHeatmap {
    /// Row labels, Monday first.
    pub days: Vec<String>,
    /// Column labels, `"0-1"` to `"23-0"`.
    pub periods: Vec<String>,
    /// `counts[day][hour]`.
    pub counts: Vec<Vec<usize>>,
}

impl ActivityHeatmap {
    /// Returns the count for a weekday and hour.
    pub fn get(&self, day: Weekday, hour: u32) -> usize {
        self.counts
            .get(day.num_days_from_monday() as usize)
            .and_then(|row| row.get(hour as usize))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the total number of messages in the map.
    pub fn total(&self) -> usize {
        self.counts.iter().flatten().sum()
    }

    /// Returns `true` if no dated message was counted.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Builds the weekly activity heatmap.
pub fn activity_heatmap<'a, I>(records: I, scope: &'a UserScope) -> ActivityHeatmap
where
    I: IntoIterator<Item = &'a MessageRecord>,
    I::IntoIter: 'a,
{
    let mut counts = vec![vec![0usize; 24]; 7];
    for record in scoped(records, scope) {
        if let (Some(day), Some(hour)) = (record.weekday(), record.hour()) {
            if let Some(slot) = counts[day.num_days_from_monday() as usize].get_mut(hour as usize) {
                *slot += 1;
            }
        }
    }

    ActivityHeatmap {
        days: WEEKDAYS.iter().map(|&d| weekday_name(d).to_string()).collect(),
        periods: (0..24).map(period_label).collect(),
        counts,
    }
}

// ============================================================================
// Users
// ============================================================================

/// Share of one user in the conversation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserShare {
    pub user: String,
    /// Percentage of all records, rounded to two decimals.
    pub percent: f64,
}

/// Most active users.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BusyUsers {
    /// The `n` users with most records, busiest first.
    pub top: Vec<(String, usize)>,
    /// Every user's share of the records, busiest first.
    pub shares: Vec<UserShare>,
}

/// Ranks users by number of records.
///
/// `group_notification` is ranked like any other user.
pub fn most_busy_users<'a, I>(records: I, n: usize) -> BusyUsers
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let ranked = rank_by_count(records.into_iter().map(|r| r.user().to_string()));
    let total: usize = ranked.iter().map(|(_, c)| c).sum();

    let shares = ranked
        .iter()
        .map(|(user, count)| UserShare {
            user: user.clone(),
            percent: round2(*count as f64 / total as f64 * 100.0),
        })
        .collect();

    BusyUsers {
        top: ranked.into_iter().take(n).collect(),
        shares,
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ChatLogParser;

    fn sample() -> Vec<MessageRecord> {
        ChatLogParser::new().parse(concat!(
            "1/1/24, 10:00 AM - Messages are end-to-end encrypted.\n",
            "1/1/24, 10:01 AM - Alice: hi all, see www.example.org\n",
            "1/1/24, 11:30 PM - Bob: <Media omitted>\n",
            "2/1/24, 9:15 AM - Alice: morning https://a.example/x and http://b.example\n",
            "5/2/24, 9:45 AM - Carol: late to the party\n",
            "6/2/24, 8:00 PM - Alice: ok\n",
            "31/2/24, 8:00 PM - Bob: broken date\n",
        ))
    }

    #[test]
    fn test_user_scope_from_str() {
        assert_eq!("Overall".parse::<UserScope>().unwrap(), UserScope::Overall);
        assert_eq!(
            "Alice".parse::<UserScope>().unwrap(),
            UserScope::user("Alice")
        );
        assert_eq!(UserScope::user("Bob").to_string(), "Bob");
        assert_eq!(UserScope::Overall.user_name(), None);
    }

    #[test]
    fn test_user_list() {
        let users = user_list(&sample());
        assert_eq!(
            users,
            vec!["Overall", "Alice", "Bob", "Carol", "group_notification"]
        );
    }

    #[test]
    fn test_fetch_stats_overall() {
        let stats = fetch_stats(&sample(), &UserScope::Overall, &StatsConfig::default());
        assert_eq!(stats.messages, 7);
        assert_eq!(stats.media, 1);
        assert_eq!(stats.links, 3);
        assert_eq!(stats.words, 4 + 4 + 2 + 4 + 4 + 1 + 2);
    }

    #[test]
    fn test_fetch_stats_user() {
        let stats = fetch_stats(&sample(), &UserScope::user("Alice"), &StatsConfig::default());
        assert_eq!(stats.messages, 3);
        assert_eq!(stats.media, 0);
        assert_eq!(stats.links, 3);
    }

    #[test]
    fn test_monthly_timeline_skips_undated() {
        let timeline = monthly_timeline(&sample(), &UserScope::Overall);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].label, "January-2024");
        assert_eq!(timeline[0].messages, 4);
        assert_eq!(timeline[1].label, "February-2024");
        assert_eq!(timeline[1].month_num, 2);
        assert_eq!(timeline[1].messages, 2);
    }

    #[test]
    fn test_daily_timeline() {
        let timeline = daily_timeline(&sample(), &UserScope::user("Alice"));
        let days: Vec<_> = timeline.iter().map(|d| (d.date.to_string(), d.messages)).collect();
        assert_eq!(
            days,
            vec![
                ("2024-01-01".to_string(), 1),
                ("2024-01-02".to_string(), 1),
                ("2024-02-06".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_week_activity_map() {
        // 2024-01-01 Mon x3, 01-02 Tue, 02-05 Mon, 02-06 Tue
        let map = week_activity_map(&sample(), &UserScope::Overall);
        assert_eq!(map[0].name, "Monday");
        assert_eq!(map[0].messages, 4);
        assert_eq!(map[1].name, "Tuesday");
        assert_eq!(map[1].messages, 2);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_month_activity_map_ties_keep_calendar_order() {
        let records = ChatLogParser::new().parse(
            "1/3/24, 10:00 AM - A: x\n1/1/24, 10:00 AM - A: y\n",
        );
        let map = month_activity_map(&records, &UserScope::Overall);
        let names: Vec<_> = map.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["January", "March"]);
    }

    #[test]
    fn test_activity_heatmap() {
        let heatmap = activity_heatmap(&sample(), &UserScope::Overall);
        assert_eq!(heatmap.days.len(), 7);
        assert_eq!(heatmap.periods.len(), 24);
        assert_eq!(heatmap.periods[23], "23-0");
        assert_eq!(heatmap.get(Weekday::Mon, 10), 2);
        assert_eq!(heatmap.get(Weekday::Mon, 23), 1);
        assert_eq!(heatmap.get(Weekday::Tue, 20), 1);
        assert_eq!(heatmap.total(), 6);
        assert!(!heatmap.is_empty());
    }

    #[test]
    fn test_out_of_range_fields_are_ignored() {
        let mut bad = ChatLogParser::new().parse("1/1/24, 10:00 AM - A: x\n").remove(0);
        bad.month_num = Some(0);
        bad.hour = Some(24);
        let records = vec![bad];

        assert!(month_activity_map(&records, &UserScope::Overall).is_empty());
        assert!(activity_heatmap(&records, &UserScope::Overall).is_empty());
    }

    #[test]
    fn test_activity_heatmap_empty() {
        let records = vec![MessageRecord::new(None, "Alice", "hi")];
        assert!(activity_heatmap(&records, &UserScope::Overall).is_empty());
    }

    #[test]
    fn test_most_busy_users() {
        let busy = most_busy_users(&sample(), 2);
        assert_eq!(
            busy.top,
            vec![("Alice".to_string(), 3), ("Bob".to_string(), 2)]
        );
        assert_eq!(busy.shares.len(), 4);
        assert_eq!(busy.shares[0].user, "Alice");
        assert!((busy.shares[0].percent - 42.86).abs() < 1e-9);
        assert!((busy.shares[3].percent - 14.29).abs() < 1e-9);
    }

    #[test]
    fn test_most_busy_users_empty() {
        let busy = most_busy_users(&Vec::<MessageRecord>::new(), 5);
        assert!(busy.top.is_empty());
        assert!(busy.shares.is_empty());
    }

    #[test]
    fn test_rank_by_count_ties_in_first_seen_order() {
        let ranked = rank_by_count(vec!["b", "a", "a", "c", "b", "d"]);
        assert_eq!(ranked, vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]);
    }
}

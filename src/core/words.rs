//! Word and emoji frequencies.

use unicode_properties::UnicodeEmoji;

use crate::MessageRecord;
use crate::config::StatsConfig;
use crate::core::stats::{UserScope, rank_by_count};

/// Built-in English stop words, plus common chat filler.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "don't", "down", "during", "each", "few",
    "for", "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers",
    "herself", "him", "himself", "his", "how", "i", "i'm", "if", "in", "into", "is", "it", "it's",
    "its", "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own",
    "same", "she", "should", "so", "some", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "these", "they", "this", "those", "through", "to",
    "too", "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "you're", "your", "yours",
    "yourself", "yourselves", "ok", "okay", "yeah", "yes", "haha", "hahaha", "lol", "hmm", "u",
    "ur", "im",
];

/// Splits a message into lowercase words, trimming punctuation at both ends.
fn words(message: &str) -> impl Iterator<Item = String> + '_ {
    message
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
        .filter(|w| !w.is_empty())
}

/// Returns the most frequent words, at most `config.common_words_n`.
///
/// Group notifications, media placeholders and stop words are ignored.
/// Ties are listed in order of first appearance.
pub fn most_common_words<'a, I>(
    records: I,
    scope: &UserScope,
    config: &StatsConfig,
) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    let counted = records
        .into_iter()
        .filter(|r| scope.contains(r))
        .filter(|r| !r.is_notification() && r.message() != config.media_placeholder)
        .flat_map(|r| words(r.message()))
        .filter(|w| !config.is_stop_word(w));

    let mut ranked = rank_by_count(counted);
    ranked.truncate(config.common_words_n);
    ranked
}

/// Returns how often each emoji occurs, most used first.
///
/// Skin-tone modifiers, zero-width joiners and variation selectors are not
/// counted, so a composed emoji counts as its pictographic parts.
pub fn emoji_usage<'a, I>(records: I, scope: &UserScope) -> Vec<(char, usize)>
where
    I: IntoIterator<Item = &'a MessageRecord>,
{
    rank_by_count(
        records
            .into_iter()
            .filter(|r| scope.contains(r))
            .flat_map(|r| r.message().chars())
            .filter(|&c| is_emoji(c)),
    )
}

/// Returns `true` for code points with the Unicode `Emoji` property.
///
/// Emoji components (keycap digits, skin tones, hair styles, joiners and
/// variation selectors) are excluded. Regional indicators are kept so flags
/// show up as their letter pairs.
pub fn is_emoji(c: char) -> bool {
    if ('\u{1F1E6}'..='\u{1F1FF}').contains(&c) {
        return true;
    }
    c.is_emoji_char() && !c.is_emoji_component()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ChatLogParser;

    fn sample() -> Vec<MessageRecord> {
        ChatLogParser::new().parse(concat!(
            "1/1/24, 10:00 AM - Alice created group \"Pizza pizza\"\n",
            "1/1/24, 10:01 AM - Alice: Pizza tonight? 🍕🍕\n",
            "1/1/24, 10:02 AM - Bob: <Media omitted>\n",
            "1/1/24, 10:03 AM - Bob: yes, pizza! And movie 👍🏽\n",
            "1/1/24, 10:04 AM - Carol: movie night ❤️ 🍕\n",
        ))
    }

    #[test]
    fn test_words_trim_punctuation() {
        let w: Vec<_> = words("Hello, WORLD!! (really)").collect();
        assert_eq!(w, vec!["hello", "world", "really"]);
    }

    #[test]
    fn test_most_common_words() {
        let top = most_common_words(&sample(), &UserScope::Overall, &StatsConfig::default());
        assert_eq!(top[0], ("pizza".to_string(), 2));
        assert_eq!(top[1], ("movie".to_string(), 2));
        assert_eq!(top[2], ("tonight".to_string(), 1));
        assert!(top.iter().all(|(w, _)| w != "yes" && w != "and"));
        assert!(top.iter().all(|(w, _)| w != "media" && w != "omitted"));
        assert!(top.iter().all(|(w, _)| w != "created"));
    }

    #[test]
    fn test_most_common_words_limit_and_scope() {
        let config = StatsConfig::new().with_common_words_n(1);
        let top = most_common_words(&sample(), &UserScope::user("Carol"), &config);
        assert_eq!(top, vec![("movie".to_string(), 1)]);
    }

    #[test]
    fn test_emoji_usage() {
        let usage = emoji_usage(&sample(), &UserScope::Overall);
        assert_eq!(usage[0], ('🍕', 3));
        assert!(usage.contains(&('👍', 1)));
        assert!(usage.contains(&('❤', 1)));
        assert_eq!(usage.len(), 3);
    }

    #[test]
    fn test_emoji_usage_user() {
        let usage = emoji_usage(&sample(), &UserScope::user("Alice"));
        assert_eq!(usage, vec![('🍕', 2)]);
    }

    #[test]
    fn test_is_emoji() {
        assert!(is_emoji('😀'));
        assert!(is_emoji('🚀'));
        assert!(!is_emoji('a'));
        assert!(!is_emoji('\u{1F3FD}'));
        assert!(!is_emoji('\u{200D}'));
        assert!(!is_emoji('\u{FE0F}'));
        assert!(!is_emoji('7'));
        assert!(!is_emoji('#'));
        assert!(is_emoji('\u{1F1FA}'));
    }

    #[test]
    fn test_is_emoji_symbols_with_emoji_property() {
        for c in ['🆗', '🅰', '🈯', '©', '®', '™', '‼', '↔', '〰', '❤', '✏'] {
            assert!(is_emoji(c), "{c} should count as emoji");
        }
    }

    #[test]
    fn test_is_emoji_rejects_plain_symbols() {
        for c in ['✓', '☐', '♩', '⚀', '✎', '→', '★'] {
            assert!(!is_emoji(c), "{c} should not count as emoji");
        }
    }

    #[test]
    fn test_emoji_usage_ignores_plain_symbols() {
        let records = ChatLogParser::new().parse(
            "1/1/24, 10:00 AM - Alice: 🆗 ©\n1/1/24, 10:01 AM - Bob: task ✓ done\n",
        );
        let usage = emoji_usage(&records, &UserScope::Overall);
        assert_eq!(usage, vec![('🆗', 1), ('©', 1)]);
    }
}

//! Text helpers for word, link and emoji statistics.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)\b(?:https?://|www\.)[^\s<>"]+"#).expect("link pattern is valid")
});

// Flags are a pair of regional indicators and count as one glyph.
static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x{1F1E6}-\x{1F1FF}]{2}|\p{Extended_Pictographic}").expect("emoji pattern is valid")
});

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    include_str!("stop_words.txt")
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .collect()
});

/// Number of whitespace-separated tokens in `body`.
pub fn word_count(body: &str) -> usize {
    body.split_whitespace().count()
}

/// URLs found in `body`, in order.
///
/// ```
/// use chatlens::core::text::find_links;
///
/// let links: Vec<_> = find_links("see https://example.com and www.rust-lang.org").collect();
/// assert_eq!(links, vec!["https://example.com", "www.rust-lang.org"]);
/// ```
pub fn find_links(body: &str) -> impl Iterator<Item = &str> {
    LINK.find_iter(body).map(|m| m.as_str())
}

/// Returns `true` if `token` is a URL.
pub fn is_link(token: &str) -> bool {
    LINK.find(token).is_some_and(|m| m.start() == 0)
}

/// Emoji glyphs in `body`, one item per pictographic character or flag.
pub fn find_emojis(body: &str) -> impl Iterator<Item = &str> {
    EMOJI.find_iter(body).map(|m| m.as_str())
}

/// Returns `true` if `word` (already lower-cased) is a built-in stop word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Strips leading and trailing characters that are not alphanumeric.
pub fn strip_punctuation(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

/// Lower-cases a token and strips leading and trailing punctuation.
///
/// Returns `None` when nothing alphanumeric is left.
pub fn normalize_token(token: &str) -> Option<String> {
    let trimmed = strip_punctuation(token);
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

//! Configuration types for parsing and analysis.
//!
//! This module provides plain configuration structs for library usage,
//! without any CLI framework dependencies.
//!
//! - [`ParserConfig`] - export layout and date order
//! - [`AnalysisConfig`] - table sizes, media placeholders, extra stop words
//! - [`Config`] - both of the above, loadable from a JSON file
//!
//! # Example
//!
//! ```rust
//! use chatlens::config::{AnalysisConfig, DateOrder, ParserConfig};
//!
//! let parser = ParserConfig::new().with_date_order(DateOrder::DayFirst);
//! let analysis = AnalysisConfig::new()
//!     .with_top_words(10)
//!     .with_extra_stop_word("lol");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Media placeholder written by Android exports.
pub const DEFAULT_MEDIA_PLACEHOLDER: &str = "<Media omitted>";

/// Media placeholders written by iOS exports.
pub const IOS_MEDIA_PLACEHOLDERS: &[&str] = &[
    "image omitted",
    "video omitted",
    "audio omitted",
    "sticker omitted",
    "GIF omitted",
    "document omitted",
];

/// Prefix style of a WhatsApp export.
///
/// - Android: `12/1/23, 10:00 am - Alice: Hello`
/// - iOS: `[12/1/23, 10:00:05 AM] Alice: Hello`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportLayout {
    /// `date, time - ` prefix
    Android,
    /// `[date, time] ` prefix
    Ios,
}

impl ExportLayout {
    /// Returns all layouts, in detection priority order.
    pub fn all() -> &'static [ExportLayout] {
        &[ExportLayout::Android, ExportLayout::Ios]
    }
}

impl fmt::Display for ExportLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportLayout::Android => write!(f, "Android"),
            ExportLayout::Ios => write!(f, "iOS"),
        }
    }
}

/// Order of the day and month components in export dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateOrder {
    /// Decide from the data; month-first when nothing disambiguates.
    #[default]
    Auto,
    /// `M/D/Y` (US locale)
    MonthFirst,
    /// `D/M/Y` (most other locales)
    DayFirst,
}

/// Configuration for export parsing.
///
/// # Example
///
/// ```rust
/// use chatlens::config::{ExportLayout, ParserConfig};
///
/// let config = ParserConfig::new().with_layout(ExportLayout::Ios);
/// assert_eq!(config.layout, Some(ExportLayout::Ios));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Force a layout instead of auto-detecting it (default: auto)
    pub layout: Option<ExportLayout>,

    /// Day/month order of dates (default: auto)
    pub date_order: DateOrder,
}

impl ParserConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Forces the export layout.
    #[must_use]
    pub fn with_layout(mut self, layout: ExportLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Sets the date order.
    #[must_use]
    pub fn with_date_order(mut self, order: DateOrder) -> Self {
        self.date_order = order;
        self
    }
}

/// Configuration for the statistics pass.
///
/// # Example
///
/// ```rust
/// use chatlens::config::AnalysisConfig;
///
/// let config = AnalysisConfig::new()
///     .with_top_senders(3)
///     .with_media_placeholder("<Medien ausgeschlossen>");
///
/// assert!(config.is_media("<Medien ausgeschlossen>"));
/// assert!(config.is_media("<Media omitted>"));
/// assert!(config.is_media("image omitted"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of words in the common words table (default: 20)
    pub top_words: usize,

    /// Number of senders in the busiest senders table (default: 5)
    pub top_senders: usize,

    /// Bodies that mark a media message (default: the Android and iOS placeholders)
    pub media_placeholders: Vec<String>,

    /// Words ignored in addition to the built-in stop words, stored lower-cased
    #[serde(deserialize_with = "lowercase_words")]
    pub extra_stop_words: Vec<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_words: 20,
            top_senders: 5,
            media_placeholders: std::iter::once(DEFAULT_MEDIA_PLACEHOLDER)
                .chain(IOS_MEDIA_PLACEHOLDERS.iter().copied())
                .map(String::from)
                .collect(),
            extra_stop_words: Vec::new(),
        }
    }
}

impl AnalysisConfig {
    /// Creates a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the size of the common words table.
    #[must_use]
    pub fn with_top_words(mut self, n: usize) -> Self {
        self.top_words = n;
        self
    }

    /// Sets the size of the busiest senders table.
    #[must_use]
    pub fn with_top_senders(mut self, n: usize) -> Self {
        self.top_senders = n;
        self
    }

    /// Adds a media placeholder body.
    #[must_use]
    pub fn with_media_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.media_placeholders.push(placeholder.into());
        self
    }

    /// Adds a stop word. Matching is case-insensitive.
    #[must_use]
    pub fn with_extra_stop_word(mut self, word: impl Into<String>) -> Self {
        self.extra_stop_words.push(word.into().to_lowercase());
        self
    }

    /// Returns `true` if `body` is one of the media placeholders.
    pub fn is_media(&self, body: &str) -> bool {
        let body = body.trim_matches(|c: char| c.is_whitespace() || c == '\u{200e}');
        self.media_placeholders.iter().any(|p| p == body)
    }

    /// Returns `true` if `word` (already lower-cased) is an extra stop word.
    pub fn is_extra_stop_word(&self, word: &str) -> bool {
        self.extra_stop_words.iter().any(|w| w == word)
    }
}

fn lowercase_words<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let words = Vec::<String>::deserialize(deserializer)?;
    Ok(words.into_iter().map(|w| w.to_lowercase()).collect())
}

/// Parser and analysis settings together.
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserConfig,
    pub analysis: AnalysisConfig,
}

#[cfg(feature = "json-output")]
impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// ```rust
    /// use chatlens::config::{Config, DateOrder};
    ///
    /// let config = Config::from_json(r#"{"parser": {"date_order": "day-first"}}"#)?;
    /// assert_eq!(config.parser.date_order, DateOrder::DayFirst);
    /// assert_eq!(config.analysis.top_words, 20);
    /// # Ok::<(), chatlens::ChatlensError>(())
    /// ```
    pub fn from_json(text: &str) -> crate::Result<Self> {
        serde_json::from_str(text)
            .map_err(|e| crate::ChatlensError::invalid_config(e.to_string()))
    }

    /// Reads a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<std::path::Path>) -> crate::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

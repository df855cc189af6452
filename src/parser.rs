//! WhatsApp TXT export parser.
//!
//! Exports differ by platform and locale. The parser auto-detects the prefix
//! layout from the first 20 non-empty lines and the day/month order from the
//! dates themselves.
//!
//! Supported layouts:
//! - Android: `12/1/23, 10:00 am - Sender: Message`
//! - Android 24h: `26.10.2025, 20:40 - Sender: Message`
//! - iOS: `[1/15/24, 10:30:45 AM] Sender: Message`
//!
//! # Example
//!
//! ```rust
//! use chatlens::parser::ChatParser;
//! use chatlens::Sender;
//!
//! let raw = "12/1/23, 10:00 am - Alice: Hello there\n\
//!            12/1/23, 10:01 am - Bob joined using this group's invite link\n";
//!
//! let records = ChatParser::new().parse_str(raw);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records.messages()[1].sender, Sender::System);
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::ParserConfig;
use crate::core::models::RecordSet;
use crate::error::{ChatlensError, Result};
use crate::message::{Message, Sender};
use crate::parsing::whatsapp::{
    detect_layout_in, find_prefixes, parse_whatsapp_timestamp, resolve_date_order,
};

/// File extension accepted by [`ChatParser::parse_file`].
pub const EXPORT_EXTENSION: &str = "txt";

/// Parses an export with the default configuration.
///
/// Returns an empty [`RecordSet`] when the text contains no timestamped
/// messages; callers should treat that as "not a valid export".
///
/// ```rust
/// let records = chatlens::parse("not a chat export");
/// assert!(records.is_empty());
/// ```
pub fn parse(raw: &str) -> RecordSet {
    ChatParser::new().parse_str(raw)
}

/// Parser for WhatsApp TXT exports.
#[derive(Debug, Clone, Default)]
pub struct ChatParser {
    config: ParserConfig,
}

impl ChatParser {
    /// Creates a new parser with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a parser with custom configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parses export text into a [`RecordSet`].
    ///
    /// Rows whose timestamp prefix matches the pattern but does not form a
    /// valid date-time (e.g. `2/30/23`) are skipped and counted in
    /// [`RecordSet::dropped`].
    pub fn parse_str(&self, raw: &str) -> RecordSet {
        let text = raw.strip_prefix('\u{feff}').unwrap_or(raw);

        let Some(layout) = self.config.layout.or_else(|| detect_layout_in(text)) else {
            debug!("no timestamp prefix found, treating input as empty");
            return RecordSet::default();
        };

        let prefixes = find_prefixes(text, layout);
        let order = resolve_date_order(self.config.date_order, prefixes.iter().map(|p| p.date));
        debug!(%layout, ?order, prefixes = prefixes.len(), "parsing export");

        let mut messages = Vec::with_capacity(prefixes.len());
        let mut dropped = 0usize;

        for (i, prefix) in prefixes.iter().enumerate() {
            let chunk_end = prefixes.get(i + 1).map_or(text.len(), |next| next.start);
            let chunk = &text[prefix.end..chunk_end];

            let Some(timestamp) =
                parse_whatsapp_timestamp(prefix.date, prefix.time, prefix.meridiem, order)
            else {
                debug!(
                    date = prefix.date,
                    time = prefix.time,
                    "dropping row with unparseable timestamp"
                );
                dropped += 1;
                continue;
            };

            let (sender, body) = split_sender(chunk);
            messages.push(Message::new(timestamp, sender, body));
        }

        info!(
            messages = messages.len(),
            dropped, "parsed {layout} export"
        );

        RecordSet::new(messages)
            .with_dropped(dropped)
            .with_layout(layout)
    }

    /// Parses raw bytes, which must be UTF-8.
    pub fn parse_bytes(&self, bytes: Vec<u8>) -> Result<RecordSet> {
        let text = String::from_utf8(bytes).map_err(|e| ChatlensError::decode(e, None))?;
        Ok(self.parse_str(&text))
    }

    /// Loads and parses an export file.
    ///
    /// # Errors
    ///
    /// - [`ChatlensError::UnsupportedExtension`] if the file is not `.txt`
    ///   (checked before the file is read)
    /// - [`ChatlensError::Io`] if the file can't be read
    /// - [`ChatlensError::Decode`] if the content is not UTF-8
    /// - [`ChatlensError::NotAnExport`] if no message could be parsed
    pub fn parse_file(&self, path: &Path) -> Result<RecordSet> {
        let has_txt_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case(EXPORT_EXTENSION));
        if !has_txt_extension {
            return Err(ChatlensError::unsupported_extension(path));
        }

        let bytes = fs::read(path)?;
        let text = String::from_utf8(bytes)
            .map_err(|e| ChatlensError::decode(e, Some(path.to_path_buf())))?;

        let records = self.parse_str(&text);
        if records.is_empty() {
            return Err(ChatlensError::not_an_export(Some(path.to_path_buf())));
        }

        Ok(records)
    }
}

/// Splits a message chunk into sender and body.
///
/// The sender is everything before the first `": "` on the chunk's first line.
/// Chunks without one are system notices and keep their whole text as body.
fn split_sender(chunk: &str) -> (Sender, &str) {
    let first_line = chunk.lines().next().unwrap_or("");

    let (sender, body) = match first_line.find(": ") {
        Some(pos) if pos > 0 => (Sender::user(chunk[..pos].trim()), &chunk[pos + 2..]),
        _ => (Sender::System, chunk),
    };

    let body = body
        .trim_start_matches('\u{200e}')
        .trim_end_matches(['\n', '\r']);
    (sender, body)
}

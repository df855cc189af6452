//! Narrow a record set by sender or date window.
//!
//! - [`SenderFilter`] selects either every message or one sender's messages.
//!   Every statistic takes one.
//! - [`FilterConfig`] keeps messages inside an inclusive date window and is
//!   applied once, before analysis, with [`apply_filters`].
//!
//! # Examples
//!
//! ## Filter by Sender
//!
//! ```
//! use chatlens::core::filter::SenderFilter;
//! use chatlens::parse;
//!
//! let records = parse(
//!     "1/1/24, 9:00 am - Alice: Hello\n1/1/24, 9:01 am - Bob: Hi\n1/1/24, 9:02 am - Alice: Bye\n",
//! );
//!
//! let alice = SenderFilter::only("Alice");
//! assert_eq!(alice.select(&records).count(), 2);
//! assert_eq!(SenderFilter::All.select(&records).count(), 3);
//! ```
//!
//! ## Filter by Date Range
//!
//! ```
//! use chatlens::core::filter::{FilterConfig, apply_filters};
//! use chatlens::parse;
//!
//! # fn main() -> chatlens::Result<()> {
//! let records = parse("1/1/24, 9:00 am - Alice: Old\n6/15/24, 9:00 am - Alice: New\n");
//!
//! let config = FilterConfig::new()
//!     .with_date_from("2024-06-01")?
//!     .with_date_to("2024-12-31")?;
//!
//! let filtered = apply_filters(records, &config);
//! assert_eq!(filtered.len(), 1);
//! assert_eq!(filtered.messages()[0].body, "New");
//! # Ok(())
//! # }
//! ```
//!
//! # Behavior Notes
//!
//! - Sender matching is exact; names are compared as written in the export
//! - Date bounds are inclusive whole days
//! - Both date bounds are combined with AND logic

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::core::models::RecordSet;
use crate::error::ChatlensError;
use crate::message::{Message, SYSTEM_SENDER, Sender};

/// Label of [`SenderFilter::All`] in reports.
pub const ALL_SENDERS: &str = "all";

/// Which messages a statistic looks at.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum SenderFilter {
    /// Every message, system notices included.
    #[default]
    All,
    /// Only messages from this sender.
    Only(Sender),
}

impl SenderFilter {
    /// Shorthand for `SenderFilter::Only(Sender::user(name))`.
    pub fn only(name: impl Into<String>) -> Self {
        SenderFilter::Only(Sender::user(name))
    }

    /// Resolves a user-supplied name against the senders of `records`.
    ///
    /// `"all"` selects everything; `"system"` selects system notices. Any
    /// other name must match a participant exactly.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::UnknownSender`] if nobody by that name wrote
    /// a message.
    pub fn resolve(name: &str, records: &RecordSet) -> Result<Self, ChatlensError> {
        if name == ALL_SENDERS {
            return Ok(SenderFilter::All);
        }
        let sender = if name == SYSTEM_SENDER {
            Sender::System
        } else {
            Sender::user(name)
        };
        if records.contains_sender(&sender) {
            Ok(SenderFilter::Only(sender))
        } else {
            Err(ChatlensError::unknown_sender(name))
        }
    }

    /// Returns `true` for [`SenderFilter::All`].
    pub fn is_all(&self) -> bool {
        matches!(self, SenderFilter::All)
    }

    /// Returns `true` if `msg` passes the filter.
    pub fn matches(&self, msg: &Message) -> bool {
        match self {
            SenderFilter::All => true,
            SenderFilter::Only(sender) => &msg.sender == sender,
        }
    }

    /// Iterates over the messages of `records` that pass the filter.
    pub fn select<'a>(&'a self, records: &'a RecordSet) -> impl Iterator<Item = &'a Message> + 'a {
        records.iter().filter(move |msg| self.matches(msg))
    }

    /// Report label: `"all"` or the sender name.
    pub fn label(&self) -> &str {
        match self {
            SenderFilter::All => ALL_SENDERS,
            SenderFilter::Only(sender) => sender.as_str(),
        }
    }
}

impl fmt::Display for SenderFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for SenderFilter {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Inclusive date window.
///
/// # Examples
///
/// ```
/// use chatlens::core::filter::FilterConfig;
///
/// # fn main() -> chatlens::Result<()> {
/// let window = FilterConfig::new()
///     .with_date_from("2024-01-01")?
///     .with_date_to("2024-12-31")?;
/// assert!(window.is_active());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Include only messages on or after this date.
    pub after: Option<NaiveDate>,

    /// Include only messages on or before this date.
    pub before: Option<NaiveDate>,
}

impl FilterConfig {
    /// Creates a new empty filter configuration.
    ///
    /// No filters are active by default; all messages pass through.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the start date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_from(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.after = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the end date filter (inclusive). Date format: `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ChatlensError::InvalidDate`] if the format is invalid.
    pub fn with_date_to(mut self, date_str: &str) -> Result<Self, ChatlensError> {
        self.before = Some(parse_date(date_str)?);
        Ok(self)
    }

    /// Sets the start date directly.
    #[must_use]
    pub fn with_after(mut self, date: NaiveDate) -> Self {
        self.after = Some(date);
        self
    }

    /// Sets the end date directly.
    #[must_use]
    pub fn with_before(mut self, date: NaiveDate) -> Self {
        self.before = Some(date);
        self
    }

    /// Returns `true` if any bound is set.
    pub fn is_active(&self) -> bool {
        self.after.is_some() || self.before.is_some()
    }

    /// Returns `true` if `msg` falls inside the window.
    pub fn matches(&self, msg: &Message) -> bool {
        let date = msg.date();
        if self.after.is_some_and(|after| date < after) {
            return false;
        }
        if self.before.is_some_and(|before| date > before) {
            return false;
        }
        true
    }
}

/// Parse a date string in YYYY-MM-DD format.
fn parse_date(date_str: &str) -> Result<NaiveDate, ChatlensError> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|_| ChatlensError::invalid_date(date_str))
}

/// Keeps only the messages inside the configured date window.
///
/// If no bound is set, returns the records unchanged. Parse metadata
/// (dropped count, layout) is preserved.
pub fn apply_filters(records: RecordSet, config: &FilterConfig) -> RecordSet {
    if !config.is_active() {
        return records;
    }

    records.retain(|msg| config.matches(msg))
}

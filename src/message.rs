//! Parsed chat message with derived calendar fields.
//!
//! A [`Message`] holds only what the export states: when it was sent, who sent
//! it, and the text. Every calendar field (year, month name, weekday, hour
//! bucket, ...) is computed from the timestamp on demand, so derived values can
//! never drift from the timestamp they describe.
//!
//! # Examples
//!
//! ```
//! use chatlens::{Message, Sender};
//! use chrono::NaiveDate;
//!
//! let ts = NaiveDate::from_ymd_opt(2023, 12, 1)
//!     .unwrap()
//!     .and_hms_opt(13, 5, 0)
//!     .unwrap();
//! let msg = Message::new(ts, Sender::user("Alice"), "Hello there");
//!
//! assert_eq!(msg.year(), 2023);
//! assert_eq!(msg.month_name(), "December");
//! assert_eq!(msg.day_name(), "Friday");
//! assert_eq!(msg.period().label(), "13-14");
//! ```

use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label used for [`Sender::System`] in serialized output and reports.
pub const SYSTEM_SENDER: &str = "system";

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

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Returns the English month name for a month number (1-12).
///
/// Out-of-range numbers yield an empty string.
pub fn month_name(month_num: u32) -> &'static str {
    month_num
        .checked_sub(1)
        .and_then(|i| MONTH_NAMES.get(i as usize))
        .copied()
        .unwrap_or("")
}

/// Returns the English day name for a weekday.
pub fn day_name(weekday: Weekday) -> &'static str {
    DAY_NAMES[weekday.num_days_from_monday() as usize]
}

/// Who wrote a message.
///
/// Notices such as "Alice joined using this group's invite link" carry no
/// `name: ` prefix in the export; they are attributed to [`Sender::System`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sender {
    /// A named participant
    User(String),
    /// Group notices without an author
    System,
}

impl Sender {
    /// Creates a participant sender.
    pub fn user(name: impl Into<String>) -> Self {
        Sender::User(name.into())
    }

    /// Returns `true` for the system sentinel.
    pub fn is_system(&self) -> bool {
        matches!(self, Sender::System)
    }

    /// Returns the display name, or [`SYSTEM_SENDER`] for system notices.
    pub fn as_str(&self) -> &str {
        match self {
            Sender::User(name) => name,
            Sender::System => SYSTEM_SENDER,
        }
    }
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for Sender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Sender {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        if name == SYSTEM_SENDER {
            Ok(Sender::System)
        } else {
            Ok(Sender::User(name))
        }
    }
}

/// One-hour bucket of the day, used as the heatmap column.
///
/// Labels follow the `"start-end"` convention: `"13-14"` for 1pm. The two
/// ends of the day are written `"00-1"` and `"23-00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HourPeriod(u32);

impl HourPeriod {
    /// Creates the bucket for `hour` (taken modulo 24).
    pub fn new(hour: u32) -> Self {
        Self(hour % 24)
    }

    /// All 24 buckets in hour order.
    pub fn all() -> impl Iterator<Item = HourPeriod> {
        (0..24).map(HourPeriod)
    }

    /// Returns the starting hour of the bucket.
    pub fn hour(self) -> u32 {
        self.0
    }

    /// Returns the bucket label.
    pub fn label(self) -> String {
        match self.0 {
            0 => "00-1".to_string(),
            23 => "23-00".to_string(),
            h => format!("{}-{}", h, h + 1),
        }
    }
}

impl fmt::Display for HourPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.label())
    }
}

impl Serialize for HourPeriod {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// A single parsed chat message.
///
/// Insertion order inside a [`RecordSet`](crate::RecordSet) is the order of
/// the export file. Duplicate timestamps and senders are valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Local send time as written in the export (no timezone).
    pub timestamp: NaiveDateTime,

    /// Author, or the system sentinel.
    pub sender: Sender,

    /// Message text. Multi-line messages keep their inner newlines.
    pub body: String,
}

impl Message {
    /// Creates a new message.
    pub fn new(timestamp: NaiveDateTime, sender: Sender, body: impl Into<String>) -> Self {
        Self {
            timestamp,
            sender,
            body: body.into(),
        }
    }

    // =========================================================================
    // Accessor methods
    // =========================================================================

    /// Returns the send time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    /// Returns the sender.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// Returns the message text.
    pub fn body(&self) -> &str {
        &self.body
    }

    // =========================================================================
    // Derived calendar fields
    // =========================================================================

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Month number, 1-12.
    pub fn month_num(&self) -> u32 {
        self.timestamp.month()
    }

    /// English month name, e.g. `"January"`.
    pub fn month_name(&self) -> &'static str {
        month_name(self.month_num())
    }

    /// Day of the month, 1-31.
    pub fn day(&self) -> u32 {
        self.timestamp.day()
    }

    /// Calendar date without the time of day.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }

    pub fn weekday(&self) -> Weekday {
        self.timestamp.weekday()
    }

    /// English day name, e.g. `"Monday"`.
    pub fn day_name(&self) -> &'static str {
        day_name(self.weekday())
    }

    pub fn hour(&self) -> u32 {
        self.timestamp.hour()
    }

    pub fn minute(&self) -> u32 {
        self.timestamp.minute()
    }

    /// The one-hour bucket this message falls in.
    pub fn period(&self) -> HourPeriod {
        HourPeriod::new(self.hour())
    }
}

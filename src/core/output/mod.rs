//! Output writers.
//!
//! Records (the parsed export with derived calendar fields):
//! - [`write_csv`] / [`to_csv`] - CSV with semicolon delimiter - requires `csv-output` feature
//! - [`write_json`] / [`to_json`] - JSON array of rows - requires `json-output` feature
//! - [`write_jsonl`] / [`to_jsonl`] - JSON Lines, one row per line - requires `json-output` feature
//!
//! Analysis reports:
//! - [`to_text`] - human-readable tables
//! - [`analysis_to_json`] - pretty-printed JSON - requires `json-output` feature
//!
//! # Example
//!
//! ```rust,no_run
//! # #[cfg(all(feature = "csv-output", feature = "json-output"))]
//! # fn main() -> chatlens::Result<()> {
//! use chatlens::core::output::{to_csv, write_json, write_jsonl};
//! use chatlens::parse;
//!
//! let records = parse("1/1/24, 9:00 am - Alice: Hello\n");
//!
//! write_json(&records, "records.json")?;
//! write_jsonl(&records, "records.jsonl")?;
//! let csv_string = to_csv(&records)?;
//! # Ok(())
//! # }
//! # #[cfg(not(all(feature = "csv-output", feature = "json-output")))]
//! # fn main() {}
//! ```

#[cfg(feature = "csv-output")]
mod csv_writer;
#[cfg(feature = "json-output")]
mod json_writer;
#[cfg(feature = "json-output")]
mod jsonl_writer;
mod text_writer;

#[cfg(feature = "csv-output")]
pub use csv_writer::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use json_writer::{analysis_to_json, to_json, write_json};
#[cfg(feature = "json-output")]
pub use jsonl_writer::{to_jsonl, write_jsonl};
pub use text_writer::to_text;

use serde::Serialize;

use crate::message::Message;

/// Format used for the `timestamp` column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One exported row: a message plus its derived calendar fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordRow<'a> {
    pub timestamp: String,
    pub date: String,
    pub year: i32,
    pub month_num: u32,
    pub month: &'static str,
    pub day: u32,
    pub day_name: &'static str,
    pub hour: u32,
    pub minute: u32,
    pub period: String,
    pub sender: &'a str,
    pub body: &'a str,
}

impl<'a> RecordRow<'a> {
    /// Column names, in serialization order.
    pub const HEADER: [&'static str; 12] = [
        "timestamp",
        "date",
        "year",
        "month_num",
        "month",
        "day",
        "day_name",
        "hour",
        "minute",
        "period",
        "sender",
        "body",
    ];

    pub fn from_message(msg: &'a Message) -> Self {
        Self {
            timestamp: msg.timestamp.format(TIMESTAMP_FORMAT).to_string(),
            date: msg.date().to_string(),
            year: msg.year(),
            month_num: msg.month_num(),
            month: msg.month_name(),
            day: msg.day(),
            day_name: msg.day_name(),
            hour: msg.hour(),
            minute: msg.minute(),
            period: msg.period().label(),
            sender: msg.sender.as_str(),
            body: &msg.body,
        }
    }
}

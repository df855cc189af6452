//! # Chatlens
//!
//! A Rust library for turning WhatsApp chat exports into descriptive
//! statistics.
//!
//! ## Overview
//!
//! Chatlens reads the plain-text export produced by WhatsApp's "Export chat"
//! (both the Android `date, time - ` layout and the iOS `[date, time] ` layout),
//! builds an ordered [`RecordSet`] of messages, and computes:
//! - message, word, media and link counts
//! - monthly and daily timelines
//! - busiest weekdays and months, and a weekday × hour heatmap
//! - the busiest participants and their share of the conversation
//! - the most common words and emoji
//!
//! Every statistic can be narrowed to one participant with a
//! [`SenderFilter`](core::SenderFilter).
//!
//! ## Quick Start
//!
//! ```rust
//! use chatlens::prelude::*;
//!
//! let records = parse(
//!     "12/1/23, 10:00 am - Alice: Hello there\n12/1/23, 10:01 am - Bob: <Media omitted>\n",
//! );
//!
//! let analysis = analyze(&records, &SenderFilter::All, &AnalysisConfig::default());
//! assert_eq!(analysis.counts.messages, 2);
//! assert_eq!(analysis.counts.media, 1);
//! ```
//!
//! ## Loading a File
//!
//! ```rust,no_run
//! use chatlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let records = ChatParser::new().parse_file("chat.txt".as_ref())?;
//!     let bob = SenderFilter::resolve("Bob", &records)?;
//!     let analysis = analyze(&records, &bob, &AnalysisConfig::default());
//!     println!("{analysis}");
//!     Ok(())
//! }
//! ```
//!
//! ## Module Structure
//!
//! - [`parser`]: [`ChatParser`](parser::ChatParser) and [`parse`]
//! - [`parsing`]: timestamp prefix patterns and layout detection
//! - [`message`]: [`Message`], [`Sender`] and calendar helpers
//! - [`config`]: parser and analysis settings
//! - [`core`]: record set, filters, statistics, reports and writers
//! - [`format`]: output format selection
//! - [`cli`]: CLI argument types (feature `cli`)
//! - [`error`]: [`ChatlensError`] and [`Result`]
//! - [`prelude`]: convenient re-exports

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod format;
pub mod message;
pub mod parser;
pub mod parsing;

// Re-export the main types at the crate root for convenience
pub use crate::core::models::RecordSet;
pub use error::{ChatlensError, Result};
pub use message::{Message, Sender};
pub use parser::parse;

/// Convenient re-exports for common usage.
///
/// ```rust
/// use chatlens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Message, RecordSet, Sender, parse};

    pub use crate::error::{ChatlensError, Result};

    pub use crate::config::{AnalysisConfig, Config, DateOrder, ExportLayout, ParserConfig};
    pub use crate::parser::ChatParser;

    pub use crate::core::filter::{FilterConfig, SenderFilter, apply_filters};
    pub use crate::core::report::{Analysis, analyze};

    pub use crate::format::{OutputFormat, ReportFormat, render_report};
}

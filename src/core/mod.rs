//! Core analysis logic for chatlens.
//!
//! This module contains:
//! - [`models`] - The [`RecordSet`] produced by the parser
//! - [`filter`] - Sender selection and date windows
//! - [`stats`] - Individual statistics (counts, timelines, heatmap, words, emoji)
//! - [`report`] - [`analyze`], running every statistic at once
//! - [`output`] - Record exporters (CSV, JSON, JSONL) and report renderers
//!
//! # Quick Start
//!
//! ```rust
//! use chatlens::config::AnalysisConfig;
//! use chatlens::core::{SenderFilter, analyze};
//! use chatlens::parse;
//!
//! let records = parse("1/1/24, 9:00 am - Alice: Hello\n");
//! let analysis = analyze(&records, &SenderFilter::All, &AnalysisConfig::default());
//! assert_eq!(analysis.counts.messages, 1);
//! ```

pub mod filter;
pub mod models;
pub mod output;
pub mod report;
pub mod stats;
pub(crate) mod tally;
pub mod text;

pub use filter::{FilterConfig, SenderFilter, apply_filters};
pub use models::RecordSet;
pub use report::{Analysis, analyze};
pub use stats::{
    ActivityHeatmap, BasicCounts, DailyBucket, EmojiCount, LabelCount, MonthlyBucket,
    SenderActivity, SenderCount, SenderShare, WordCount,
};

pub use output::to_text;
#[cfg(feature = "csv-output")]
pub use output::{to_csv, write_csv};
#[cfg(feature = "json-output")]
pub use output::{analysis_to_json, to_json, to_jsonl, write_json, write_jsonl};

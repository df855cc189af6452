//! Command-line interface definition using clap.
//!
//! This module defines:
//! - [`Cli`] - top-level arguments (for use with clap)
//! - [`Commands`] - `analyze`, `users` and `export`
//! - [`OutputFormat`], [`ReportFormat`], [`DateOrder`] - value enums that
//!   convert into their library counterparts
//!
//! # Example
//!
//! ```rust
//! use clap::Parser;
//! use chatlens::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from(["chatlens", "users", "chat.txt"]);
//! assert!(matches!(cli.command, Commands::Users { .. }));
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Analyze WhatsApp chat exports: message counts, timelines, activity
/// heatmaps, common words and emoji.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatlens")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatlens analyze chat.txt
    chatlens analyze chat.txt --user Alice --after 2024-01-01
    chatlens analyze chat.txt --format json -o report.json
    chatlens users chat.txt
    chatlens export chat.txt --format jsonl -o records.jsonl")]
pub struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Print statistics for the whole chat or one participant
    Analyze {
        /// Path to the exported .txt file
        input: PathBuf,

        /// Only analyze messages from this participant ("all" for everyone)
        #[arg(short, long, value_name = "NAME", default_value = "all")]
        user: String,

        /// Only include messages on or after this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        after: Option<String>,

        /// Only include messages on or before this date (YYYY-MM-DD)
        #[arg(long, value_name = "DATE")]
        before: Option<String>,

        /// Number of entries in the common words table
        #[arg(long, value_name = "N")]
        top_words: Option<usize>,

        /// Number of entries in the busiest senders table
        #[arg(long, value_name = "N")]
        top_senders: Option<usize>,

        /// Report format
        #[arg(short, long, value_enum, default_value = "text")]
        format: ReportFormat,

        /// Write the report to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// How to read ambiguous numeric dates
        #[arg(long, value_enum)]
        date_order: Option<DateOrder>,

        /// JSON configuration file
        #[arg(short, long, value_name = "PATH")]
        config: Option<PathBuf>,
    },

    /// List the participants of a chat
    Users {
        /// Path to the exported .txt file
        input: PathBuf,

        /// How to read ambiguous numeric dates
        #[arg(long, value_enum)]
        date_order: Option<DateOrder>,
    },

    /// Write the parsed messages with derived calendar fields
    Export {
        /// Path to the exported .txt file
        input: PathBuf,

        /// Output format (inferred from --output when omitted)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,

        /// How to read ambiguous numeric dates
        #[arg(long, value_enum)]
        date_order: Option<DateOrder>,
    },
}

/// Record export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum OutputFormat {
    /// CSV with semicolon delimiter
    #[default]
    Csv,

    /// JSON array of rows
    Json,

    /// JSON Lines, one row per line
    #[value(alias = "ndjson")]
    Jsonl,
}

impl From<OutputFormat> for crate::format::OutputFormat {
    fn from(format: OutputFormat) -> crate::format::OutputFormat {
        match format {
            OutputFormat::Csv => crate::format::OutputFormat::Csv,
            OutputFormat::Json => crate::format::OutputFormat::Json,
            OutputFormat::Jsonl => crate::format::OutputFormat::Jsonl,
        }
    }
}

/// Report format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Default)]
pub enum ReportFormat {
    /// Human-readable tables
    #[default]
    Text,

    /// Pretty-printed JSON
    Json,
}

impl From<ReportFormat> for crate::format::ReportFormat {
    fn from(format: ReportFormat) -> crate::format::ReportFormat {
        match format {
            ReportFormat::Text => crate::format::ReportFormat::Text,
            ReportFormat::Json => crate::format::ReportFormat::Json,
        }
    }
}

/// Numeric date order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum DateOrder {
    /// Guess from the export's dates
    Auto,

    /// `MM/DD/YY`
    MonthFirst,

    /// `DD/MM/YY`
    DayFirst,
}

impl From<DateOrder> for crate::config::DateOrder {
    fn from(order: DateOrder) -> crate::config::DateOrder {
        match order {
            DateOrder::Auto => crate::config::DateOrder::Auto,
            DateOrder::MonthFirst => crate::config::DateOrder::MonthFirst,
            DateOrder::DayFirst => crate::config::DateOrder::DayFirst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_analyze_defaults() {
        let cli = Cli::parse_from(["chatlens", "analyze", "chat.txt"]);
        let Commands::Analyze {
            input,
            user,
            format,
            output,
            date_order,
            ..
        } = cli.command
        else {
            panic!("expected analyze");
        };
        assert_eq!(input, PathBuf::from("chat.txt"));
        assert_eq!(user, "all");
        assert_eq!(format, ReportFormat::Text);
        assert!(output.is_none());
        assert!(date_order.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_analyze_all_options() {
        let cli = Cli::parse_from([
            "chatlens",
            "analyze",
            "chat.txt",
            "--user",
            "Alice",
            "--after",
            "2024-01-01",
            "--top-words",
            "5",
            "--format",
            "json",
            "--date-order",
            "day-first",
            "-v",
        ]);
        assert!(cli.verbose);
        let Commands::Analyze {
            user,
            after,
            top_words,
            format,
            date_order,
            ..
        } = cli.command
        else {
            panic!("expected analyze");
        };
        assert_eq!(user, "Alice");
        assert_eq!(after.as_deref(), Some("2024-01-01"));
        assert_eq!(top_words, Some(5));
        assert_eq!(format, ReportFormat::Json);
        assert_eq!(date_order, Some(DateOrder::DayFirst));
    }

    #[test]
    fn test_export_format_alias() {
        let cli = Cli::parse_from(["chatlens", "export", "chat.txt", "-f", "ndjson"]);
        let Commands::Export { format, .. } = cli.command else {
            panic!("expected export");
        };
        assert_eq!(format, Some(OutputFormat::Jsonl));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(
            crate::format::OutputFormat::from(OutputFormat::Json),
            crate::format::OutputFormat::Json
        );
        assert_eq!(
            crate::format::ReportFormat::from(ReportFormat::Json),
            crate::format::ReportFormat::Json
        );
        assert_eq!(
            crate::config::DateOrder::from(DateOrder::MonthFirst),
            crate::config::DateOrder::MonthFirst
        );
    }
}

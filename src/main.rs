//! # chatlens CLI
//!
//! Command-line interface for the chatlens library.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;

use clap::Parser as ClapParser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use chatlens::cli::{Cli, Commands, DateOrder};
use chatlens::config::Config;
use chatlens::core::filter::ALL_SENDERS;
use chatlens::core::{FilterConfig, RecordSet, SenderFilter, analyze, apply_filters};
use chatlens::format::{OutputFormat, render_report, to_format_string, write_to_format};
use chatlens::parser::ChatParser;
use chatlens::Result;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Analyze {
            input,
            user,
            after,
            before,
            top_words,
            top_senders,
            format,
            output,
            date_order,
            config,
        } => {
            let mut config = match config {
                Some(path) => Config::from_json_file(path)?,
                None => Config::default(),
            };
            if let Some(order) = date_order {
                config.parser.date_order = order.into();
            }
            if let Some(n) = top_words {
                config.analysis.top_words = n;
            }
            if let Some(n) = top_senders {
                config.analysis.top_senders = n;
            }

            let mut window = FilterConfig::new();
            if let Some(after) = &after {
                window = window.with_date_from(after)?;
            }
            if let Some(before) = &before {
                window = window.with_date_to(before)?;
            }

            let records = ChatParser::with_config(config.parser).parse_file(&input)?;
            report_dropped(&records);

            // Resolve against the whole export so a participant who is silent
            // inside the date window still gets an (empty) report.
            let filter = SenderFilter::resolve(&user, &records)?;
            let records = apply_filters(records, &window);

            let analysis = analyze(&records, &filter, &config.analysis);
            let rendered = render_report(&analysis, format.into())?;
            emit(&rendered, output.as_deref())
        }

        Commands::Users { input, date_order } => {
            let records = load(&input, date_order)?;

            let mut out = String::new();
            out.push_str(ALL_SENDERS);
            out.push('\n');
            for name in records.user_names() {
                out.push_str(name);
                out.push('\n');
            }
            emit(&out, None)
        }

        Commands::Export {
            input,
            format,
            output,
            date_order,
        } => {
            let records = load(&input, date_order)?;

            let format: OutputFormat = match (format, &output) {
                (Some(format), _) => format.into(),
                (None, Some(path)) => OutputFormat::from_path(path)?,
                (None, None) => OutputFormat::default(),
            };

            match output {
                Some(path) => {
                    write_to_format(&records, &path, format)?;
                    info!(path = %path.display(), %format, rows = records.len(), "export written");
                    Ok(())
                }
                None => emit(&to_format_string(&records, format)?, None),
            }
        }
    }
}

fn load(input: &Path, date_order: Option<DateOrder>) -> Result<RecordSet> {
    let mut config = Config::default().parser;
    if let Some(order) = date_order {
        config.date_order = order.into();
    }
    let records = ChatParser::with_config(config).parse_file(input)?;
    report_dropped(&records);
    Ok(records)
}

fn report_dropped(records: &RecordSet) {
    if records.dropped() > 0 {
        warn!(
            dropped = records.dropped(),
            "skipped rows with unparseable timestamps"
        );
    }
}

/// Writes to `path`, or to stdout when no path is given.
fn emit(content: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            info!(path = %path.display(), "report written");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Initialize tracing subscriber with environment filter.
///
/// `RUST_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "chatlens=debug" } else { "chatlens=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

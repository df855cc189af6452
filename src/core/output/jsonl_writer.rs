//! JSON Lines (JSONL) output writer.
//!
//! One row per line, suited to streaming consumers and line-oriented tools.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::RecordRow;
use crate::core::models::RecordSet;
use crate::error::Result;

/// Writes records to JSONL (JSON Lines) format.
///
/// Each line is a valid JSON object:
/// ```jsonl
/// {"timestamp":"2024-01-01 09:00:00",...,"sender":"Alice","body":"Hello"}
/// {"timestamp":"2024-01-01 09:05:00",...,"sender":"Bob","body":"Hi"}
/// ```
pub fn write_jsonl(records: &RecordSet, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string.
pub fn to_jsonl(records: &RecordSet) -> Result<String> {
    let mut buf = Vec::new();
    write_lines(records, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_lines<W: Write>(records: &RecordSet, writer: &mut W) -> Result<()> {
    for msg in records {
        let line = serde_json::to_string(&RecordRow::from_message(msg))?;
        writeln!(writer, "{line}")?;
    }
    Ok(())
}

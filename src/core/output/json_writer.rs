//! JSON output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::RecordRow;
use crate::core::models::RecordSet;
use crate::core::report::Analysis;
use crate::error::Result;

/// Writes records to a JSON file as an array of rows.
///
/// # Format
/// ```json
/// [
///   {"timestamp": "2024-01-01 09:00:00", "date": "2024-01-01", ..., "sender": "Alice", "body": "Hello"}
/// ]
/// ```
pub fn write_json(records: &RecordSet, output_path: impl AsRef<Path>) -> Result<()> {
    let json = to_json(records)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts records to a pretty-printed JSON array.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(records: &RecordSet) -> Result<String> {
    let rows: Vec<RecordRow<'_>> = records.iter().map(RecordRow::from_message).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

/// Converts an analysis report to pretty-printed JSON.
pub fn analysis_to_json(analysis: &Analysis) -> Result<String> {
    Ok(serde_json::to_string_pretty(analysis)?)
}

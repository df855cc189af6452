//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use super::RecordRow;
use crate::core::models::RecordSet;
use crate::error::Result;

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: see [`RecordRow::HEADER`]
/// - Encoding: UTF-8
pub fn write_csv(records: &RecordSet, output_path: impl AsRef<Path>) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(records, file)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &RecordSet) -> Result<String> {
    let mut buf = Vec::new();
    write_rows(records, &mut buf)?;
    // Inputs are &str, so the csv writer only ever emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

fn write_rows<W: Write>(records: &RecordSet, out: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_writer(out);

    writer.write_record(RecordRow::HEADER)?;
    for msg in records {
        writer.serialize(RecordRow::from_message(msg))?;
    }

    writer.flush()?;
    Ok(())
}

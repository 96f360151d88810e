//! JSON output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, Row};
use crate::error::Result;

/// Writes rows to a JSON file as an array.
///
/// # Format
/// ```json
/// [
///   {"date": "2024-01-01 10:00:00", "user": "Alice", "message": "hi", ...},
///   {"date": null, "user": "Bob", "message": "yo", ...}
/// ]
/// ```
pub fn write_json(rows: &[Row<'_>], output_path: &str, config: &OutputConfig) -> Result<()> {
    let json = to_json(rows, config)?;
    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

/// Converts rows to a pretty-printed JSON array.
///
/// Same format as [`write_json`], but returns a String instead of writing to file.
pub fn to_json(rows: &[Row<'_>], config: &OutputConfig) -> Result<String> {
    let rows: Vec<Row<'_>> = rows.iter().map(|row| config.apply(row)).collect();
    Ok(serde_json::to_string_pretty(&rows)?)
}

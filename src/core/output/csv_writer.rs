//! CSV output writer.

use std::fs::File;
use std::io::Write;

use crate::core::models::{OutputConfig, Row};
use crate::error::Result;

/// Column names, in schema order.
pub const CSV_HEADER: [&str; 12] = [
    "date",
    "user",
    "message",
    "only_date",
    "year",
    "month_num",
    "month",
    "day",
    "day_name",
    "hour",
    "minute",
    "period",
];

/// Writes rows to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: the twelve record fields in schema order, then `source`
///   when [`OutputConfig::include_source`] is set
/// - Missing values are empty cells
/// - Encoding: UTF-8
pub fn write_csv(rows: &[Row<'_>], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    write_rows(rows, file, config)
}

/// Converts rows to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(rows: &[Row<'_>], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_rows(rows, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_rows<W: Write>(rows: &[Row<'_>], out: W, config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for row in rows {
        writer.write_record(build_record(row, config))?;
    }

    writer.flush()?;
    Ok(())
}

/// Build CSV header based on output configuration.
fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = CSV_HEADER.to_vec();
    if config.include_source {
        header.push("source");
    }
    header
}

/// Build CSV record for a single row.
fn build_record(row: &Row<'_>, config: &OutputConfig) -> Vec<String> {
    let r = row.record;
    let mut record = vec![
        r.date()
            .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
            .unwrap_or_default(),
        r.user().to_string(),
        r.message().to_string(),
        r.only_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default(),
        cell(r.year()),
        cell(r.month_num()),
        r.month().unwrap_or_default().to_string(),
        cell(r.day()),
        r.day_name().unwrap_or_default().to_string(),
        cell(r.hour()),
        cell(r.minute()),
        r.period().unwrap_or_default().to_string(),
    ];

    if config.include_source {
        record.push(config.source_of(row).unwrap_or_default().to_string());
    }

    record
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

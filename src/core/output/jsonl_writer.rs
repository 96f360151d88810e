//! JSONL output writer.

use std::fs::File;
use std::io::{BufWriter, Write};

use crate::core::models::{OutputConfig, Row};
use crate::error::Result;

/// Writes rows to JSONL (JSON Lines) format.
///
/// Each line is one record object:
/// ```jsonl
/// {"date":"2024-01-01 10:00:00","user":"Alice","message":"hi",...}
/// {"date":null,"user":"Bob","message":"yo",...}
/// ```
pub fn write_jsonl(rows: &[Row<'_>], output_path: &str, config: &OutputConfig) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(rows, &mut writer, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts rows to a JSONL string.
pub fn to_jsonl(rows: &[Row<'_>], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_lines(rows, &mut buffer, config)?;
    Ok(String::from_utf8(buffer)?)
}

fn write_lines<W: Write>(rows: &[Row<'_>], out: &mut W, config: &OutputConfig) -> Result<()> {
    for row in rows {
        let line = serde_json::to_string(&config.apply(row))?;
        writeln!(out, "{line}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MessageRecord;
    use crate::core::models::rows_from;
    use std::io::{BufRead, BufReader};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_jsonl_basic() {
        let records = vec![
            MessageRecord::new(None, "Alice", "Hello"),
            MessageRecord::new(None, "Bob", "Hi"),
        ];

        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path().to_str().unwrap();
        write_jsonl(&rows_from(&records), path, &OutputConfig::new()).unwrap();

        let file = std::fs::File::open(path).unwrap();
        let lines: Vec<String> = BufReader::new(file).lines().map(|l| l.unwrap()).collect();

        assert_eq!(lines.len(), 2);
        for line in &lines {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            assert!(value.get("user").is_some());
        }
        assert!(lines[1].contains(r#""user":"Bob""#));
    }

    #[test]
    fn test_jsonl_one_object_per_line() {
        let records = vec![MessageRecord::new(None, "Alice", "line one\nline two")];
        let jsonl = to_jsonl(&rows_from(&records), &OutputConfig::new()).unwrap();

        assert_eq!(jsonl.lines().count(), 1);
        assert!(jsonl.contains(r"line one\nline two"));
        assert!(!jsonl.trim_end().ends_with(','));
    }
}

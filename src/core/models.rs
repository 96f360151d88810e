//! Output-side data models.

use serde::Serialize;

use crate::MessageRecord;

/// One row of the output table: a record and, optionally, the name of the
/// export it came from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Row<'a> {
    #[serde(flatten)]
    pub record: &'a MessageRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
}

impl<'a> Row<'a> {
    /// Creates a row without source.
    pub fn new(record: &'a MessageRecord) -> Self {
        Self {
            record,
            source: None,
        }
    }

    /// Creates a row tagged with its source export.
    pub fn with_source(record: &'a MessageRecord, source: &'a str) -> Self {
        Self {
            record,
            source: Some(source),
        }
    }
}

/// Wraps plain records as output rows.
pub fn rows_from(records: &[MessageRecord]) -> Vec<Row<'_>> {
    records.iter().map(Row::new).collect()
}

/// Configuration for output format.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    /// Append a `source` column with the export name
    pub include_source: bool,
}

impl OutputConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_source(mut self) -> Self {
        self.include_source = true;
        self
    }

    /// Returns the source to emit for a row under this configuration.
    pub(crate) fn source_of<'a>(&self, row: &Row<'a>) -> Option<&'a str> {
        if self.include_source { row.source } else { None }
    }

    /// Returns the row as it should be serialized under this configuration.
    pub(crate) fn apply<'a>(&self, row: &Row<'a>) -> Row<'a> {
        Row {
            record: row.record,
            source: self.source_of(row),
        }
    }
}

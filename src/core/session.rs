//! A set of parsed exports analysed together.
//!
//! [`ChatSession`] is the explicit state the statistics functions work on:
//! each export keeps its own records and warnings, and the session exposes
//! them as one ordered stream.
//!
//! # Example
//!
//! ```
//! use chatpulse::core::session::ChatSession;
//! use chatpulse::parser::ChatLogParser;
//!
//! let parser = ChatLogParser::new();
//! let mut session = ChatSession::new();
//! session.add_report("a.txt", parser.parse_report("1/1/24, 10:00 AM - Alice: hi"));
//! session.add_report("b.txt", parser.parse_report("2/1/24, 9:00 AM - Bob: yo"));
//!
//! assert_eq!(session.len(), 2);
//! assert_eq!(session.users(), vec!["Overall", "Alice", "Bob"]);
//! ```

use std::path::Path;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::MessageRecord;
use crate::core::filter::FilterConfig;
use crate::core::models::Row;
use crate::core::stats::{BusyUsers, UserScope, most_busy_users, user_list};
use crate::error::{ChatpulseError, ParseWarning, Result};
use crate::parser::{ChatLogParser, ParseReport};

/// Records parsed from one export.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatFile {
    /// Display name of the export, usually its file name.
    pub name: String,
    pub records: Vec<MessageRecord>,
    pub warnings: Vec<ParseWarning>,
}

impl ChatFile {
    /// Creates a file entry from a parse report.
    pub fn new(name: impl Into<String>, report: ParseReport) -> Self {
        Self {
            name: name.into(),
            records: report.records,
            warnings: report.warnings,
        }
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the export produced no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parsed exports, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    files: Vec<ChatFile>,
}

impl ChatSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parsed export.
    ///
    /// Exports without records are skipped with a warning. Returns `true`
    /// if the export was added.
    pub fn add_report(&mut self, name: impl Into<String>, report: ParseReport) -> bool {
        let name = name.into();
        if report.is_empty() {
            warn!(source = %name, "no messages found, skipping export");
            return false;
        }

        debug!(source = %name, records = report.len(), "added export");
        self.files.push(ChatFile::new(name, report));
        true
    }

    /// Parses an export from text and adds it.
    pub fn add_export(&mut self, name: impl Into<String>, text: &str, parser: &ChatLogParser) -> bool {
        self.add_report(name, parser.parse_report(text))
    }

    /// Reads and parses every path, keeping the order of `paths`.
    ///
    /// With the `parallel` feature the files are parsed on the rayon pool.
    ///
    /// # Errors
    ///
    /// Returns the first read error; no partial session is returned.
    pub fn from_paths<P>(paths: &[P], parser: &ChatLogParser) -> Result<Self>
    where
        P: AsRef<Path> + Sync,
    {
        #[cfg(feature = "parallel")]
        let iter = paths.par_iter();
        #[cfg(not(feature = "parallel"))]
        let iter = paths.iter();

        let reports = iter
            .map(|path| {
                let path = path.as_ref();
                parser.read_report(path).map(|report| (source_name(path), report))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut session = Self::new();
        for (name, report) in reports {
            session.add_report(name, report);
        }
        Ok(session)
    }

    /// Returns the exports.
    pub fn files(&self) -> &[ChatFile] {
        &self.files
    }

    /// Returns every record, export by export.
    pub fn records(&self) -> impl Iterator<Item = &MessageRecord> {
        self.files.iter().flat_map(|f| f.records.iter())
    }

    /// Returns every record as an output row tagged with its export name.
    pub fn rows(&self) -> Vec<Row<'_>> {
        self.files
            .iter()
            .flat_map(|f| f.records.iter().map(move |r| Row::with_source(r, &f.name)))
            .collect()
    }

    /// Returns every warning with the export it was raised for.
    pub fn warnings(&self) -> impl Iterator<Item = (&str, &ParseWarning)> {
        self.files
            .iter()
            .flat_map(|f| f.warnings.iter().map(move |w| (f.name.as_str(), w)))
    }

    /// Returns the sorted user list with `"Overall"` first.
    pub fn users(&self) -> Vec<String> {
        user_list(self.records())
    }

    /// Resolves a user name to an analysis scope.
    ///
    /// # Errors
    ///
    /// Returns [`ChatpulseError::UnknownUser`] if nobody of that name wrote
    /// in any export.
    pub fn scope(&self, name: &str) -> Result<UserScope> {
        let Ok(scope) = name.parse::<UserScope>();
        match scope.user_name() {
            Some(user) if !self.records().any(|r| r.user() == user) => {
                Err(ChatpulseError::UnknownUser(user.to_string()))
            }
            _ => Ok(scope),
        }
    }

    /// Returns the total number of records.
    pub fn len(&self) -> usize {
        self.files.iter().map(ChatFile::len).sum()
    }

    /// Returns `true` if the session holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a session holding only the records that pass `filter`.
    ///
    /// Exports left without records are kept so their warnings survive.
    pub fn filtered(&self, filter: &FilterConfig) -> Self {
        let files = self
            .files
            .iter()
            .map(|f| ChatFile {
                name: f.name.clone(),
                records: f.records.iter().filter(|r| filter.matches(r)).cloned().collect(),
                warnings: f.warnings.clone(),
            })
            .collect();
        Self { files }
    }

    /// Ranks users separately for each export.
    pub fn busy_users_per_source(&self, n: usize) -> Vec<(&str, BusyUsers)> {
        self.files
            .iter()
            .map(|f| (f.name.as_str(), most_busy_users(&f.records, n)))
            .collect()
    }
}

fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

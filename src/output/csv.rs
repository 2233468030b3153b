//! CSV output formatter for duplicate search results.
//!
//! One row is generated for each duplicate file.
//!
//! # Columns
//!
//! - `group_id`: 1-based ID of the duplicate group (groups ordered by hash)
//! - `hash`: SHA-256 content hash (hexadecimal)
//! - `path`: Path to the file

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::duplicates::DuplicateGroups;

/// Errors that can occur during CSV output generation.
#[derive(Debug, Error)]
pub enum CsvOutputError {
    /// I/O error during writing.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Error during CSV serialization.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Serialize)]
struct CsvRow<'a> {
    group_id: usize,
    hash: &'a str,
    path: String,
}

/// CSV output formatter.
pub struct CsvOutput<'a> {
    groups: &'a DuplicateGroups,
}

impl<'a> CsvOutput<'a> {
    /// Create a new CSV output formatter.
    #[must_use]
    pub fn new(groups: &'a DuplicateGroups) -> Self {
        Self { groups }
    }

    /// Write the CSV output to the given writer.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if writing or serialization fails.
    pub fn write_to<W: io::Write>(&self, writer: W) -> Result<(), CsvOutputError> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        if self.groups.is_empty() {
            // serialize() emits the header with the first row only
            csv_writer.write_record(["group_id", "hash", "path"])?;
        }

        for (idx, group) in self.groups.sorted().into_iter().enumerate() {
            for path in group.paths {
                csv_writer.serialize(CsvRow {
                    group_id: idx + 1,
                    hash: group.hash,
                    path: path.to_string_lossy().into_owned(),
                })?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Generate CSV output as a string.
    ///
    /// # Errors
    ///
    /// Returns `CsvOutputError` if serialization fails.
    pub fn to_csv_string(&self) -> Result<String, CsvOutputError> {
        let mut buf = Vec::new();
        self.write_to(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

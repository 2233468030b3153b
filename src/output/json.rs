//! JSON output formatter for duplicate search results.
//!
//! # Output Schema
//!
//! ```json
//! {
//!   "duplicates": [
//!     {
//!       "hash": "2cf24dba...",
//!       "files": ["dir/a.txt", "dir/b.txt"]
//!     }
//!   ],
//!   "summary": {
//!     "total_files": 3,
//!     "duplicate_groups": 1,
//!     "duplicate_files": 1,
//!     "walk_duration_ms": 1,
//!     "hash_duration_ms": 2,
//!     "scan_duration_ms": 3,
//!     "exit_code": 0,
//!     "exit_code_name": "DD000"
//!   }
//! }
//! ```
//!
//! Groups are ordered by hash.

use std::io::Write;

use serde::Serialize;

use crate::duplicates::{DuplicateGroup, DuplicateGroups, ScanSummary};
use crate::error::ExitCode;

/// A single duplicate group in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonDuplicateGroup {
    /// SHA-256 hash as hexadecimal string (64 characters)
    pub hash: String,
    /// Paths of all files in the group, in discovery order
    pub files: Vec<String>,
}

impl From<DuplicateGroup<'_>> for JsonDuplicateGroup {
    fn from(group: DuplicateGroup<'_>) -> Self {
        Self {
            hash: group.hash.to_string(),
            files: group
                .paths
                .iter()
                .map(|p| p.to_string_lossy().into_owned())
                .collect(),
        }
    }
}

/// Summary statistics in JSON format.
#[derive(Debug, Clone, Serialize)]
pub struct JsonSummary {
    /// Total number of files hashed
    pub total_files: usize,
    /// Number of duplicate groups
    pub duplicate_groups: usize,
    /// Number of redundant copies
    pub duplicate_files: usize,
    /// Duration of the walking phase in milliseconds
    pub walk_duration_ms: u64,
    /// Duration of the hashing phase in milliseconds
    pub hash_duration_ms: u64,
    /// Duration of the whole search in milliseconds
    pub scan_duration_ms: u64,
    /// The exit code number
    pub exit_code: i32,
    /// The machine-readable exit code name (e.g., "DD000")
    pub exit_code_name: String,
}

impl JsonSummary {
    /// Create a JSON summary from a ScanSummary and an exit code.
    #[must_use]
    pub fn from_scan_summary(summary: &ScanSummary, exit_code: ExitCode) -> Self {
        Self {
            total_files: summary.total_files,
            duplicate_groups: summary.duplicate_groups,
            duplicate_files: summary.duplicate_files,
            walk_duration_ms: summary.walk_duration.as_millis() as u64,
            hash_duration_ms: summary.hash_duration.as_millis() as u64,
            scan_duration_ms: summary.scan_duration.as_millis() as u64,
            exit_code: exit_code.as_i32(),
            exit_code_name: exit_code.code_prefix().to_string(),
        }
    }
}

/// Complete JSON output structure.
#[derive(Debug, Clone, Serialize)]
pub struct JsonOutput {
    /// List of duplicate groups
    pub duplicates: Vec<JsonDuplicateGroup>,
    /// Search summary statistics
    pub summary: JsonSummary,
}

impl JsonOutput {
    /// Create a new JSON output from duplicate groups, summary and exit code.
    ///
    /// # Example
    ///
    /// ```
    /// use dedup::duplicates::{DuplicateGroups, ScanSummary};
    /// use dedup::error::ExitCode;
    /// use dedup::output::JsonOutput;
    ///
    /// let groups = DuplicateGroups::new();
    /// let output = JsonOutput::new(&groups, &ScanSummary::default(), ExitCode::Success);
    /// assert!(output.duplicates.is_empty());
    /// ```
    #[must_use]
    pub fn new(groups: &DuplicateGroups, summary: &ScanSummary, exit_code: ExitCode) -> Self {
        Self {
            duplicates: groups.sorted().into_iter().map(Into::into).collect(),
            summary: JsonSummary::from_scan_summary(summary, exit_code),
        }
    }

    /// Write JSON to a writer, followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or writing fails.
    pub fn write_to<W: Write>(&self, writer: &mut W, pretty: bool) -> Result<(), JsonOutputError> {
        if pretty {
            serde_json::to_writer_pretty(&mut *writer, self)?;
        } else {
            serde_json::to_writer(&mut *writer, self)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

/// Errors that can occur during JSON output.
#[derive(thiserror::Error, Debug)]
pub enum JsonOutputError {
    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error during writing
    #[error("I/O error during JSON generation: {0}")]
    Io(#[from] std::io::Error),
}

//! Structured error handling and exit codes.

use serde::Serialize;

use crate::duplicates::FinderError;

/// Exit codes for the dedup application.
///
/// - 0: Success (completed normally, with or without duplicates)
/// - 1: General error (a listing or read failed, or setup failed)
///
/// Command-line usage errors are reported by clap with its own exit code (2).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ExitCode {
    /// Success: the search ran to completion.
    Success = 0,
    /// General error: the search was aborted.
    GeneralError = 1,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "DD000",
            Self::GeneralError => "DD001",
        }
    }
}

/// Structured error information for JSON output.
#[derive(Debug, Serialize)]
pub struct StructuredError {
    /// The error code (e.g., "DD001")
    pub code: String,
    /// The exit code number
    pub exit_code: i32,
    /// Failing operation: "traversal", "read", or "other"
    pub kind: String,
    /// Path involved in the failure, if known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Human-readable error message
    pub message: String,
}

impl StructuredError {
    /// Create a new structured error from an anyhow error and an exit code.
    #[must_use]
    pub fn new(err: &anyhow::Error, exit_code: ExitCode) -> Self {
        let finder_error = err.downcast_ref::<FinderError>();
        Self {
            code: exit_code.code_prefix().to_string(),
            exit_code: exit_code.as_i32(),
            kind: finder_error.map_or("other", FinderError::kind).to_string(),
            path: finder_error.map(|e| e.path().display().to_string()),
            message: format!("{err:#}"),
        }
    }
}

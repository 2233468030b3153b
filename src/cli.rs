//! Command-line interface definitions for dedup.
//!
//! This module defines all CLI arguments and subcommands using the clap derive API.
//! Global options (verbosity, error format) apply to every subcommand.
//!
//! # Example
//!
//! ```bash
//! # Look for duplicates directly inside the current directory
//! dedup find
//!
//! # Search every sub-directory
//! dedup find ~/Downloads --recursive
//!
//! # Only descend two levels below the root, print JSON
//! dedup find ~/Downloads --depth 2 --output json
//!
//! # Verbose mode for debugging
//! dedup -v find ~/Downloads
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scanner::ExplorationPolicy;

/// Duplicate file finder.
///
/// dedup compares files by their SHA-256 content digest and reports every
/// set of files with identical bytes. Files are never modified.
#[derive(Debug, Parser)]
#[command(name = "dedup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity level (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print errors as JSON objects on stderr
    #[arg(long, global = true)]
    pub json_errors: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Find duplicate files in a directory
    Find(FindArgs),
}

/// Arguments for the find subcommand.
#[derive(Debug, Args)]
pub struct FindArgs {
    /// Directory to search (defaults to the current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Recursively search through all sub-directories
    #[arg(short, long)]
    pub recursive: bool,

    /// Only list directories less than N levels below PATH
    ///
    /// `--depth 1` searches PATH itself, `--depth 2` also its direct
    /// sub-directories, and so on.
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = parse_positive,
        conflicts_with = "recursive"
    )]
    pub depth: Option<usize>,

    /// Output format (overrides the config file)
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Read chunk size in bytes used when hashing (overrides the config file)
    #[arg(long, value_name = "BYTES", value_parser = parse_positive)]
    pub chunk_size: Option<usize>,

    /// Do not display progress bars
    #[arg(long)]
    pub no_progress: bool,
}

impl FindArgs {
    /// Translate the `--recursive` / `--depth` flags into a policy.
    ///
    /// Without either flag the search is single-level.
    #[must_use]
    pub fn policy(&self) -> ExplorationPolicy {
        if self.recursive {
            ExplorationPolicy::Recursive
        } else {
            self.depth
                .and_then(ExplorationPolicy::depth)
                .unwrap_or_default()
        }
    }

    /// The directory to search, falling back to the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if no path was given and the working directory
    /// cannot be determined.
    pub fn resolve_path(&self) -> std::io::Result<PathBuf> {
        match self.path {
            Some(ref path) => Ok(path.clone()),
            None => std::env::current_dir(),
        }
    }
}

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// JSON output for scripting
    Json,
    /// CSV output for spreadsheets
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Parse a strictly positive integer.
///
/// # Examples
///
/// ```
/// use dedup::cli::parse_positive;
///
/// assert_eq!(parse_positive("3").unwrap(), 3);
/// assert!(parse_positive("0").is_err());
/// ```
///
/// # Errors
///
/// Returns an error if the string is not a positive integer.
pub fn parse_positive(s: &str) -> Result<usize, String> {
    let value: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid number: '{s}'"))?;

    if value == 0 {
        return Err("Value must be at least 1".to_string());
    }

    Ok(value)
}

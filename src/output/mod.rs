//! Output formatters for duplicate search results.
//!
//! This module provides different output formats:
//! - Plain text for people
//! - JSON for automation and scripting
//! - CSV for spreadsheet import
//!
//! All formatters order groups by hash so repeated runs print the same
//! report for the same tree.
//!
//! # Example
//!
//! ```no_run
//! use dedup::output::TextOutput;
//! use dedup::scanner::ExplorationPolicy;
//!
//! let groups = dedup::find(".", ExplorationPolicy::SingleLevel).unwrap();
//! TextOutput::new(&groups).write_to(&mut std::io::stdout()).unwrap();
//! ```

pub mod csv;
pub mod json;
pub mod text;

// Re-export main types
pub use csv::CsvOutput;
pub use json::JsonOutput;
pub use text::TextOutput;

//! Duplicate detection module.
//!
//! This module provides functionality for:
//! - Grouping file paths by content digest
//! - The walk, hash and group pipeline behind [`find`]

pub mod finder;
pub mod groups;

pub use finder::{find, DuplicateFinder, FinderConfig, FinderError, ScanSummary};
pub use groups::{group_by_hash, group_by_hash_with, DuplicateGroup, DuplicateGroups, GroupingStats};

//! Duplicate grouping by content digest.
//!
//! # Overview
//!
//! [`DuplicateGroups`] maps a hex-encoded SHA-256 digest to the ordered
//! list of paths whose content produced it. Paths are appended in the
//! order they are hashed, and [`DuplicateGroups::retain_duplicates`]
//! removes every digest seen only once.
//!
//! The mapping is a `HashMap`, so iteration order is unspecified. Use
//! [`DuplicateGroups::sorted`] when a stable order is needed (for example
//! for display), and compare results as sets of groups in tests.
//!
//! # Example
//!
//! ```
//! use dedup::duplicates::DuplicateGroups;
//! use std::path::PathBuf;
//!
//! let mut groups = DuplicateGroups::new();
//! groups.insert("aa".to_string(), PathBuf::from("/a.txt"));
//! groups.insert("aa".to_string(), PathBuf::from("/b.txt"));
//! groups.insert("bb".to_string(), PathBuf::from("/c.txt"));
//!
//! groups.retain_duplicates();
//!
//! assert_eq!(groups.len(), 1);
//! assert_eq!(groups.get("aa").unwrap().len(), 2);
//! ```

use serde::Serialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::scanner::{hash_to_hex, HashError, Hasher};

/// Mapping from hex digest to the paths sharing that content.
///
/// Once [`retain_duplicates`](Self::retain_duplicates) has run, every
/// list holds at least two paths.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DuplicateGroups {
    groups: HashMap<String, Vec<PathBuf>>,
}

/// A borrowed view of one entry in [`DuplicateGroups`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateGroup<'a> {
    /// Hex-encoded SHA-256 digest of the shared content
    pub hash: &'a str,
    /// Paths with this content, in discovery order
    pub paths: &'a [PathBuf],
}

impl DuplicateGroup<'_> {
    /// Number of files in this group.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Check if this group is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Number of redundant copies (total - 1 original).
    #[must_use]
    pub fn duplicate_count(&self) -> usize {
        self.paths.len().saturating_sub(1)
    }
}

impl DuplicateGroups {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `path` to the group for `hash`, creating it on first use.
    pub fn insert(&mut self, hash: String, path: PathBuf) {
        self.groups.entry(hash).or_default().push(path);
    }

    /// Remove every group with fewer than two paths.
    pub fn retain_duplicates(&mut self) {
        self.groups.retain(|_, paths| paths.len() > 1);
    }

    /// Paths for a hex digest, if present.
    #[must_use]
    pub fn get(&self, hash: &str) -> Option<&[PathBuf]> {
        self.groups.get(hash).map(Vec::as_slice)
    }

    /// Number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check if there are no groups.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Iterate over groups in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = DuplicateGroup<'_>> {
        self.groups.iter().map(|(hash, paths)| DuplicateGroup {
            hash: hash.as_str(),
            paths: paths.as_slice(),
        })
    }

    /// All groups ordered by digest.
    #[must_use]
    pub fn sorted(&self) -> Vec<DuplicateGroup<'_>> {
        let mut groups: Vec<_> = self.iter().collect();
        groups.sort_by(|a, b| a.hash.cmp(b.hash));
        groups
    }

    /// Statistics over the current groups.
    #[must_use]
    pub fn stats(&self, total_files: usize) -> GroupingStats {
        GroupingStats {
            total_files,
            duplicate_groups: self.groups.len(),
            duplicate_files: self.iter().map(|g| g.duplicate_count()).sum(),
        }
    }
}

/// Statistics from the grouping phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupingStats {
    /// Total number of files hashed
    pub total_files: usize,
    /// Number of groups with 2+ files
    pub duplicate_groups: usize,
    /// Number of redundant copies across all groups
    pub duplicate_files: usize,
}

/// Hash every path and keep only the groups with more than one member.
///
/// `on_hashed` is called after each file with its 1-based position.
///
/// # Errors
///
/// Returns the first [`HashError`]; no partial grouping is produced.
pub fn group_by_hash_with<P, F>(
    paths: &[P],
    hasher: &Hasher,
    mut on_hashed: F,
) -> Result<DuplicateGroups, HashError>
where
    P: AsRef<Path>,
    F: FnMut(usize, &Path),
{
    let mut groups = DuplicateGroups::new();

    for (idx, path) in paths.iter().enumerate() {
        let path = path.as_ref();
        let key = hash_to_hex(&hasher.full_hash(path)?);
        log::trace!("{} {}", key, path.display());
        groups.insert(key, path.to_path_buf());
        on_hashed(idx + 1, path);
    }

    groups.retain_duplicates();
    Ok(groups)
}

/// Hash every path and keep only the groups with more than one member.
///
/// # Errors
///
/// Returns the first [`HashError`]; no partial grouping is produced.
pub fn group_by_hash<P: AsRef<Path>>(
    paths: &[P],
    hasher: &Hasher,
) -> Result<DuplicateGroups, HashError> {
    group_by_hash_with(paths, hasher, |_, _| {})
}

//! Duplicate finder pipeline.
//!
//! # Overview
//!
//! This module wires the scanner and the grouper together:
//! 1. **Walk**: list directories breadth-first under the configured
//!    [`ExplorationPolicy`] and collect file paths
//! 2. **Hash**: stream every file through SHA-256
//! 3. **Group**: bucket paths by digest and drop singletons
//!
//! Everything runs on the calling thread, one file at a time. The first
//! failing listing or read aborts the run; no partial result is returned.
//!
//! # Example
//!
//! ```no_run
//! use dedup::duplicates::{DuplicateFinder, FinderConfig};
//! use dedup::scanner::ExplorationPolicy;
//! use std::path::Path;
//!
//! let config = FinderConfig::default().with_policy(ExplorationPolicy::Recursive);
//! let finder = DuplicateFinder::new(config);
//! let (groups, summary) = finder.find_duplicates(Path::new("."))?;
//!
//! println!("{} groups among {} files", groups.len(), summary.total_files);
//! # Ok::<(), dedup::duplicates::FinderError>(())
//! ```

use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::progress::{ProgressCallback, PHASE_HASHING, PHASE_WALKING};
use crate::scanner::{ExplorationPolicy, HashError, Hasher, ScanError, Walker, CHUNK_SIZE};

use super::groups::{group_by_hash_with, DuplicateGroups};

/// Configuration for the duplicate finder.
#[derive(Clone)]
pub struct FinderConfig {
    /// How far below the root directory to look.
    pub policy: ExplorationPolicy,
    /// Read chunk size for hashing, in bytes.
    pub chunk_size: usize,
    /// Optional progress callback for reporting.
    pub progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for FinderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FinderConfig")
            .field("policy", &self.policy)
            .field("chunk_size", &self.chunk_size)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            policy: ExplorationPolicy::default(),
            chunk_size: CHUNK_SIZE,
            progress_callback: None,
        }
    }
}

impl FinderConfig {
    /// Set the exploration policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ExplorationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the hashing chunk size (clamped to at least 1).
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size.max(1);
        self
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress_callback(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress_callback = Some(callback);
        self
    }
}

/// Summary of a completed scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanSummary {
    /// Total number of files discovered and hashed
    pub total_files: usize,
    /// Number of duplicate groups
    pub duplicate_groups: usize,
    /// Number of redundant copies (group sizes minus one, summed)
    pub duplicate_files: usize,
    /// Time spent listing directories
    pub walk_duration: Duration,
    /// Time spent hashing and grouping
    pub hash_duration: Duration,
    /// Duration of the entire scan
    pub scan_duration: Duration,
}

/// Errors that abort a duplicate scan.
#[derive(thiserror::Error, Debug)]
pub enum FinderError {
    /// A directory could not be listed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A file could not be read.
    #[error(transparent)]
    Hash(#[from] HashError),
}

impl FinderError {
    /// Which filesystem operation failed: `"traversal"` or `"read"`.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Scan(_) => "traversal",
            Self::Hash(_) => "read",
        }
    }

    /// The path involved in the failure.
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Scan(e) => e.path(),
            Self::Hash(e) => e.path(),
        }
    }
}

/// Duplicate file finder.
#[derive(Debug, Clone, Default)]
pub struct DuplicateFinder {
    config: FinderConfig,
}

impl DuplicateFinder {
    /// Create a new duplicate finder with the given configuration.
    #[must_use]
    pub fn new(config: FinderConfig) -> Self {
        Self { config }
    }

    /// Create a new duplicate finder with default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(FinderConfig::default())
    }

    /// Find all duplicate files starting from the given path.
    ///
    /// # Returns
    ///
    /// A tuple of:
    /// - [`DuplicateGroups`] - digest to paths, every group of size 2+
    /// - [`ScanSummary`] - statistics about the scan
    ///
    /// # Errors
    ///
    /// Returns [`FinderError::Scan`] if any directory listing fails and
    /// [`FinderError::Hash`] if any file cannot be read.
    pub fn find_duplicates(
        &self,
        path: &Path,
    ) -> Result<(DuplicateGroups, ScanSummary), FinderError> {
        let start_time = Instant::now();
        let callback = self.config.progress_callback.as_ref();

        log::info!(
            "Starting duplicate scan of {} ({})",
            path.display(),
            self.config.policy
        );

        // Phase 1: walk
        if let Some(cb) = callback {
            cb.on_phase_start(PHASE_WALKING, 0);
        }
        let mut walker = Walker::new(path, self.config.policy);
        if let Some(cb) = callback {
            walker = walker.with_progress_callback(cb.clone());
        }
        let files = walker.walk();
        if let Some(cb) = callback {
            cb.on_phase_end(PHASE_WALKING);
        }
        let files = files?;
        let walk_duration = start_time.elapsed();
        log::info!("Found {} files in {:?}", files.len(), walk_duration);

        // Phase 2: hash and group
        let hash_start = Instant::now();
        if let Some(cb) = callback {
            cb.on_phase_start(PHASE_HASHING, files.len());
        }
        let hasher = Hasher::with_chunk_size(self.config.chunk_size);
        let groups = group_by_hash_with(&files, &hasher, |current, file| {
            if let Some(cb) = callback {
                cb.on_progress(current, &file.to_string_lossy());
            }
        });
        if let Some(cb) = callback {
            cb.on_phase_end(PHASE_HASHING);
        }
        let groups = groups?;
        let hash_duration = hash_start.elapsed();

        let stats = groups.stats(files.len());
        let summary = ScanSummary {
            total_files: stats.total_files,
            duplicate_groups: stats.duplicate_groups,
            duplicate_files: stats.duplicate_files,
            walk_duration,
            hash_duration,
            scan_duration: start_time.elapsed(),
        };

        log::info!(
            "Scan complete: {} duplicate groups, {} redundant copies, {:?}",
            summary.duplicate_groups,
            summary.duplicate_files,
            summary.scan_duration
        );

        Ok((groups, summary))
    }
}

/// Find files with identical content below `root`.
///
/// Returns a mapping from hex-encoded SHA-256 digest to the paths sharing
/// that content; every group has at least two paths and the mapping may be
/// empty. Iteration order of the mapping is unspecified.
///
/// # Errors
///
/// Returns [`FinderError`] naming the failing listing or read and its path.
///
/// # Example
///
/// ```no_run
/// use dedup::scanner::ExplorationPolicy;
///
/// let groups = dedup::find("/srv/photos", ExplorationPolicy::Recursive)?;
/// for group in groups.sorted() {
///     println!("{}: {:?}", group.hash, group.paths);
/// }
/// # Ok::<(), dedup::duplicates::FinderError>(())
/// ```
pub fn find<P: AsRef<Path>>(
    root: P,
    policy: ExplorationPolicy,
) -> Result<DuplicateGroups, FinderError> {
    let finder = DuplicateFinder::new(FinderConfig::default().with_policy(policy));
    finder
        .find_duplicates(root.as_ref())
        .map(|(groups, _)| groups)
}

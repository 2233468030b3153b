//! Breadth-first directory walker.
//!
//! # Overview
//!
//! This module provides the [`Walker`] struct for enumerating the files
//! reachable from a root directory under an [`ExplorationPolicy`].
//!
//! Directories are expanded level by level through a FIFO [`Queue`]. Each
//! queued directory carries its own depth, which is what makes the
//! depth-bounded stopping rule exact: every directory at depth *n* is
//! listed before any directory at depth *n + 1* is even considered.
//!
//! # Stopping rules
//!
//! - [`ExplorationPolicy::SingleLevel`]: stop after the root is listed.
//! - [`ExplorationPolicy::Recursive`]: stop when the queue is exhausted.
//! - [`ExplorationPolicy::DepthBounded`]: stop, without listing it, at the
//!   first dequeued directory whose depth reaches the limit.
//!
//! # Example
//!
//! ```no_run
//! use dedup::scanner::{ExplorationPolicy, Walker};
//! use std::path::Path;
//!
//! let policy = ExplorationPolicy::depth(2).unwrap();
//! let walker = Walker::new(Path::new("/home/user/Downloads"), policy);
//! let files = walker.walk()?;
//! println!("Found {} files", files.len());
//! # Ok::<(), dedup::scanner::ScanError>(())
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::progress::ProgressCallback;

use super::{ExplorationPolicy, Queue, ScanError, VisitedDirectory};

/// Directory walker for breadth-first file discovery.
///
/// Only directory listings are performed; files are never opened.
pub struct Walker {
    /// Root path to walk
    root: PathBuf,
    /// How far below the root to descend
    policy: ExplorationPolicy,
    /// Optional progress callback, notified once per listed directory
    progress_callback: Option<Arc<dyn ProgressCallback>>,
}

impl std::fmt::Debug for Walker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Walker")
            .field("root", &self.root)
            .field("policy", &self.policy)
            .field(
                "progress_callback",
                &self.progress_callback.as_ref().map(|_| "<callback>"),
            )
            .finish()
    }
}

impl Walker {
    /// Create a new walker for the given path.
    ///
    /// # Arguments
    ///
    /// * `path` - Root directory to scan
    /// * `policy` - Exploration policy for sub-directories
    #[must_use]
    pub fn new(path: &Path, policy: ExplorationPolicy) -> Self {
        Self {
            root: path.to_path_buf(),
            policy,
            progress_callback: None,
        }
    }

    /// Set the progress callback.
    #[must_use]
    pub fn with_progress_callback(mut self, callback: Arc<dyn ProgressCallback>) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Walk the directory tree and collect every non-directory entry.
    ///
    /// Files are returned in discovery order: directories are expanded
    /// breadth-first and the entries of each directory are visited in
    /// file name order.
    ///
    /// # Errors
    ///
    /// Returns the first [`ScanError`] encountered. Any failed listing
    /// aborts the walk and no partial result is produced.
    pub fn walk(&self) -> Result<Vec<PathBuf>, ScanError> {
        let mut queue = Queue::new();
        queue.enqueue(VisitedDirectory::root(self.root.clone()));

        let mut files = Vec::new();
        let mut listed = 0usize;

        while let Some(current) = queue.dequeue() {
            if let ExplorationPolicy::DepthBounded(limit) = self.policy {
                if current.depth >= limit.get() {
                    log::debug!(
                        "Depth limit {} reached at {}, stopping walk",
                        limit,
                        current.path.display()
                    );
                    break;
                }
            }

            self.expand(&current, &mut queue, &mut files)?;
            listed += 1;

            if let Some(ref callback) = self.progress_callback {
                callback.on_progress(listed, &current.path.to_string_lossy());
            }

            if self.policy == ExplorationPolicy::SingleLevel {
                break;
            }
        }

        log::debug!(
            "Walk of {} ({}) listed {} directories, found {} files, {} directories left unexpanded",
            self.root.display(),
            self.policy,
            listed,
            files.len(),
            queue.len()
        );

        Ok(files)
    }

    /// List one directory, queueing sub-directories and collecting files.
    fn expand(
        &self,
        dir: &VisitedDirectory,
        queue: &mut Queue<VisitedDirectory>,
        files: &mut Vec<PathBuf>,
    ) -> Result<(), ScanError> {
        log::trace!("Listing {} (depth {})", dir.path.display(), dir.depth);

        let read_dir = fs::read_dir(&dir.path).map_err(|e| self.map_io_error(&dir.path, e))?;

        let mut entries = read_dir
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| self.map_io_error(&dir.path, e))?;
        entries.sort_by_key(fs::DirEntry::file_name);

        for entry in entries {
            let path = dir.path.join(entry.file_name());
            // Symlinks are not followed: a link to a directory is a plain entry.
            let file_type = entry
                .file_type()
                .map_err(|e| self.map_io_error(&path, e))?;

            if file_type.is_dir() {
                queue.enqueue(dir.child(path));
            } else {
                log::trace!("Found file: {}", path.display());
                files.push(path);
            }
        }

        Ok(())
    }

    /// Convert an I/O error from a listing into a [`ScanError`].
    fn map_io_error(&self, path: &Path, error: std::io::Error) -> ScanError {
        match error.kind() {
            ErrorKind::PermissionDenied => {
                log::warn!("Permission denied: {}", path.display());
                ScanError::PermissionDenied(path.to_path_buf())
            }
            ErrorKind::NotFound => {
                log::warn!("Directory not found: {}", path.display());
                ScanError::NotFound(path.to_path_buf())
            }
            ErrorKind::NotADirectory => {
                log::warn!("Not a directory: {}", path.display());
                ScanError::NotADirectory(path.to_path_buf())
            }
            _ => {
                log::warn!("I/O error for {}: {}", path.display(), error);
                ScanError::Io {
                    path: path.to_path_buf(),
                    source: error,
                }
            }
        }
    }
}

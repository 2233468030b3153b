//! Scanner module for directory traversal and file hashing.
//!
//! This module provides functionality for:
//! - Breadth-first directory walking under an [`ExplorationPolicy`]
//! - Streaming SHA-256 content hashing
//!
//! # Architecture
//!
//! The scanner is divided into submodules:
//! - [`queue`]: FIFO work queue that fixes the traversal order
//! - [`walker`]: Directory traversal and file discovery
//! - [`hasher`]: SHA-256 file hashing (streaming, fixed-size chunks)
//!
//! # Example
//!
//! ```no_run
//! use dedup::scanner::{ExplorationPolicy, Walker};
//! use std::path::Path;
//!
//! let walker = Walker::new(Path::new("."), ExplorationPolicy::Recursive);
//! for path in walker.walk().unwrap() {
//!     println!("{}", path.display());
//! }
//! ```

pub mod hasher;
pub mod queue;
pub mod walker;

use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

// Re-export main types
pub use hasher::{hash_to_hex, Hash, Hasher, CHUNK_SIZE};
pub use queue::Queue;
pub use walker::Walker;

/// How far the walker descends below the root directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExplorationPolicy {
    /// Only the root directory itself is listed.
    #[default]
    SingleLevel,
    /// Every reachable sub-directory is listed.
    Recursive,
    /// Directories at depth `limit` or deeper are never listed.
    /// The root is at depth 0.
    DepthBounded(NonZeroUsize),
}

impl ExplorationPolicy {
    /// Build a depth-bounded policy, or `None` if `limit` is zero.
    #[must_use]
    pub fn depth(limit: usize) -> Option<Self> {
        NonZeroUsize::new(limit).map(Self::DepthBounded)
    }
}

impl fmt::Display for ExplorationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleLevel => write!(f, "single-level"),
            Self::Recursive => write!(f, "recursive"),
            Self::DepthBounded(limit) => write!(f, "depth-bounded({limit})"),
        }
    }
}

/// A directory waiting to be listed, tagged with its own depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitedDirectory {
    /// Path of the directory
    pub path: PathBuf,
    /// Distance from the root (root = 0)
    pub depth: usize,
}

impl VisitedDirectory {
    /// The walk's starting point.
    #[must_use]
    pub fn root(path: PathBuf) -> Self {
        Self { path, depth: 0 }
    }

    /// A sub-directory one level below `self`.
    #[must_use]
    pub fn child(&self, path: PathBuf) -> Self {
        Self {
            path,
            depth: self.depth + 1,
        }
    }
}

/// Errors that can occur during directory scanning.
#[derive(thiserror::Error, Debug)]
pub enum ScanError {
    /// Permission was denied when listing a directory.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// The specified path was not found.
    #[error("Path not found: {0}")]
    NotFound(PathBuf),

    /// The specified path is not a directory.
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An I/O error occurred while listing a directory.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// The directory whose listing failed.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::PermissionDenied(path) | Self::NotFound(path) | Self::NotADirectory(path) => {
                path
            }
            Self::Io { path, .. } => path,
        }
    }
}

/// Errors that can occur during file hashing.
#[derive(thiserror::Error, Debug)]
pub enum HashError {
    /// The specified file was not found.
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Permission was denied when reading the file.
    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    /// An I/O error occurred while reading the file.
    #[error("I/O error for {path}: {source}")]
    Io {
        /// Path where the error occurred
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

impl HashError {
    /// The file whose read failed.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound(path) | Self::PermissionDenied(path) => path,
            Self::Io { path, .. } => path,
        }
    }
}

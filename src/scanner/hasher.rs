//! SHA-256 file hasher with streaming support.
//!
//! # Overview
//!
//! This module provides the [`Hasher`] struct for computing SHA-256
//! digests of file contents. Files are read in fixed-size chunks, so
//! memory use is independent of file size.
//!
//! The digest is used purely as a content-equality fingerprint: two files
//! with the same bytes always get the same [`Hash`].
//!
//! # Example
//!
//! ```no_run
//! use dedup::scanner::{hash_to_hex, Hasher};
//! use std::path::Path;
//!
//! let hasher = Hasher::new();
//! let hash = hasher.full_hash(Path::new("some_file.txt"))?;
//! println!("{}", hash_to_hex(&hash));
//! # Ok::<(), dedup::scanner::HashError>(())
//! ```

use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

use super::HashError;

/// 32-byte SHA-256 digest.
pub type Hash = [u8; 32];

/// Default read chunk size in bytes.
pub const CHUNK_SIZE: usize = 1024;

/// Streaming content hasher.
#[derive(Debug, Clone)]
pub struct Hasher {
    /// Bytes requested per read
    chunk_size: usize,
}

impl Default for Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher {
    /// Create a hasher reading [`CHUNK_SIZE`] bytes at a time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            chunk_size: CHUNK_SIZE,
        }
    }

    /// Create a hasher with a custom chunk size (clamped to at least 1).
    #[must_use]
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size: chunk_size.max(1),
        }
    }

    /// The configured chunk size.
    #[must_use]
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Hash the entire content of a file.
    ///
    /// The file handle is released before this returns, on success and on
    /// failure alike.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] if the file cannot be opened or a read fails.
    pub fn full_hash(&self, path: &Path) -> Result<Hash, HashError> {
        let file = File::open(path).map_err(|e| map_io_error(path, e))?;
        self.hash_reader(file).map_err(|e| map_io_error(path, e))
    }

    /// Hash everything a reader yields until end-of-stream.
    ///
    /// # Errors
    ///
    /// Returns the first read error other than [`ErrorKind::Interrupted`].
    pub fn hash_reader<R: Read>(&self, mut reader: R) -> std::io::Result<Hash> {
        let mut hasher = Sha256::new();
        let mut buffer = vec![0u8; self.chunk_size];

        loop {
            match reader.read(&mut buffer) {
                Ok(0) => break,
                Ok(n) => hasher.update(&buffer[..n]),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }

        Ok(hasher.finalize().into())
    }

    /// Hash an in-memory byte slice.
    #[must_use]
    pub fn hash_bytes(data: &[u8]) -> Hash {
        Sha256::digest(data).into()
    }
}

fn map_io_error(path: &Path, error: std::io::Error) -> HashError {
    match error.kind() {
        ErrorKind::NotFound => {
            log::debug!("File not found (may have been deleted): {}", path.display());
            HashError::NotFound(path.to_path_buf())
        }
        ErrorKind::PermissionDenied => {
            log::warn!("Permission denied: {}", path.display());
            HashError::PermissionDenied(path.to_path_buf())
        }
        _ => {
            log::warn!("Failed to read {}: {}", path.display(), error);
            HashError::Io {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }
}

/// Encode a hash as a lowercase hexadecimal string (64 characters).
#[must_use]
pub fn hash_to_hex(hash: &Hash) -> String {
    use std::fmt::Write;

    hash.iter().fold(String::with_capacity(64), |mut out, byte| {
        let _ = write!(out, "{byte:02x}");
        out
    })
}

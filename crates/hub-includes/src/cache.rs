//! Shared source-file cache.
//!
//! Many documents import from the same example files, often several
//! anchors from one file. The cache guarantees at most one underlying
//! filesystem read per absolute path for the lifetime of a build, and
//! keeps a content digest per entry so a caller can detect that a file
//! changed on disk between builds.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::ImportError;

struct Entry {
    content: String,
    digest: [u8; 32],
}

/// Build-scoped file cache. Constructed by the orchestrator and handed to
/// every import site, so the read-once guarantee holds across documents.
#[derive(Default)]
pub struct FileCache {
    entries: HashMap<PathBuf, Entry>,
    underlying_reads: usize,
}

impl FileCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of `path`, reading it from disk only on the first request.
    ///
    /// # Errors
    ///
    /// [`ImportError::SourceNotFound`] when the file cannot be read.
    pub fn read(&mut self, path: &Path) -> Result<&str, ImportError> {
        if self.entries.contains_key(path) {
            tracing::debug!(path = %path.display(), "file cache hit");
        } else {
            let content = std::fs::read_to_string(path)
                .map_err(|_| ImportError::SourceNotFound(path.to_path_buf()))?;
            self.underlying_reads += 1;
            let digest = Sha256::digest(content.as_bytes()).into();
            self.entries
                .insert(path.to_path_buf(), Entry { content, digest });
        }
        Ok(&self.entries[path].content)
    }

    /// Digest of a cached file's content, if the file has been read.
    #[must_use]
    pub fn digest(&self, path: &Path) -> Option<[u8; 32]> {
        self.entries.get(path).map(|entry| entry.digest)
    }

    /// Whether `path` currently differs on disk from the cached content.
    ///
    /// Advisory only; a stale entry stays served until [`Self::evict`].
    #[must_use]
    pub fn is_stale(&self, path: &Path) -> bool {
        let Some(entry) = self.entries.get(path) else {
            return false;
        };
        match std::fs::read_to_string(path) {
            Ok(current) => <[u8; 32]>::from(Sha256::digest(current.as_bytes())) != entry.digest,
            Err(_) => true,
        }
    }

    /// Drop a cached entry so the next read hits the filesystem again.
    pub fn evict(&mut self, path: &Path) {
        self.entries.remove(path);
    }

    /// Number of filesystem reads performed so far.
    #[must_use]
    pub fn underlying_reads(&self) -> usize {
        self.underlying_reads
    }
}

//! FileRecord - Metadata for a single file in a tree snapshot

use std::path::PathBuf;
use std::time::SystemTime;

/// Metadata for one file, keyed by its path relative to the snapshot root
#[derive(Debug, Clone, PartialEq)]
pub struct FileRecord {
    /// Relative path from the snapshot root
    pub path: PathBuf,

    /// File size in bytes
    pub size: u64,

    /// Last modification time
    pub mtime: SystemTime,
}

impl FileRecord {
    /// Create a new FileRecord with the given parameters
    pub fn new(path: PathBuf, size: u64, mtime: SystemTime) -> Self {
        Self { path, size, mtime }
    }
}

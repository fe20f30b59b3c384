//! TreeSnapshot - The comparable file index built from one traversal pass

use super::FileRecord;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Index of one directory tree: relative path → FileRecord
///
/// Built fresh on every comparison run and never reused across calls.
/// Keys are paths relative to `root_path`; directories never appear as keys.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeSnapshot {
    /// Map: relative_path → FileRecord
    pub records: HashMap<PathBuf, FileRecord>,

    /// Aggregate statistics
    pub total_size: u64,
    pub total_files: usize,

    /// Root this snapshot was built from
    pub root_path: PathBuf,
}

impl TreeSnapshot {
    /// Create a new empty TreeSnapshot
    pub fn new(root_path: PathBuf) -> Self {
        Self {
            records: HashMap::new(),
            total_size: 0,
            total_files: 0,
            root_path,
        }
    }

    /// Insert a file record into the snapshot
    ///
    /// Updates aggregate statistics. If the path already exists, the old
    /// record is replaced and statistics are adjusted.
    pub fn insert(&mut self, path: PathBuf, record: FileRecord) {
        if let Some(old) = self.records.get(&path) {
            self.total_size = self.total_size.saturating_sub(old.size);
            self.total_files = self.total_files.saturating_sub(1);
        }

        self.total_size += record.size;
        self.total_files += 1;
        self.records.insert(path, record);
    }

    /// Get a file record by relative path
    pub fn get(&self, path: &Path) -> Option<&FileRecord> {
        self.records.get(path)
    }

    /// Check if a relative path exists in the snapshot
    pub fn contains(&self, path: &Path) -> bool {
        self.records.contains_key(path)
    }

    /// Return the number of file records in the snapshot
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the snapshot is empty
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterator over all (path, FileRecord) pairs
    pub fn iter(&self) -> impl Iterator<Item = (&PathBuf, &FileRecord)> {
        self.records.iter()
    }

    /// Iterator over just the relative paths
    pub fn paths(&self) -> impl Iterator<Item = &PathBuf> {
        self.records.keys()
    }
}

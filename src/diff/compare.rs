//! Record comparison rule

use crate::types::FileRecord;

/// Decide whether the target copy of a file needs updating from the source
///
/// Metadata-only comparison, no content hashing:
///
/// 1. **Size mismatch**: differing sizes always mean an update.
/// 2. **Modification time**: a source mtime strictly after the target mtime
///    means an update. An older or equal source mtime with equal size is
///    NOT an update, even when the timestamps differ. The rule is
///    one-directional: "source is newer or different size".
pub fn needs_update(source: &FileRecord, target: &FileRecord) -> bool {
    source.size != target.size || source.mtime > target.mtime
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{Duration, UNIX_EPOCH};

    fn record(size: u64, mtime_secs: u64) -> FileRecord {
        FileRecord::new(
            PathBuf::from("file.txt"),
            size,
            UNIX_EPOCH + Duration::from_secs(mtime_secs),
        )
    }

    #[test]
    fn test_size_mismatch_is_update() {
        assert!(needs_update(&record(1024, 1000), &record(2048, 1000)));
    }

    #[test]
    fn test_size_mismatch_wins_even_when_source_is_older() {
        assert!(needs_update(&record(10, 1000), &record(5, 2000)));
    }

    #[test]
    fn test_source_newer_same_size_is_update() {
        assert!(needs_update(&record(1024, 2000), &record(1024, 1000)));
    }

    #[test]
    fn test_source_older_same_size_is_not_update() {
        assert!(!needs_update(&record(1024, 1000), &record(1024, 2000)));
    }

    #[test]
    fn test_identical_records_are_unchanged() {
        assert!(!needs_update(&record(1024, 1000), &record(1024, 1000)));
    }
}

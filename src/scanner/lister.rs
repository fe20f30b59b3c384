//! Tree lister - builds a comparable file index for one root

use crate::scanner::TraversalMode;
use crate::types::{FileRecord, Side, SyncError, TreeSnapshot};
use std::fs;
use std::path::Path;

/// Result of listing one root: the snapshot plus any per-entry failures
///
/// Entries that failed metadata retrieval are absent from the snapshot and
/// represented by an error instead; the comparison proceeds with whatever
/// succeeded.
#[derive(Debug)]
pub struct ListReport {
    pub snapshot: TreeSnapshot,
    pub errors: Vec<SyncError>,
}

/// Enumerate the files under `root` and build a TreeSnapshot
///
/// Keys are paths relative to `root`, so the same relative file location in
/// two different trees maps to an identical key. Directories are never added
/// to the snapshot; in `Shallow` mode they are not descended into either.
///
/// # Errors
/// Returns `Err` only when `root` itself cannot be read (missing, not a
/// directory, unreadable). Every other failure is collected into
/// `ListReport::errors` and the affected entry is omitted.
pub fn list_tree(
    root: &Path,
    mode: TraversalMode,
    side: Side,
) -> Result<ListReport, SyncError> {
    // Fail fast if the root cannot be listed at all.
    fs::read_dir(root).map_err(|e| SyncError::RootUnreadable {
        side,
        root: root.to_path_buf(),
        source: e,
    })?;

    let mut snapshot = TreeSnapshot::new(root.to_path_buf());
    let mut errors = Vec::new();

    let walker = ignore::WalkBuilder::new(root)
        .standard_filters(false)
        .follow_links(false)
        .max_depth(mode.depth_limit())
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(e) => {
                // Unreadable subdirectory or similar; its entries are simply
                // missing from the snapshot.
                errors.push(SyncError::Walk { side, source: e });
                continue;
            }
        };

        let file_type = match entry.file_type() {
            Some(ft) => ft,
            None => continue,
        };

        // Directories are never keyed; in shallow mode max_depth already
        // prevents descending into them.
        if file_type.is_dir() {
            continue;
        }

        // Skip special files (pipes, sockets, devices, etc.)
        if !file_type.is_file() && !file_type.is_symlink() {
            continue;
        }

        let relative_path = match entry.path().strip_prefix(root) {
            Ok(p) => p.to_path_buf(),
            Err(_) => continue,
        };

        let metadata = match entry.metadata() {
            Ok(m) => m,
            Err(e) => {
                errors.push(SyncError::Metadata {
                    side,
                    path: relative_path,
                    source: std::io::Error::other(e),
                });
                continue;
            }
        };

        let mtime = match metadata.modified() {
            Ok(t) => t,
            Err(e) => {
                errors.push(SyncError::Metadata {
                    side,
                    path: relative_path,
                    source: e,
                });
                continue;
            }
        };

        let record = FileRecord::new(relative_path.clone(), metadata.len(), mtime);
        snapshot.insert(relative_path, record);
    }

    Ok(ListReport { snapshot, errors })
}

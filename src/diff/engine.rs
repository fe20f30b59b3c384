//! Differ - three-way classification of two tree snapshots

use crate::diff::needs_update;
use crate::scanner::{list_tree, TraversalMode};
use crate::types::{Side, SyncError, TreeSnapshot};
use std::path::{Path, PathBuf};

/// Three mutually-exclusive classifications of relative paths
///
/// `new`: in source, absent from target. `updated`: in both, differing by
/// the update rule. `deleted`: in target, absent from source (populated only
/// when the deletion policy is enabled).
///
/// List order follows map iteration order and is not guaranteed stable; use
/// [`DiffResult::sort_by_path`] for deterministic presentation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub new: Vec<PathBuf>,
    pub updated: Vec<PathBuf>,
    pub deleted: Vec<PathBuf>,
}

impl DiffResult {
    /// Create a new empty DiffResult
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether any path was classified at all
    pub fn is_empty(&self) -> bool {
        self.new.is_empty() && self.updated.is_empty() && self.deleted.is_empty()
    }

    /// Total number of classified paths
    pub fn total_changes(&self) -> usize {
        self.new.len() + self.updated.len() + self.deleted.len()
    }

    /// Sort all three lists by path for deterministic output
    pub fn sort_by_path(&mut self) {
        self.new.sort();
        self.updated.sort();
        self.deleted.sort();
    }
}

/// Classify every relative path of two snapshots as new, updated, or deleted
///
/// Walks the source snapshot first: paths absent from the target are `new`;
/// paths present on both sides are `updated` when [`needs_update`] says so,
/// and unchanged (absent from the result) otherwise. When `delete_missing`
/// is false the function stops there; otherwise a second pass over the
/// target collects paths absent from the source as `deleted`.
pub fn compare_trees(
    source: &TreeSnapshot,
    target: &TreeSnapshot,
    delete_missing: bool,
) -> DiffResult {
    let mut diff = DiffResult::new();

    for (path, src_record) in source.iter() {
        match target.get(path) {
            None => diff.new.push(path.clone()),
            Some(tgt_record) => {
                if needs_update(src_record, tgt_record) {
                    diff.updated.push(path.clone());
                }
            }
        }
    }

    if !delete_missing {
        return diff;
    }

    for path in target.paths() {
        if !source.contains(path) {
            diff.deleted.push(path.clone());
        }
    }

    diff
}

/// A completed directory comparison: the classification plus the per-entry
/// failures accumulated while listing (entries the diff could not see)
#[derive(Debug)]
pub struct DirComparison {
    pub diff: DiffResult,
    pub errors: Vec<SyncError>,
}

/// List both roots and classify their differences in one call
///
/// A root that cannot be listed at all is fatal: the differ is never invoked
/// and the error is returned. Per-entry failures are collected into
/// [`DirComparison::errors`] and the diff runs on whatever subset succeeded,
/// silently treating unreadable entries as absent on that side.
pub fn compare_dirs(
    source_root: &Path,
    target_root: &Path,
    mode: TraversalMode,
    delete_missing: bool,
) -> Result<DirComparison, SyncError> {
    let source = list_tree(source_root, mode, Side::Source)?;
    let target = list_tree(target_root, mode, Side::Target)?;

    let diff = compare_trees(&source.snapshot, &target.snapshot, delete_missing);

    let mut errors = source.errors;
    errors.extend(target.errors);

    Ok(DirComparison { diff, errors })
}

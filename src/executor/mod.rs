//! Executor - applies a diff classification to the target tree

pub mod copy;

pub use copy::copy_file_preserving;

use crate::diff::DiffResult;
use crate::types::SyncError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Injected file-action capability
///
/// The apply loop goes through this trait for every filesystem mutation so
/// the comparison and orchestration logic stay independently testable.
pub trait FileActions {
    /// Copy `src` to `dest`, preserving metadata; returns bytes copied
    fn copy(&self, src: &Path, dest: &Path) -> Result<u64, SyncError>;

    /// Remove `path`; removing an already-missing path succeeds
    fn remove(&self, path: &Path) -> Result<(), SyncError>;

    /// Create `path` and any missing intermediate directories
    fn ensure_dir(&self, path: &Path) -> Result<(), SyncError>;
}

/// Filesystem-backed implementation of [`FileActions`]
#[derive(Debug, Default)]
pub struct FsActions;

impl FileActions for FsActions {
    fn copy(&self, src: &Path, dest: &Path) -> Result<u64, SyncError> {
        copy_file_preserving(src, dest)
    }

    fn remove(&self, path: &Path) -> Result<(), SyncError> {
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SyncError::Io(e)),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<(), SyncError> {
        fs::create_dir_all(path).map_err(SyncError::Io)
    }
}

/// Aggregate statistics for one apply run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyStats {
    /// New files copied into the target
    pub copied: usize,
    /// Existing target files overwritten
    pub updated: usize,
    /// Target files removed
    pub deleted: usize,
    /// Actions that failed (the run continues past them)
    pub failed: usize,
    /// Aggregate copied bytes
    pub bytes_copied: u64,
}

/// Events emitted while applying a diff
///
/// The apply loop itself produces no output; the driver turns these into
/// log lines.
#[derive(Debug)]
pub enum ApplyEvent<'a> {
    /// Action succeeded
    ActionSuccess {
        action: &'static str,
        path: &'a Path,
        bytes_copied: u64,
    },
    /// Action failed but the run continued
    ActionError {
        action: &'static str,
        path: &'a Path,
        error: &'a SyncError,
    },
    /// All actions processed (with or without errors)
    Complete { stats: &'a ApplyStats },
}

/// Optional callback used to receive apply events
pub type ApplyCallback<'a> = dyn Fn(&ApplyEvent<'_>) + 'a;

/// Apply a diff classification to the target tree
///
/// For each `new`/`updated` path the source file is copied over
/// `target_root`/path (intermediate directories created first); for each
/// `deleted` path the target file is removed. Per-file failures do not abort
/// the run; if any action failed the aggregated summary is returned as an
/// error after all actions were attempted.
pub fn apply_diff<A: FileActions>(
    diff: &DiffResult,
    source_root: &Path,
    target_root: &Path,
    actions: &A,
    on_event: Option<&ApplyCallback<'_>>,
) -> Result<ApplyStats, SyncError> {
    let mut stats = ApplyStats::default();
    let mut errors: Vec<(PathBuf, SyncError)> = Vec::new();

    for path in &diff.new {
        match copy_one(actions, source_root, target_root, path) {
            Ok(bytes) => {
                stats.copied += 1;
                stats.bytes_copied += bytes;
                emit(on_event, ApplyEvent::ActionSuccess {
                    action: "New",
                    path,
                    bytes_copied: bytes,
                });
            }
            Err(err) => {
                stats.failed += 1;
                emit(on_event, ApplyEvent::ActionError {
                    action: "New",
                    path,
                    error: &err,
                });
                errors.push((path.clone(), err));
            }
        }
    }

    for path in &diff.updated {
        match copy_one(actions, source_root, target_root, path) {
            Ok(bytes) => {
                stats.updated += 1;
                stats.bytes_copied += bytes;
                emit(on_event, ApplyEvent::ActionSuccess {
                    action: "Updated",
                    path,
                    bytes_copied: bytes,
                });
            }
            Err(err) => {
                stats.failed += 1;
                emit(on_event, ApplyEvent::ActionError {
                    action: "Updated",
                    path,
                    error: &err,
                });
                errors.push((path.clone(), err));
            }
        }
    }

    for path in &diff.deleted {
        match actions.remove(&target_root.join(path)) {
            Ok(()) => {
                stats.deleted += 1;
                emit(on_event, ApplyEvent::ActionSuccess {
                    action: "Deleted",
                    path,
                    bytes_copied: 0,
                });
            }
            Err(err) => {
                stats.failed += 1;
                emit(on_event, ApplyEvent::ActionError {
                    action: "Deleted",
                    path,
                    error: &err,
                });
                errors.push((path.clone(), err));
            }
        }
    }

    emit(on_event, ApplyEvent::Complete { stats: &stats });

    if errors.is_empty() {
        Ok(stats)
    } else {
        Err(SyncError::Apply {
            failed: errors.len(),
            summary: build_error_summary(&errors),
        })
    }
}

fn copy_one<A: FileActions>(
    actions: &A,
    source_root: &Path,
    target_root: &Path,
    path: &Path,
) -> Result<u64, SyncError> {
    let src = source_root.join(path);
    let dest = target_root.join(path);

    if let Some(parent) = dest.parent() {
        actions.ensure_dir(parent)?;
    }

    actions.copy(&src, &dest)
}

fn emit(on_event: Option<&ApplyCallback<'_>>, event: ApplyEvent<'_>) {
    if let Some(callback) = on_event {
        callback(&event);
    }
}

fn build_error_summary(errors: &[(PathBuf, SyncError)]) -> String {
    errors
        .iter()
        .take(3)
        .map(|(path, err)| format!("{}: {}", path.display(), err))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    fn diff(new: &[&str], updated: &[&str], deleted: &[&str]) -> DiffResult {
        DiffResult {
            new: new.iter().map(PathBuf::from).collect(),
            updated: updated.iter().map(PathBuf::from).collect(),
            deleted: deleted.iter().map(PathBuf::from).collect(),
        }
    }

    #[test]
    fn test_apply_copies_new_and_updated_files() {
        let src = TempDir::new().expect("create src tempdir");
        let tgt = TempDir::new().expect("create tgt tempdir");

        fs::write(src.path().join("new.txt"), b"new-content").expect("write src new");
        fs::write(src.path().join("keep.txt"), b"updated").expect("write src keep");
        fs::write(tgt.path().join("keep.txt"), b"old").expect("write tgt keep");

        let stats = apply_diff(
            &diff(&["new.txt"], &["keep.txt"], &[]),
            src.path(),
            tgt.path(),
            &FsActions,
            None,
        )
        .expect("apply should succeed");

        assert_eq!(stats.copied, 1);
        assert_eq!(stats.updated, 1);
        assert_eq!(stats.failed, 0);
        assert_eq!(stats.bytes_copied, 11 + 7);
        assert_eq!(
            fs::read(tgt.path().join("new.txt")).expect("read tgt new"),
            b"new-content"
        );
        assert_eq!(
            fs::read(tgt.path().join("keep.txt")).expect("read tgt keep"),
            b"updated"
        );
    }

    #[test]
    fn test_apply_creates_intermediate_directories() {
        let src = TempDir::new().expect("create src tempdir");
        let tgt = TempDir::new().expect("create tgt tempdir");

        fs::create_dir_all(src.path().join("a/b")).expect("create nested src dirs");
        fs::write(src.path().join("a/b/deep.txt"), b"deep").expect("write nested src file");

        let stats = apply_diff(
            &diff(&["a/b/deep.txt"], &[], &[]),
            src.path(),
            tgt.path(),
            &FsActions,
            None,
        )
        .expect("apply should succeed");

        assert_eq!(stats.copied, 1);
        assert_eq!(
            fs::read(tgt.path().join("a/b/deep.txt")).expect("read nested tgt file"),
            b"deep"
        );
    }

    #[test]
    fn test_apply_deletes_target_files() {
        let src = TempDir::new().expect("create src tempdir");
        let tgt = TempDir::new().expect("create tgt tempdir");

        fs::write(tgt.path().join("old.txt"), b"to-delete").expect("write tgt old");

        let stats = apply_diff(
            &diff(&[], &[], &["old.txt"]),
            src.path(),
            tgt.path(),
            &FsActions,
            None,
        )
        .expect("apply should succeed");

        assert_eq!(stats.deleted, 1);
        assert!(!tgt.path().join("old.txt").exists());
    }

    #[test]
    fn test_apply_delete_missing_file_is_ok() {
        let src = TempDir::new().expect("create src tempdir");
        let tgt = TempDir::new().expect("create tgt tempdir");

        let stats = apply_diff(
            &diff(&[], &[], &["already_gone.txt"]),
            src.path(),
            tgt.path(),
            &FsActions,
            None,
        )
        .expect("apply should succeed");

        assert_eq!(stats.deleted, 1);
        assert_eq!(stats.failed, 0);
    }

    #[test]
    fn test_apply_continues_after_failed_copy() {
        let src = TempDir::new().expect("create src tempdir");
        let tgt = TempDir::new().expect("create tgt tempdir");

        fs::write(src.path().join("good.txt"), b"good").expect("write src good");

        let result = apply_diff(
            &diff(&["missing.txt", "good.txt"], &[], &[]),
            src.path(),
            tgt.path(),
            &FsActions,
            None,
        );

        let err = result.expect_err("apply with a failing action should error");
        assert!(matches!(err, SyncError::Apply { failed: 1, .. }));
        assert!(tgt.path().join("good.txt").exists());
    }

    #[test]
    fn test_apply_emits_events() {
        let src = TempDir::new().expect("create src tempdir");
        let tgt = TempDir::new().expect("create tgt tempdir");

        fs::write(src.path().join("new.txt"), b"new-content").expect("write src new");
        fs::write(tgt.path().join("old.txt"), b"old").expect("write tgt old");

        let events: RefCell<Vec<String>> = RefCell::new(Vec::new());
        let callback = |event: &ApplyEvent<'_>| {
            let label = match event {
                ApplyEvent::ActionSuccess { action, .. } => format!("success:{action}"),
                ApplyEvent::ActionError { action, .. } => format!("error:{action}"),
                ApplyEvent::Complete { .. } => "complete".to_string(),
            };
            events.borrow_mut().push(label);
        };

        let stats = apply_diff(
            &diff(&["new.txt"], &[], &["old.txt"]),
            src.path(),
            tgt.path(),
            &FsActions,
            Some(&callback),
        )
        .expect("apply should succeed");

        assert_eq!(stats.failed, 0);
        assert_eq!(
            events.into_inner(),
            vec!["success:New", "success:Deleted", "complete"]
        );
    }

    /// Recording mock used to verify which actions the apply loop requests.
    #[derive(Default)]
    struct RecordingActions {
        calls: RefCell<Vec<String>>,
    }

    impl FileActions for RecordingActions {
        fn copy(&self, src: &Path, dest: &Path) -> Result<u64, SyncError> {
            self.calls
                .borrow_mut()
                .push(format!("copy {} -> {}", src.display(), dest.display()));
            Ok(0)
        }

        fn remove(&self, path: &Path) -> Result<(), SyncError> {
            self.calls
                .borrow_mut()
                .push(format!("remove {}", path.display()));
            Ok(())
        }

        fn ensure_dir(&self, path: &Path) -> Result<(), SyncError> {
            self.calls
                .borrow_mut()
                .push(format!("ensure_dir {}", path.display()));
            Ok(())
        }
    }

    #[test]
    fn test_apply_requests_ensure_dir_before_copy() {
        let actions = RecordingActions::default();

        apply_diff(
            &diff(&["sub/dir/file.txt"], &[], &["gone.txt"]),
            Path::new("/src"),
            Path::new("/tgt"),
            &actions,
            None,
        )
        .expect("apply should succeed");

        let calls = actions.calls.into_inner();
        assert_eq!(
            calls,
            vec![
                "ensure_dir /tgt/sub/dir".to_string(),
                "copy /src/sub/dir/file.txt -> /tgt/sub/dir/file.txt".to_string(),
                "remove /tgt/gone.txt".to_string(),
            ]
        );
    }

    #[test]
    fn test_apply_empty_diff_touches_nothing() {
        let actions = RecordingActions::default();

        let stats = apply_diff(
            &DiffResult::new(),
            Path::new("/src"),
            Path::new("/tgt"),
            &actions,
            None,
        )
        .expect("apply should succeed");

        assert_eq!(stats, ApplyStats::default());
        assert!(actions.calls.into_inner().is_empty());
    }
}

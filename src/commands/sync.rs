//! Main sync command

use crate::diff::compare_trees;
use crate::executor::{apply_diff, ApplyEvent, FsActions};
use crate::scanner::list_tree;
use crate::types::{Side, SyncError};
use crate::ui::report;
use crate::Config;

/// Run the sync operation
///
/// Lists both roots, classifies the differences, and applies the result to
/// the target. A root that cannot be listed aborts before anything is
/// touched; per-entry listing failures are reported as warnings and the sync
/// proceeds on the surviving subset.
pub fn run(config: Config) -> Result<(), SyncError> {
    let source = list_tree(&config.source, config.traversal, Side::Source)?;
    let target = list_tree(&config.target, config.traversal, Side::Target)?;

    for error in source.errors.iter().chain(&target.errors) {
        report::print_listing_warning(error);
    }

    let mut diff = compare_trees(&source.snapshot, &target.snapshot, config.delete_missing);

    if diff.is_empty() {
        println!("No changes detected. Directories are already synchronized.");
        return Ok(());
    }

    diff.sort_by_path();
    println!("{}", report::format_diff_summary(&diff, &source.snapshot));

    if config.dry_run {
        println!("{}", report::format_dry_run_actions(&diff));
        println!("Dry-run mode: no changes were made.");
        return Ok(());
    }

    let on_event = |event: &ApplyEvent<'_>| report::print_apply_event(event);
    apply_diff(
        &diff,
        &config.source,
        &config.target,
        &FsActions,
        Some(&on_event),
    )?;

    Ok(())
}

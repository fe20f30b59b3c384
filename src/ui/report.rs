//! Presentation of comparison results and apply progress
//!
//! The core produces structured results and errors only; everything printed
//! to the terminal goes through here.

use crate::diff::DiffResult;
use crate::executor::{ApplyEvent, ApplyStats};
use crate::types::{SyncError, TreeSnapshot};
use console::style;
use indicatif::HumanBytes;

/// One-line summary of a classification, with the byte total to transfer
pub fn format_diff_summary(diff: &DiffResult, source: &TreeSnapshot) -> String {
    let transfer_bytes: u64 = diff
        .new
        .iter()
        .chain(&diff.updated)
        .filter_map(|path| source.get(path))
        .map(|record| record.size)
        .sum();

    format!(
        "Plan:\n  New: {}  Updated: {}  Deleted: {}\n  Total bytes to transfer: {}",
        diff.new.len(),
        diff.updated.len(),
        diff.deleted.len(),
        HumanBytes(transfer_bytes)
    )
}

/// Listing of the planned actions for dry-run mode
pub fn format_dry_run_actions(diff: &DiffResult) -> String {
    if diff.is_empty() {
        return "Dry-run actions:\n  (no planned actions)".to_string();
    }

    let mut lines = Vec::with_capacity(diff.total_changes() + 1);
    lines.push("Dry-run actions:".to_string());
    for path in &diff.new {
        lines.push(format!("  COPY      {}", path.display()));
    }
    for path in &diff.updated {
        lines.push(format!("  UPDATE    {}", path.display()));
    }
    for path in &diff.deleted {
        lines.push(format!("  DELETE    {}", path.display()));
    }

    lines.join("\n")
}

/// Print a warning line for a recoverable listing error
pub fn print_listing_warning(error: &SyncError) {
    eprintln!("{} {}", style("warning:").yellow().bold(), error);
}

/// Print one line per apply event; the final summary on completion
pub fn print_apply_event(event: &ApplyEvent<'_>) {
    match event {
        ApplyEvent::ActionSuccess { action, path, .. } => {
            let label = match *action {
                "New" => "New file:",
                "Updated" => "Updated file:",
                "Deleted" => "Deleted file:",
                other => other,
            };
            println!("{} {}", style(label).green(), path.display());
        }
        ApplyEvent::ActionError { action, path, error } => {
            let label = match *action {
                "New" => "Failed to copy new file",
                "Updated" => "Failed to update file",
                "Deleted" => "Failed to delete file",
                other => other,
            };
            eprintln!("{} {}: {}", style(label).red(), path.display(), error);
        }
        ApplyEvent::Complete { stats } => {
            println!("{}", format_apply_summary(stats));
        }
    }
}

fn format_apply_summary(stats: &ApplyStats) -> String {
    format!(
        "Sync complete: {} new, {} updated, {} deleted, {} failed | {} copied",
        stats.copied,
        stats.updated,
        stats.deleted,
        stats.failed,
        HumanBytes(stats.bytes_copied)
    )
}

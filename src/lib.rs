//! # treesync - Directory Tree Synchronization
//!
//! Compares a source and a target directory tree, classifies every file as
//! new, updated, or deleted, and applies that classification to bring the
//! target in line with the source.

// Module declarations
pub mod commands;
pub mod config;
pub mod diff;
pub mod executor;
pub mod scanner;
pub mod types;
pub mod ui;

// Re-export commonly used types
pub use config::Config;
pub use diff::{compare_dirs, compare_trees, DiffResult};
pub use scanner::{list_tree, TraversalMode};
pub use types::{FileRecord, Side, SyncError, TreeSnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

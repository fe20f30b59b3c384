//! Error types for treesync

use std::path::PathBuf;
use thiserror::Error;

/// Which side of the comparison an error belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Source,
    Target,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Source => write!(f, "source"),
            Side::Target => write!(f, "target"),
        }
    }
}

/// Error types for treesync operations
#[derive(Debug, Error)]
pub enum SyncError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Root directory could not be read or walked; fatal to the comparison
    #[error("failed to read {side} directory {root}: {source}")]
    RootUnreadable {
        side: Side,
        root: PathBuf,
        source: std::io::Error,
    },

    /// Metadata retrieval failed for one entry; the entry is omitted from
    /// its snapshot and the comparison continues
    #[error("failed to get metadata for {side} file {path}: {source}")]
    Metadata {
        side: Side,
        path: PathBuf,
        source: std::io::Error,
    },

    /// Traversal error below the root (e.g. an unreadable subdirectory);
    /// the affected entries are omitted and the comparison continues
    #[error("error walking {side} directory: {source}")]
    Walk {
        side: Side,
        source: ignore::Error,
    },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// One or more actions failed while applying a diff
    #[error("Apply completed with {failed} error(s). Example failures: {summary}")]
    Apply { failed: usize, summary: String },
}

impl SyncError {
    /// Check if this error aborts the whole comparison call
    pub fn is_fatal(&self) -> bool {
        matches!(self, SyncError::RootUnreadable { .. } | SyncError::Config(_))
    }

    /// Check if this error came from a single entry and was recovered from
    pub fn is_recoverable(&self) -> bool {
        matches!(self, SyncError::Metadata { .. } | SyncError::Walk { .. })
    }
}

//! Core type definitions for treesync

mod error;
mod record;
mod snapshot;

pub use error::{Side, SyncError};
pub use record::FileRecord;
pub use snapshot::TreeSnapshot;

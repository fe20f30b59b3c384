//! Diff engine - three-way classification of two tree snapshots

mod compare;
mod engine;

pub use compare::needs_update;
pub use engine::{compare_dirs, compare_trees, DiffResult, DirComparison};

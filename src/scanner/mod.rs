//! Tree listing logic

mod lister;
mod mode;

pub use lister::{list_tree, ListReport};
pub use mode::TraversalMode;

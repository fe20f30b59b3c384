//! Traversal mode selection

/// How far the tree lister descends below the root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraversalMode {
    /// Enumerate only the direct children of the root; subdirectories are
    /// skipped entirely
    #[default]
    Shallow,

    /// Recursively enumerate every descendant file
    Deep,
}

impl TraversalMode {
    /// Walker depth limit realizing this mode (`None` = unbounded)
    pub(crate) fn depth_limit(self) -> Option<usize> {
        match self {
            TraversalMode::Shallow => Some(1),
            TraversalMode::Deep => None,
        }
    }
}

//! Configuration types for the tree walker

use super::filter::ExcludeFilter;

/// Maximum traversal depth below the root.
///
/// Depth 0 is the root itself. "Unlimited" is a very large ceiling rather
/// than a separate case, so the walker only ever does one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MaxDepth(usize);

impl MaxDepth {
    pub const UNLIMITED: MaxDepth = MaxDepth(usize::MAX);

    pub fn new(depth: usize) -> Self {
        Self(depth)
    }

    /// Map a command-line depth where any negative value means unlimited.
    pub fn from_signed(depth: i64) -> Self {
        usize::try_from(depth).map_or(Self::UNLIMITED, MaxDepth)
    }

    /// True when a directory at `depth` must not be descended into.
    pub fn reached(self, depth: usize) -> bool {
        depth >= self.0
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        Self::UNLIMITED
    }
}

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    pub max_depth: MaxDepth,
    pub filter: ExcludeFilter,
}

//! TreeWalker - builds the full tree in memory

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::WalkError;

use super::config::WalkerConfig;
use super::node::TreeNode;
use super::utils::{DirSource, EntryKind, FsSource, absolute_path, display_name, sort_siblings};

/// Tree walker that builds the full tree in memory, one directory at a time.
///
/// Per-entry failures are logged and only shrink the tree. The walk fails
/// outright only when a path cannot be made absolute or when the starting
/// path is not a directory.
pub struct TreeWalker<S = FsSource> {
    config: WalkerConfig,
    source: S,
}

impl TreeWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self::with_source(config, FsSource)
    }
}

impl<S: DirSource> TreeWalker<S> {
    /// Walker that lists directories through `source`.
    pub fn with_source(config: WalkerConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Walk from `root` at depth 0.
    ///
    /// `Ok(None)` means there is nothing to show: the root itself was
    /// excluded or could not be read.
    pub fn walk(&self, root: &Path) -> Result<Option<TreeNode>, WalkError> {
        self.traverse(root, 0)
    }

    /// Build the subtree rooted at `path`, which sits `current_depth` levels
    /// below the walk's root.
    pub fn traverse(
        &self,
        path: &Path,
        current_depth: usize,
    ) -> Result<Option<TreeNode>, WalkError> {
        let abs_path = absolute_path(path).map_err(|source| WalkError::Absolute {
            path: path.to_path_buf(),
            source,
        })?;
        let name = display_name(&abs_path);

        if self.config.filter.is_excluded(&name) {
            debug!("Excluded {}", abs_path.display());
            return Ok(None);
        }

        let metadata = match fs::metadata(&abs_path) {
            Ok(m) => m,
            Err(e) => {
                warn!("Could not stat {}: {}. Skipping.", abs_path.display(), e);
                return Ok(None);
            }
        };

        if !metadata.is_dir() {
            return Err(WalkError::NotADirectory { path: abs_path });
        }

        // If at max depth, return the directory but don't descend
        if self.config.max_depth.reached(current_depth) {
            return Ok(Some(TreeNode::Dir {
                name,
                path: abs_path,
                children: Vec::new(),
            }));
        }

        let mut siblings = match self.source.read_siblings(&abs_path) {
            Ok(s) => s,
            Err(e) => {
                warn!(
                    "Could not read directory {}: {}. Skipping contents.",
                    abs_path.display(),
                    e
                );
                return Ok(Some(TreeNode::Dir {
                    name,
                    path: abs_path,
                    children: Vec::new(),
                }));
            }
        };
        sort_siblings(&mut siblings);

        let mut children = Vec::new();
        for sibling in siblings {
            if self.config.filter.is_excluded(&sibling.name) {
                debug!("Excluded {}", sibling.path.display());
                continue;
            }

            match sibling.kind {
                Ok(EntryKind::Dir) => match self.traverse(&sibling.path, current_depth + 1) {
                    Ok(Some(node)) => children.push(node),
                    Ok(None) => {}
                    Err(e) => {
                        // Only reachable if the entry changed type since it was listed
                        warn!("Skipping {}: {}", sibling.path.display(), e);
                    }
                },
                Ok(EntryKind::Other) => children.push(TreeNode::File {
                    name: sibling.name,
                    path: sibling.path,
                }),
                Err(e) => {
                    warn!(
                        "Could not get info for {}: {}. Skipping.",
                        sibling.path.display(),
                        e
                    );
                }
            }
        }

        Ok(Some(TreeNode::Dir {
            name,
            path: abs_path,
            children,
        }))
    }
}

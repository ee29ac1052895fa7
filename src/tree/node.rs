//! In-memory tree of file-system entries

use std::path::{Path, PathBuf};

/// One entry of the scanned tree.
///
/// Files are leaves by construction. A directory with no children is either
/// empty, cut off by the depth limit, or could not be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children in display order; always empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Number of descendants, not counting this node.
    pub fn entry_count(&self) -> usize {
        self.children()
            .iter()
            .map(|child| 1 + child.entry_count())
            .sum()
    }
}

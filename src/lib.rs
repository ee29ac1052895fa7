//! traverz - Scan a directory and print its structure as a Markdown-style tree

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Error, OutputError, Result, WalkError};
pub use output::{Destination, OutputConfig, TreeFormatter, render, write_output};
pub use tree::{ExcludeFilter, MaxDepth, TreeNode, TreeWalker, WalkerConfig};

//! Directory tree walking logic
//!
//! `TreeWalker` scans a directory depth-first and builds a `TreeNode` tree in
//! memory, applying name-based exclusion and a depth limit. Siblings are
//! ordered directories first, then case-insensitively by name.

mod config;
mod filter;
mod node;
mod utils;
mod walker;

// Re-export public types
pub use config::{MaxDepth, WalkerConfig};
pub use filter::ExcludeFilter;
pub use node::TreeNode;
pub use utils::{DirSource, EntryKind, FsSource, Sibling, absolute_path, display_name};
pub use walker::TreeWalker;

//! Tree formatter for buffered output
//!
//! This module provides `TreeFormatter` which formats a complete `TreeNode`
//! tree into connector-based indented text:
//!
//! ```text
//! 📁 project/
//! ├── 📁 src
//! │   └── 📄 main.rs
//! └── 📄 README.md
//! ```

use crate::tree::TreeNode;

use super::config::OutputConfig;
use super::icons::icon;
use super::utils::{connector, continuation_prefix};

/// Formatter for buffered tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Format the whole tree, one line per node.
    ///
    /// The root line carries a trailing `/` and no connector.
    pub fn format(&self, root: &TreeNode) -> String {
        let mut output = String::new();
        if root.is_dir() {
            output.push_str(icon(true, self.config.show_icons));
        }
        output.push_str(root.name());
        output.push_str("/\n");

        self.format_children(root.children(), "", &mut output);
        output
    }

    fn format_children(&self, children: &[TreeNode], prefix: &str, output: &mut String) {
        for (i, child) in children.iter().enumerate() {
            let is_last = i == children.len() - 1;

            output.push_str(prefix);
            output.push_str(connector(is_last));
            output.push_str(icon(child.is_dir(), self.config.show_icons));
            output.push_str(child.name());
            output.push('\n');

            if child.is_dir() && !child.children().is_empty() {
                let new_prefix = continuation_prefix(prefix, is_last);
                self.format_children(child.children(), &new_prefix, output);
            }
        }
    }
}

/// Render an optional tree; no tree renders as an empty string.
pub fn render(root: Option<&TreeNode>, show_icons: bool) -> String {
    match root {
        Some(node) => TreeFormatter::new(OutputConfig {
            show_icons,
            ..OutputConfig::default()
        })
        .format(node),
        None => String::new(),
    }
}

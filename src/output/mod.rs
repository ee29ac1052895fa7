//! Tree formatting and delivery
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `icons` - Folder/file glyphs
//! - `utils` - Connector and prefix helpers
//! - `tree` - Buffered tree formatter for complete tree structures
//! - `sink` - Stdout, pager and file destinations

mod config;
mod icons;
mod sink;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use icons::{DIR_ICON, FILE_ICON, icon};
pub use sink::{Destination, split_pager_command, write_output};
pub use tree::{TreeFormatter, render};
pub use utils::{BRANCH, CORNER, connector, continuation_prefix};

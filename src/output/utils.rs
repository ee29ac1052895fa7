//! Shared helpers for tree line layout

pub const BRANCH: &str = "├── ";
pub const CORNER: &str = "└── ";

/// Connector drawn before an entry: a corner for the last sibling.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { CORNER } else { BRANCH }
}

/// Calculate the prefix for the children of an entry.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

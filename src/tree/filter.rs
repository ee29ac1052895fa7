//! Name-based exclusion for tree walking

use regex::Regex;
use tracing::warn;

/// Ordered set of compiled exclusion patterns.
///
/// Patterns are matched against an entry's base name only, never the full
/// path. An empty filter excludes nothing.
#[derive(Debug, Clone, Default)]
pub struct ExcludeFilter {
    patterns: Vec<Regex>,
}

impl ExcludeFilter {
    /// Compile user-supplied pattern strings.
    ///
    /// Each raw value may hold several comma-separated patterns. Blank
    /// pieces are ignored; invalid regexes are skipped with a warning.
    pub fn compile<S: AsRef<str>>(raw: &[S]) -> Self {
        let mut patterns = Vec::new();
        for value in raw {
            for piece in value.as_ref().split(',') {
                let trimmed = piece.trim();
                if trimmed.is_empty() {
                    continue;
                }
                match Regex::new(trimmed) {
                    Ok(re) => patterns.push(re),
                    Err(e) => {
                        warn!("Invalid regex pattern '{}', skipping: {}", trimmed, e);
                    }
                }
            }
        }
        Self { patterns }
    }

    /// Check whether a base name matches any pattern.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

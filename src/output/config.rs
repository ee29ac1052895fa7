//! Output configuration types

use termcolor::ColorChoice;

/// Configuration for output formatting.
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// Prefix entries with folder/file glyphs
    pub show_icons: bool,
    /// Colorize status messages (never the tree itself)
    pub use_color: bool,
}

impl OutputConfig {
    /// Color choice for status streams.
    ///
    /// `use_color` is already the resolved decision, so termcolor must not
    /// second-guess it from `TERM` or `NO_COLOR`.
    pub fn color_choice(&self) -> ColorChoice {
        if self.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_icons: true,
            use_color: false,
        }
    }
}

//! Folder and file glyphs

pub const DIR_ICON: &str = "📁 ";
pub const FILE_ICON: &str = "📄 ";

/// Glyph shown before an entry name, or nothing when icons are off.
pub fn icon(is_dir: bool, show_icons: bool) -> &'static str {
    match (show_icons, is_dir) {
        (false, _) => "",
        (true, true) => DIR_ICON,
        (true, false) => FILE_ICON,
    }
}

//! Directory listing and sibling ordering for tree walking

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use tracing::warn;

/// What an entry turned out to be when its metadata was read.
///
/// Metadata is read without following symlinks, so a link to a directory
/// is `Other` and is never descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Dir,
    Other,
}

/// One immediate entry of a directory, with its metadata outcome.
#[derive(Debug)]
pub struct Sibling {
    pub name: String,
    pub path: PathBuf,
    pub kind: io::Result<EntryKind>,
}

impl Sibling {
    pub fn new(name: impl Into<String>, path: PathBuf, kind: io::Result<EntryKind>) -> Self {
        Self {
            name: name.into(),
            path,
            kind,
        }
    }
}

/// Get the display name of a path, falling back to the whole path for
/// roots like `/` that have no final component.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string_lossy().to_string())
}

/// Make a path absolute and drop `.`/`..` components lexically.
///
/// Symlinks are not resolved, so the root keeps the name the user typed.
pub fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    let abs = std::path::absolute(path)?;
    let mut cleaned = PathBuf::new();
    for component in abs.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                cleaned.pop();
            }
            other => cleaned.push(other),
        }
    }
    Ok(cleaned)
}

/// List the immediate entries of a directory, reading each entry's
/// metadata once. The directory handle is dropped before returning.
pub fn read_siblings(path: &Path) -> io::Result<Vec<Sibling>> {
    let mut siblings = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(
                    "Could not read an entry of {}: {}. Skipping.",
                    path.display(),
                    e
                );
                continue;
            }
        };
        let kind = entry.metadata().map(|meta| {
            if meta.is_dir() {
                EntryKind::Dir
            } else {
                EntryKind::Other
            }
        });
        siblings.push(Sibling::new(
            entry.file_name().to_string_lossy(),
            entry.path(),
            kind,
        ));
    }
    Ok(siblings)
}

/// Source of directory listings for the walker.
pub trait DirSource {
    /// List the immediate entries of the directory at `path`.
    fn read_siblings(&self, path: &Path) -> io::Result<Vec<Sibling>>;
}

/// Lists directories on the real file system.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsSource;

impl DirSource for FsSource {
    fn read_siblings(&self, path: &Path) -> io::Result<Vec<Sibling>> {
        read_siblings(path)
    }
}

/// Total order for siblings.
///
/// Entries with readable metadata come first, directories before everything
/// else, then case-insensitive name with the exact name as tiebreak.
/// Entries whose metadata failed go last, ordered by exact name.
pub fn compare_siblings(a: &Sibling, b: &Sibling) -> Ordering {
    match (&a.kind, &b.kind) {
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.name.cmp(&b.name),
        (Ok(ka), Ok(kb)) => {
            let a_dir = *ka == EntryKind::Dir;
            let b_dir = *kb == EntryKind::Dir;
            b_dir
                .cmp(&a_dir)
                .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                .then_with(|| a.name.cmp(&b.name))
        }
    }
}

pub fn sort_siblings(siblings: &mut [Sibling]) {
    siblings.sort_by(compare_siblings);
}

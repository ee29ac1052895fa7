//! Error types for traversal and output delivery

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit code for a missing or unusable input path (sysexits `EX_NOINPUT`).
pub const EXIT_NOINPUT: i32 = 66;

/// Exit code when the output file cannot be created (sysexits `EX_CANTCREAT`).
pub const EXIT_CANTCREAT: i32 = 73;

/// Exit code for other I/O failures (sysexits `EX_IOERR`).
pub const EXIT_IOERR: i32 = 74;

/// Fatal traversal errors.
///
/// Everything else the walker runs into (unreadable entries, unlistable
/// directories) is logged and degrades the tree instead of failing it.
#[derive(Error, Debug)]
pub enum WalkError {
    #[error("failed to get absolute path for {}: {source}", path.display())]
    Absolute {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", path.display())]
    NotADirectory { path: PathBuf },
}

/// Errors raised while delivering rendered output.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(#[source] io::Error),
}

/// Top-level error shown to the user.
#[derive(Error, Debug)]
pub enum Error {
    #[error("path does not exist: {}", .0.display())]
    PathNotFound(PathBuf),

    #[error("path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("error traversing directory: {0}")]
    Walk(#[from] WalkError),

    #[error("error writing output: {0}")]
    Output(#[from] OutputError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::PathNotFound(_) | Error::NotADirectory(_) | Error::Walk(_) => EXIT_NOINPUT,
            Error::Output(OutputError::Write { .. }) => EXIT_CANTCREAT,
            Error::Output(OutputError::Stdout(_)) => EXIT_IOERR,
        }
    }
}

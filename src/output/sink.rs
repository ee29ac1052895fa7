//! Delivery of rendered output to stdout, a pager, or a file

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use termcolor::{Color, ColorSpec, StandardStream, WriteColor};
use tracing::{debug, warn};

use crate::error::OutputError;

use super::config::OutputConfig;

/// Where the rendered tree goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    /// Page through this command line when stdout is a terminal
    Pager(String),
    File(PathBuf),
}

impl Destination {
    /// Pick a destination from command-line choices. A file wins over paging.
    pub fn select(output: Option<PathBuf>, paginate: bool, pager: &str) -> Self {
        match output {
            Some(path) => Destination::File(path),
            None if paginate => Destination::Pager(pager.to_string()),
            None => Destination::Stdout,
        }
    }
}

/// Deliver `content` to `destination`.
///
/// A pager that cannot be started or fed falls back to printing directly.
pub fn write_output(
    content: &str,
    destination: &Destination,
    config: &OutputConfig,
) -> Result<(), OutputError> {
    match destination {
        Destination::Stdout => print_direct(content),
        Destination::Pager(command) => show_with_pager(content, command),
        Destination::File(path) => write_file(content, path, config),
    }
}

fn print_direct(content: &str) -> Result<(), OutputError> {
    let mut stdout = io::stdout().lock();
    stdout
        .write_all(content.as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(OutputError::Stdout)
}

/// Split a pager command line into program and arguments.
///
/// `less` always gets `-R` so color escapes pass through, unless the
/// command line already asks for raw control characters.
pub fn split_pager_command(command: &str) -> Option<(&str, Vec<&str>)> {
    let mut parts = command.split_whitespace();
    let program = parts.next()?;
    let mut args: Vec<&str> = parts.collect();

    let is_less = Path::new(program)
        .file_name()
        .is_some_and(|name| name == "less");
    let has_raw = args
        .iter()
        .any(|arg| matches!(*arg, "-R" | "-r" | "--RAW-CONTROL-CHARS" | "--raw-control-chars"));
    if is_less && !has_raw {
        args.push("-R");
    }
    Some((program, args))
}

fn show_with_pager(content: &str, command: &str) -> Result<(), OutputError> {
    if !io::stdout().is_terminal() {
        return print_direct(content);
    }
    let Some((program, args)) = split_pager_command(command) else {
        return print_direct(content);
    };

    let mut child = match Command::new(program)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(c) => c,
        Err(e) => {
            warn!(
                "Failed to start pager '{}': {}. Printing directly.",
                program, e
            );
            return print_direct(content);
        }
    };

    let written = match child.stdin.take() {
        Some(mut stdin) => stdin.write_all(content.as_bytes()),
        None => Err(io::Error::other("pager stdin was not captured")),
    };
    // stdin is closed at this point, so the pager sees EOF

    match written {
        Ok(()) => {}
        // The user quit the pager before reading everything
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
            debug!("Pager closed its input early");
        }
        Err(e) => {
            warn!(
                "Failed to write to pager '{}': {}. Printing directly.",
                program, e
            );
            let _ = child.wait();
            return print_direct(content);
        }
    }

    if let Err(e) = child.wait() {
        warn!("Failed to wait for pager '{}': {}", program, e);
    }
    Ok(())
}

fn write_file(content: &str, path: &Path, config: &OutputConfig) -> Result<(), OutputError> {
    fs::write(path, content).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    let mut stdout = StandardStream::stdout(config.color_choice());
    write_notice(&mut stdout, path).map_err(OutputError::Stdout)
}

fn write_notice<W: WriteColor>(out: &mut W, path: &Path) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
    write!(out, "Output successfully written to {}", path.display())?;
    out.reset()?;
    writeln!(out)?;
    Ok(())
}

//! CLI entry point for traverz

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;

use clap::{ArgAction, Parser, ValueEnum};
use termcolor::{Color, ColorSpec, StandardStream, WriteColor};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;
use traverz::tree::absolute_path;
use traverz::{
    Destination, Error, ExcludeFilter, MaxDepth, OutputConfig, TreeFormatter, TreeWalker,
    WalkError, WalkerConfig, write_output,
};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output style
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum OutputStyle {
    /// Box-drawing tree
    #[default]
    Tree,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "traverz")]
#[command(about = "Recursively scan a directory and print a Markdown-style tree of its contents")]
#[command(version)]
struct Args {
    /// Root directory to traverse
    #[arg(short = 'p', long = "path", default_value = ".")]
    path: PathBuf,

    /// File to write the output to (prints to the terminal if omitted)
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Disable folder and file icons
    #[arg(long = "no-icons")]
    no_icons: bool,

    /// Regex pattern(s) matched against entry names to exclude
    /// (repeatable, or comma-separated, e.g. '\.git,node_modules')
    #[arg(short = 'e', long = "exclude")]
    exclude: Vec<String>,

    /// Maximum depth of traversal (negative for unlimited)
    #[arg(
        short = 'd',
        long = "depth",
        default_value = "-1",
        allow_negative_numbers = true
    )]
    depth: i64,

    /// Page the output when printing to a terminal
    #[arg(long = "paginate")]
    paginate: bool,

    /// Pager command used with --paginate (`less` always gets -R)
    #[arg(long = "pager", env = "PAGER", default_value = "less")]
    pager: String,

    /// Output style
    #[arg(long = "style", value_enum, default_value = "tree")]
    style: OutputStyle,

    /// Control color of status messages: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // RUST_LOG, when set, takes precedence over -v
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// Make the root absolute and confirm it is an existing directory.
fn resolve_root(path: &Path) -> traverz::Result<PathBuf> {
    let abs = absolute_path(path).map_err(|source| WalkError::Absolute {
        path: path.to_path_buf(),
        source,
    })?;
    match fs::metadata(&abs) {
        Ok(meta) if meta.is_dir() => Ok(abs),
        Ok(_) => Err(Error::NotADirectory(abs)),
        Err(_) => Err(Error::PathNotFound(abs)),
    }
}

fn run(args: &Args, use_color: bool) -> traverz::Result<()> {
    let root = resolve_root(&args.path)?;

    let filter = ExcludeFilter::compile(&args.exclude);
    if !filter.is_empty() {
        info!("Excluding names matching {} pattern(s)", filter.len());
    }
    let walker = TreeWalker::new(WalkerConfig {
        max_depth: MaxDepth::from_signed(args.depth),
        filter,
    });

    let Some(tree) = walker.walk(&root)? else {
        println!("No files or directories to display (root might be excluded or unreadable).");
        return Ok(());
    };

    let output_config = OutputConfig {
        show_icons: !args.no_icons,
        use_color,
    };
    let rendered = match args.style {
        OutputStyle::Tree => TreeFormatter::new(output_config).format(&tree),
    };

    let destination = Destination::select(args.output.clone(), args.paginate, &args.pager);
    write_output(&rendered, &destination, &output_config)?;
    Ok(())
}

fn print_error(err: &Error, use_color: bool) {
    let config = OutputConfig {
        use_color,
        ..OutputConfig::default()
    };
    let mut stderr = StandardStream::stderr(config.color_choice());
    let _ = stderr.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true));
    let _ = write!(stderr, "traverz: error:");
    let _ = stderr.reset();
    let _ = writeln!(stderr, " {}", err);
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);
    let use_color = should_use_color(args.color);

    if let Err(e) = run(&args, use_color) {
        print_error(&e, use_color);
        process::exit(e.exit_code());
    }
}

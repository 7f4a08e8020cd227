//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl PathOrStdin {
    /// Label used in error messages: `"-"` for stdin, else the path.
    pub fn label(&self) -> String {
        match self {
            PathOrStdin::Stdin => "-".to_owned(),
            PathOrStdin::Path(path) => path.display().to_string(),
        }
    }
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` writes plain text to stdout and summaries to stderr. `Json` writes
/// a single JSON document to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// Grid input format for `solve`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum InputFormat {
    /// JSON if the input starts with `[`, text otherwise (default).
    Auto,
    /// One row per line, values separated by whitespace or commas.
    Text,
    /// An array of arrays of non-negative integers.
    Json,
}

/// All top-level subcommands exposed by the `isthmus` binary.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Find the land cells that drain to both seas.
    Solve {
        /// Path to a grid file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Input format: auto (default), text, or json.
        #[arg(long, default_value = "auto", value_enum)]
        input_format: InputFormat,
        /// Fail if either seed corner is land instead of treating it as sea.
        #[arg(long)]
        strict_seeds: bool,
        /// Flood the two seas on separate threads.
        #[arg(long)]
        parallel: bool,
        /// Also print the drainage map (`~` sea, `n`/`f` one sea, `*` both,
        /// `.` neither).
        #[arg(long)]
        map: bool,
    },

    /// Print the reference isthmus grid.
    Example,

    /// Print the isthmus-core library version.
    Version,
}

/// Root CLI struct for the `isthmus` binary.
///
/// Global flags are marked `global = true` so that clap propagates them to
/// every subcommand.
#[derive(Parser, Debug)]
#[command(
    name = "isthmus",
    version,
    about = "Find isthmus peaks draining to both seas",
    long_about = "Reads a rectangular elevation grid (0 = sea) and lists the land\n\
                  cells from which water can flow downhill to both the sea at\n\
                  (0, 0) and the sea at the opposite corner."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: grid size, per-sea statistics, timing
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input size in bytes.
    ///
    /// Can also be set via the `ISTHMUS_MAX_FILE_SIZE` environment variable.
    /// The CLI flag takes precedence over the environment variable.
    /// Default: 67108864 (64 MB).
    #[arg(
        long,
        global = true,
        env = "ISTHMUS_MAX_FILE_SIZE",
        default_value = "67108864"
    )]
    pub max_file_size: u64,
}

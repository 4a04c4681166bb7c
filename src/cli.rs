// src/cli.rs

use clap::Parser;

/// Collects file paths or contents from a directory tree for pasting into an LLM prompt.
///
/// dircollect walks a source directory, skipping everything matched by an
/// ignore file (`.gitignore` by default) and every `.git` directory, then
/// prints the surviving files as Markdown code blocks or as a plain list of
/// paths.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to collect files from.
    #[arg(default_value = ".")]
    pub source: String,

    // --- Ignore & Traversal Options ---
    /// Ignore file to read patterns from [default: <SOURCE>/.gitignore].
    #[arg(short = 'g', long, value_name = "FILE")]
    pub ignore_file: Option<String>,

    /// Only list the top level of the source directory.
    #[arg(short = 'n', long, action = clap::ArgAction::SetTrue, conflicts_with = "max_depth")]
    pub no_recursive: bool,

    /// Do not descend below this depth (0 = files directly in SOURCE only).
    #[arg(short = 'd', long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    // --- Filtering Options ---
    /// Only include files whose name matches one of these comma-separated globs (repeatable).
    #[arg(short = 'I', long, value_name = "GLOBS")]
    pub include: Option<Vec<String>>,

    /// Skip files whose name matches one of these comma-separated globs (repeatable).
    /// Takes precedence over --include.
    #[arg(short = 'E', long, value_name = "GLOBS")]
    pub exclude: Option<Vec<String>>,

    /// Include files detected as binary/non-text (default is to skip them).
    #[arg(short = 'B', long, action = clap::ArgAction::SetTrue)]
    pub include_binary: bool,

    // --- Output Options ---
    /// Print only the paths of the selected files, not their contents.
    #[arg(short = 'P', long, action = clap::ArgAction::SetTrue)]
    pub paths_only: bool,

    /// Print absolute paths instead of paths relative to SOURCE.
    #[arg(short = 'a', long, action = clap::ArgAction::SetTrue)]
    pub absolute: bool,

    /// Add line numbers (N | ) to the beginning of each line in the code blocks.
    #[arg(short = 'L', long, action = clap::ArgAction::SetTrue)]
    pub line_numbers: bool,

    /// Wrap paths in headers and listings with backticks (`).
    #[arg(short = 'b', long, action = clap::ArgAction::SetTrue)]
    pub backticks: bool,

    /// Write output to the specified file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output_file: Option<String>,
}

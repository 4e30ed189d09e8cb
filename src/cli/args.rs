//! Command-line argument definitions.
//!
//! Parsing here is purely syntactic. Arity and path checks run afterwards in
//! [`crate::cli::request`] so each failure gets its own message.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Environment variable consulted when `--color` is not given.
pub const COLOR_ENV: &str = "PDFMERGE_COLOR";

/// Concatenate PDF files into a single document.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "pdfmerge")]
#[command(about = "Concatenate PDF files into a single document", long_about = None)]
#[command(override_usage = "pdfmerge [-fhvV] -o <OUTFILE> FILE FILE...")]
#[command(disable_version_flag = true)]
#[command(after_help = "Exit status:\n  0  Successful merge, or help/version shown\n  1  The merge failed or the output file already exists\n  2  Invalid command-line input")]
pub struct Cli {
    /// Path to the output file.
    #[arg(short, long, value_name = "OUTFILE")]
    pub output: Option<PathBuf>,

    /// Overwrite OUTFILE if it already exists.
    #[arg(short, long)]
    pub force: bool,

    /// Paths to the files to be merged, in order.
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,

    /// Print version information and exit.
    #[arg(short = 'V', long)]
    pub version: bool,

    /// Log merge progress to standard error.
    #[arg(short, long)]
    pub verbose: bool,

    /// When to colour error messages.
    #[arg(
        long,
        value_name = "WHEN",
        value_enum,
        default_value_t = ColorWhen::Auto,
        env = COLOR_ENV
    )]
    pub color: ColorWhen,
}

/// Colour policy for error messages.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorWhen {
    /// Colour when writing to a terminal.
    #[default]
    Auto,
    /// Always colour.
    Always,
    /// Never colour.
    Never,
}

//! User-facing messages on the output and error streams.
//!
//! Errors go to the error stream prefixed with the program name, optionally
//! in red. Help and version text go to the output stream, never coloured.

use std::io::{self, Write};

use crate::cli::args::ColorWhen;

const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Writes messages for a single run of the tool.
pub struct Reporter<'a> {
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    program: &'a str,
    colored: bool,
}

impl<'a> Reporter<'a> {
    /// Create a reporter over the given streams.
    ///
    /// # Arguments
    ///
    /// * `program` - Name printed in front of every error
    /// * `colored` - Whether error text is wrapped in ANSI colour codes
    pub fn new(
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
        program: &'a str,
        colored: bool,
    ) -> Self {
        Self {
            out,
            err,
            program,
            colored,
        }
    }

    /// Print `{program}: {message}` on the error stream.
    pub fn error(&mut self, message: &str) -> io::Result<()> {
        if self.colored {
            writeln!(self.err, "{RED}{}: {message}{RESET}", self.program)
        } else {
            writeln!(self.err, "{}: {message}", self.program)
        }
    }

    /// Suggest a close match for a mistyped option.
    pub fn suggestion(&mut self, candidate: &str) -> io::Result<()> {
        writeln!(self.err, "Did you mean '{candidate}'?")
    }

    /// Print help or version text on the output stream.
    pub fn text(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        if !text.ends_with('\n') {
            writeln!(self.out)?;
        }
        self.out.flush()
    }
}

/// Decide whether error text should be coloured.
///
/// `Auto` colours only when the error stream is a terminal and `TERM` is set.
pub fn use_color(when: ColorWhen, terminal: bool) -> bool {
    match when {
        ColorWhen::Always => true,
        ColorWhen::Never => false,
        ColorWhen::Auto => terminal && std::env::var_os("TERM").is_some(),
    }
}

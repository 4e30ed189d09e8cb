//! Command-line front end.
//!
//! A run goes through two phases. [`args::Cli`] turns the raw arguments into
//! a syntactic structure, then [`MergeRequest`] checks paths and arity. Only
//! a valid request reaches the [`PdfMerger`]. Every failure, from either
//! phase or from the merge itself, is turned into a message and an exit code
//! here and nowhere else.

pub mod args;
pub mod request;

use clap::error::{ContextKind, ErrorKind};
use clap::{CommandFactory, Parser, ValueEnum};
use std::ffi::OsString;
use std::io::Write;

use crate::error::{EXIT_OK, PdfMergeError, Result, Violation};
use crate::io::{FsStreams, StreamProvider};
use crate::merge::{LopdfEngine, MergeEngine, PdfMerger};
use crate::output::{Reporter, use_color};
use crate::{telemetry, version};

pub use args::{COLOR_ENV, Cli, ColorWhen};
pub use request::MergeRequest;

/// Name printed in front of every error message.
pub const PROGRAM: &str = "pdfmerge";

const FORCE_HINT: &str = "Use -f or --force to overwrite it.";

type ExitCodeMapper = Box<dyn Fn(&PdfMergeError) -> i32>;

/// Runs one invocation of the tool against injectable output streams.
pub struct Application<E = LopdfEngine, S = FsStreams> {
    merger: PdfMerger<E, S>,
    exit_code_mapper: Option<ExitCodeMapper>,
    terminal: bool,
    telemetry: bool,
}

impl Application {
    /// Create an application merging on the local filesystem.
    pub fn new() -> Self {
        Self::with_merger(PdfMerger::new())
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MergeEngine, S: StreamProvider> Application<E, S> {
    /// Create an application around an existing merger.
    pub fn with_merger(merger: PdfMerger<E, S>) -> Self {
        Self {
            merger,
            exit_code_mapper: None,
            terminal: false,
            telemetry: false,
        }
    }

    /// Replace the default error-to-exit-code mapping.
    ///
    /// The mapper sees parse failures as well as execution failures.
    pub fn with_exit_code_mapper<F>(mut self, mapper: F) -> Self
    where
        F: Fn(&PdfMergeError) -> i32 + 'static,
    {
        self.exit_code_mapper = Some(Box::new(mapper));
        self
    }

    /// Tell the application whether its error stream is a terminal.
    ///
    /// Only affects `--color auto`.
    pub fn with_terminal(mut self, terminal: bool) -> Self {
        self.terminal = terminal;
        self
    }

    /// Install the global log subscriber once arguments are parsed.
    pub fn with_telemetry(mut self, enabled: bool) -> Self {
        self.telemetry = enabled;
        self
    }

    /// Run the tool with `args`, the first of which is the program name.
    ///
    /// Returns the process exit code. Nothing here panics or returns early
    /// with an error; all failures are reported on `err`.
    pub async fn execute<I, T>(&self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let cli = match Cli::try_parse_from(&args) {
            Ok(cli) => cli,
            Err(error) => {
                let colored = use_color(requested_color(&args), self.terminal);
                let mut reporter = Reporter::new(out, err, PROGRAM, colored);
                return self.parse_failure(&error, &mut reporter);
            }
        };

        if self.telemetry {
            telemetry::init(cli.verbose);
        }

        let mut reporter = Reporter::new(out, err, PROGRAM, use_color(cli.color, self.terminal));
        match self.run(&cli, &mut reporter).await {
            Ok(()) => EXIT_OK,
            Err(error) => self.report(&error, &mut reporter),
        }
    }

    /// Carry out a validated request.
    ///
    /// # Errors
    ///
    /// Returns whatever the merger returns, unchanged.
    pub async fn dispatch(&self, request: &MergeRequest) -> Result<()> {
        if request.force() {
            self.merger
                .force_merge(request.inputs(), request.output())
                .await
        } else {
            self.merger.merge(request.inputs(), request.output()).await
        }
    }

    async fn run(&self, cli: &Cli, reporter: &mut Reporter<'_>) -> Result<()> {
        if cli.version {
            let version = version::resolve()?;
            reporter.text(&format!("{PROGRAM} {version}"))?;
            return Ok(());
        }

        let request = MergeRequest::from_cli(cli).await?;
        tracing::debug!(
            inputs = request.inputs().len(),
            output = %request.output().display(),
            force = request.force(),
            "request validated"
        );

        self.dispatch(&request).await?;
        tracing::debug!(output = %request.output().display(), "merge finished");
        Ok(())
    }

    fn parse_failure(&self, error: &clap::Error, reporter: &mut Reporter<'_>) -> i32 {
        match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                let _ = reporter.text(&error.render().to_string());
                EXIT_OK
            }
            _ => self.report(&usage_violation(error).into(), reporter),
        }
    }

    fn report(&self, error: &PdfMergeError, reporter: &mut Reporter<'_>) -> i32 {
        let message = match error {
            PdfMergeError::AlreadyExists { .. } => format!("{error} {FORCE_HINT}"),
            _ => error.to_string(),
        };
        let _ = reporter.error(&message);

        if error.is_usage_error() {
            let _ = match error {
                PdfMergeError::InvalidParameter(Violation::Usage {
                    suggestion: Some(candidate),
                    ..
                }) => reporter.suggestion(candidate),
                _ => reporter.text(&Cli::command().render_help().to_string()),
            };
        }

        self.exit_code(error)
    }

    fn exit_code(&self, error: &PdfMergeError) -> i32 {
        match &self.exit_code_mapper {
            Some(mapper) => mapper(error),
            None => error.exit_code(),
        }
    }
}

/// Colour policy for a command line clap rejected.
///
/// Reads whatever `--color` value was parsed before the failure, falling
/// back to `PDFMERGE_COLOR` and then to `auto`.
fn requested_color(args: &[OsString]) -> ColorWhen {
    Cli::command()
        .ignore_errors(true)
        .try_get_matches_from(args)
        .ok()
        .and_then(|matches| matches.try_get_one::<ColorWhen>("color").ok().flatten().copied())
        .or_else(|| {
            std::env::var(COLOR_ENV)
                .ok()
                .and_then(|value| ColorWhen::from_str(&value, true).ok())
        })
        .unwrap_or_default()
}

/// Convert a clap rejection into a usage violation.
fn usage_violation(error: &clap::Error) -> Violation {
    let rendered = error.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    let message = first.strip_prefix("error: ").unwrap_or(first).trim().to_string();
    let suggestion = error
        .get(ContextKind::SuggestedArg)
        .map(|candidate| candidate.to_string());

    Violation::Usage {
        message,
        suggestion,
    }
}

//! Error types for pdfmerge.
//!
//! Every failure the tool can report is one variant of [`PdfMergeError`].
//! Components below the command-line front end never catch and continue;
//! they hand the error up unchanged and the front end maps it to a message
//! and an exit code in one place.
//!
//! # Error Categories
//!
//! - **Invalid parameters**: bad command-line input, detected before any write.
//! - **Already exists**: the overwrite guard refused to touch the output.
//! - **I/O failures**: opening streams, writing output, or a malformed PDF.
//! - **Configuration**: version information could not be resolved.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for pdfmerge operations.
pub type Result<T> = std::result::Result<T, PdfMergeError>;

/// Exit code for a successful run, or a help/version display.
pub const EXIT_OK: i32 = 0;

/// Exit code for a failure while executing the merge.
pub const EXIT_EXECUTION_ERROR: i32 = 1;

/// Exit code for invalid command-line input.
pub const EXIT_INVALID_INPUT: i32 = 2;

/// Main error type for pdfmerge operations.
#[derive(Debug, thiserror::Error)]
pub enum PdfMergeError {
    /// The command line was rejected before any merge was attempted.
    #[error("{0}")]
    InvalidParameter(Violation),

    /// The output file exists and overwriting was not requested.
    #[error("The output file already exists.")]
    AlreadyExists {
        /// Path to the existing output file.
        path: PathBuf,
    },

    /// Opening, reading or writing a stream failed.
    #[error("{0}")]
    Io(#[from] io::Error),

    /// The merge engine rejected a document.
    #[error("{0}")]
    Pdf(#[from] lopdf::Error),

    /// Build or packaging metadata could not be resolved.
    #[error("{message}")]
    Configuration {
        /// Description of what could not be resolved.
        message: String,
    },
}

impl PdfMergeError {
    /// Create an AlreadyExists error.
    pub fn already_exists(path: PathBuf) -> Self {
        Self::AlreadyExists { path }
    }

    /// Create a Configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Whether the usage text should accompany this error.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidParameter(_))
    }

    /// Get the default process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidParameter(_) => EXIT_INVALID_INPUT,
            Self::AlreadyExists { .. } => EXIT_EXECUTION_ERROR,
            Self::Io(_) => EXIT_EXECUTION_ERROR,
            Self::Pdf(_) => EXIT_EXECUTION_ERROR,
            Self::Configuration { .. } => EXIT_EXECUTION_ERROR,
        }
    }
}

impl From<Violation> for PdfMergeError {
    fn from(violation: Violation) -> Self {
        Self::InvalidParameter(violation)
    }
}

/// A single reason the command line was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// `--output` was not given.
    MissingOutput,

    /// The output path points at a directory.
    OutputIsDirectory,

    /// Fewer than two input files were given.
    TooFewInputs {
        /// The inputs that were given.
        given: Vec<PathBuf>,
    },

    /// An input path does not exist.
    InputNotFound {
        /// The missing input.
        path: PathBuf,
    },

    /// An input path points at a directory.
    InputIsDirectory {
        /// The offending input.
        path: PathBuf,
    },

    /// The argument parser rejected the command line.
    Usage {
        /// Parser message, without any prefix.
        message: String,
        /// A close match for an unrecognised option, if one exists.
        suggestion: Option<String>,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingOutput => write!(f, "Missing required option: '--output=OUTFILE'"),
            Self::OutputIsDirectory => write!(f, "Invalid path: OUTFILE must point to a file."),
            Self::TooFewInputs { given } => match given.as_slice() {
                [] => write!(
                    f,
                    "FILE requires at least 2 values, but none were specified."
                ),
                paths => {
                    let listed = paths
                        .iter()
                        .map(|p| p.display().to_string())
                        .collect::<Vec<_>>()
                        .join(", ");
                    write!(
                        f,
                        "FILE requires at least 2 values, but only {} was specified: [{listed}]",
                        paths.len()
                    )
                }
            },
            Self::InputNotFound { path } => {
                write!(f, "Invalid path: {} does not exist.", path.display())
            }
            Self::InputIsDirectory { .. } => write!(f, "Invalid path: FILE must point to a file."),
            Self::Usage { message, .. } => write!(f, "{message}"),
        }
    }
}

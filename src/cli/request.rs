//! Semantic validation of a parsed command line.

use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::error::{Result, Violation};
use crate::io::paths;

/// Minimum number of documents a merge takes.
pub const MIN_INPUTS: usize = 2;

/// A validated merge: at least two existing input files and a non-directory
/// output path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    inputs: Vec<PathBuf>,
    output: PathBuf,
    force: bool,
}

impl MergeRequest {
    /// Validate a merge request.
    ///
    /// Checks run in a fixed order and stop at the first violation: the
    /// output path, then the number of inputs, then each input in order.
    ///
    /// # Errors
    ///
    /// Returns [`crate::PdfMergeError::InvalidParameter`] describing the
    /// first violation found.
    pub async fn new(inputs: Vec<PathBuf>, output: PathBuf, force: bool) -> Result<Self> {
        if paths::is_directory(&output).await {
            return Err(Violation::OutputIsDirectory.into());
        }

        if inputs.len() < MIN_INPUTS {
            return Err(Violation::TooFewInputs { given: inputs }.into());
        }

        for path in &inputs {
            check_input(path).await?;
        }

        Ok(Self {
            inputs,
            output,
            force,
        })
    }

    /// Validate the merge described by a parsed command line.
    ///
    /// # Errors
    ///
    /// Returns [`Violation::MissingOutput`] when `--output` is absent, or
    /// any violation from [`MergeRequest::new`].
    pub async fn from_cli(cli: &Cli) -> Result<Self> {
        let output = cli.output.clone().ok_or(Violation::MissingOutput)?;
        Self::new(cli.inputs.clone(), output, cli.force).await
    }

    /// Input documents, in merge order.
    pub fn inputs(&self) -> &[PathBuf] {
        &self.inputs
    }

    /// Destination path.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Whether an existing destination may be replaced.
    pub fn force(&self) -> bool {
        self.force
    }
}

async fn check_input(path: &Path) -> Result<()> {
    if paths::not_exists(path).await {
        return Err(Violation::InputNotFound {
            path: path.to_path_buf(),
        }
        .into());
    }
    if paths::is_directory(path).await {
        return Err(Violation::InputIsDirectory {
            path: path.to_path_buf(),
        }
        .into());
    }
    Ok(())
}

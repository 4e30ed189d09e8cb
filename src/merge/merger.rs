//! Merge orchestration.
//!
//! [`PdfMerger`] decides whether the destination may be written, opens every
//! stream the merge needs and hands them to the [`MergeEngine`]. It does not
//! catch anything: the first failure, wherever it happens, is what the
//! caller gets back.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::error::{PdfMergeError, Result};
use crate::io::paths;
use crate::io::{FsStreams, StreamProvider};
use crate::merge::engine::{LopdfEngine, MemoryUsage, MergeEngine};

/// Concatenates documents from disk, guarding against accidental overwrites.
#[derive(Debug, Clone)]
pub struct PdfMerger<E = LopdfEngine, S = FsStreams> {
    engine: E,
    streams: S,
    memory: MemoryUsage,
}

impl PdfMerger {
    /// Create a merger over the local filesystem using the lopdf engine.
    pub fn new() -> Self {
        Self::with_parts(LopdfEngine::new(), FsStreams)
    }
}

impl Default for PdfMerger {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MergeEngine, S: StreamProvider> PdfMerger<E, S> {
    /// Create a merger from an engine and a stream provider.
    ///
    /// The engine is configured to buffer in main memory only.
    pub fn with_parts(engine: E, streams: S) -> Self {
        Self {
            engine,
            streams,
            memory: MemoryUsage::main_memory_only(),
        }
    }

    /// Use a different buffering strategy for the engine.
    pub fn with_memory_usage(mut self, memory: MemoryUsage) -> Self {
        self.memory = memory;
        self
    }

    /// The buffering strategy handed to the engine.
    pub fn memory_usage(&self) -> MemoryUsage {
        self.memory
    }

    /// Merge `inputs` into `output`, refusing to replace an existing file.
    ///
    /// The destination is not opened, and so not truncated, unless it was
    /// missing when checked.
    ///
    /// # Errors
    ///
    /// Returns [`PdfMergeError::AlreadyExists`] if `output` exists, otherwise
    /// any error from opening streams or from the engine, unchanged.
    pub async fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        if paths::exists(output).await {
            tracing::debug!(output = %output.display(), "refusing to overwrite existing output");
            return Err(PdfMergeError::already_exists(output.to_path_buf()));
        }

        self.merge_into(inputs, output).await
    }

    /// Merge `inputs` into `output`, replacing any existing content.
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` I/O error, before opening anything, if
    /// `output` is one of the inputs. Otherwise returns any error from
    /// opening streams or from the engine, unchanged.
    pub async fn force_merge(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        self.merge_into(inputs, output).await
    }

    async fn merge_into(&self, inputs: &[PathBuf], output: &Path) -> Result<()> {
        // Opening the output truncates it, which would destroy an input.
        for path in inputs {
            if paths::is_same_file(path, output).await {
                return Err(PdfMergeError::Io(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("{} is both an input and the output.", path.display()),
                )));
            }
        }

        // Every opened stream is owned by this frame; an early return drops
        // them all, and a drop never replaces the error being returned.
        let mut sources = Vec::with_capacity(inputs.len());
        for path in inputs {
            tracing::debug!(input = %path.display(), "opening input");
            sources.push(self.streams.open_input(path).await?);
        }

        tracing::debug!(output = %output.display(), "opening output");
        let mut destination = self.streams.open_output(output).await?;

        self.engine
            .merge(sources.as_mut_slice(), &mut destination, self.memory)?;
        destination.flush()?;

        tracing::debug!(inputs = inputs.len(), output = %output.display(), "merge finished");
        Ok(())
    }
}

//! Opening the byte streams a merge reads from and writes to.
//!
//! The orchestrator never touches files directly; it asks a
//! [`StreamProvider`] for them. Handles are plain owned values, so whatever
//! the provider hands out is released when the value is dropped.

use std::fs::File;
use std::future::Future;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Source of readable input streams and a writable output stream.
pub trait StreamProvider {
    /// Stream type for one input document.
    type Input: Read;

    /// Stream type for the destination document.
    type Output: Write;

    /// Open `path` for reading.
    fn open_input(&self, path: &Path) -> impl Future<Output = io::Result<Self::Input>>;

    /// Open `path` for writing, creating it or truncating existing content.
    fn open_output(&self, path: &Path) -> impl Future<Output = io::Result<Self::Output>>;
}

/// Streams backed by files on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsStreams;

impl StreamProvider for FsStreams {
    type Input = BufReader<File>;
    type Output = BufWriter<File>;

    async fn open_input(&self, path: &Path) -> io::Result<Self::Input> {
        let file = tokio::fs::File::open(path).await?;
        Ok(BufReader::new(file.into_std().await))
    }

    async fn open_output(&self, path: &Path) -> io::Result<Self::Output> {
        let file = tokio::fs::File::create(path).await?;
        Ok(BufWriter::new(file.into_std().await))
    }
}

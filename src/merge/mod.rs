//! PDF merging.
//!
//! - [`engine`]: the structural merge of already opened documents
//! - [`merger`]: the overwrite guard and stream handling around the engine
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::merge::PdfMerger;
//! use std::path::{Path, PathBuf};
//!
//! # async fn example() -> pdfmerge::Result<()> {
//! let inputs = vec![PathBuf::from("a.pdf"), PathBuf::from("b.pdf")];
//! PdfMerger::new().merge(&inputs, Path::new("merged.pdf")).await?;
//! # Ok(())
//! # }
//! ```

pub mod engine;
pub mod merger;

pub use engine::{LopdfEngine, MemoryUsage, MergeEngine};
pub use merger::PdfMerger;

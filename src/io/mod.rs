//! Filesystem access for pdfmerge.
//!
//! - [`paths`]: existence and directory predicates used during validation
//! - [`streams`]: opening input and output byte streams for a merge

pub mod paths;
pub mod streams;

pub use streams::{FsStreams, StreamProvider};

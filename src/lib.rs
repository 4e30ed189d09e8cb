//! pdfmerge concatenates PDF documents into a single file.
//!
//! The library is split the same way a run of the tool is:
//!
//! - [`cli`] parses and validates the command line and reports failures
//! - [`merge`] guards the output file and drives the merge engine
//! - [`io`] answers path questions and opens byte streams
//!
//! # Examples
//!
//! ```no_run
//! use pdfmerge::cli::Application;
//!
//! # async fn example() {
//! let mut out = std::io::stdout();
//! let mut err = std::io::stderr();
//! let code = Application::new()
//!     .execute(["pdfmerge", "-o", "out.pdf", "a.pdf", "b.pdf"], &mut out, &mut err)
//!     .await;
//! assert_eq!(code, 0);
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod io;
pub mod merge;
pub mod output;
pub mod telemetry;
pub mod version;


pub use cli::{Application, MergeRequest};
pub use error::{PdfMergeError, Result, Violation};
pub use merge::{LopdfEngine, MemoryUsage, MergeEngine, PdfMerger};

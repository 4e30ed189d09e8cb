//! Version information, fixed at build time.

use crate::error::{PdfMergeError, Result};

const BUILD_VERSION: Option<&str> = option_env!("CARGO_PKG_VERSION");

/// Resolve the version string of this build.
///
/// # Errors
///
/// Returns a configuration error if the build carried no version.
pub fn resolve() -> Result<&'static str> {
    resolve_from(BUILD_VERSION)
}

fn resolve_from(candidate: Option<&'static str>) -> Result<&'static str> {
    match candidate.map(str::trim) {
        Some(version) if !version.is_empty() => Ok(version),
        _ => Err(PdfMergeError::configuration(
            "Could not find version information.",
        )),
    }
}

//! Side-effect free filesystem predicates.
//!
//! None of these functions fail: a path whose state cannot be determined is
//! reported as neither existing nor missing. Results reflect the filesystem
//! at call time only and are never cached.

use std::path::Path;

/// Returns true when `path` is confirmed to exist.
pub async fn exists(path: &Path) -> bool {
    matches!(tokio::fs::try_exists(path).await, Ok(true))
}

/// Returns true when `path` is confirmed to be missing.
///
/// This is not simply `!exists(path)`: if the state of the path cannot be
/// determined (e.g. permission denied on a parent) both predicates are false.
pub async fn not_exists(path: &Path) -> bool {
    matches!(tokio::fs::try_exists(path).await, Ok(false))
}

/// Returns true when `path` is confirmed to be a directory.
pub async fn is_directory(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|metadata| metadata.is_dir())
        .unwrap_or(false)
}

/// Returns true when both paths resolve to the same existing file.
pub async fn is_same_file(a: &Path, b: &Path) -> bool {
    match (
        tokio::fs::canonicalize(a).await,
        tokio::fs::canonicalize(b).await,
    ) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

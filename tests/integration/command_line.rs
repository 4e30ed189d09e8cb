//! End-to-end runs of the `pdfmerge` binary.

use rstest::rstest;
use std::ffi::OsStr;
use std::fs;

use crate::common::{Workspace, page_texts, pdfmerge, pdfmerge_with_env, stderr, stdout};

#[test]
fn test_successful_merge_is_silent() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let out = ws.join("out.pdf");

    let output = pdfmerge([
        OsStr::new("-o"),
        out.as_os_str(),
        a.as_os_str(),
        b.as_os_str(),
    ]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).is_empty());
    assert_eq!(page_texts(&out), vec!["First page", "Second page"]);
}

#[test]
fn test_existing_output_without_force() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let out = ws.file("out.pdf", b"existing");

    let output = pdfmerge([
        OsStr::new("-o"),
        out.as_os_str(),
        a.as_os_str(),
        b.as_os_str(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(
        stderr(&output)
            .trim_end()
            .ends_with("Use -f or --force to overwrite it.")
    );
    assert!(stdout(&output).is_empty());
    assert_eq!(fs::read(&out).unwrap(), b"existing");
}

#[test]
fn test_existing_output_with_force() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let out = ws.file("out.pdf", b"existing");

    let output = pdfmerge([
        OsStr::new("--force"),
        OsStr::new("--output"),
        out.as_os_str(),
        a.as_os_str(),
        b.as_os_str(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(page_texts(&out), vec!["First page", "Second page"]);
}

#[test]
fn test_single_input_is_invalid() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let out = ws.join("out.pdf");

    let output = pdfmerge([OsStr::new("-o"), out.as_os_str(), a.as_os_str()]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("FILE requires at least 2 values"));
    assert!(stdout(&output).contains("Usage:"));
    assert!(!out.exists());
}

#[test]
fn test_missing_input_is_invalid() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let missing = ws.join("missing.pdf");
    let out = ws.join("out.pdf");

    let output = pdfmerge([
        OsStr::new("-o"),
        out.as_os_str(),
        a.as_os_str(),
        missing.as_os_str(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(
        stderr(&output).contains(&format!("Invalid path: {} does not exist.", missing.display()))
    );
    assert!(!out.exists());
}

#[test]
fn test_directory_input_is_invalid() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let out = ws.join("out.pdf");

    let output = pdfmerge([
        OsStr::new("-o"),
        out.as_os_str(),
        a.as_os_str(),
        ws.path().as_os_str(),
    ]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Invalid path: FILE must point to a file."));
}

#[test]
fn test_corrupt_input_is_an_execution_error() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let broken = ws.file("broken.pdf", b"not a pdf");
    let out = ws.join("out.pdf");

    let output = pdfmerge([
        OsStr::new("-o"),
        out.as_os_str(),
        a.as_os_str(),
        broken.as_os_str(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).starts_with("pdfmerge: "));
    assert!(stdout(&output).is_empty());
}

#[rstest]
#[case("-h")]
#[case("--help")]
fn test_help(#[case] flag: &str) {
    let output = pdfmerge([flag]);

    assert_eq!(output.status.code(), Some(0));
    let help = stdout(&output);
    assert!(help.contains("-o, --output <OUTFILE>"));
    assert!(help.contains("-f, --force"));
}

#[rstest]
#[case("-V")]
#[case("--version")]
fn test_version(#[case] flag: &str) {
    let output = pdfmerge([flag]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output).trim(),
        format!("pdfmerge {}", env!("CARGO_PKG_VERSION"))
    );
}

#[test]
fn test_unknown_option() {
    let output = pdfmerge(["--forse"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Did you mean '--force'?"));
}

#[test]
fn test_color_from_environment() {
    let output = pdfmerge_with_env(["a.pdf", "b.pdf"], &[("PDFMERGE_COLOR", "always")]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).starts_with("\x1b[31mpdfmerge: "));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let out = ws.join("out.pdf");

    let output = pdfmerge([
        OsStr::new("-v"),
        OsStr::new("-o"),
        out.as_os_str(),
        a.as_os_str(),
        b.as_os_str(),
    ]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("request validated"));
}

#[test]
fn test_output_that_is_an_input_is_left_intact() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let original = fs::read(&a).unwrap();

    let output = pdfmerge([
        OsStr::new("-f"),
        OsStr::new("-o"),
        a.as_os_str(),
        a.as_os_str(),
        b.as_os_str(),
    ]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("is both an input and the output."));
    assert_eq!(fs::read(&a).unwrap(), original);
}

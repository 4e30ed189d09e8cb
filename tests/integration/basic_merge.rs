//! Merging through the library API.

use pdfmerge::{MemoryUsage, PdfMergeError, PdfMerger};
use std::fs;

use crate::common::{Workspace, page_texts};

#[tokio::test]
async fn test_merge_two_documents() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let out = ws.join("out.pdf");

    PdfMerger::new().merge(&[a, b], &out).await.unwrap();

    assert_eq!(page_texts(&out), vec!["First page", "Second page"]);
}

#[tokio::test]
async fn test_merge_many_documents_in_order() {
    let ws = Workspace::new();
    let inputs = vec![
        ws.pdf("1.pdf", &["one"]),
        ws.pdf("2.pdf", &["two", "three"]),
        ws.pdf("3.pdf", &["four"]),
        ws.pdf("4.pdf", &["five", "six"]),
    ];
    let out = ws.join("out.pdf");

    PdfMerger::new().merge(&inputs, &out).await.unwrap();

    assert_eq!(
        page_texts(&out),
        vec!["one", "two", "three", "four", "five", "six"]
    );
}

#[tokio::test]
async fn test_same_input_twice() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let out = ws.join("out.pdf");

    PdfMerger::new()
        .merge(&[a.clone(), a], &out)
        .await
        .unwrap();

    assert_eq!(page_texts(&out), vec!["First page", "First page"]);
}

#[tokio::test]
async fn test_merge_refuses_existing_output() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let out = ws.file("out.pdf", b"existing");

    let result = PdfMerger::new().merge(&[a, b], &out).await;

    match result {
        Err(PdfMergeError::AlreadyExists { path }) => assert_eq!(path, out),
        other => panic!("expected AlreadyExists, got {other:?}"),
    }
    assert_eq!(fs::read(&out).unwrap(), b"existing");
}

#[tokio::test]
async fn test_force_merge_replaces_existing_output() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let out = ws.file("out.pdf", b"existing");

    PdfMerger::new().force_merge(&[a, b], &out).await.unwrap();

    assert_eq!(page_texts(&out), vec!["First page", "Second page"]);
}

#[tokio::test]
async fn test_force_merge_twice_gives_identical_output() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let out = ws.join("out.pdf");
    let merger = PdfMerger::new();

    merger.force_merge(&[a.clone(), b.clone()], &out).await.unwrap();
    let first = fs::read(&out).unwrap();
    merger.force_merge(&[a, b], &out).await.unwrap();

    assert_eq!(fs::read(&out).unwrap(), first);
}

#[tokio::test]
async fn test_capped_memory_usage() {
    let ws = Workspace::new();
    let a = ws.pdf("a.pdf", &["First page"]);
    let b = ws.pdf("b.pdf", &["Second page"]);
    let out = ws.join("out.pdf");

    let merger = PdfMerger::new().with_memory_usage(MemoryUsage::Capped { max_bytes: 16 });
    let result = merger.merge(&[a, b], &out).await;

    assert!(matches!(result, Err(PdfMergeError::Io(_))));
}

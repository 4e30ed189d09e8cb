//! The document merge engine.
//!
//! The engine is the only part of pdfmerge that understands PDF structure.
//! It takes already opened byte streams, in order, and writes one
//! concatenated document to the destination stream. Everything around it
//! (path checks, the overwrite guard, stream lifetimes) belongs to the
//! orchestrator in [`crate::merge::merger`].

use lopdf::{Document, Object, ObjectId, dictionary};
use std::io::{self, Read, Write};

use crate::error::{PdfMergeError, Result};

/// How the engine may buffer source documents while merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MemoryUsage {
    /// Buffer everything in main memory, never spill to temporary files.
    #[default]
    MainMemoryOnly,

    /// Buffer in main memory, failing once the sources exceed `max_bytes`.
    Capped {
        /// Upper bound on the combined size of all buffered sources.
        max_bytes: u64,
    },
}

impl MemoryUsage {
    /// Buffer everything in main memory.
    pub fn main_memory_only() -> Self {
        Self::MainMemoryOnly
    }

    fn limit(&self) -> Option<u64> {
        match self {
            Self::MainMemoryOnly => None,
            Self::Capped { max_bytes } => Some(*max_bytes),
        }
    }
}

/// Structural merge of several documents into one.
pub trait MergeEngine {
    /// Merge `sources` in order and write the result to `destination`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read, is not a well-formed
    /// document, or the result cannot be written.
    fn merge<R: Read, W: Write>(
        &self,
        sources: &mut [R],
        destination: &mut W,
        memory: MemoryUsage,
    ) -> Result<()>;
}

/// Merge engine backed by `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfEngine;

impl LopdfEngine {
    /// Create a new engine.
    pub fn new() -> Self {
        Self
    }

    /// Move `doc`'s objects into `merged`, returning its page tree root and
    /// page count.
    fn absorb(merged: &mut Document, mut doc: Document) -> Result<(ObjectId, i64)> {
        doc.renumber_objects_with(merged.max_id + 1);

        let root = page_tree_root(&doc)?;
        let count = doc.get_pages().len() as i64;

        merged.max_id = merged.max_id.max(doc.max_id);
        merged.objects.extend(doc.objects);

        Ok((root, count))
    }

    /// Hang every document's page tree root under a new, attribute-free
    /// Pages node and make that node the catalog's page tree.
    ///
    /// Each original root stays the ancestor of its own pages only, so an
    /// inherited MediaBox, CropBox, Resources or Rotate applies to exactly
    /// the pages it applied to before.
    fn join_page_trees(merged: &mut Document, roots: &[ObjectId], count: i64) -> Result<()> {
        let kids: Vec<Object> = roots.iter().copied().map(Object::Reference).collect();
        let top = merged.add_object(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => Object::Integer(count),
        });

        for root in roots {
            merged
                .get_object_mut(*root)?
                .as_dict_mut()?
                .set("Parent", Object::Reference(top));
        }

        let catalog = merged.trailer.get(b"Root")?.as_reference()?;
        merged
            .get_object_mut(catalog)?
            .as_dict_mut()?
            .set("Pages", Object::Reference(top));

        Ok(())
    }
}

impl MergeEngine for LopdfEngine {
    fn merge<R: Read, W: Write>(
        &self,
        sources: &mut [R],
        destination: &mut W,
        memory: MemoryUsage,
    ) -> Result<()> {
        let mut remaining = memory.limit();
        let mut documents = Vec::with_capacity(sources.len());

        for source in sources.iter_mut() {
            let buffer = buffer_source(source, remaining)?;
            if let Some(limit) = remaining.as_mut() {
                *limit -= buffer.len() as u64;
            }
            documents.push(Document::load_mem(&buffer)?);
        }

        let mut documents = documents.into_iter();
        let mut merged = documents.next().ok_or_else(|| {
            PdfMergeError::Io(io::Error::new(
                io::ErrorKind::InvalidInput,
                "No documents to merge",
            ))
        })?;

        let mut roots = vec![page_tree_root(&merged)?];
        let mut count = merged.get_pages().len() as i64;
        for doc in documents {
            let (root, pages) = Self::absorb(&mut merged, doc)?;
            roots.push(root);
            count += pages;
        }
        Self::join_page_trees(&mut merged, &roots, count)?;

        // Catalogs of appended documents are unreachable now.
        merged.prune_objects();
        merged.renumber_objects();
        merged.compress();

        tracing::debug!(pages = merged.get_pages().len(), "writing merged document");
        merged.save_to(destination)?;

        Ok(())
    }
}

/// Read a whole source into memory, honouring the remaining buffer budget.
fn buffer_source<R: Read>(source: &mut R, limit: Option<u64>) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();

    match limit {
        None => {
            source.read_to_end(&mut buffer)?;
        }
        Some(limit) => {
            source
                .by_ref()
                .take(limit.saturating_add(1))
                .read_to_end(&mut buffer)?;
            if buffer.len() as u64 > limit {
                return Err(PdfMergeError::Io(io::Error::new(
                    io::ErrorKind::OutOfMemory,
                    "Input documents exceed the in-memory buffer limit",
                )));
            }
        }
    }

    Ok(buffer)
}

fn page_tree_root(doc: &Document) -> Result<ObjectId> {
    Ok(doc.catalog()?.get(b"Pages")?.as_reference()?)
}

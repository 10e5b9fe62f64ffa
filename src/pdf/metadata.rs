//! PDF metadata extraction

use std::path::Path;

use lopdf::{Document, Object};

use crate::error::{Error, Result};

/// Summary information about a PDF file
#[derive(Debug, Clone)]
pub struct PdfMetadata {
    /// Number of pages in the PDF
    pub page_count: usize,
    /// Document title (if present)
    pub title: Option<String>,
    /// Document author (if present)
    pub author: Option<String>,
}

/// Count pages by reading the Count field from the Pages dictionary.
/// Works for nested page trees that a plain page iteration can miss.
fn count_pages_from_catalog(doc: &Document) -> Result<usize> {
    let catalog_id = doc
        .trailer
        .get(b"Root")
        .and_then(Object::as_reference)
        .map_err(|_| Error::General("document has no catalog".to_string()))?;

    let pages_id = doc
        .get_object(catalog_id)
        .and_then(Object::as_dict)
        .and_then(|catalog| catalog.get(b"Pages"))
        .and_then(Object::as_reference)
        .map_err(|_| Error::General("catalog has no page tree".to_string()))?;

    let count = doc
        .get_object(pages_id)
        .and_then(Object::as_dict)
        .and_then(|pages| pages.get(b"Count"))
        .and_then(Object::as_i64)
        .map_err(|_| Error::General("page tree has no Count".to_string()))?;

    Ok(count as usize)
}

fn load_document(path: &Path) -> Result<Document> {
    Document::load(path).map_err(|source| Error::SourceOpen {
        path: path.to_path_buf(),
        source,
    })
}

/// Extract page count, title and author from a PDF file
pub fn extract_metadata(path: &Path) -> Result<PdfMetadata> {
    let doc = load_document(path)?;
    let page_count = count_pages_from_catalog(&doc)?;

    // Title and author live in the trailer's Info dictionary when present.
    let info = doc
        .trailer
        .get(b"Info")
        .and_then(Object::as_reference)
        .and_then(|id| doc.get_object(id))
        .and_then(Object::as_dict)
        .ok();

    let text_entry = |key: &[u8]| -> Option<String> {
        info.and_then(|dict| dict.get(key).ok())
            .and_then(|entry| entry.as_str().ok())
            .and_then(|bytes| String::from_utf8(bytes.to_vec()).ok())
    };

    Ok(PdfMetadata {
        page_count,
        title: text_entry(b"Title"),
        author: text_entry(b"Author"),
    })
}

/// Count the number of pages in a PDF file
///
/// This is a quick operation that reads the Count field from the Pages
/// dictionary without walking every page.
pub fn count_pages(path: &Path) -> Result<usize> {
    let doc = load_document(path)?;
    count_pages_from_catalog(&doc)
}

//! PDF merging functionality using lopdf

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use log::{debug, info};
use lopdf::{Dictionary, Document, Object, ObjectId};

use crate::error::{Error, Result};
use crate::list::{has_pdf_extension, DocumentList};

/// A validated snapshot of one merge: which documents, in what order, into
/// which file.
///
/// Construction checks everything that can be checked without touching the
/// filesystem, so a built request always holds at least one source and a
/// destination ending in `.pdf`. The request copies the list contents, so
/// later list edits do not affect a merge already underway.
#[derive(Debug, Clone)]
pub struct MergeRequest {
    sources: Vec<PathBuf>,
    destination: PathBuf,
}

impl MergeRequest {
    /// Snapshot `list` and resolve `destination` for a single merge.
    ///
    /// Fails with [`Error::EmptyInput`] when the list has no documents and
    /// with [`Error::BlankName`] when `destination` trims to nothing. A
    /// destination without a `.pdf` suffix (any case) gets one appended; an
    /// existing suffix keeps the case it was written in, and a different
    /// extension is appended to rather than replaced (`notes.tex` becomes
    /// `notes.tex.pdf`).
    pub fn new(list: &DocumentList, destination: impl AsRef<Path>) -> Result<Self> {
        if list.is_empty() {
            return Err(Error::EmptyInput);
        }

        Ok(Self {
            sources: list.snapshot().to_vec(),
            destination: normalize_destination(destination.as_ref())?,
        })
    }

    /// Source documents in merge order.
    pub fn sources(&self) -> &[PathBuf] {
        &self.sources
    }

    /// Where the merged document will be written.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

/// What a successful merge produced.
#[derive(Debug, Clone)]
pub struct MergeSummary {
    /// Path the merged document was written to
    pub destination: PathBuf,
    /// Number of source documents merged
    pub documents: usize,
    /// Total page count of the output
    pub pages: usize,
}

/// Trim the destination and make sure it carries a `.pdf` suffix.
fn normalize_destination(destination: &Path) -> Result<PathBuf> {
    let trimmed = destination.to_string_lossy().trim().to_string();
    if trimmed.is_empty() {
        return Err(Error::BlankName);
    }

    let destination = PathBuf::from(trimmed);
    if has_pdf_extension(&destination) {
        Ok(destination)
    } else {
        let mut with_suffix = destination.into_os_string();
        with_suffix.push(".pdf");
        Ok(PathBuf::from(with_suffix))
    }
}

/// Merge every document in `request` into a single PDF at its destination.
///
/// Based on the lopdf merge example:
/// https://github.com/J-F-Liu/lopdf/blob/main/examples/merge.rs
///
/// Sources are loaded up front, in list order, and the first one that fails
/// to open aborts the merge before any output exists. Pages keep their
/// within-source order, and each page is carried over as a structural copy
/// of its objects rather than a re-render. The destination is created or
/// overwritten in place; there is no temp-file-and-rename step.
///
/// # Example
///
/// ```no_run
/// use pdf_binder::DocumentList;
/// use pdf_binder::pdf::{merge_documents, MergeRequest};
///
/// let mut list = DocumentList::new();
/// list.add("1. intro.pdf");
/// list.add("2. advanced.pdf");
///
/// let request = MergeRequest::new(&list, "course-pack")?;
/// let summary = merge_documents(&request)?;
/// println!("{} pages written", summary.pages);
/// # Ok::<(), pdf_binder::Error>(())
/// ```
pub fn merge_documents(request: &MergeRequest) -> Result<MergeSummary> {
    // Load everything before assembling anything, so an unreadable source
    // can never leave a half-written destination behind. Loaded documents
    // are dropped on every exit path, error or not.
    let mut documents: Vec<Document> = Vec::with_capacity(request.sources().len());
    for path in request.sources() {
        let doc = Document::load(path).map_err(|source| Error::SourceOpen {
            path: path.clone(),
            source,
        })?;
        debug!("loaded {}", path.display());
        documents.push(doc);
    }

    // Renumber object ids document by document so nothing collides, while
    // collecting page ids in merge order. get_pages() is keyed by page
    // number, so iteration preserves each document's own page order.
    let mut max_id = 1;
    let mut page_ids: Vec<ObjectId> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut doc in documents {
        doc.renumber_objects_with(max_id);
        max_id = doc.max_id + 1;

        page_ids.extend(doc.get_pages().into_values());
        objects.extend(doc.objects);
    }

    let mut merged = Document::with_version("1.5");
    merged.objects.extend(objects);

    // new_object_id() hands out max_id + 1; without this it would collide
    // with the ids just copied in.
    merged.max_id = max_id - 1;

    let pages_id = merged.new_object_id();

    let kids: Vec<Object> = page_ids.iter().map(|&id| Object::Reference(id)).collect();

    let mut pages_dict = Dictionary::new();
    pages_dict.set("Type", Object::Name(b"Pages".to_vec()));
    pages_dict.set("Count", Object::Integer(page_ids.len() as i64));
    pages_dict.set("Kids", Object::Array(kids));

    let catalog_id = merged.new_object_id();
    let mut catalog = Dictionary::new();
    catalog.set("Type", Object::Name(b"Catalog".to_vec()));
    catalog.set("Pages", Object::Reference(pages_id));

    merged.objects.insert(catalog_id, Object::Dictionary(catalog));
    merged.objects.insert(pages_id, Object::Dictionary(pages_dict));
    merged.trailer.set("Root", Object::Reference(catalog_id));

    // Every copied page now hangs off the rebuilt Pages node.
    for &page_id in &page_ids {
        if let Ok(Object::Dictionary(dict)) = merged.get_object_mut(page_id) {
            dict.set("Parent", Object::Reference(pages_id));
        }
    }

    merged.compress();
    merged
        .save(request.destination())
        .map_err(|source| Error::Write {
            path: request.destination().to_path_buf(),
            source,
        })?;

    info!(
        "merged {} documents ({} pages) into {}",
        request.sources().len(),
        page_ids.len(),
        request.destination().display()
    );

    Ok(MergeSummary {
        destination: request.destination().to_path_buf(),
        documents: request.sources().len(),
        pages: page_ids.len(),
    })
}

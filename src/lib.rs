//! PDF Binder Library
//!
//! A cross-platform library for collecting PDF files into an ordered list and
//! merging them into a single document. This library provides functionality
//! to:
//! - Maintain an ordered, duplicate-free list of source PDFs
//! - Reorder and remove queued documents one position at a time
//! - Merge every queued document, page by page, into one output PDF
//! - Extract metadata (page counts, title, author)
//!
//! The list and merge types carry no UI or CLI dependency; any front-end that
//! can call `add`, `remove`, `move_up`, `move_down` and `merge_documents` can
//! drive them.
//!
//! # Example
//!
//! ```no_run
//! use pdf_binder::DocumentList;
//! use pdf_binder::pdf::{merge_documents, MergeRequest};
//!
//! let mut list = DocumentList::new();
//! list.add("1. intro.pdf");
//! list.add("2. advanced.pdf");
//! list.move_up(1);
//!
//! let request = MergeRequest::new(&list, "course-pack")?;
//! let summary = merge_documents(&request)?;
//! println!(
//!     "wrote {} pages to {}",
//!     summary.pages,
//!     summary.destination.display()
//! );
//! # Ok::<(), pdf_binder::Error>(())
//! ```

pub mod error;
pub mod list;
pub mod pdf;

// Re-export commonly used items
pub use error::{Error, Result};
pub use list::DocumentList;

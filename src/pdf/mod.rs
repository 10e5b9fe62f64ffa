//! PDF manipulation module

pub mod merge;
pub mod metadata;

// Re-export commonly used items
pub use merge::{merge_documents, MergeRequest, MergeSummary};
pub use metadata::{count_pages, extract_metadata, PdfMetadata};

//! Error types for the pdf-binder library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the pdf-binder library
#[derive(Error, Debug)]
pub enum Error {
    /// A merge was requested with no documents in the list
    #[error("no documents to merge")]
    EmptyInput,

    /// The output name was empty or whitespace-only
    #[error("output name is empty")]
    BlankName,

    /// A source file could not be opened as a PDF
    #[error("could not open {}", .path.display())]
    SourceOpen {
        path: PathBuf,
        source: lopdf::Error,
    },

    /// The merged document could not be written
    #[error("could not write {}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A list index outside the current bounds
    #[error("index {index} is out of range for a list of {len} documents")]
    OutOfRange { index: usize, len: usize },

    /// General error
    #[error("{0}")]
    General(String),
}

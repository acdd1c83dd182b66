// src/error.rs
use thiserror::Error;

/// Failures of the document layer: file ingestion and import setup.
/// Interpretation itself is total and never produces an error.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read document: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Invalid import width: {width}")]
    InvalidWidth { width: usize },
}

pub type DocumentResult<T> = Result<T, DocumentError>;

use std::result;

use thiserror::Error;

/// Error types for citation formatting boundaries
///
/// Formatting itself never fails; these errors come from decoding article
/// records and from strict style-name parsing.
#[derive(Error, Debug)]
pub enum CitationError {
    /// Style name is not one of the supported styles
    #[error("Unknown citation style: {name} (expected gost, apa or vancouver)")]
    UnknownStyle { name: String },

    /// JSON parsing failed
    #[error("JSON parsing failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = result::Result<T, CitationError>;

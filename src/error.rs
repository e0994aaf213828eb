//! Error types for the transcoord library.

use thiserror::Error;

/// Errors that can occur while building transcripts or mapping coordinates.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A parse error occurred while reading a record, region, or variant.
    #[error("{0}")]
    Parse(String),

    /// A structural constraint of a transcript was violated.
    #[error("{0}")]
    Validation(String),

    /// A position inside the coding span that no exon or intron claims.
    #[error("unmapped position: {0}")]
    Unmapped(String),
}

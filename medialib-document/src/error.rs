//! Error types for the document model.

use thiserror::Error;

/// Result type for markup and document operations.
pub type MarkupResult<T> = Result<T, MarkupError>;

/// Errors that can occur while parsing or editing a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkupError {
    /// Embed markup that does not describe a valid embed.
    #[error("unparseable embed: {0}")]
    UnparseableEmbed(String),

    /// A block index outside the document.
    #[error("block index {index} out of range (document has {len} blocks)")]
    OutOfRange { index: usize, len: usize },
}

impl MarkupError {
    pub(crate) fn unparseable(reason: impl Into<String>) -> Self {
        Self::UnparseableEmbed(reason.into())
    }
}

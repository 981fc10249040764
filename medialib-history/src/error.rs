//! Error types for the history layer.

use medialib_document::MarkupError;
use thiserror::Error;

/// Result type for history operations.
pub type HistoryResult<T> = Result<T, HistoryError>;

/// Errors that can occur while committing, undoing or redoing.
///
/// Undo/redo at a history boundary is not an error; those calls report
/// `false` instead.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The command does not fit the current document.
    #[error("invalid command: {0}")]
    InvalidCommand(String),

    /// The live document no longer matches the history's snapshot, so it was
    /// mutated outside the history.
    #[error("document diverged from history at entry {entry}")]
    Diverged { entry: usize },
}

impl From<MarkupError> for HistoryError {
    fn from(e: MarkupError) -> Self {
        Self::InvalidCommand(e.to_string())
    }
}

//! Error types for the editor plugin.

use crate::command::EditorCommand;
use medialib_history::HistoryError;
use medialib_library::LibraryError;
use medialib_policy::PolicyError;
use medialib_types::MediaTypeId;
use thiserror::Error;

/// Result type for editor operations.
pub type EditorResult<T> = Result<T, EditorError>;

/// Errors surfaced by the editor.
#[derive(Debug, Error)]
pub enum EditorError {
    #[error(transparent)]
    Policy(#[from] PolicyError),

    #[error(transparent)]
    Library(#[from] LibraryError),

    #[error(transparent)]
    History(#[from] HistoryError),

    /// The editor configuration cannot run on the text format.
    #[error("invalid editor configuration: {}", .0.join(" "))]
    InvalidPair(Vec<String>),

    /// The toolbar command is currently disabled.
    #[error("'{0}' is disabled")]
    CommandDisabled(EditorCommand),

    /// The chosen item's media type is not allowed by the filter.
    #[error("media type '{0}' may not be embedded")]
    TypeNotAllowed(MediaTypeId),
}

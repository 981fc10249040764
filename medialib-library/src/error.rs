//! Error types for the media library.

use medialib_policy::PolicyError;
use medialib_types::{ItemId, MediaTypeId};
use thiserror::Error;

/// Result type for library operations.
pub type LibraryResult<T> = Result<T, LibraryError>;

/// Errors that can occur while querying the catalog or driving the dialog.
#[derive(Debug, Error)]
pub enum LibraryError {
    /// The catalog could not answer a query.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// No catalog item has this ID (or it is not in the active tab).
    #[error("media item not found: {0}")]
    NotFound(ItemId),

    /// The policy does not fit the catalog; the dialog must not open.
    #[error(transparent)]
    Policy(#[from] PolicyError),

    /// The policy and catalog leave nothing to choose from.
    #[error("no media types are available")]
    NoMediaTypes,

    /// The requested tab is not among the permitted types.
    #[error("media type '{0}' is not available in this dialog")]
    InvalidTab(MediaTypeId),

    /// Tabs are not rendered when only one type is permitted.
    #[error("tab navigation is disabled for a single media type")]
    NavigationSuppressed,

    /// `Insert selected` was pressed while disabled.
    #[error("no media item selected")]
    NothingSelected,
}

//! Core type definitions for MediaLib.
//!
//! This crate defines the catalog-facing types shared by every other crate:
//! - [`ItemId`]: stable catalog item identifier (UUID)
//! - [`MediaTypeId`] / [`ViewModeId`]: machine names for media types and view modes
//! - [`CatalogItem`] / [`TypeDescriptor`]: what the entity catalog hands out
//! - [`Alignment`]: presentation alignment of an embedded item
//!
//! Nothing here knows about documents, dialogs or history.

mod alignment;
mod catalog;
mod ids;

pub use alignment::Alignment;
pub use catalog::{CatalogItem, TypeDescriptor};
pub use ids::{ItemId, MediaTypeId, ViewModeId};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid item id: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid alignment: {0:?}")]
    InvalidAlignment(String),

    #[error("invalid machine name: {0:?}")]
    InvalidMachineName(String),
}

//! Media library for MediaLib: the entity catalog seam and the selection
//! dialog that lists catalog items by media type.
//!
//! The dialog only ever offers the types an [`AllowList`](medialib_policy::AllowList)
//! permits. With a single permitted type it renders no tabs at all.

mod catalog;
mod dialog;
mod error;

pub use catalog::{CatalogFixture, EntityCatalog, InMemoryCatalog};
pub use dialog::{ChosenItem, DialogOutcome, DialogSession, SelectionChange, SelectionDialog, Tab};
pub use error::{LibraryError, LibraryResult};

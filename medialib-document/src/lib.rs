//! Document model for MediaLib.
//!
//! - [`EmbedNode`] / [`create_embed`]: the embedded reference to a catalog item
//! - [`to_markup`] / [`parse_embed`]: the `<drupal-media>` wire format
//! - [`Document`] / [`Block`]: top-level blocks, loaded leniently from source

mod document;
mod embed;
mod error;
mod markup;

pub use document::{Block, Document};
pub use embed::{create_embed, EmbedNode, ENTITY_TYPE};
pub use error::{MarkupError, MarkupResult};
pub use markup::{parse_embed, to_markup, TAG_NAME};

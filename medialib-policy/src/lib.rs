//! Media embed policy for MediaLib.
//!
//! Turns the `media_embed` filter configuration of a text format into a
//! validated [`AllowList`], and resolves which media types the selection
//! dialog may offer ([`PermittedTypes`]). Also validates that an editor's
//! toolbar can run on a given format ([`validate_pair`]).

mod allow_list;
mod error;
mod pairing;
mod settings;

pub use allow_list::{AllowList, PermittedTypes};
pub use error::{PolicyError, PolicyResult};
pub use pairing::{validate_pair, EditorConfig, ToolbarItem};
pub use settings::{FilterFormat, Filters, MediaEmbedSettings};

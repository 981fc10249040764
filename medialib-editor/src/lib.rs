//! Media embedding for a rich-text editor.
//!
//! [`Editor`] owns a document and its history and exposes the toolbar
//! commands of [`EditorCommand`]. The [`MediaEmbedPlugin`] receives the
//! entity catalog and the filter policy at construction.
//!
//! A typical insertion:
//!
//! ```ignore
//! let mut session = editor.open_media_library().await?;
//! session.click(&item_id)?;
//! editor.finish_media_library(session.insert()?)?;
//! ```

mod command;
mod editor;
mod error;
mod plugin;

pub use command::EditorCommand;
pub use editor::Editor;
pub use error::{EditorError, EditorResult};
pub use plugin::MediaEmbedPlugin;

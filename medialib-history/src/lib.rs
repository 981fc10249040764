//! Command-pattern undo/redo history for MediaLib documents.
//!
//! Every mutation is a [`Command`] committed through [`History::commit`],
//! which records exactly one [`HistoryEntry`]. Inserting an embed is
//! therefore always undone in one step.

mod command;
mod error;
mod history;

pub use command::{Command, CommandKind};
pub use error::{HistoryError, HistoryResult};
pub use history::{History, HistoryEntry};

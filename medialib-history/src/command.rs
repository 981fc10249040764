use crate::error::{HistoryError, HistoryResult};
use medialib_document::{Block, Document};
use medialib_types::Alignment;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A reversible document mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Inserts a block at `index`.
    InsertBlock { index: usize, block: Block },
    /// Removes the block at `index`.
    RemoveBlock { index: usize },
    /// Changes the alignment of the embed at `index`.
    SetAlignment { index: usize, alignment: Alignment },
    /// Replaces the whole document (leaving source editing).
    ReplaceDocument { document: Document },
}

/// Coarse classification of a command, recorded on each history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommandKind {
    Insert,
    Remove,
    Other,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Insert => "insert",
            Self::Remove => "remove",
            Self::Other => "other",
        })
    }
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Self::InsertBlock { .. } => CommandKind::Insert,
            Self::RemoveBlock { .. } => CommandKind::Remove,
            Self::SetAlignment { .. } | Self::ReplaceDocument { .. } => CommandKind::Other,
        }
    }

    /// Applies the command and returns the command that reverts it.
    ///
    /// The document is left untouched on error.
    pub fn apply(&self, document: &mut Document) -> HistoryResult<Command> {
        match self {
            Self::InsertBlock { index, block } => {
                document.insert(*index, block.clone())?;
                Ok(Self::RemoveBlock { index: *index })
            }
            Self::RemoveBlock { index } => {
                let block = document.remove(*index)?;
                Ok(Self::InsertBlock {
                    index: *index,
                    block,
                })
            }
            Self::SetAlignment { index, alignment } => {
                let node = document.embed_mut(*index).ok_or_else(|| {
                    HistoryError::InvalidCommand(format!("block {index} is not an embed"))
                })?;
                let previous = std::mem::replace(&mut node.alignment, *alignment);
                Ok(Self::SetAlignment {
                    index: *index,
                    alignment: previous,
                })
            }
            Self::ReplaceDocument { document: next } => {
                let previous = std::mem::replace(document, next.clone());
                Ok(Self::ReplaceDocument { document: previous })
            }
        }
    }
}

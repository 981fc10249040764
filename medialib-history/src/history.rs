//! Linear undo/redo stack.
//!
//! Entries before `pointer` are applied; entries from `pointer` on are
//! redoable. Committing after an undo discards the redoable suffix.

use crate::command::{Command, CommandKind};
use crate::error::{HistoryError, HistoryResult};
use medialib_document::Document;
use tracing::debug;

/// One committed mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    kind: CommandKind,
    forward: Command,
    inverse: Command,
    before: String,
    after: String,
}

impl HistoryEntry {
    pub fn kind(&self) -> CommandKind {
        self.kind
    }

    pub fn command(&self) -> &Command {
        &self.forward
    }

    /// Serialized document before the command.
    pub fn before_snapshot(&self) -> &str {
        &self.before
    }

    /// Serialized document after the command.
    pub fn after_snapshot(&self) -> &str {
        &self.after
    }
}

/// Undo/redo history of a single document.
#[derive(Debug, Clone, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
    pointer: usize,
    capacity: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// History that keeps at most `capacity` entries, dropping the oldest.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity: Some(capacity.max(1)),
            ..Self::default()
        }
    }

    /// Applies `command` to `document` and records it as one entry.
    pub fn commit(&mut self, document: &mut Document, command: Command) -> HistoryResult<()> {
        let before = document.to_source();
        let inverse = command.apply(document)?;
        let after = document.to_source();

        if self.pointer < self.entries.len() {
            debug!(
                discarded = self.entries.len() - self.pointer,
                "Discarding redoable entries"
            );
            self.entries.truncate(self.pointer);
        }

        let kind = command.kind();
        self.entries.push(HistoryEntry {
            kind,
            forward: command,
            inverse,
            before,
            after,
        });
        self.pointer = self.entries.len();

        if let Some(capacity) = self.capacity {
            if self.entries.len() > capacity {
                let overflow = self.entries.len() - capacity;
                self.entries.drain(..overflow);
                self.pointer -= overflow;
            }
        }

        debug!(kind = %kind, position = self.pointer, "Committed history entry");
        Ok(())
    }

    /// Reverts the most recent applied entry. Returns `false` at the start.
    pub fn undo(&mut self, document: &mut Document) -> HistoryResult<bool> {
        if !self.can_undo() {
            return Ok(false);
        }
        let index = self.pointer - 1;
        let entry = &self.entries[index];
        if document.to_source() != entry.after {
            return Err(HistoryError::Diverged { entry: index });
        }
        entry.inverse.apply(document)?;
        self.pointer = index;
        debug!(kind = %entry.kind, position = self.pointer, "Undo");
        Ok(true)
    }

    /// Reapplies the next undone entry. Returns `false` at the end.
    pub fn redo(&mut self, document: &mut Document) -> HistoryResult<bool> {
        if !self.can_redo() {
            return Ok(false);
        }
        let index = self.pointer;
        let entry = &self.entries[index];
        if document.to_source() != entry.before {
            return Err(HistoryError::Diverged { entry: index });
        }
        entry.forward.apply(document)?;
        self.pointer = index + 1;
        debug!(kind = %entry.kind, position = self.pointer, "Redo");
        Ok(true)
    }

    pub fn can_undo(&self) -> bool {
        self.pointer > 0
    }

    pub fn can_redo(&self) -> bool {
        self.pointer < self.entries.len()
    }

    /// Number of applied entries.
    pub fn position(&self) -> usize {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.pointer = 0;
    }
}

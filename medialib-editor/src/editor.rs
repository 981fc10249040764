//! Editor instance: one document, its history, and the toolbar.

use crate::command::EditorCommand;
use crate::error::{EditorError, EditorResult};
use crate::plugin::MediaEmbedPlugin;
use medialib_document::{Block, Document, EmbedNode};
use medialib_history::{Command, History};
use medialib_library::{ChosenItem, DialogOutcome, DialogSession, EntityCatalog};
use medialib_policy::{validate_pair, EditorConfig, FilterFormat, ToolbarItem};
use medialib_types::Alignment;
use std::sync::Arc;
use tracing::{debug, info};

/// A rich-text editor bound to one document.
///
/// All document mutations go through the history, so every toolbar action
/// can be undone in one step.
pub struct Editor {
    config: EditorConfig,
    document: Document,
    history: History,
    media: Option<MediaEmbedPlugin>,
    source: Option<String>,
    cursor: Option<usize>,
}

impl Editor {
    pub fn new(config: EditorConfig, document: Document) -> Self {
        Self {
            config,
            document,
            history: History::new(),
            media: None,
            source: None,
            cursor: None,
        }
    }

    /// Validates the editor/format pair and wires the media plugin.
    pub fn from_config(
        config: EditorConfig,
        format: &FilterFormat,
        catalog: Arc<dyn EntityCatalog>,
        initial_source: &str,
    ) -> EditorResult<Self> {
        let violations = validate_pair(&config, format);
        if !violations.is_empty() {
            return Err(EditorError::InvalidPair(violations));
        }
        let media = if format.media_embed().status {
            Some(MediaEmbedPlugin::from_format(catalog, format)?)
        } else {
            None
        };
        let mut editor = Self::new(config, Document::from_source(initial_source));
        editor.media = media;
        Ok(editor)
    }

    #[must_use]
    pub fn with_media(mut self, plugin: MediaEmbedPlugin) -> Self {
        self.media = Some(plugin);
        self
    }

    #[must_use]
    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    pub fn media(&self) -> Option<&MediaEmbedPlugin> {
        self.media.as_ref()
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Serialized document.
    pub fn data(&self) -> String {
        self.document.to_source()
    }

    /// Embedded media widgets in document order.
    pub fn widgets(&self) -> Vec<&EmbedNode> {
        self.document.embeds()
    }

    /// Where the next insertion lands. `None` appends.
    pub fn set_cursor(&mut self, index: Option<usize>) {
        self.cursor = index;
    }

    pub fn is_source_editing(&self) -> bool {
        self.source.is_some()
    }

    /// Whether a toolbar button is present and currently enabled.
    pub fn is_enabled(&self, command: EditorCommand) -> bool {
        let editing = !self.is_source_editing();
        match command {
            EditorCommand::InsertMedia => {
                editing && self.media.is_some() && self.config.has_item(ToolbarItem::DrupalMedia)
            }
            EditorCommand::Source => self.config.has_item(ToolbarItem::SourceEditing),
            EditorCommand::Undo => {
                editing && self.config.has_item(ToolbarItem::Undo) && self.history.can_undo()
            }
            EditorCommand::Redo => {
                editing && self.config.has_item(ToolbarItem::Redo) && self.history.can_redo()
            }
        }
    }

    fn ensure_enabled(&self, command: EditorCommand) -> EditorResult<()> {
        if self.is_enabled(command) {
            Ok(())
        } else {
            Err(EditorError::CommandDisabled(command))
        }
    }

    /// Presses "Insert Drupal Media": opens the media library.
    ///
    /// Nothing is mutated until the outcome is handed to
    /// [`finish_media_library`](Self::finish_media_library).
    pub async fn open_media_library(&self) -> EditorResult<DialogSession> {
        self.ensure_enabled(EditorCommand::InsertMedia)?;
        let plugin = self
            .media
            .as_ref()
            .ok_or(EditorError::CommandDisabled(EditorCommand::InsertMedia))?;
        Ok(plugin.open().await?)
    }

    /// Applies a dialog outcome. Returns the block index of the new embed.
    pub fn finish_media_library(&mut self, outcome: DialogOutcome) -> EditorResult<Option<usize>> {
        match outcome {
            DialogOutcome::Chosen(chosen) => self.insert_media(&chosen, None).map(Some),
            DialogOutcome::Cancelled => {
                debug!("Media library closed without a selection");
                Ok(None)
            }
        }
    }

    /// Inserts an embed for `chosen` at the cursor as one history entry.
    pub fn insert_media(
        &mut self,
        chosen: &ChosenItem,
        alignment: Option<Alignment>,
    ) -> EditorResult<usize> {
        self.ensure_enabled(EditorCommand::InsertMedia)?;
        let plugin = self
            .media
            .as_ref()
            .ok_or(EditorError::CommandDisabled(EditorCommand::InsertMedia))?;
        if !plugin.allow_list().allows(&chosen.item.type_id) {
            return Err(EditorError::TypeNotAllowed(chosen.item.type_id.clone()));
        }

        let node = plugin.embed_for(chosen, alignment);
        let index = self
            .cursor
            .unwrap_or(self.document.len())
            .min(self.document.len());
        self.history.commit(
            &mut self.document,
            Command::InsertBlock {
                index,
                block: Block::Embed(node),
            },
        )?;
        self.cursor = Some(index + 1);
        info!(item_id = %chosen.item.id, index, "Inserted media embed");
        Ok(index)
    }

    /// Changes the alignment of the embed at `index`.
    pub fn set_alignment(&mut self, index: usize, alignment: Alignment) -> EditorResult<()> {
        self.ensure_editing()?;
        self.history.commit(
            &mut self.document,
            Command::SetAlignment { index, alignment },
        )?;
        Ok(())
    }

    /// Removes the block at `index`.
    pub fn remove_block(&mut self, index: usize) -> EditorResult<()> {
        self.ensure_editing()?;
        self.history
            .commit(&mut self.document, Command::RemoveBlock { index })?;
        self.cursor = self.cursor.map(|c| if c > index { c - 1 } else { c });
        Ok(())
    }

    fn ensure_editing(&self) -> EditorResult<()> {
        if self.is_source_editing() {
            Err(EditorError::CommandDisabled(EditorCommand::Source))
        } else {
            Ok(())
        }
    }

    /// Presses "Undo". Returns `false` when disabled.
    pub fn undo(&mut self) -> EditorResult<bool> {
        if !self.is_enabled(EditorCommand::Undo) {
            return Ok(false);
        }
        let undone = self.history.undo(&mut self.document)?;
        if undone {
            self.cursor = None;
        }
        Ok(undone)
    }

    /// Presses "Redo". Returns `false` when disabled.
    pub fn redo(&mut self) -> EditorResult<bool> {
        if !self.is_enabled(EditorCommand::Redo) {
            return Ok(false);
        }
        let redone = self.history.redo(&mut self.document)?;
        if redone {
            self.cursor = None;
        }
        Ok(redone)
    }

    /// Presses "Source".
    ///
    /// Entering shows the serialized document; leaving commits the edited
    /// text as a single entry when it serializes differently. Markup that
    /// only differs in form, such as a self-closing embed, commits nothing.
    pub fn toggle_source(&mut self) -> EditorResult<()> {
        self.ensure_enabled(EditorCommand::Source)?;
        match self.source.take() {
            None => {
                self.source = Some(self.document.to_source());
                debug!("Entered source editing");
            }
            Some(text) => {
                let document = Document::from_source(&text);
                if document.to_source() != self.document.to_source() {
                    self.history
                        .commit(&mut self.document, Command::ReplaceDocument { document })?;
                    self.cursor = None;
                } else {
                    debug!("Source edit is equivalent to the document, nothing committed");
                }
                debug!("Left source editing");
            }
        }
        Ok(())
    }

    /// The source text while source editing is active.
    pub fn source_text(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Replaces the source text while source editing is active.
    pub fn set_source_text(&mut self, text: impl Into<String>) -> EditorResult<()> {
        match self.source.as_mut() {
            Some(source) => {
                *source = text.into();
                Ok(())
            }
            None => Err(EditorError::CommandDisabled(EditorCommand::Source)),
        }
    }
}

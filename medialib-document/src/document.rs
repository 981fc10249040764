//! Block-level document model.

use crate::embed::EmbedNode;
use crate::error::{MarkupError, MarkupResult};
use crate::markup::{scan_element, to_markup, OPEN_TAG};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// One top-level block of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Block {
    /// Inline markup kept verbatim.
    Paragraph(String),
    /// An embedded catalog item.
    Embed(EmbedNode),
    /// Embed markup that failed to parse, kept verbatim and flagged.
    Unparsed { source: String, reason: String },
}

impl Block {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph(text.into())
    }

    pub fn as_embed(&self) -> Option<&EmbedNode> {
        match self {
            Self::Embed(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_embed_mut(&mut self) -> Option<&mut EmbedNode> {
        match self {
            Self::Embed(node) => Some(node),
            _ => None,
        }
    }

    fn write_source(&self, out: &mut String) {
        match self {
            Self::Paragraph(text) => out.push_str(text),
            Self::Embed(node) => out.push_str(&to_markup(node)),
            Self::Unparsed { source, .. } => out.push_str(source),
        }
    }
}

/// An ordered sequence of blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Splits source markup into blocks.
    ///
    /// Malformed embeds become [`Block::Unparsed`]; loading never fails.
    pub fn from_source(source: &str) -> Self {
        let mut blocks = Vec::new();
        let mut rest = source;

        while let Some(start) = rest.find(OPEN_TAG) {
            if start > 0 {
                blocks.push(Block::Paragraph(rest[..start].to_string()));
            }
            let element = &rest[start..];
            let (result, len) = scan_element(element);
            let len = len.max(OPEN_TAG.len());
            match result {
                Ok(node) => blocks.push(Block::Embed(node)),
                Err(e) => {
                    warn!(offset = source.len() - element.len(), "Skipping embed: {}", e);
                    blocks.push(Block::Unparsed {
                        source: element[..len].to_string(),
                        reason: e.to_string(),
                    });
                }
            }
            rest = &element[len..];
        }
        if !rest.is_empty() {
            blocks.push(Block::Paragraph(rest.to_string()));
        }

        Self { blocks }
    }

    /// Serializes the document back to source markup.
    pub fn to_source(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            block.write_source(&mut out);
        }
        out
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Block> {
        self.blocks.get(index)
    }

    /// Inserts a block at `index` (`index == len` appends).
    pub fn insert(&mut self, index: usize, block: Block) -> MarkupResult<()> {
        if index > self.blocks.len() {
            return Err(self.out_of_range(index));
        }
        self.blocks.insert(index, block);
        Ok(())
    }

    /// Removes and returns the block at `index`.
    pub fn remove(&mut self, index: usize) -> MarkupResult<Block> {
        if index >= self.blocks.len() {
            return Err(self.out_of_range(index));
        }
        Ok(self.blocks.remove(index))
    }

    pub fn embed_mut(&mut self, index: usize) -> Option<&mut EmbedNode> {
        self.blocks.get_mut(index).and_then(Block::as_embed_mut)
    }

    /// Embedded nodes in document order.
    pub fn embeds(&self) -> Vec<&EmbedNode> {
        self.blocks.iter().filter_map(Block::as_embed).collect()
    }

    /// Indices of blocks flagged as unparseable.
    pub fn unparsed(&self) -> Vec<usize> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, b)| matches!(b, Block::Unparsed { .. }))
            .map(|(i, _)| i)
            .collect()
    }

    fn out_of_range(&self, index: usize) -> MarkupError {
        MarkupError::OutOfRange {
            index,
            len: self.blocks.len(),
        }
    }
}

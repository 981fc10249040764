//! Editor toolbar configuration and its validation against a filter format.

use crate::allow_list::AllowList;
use crate::settings::FilterFormat;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Toolbar items understood by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolbarItem {
    DrupalMedia,
    SourceEditing,
    Undo,
    Redo,
}

impl ToolbarItem {
    /// Configuration identifier.
    pub const fn id(&self) -> &'static str {
        match self {
            Self::DrupalMedia => "drupalMedia",
            Self::SourceEditing => "sourceEditing",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }
}

impl fmt::Display for ToolbarItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ToolbarItem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "drupalMedia" => Ok(Self::DrupalMedia),
            "sourceEditing" => Ok(Self::SourceEditing),
            "undo" => Ok(Self::Undo),
            "redo" => Ok(Self::Redo),
            other => Err(other.to_string()),
        }
    }
}

/// Editor configuration attached to a text format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// The text format this editor is bound to.
    pub format: String,
    #[serde(default)]
    pub toolbar: Vec<String>,
    /// Extra tags allowed while editing source.
    #[serde(default)]
    pub source_editing_allowed_tags: Vec<String>,
}

impl EditorConfig {
    pub fn new(format: impl Into<String>, toolbar: &[ToolbarItem]) -> Self {
        Self {
            format: format.into(),
            toolbar: toolbar.iter().map(|i| i.id().to_string()).collect(),
            source_editing_allowed_tags: Vec::new(),
        }
    }

    /// Known toolbar items in configured order. Unknown ids are skipped.
    pub fn toolbar_items(&self) -> Vec<ToolbarItem> {
        self.toolbar.iter().filter_map(|s| s.parse().ok()).collect()
    }

    pub fn has_item(&self, item: ToolbarItem) -> bool {
        self.toolbar.iter().any(|s| s == item.id())
    }
}

/// Checks that an editor configuration can run on a filter format.
///
/// Returns human-readable violations; an empty list means the pair is valid.
pub fn validate_pair(editor: &EditorConfig, format: &FilterFormat) -> Vec<String> {
    let mut violations = Vec::new();

    if editor.format != format.id {
        violations.push(format!(
            "The editor is configured for text format '{}' but was paired with '{}'.",
            editor.format, format.id
        ));
    }

    let mut seen = HashSet::new();
    for id in &editor.toolbar {
        if id.parse::<ToolbarItem>().is_err() {
            violations.push(format!("The toolbar item '{id}' is not available."));
        }
        if !seen.insert(id.as_str()) {
            violations.push(format!("The toolbar item '{id}' is listed more than once."));
        }
    }

    let media_embed = format.media_embed();
    if editor.has_item(ToolbarItem::DrupalMedia) {
        if !media_embed.status {
            violations.push(
                "The Drupal Media toolbar item requires the Embed media filter to be enabled."
                    .to_string(),
            );
        } else if let Err(e) = AllowList::from_settings(media_embed) {
            violations.push(format!("The Embed media filter settings are invalid: {e}"));
        }
    }

    violations
}

use std::fmt;
use std::str::FromStr;

/// Named toolbar commands, addressed by their button label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditorCommand {
    InsertMedia,
    Source,
    Undo,
    Redo,
}

impl EditorCommand {
    pub const ALL: [EditorCommand; 4] = [
        EditorCommand::InsertMedia,
        EditorCommand::Source,
        EditorCommand::Undo,
        EditorCommand::Redo,
    ];

    /// Button label.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::InsertMedia => "Insert Drupal Media",
            Self::Source => "Source",
            Self::Undo => "Undo",
            Self::Redo => "Redo",
        }
    }
}

impl fmt::Display for EditorCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EditorCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| format!("unknown editor command '{s}'"))
    }
}

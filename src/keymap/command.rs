//! Command enum: every action a keystroke can trigger
//!
//! Commands fall into three classes: buffer mutations (undo, line edits,
//! wrapping), UI-state toggles (search panel, go-to-line), and derived-value
//! side effects (document stats). Execution lives in [`crate::edit`].

use std::str::FromStr;

/// Paired Markdown markers for wrapping the current selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    Bold,
    Italic,
    Strikethrough,
    Code,
}

impl Marker {
    /// The literal marker text placed on both sides of the selection
    pub fn text(self) -> &'static str {
        match self {
            Marker::Bold => "**",
            Marker::Italic => "*",
            Marker::Strikethrough => "~~",
            Marker::Code => "`",
        }
    }
}

/// Literal snippets inserted at the caret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Snippet {
    HorizontalRule,
    CodeFence,
}

impl Snippet {
    pub fn text(self) -> &'static str {
        match self {
            Snippet::HorizontalRule => "\n---\n",
            Snippet::CodeFence => "\n```\n\n```\n",
        }
    }
}

/// All executable commands that can be bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // ========================================================================
    // Buffer mutations
    // ========================================================================
    /// Undo last edit
    Undo,
    /// Redo last undone edit
    Redo,
    /// Delete the current line
    DeleteLine,
    /// Duplicate the current line below itself
    DuplicateLine,
    /// Swap the current line with the one above
    MoveLineUp,
    /// Swap the current line with the one below
    MoveLineDown,
    /// Prepend two spaces to every line touched by the selection
    IndentLines,
    /// Strip leading indentation from every line touched by the selection
    OutdentLines,
    /// Wrap the selection with paired Markdown markers
    Wrap(Marker),
    /// Insert a literal snippet at the caret
    Insert(Snippet),

    // ========================================================================
    // UI-state toggles
    // ========================================================================
    /// Open the search panel
    OpenSearch,
    /// Open the go-to-line dialog
    OpenGotoLine,
    /// Select the entire document
    SelectAll,

    // ========================================================================
    // Derived-value side effects
    // ========================================================================
    /// Show word/char/line counts as a transient toast
    ShowDocumentStats,
}

impl Command {
    /// Stable name used in keymap YAML files
    pub fn name(&self) -> &'static str {
        match self {
            Command::Undo => "Undo",
            Command::Redo => "Redo",
            Command::DeleteLine => "DeleteLine",
            Command::DuplicateLine => "DuplicateLine",
            Command::MoveLineUp => "MoveLineUp",
            Command::MoveLineDown => "MoveLineDown",
            Command::IndentLines => "IndentLines",
            Command::OutdentLines => "OutdentLines",
            Command::Wrap(Marker::Bold) => "WrapBold",
            Command::Wrap(Marker::Italic) => "WrapItalic",
            Command::Wrap(Marker::Strikethrough) => "WrapStrikethrough",
            Command::Wrap(Marker::Code) => "WrapCode",
            Command::Insert(Snippet::HorizontalRule) => "InsertHorizontalRule",
            Command::Insert(Snippet::CodeFence) => "InsertCodeFence",
            Command::OpenSearch => "OpenSearch",
            Command::OpenGotoLine => "OpenGotoLine",
            Command::SelectAll => "SelectAll",
            Command::ShowDocumentStats => "ShowDocumentStats",
        }
    }
}

impl FromStr for Command {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Undo" => Ok(Command::Undo),
            "Redo" => Ok(Command::Redo),
            "DeleteLine" => Ok(Command::DeleteLine),
            "DuplicateLine" => Ok(Command::DuplicateLine),
            "MoveLineUp" => Ok(Command::MoveLineUp),
            "MoveLineDown" => Ok(Command::MoveLineDown),
            "IndentLines" => Ok(Command::IndentLines),
            "OutdentLines" => Ok(Command::OutdentLines),
            "WrapBold" => Ok(Command::Wrap(Marker::Bold)),
            "WrapItalic" => Ok(Command::Wrap(Marker::Italic)),
            "WrapStrikethrough" => Ok(Command::Wrap(Marker::Strikethrough)),
            "WrapCode" => Ok(Command::Wrap(Marker::Code)),
            "InsertHorizontalRule" => Ok(Command::Insert(Snippet::HorizontalRule)),
            "InsertCodeFence" => Ok(Command::Insert(Snippet::CodeFence)),
            "OpenSearch" => Ok(Command::OpenSearch),
            "OpenGotoLine" => Ok(Command::OpenGotoLine),
            "SelectAll" => Ok(Command::SelectAll),
            "ShowDocumentStats" => Ok(Command::ShowDocumentStats),
            _ => Err(()),
        }
    }
}

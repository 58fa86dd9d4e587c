//! Document buffer adapter
//!
//! Thin facade over the text storage that the rest of the core talks to.
//! [`DocumentBuffer`] is the seam for embedding a real editing widget;
//! [`TextBuffer`] is the rope-backed implementation used standalone and in
//! tests. All offsets are character (Unicode scalar) positions, all line
//! numbers are 1-indexed.

use ropey::Rope;

/// A selection range over the buffer, `anchor` fixed and `head` moving.
///
/// A caret is a selection with `anchor == head`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: usize,
    pub head: usize,
}

impl Selection {
    /// Caret selection at a single offset
    pub fn caret(offset: usize) -> Self {
        Self {
            anchor: offset,
            head: offset,
        }
    }

    /// Selection spanning a range, head at the end
    pub fn range(from: usize, to: usize) -> Self {
        Self {
            anchor: from,
            head: to,
        }
    }

    /// Lower bound of the selection
    pub fn from(&self) -> usize {
        self.anchor.min(self.head)
    }

    /// Upper bound of the selection
    pub fn to(&self) -> usize {
        self.anchor.max(self.head)
    }

    /// True when the selection is a caret (selects nothing)
    pub fn is_empty(&self) -> bool {
        self.anchor == self.head
    }
}

/// A single atomic text mutation: replace `[from, to)` with `insert`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    pub from: usize,
    pub to: usize,
    pub insert: String,
}

impl Change {
    pub fn new(from: usize, to: usize, insert: impl Into<String>) -> Self {
        Self {
            from,
            to,
            insert: insert.into(),
        }
    }

    /// Pure insertion at an offset
    pub fn insert_at(offset: usize, text: impl Into<String>) -> Self {
        Self::new(offset, offset, text)
    }
}

/// Resolved information about one document line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineInfo {
    /// 1-indexed line number
    pub number: usize,
    /// Char offset of the line start
    pub from: usize,
    /// Char offset of the line end (excluding the newline)
    pub to: usize,
    /// Line text without the trailing newline
    pub text: String,
}

/// The buffer surface the core components consume.
///
/// One `dispatch` produces exactly one new revision; callers must pass
/// in-range offsets (out-of-range is a programming error, not a handled
/// condition).
pub trait DocumentBuffer {
    /// Current selection
    fn selection(&self) -> Selection;

    /// Text in `[from, to)`
    fn slice_text(&self, from: usize, to: usize) -> String;

    /// Line containing the given char offset
    fn line_at(&self, offset: usize) -> LineInfo;

    /// Line by 1-indexed number
    fn line(&self, number: usize) -> LineInfo;

    /// Number of lines, always >= 1
    fn line_count(&self) -> usize;

    /// Full document text snapshot
    fn text(&self) -> String;

    /// Total length in chars
    fn len_chars(&self) -> usize;

    /// Monotonic revision counter, bumped once per dispatch
    fn revision(&self) -> u64;

    /// Apply one change atomically, optionally moving the selection.
    ///
    /// When `new_selection` is `None` the caret collapses to the end of the
    /// inserted text.
    fn dispatch(&mut self, change: Change, new_selection: Option<Selection>);

    /// Set the selection without mutating text (does not bump the revision)
    fn set_selection(&mut self, selection: Selection);

    /// Move the caret to the start of a 1-indexed line (clamped)
    fn move_cursor_to_line(&mut self, line: usize);

    /// Undo the most recent dispatch; false when there is nothing to undo
    fn undo(&mut self) -> bool;

    /// Redo the most recently undone dispatch; false when the redo stack
    /// is empty
    fn redo(&mut self) -> bool;
}

/// One undoable edit: enough to restore either side of a dispatch
#[derive(Debug, Clone)]
struct EditRecord {
    from: usize,
    removed: String,
    inserted: String,
    selection_before: Selection,
    selection_after: Selection,
}

/// Rope-backed [`DocumentBuffer`] with undo/redo history.
#[derive(Debug, Clone)]
pub struct TextBuffer {
    rope: Rope,
    selection: Selection,
    revision: u64,
    undo_stack: Vec<EditRecord>,
    redo_stack: Vec<EditRecord>,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::with_text("")
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::default(),
            revision: 0,
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    fn line_info(&self, line_idx: usize) -> LineInfo {
        let from = self.rope.line_to_char(line_idx);
        let line = self.rope.line(line_idx);
        let mut text = line.to_string();
        while text.ends_with('\n') || text.ends_with('\r') {
            text.pop();
        }
        LineInfo {
            number: line_idx + 1,
            from,
            to: from + text.chars().count(),
            text,
        }
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentBuffer for TextBuffer {
    fn selection(&self) -> Selection {
        self.selection
    }

    fn slice_text(&self, from: usize, to: usize) -> String {
        debug_assert!(from <= to && to <= self.rope.len_chars());
        self.rope.slice(from..to).to_string()
    }

    fn line_at(&self, offset: usize) -> LineInfo {
        debug_assert!(offset <= self.rope.len_chars());
        self.line_info(self.rope.char_to_line(offset))
    }

    fn line(&self, number: usize) -> LineInfo {
        debug_assert!(number >= 1 && number <= self.line_count());
        self.line_info(number - 1)
    }

    fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    fn text(&self) -> String {
        self.rope.to_string()
    }

    fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    fn revision(&self) -> u64 {
        self.revision
    }

    fn dispatch(&mut self, change: Change, new_selection: Option<Selection>) {
        debug_assert!(change.from <= change.to && change.to <= self.rope.len_chars());

        let removed = self.rope.slice(change.from..change.to).to_string();
        let selection_before = self.selection;

        self.rope.remove(change.from..change.to);
        self.rope.insert(change.from, &change.insert);

        let inserted_len = change.insert.chars().count();
        let selection_after =
            new_selection.unwrap_or_else(|| Selection::caret(change.from + inserted_len));
        debug_assert!(selection_after.to() <= self.rope.len_chars());

        self.selection = selection_after;
        self.revision += 1;
        self.undo_stack.push(EditRecord {
            from: change.from,
            removed,
            inserted: change.insert,
            selection_before,
            selection_after,
        });
        self.redo_stack.clear();
    }

    fn set_selection(&mut self, selection: Selection) {
        debug_assert!(selection.to() <= self.rope.len_chars());
        self.selection = selection;
    }

    fn move_cursor_to_line(&mut self, line: usize) {
        let clamped = line.clamp(1, self.line_count());
        let from = self.rope.line_to_char(clamped - 1);
        self.selection = Selection::caret(from);
    }

    fn undo(&mut self) -> bool {
        let Some(record) = self.undo_stack.pop() else {
            return false;
        };
        let inserted_len = record.inserted.chars().count();
        self.rope.remove(record.from..record.from + inserted_len);
        self.rope.insert(record.from, &record.removed);
        self.selection = record.selection_before;
        self.revision += 1;
        self.redo_stack.push(record);
        true
    }

    fn redo(&mut self) -> bool {
        let Some(record) = self.redo_stack.pop() else {
            return false;
        };
        let removed_len = record.removed.chars().count();
        self.rope.remove(record.from..record.from + removed_len);
        self.rope.insert(record.from, &record.inserted);
        self.selection = record.selection_after;
        self.revision += 1;
        self.undo_stack.push(record);
        true
    }
}

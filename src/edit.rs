//! Command execution against the document buffer
//!
//! Resolves keystrokes through the keymap and applies the bound command.
//! Buffer-mutation commands issue at most one dispatch; UI toggles and
//! derived values are returned to the caller as [`UiAction`]s. A handled
//! keystroke is the caller's cue to suppress the platform's native
//! behavior for the same chord.

use crate::buffer::{Change, DocumentBuffer, Selection};
use crate::keymap::{Command, Keymap, Keystroke, Marker, Snippet};
use crate::util::count_words;

/// Outcome of feeding a keystroke to the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDispatch {
    /// A binding matched and ran; suppress the native default
    Handled(Option<UiAction>),
    /// No binding for this keystroke; let it through
    NotHandled,
}

/// Side effects the embedding UI performs on the caller's behalf
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    OpenSearch,
    OpenGotoLine,
    ShowStats(DocumentStats),
}

/// Word/char/line counts for the stats toast
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub words: usize,
    pub chars: usize,
    pub lines: usize,
}

/// Resolve a keystroke and execute the bound command
pub fn dispatch_key(
    keymap: &Keymap,
    keystroke: Keystroke,
    buffer: &mut dyn DocumentBuffer,
) -> KeyDispatch {
    match keymap.lookup(keystroke) {
        Some(command) => {
            tracing::debug!("keystroke {} -> {}", keystroke, command.name());
            KeyDispatch::Handled(apply_command(command, buffer))
        }
        None => KeyDispatch::NotHandled,
    }
}

/// Execute one command against the buffer
pub fn apply_command(command: Command, buffer: &mut dyn DocumentBuffer) -> Option<UiAction> {
    match command {
        Command::Undo => {
            buffer.undo();
        }
        Command::Redo => {
            buffer.redo();
        }
        Command::DeleteLine => delete_line(buffer),
        Command::DuplicateLine => duplicate_line(buffer),
        Command::MoveLineUp => move_line_up(buffer),
        Command::MoveLineDown => move_line_down(buffer),
        Command::IndentLines => indent_lines(buffer),
        Command::OutdentLines => outdent_lines(buffer),
        Command::Wrap(marker) => wrap_selection(buffer, marker),
        Command::Insert(snippet) => insert_snippet(buffer, snippet),
        Command::SelectAll => {
            buffer.set_selection(Selection::range(0, buffer.len_chars()));
        }
        Command::OpenSearch => return Some(UiAction::OpenSearch),
        Command::OpenGotoLine => return Some(UiAction::OpenGotoLine),
        Command::ShowDocumentStats => {
            let text = buffer.text();
            return Some(UiAction::ShowStats(DocumentStats {
                words: count_words(&text),
                chars: text.chars().count(),
                lines: buffer.line_count(),
            }));
        }
    }
    None
}

/// Line numbers touched by the current selection, even partially
fn touched_lines(buffer: &dyn DocumentBuffer) -> (usize, usize) {
    let selection = buffer.selection();
    (
        buffer.line_at(selection.from()).number,
        buffer.line_at(selection.to()).number,
    )
}

fn delete_line(buffer: &mut dyn DocumentBuffer) {
    let line = buffer.line_at(buffer.selection().head);
    // include the trailing newline, or the preceding one for the last line
    let (from, to) = if line.to < buffer.len_chars() {
        (line.from, line.to + 1)
    } else if line.from > 0 {
        (line.from - 1, line.to)
    } else {
        (line.from, line.to)
    };
    // single empty line: nothing to delete, do not dispatch
    if from == to {
        return;
    }
    let caret = from.min(buffer.len_chars() - (to - from));
    buffer.dispatch(Change::new(from, to, ""), Some(Selection::caret(caret)));
}

fn duplicate_line(buffer: &mut dyn DocumentBuffer) {
    let selection = buffer.selection();
    let line = buffer.line_at(selection.head);
    buffer.dispatch(
        Change::insert_at(line.to, format!("\n{}", line.text)),
        Some(selection),
    );
}

fn move_line_up(buffer: &mut dyn DocumentBuffer) {
    let head = buffer.selection().head;
    let line = buffer.line_at(head);
    if line.number == 1 {
        return;
    }
    let above = buffer.line(line.number - 1);
    let column = head - line.from;
    buffer.dispatch(
        Change::new(above.from, line.to, format!("{}\n{}", line.text, above.text)),
        Some(Selection::caret(above.from + column)),
    );
}

fn move_line_down(buffer: &mut dyn DocumentBuffer) {
    let head = buffer.selection().head;
    let line = buffer.line_at(head);
    if line.number == buffer.line_count() {
        return;
    }
    let below = buffer.line(line.number + 1);
    let column = head - line.from;
    let below_len = below.text.chars().count();
    buffer.dispatch(
        Change::new(line.from, below.to, format!("{}\n{}", below.text, line.text)),
        Some(Selection::caret(line.from + below_len + 1 + column)),
    );
}

/// Prepend two spaces to every touched line
fn indent_lines(buffer: &mut dyn DocumentBuffer) {
    let selection = buffer.selection();
    let (first, last) = touched_lines(buffer);

    let mut new_text = String::new();
    let mut starts = Vec::with_capacity(last - first + 1);
    for number in first..=last {
        let line = buffer.line(number);
        starts.push(line.from);
        if number > first {
            new_text.push('\n');
        }
        new_text.push_str("  ");
        new_text.push_str(&line.text);
    }

    let shift = |offset: usize| offset + 2 * starts.iter().filter(|s| **s <= offset).count();
    let new_selection = Selection {
        anchor: shift(selection.anchor),
        head: shift(selection.head),
    };

    let span_from = buffer.line(first).from;
    let span_to = buffer.line(last).to;
    buffer.dispatch(Change::new(span_from, span_to, new_text), Some(new_selection));
}

/// Strip a leading two-space run, else one leading tab, from every touched
/// line; overall no-op when no touched line has removable indentation.
fn outdent_lines(buffer: &mut dyn DocumentBuffer) {
    let selection = buffer.selection();
    let (first, last) = touched_lines(buffer);

    let mut new_text = String::new();
    // (old line start, removed char count) per touched line
    let mut removals = Vec::with_capacity(last - first + 1);
    for number in first..=last {
        let line = buffer.line(number);
        let removed = if line.text.starts_with("  ") {
            2
        } else if line.text.starts_with('\t') {
            1
        } else {
            0
        };
        removals.push((line.from, removed));
        if number > first {
            new_text.push('\n');
        }
        new_text.push_str(&line.text.chars().skip(removed).collect::<String>());
    }

    if removals.iter().all(|(_, r)| *r == 0) {
        return;
    }

    let shift = |offset: usize| {
        let reduction: usize = removals
            .iter()
            .map(|(start, removed)| (offset.saturating_sub(*start)).min(*removed))
            .sum();
        offset - reduction
    };
    let new_selection = Selection {
        anchor: shift(selection.anchor),
        head: shift(selection.head),
    };

    let span_from = buffer.line(first).from;
    let span_to = buffer.line(last).to;
    buffer.dispatch(Change::new(span_from, span_to, new_text), Some(new_selection));
}

/// Wrap the selection with paired markers; a caret gets an empty pair with
/// the cursor parked between them.
fn wrap_selection(buffer: &mut dyn DocumentBuffer, marker: Marker) {
    let selection = buffer.selection();
    let m = marker.text();
    let m_len = m.chars().count();
    let inner = buffer.slice_text(selection.from(), selection.to());

    // the leading marker lands before both ends, so each shifts by one
    // marker length and the selection keeps its orientation
    buffer.dispatch(
        Change::new(selection.from(), selection.to(), format!("{m}{inner}{m}")),
        Some(Selection {
            anchor: selection.anchor + m_len,
            head: selection.head + m_len,
        }),
    );
}

fn insert_snippet(buffer: &mut dyn DocumentBuffer, snippet: Snippet) {
    let selection = buffer.selection();
    buffer.dispatch(
        Change::new(selection.from(), selection.to(), snippet.text()),
        None,
    );
}

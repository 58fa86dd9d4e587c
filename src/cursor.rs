//! Cursor/selection tracker for status display
//!
//! Derives line, column and selection word count from the buffer's
//! selection head. Events only mark the tracker dirty; the actual
//! recomputation happens once per animation frame, coalescing bursts
//! (drag-selection, key repeat) into a single update.

use crate::buffer::DocumentBuffer;
use crate::util::count_words;

/// Read-only projection of the buffer's selection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorPosition {
    /// 1-indexed line of the selection head
    pub line: usize,
    /// 1-indexed char column of the selection head
    pub column: usize,
    /// Words in the selection, 0 for a caret
    pub selected_word_count: usize,
}

impl Default for CursorPosition {
    fn default() -> Self {
        Self {
            line: 1,
            column: 1,
            selected_word_count: 0,
        }
    }
}

/// Tracks the cursor position, recomputing at most once per frame.
///
/// The tracker starts detached and ignores frames until the editing surface
/// reports ready via [`attach`](Self::attach); there is no polling loop.
#[derive(Debug, Clone, Default)]
pub struct CursorTracker {
    attached: bool,
    dirty: bool,
    position: CursorPosition,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The editing surface is mounted; begin tracking.
    ///
    /// Marks dirty so the first frame after attach produces a position.
    pub fn attach(&mut self) {
        self.attached = true;
        self.dirty = true;
    }

    /// Stop tracking (surface unmounted). Pending work is dropped.
    pub fn detach(&mut self) {
        self.attached = false;
        self.dirty = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Note a selection-affecting event (selection change, click, key-up,
    /// focus, mouse-up). Cheap; the recomputation is deferred to the frame.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Last computed position
    pub fn position(&self) -> CursorPosition {
        self.position
    }

    /// Advance one frame: recompute if dirty and attached.
    ///
    /// Returns `Some` only when a fresh position was computed, so callers
    /// can redraw the status display exactly when something changed.
    pub fn on_frame(&mut self, buffer: &dyn DocumentBuffer) -> Option<CursorPosition> {
        if !self.attached || !self.dirty {
            return None;
        }
        self.dirty = false;

        let selection = buffer.selection();
        let line = buffer.line_at(selection.head);
        let selected_word_count = if selection.is_empty() {
            0
        } else {
            count_words(&buffer.slice_text(selection.from(), selection.to()))
        };

        self.position = CursorPosition {
            line: line.number,
            column: selection.head - line.from + 1,
            selected_word_count,
        };
        Some(self.position)
    }
}

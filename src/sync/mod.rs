//! Bidirectional editor/preview scroll synchronization
//!
//! Keeps the visual "current line" of the two panes approximately aligned
//! with smooth interpolation instead of instantaneous jumps. Each direction
//! runs its own [`PaneSync`] state machine; the [`ScrollSynchronizer`]
//! coordinator wires them together over a [`SyncBus`] and also handles
//! click-to-seek and flush requests. Synchronization is best-effort: an
//! unmeasurable line degrades to ratio alignment and editing is never
//! blocked.

mod bus;
mod pane;

pub use bus::{SyncBus, SyncEvent};
pub use pane::{PaneSync, PaneView, ScrollEvent, SMOOTHING, SNAP_EPSILON};

use std::time::{Duration, Instant};

use crate::buffer::DocumentBuffer;
use crate::util::Debouncer;

/// Coordinates both synchronization directions plus seek and flush.
///
/// Frame-driven: the host calls [`on_frame`](Self::on_frame) once per
/// animation frame while it returns true, then stops scheduling; a new
/// cross-pane event restarts the loop. [`detach`](Self::detach) cancels all
/// in-flight work before the views go away.
#[derive(Debug, Clone)]
pub struct ScrollSynchronizer {
    /// Owns the editor view: classifies its scroll events and drives it
    /// toward preview positions
    editor: PaneSync,
    /// Owns the preview view: classifies its scroll events and drives it
    /// toward editor positions
    preview: PaneSync,
    enabled: bool,
    attached: bool,
    /// Pending debounced content commit, flushed on demand
    commit: Debouncer,
}

impl ScrollSynchronizer {
    /// Default quiet period before a content edit is committed downstream
    pub const COMMIT_DELAY: Duration = Duration::from_millis(300);

    pub fn new() -> Self {
        Self {
            editor: PaneSync::new(),
            preview: PaneSync::new(),
            enabled: true,
            attached: true,
            commit: Debouncer::new(Self::COMMIT_DELAY),
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable synchronization. Disabling cancels any in-flight
    /// drive; seek and flush keep working.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled != enabled {
            self.enabled = enabled;
            if !enabled {
                self.editor.cancel();
                self.preview.cancel();
            }
            tracing::info!(
                "Preview scroll sync: {}",
                if enabled { "enabled" } else { "disabled" }
            );
        }
    }

    /// The editor pane reported a scroll event from its own view.
    ///
    /// The editor-side state machine classifies it (user input vs echo of
    /// its own write) and genuine scrolls are published for the preview.
    pub fn on_editor_scroll<V: PaneView + ?Sized>(&mut self, view: &V, bus: &mut SyncBus) {
        if !self.attached {
            return;
        }
        if let Some(event) = self.editor.on_own_scroll(view) {
            if self.enabled {
                bus.publish(SyncEvent::EditorScrolled(event));
            }
        }
    }

    /// The preview pane reported a scroll event from its own view
    pub fn on_preview_scroll<V: PaneView + ?Sized>(&mut self, view: &V, bus: &mut SyncBus) {
        if !self.attached {
            return;
        }
        if let Some(event) = self.preview.on_own_scroll(view) {
            if self.enabled {
                bus.publish(SyncEvent::PreviewScrolled(event));
            }
        }
    }

    /// A content edit happened; arm the debounced commit
    pub fn note_content_edit(&mut self, now: Instant) {
        self.commit.touch(now);
    }

    /// True once when the commit quiet period has elapsed
    pub fn poll_commit(&mut self, now: Instant) -> bool {
        self.commit.poll(now)
    }

    /// Drain the bus, applying each event in arrival order.
    ///
    /// Scroll events retarget the opposite pane; `SeekToLine` bypasses the
    /// interpolation machinery and moves the cursor instantly; a
    /// `FlushRequest` fires the pending commit. Returns true when a commit
    /// flush fired, so the caller can grab the latest text (e.g. before an
    /// export).
    pub fn pump<E, P>(
        &mut self,
        bus: &mut SyncBus,
        editor_view: &E,
        preview_view: &P,
        buffer: &mut dyn DocumentBuffer,
    ) -> bool
    where
        E: PaneView + ?Sized,
        P: PaneView + ?Sized,
    {
        let mut flushed = false;
        while let Some(event) = bus.pop() {
            if !self.attached {
                continue;
            }
            match event {
                SyncEvent::EditorScrolled(ev) => {
                    if self.enabled {
                        self.preview.drive_to(preview_view, &ev);
                    }
                }
                SyncEvent::PreviewScrolled(ev) => {
                    if self.enabled {
                        self.editor.drive_to(editor_view, &ev);
                    }
                }
                SyncEvent::SeekToLine(line) => {
                    buffer.move_cursor_to_line(line);
                }
                SyncEvent::FlushRequest => {
                    flushed |= self.commit.flush();
                }
            }
        }
        flushed
    }

    /// Advance both interpolations one frame.
    ///
    /// Returns true while either pane is still driving; the host keeps
    /// scheduling frames only until this returns false.
    pub fn on_frame<E, P>(&mut self, editor_view: &mut E, preview_view: &mut P) -> bool
    where
        E: PaneView + ?Sized,
        P: PaneView + ?Sized,
    {
        if !self.attached {
            return false;
        }
        let editor_active = self.editor.on_frame(editor_view);
        let preview_active = self.preview.on_frame(preview_view);
        editor_active || preview_active
    }

    /// Tear down before the views are unmounted: cancels in-flight
    /// interpolation and the pending commit. Subsequent frames are no-ops.
    pub fn detach(&mut self) {
        self.attached = false;
        self.editor.cancel();
        self.preview.cancel();
        self.commit.cancel();
    }
}

impl Default for ScrollSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

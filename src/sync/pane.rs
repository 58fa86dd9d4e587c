//! Per-pane scroll state machine
//!
//! Each synchronization direction owns one [`PaneSync`] driving one
//! [`PaneView`]. The machine distinguishes genuine user scrolls from the
//! scroll events its own programmatic writes generate: only Idle panes
//! forward events, a Driving pane is being animated, and a Suppressed pane
//! swallows exactly one event (the echo of the final snap) before
//! returning to Idle.

/// Exponential interpolation factor per frame; lower is smoother/slower
pub const SMOOTHING: f64 = 0.15;

/// Distance at which the interpolation snaps to the target
pub const SNAP_EPSILON: f64 = 0.5;

/// Geometry and line measurement for one scrollable pane.
///
/// The seam for the editor widget and the preview DOM. `line_top` reports
/// the measured vertical offset of a source line's top relative to the
/// pane's visible top (negative when above it), or `None` when the line is
/// out of rendered range or the mapping transiently fails during re-layout.
pub trait PaneView {
    fn scroll_top(&self) -> f64;
    fn set_scroll_top(&mut self, top: f64);
    fn scroll_height(&self) -> f64;
    fn client_height(&self) -> f64;
    /// Offset of a 1-indexed source line's top from the visible top
    fn line_top(&self, line: usize) -> Option<f64>;
    /// Source line at the fixed anchor point near the top of the viewport
    fn line_at_anchor(&self) -> Option<usize>;
}

/// A user scroll observed on one pane, forwarded to its peer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollEvent {
    /// Fractional scroll position, 0 when the pane has no overflow
    pub ratio: f64,
    /// Source line at the viewport anchor, when resolvable
    pub line: Option<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum SyncPhase {
    Idle,
    Driving { target: f64 },
    Suppressed,
}

/// State machine for one synchronization direction.
#[derive(Debug, Clone)]
pub struct PaneSync {
    phase: SyncPhase,
}

impl PaneSync {
    pub fn new() -> Self {
        Self {
            phase: SyncPhase::Idle,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.phase, SyncPhase::Idle)
    }

    pub fn is_driving(&self) -> bool {
        matches!(self.phase, SyncPhase::Driving { .. })
    }

    /// Handle a scroll event emitted by this pane's own view.
    ///
    /// Returns the event to forward to the peer when the scroll is genuine
    /// user input. Programmatic scrolls (Driving) produce nothing, and the
    /// first event after a completed drive (Suppressed) is swallowed as the
    /// anti-echo guard.
    pub fn on_own_scroll<V: PaneView + ?Sized>(&mut self, view: &V) -> Option<ScrollEvent> {
        match self.phase {
            SyncPhase::Suppressed => {
                self.phase = SyncPhase::Idle;
                None
            }
            SyncPhase::Driving { .. } => None,
            SyncPhase::Idle => {
                let overflow = view.scroll_height() - view.client_height();
                let ratio = if overflow > 0.0 {
                    view.scroll_top() / overflow
                } else {
                    0.0
                };
                Some(ScrollEvent {
                    ratio,
                    line: view.line_at_anchor(),
                })
            }
        }
    }

    /// The peer pane scrolled: begin (or restart) driving toward it.
    ///
    /// Prefers a line-accurate target when the event carries a line the
    /// view can measure; otherwise falls back to ratio alignment. A drive
    /// already in flight is retargeted from the live offset, never queued.
    pub fn drive_to<V: PaneView + ?Sized>(&mut self, view: &V, event: &ScrollEvent) {
        let target = event
            .line
            .and_then(|line| view.line_top(line))
            .map(|delta| view.scroll_top() + delta)
            .unwrap_or_else(|| {
                let overflow = (view.scroll_height() - view.client_height()).max(0.0);
                event.ratio * overflow
            });
        self.phase = SyncPhase::Driving { target };
    }

    /// Advance the interpolation one animation frame.
    ///
    /// Returns true while still driving (the caller reschedules the frame
    /// loop); false once converged or idle, so the loop self-terminates.
    pub fn on_frame<V: PaneView + ?Sized>(&mut self, view: &mut V) -> bool {
        let SyncPhase::Driving { target } = self.phase else {
            return false;
        };
        let current = view.scroll_top();
        if (target - current).abs() < SNAP_EPSILON {
            view.set_scroll_top(target);
            self.phase = SyncPhase::Suppressed;
            false
        } else {
            view.set_scroll_top(current + (target - current) * SMOOTHING);
            true
        }
    }

    /// Abort any in-flight drive and return to Idle
    pub fn cancel(&mut self) {
        self.phase = SyncPhase::Idle;
    }
}

impl Default for PaneSync {
    fn default() -> Self {
        Self::new()
    }
}

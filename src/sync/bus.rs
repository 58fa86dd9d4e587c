//! Typed cross-pane event channel
//!
//! Replaces document-wide broadcast events with an explicit queue: anyone
//! can publish, the synchronizer drains in arrival order. Delivery is
//! asynchronous (queued, never re-entrant) but strictly ordered.

use std::collections::VecDeque;

use super::pane::ScrollEvent;

/// Application-wide signals the synchronizer consumes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncEvent {
    /// User scrolled the editor pane
    EditorScrolled(ScrollEvent),
    /// User scrolled the preview pane
    PreviewScrolled(ScrollEvent),
    /// Click-to-seek: move the cursor to a 1-indexed source line
    SeekToLine(usize),
    /// Flush any pending debounced content commit immediately
    FlushRequest,
}

/// FIFO channel for [`SyncEvent`]s
#[derive(Debug, Clone, Default)]
pub struct SyncBus {
    queue: VecDeque<SyncEvent>,
}

impl SyncBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&mut self, event: SyncEvent) {
        self.queue.push_back(event);
    }

    /// Next event in arrival order
    pub fn pop(&mut self) -> Option<SyncEvent> {
        self.queue.pop_front()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

//! Shared fixtures for integration tests

use std::sync::Once;

use markpane::buffer::{DocumentBuffer, Selection, TextBuffer};
use markpane::sync::PaneView;
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Route tracing through the test harness, filtered via RUST_LOG
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Buffer with the given text and a caret at an offset
pub fn test_buffer(text: &str, caret: usize) -> TextBuffer {
    init_tracing();
    let mut buffer = TextBuffer::with_text(text);
    buffer.set_selection(Selection::caret(caret));
    buffer
}

/// Scrollable pane with fixed geometry and uniform 20px line height
pub struct TestPane {
    pub top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

impl TestPane {
    pub fn new(scroll_height: f64, client_height: f64) -> Self {
        Self {
            top: 0.0,
            scroll_height,
            client_height,
        }
    }
}

impl PaneView for TestPane {
    fn scroll_top(&self) -> f64 {
        self.top
    }
    fn set_scroll_top(&mut self, top: f64) {
        self.top = top;
    }
    fn scroll_height(&self) -> f64 {
        self.scroll_height
    }
    fn client_height(&self) -> f64 {
        self.client_height
    }
    fn line_top(&self, line: usize) -> Option<f64> {
        Some((line as f64 - 1.0) * 20.0 - self.top)
    }
    fn line_at_anchor(&self) -> Option<usize> {
        Some((self.top / 20.0) as usize + 1)
    }
}

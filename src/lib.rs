//! markpane - split-pane Markdown editor core
//!
//! This crate provides the engine behind a two-pane Markdown authoring
//! tool: keeping an editor and a rendered preview logically aligned while
//! both scroll independently, and deterministic search/replace over the
//! live buffer. The editing widget and the Markdown renderer are external
//! collaborators behind the [`buffer::DocumentBuffer`] and
//! [`sync::PaneView`] seams.

pub mod buffer;
pub mod cursor;
pub mod edit;
pub mod keymap;
pub mod search;
pub mod sync;
pub mod util;

// Re-export commonly used types
pub use buffer::{Change, DocumentBuffer, Selection, TextBuffer};
pub use cursor::{CursorPosition, CursorTracker};
pub use edit::{dispatch_key, KeyDispatch, UiAction};
pub use keymap::{Command, Keymap, Keystroke};
pub use search::{SearchEngine, SearchMatch, SearchOptions};
pub use sync::{ScrollSynchronizer, SyncBus, SyncEvent};

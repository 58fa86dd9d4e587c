//! End-to-end flows across the buffer, keymap, cursor tracker and
//! scroll synchronizer

mod common;

use common::{test_buffer, TestPane};
use markpane::buffer::DocumentBuffer;
use markpane::cursor::CursorTracker;
use markpane::edit::{dispatch_key, KeyDispatch};
use markpane::keymap::{default_bindings, Keymap, Keystroke};
use markpane::sync::{ScrollSynchronizer, SyncBus, SyncEvent};

#[test]
fn test_keyboard_edit_updates_cursor_on_next_frame() {
    let mut buffer = test_buffer("# Title\nbody text", 8);
    let keymap = Keymap::with_bindings(default_bindings());
    let mut tracker = CursorTracker::new();
    tracker.attach();
    tracker.on_frame(&buffer);

    // duplicate the body line via its default binding
    let result = dispatch_key(&keymap, Keystroke::cmd_char('d'), &mut buffer);
    assert!(matches!(result, KeyDispatch::Handled(None)));
    assert_eq!(buffer.text(), "# Title\nbody text\nbody text");

    tracker.mark_dirty();
    let pos = tracker.on_frame(&buffer).unwrap();
    assert_eq!(pos.line, 2);
    assert_eq!(pos.column, 1);
}

#[test]
fn test_editor_scroll_aligns_preview_to_same_line() {
    let mut buffer = test_buffer("line\n".repeat(100).as_str(), 0);
    let mut sync = ScrollSynchronizer::new();
    let mut bus = SyncBus::new();
    // same document, different rendered heights
    let mut editor = TestPane::new(2000.0, 400.0);
    let mut preview = TestPane::new(2400.0, 400.0);

    editor.top = 600.0; // anchor line 31
    sync.on_editor_scroll(&editor, &mut bus);
    sync.pump(&mut bus, &editor, &preview, &mut buffer);
    while sync.on_frame(&mut editor, &mut preview) {}

    // both panes now show line 31 at their anchor
    assert_eq!(preview.top, 600.0);
    assert_eq!(editor.top, 600.0);
}

#[test]
fn test_click_to_seek_moves_cursor_instantly() {
    let mut buffer = test_buffer("alpha\nbravo\ncharlie", 0);
    let mut sync = ScrollSynchronizer::new();
    let mut bus = SyncBus::new();
    let editor = TestPane::new(100.0, 100.0);
    let preview = TestPane::new(100.0, 100.0);

    bus.publish(SyncEvent::SeekToLine(3));
    sync.pump(&mut bus, &editor, &preview, &mut buffer);

    let head = buffer.selection().head;
    assert_eq!(buffer.line_at(head).number, 3);
    assert_eq!(head, buffer.line(3).from);
}

#[test]
fn test_scroll_sync_round_trip_does_not_oscillate() {
    let mut buffer = test_buffer("x\n".repeat(200).as_str(), 0);
    let mut sync = ScrollSynchronizer::new();
    let mut bus = SyncBus::new();
    let mut editor = TestPane::new(4000.0, 400.0);
    let mut preview = TestPane::new(4000.0, 400.0);

    editor.top = 1000.0;
    sync.on_editor_scroll(&editor, &mut bus);
    sync.pump(&mut bus, &editor, &preview, &mut buffer);
    while sync.on_frame(&mut editor, &mut preview) {
        // the preview's programmatic movement emits scroll events; feeding
        // them back must not generate new bus traffic
        sync.on_preview_scroll(&preview, &mut bus);
        assert!(bus.is_empty(), "programmatic scroll echoed into the bus");
    }
    // the snap's own event is swallowed by the suppressed state too
    sync.on_preview_scroll(&preview, &mut bus);
    assert!(bus.is_empty());

    assert_eq!(preview.top, 1000.0);
    assert_eq!(editor.top, 1000.0);
}

#[test]
fn test_flush_before_export_commits_pending_edit() {
    use std::time::Instant;

    let mut buffer = test_buffer("draft", 0);
    let mut sync = ScrollSynchronizer::new();
    let mut bus = SyncBus::new();
    let editor = TestPane::new(100.0, 100.0);
    let preview = TestPane::new(100.0, 100.0);

    sync.note_content_edit(Instant::now());
    bus.publish(SyncEvent::FlushRequest);
    let flushed = sync.pump(&mut bus, &editor, &preview, &mut buffer);
    assert!(flushed, "export must see the latest text");
}

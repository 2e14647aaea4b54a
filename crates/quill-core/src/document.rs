//! Text document with a clamped selection
//!
//! Positions and lengths are counted in characters. Every operation is total:
//! out-of-range input is clamped, never rejected.
//!
//! Mutations do not touch the selection. After an insert, delete or replace
//! the selection may point past the end of the content until the next
//! [`TextDocument::select`] call; commands restore selection explicitly from
//! their snapshots.

use crate::events::{ChangeKind, ListenerId, Listeners, TextChanged};
use parking_lot::Mutex;
use std::sync::Arc;

/// Document shared between the application and its commands
pub type SharedDocument = Arc<Mutex<TextDocument>>;

/// Current selection, in characters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub length: usize,
}

impl Selection {
    pub fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn end(&self) -> usize {
        self.start + self.length
    }
}

/// Copy of the document state taken before a mutating command runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub content: String,
    pub selection: Selection,
}

/// The editable text buffer
#[derive(Debug, Default)]
pub struct TextDocument {
    content: String,
    selection: Selection,
    listeners: Listeners<TextChanged>,
}

impl TextDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with initial content and an empty selection
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            ..Self::default()
        }
    }

    /// Wrap into the shared handle used by commands
    pub fn into_shared(self) -> SharedDocument {
        Arc::new(Mutex::new(self))
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn selection_start(&self) -> usize {
        self.selection.start
    }

    pub fn selection_length(&self) -> usize {
        self.selection.length
    }

    /// Text covered by the selection, empty when nothing is selected
    ///
    /// A stale selection is clipped to the current content.
    pub fn selected_text(&self) -> String {
        if self.selection.is_empty() {
            return String::new();
        }
        self.content
            .chars()
            .skip(self.selection.start)
            .take(self.selection.length)
            .collect()
    }

    /// Select `length` characters from `start`, clamped into the content
    pub fn select(&mut self, start: usize, length: usize) {
        let len = self.len();
        let start = start.min(len);
        let length = length.min(len - start);
        self.selection = Selection { start, length };
    }

    /// Insert `text` at `position`. Empty text is a no-op.
    pub fn insert_text(&mut self, text: &str, position: usize) {
        if text.is_empty() {
            return;
        }

        let position = position.min(self.len());
        let mut content = self.content.clone();
        content.insert_str(char_to_byte_pos(&self.content, position), text);

        let old = self.set_content(content);
        self.notify(old, ChangeKind::Insert);
    }

    /// Delete `length` characters from `start`. Zero length is a no-op.
    pub fn delete_text(&mut self, start: usize, length: usize) {
        if length == 0 {
            return;
        }

        let (start_byte, end_byte) = self.clamped_byte_range(start, length);
        let mut content = self.content.clone();
        content.replace_range(start_byte..end_byte, "");

        let old = self.set_content(content);
        self.notify(old, ChangeKind::Delete);
    }

    /// Replace `length` characters from `start` with `text`
    pub fn replace_text(&mut self, text: &str, start: usize, length: usize) {
        let (start_byte, end_byte) = self.clamped_byte_range(start, length);
        let mut content = self.content.clone();
        content.replace_range(start_byte..end_byte, text);

        let old = self.set_content(content);
        self.notify(old, ChangeKind::Replace);
    }

    pub fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot {
            content: self.content.clone(),
            selection: self.selection,
        }
    }

    /// Put back a snapshot: replace the whole content, then reselect
    pub fn restore(&mut self, snapshot: &DocumentSnapshot) {
        let len = self.len();
        self.replace_text(&snapshot.content, 0, len);
        self.select(snapshot.selection.start, snapshot.selection.length);
    }

    /// Register a text-changed listener
    ///
    /// Listeners run while the document is borrowed mutably, so they must not
    /// try to lock the shared document themselves.
    pub fn subscribe<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&TextChanged) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Swap in new content; fires `ContentChanged` when it actually differs.
    /// Returns the previous content.
    fn set_content(&mut self, content: String) -> String {
        let old = std::mem::replace(&mut self.content, content);
        if old != self.content {
            self.listeners.emit(&TextChanged {
                old_text: old.clone(),
                new_text: self.content.clone(),
                kind: ChangeKind::ContentChanged,
            });
        }
        old
    }

    fn notify(&self, old_text: String, kind: ChangeKind) {
        self.listeners.emit(&TextChanged {
            old_text,
            new_text: self.content.clone(),
            kind,
        });
    }

    fn clamped_byte_range(&self, start: usize, length: usize) -> (usize, usize) {
        let len = self.len();
        let start = start.min(len);
        let length = length.min(len - start);
        (
            char_to_byte_pos(&self.content, start),
            char_to_byte_pos(&self.content, start + length),
        )
    }
}

/// Convert character position to byte position in a string
fn char_to_byte_pos(s: &str, char_pos: usize) -> usize {
    s.chars().take(char_pos).map(|c| c.len_utf8()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn recorded(doc: &mut TextDocument) -> Arc<Mutex<Vec<TextChanged>>> {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        doc.subscribe(move |event| sink.lock().push(event.clone()));
        seen
    }

    #[test]
    fn test_select_clamps_into_content() {
        let mut doc = TextDocument::with_content("Hello");

        doc.select(3, 10);
        assert_eq!(doc.selection(), Selection::new(3, 2));

        doc.select(42, 1);
        assert_eq!(doc.selection(), Selection::new(5, 0));

        for start in 0..8 {
            for length in 0..8 {
                doc.select(start, length);
                assert!(doc.selection().end() <= doc.len());
            }
        }
    }

    #[test]
    fn test_selected_text() {
        let mut doc = TextDocument::with_content("Hello, World!");
        assert_eq!(doc.selected_text(), "");

        doc.select(7, 5);
        assert_eq!(doc.selected_text(), "World");
    }

    #[test]
    fn test_insert_clamps_position() {
        let mut doc = TextDocument::with_content("abc");
        doc.insert_text("XY", 99);
        assert_eq!(doc.content(), "abcXY");

        doc.insert_text("-", 1);
        assert_eq!(doc.content(), "a-bcXY");
    }

    #[test]
    fn test_insert_empty_is_noop() {
        let mut doc = TextDocument::with_content("abc");
        let seen = recorded(&mut doc);
        doc.insert_text("", 0);
        assert_eq!(doc.content(), "abc");
        assert!(seen.lock().is_empty());
    }

    #[test]
    fn test_delete_clamps_length() {
        let mut doc = TextDocument::with_content("Hello, World!");
        doc.delete_text(5, 100);
        assert_eq!(doc.content(), "Hello");

        doc.delete_text(0, 0);
        assert_eq!(doc.content(), "Hello");
    }

    #[test]
    fn test_replace() {
        let mut doc = TextDocument::with_content("Hello, World!");
        doc.replace_text("Rust", 7, 5);
        assert_eq!(doc.content(), "Hello, Rust!");

        doc.replace_text("?", 11, 50);
        assert_eq!(doc.content(), "Hello, Rust?");
    }

    #[test]
    fn test_multibyte_positions_are_chars() {
        let mut doc = TextDocument::with_content("héllo wörld");
        doc.select(6, 5);
        assert_eq!(doc.selected_text(), "wörld");

        doc.delete_text(1, 1);
        assert_eq!(doc.content(), "hllo wörld");

        doc.insert_text("é", 1);
        assert_eq!(doc.content(), "héllo wörld");
    }

    #[test]
    fn test_notifications_carry_old_and_new() {
        let mut doc = TextDocument::new();
        let seen = recorded(&mut doc);

        doc.insert_text("abc", 0);
        doc.delete_text(0, 1);

        let kinds: Vec<ChangeKind> = seen.lock().iter().map(|e| e.kind).collect();
        assert_eq!(
            kinds,
            vec![
                ChangeKind::ContentChanged,
                ChangeKind::Insert,
                ChangeKind::ContentChanged,
                ChangeKind::Delete,
            ]
        );

        let last = seen.lock().last().cloned().unwrap();
        assert_eq!(last.old_text, "abc");
        assert_eq!(last.new_text, "bc");
    }

    #[test]
    fn test_unchanged_replace_skips_content_changed() {
        let mut doc = TextDocument::with_content("same");
        let seen = recorded(&mut doc);

        doc.replace_text("same", 0, 4);

        let kinds: Vec<ChangeKind> = seen.lock().iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![ChangeKind::Replace]);
    }

    #[test]
    fn test_selection_left_stale_after_mutation() {
        let mut doc = TextDocument::with_content("Hello, World!");
        doc.select(7, 5);
        doc.delete_text(0, 10);

        assert_eq!(doc.selection(), Selection::new(7, 5));
        assert_eq!(doc.selected_text(), "");

        doc.select(doc.selection_start(), doc.selection_length());
        assert_eq!(doc.selection(), Selection::new(3, 0));
    }

    #[test]
    fn test_snapshot_restore() {
        let mut doc = TextDocument::with_content("Hello, World!");
        doc.select(7, 5);
        let snapshot = doc.snapshot();

        doc.delete_text(7, 5);
        doc.select(0, 0);
        doc.restore(&snapshot);

        assert_eq!(doc.content(), "Hello, World!");
        assert_eq!(doc.selection(), Selection::new(7, 5));
    }
}

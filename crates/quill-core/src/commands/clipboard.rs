//! Copy, Cut and Paste

use super::{Backup, Command};
use crate::clipboard::SharedClipboard;
use crate::document::SharedDocument;
use futures::future::{BoxFuture, FutureExt};

/// Copy the selection to the clipboard. Never recorded for undo.
#[derive(Debug)]
pub struct CopyCommand {
    document: SharedDocument,
    clipboard: SharedClipboard,
}

impl CopyCommand {
    pub fn new(document: SharedDocument, clipboard: SharedClipboard) -> Self {
        Self {
            document,
            clipboard,
        }
    }
}

impl Command for CopyCommand {
    fn name(&self) -> &'static str {
        "Copy"
    }

    fn description(&self) -> String {
        "Copy selected text to clipboard".to_string()
    }

    fn execute(&self) -> BoxFuture<'_, bool> {
        async move {
            let selected = self.document.lock().selected_text();
            if selected.is_empty() {
                return false;
            }

            match self.clipboard.set_text(selected).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("copy failed: {}", e);
                    false
                }
            }
        }
        .boxed()
    }

    /// Nothing to reverse
    fn undo(&self) -> BoxFuture<'_, bool> {
        futures::future::ready(true).boxed()
    }

    fn can_execute(&self) -> bool {
        !self.document.lock().selected_text().is_empty()
    }

    fn can_undo(&self) -> bool {
        false
    }
}

/// Move the selection to the clipboard
#[derive(Debug)]
pub struct CutCommand {
    document: SharedDocument,
    clipboard: SharedClipboard,
    backup: Backup,
}

impl CutCommand {
    pub fn new(document: SharedDocument, clipboard: SharedClipboard) -> Self {
        Self {
            document,
            clipboard,
            backup: Backup::default(),
        }
    }
}

impl Command for CutCommand {
    fn name(&self) -> &'static str {
        "Cut"
    }

    fn description(&self) -> String {
        "Cut selected text to clipboard".to_string()
    }

    fn execute(&self) -> BoxFuture<'_, bool> {
        async move {
            let selected = self.document.lock().selected_text();
            if selected.is_empty() {
                return false;
            }

            if let Err(e) = self.clipboard.set_text(selected.clone()).await {
                tracing::warn!("cut failed: {}", e);
                return false;
            }

            // the snapshot and the deleted range come from the same lock
            let mut doc = self.document.lock();
            if doc.selected_text() != selected {
                tracing::warn!("cut failed: selection changed during clipboard write");
                return false;
            }
            let selection = doc.selection();
            self.backup.save(doc.snapshot());
            doc.delete_text(selection.start, selection.length);
            // collapse to the cut point so a following paste reinserts there
            doc.select(selection.start, 0);
            true
        }
        .boxed()
    }

    fn undo(&self) -> BoxFuture<'_, bool> {
        let restored = self.backup.restore_into(&mut self.document.lock());
        futures::future::ready(restored).boxed()
    }

    fn can_undo(&self) -> bool {
        self.backup.is_held()
    }
}

/// Insert the clipboard text, replacing the selection if there is one
#[derive(Debug)]
pub struct PasteCommand {
    document: SharedDocument,
    clipboard: SharedClipboard,
    backup: Backup,
}

impl PasteCommand {
    pub fn new(document: SharedDocument, clipboard: SharedClipboard) -> Self {
        Self {
            document,
            clipboard,
            backup: Backup::default(),
        }
    }
}

impl Command for PasteCommand {
    fn name(&self) -> &'static str {
        "Paste"
    }

    fn description(&self) -> String {
        "Paste text from clipboard".to_string()
    }

    fn execute(&self) -> BoxFuture<'_, bool> {
        async move {
            let text = match self.clipboard.get_text().await {
                Ok(text) => text,
                Err(e) => {
                    tracing::warn!("paste failed: {}", e);
                    return false;
                }
            };
            if text.is_empty() {
                return false;
            }

            let mut doc = self.document.lock();
            self.backup.save(doc.snapshot());

            let selection = doc.selection();
            if selection.is_empty() {
                doc.insert_text(&text, selection.start);
            } else {
                doc.replace_text(&text, selection.start, selection.length);
            }
            true
        }
        .boxed()
    }

    fn undo(&self) -> BoxFuture<'_, bool> {
        let restored = self.backup.restore_into(&mut self.document.lock());
        futures::future::ready(restored).boxed()
    }

    fn can_undo(&self) -> bool {
        self.backup.is_held()
    }
}

//! System clipboard store for Quill
//!
//! Implements `ClipboardStore` on top of arboard. Each store owns its own
//! handle; there is no global clipboard instance.

use arboard::Clipboard;
use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use quill_core::{ClipboardError, ClipboardStore, SharedClipboard};
use std::sync::Arc;

/// OS clipboard, opened once at construction
pub struct SystemClipboard {
    inner: Mutex<Clipboard>,
}

impl SystemClipboard {
    /// Open the system clipboard
    pub fn new() -> Result<Self, ClipboardError> {
        let clipboard = Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self {
            inner: Mutex::new(clipboard),
        })
    }

    pub fn shared() -> Result<SharedClipboard, ClipboardError> {
        Ok(Arc::new(Self::new()?))
    }

    fn read(&self) -> Result<String, ClipboardError> {
        match self.inner.lock().get_text() {
            Ok(text) => Ok(text),
            // nothing (or nothing textual) on the clipboard reads as empty
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(ClipboardError::Backend(e.to_string())),
        }
    }

    fn write(&self, text: String) -> Result<(), ClipboardError> {
        self.inner
            .lock()
            .set_text(text)
            .map_err(|e| ClipboardError::Backend(e.to_string()))
    }
}

impl std::fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemClipboard").finish_non_exhaustive()
    }
}

impl ClipboardStore for SystemClipboard {
    fn get_text(&self) -> BoxFuture<'_, Result<String, ClipboardError>> {
        async move { self.read() }.boxed()
    }

    fn set_text(&self, text: String) -> BoxFuture<'_, Result<(), ClipboardError>> {
        async move { self.write(text) }.boxed()
    }
}

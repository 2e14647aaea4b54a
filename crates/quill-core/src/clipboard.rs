//! Clipboard abstraction used by Copy, Cut and Paste
//!
//! The core only needs asynchronous get/set with an empty-string default.
//! Backends that talk to the OS live outside this crate.

use crate::error::ClipboardError;
use futures::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use std::sync::Arc;

/// Clipboard backing store
pub trait ClipboardStore: Send + Sync + std::fmt::Debug {
    /// Current clipboard text; empty when nothing was copied yet
    fn get_text(&self) -> BoxFuture<'_, Result<String, ClipboardError>>;

    /// Replace the clipboard text
    fn set_text(&self, text: String) -> BoxFuture<'_, Result<(), ClipboardError>>;
}

/// Clipboard shared between the application and its commands
pub type SharedClipboard = Arc<dyn ClipboardStore>;

/// In-process clipboard holding a single string slot
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    slot: Mutex<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedClipboard {
        Arc::new(Self::new())
    }

    /// Read the slot without going through the async interface
    pub fn text(&self) -> String {
        self.slot.lock().clone()
    }
}

impl ClipboardStore for MemoryClipboard {
    fn get_text(&self) -> BoxFuture<'_, Result<String, ClipboardError>> {
        async move { Ok(self.text()) }.boxed()
    }

    fn set_text(&self, text: String) -> BoxFuture<'_, Result<(), ClipboardError>> {
        async move {
            *self.slot.lock() = text;
            Ok(())
        }
        .boxed()
    }
}

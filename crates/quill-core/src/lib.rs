//! Quill Core - command-driven text editing with undo history
//!
//! This crate provides the UI-agnostic editing engine:
//! - A text document with a clamped selection and change notifications
//! - A clipboard abstraction with an in-memory store
//! - Copy, Cut, Paste, Undo and Macro commands
//! - A bounded command history
//! - An application that runs commands by name and records them for undo
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  execute_command("cut")  ┌──────────────┐   push   ┌────────────────┐
//! │   Any UI     │ ───────────────────────→ │  EditorApp   │ ───────→ │ CommandHistory │
//! │              │ ←─────────────────────── │              │          └────────────────┘
//! └──────────────┘     CommandExecuted      └──────┬───────┘
//!                                                  │ EditorCommand
//!                                      ┌───────────┴───────────┐
//!                                      ▼                       ▼
//!                               TextDocument            ClipboardStore
//! ```
//!
//! # Example
//!
//! ```ignore
//! use quill_core::EditorApp;
//!
//! let app = EditorApp::new();
//! {
//!     let mut doc = app.document().lock();
//!     doc.insert_text("Hello, World!", 0);
//!     doc.select(7, 5);
//! }
//!
//! app.execute_command("cut").await;
//! assert_eq!(app.document().lock().content(), "Hello, !");
//!
//! app.execute_command("undo").await;
//! assert_eq!(app.document().lock().content(), "Hello, World!");
//! ```

pub mod app;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod document;
pub mod error;
pub mod events;
pub mod history;

// Re-export commonly used types
pub use app::EditorApp;
pub use clipboard::{ClipboardStore, MemoryClipboard, SharedClipboard};
pub use commands::{
    Command, CopyCommand, CutCommand, EditorCommand, MacroBuilder, MacroCommand, PasteCommand,
    SharedCommand, UndoCommand,
};
pub use config::{load_config, ClipboardBackend, QuillConfig};
pub use document::{DocumentSnapshot, Selection, SharedDocument, TextDocument};
pub use error::{ClipboardError, QuillError, Result};
pub use events::{
    ChangeKind, CommandExecuted, EditorEvent, EventBus, ListenerId, Listeners, TextChanged,
};
pub use history::{CommandHistory, SharedHistory, DEFAULT_HISTORY_CAPACITY};

/// Get the crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

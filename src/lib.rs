//! Quill - a command-driven text editor with undo history
//!
//! The editing engine lives in `quill-core`. This crate adds what a binary
//! needs on top of it:
//! - The OS clipboard store (arboard)
//! - Tracing initialisation
//! - The scripted demo session and its argument parsing

pub mod clipboard;
pub mod demo;
pub mod logging;

// Re-export commonly used types
pub use clipboard::SystemClipboard;
pub use demo::{build_clipboard, run_demo, Args};
pub use quill_core::{EditorApp, QuillConfig, QuillError, Result};

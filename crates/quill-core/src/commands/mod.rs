//! Editor commands
//!
//! Every unit of editor work is an [`EditorCommand`]: a closed set of
//! variants dispatched through the [`Command`] capability trait. Commands are
//! bound at construction to the document, clipboard or history they act on
//! and are shared (`Arc`) between the application registry and the history.
//!
//! Failures are reported as `false`, never as panics. Guards run before any
//! mutation, so a command that returns `false` leaves the document untouched.

mod clipboard;
mod macros;
mod undo;

pub use clipboard::{CopyCommand, CutCommand, PasteCommand};
pub use macros::{MacroBuilder, MacroCommand};
pub use undo::UndoCommand;

use crate::clipboard::SharedClipboard;
use crate::document::{DocumentSnapshot, SharedDocument, TextDocument};
use crate::history::SharedHistory;
use futures::future::BoxFuture;
use parking_lot::Mutex;
use std::sync::Arc;

/// Capability interface shared by all commands
pub trait Command: Send + Sync {
    /// Display name, e.g. "Cut"
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> String;

    /// Run the command. Resolves to `true` on success.
    fn execute(&self) -> BoxFuture<'_, bool>;

    /// Reverse the last execution. Resolves to `true` on success.
    fn undo(&self) -> BoxFuture<'_, bool>;

    /// Whether executing now could succeed
    fn can_execute(&self) -> bool {
        true
    }

    /// Whether there is an execution to reverse
    fn can_undo(&self) -> bool;
}

/// Command shared between the registry, macros and the history
pub type SharedCommand = Arc<EditorCommand>;

/// All editor commands
#[derive(Debug)]
pub enum EditorCommand {
    Copy(CopyCommand),
    Cut(CutCommand),
    Paste(PasteCommand),
    Undo(UndoCommand),
    Macro(MacroCommand),
}

impl EditorCommand {
    pub fn copy(document: SharedDocument, clipboard: SharedClipboard) -> Self {
        EditorCommand::Copy(CopyCommand::new(document, clipboard))
    }

    pub fn cut(document: SharedDocument, clipboard: SharedClipboard) -> Self {
        EditorCommand::Cut(CutCommand::new(document, clipboard))
    }

    pub fn paste(document: SharedDocument, clipboard: SharedClipboard) -> Self {
        EditorCommand::Paste(PasteCommand::new(document, clipboard))
    }

    pub fn undo_last(history: SharedHistory) -> Self {
        EditorCommand::Undo(UndoCommand::new(history))
    }

    /// Wrap into the shared handle used by the registry and history
    pub fn shared(self) -> SharedCommand {
        Arc::new(self)
    }
}

impl From<MacroCommand> for EditorCommand {
    fn from(command: MacroCommand) -> Self {
        EditorCommand::Macro(command)
    }
}

impl Command for EditorCommand {
    fn name(&self) -> &'static str {
        match self {
            EditorCommand::Copy(c) => c.name(),
            EditorCommand::Cut(c) => c.name(),
            EditorCommand::Paste(c) => c.name(),
            EditorCommand::Undo(c) => c.name(),
            EditorCommand::Macro(c) => c.name(),
        }
    }

    fn description(&self) -> String {
        match self {
            EditorCommand::Copy(c) => c.description(),
            EditorCommand::Cut(c) => c.description(),
            EditorCommand::Paste(c) => c.description(),
            EditorCommand::Undo(c) => c.description(),
            EditorCommand::Macro(c) => c.description(),
        }
    }

    fn execute(&self) -> BoxFuture<'_, bool> {
        match self {
            EditorCommand::Copy(c) => c.execute(),
            EditorCommand::Cut(c) => c.execute(),
            EditorCommand::Paste(c) => c.execute(),
            EditorCommand::Undo(c) => c.execute(),
            EditorCommand::Macro(c) => c.execute(),
        }
    }

    fn undo(&self) -> BoxFuture<'_, bool> {
        match self {
            EditorCommand::Copy(c) => c.undo(),
            EditorCommand::Cut(c) => c.undo(),
            EditorCommand::Paste(c) => c.undo(),
            EditorCommand::Undo(c) => c.undo(),
            EditorCommand::Macro(c) => c.undo(),
        }
    }

    fn can_execute(&self) -> bool {
        match self {
            EditorCommand::Copy(c) => c.can_execute(),
            EditorCommand::Cut(c) => c.can_execute(),
            EditorCommand::Paste(c) => c.can_execute(),
            EditorCommand::Undo(c) => c.can_execute(),
            EditorCommand::Macro(c) => c.can_execute(),
        }
    }

    fn can_undo(&self) -> bool {
        match self {
            EditorCommand::Copy(c) => c.can_undo(),
            EditorCommand::Cut(c) => c.can_undo(),
            EditorCommand::Paste(c) => c.can_undo(),
            EditorCommand::Undo(c) => c.can_undo(),
            EditorCommand::Macro(c) => c.can_undo(),
        }
    }
}

/// Snapshot slot owned by a mutating command
///
/// Saving overwrites the previous snapshot. Restoring consumes it, so each
/// execution can be undone at most once.
#[derive(Debug, Default)]
pub(crate) struct Backup {
    slot: Mutex<Option<DocumentSnapshot>>,
}

impl Backup {
    pub(crate) fn save(&self, snapshot: DocumentSnapshot) {
        *self.slot.lock() = Some(snapshot);
    }

    pub(crate) fn is_held(&self) -> bool {
        self.slot.lock().is_some()
    }

    pub(crate) fn peek(&self) -> Option<DocumentSnapshot> {
        self.slot.lock().clone()
    }

    /// Restore the document from the held snapshot. False when none is held.
    pub(crate) fn restore_into(&self, document: &mut TextDocument) -> bool {
        match self.slot.lock().take() {
            Some(snapshot) => {
                document.restore(&snapshot);
                true
            }
            None => false,
        }
    }
}

//! Editor application: named commands over one document
//!
//! `EditorApp` owns its document, clipboard and history; nothing is shared
//! process-wide. Commands are resolved by name, checked, executed and, when
//! they succeed, recorded for undo. One command runs at a time: overlapping
//! calls to [`EditorApp::execute_command`] wait for their turn.

use crate::clipboard::{MemoryClipboard, SharedClipboard};
use crate::commands::{Command, EditorCommand, MacroBuilder, SharedCommand};
use crate::document::{SharedDocument, TextDocument};
use crate::error::{QuillError, Result};
use crate::events::{CommandExecuted, ListenerId, Listeners, TextChanged};
use crate::history::{CommandHistory, SharedHistory, DEFAULT_HISTORY_CAPACITY};
use futures::lock::Mutex as AsyncMutex;
use std::collections::HashMap;
use std::time::Instant;

/// Commands that are never recorded in the history
const UNRECORDED: [&str; 2] = ["undo", "copy"];

pub struct EditorApp {
    document: SharedDocument,
    clipboard: SharedClipboard,
    history: SharedHistory,
    commands: HashMap<String, SharedCommand>,
    listeners: Listeners<CommandExecuted>,
    /// Held for the whole of an execution, across its awaits
    running: AsyncMutex<()>,
}

impl Default for EditorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorApp {
    /// Application with an in-memory clipboard and the default history size
    pub fn new() -> Self {
        Self::with_clipboard(DEFAULT_HISTORY_CAPACITY, MemoryClipboard::shared())
    }

    pub fn with_history_capacity(capacity: usize) -> Self {
        Self::with_clipboard(capacity, MemoryClipboard::shared())
    }

    /// Application backed by the given clipboard store
    pub fn with_clipboard(history_capacity: usize, clipboard: SharedClipboard) -> Self {
        let document = TextDocument::new().into_shared();
        let history = CommandHistory::with_capacity(history_capacity).into_shared();

        let mut app = Self {
            document,
            clipboard,
            history,
            commands: HashMap::new(),
            listeners: Listeners::new(),
            running: AsyncMutex::new(()),
        };

        let defaults = [
            ("copy", app.copy_command()),
            ("cut", app.cut_command()),
            ("paste", app.paste_command()),
            ("undo", EditorCommand::undo_last(app.history.clone()).shared()),
        ];
        for (name, command) in defaults {
            app.register_command(name, command);
        }
        app
    }

    /// Execute a command by name
    ///
    /// Returns false when the name is unknown, when the command cannot run
    /// right now, or when it ran and failed.
    pub async fn execute_command(&self, name: &str) -> bool {
        match self.try_execute(name).await {
            Ok(success) => success,
            Err(e) => {
                tracing::debug!("{}", e);
                false
            }
        }
    }

    /// Like [`EditorApp::execute_command`], but an unknown name is an error
    pub async fn try_execute(&self, name: &str) -> Result<bool> {
        let command = self
            .commands
            .get(name)
            .cloned()
            .ok_or_else(|| QuillError::unknown_command(name))?;

        let _turn = self.running.lock().await;
        if !command.can_execute() {
            tracing::debug!(command = name, "not executable");
            return Ok(false);
        }

        let started = Instant::now();
        let success = command.execute().await;
        let elapsed = started.elapsed();

        if success && !UNRECORDED.contains(&name) {
            self.history.lock().push(command.clone());
        }

        tracing::debug!(command = name, success, ?elapsed, "command executed");
        self.listeners.emit(&CommandExecuted {
            command: command.name().to_string(),
            description: command.description(),
            success,
            elapsed,
        });

        Ok(success)
    }

    /// Bind `command` to `name`, replacing any previous binding
    pub fn register_command(&mut self, name: impl Into<String>, command: SharedCommand) {
        self.commands.insert(name.into(), command);
    }

    pub fn command(&self, name: &str) -> Option<SharedCommand> {
        self.commands.get(name).cloned()
    }

    /// Registered names, sorted
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.commands.keys().cloned().collect();
        names.sort();
        names
    }

    /// New Copy command bound to this application's document and clipboard
    pub fn copy_command(&self) -> SharedCommand {
        EditorCommand::copy(self.document.clone(), self.clipboard.clone()).shared()
    }

    pub fn cut_command(&self) -> SharedCommand {
        EditorCommand::cut(self.document.clone(), self.clipboard.clone()).shared()
    }

    pub fn paste_command(&self) -> SharedCommand {
        EditorCommand::paste(self.document.clone(), self.clipboard.clone()).shared()
    }

    /// Start a macro over this application's document
    pub fn macro_builder(&self) -> MacroBuilder {
        MacroBuilder::new(self.document.clone())
    }

    pub fn document(&self) -> &SharedDocument {
        &self.document
    }

    pub fn clipboard(&self) -> &SharedClipboard {
        &self.clipboard
    }

    pub fn history(&self) -> &SharedHistory {
        &self.history
    }

    /// Subscribe to command-executed events
    pub fn on_command_executed<F>(&mut self, listener: F) -> ListenerId
    where
        F: Fn(&CommandExecuted) + Send + Sync + 'static,
    {
        self.listeners.subscribe(listener)
    }

    pub fn remove_command_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Subscribe to text-changed events of the document
    ///
    /// Listeners run while the document is locked, so they must not call
    /// `document().lock()` themselves.
    pub fn on_text_changed<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&TextChanged) + Send + Sync + 'static,
    {
        self.document.lock().subscribe(listener)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardStore;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn app_with(content: &str, start: usize, length: usize) -> EditorApp {
        let app = EditorApp::new();
        {
            let mut doc = app.document().lock();
            doc.insert_text(content, 0);
            doc.select(start, length);
        }
        app
    }

    #[test]
    fn test_default_bindings() {
        let app = EditorApp::new();
        assert_eq!(app.command_names(), vec!["copy", "cut", "paste", "undo"]);
        assert_eq!(app.command("cut").map(|c| c.name()), Some("Cut"));
        assert!(app.command("redo").is_none());
    }

    #[tokio::test]
    async fn test_unknown_command() {
        let app = EditorApp::new();
        assert!(!app.execute_command("redo").await);
        assert!(matches!(
            app.try_execute("redo").await,
            Err(QuillError::UnknownCommand(name)) if name == "redo"
        ));
    }

    #[tokio::test]
    async fn test_copy_is_not_recorded() {
        let app = app_with("Hello, World!", 7, 5);
        assert!(app.execute_command("copy").await);
        assert!(app.history().lock().is_empty());
    }

    #[tokio::test]
    async fn test_ineligible_command_is_skipped_silently() {
        let mut app = app_with("Hello", 0, 0);
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        app.on_command_executed(move |e| sink.lock().push(e.clone()));

        assert!(!app.execute_command("copy").await);
        assert!(!app.execute_command("undo").await);
        assert!(events.lock().is_empty());
    }

    #[tokio::test]
    async fn test_failed_execution_still_emits() {
        let mut app = app_with("Hello", 0, 0);
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        app.on_command_executed(move |e| sink.lock().push(e.clone()));

        // paste is eligible but the clipboard is empty
        assert!(!app.execute_command("paste").await);

        let events = events.lock();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].command, "Paste");
        assert!(!events[0].success);
        assert!(app.history().lock().is_empty());
    }

    #[tokio::test]
    async fn test_registered_macro_is_recorded_and_undone() {
        let mut app = app_with("abc", 3, 0);
        app.clipboard().set_text("!".to_string()).await.unwrap();

        let twice = app
            .macro_builder()
            .then(app.paste_command())
            .then(app.paste_command())
            .shared();
        app.register_command("paste-twice", twice);

        assert!(app.execute_command("paste-twice").await);
        assert_eq!(app.document().lock().content(), "abc!!");
        assert_eq!(app.history().lock().len(), 1);

        assert!(app.execute_command("undo").await);
        assert_eq!(app.document().lock().content(), "abc");
    }

    #[tokio::test]
    async fn test_history_capacity_applies() {
        let app = EditorApp::with_history_capacity(2);
        app.document().lock().insert_text("x", 0);
        app.clipboard().set_text("y".to_string()).await.unwrap();

        for _ in 0..3 {
            assert!(app.execute_command("paste").await);
        }
        assert_eq!(app.history().lock().len(), 2);
    }

    #[tokio::test]
    async fn test_remove_command_listener() {
        let mut app = app_with("Hello", 0, 5);
        let count = Arc::new(Mutex::new(0));
        let counter = Arc::clone(&count);
        let id = app.on_command_executed(move |_| *counter.lock() += 1);

        assert!(app.execute_command("copy").await);
        assert!(app.remove_command_listener(id));
        assert!(app.execute_command("copy").await);
        assert_eq!(*count.lock(), 1);
    }
}

//! Composite command running an ordered list of sub-commands

use super::{Backup, Command, EditorCommand, SharedCommand};
use crate::document::{DocumentSnapshot, SharedDocument};
use futures::future::{BoxFuture, FutureExt};

/// Ordered group of commands with all-or-nothing eligibility
///
/// Execution stops at the first sub-command that fails; the ones before it
/// stay applied. Undo walks the sub-commands in reverse.
#[derive(Debug)]
pub struct MacroCommand {
    document: SharedDocument,
    commands: Vec<SharedCommand>,
    backup: Backup,
}

impl MacroCommand {
    pub fn new(document: SharedDocument, commands: Vec<SharedCommand>) -> Self {
        Self {
            document,
            commands,
            backup: Backup::default(),
        }
    }

    pub fn commands(&self) -> &[SharedCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Document state captured at the start of the last execution
    pub fn last_snapshot(&self) -> Option<DocumentSnapshot> {
        self.backup.peek()
    }
}

impl Command for MacroCommand {
    fn name(&self) -> &'static str {
        "Macro"
    }

    fn description(&self) -> String {
        format!("Macro containing {} commands", self.commands.len())
    }

    fn execute(&self) -> BoxFuture<'_, bool> {
        async move {
            let snapshot = self.document.lock().snapshot();
            self.backup.save(snapshot);

            for (index, command) in self.commands.iter().enumerate() {
                if !command.execute().await {
                    tracing::debug!(index, command = command.name(), "macro stopped");
                    return false;
                }
            }
            true
        }
        .boxed()
    }

    fn undo(&self) -> BoxFuture<'_, bool> {
        async move {
            for command in self.commands.iter().rev() {
                if command.can_undo() && !command.undo().await {
                    return false;
                }
            }
            true
        }
        .boxed()
    }

    fn can_execute(&self) -> bool {
        self.commands.iter().all(|c| c.can_execute())
    }

    fn can_undo(&self) -> bool {
        self.commands.iter().all(|c| c.can_undo())
    }
}

/// Incremental construction of a [`MacroCommand`]
#[derive(Debug)]
pub struct MacroBuilder {
    document: SharedDocument,
    commands: Vec<SharedCommand>,
}

impl MacroBuilder {
    pub fn new(document: SharedDocument) -> Self {
        Self {
            document,
            commands: Vec::new(),
        }
    }

    /// Append a sub-command
    pub fn then(mut self, command: SharedCommand) -> Self {
        self.commands.push(command);
        self
    }

    pub fn build(self) -> MacroCommand {
        MacroCommand::new(self.document, self.commands)
    }

    /// Build straight into the shared handle
    pub fn shared(self) -> SharedCommand {
        EditorCommand::from(self.build()).shared()
    }
}

//! Undo as a command: pops the history and reverses the popped entry

use super::Command;
use crate::history::SharedHistory;
use futures::future::{BoxFuture, FutureExt};

#[derive(Debug)]
pub struct UndoCommand {
    history: SharedHistory,
}

impl UndoCommand {
    pub fn new(history: SharedHistory) -> Self {
        Self { history }
    }
}

impl Command for UndoCommand {
    fn name(&self) -> &'static str {
        "Undo"
    }

    fn description(&self) -> String {
        "Undo last command".to_string()
    }

    fn execute(&self) -> BoxFuture<'_, bool> {
        async move {
            let last = self.history.lock().pop();
            match last {
                Some(command) if command.can_undo() => {
                    tracing::debug!(command = command.name(), "undoing");
                    command.undo().await
                }
                Some(command) => {
                    tracing::debug!(command = command.name(), "popped entry is not undoable");
                    false
                }
                None => false,
            }
        }
        .boxed()
    }

    /// Undo is not itself undoable
    fn undo(&self) -> BoxFuture<'_, bool> {
        futures::future::ready(false).boxed()
    }

    fn can_execute(&self) -> bool {
        !self.history.lock().is_empty()
    }

    fn can_undo(&self) -> bool {
        false
    }
}

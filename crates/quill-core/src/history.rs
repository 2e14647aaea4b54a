//! Bounded command history
//!
//! Records executed commands oldest first so they can be undone in reverse.
//! Redo is not supported: nothing is ever replayed from the history.

use crate::commands::{Command, SharedCommand};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;

/// Default maximum history size
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// History shared between the application and the Undo command
pub type SharedHistory = Arc<Mutex<CommandHistory>>;

/// Ordered, bounded record of executed commands
#[derive(Debug)]
pub struct CommandHistory {
    entries: VecDeque<SharedCommand>,
    capacity: usize,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a history holding at most `capacity` entries (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn into_shared(self) -> SharedHistory {
        Arc::new(Mutex::new(self))
    }

    /// Append a command, evicting the single oldest entry when full
    pub fn push(&mut self, command: SharedCommand) {
        if self.entries.len() >= self.capacity {
            if let Some(evicted) = self.entries.pop_front() {
                tracing::debug!(command = evicted.name(), "history full, evicted oldest entry");
            }
        }
        self.entries.push_back(command);
    }

    /// Remove and return the most recent command
    pub fn pop(&mut self) -> Option<SharedCommand> {
        self.entries.pop_back()
    }

    /// Most recent command without removing it
    pub fn peek(&self) -> Option<&SharedCommand> {
        self.entries.back()
    }

    /// Entries in chronological order. The iterator can be cloned to restart.
    pub fn iter(&self) -> impl Iterator<Item = &SharedCommand> + Clone + '_ {
        self.entries.iter()
    }

    /// Owned copy of the entries, oldest first
    pub fn snapshot(&self) -> Vec<SharedCommand> {
        self.entries.iter().cloned().collect()
    }

    /// Entries whose `can_undo` currently holds, oldest first
    pub fn undoable(&self) -> impl Iterator<Item = &SharedCommand> + '_ {
        self.iter().filter(|command| command.can_undo())
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

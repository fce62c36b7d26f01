//! Undo/redo history for layout commands.
//!
//! [`UndoStack`] keeps applied commands in push order together with an index
//! separating the undoable part from the redoable part:
//!
//! ```text
//! push(c1..c4), undo() x2
//! ┌──────────────────────────────────────┐
//! │ commands: [c1, c2 | c3, c4]          │
//! │ index:          2                    │
//! └──────────────────────────────────────┘
//!
//! push(c5)  <-- new branch, drops c3 and c4
//! ┌──────────────────────────────────────┐
//! │ commands: [c1, c2, c5 |]             │
//! │ index:              3                │
//! └──────────────────────────────────────┘
//! ```
//!
//! # Invariants
//!
//! 1. `index <= commands.len()`
//! 2. `commands[..index]` are applied to the layout, the rest are reverted
//! 3. Only the command directly below `index` is offered new commands for
//!    merging, and never when it marks the clean state
//! 4. With a non-zero `undo_limit`, `commands.len() <= undo_limit`

use crate::commands::LayoutCommand;
use crate::models::KeyboardLayout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of undo steps kept.
pub const DEFAULT_UNDO_LIMIT: usize = 100;

/// Configuration for the undo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Maximum number of commands kept (0 = unlimited)
    #[serde(default = "default_undo_limit")]
    pub undo_limit: usize,
}

fn default_undo_limit() -> usize {
    DEFAULT_UNDO_LIMIT
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            undo_limit: DEFAULT_UNDO_LIMIT,
        }
    }
}

impl HistoryConfig {
    /// Creates a configuration without an undo limit.
    #[must_use]
    pub const fn unlimited() -> Self {
        Self { undo_limit: 0 }
    }
}

/// Linear undo/redo history over one keyboard layout.
pub struct UndoStack {
    /// All commands, oldest first
    commands: Vec<Box<dyn LayoutCommand>>,
    /// Number of currently applied commands
    index: usize,
    /// Index at which the document was last saved, `None` once unreachable
    clean_index: Option<usize>,
    config: HistoryConfig,
}

impl fmt::Debug for UndoStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UndoStack")
            .field("count", &self.commands.len())
            .field("index", &self.index)
            .field("clean_index", &self.clean_index)
            .field("config", &self.config)
            .finish()
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new(HistoryConfig::default())
    }
}

impl UndoStack {
    /// Creates an empty, clean history.
    #[must_use]
    pub fn new(config: HistoryConfig) -> Self {
        Self {
            commands: Vec::new(),
            index: 0,
            clean_index: Some(0),
            config,
        }
    }

    /// Applies `cmd` to `layout` and records it.
    ///
    /// Any undone commands are discarded. If the previous command has the
    /// same kind and accepts the merge, `cmd` is folded into it and dropped.
    pub fn push(&mut self, mut cmd: Box<dyn LayoutCommand>, layout: &mut KeyboardLayout) {
        cmd.redo(layout);

        if self.commands.len() > self.index {
            tracing::trace!(
                dropped = self.commands.len() - self.index,
                "discarding redo branch"
            );
            self.commands.truncate(self.index);
        }

        if self.clean_index.is_some_and(|clean| clean > self.index) {
            self.clean_index = None;
        }

        if self.try_merge(cmd.as_ref()) {
            tracing::debug!(kind = ?cmd.kind(), "merged into previous command");
            return;
        }

        tracing::debug!(kind = ?cmd.kind(), description = cmd.description(), "pushed command");
        self.commands.push(cmd);
        self.index += 1;
        self.enforce_limit();
    }

    /// Reverts the most recently applied command.
    ///
    /// Returns `false` if there is nothing to undo.
    pub fn undo(&mut self, layout: &mut KeyboardLayout) -> bool {
        if self.index == 0 {
            return false;
        }

        self.index -= 1;
        let cmd = &mut self.commands[self.index];
        tracing::debug!(kind = ?cmd.kind(), description = cmd.description(), "undo");
        cmd.undo(layout);
        true
    }

    /// Re-applies the most recently undone command.
    ///
    /// Returns `false` if there is nothing to redo.
    pub fn redo(&mut self, layout: &mut KeyboardLayout) -> bool {
        let Some(cmd) = self.commands.get_mut(self.index) else {
            return false;
        };

        tracing::debug!(kind = ?cmd.kind(), description = cmd.description(), "redo");
        cmd.redo(layout);
        self.index += 1;
        true
    }

    /// Check if undo is available.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Check if redo is available.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.index < self.commands.len()
    }

    /// Description of the command `undo()` would revert.
    #[must_use]
    pub fn undo_text(&self) -> Option<&str> {
        self.index
            .checked_sub(1)
            .map(|index| self.commands[index].description())
    }

    /// Description of the command `redo()` would apply.
    #[must_use]
    pub fn redo_text(&self) -> Option<&str> {
        self.commands.get(self.index).map(|cmd| cmd.description())
    }

    /// Total number of recorded commands (applied and undone).
    #[must_use]
    pub fn count(&self) -> usize {
        self.commands.len()
    }

    /// Number of currently applied commands.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Marks the current state as saved.
    pub fn set_clean(&mut self) {
        self.clean_index = Some(self.index);
    }

    /// Returns true if the document is in its saved state.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.clean_index == Some(self.index)
    }

    /// Drops all commands. The current state becomes the clean state.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.index = 0;
        self.clean_index = Some(0);
    }

    /// Get the current configuration.
    #[must_use]
    pub fn config(&self) -> &HistoryConfig {
        &self.config
    }

    /// Offers `cmd` to the top command. Returns true if it was absorbed.
    fn try_merge(&mut self, cmd: &dyn LayoutCommand) -> bool {
        if self.index == 0 || self.clean_index == Some(self.index) {
            return false;
        }

        let top = &mut self.commands[self.index - 1];
        top.kind() == cmd.kind() && top.layout_id() == cmd.layout_id() && top.merge_with(cmd)
    }

    /// Evicts the oldest commands beyond the undo limit.
    fn enforce_limit(&mut self) {
        let limit = self.config.undo_limit;
        if limit == 0 || self.commands.len() <= limit {
            return;
        }

        let evicted = self.commands.len() - limit;
        tracing::trace!(evicted, limit, "evicting oldest commands");
        self.commands.drain(..evicted);
        self.index -= evicted;
        self.clean_index = self
            .clean_index
            .and_then(|clean| clean.checked_sub(evicted));
    }
}

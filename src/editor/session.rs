//! Editing session for one keyboard layout.
//!
//! A [`LayoutEditor`] owns the layout document and its undo history. Views
//! call the typed helpers, which build the matching command from the current
//! document state and push it onto the history.

use crate::commands::{
    LayoutCommand, RemoveKeyCommand, SetKeyFingerIndexCommand, SetKeyGeometryCommand,
    SetKeyHasHapticMarkerCommand, SetKeyboardLayoutNameCommand, SetKeyboardLayoutSizeCommand,
    SetKeyboardLayoutTitleCommand, SetSpecialKeyLabelCommand, SetSpecialKeyModifierIdCommand,
    SetSpecialKeyTypeCommand,
};
use crate::config::EditorConfig;
use crate::history::UndoStack;
use crate::models::{Finger, KeyboardLayout, Rect, Size, SpecialKeyType};

/// State of the undo/redo actions, for toolbar or menu binding.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorActions {
    /// Whether the undo action is enabled
    pub can_undo: bool,
    /// Whether the redo action is enabled
    pub can_redo: bool,
    /// Description of the edit undo would revert
    pub undo_text: Option<String>,
    /// Description of the edit redo would apply
    pub redo_text: Option<String>,
}

/// A keyboard layout being edited together with its undo history.
#[derive(Debug)]
pub struct LayoutEditor {
    layout: KeyboardLayout,
    history: UndoStack,
}

impl LayoutEditor {
    /// Starts editing `layout` with the history settings from `config`.
    pub fn new(layout: KeyboardLayout, config: &EditorConfig) -> Self {
        tracing::debug!(layout = %layout.id(), name = layout.name(), "opened layout editor");
        Self {
            layout,
            history: UndoStack::new(config.history),
        }
    }

    /// The edited layout.
    #[must_use]
    pub fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// The undo history.
    #[must_use]
    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Ends the session and returns the layout.
    pub fn into_layout(self) -> KeyboardLayout {
        self.layout
    }

    /// Applies a command and records it in the history.
    pub fn push(&mut self, cmd: impl LayoutCommand + 'static) {
        self.history.push(Box::new(cmd), &mut self.layout);
    }

    /// Sets the layout title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let cmd = SetKeyboardLayoutTitleCommand::new(&self.layout, title.into());
        self.push(cmd);
    }

    /// Sets the layout name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        let cmd = SetKeyboardLayoutNameCommand::new(&self.layout, name.into());
        self.push(cmd);
    }

    /// Resizes the layout, moving keys that would no longer fit.
    pub fn set_size(&mut self, size: Size) {
        let cmd = SetKeyboardLayoutSizeCommand::new(&self.layout, size);
        self.push(cmd);
    }

    /// Moves or resizes key `index`.
    pub fn set_key_rect(&mut self, index: usize, rect: Rect) {
        let cmd = SetKeyGeometryCommand::new(&self.layout, index, rect);
        self.push(cmd);
    }

    /// Assigns a finger to standard key `index`.
    pub fn set_finger(&mut self, index: usize, finger: Finger) {
        let cmd = SetKeyFingerIndexCommand::new(&self.layout, index, finger);
        self.push(cmd);
    }

    /// Sets the haptic marker flag of standard key `index`.
    pub fn set_haptic_marker(&mut self, index: usize, has_haptic_marker: bool) {
        let cmd = SetKeyHasHapticMarkerCommand::new(&self.layout, index, has_haptic_marker);
        self.push(cmd);
    }

    /// Sets the type of special key `index`.
    pub fn set_special_key_type(&mut self, index: usize, kind: SpecialKeyType) {
        let cmd = SetSpecialKeyTypeCommand::new(&self.layout, index, kind);
        self.push(cmd);
    }

    /// Sets the label of special key `index`.
    pub fn set_special_key_label(&mut self, index: usize, label: impl Into<String>) {
        let cmd = SetSpecialKeyLabelCommand::new(&self.layout, index, label.into());
        self.push(cmd);
    }

    /// Sets the modifier group of special key `index`.
    pub fn set_special_key_modifier_id(&mut self, index: usize, modifier_id: impl Into<String>) {
        let cmd = SetSpecialKeyModifierIdCommand::new(&self.layout, index, modifier_id.into());
        self.push(cmd);
    }

    /// Removes key `index`.
    pub fn remove_key(&mut self, index: usize) {
        let cmd = RemoveKeyCommand::new(&self.layout, index);
        self.push(cmd);
    }

    /// Reverts the last edit. Returns `false` if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.history.undo(&mut self.layout)
    }

    /// Re-applies the last undone edit. Returns `false` if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.history.redo(&mut self.layout)
    }

    /// Current undo/redo action state.
    #[must_use]
    pub fn actions(&self) -> EditorActions {
        EditorActions {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            undo_text: self.history.undo_text().map(String::from),
            redo_text: self.history.redo_text().map(String::from),
        }
    }

    /// Whether the layout differs from its last saved state.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        !self.history.is_clean()
    }

    /// Records that the layout has been saved in its current state.
    pub fn mark_saved(&mut self) {
        self.history.set_clean();
    }
}

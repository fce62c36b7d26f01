//! Commands editing individual keys.

use super::property::{KeyProperty, SetKeyPropertyCommand};
use super::{assert_target, CommandKind, LayoutCommand};
use crate::models::{Finger, Key, KeyboardLayout, LayoutId, Rect, SpecialKeyType};
use std::any::Any;

/// Key rectangle property (any key variant).
#[derive(Debug)]
pub enum KeyGeometry {}

impl KeyProperty for KeyGeometry {
    type Value = Rect;
    const KIND: CommandKind = CommandKind::SetKeyGeometry;
    const DESCRIPTION: &'static str = "Set key geometry";

    fn get(layout: &KeyboardLayout, index: usize) -> Rect {
        layout.key(index).rect()
    }

    fn set(layout: &mut KeyboardLayout, index: usize, value: Rect) {
        layout.key_mut(index).set_rect(value);
    }
}

/// Finger assignment of a standard key.
#[derive(Debug)]
pub enum FingerIndex {}

impl KeyProperty for FingerIndex {
    type Value = Finger;
    const KIND: CommandKind = CommandKind::SetFingerIndex;
    const DESCRIPTION: &'static str = "Set key finger";

    fn get(layout: &KeyboardLayout, index: usize) -> Finger {
        layout.standard_key(index).finger
    }

    fn set(layout: &mut KeyboardLayout, index: usize, value: Finger) {
        layout.standard_key_mut(index).finger = value;
    }
}

/// Haptic marker flag of a standard key.
#[derive(Debug)]
pub enum HapticMarker {}

impl KeyProperty for HapticMarker {
    type Value = bool;
    const KIND: CommandKind = CommandKind::SetHapticMarker;
    const DESCRIPTION: &'static str = "Set key haptic marker";

    fn get(layout: &KeyboardLayout, index: usize) -> bool {
        layout.standard_key(index).has_haptic_marker
    }

    fn set(layout: &mut KeyboardLayout, index: usize, value: bool) {
        layout.standard_key_mut(index).has_haptic_marker = value;
    }
}

/// Type of a special key.
#[derive(Debug)]
pub enum SpecialKeyTypeProperty {}

impl KeyProperty for SpecialKeyTypeProperty {
    type Value = SpecialKeyType;
    const KIND: CommandKind = CommandKind::SetSpecialKeyType;
    const DESCRIPTION: &'static str = "Set special key type";

    fn get(layout: &KeyboardLayout, index: usize) -> SpecialKeyType {
        layout.special_key(index).kind
    }

    fn set(layout: &mut KeyboardLayout, index: usize, value: SpecialKeyType) {
        layout.special_key_mut(index).kind = value;
    }
}

/// Label of a special key.
#[derive(Debug)]
pub enum SpecialKeyLabel {}

impl KeyProperty for SpecialKeyLabel {
    type Value = String;
    const KIND: CommandKind = CommandKind::SetSpecialKeyLabel;
    const DESCRIPTION: &'static str = "Set special key label";

    fn get(layout: &KeyboardLayout, index: usize) -> String {
        layout.special_key(index).label.clone()
    }

    fn set(layout: &mut KeyboardLayout, index: usize, value: String) {
        layout.special_key_mut(index).label = value;
    }
}

/// Modifier group id of a special key.
#[derive(Debug)]
pub enum SpecialKeyModifierId {}

impl KeyProperty for SpecialKeyModifierId {
    type Value = String;
    const KIND: CommandKind = CommandKind::SetSpecialKeyModifierId;
    const DESCRIPTION: &'static str = "Set special key modifier";

    fn get(layout: &KeyboardLayout, index: usize) -> String {
        layout.special_key(index).modifier_id.clone()
    }

    fn set(layout: &mut KeyboardLayout, index: usize, value: String) {
        layout.special_key_mut(index).modifier_id = value;
    }
}

/// Moves or resizes a key. Consecutive edits of the same key merge, so a drag
/// gesture becomes a single undo step.
pub type SetKeyGeometryCommand = SetKeyPropertyCommand<KeyGeometry>;

/// Reassigns the finger of a standard key.
pub type SetKeyFingerIndexCommand = SetKeyPropertyCommand<FingerIndex>;

/// Toggles the haptic marker of a standard key.
pub type SetKeyHasHapticMarkerCommand = SetKeyPropertyCommand<HapticMarker>;

/// Changes the type of a special key.
pub type SetSpecialKeyTypeCommand = SetKeyPropertyCommand<SpecialKeyTypeProperty>;

/// Changes the label of a special key.
pub type SetSpecialKeyLabelCommand = SetKeyPropertyCommand<SpecialKeyLabel>;

/// Changes the modifier group of a special key.
pub type SetSpecialKeyModifierIdCommand = SetKeyPropertyCommand<SpecialKeyModifierId>;

/// Removes a key from the layout.
///
/// `redo()` moves the key out of the layout into the command; `undo()` moves
/// it back to its original index. While the command holds the key, dropping
/// the command drops the key.
#[derive(Debug)]
pub struct RemoveKeyCommand {
    layout_id: LayoutId,
    key_index: usize,
    removed: Option<Key>,
}

impl RemoveKeyCommand {
    /// Creates a command removing the key at `key_index`.
    pub fn new(layout: &KeyboardLayout, key_index: usize) -> Self {
        Self {
            layout_id: layout.id(),
            key_index,
            removed: None,
        }
    }

    /// Index of the removed key.
    pub fn key_index(&self) -> usize {
        self.key_index
    }

    /// The removed key while the command is applied.
    pub fn removed_key(&self) -> Option<&Key> {
        self.removed.as_ref()
    }
}

impl LayoutCommand for RemoveKeyCommand {
    fn redo(&mut self, layout: &mut KeyboardLayout) {
        assert_target(self.layout_id, layout);
        self.removed = Some(layout.remove_key(self.key_index));
    }

    fn undo(&mut self, layout: &mut KeyboardLayout) {
        assert_target(self.layout_id, layout);

        let Some(key) = self.removed.take() else {
            panic!("undo of key removal {} without a prior redo", self.key_index);
        };

        if self.key_index == layout.key_count() {
            layout.add_key(key);
        } else {
            layout.insert_key(self.key_index, key);
        }
    }

    fn kind(&self) -> CommandKind {
        CommandKind::RemoveKey
    }

    fn layout_id(&self) -> LayoutId {
        self.layout_id
    }

    fn description(&self) -> &str {
        "Remove key"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

//! Undoable edit commands for keyboard layouts.
//!
//! Every mutation of a [`KeyboardLayout`] made by the editor goes through a
//! command that remembers the previous value, so the history stack can revert
//! it later.
//!
//! # Invariants
//!
//! - Old values are captured when the command is constructed, not when it is
//!   first applied
//! - `redo()` followed by `undo()` restores every observable property
//! - `merge_with()` only succeeds for the same concrete command type targeting
//!   the same layout (and the same key, for key commands)
//! - Commands never borrow the layout; they remember its [`LayoutId`] and get
//!   the layout passed in on every call
//!
//! # Failure Modes
//!
//! Precondition violations (wrong key variant, index out of range, applying
//! a command to a different layout, undo before redo) are caller bugs and
//! panic.

pub mod key;
pub mod layout;
pub mod property;

use crate::models::{KeyboardLayout, LayoutId};
use std::any::Any;
use std::fmt;

pub use key::{
    FingerIndex, HapticMarker, KeyGeometry, RemoveKeyCommand, SetKeyFingerIndexCommand,
    SetKeyGeometryCommand, SetKeyHasHapticMarkerCommand, SetSpecialKeyLabelCommand,
    SetSpecialKeyModifierIdCommand, SetSpecialKeyTypeCommand, SpecialKeyLabel,
    SpecialKeyModifierId, SpecialKeyTypeProperty,
};
pub use layout::{
    LayoutName, LayoutTitle, SetKeyboardLayoutNameCommand, SetKeyboardLayoutSizeCommand,
    SetKeyboardLayoutTitleCommand,
};
pub use property::{KeyProperty, LayoutProperty, SetKeyPropertyCommand, SetLayoutPropertyCommand};

/// Identity tag of a command type.
///
/// The history only offers a new command to the top command for merging when
/// both report the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    /// Layout title change
    SetTitle,
    /// Layout name change
    SetName,
    /// Layout size change (with key clamping)
    SetSize,
    /// Key removal
    RemoveKey,
    /// Key rectangle change
    SetKeyGeometry,
    /// Standard key finger assignment change
    SetFingerIndex,
    /// Standard key haptic marker change
    SetHapticMarker,
    /// Special key type change
    SetSpecialKeyType,
    /// Special key label change
    SetSpecialKeyLabel,
    /// Special key modifier id change
    SetSpecialKeyModifierId,
}

/// A reversible edit of a keyboard layout.
pub trait LayoutCommand: fmt::Debug {
    /// Applies the edit.
    fn redo(&mut self, layout: &mut KeyboardLayout);

    /// Reverts the edit.
    fn undo(&mut self, layout: &mut KeyboardLayout);

    /// Identity tag used to pick merge candidates.
    fn kind(&self) -> CommandKind;

    /// Layout this command was created for.
    fn layout_id(&self) -> LayoutId;

    /// Human-readable description for undo/redo actions.
    fn description(&self) -> &str;

    /// Absorbs `other`, which was pushed right after `self`.
    ///
    /// On success `self` takes over `other`'s new value and the caller drops
    /// `other`. The default never merges.
    fn merge_with(&mut self, _other: &dyn LayoutCommand) -> bool {
        false
    }

    /// Downcast support for `merge_with`.
    fn as_any(&self) -> &dyn Any;
}

/// Panics unless `layout` is the document `expected` was created for.
pub(crate) fn assert_target(expected: LayoutId, layout: &KeyboardLayout) {
    assert_eq!(
        layout.id(),
        expected,
        "command applied to layout {} but created for layout {}",
        layout.id(),
        expected
    );
}

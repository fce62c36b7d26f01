//! Generic set-property commands.
//!
//! Most edits replace one value with another. A property type describes how
//! to read and write the value; the command types here handle capture,
//! redo/undo and merging for all of them.

use super::{assert_target, CommandKind, LayoutCommand};
use crate::models::{KeyboardLayout, LayoutId};
use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

/// A value stored on the layout itself (title, name).
pub trait LayoutProperty: fmt::Debug + 'static {
    /// Stored value type
    type Value: Clone + PartialEq + fmt::Debug + 'static;

    /// Identity tag of commands editing this property.
    const KIND: CommandKind;

    /// Description shown on undo/redo actions.
    const DESCRIPTION: &'static str;

    /// Reads the current value.
    fn get(layout: &KeyboardLayout) -> Self::Value;

    /// Writes a value.
    fn set(layout: &mut KeyboardLayout, value: Self::Value);
}

/// A value stored on one key of the layout.
///
/// `get`/`set` panic when the key at the index is missing or of the wrong
/// variant for the property.
pub trait KeyProperty: fmt::Debug + 'static {
    /// Stored value type
    type Value: Clone + PartialEq + fmt::Debug + 'static;

    /// Identity tag of commands editing this property.
    const KIND: CommandKind;

    /// Description shown on undo/redo actions.
    const DESCRIPTION: &'static str;

    /// Reads the current value of key `index`.
    fn get(layout: &KeyboardLayout, index: usize) -> Self::Value;

    /// Writes a value to key `index`.
    fn set(layout: &mut KeyboardLayout, index: usize, value: Self::Value);
}

/// Replaces a layout-level property.
#[derive(Debug)]
pub struct SetLayoutPropertyCommand<P: LayoutProperty> {
    layout_id: LayoutId,
    old_value: P::Value,
    new_value: P::Value,
    property: PhantomData<P>,
}

impl<P: LayoutProperty> SetLayoutPropertyCommand<P> {
    /// Creates the command, capturing the current value as the old value.
    pub fn new(layout: &KeyboardLayout, new_value: impl Into<P::Value>) -> Self {
        Self {
            layout_id: layout.id(),
            old_value: P::get(layout),
            new_value: new_value.into(),
            property: PhantomData,
        }
    }

    /// Value restored by `undo()`.
    pub fn old_value(&self) -> &P::Value {
        &self.old_value
    }

    /// Value written by `redo()`.
    pub fn new_value(&self) -> &P::Value {
        &self.new_value
    }
}

impl<P: LayoutProperty> LayoutCommand for SetLayoutPropertyCommand<P> {
    fn redo(&mut self, layout: &mut KeyboardLayout) {
        assert_target(self.layout_id, layout);
        P::set(layout, self.new_value.clone());
    }

    fn undo(&mut self, layout: &mut KeyboardLayout) {
        assert_target(self.layout_id, layout);
        P::set(layout, self.old_value.clone());
    }

    fn kind(&self) -> CommandKind {
        P::KIND
    }

    fn layout_id(&self) -> LayoutId {
        self.layout_id
    }

    fn description(&self) -> &str {
        P::DESCRIPTION
    }

    fn merge_with(&mut self, other: &dyn LayoutCommand) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };

        if self.layout_id != other.layout_id {
            return false;
        }

        self.new_value = other.new_value.clone();
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Replaces a property of one key.
#[derive(Debug)]
pub struct SetKeyPropertyCommand<P: KeyProperty> {
    layout_id: LayoutId,
    key_index: usize,
    old_value: P::Value,
    new_value: P::Value,
    property: PhantomData<P>,
}

impl<P: KeyProperty> SetKeyPropertyCommand<P> {
    /// Creates the command, capturing the key's current value as the old value.
    ///
    /// # Panics
    ///
    /// Panics if there is no key at `key_index` or it is the wrong variant.
    pub fn new(layout: &KeyboardLayout, key_index: usize, new_value: impl Into<P::Value>) -> Self {
        Self {
            layout_id: layout.id(),
            key_index,
            old_value: P::get(layout, key_index),
            new_value: new_value.into(),
            property: PhantomData,
        }
    }

    /// Index of the edited key.
    pub fn key_index(&self) -> usize {
        self.key_index
    }

    /// Value restored by `undo()`.
    pub fn old_value(&self) -> &P::Value {
        &self.old_value
    }

    /// Value written by `redo()`.
    pub fn new_value(&self) -> &P::Value {
        &self.new_value
    }
}

impl<P: KeyProperty> LayoutCommand for SetKeyPropertyCommand<P> {
    fn redo(&mut self, layout: &mut KeyboardLayout) {
        assert_target(self.layout_id, layout);
        P::set(layout, self.key_index, self.new_value.clone());
    }

    fn undo(&mut self, layout: &mut KeyboardLayout) {
        assert_target(self.layout_id, layout);
        P::set(layout, self.key_index, self.old_value.clone());
    }

    fn kind(&self) -> CommandKind {
        P::KIND
    }

    fn layout_id(&self) -> LayoutId {
        self.layout_id
    }

    fn description(&self) -> &str {
        P::DESCRIPTION
    }

    fn merge_with(&mut self, other: &dyn LayoutCommand) -> bool {
        let Some(other) = other.as_any().downcast_ref::<Self>() else {
            return false;
        };

        if self.layout_id != other.layout_id || self.key_index != other.key_index {
            return false;
        }

        self.new_value = other.new_value.clone();
        true
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

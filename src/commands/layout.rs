//! Commands editing layout-level properties: title, name and size.

use super::property::{LayoutProperty, SetLayoutPropertyCommand};
use super::{assert_target, CommandKind, LayoutCommand, SetKeyGeometryCommand};
use crate::models::{KeyboardLayout, LayoutId, Size};
use std::any::Any;

/// Layout title property.
#[derive(Debug)]
pub enum LayoutTitle {}

impl LayoutProperty for LayoutTitle {
    type Value = String;
    const KIND: CommandKind = CommandKind::SetTitle;
    const DESCRIPTION: &'static str = "Set keyboard layout title";

    fn get(layout: &KeyboardLayout) -> String {
        layout.title().to_string()
    }

    fn set(layout: &mut KeyboardLayout, value: String) {
        layout.set_title(value);
    }
}

/// Layout name property.
#[derive(Debug)]
pub enum LayoutName {}

impl LayoutProperty for LayoutName {
    type Value = String;
    const KIND: CommandKind = CommandKind::SetName;
    const DESCRIPTION: &'static str = "Set keyboard layout name";

    fn get(layout: &KeyboardLayout) -> String {
        layout.name().to_string()
    }

    fn set(layout: &mut KeyboardLayout, value: String) {
        layout.set_name(value);
    }
}

/// Changes the layout title. Consecutive edits of one layout merge.
pub type SetKeyboardLayoutTitleCommand = SetLayoutPropertyCommand<LayoutTitle>;

/// Changes the layout name. Consecutive edits of one layout merge.
pub type SetKeyboardLayoutNameCommand = SetLayoutPropertyCommand<LayoutName>;

/// Resizes the layout canvas, shifting keys that would stick out.
///
/// Each key whose bottom-right corner falls outside the new size gets a child
/// geometry command that moves it left/up just enough to fit. Children are
/// applied in key order before the size changes and reverted in reverse order
/// before the size is restored, so one undo step covers the whole resize.
///
/// Size commands never merge: every resize is its own undo step.
#[derive(Debug)]
pub struct SetKeyboardLayoutSizeCommand {
    layout_id: LayoutId,
    old_size: Size,
    new_size: Size,
    children: Vec<SetKeyGeometryCommand>,
}

impl SetKeyboardLayoutSizeCommand {
    /// Creates the command and plans the key moves the new size requires.
    pub fn new(layout: &KeyboardLayout, new_size: Size) -> Self {
        let children = layout
            .keys()
            .enumerate()
            .filter_map(|(index, key)| {
                let rect = key.rect();
                let clamped = rect.shifted_into(new_size);
                (clamped != rect).then(|| {
                    tracing::trace!(index, ?rect, ?clamped, "key moved by resize");
                    SetKeyGeometryCommand::new(layout, index, clamped)
                })
            })
            .collect();

        Self {
            layout_id: layout.id(),
            old_size: layout.size(),
            new_size,
            children,
        }
    }

    /// Size restored by `undo()`.
    pub fn old_size(&self) -> Size {
        self.old_size
    }

    /// Size written by `redo()`.
    pub fn new_size(&self) -> Size {
        self.new_size
    }

    /// Key moves performed as part of this resize, in key order.
    pub fn children(&self) -> &[SetKeyGeometryCommand] {
        &self.children
    }
}

impl LayoutCommand for SetKeyboardLayoutSizeCommand {
    fn redo(&mut self, layout: &mut KeyboardLayout) {
        assert_target(self.layout_id, layout);

        for child in &mut self.children {
            child.redo(layout);
        }

        layout.set_size(self.new_size);
    }

    fn undo(&mut self, layout: &mut KeyboardLayout) {
        assert_target(self.layout_id, layout);

        for child in self.children.iter_mut().rev() {
            child.undo(layout);
        }

        layout.set_size(self.old_size);
    }

    fn kind(&self) -> CommandKind {
        CommandKind::SetSize
    }

    fn layout_id(&self) -> LayoutId {
        self.layout_id
    }

    fn description(&self) -> &str {
        "Set keyboard layout size"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

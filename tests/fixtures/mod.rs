//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test file uses every fixture

use keylayout_editor::models::{
    Finger, KeyboardLayout, Rect, Size, SpecialKey, SpecialKeyType, StandardKey,
};

/// Creates an empty 800x600 layout.
pub fn empty_layout() -> KeyboardLayout {
    KeyboardLayout::new("Test Layout", "test", Size::new(800, 600))
}

/// Creates an 800x600 layout with one standard key per rect.
pub fn layout_with_rects(rects: &[Rect]) -> KeyboardLayout {
    let mut layout = empty_layout();
    for (i, rect) in rects.iter().enumerate() {
        let finger = Finger::ALL[i % Finger::ALL.len()];
        layout.add_key(StandardKey::new(*rect, finger));
    }
    layout
}

/// Creates an 800x600 layout with five keys of mixed variants.
///
/// | index | variant  | rect                |
/// |-------|----------|---------------------|
/// | 0     | standard | (0, 0, 50, 50)      |
/// | 1     | standard | (60, 0, 50, 50)     |
/// | 2     | special  | (120, 0, 100, 50)   |
/// | 3     | standard | (230, 0, 50, 50)    |
/// | 4     | special  | (0, 60, 300, 50)    |
pub fn five_key_layout() -> KeyboardLayout {
    let mut layout = empty_layout();
    layout.add_key(StandardKey::new(Rect::new(0, 0, 50, 50), Finger::LeftLittle));
    layout.add_key(
        StandardKey::new(Rect::new(60, 0, 50, 50), Finger::LeftIndex).with_haptic_marker(true),
    );
    layout.add_key(
        SpecialKey::new(Rect::new(120, 0, 100, 50), SpecialKeyType::Shift, "Shift")
            .with_modifier_id("shift"),
    );
    layout.add_key(StandardKey::new(Rect::new(230, 0, 50, 50), Finger::RightIndex));
    layout.add_key(SpecialKey::new(
        Rect::new(0, 60, 300, 50),
        SpecialKeyType::Space,
        "",
    ));
    layout
}

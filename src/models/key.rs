//! Key definitions: standard (character) keys and special keys.

use crate::models::Rect;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Finger expected to press a standard key.
///
/// Ordered from the left little finger (index 0) to the right little finger
/// (index 7). Thumbs are not assigned; they press special keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Finger {
    /// Left little finger
    #[default]
    LeftLittle,
    /// Left ring finger
    LeftRing,
    /// Left middle finger
    LeftMiddle,
    /// Left index finger
    LeftIndex,
    /// Right index finger
    RightIndex,
    /// Right middle finger
    RightMiddle,
    /// Right ring finger
    RightRing,
    /// Right little finger
    RightLittle,
}

impl Finger {
    /// All fingers in index order.
    pub const ALL: [Self; 8] = [
        Self::LeftLittle,
        Self::LeftRing,
        Self::LeftMiddle,
        Self::LeftIndex,
        Self::RightIndex,
        Self::RightMiddle,
        Self::RightRing,
        Self::RightLittle,
    ];

    /// Returns the finger for a finger index, if in range.
    #[must_use]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(usize::from(index)).copied()
    }

    /// Returns the finger index (0-7).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns true for fingers of the left hand.
    #[must_use]
    pub const fn is_left_hand(self) -> bool {
        self.index() < 4
    }
}

impl fmt::Display for Finger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LeftLittle => "left little",
            Self::LeftRing => "left ring",
            Self::LeftMiddle => "left middle",
            Self::LeftIndex => "left index",
            Self::RightIndex => "right index",
            Self::RightMiddle => "right middle",
            Self::RightRing => "right ring",
            Self::RightLittle => "right little",
        };
        write!(f, "{name}")
    }
}

/// Function of a special key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SpecialKeyType {
    /// Any other non-character key (modifiers such as Ctrl, Alt, AltGr)
    #[default]
    Other,
    /// Tabulator
    Tab,
    /// Caps lock
    CapsLock,
    /// Shift
    Shift,
    /// Backspace
    Backspace,
    /// Return / Enter
    Return,
    /// Space bar
    Space,
}

impl fmt::Display for SpecialKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Other => "other",
            Self::Tab => "tab",
            Self::CapsLock => "caps lock",
            Self::Shift => "shift",
            Self::Backspace => "backspace",
            Self::Return => "return",
            Self::Space => "space",
        };
        write!(f, "{name}")
    }
}

/// A character key with a finger assignment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StandardKey {
    /// Position and size on the layout canvas
    pub rect: Rect,
    /// Finger expected to press this key
    pub finger: Finger,
    /// Whether the key carries a tactile marker (the bumps on F and J)
    pub has_haptic_marker: bool,
}

impl StandardKey {
    /// Creates a new standard key at `rect` assigned to `finger`.
    #[must_use]
    pub const fn new(rect: Rect, finger: Finger) -> Self {
        Self {
            rect,
            finger,
            has_haptic_marker: false,
        }
    }

    /// Sets the haptic marker flag.
    #[must_use]
    pub const fn with_haptic_marker(mut self, has_haptic_marker: bool) -> Self {
        self.has_haptic_marker = has_haptic_marker;
        self
    }
}

/// A non-character key such as Shift, Backspace or Space.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpecialKey {
    /// Position and size on the layout canvas
    pub rect: Rect,
    /// What the key does
    pub kind: SpecialKeyType,
    /// Text drawn on the key
    pub label: String,
    /// Modifier group this key belongs to (empty if none)
    pub modifier_id: String,
}

impl SpecialKey {
    /// Creates a new special key.
    pub fn new(rect: Rect, kind: SpecialKeyType, label: impl Into<String>) -> Self {
        Self {
            rect,
            kind,
            label: label.into(),
            modifier_id: String::new(),
        }
    }

    /// Sets the modifier group id.
    pub fn with_modifier_id(mut self, modifier_id: impl Into<String>) -> Self {
        self.modifier_id = modifier_id.into();
        self
    }
}

/// Variant tag of a [`Key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// [`StandardKey`]
    Standard,
    /// [`SpecialKey`]
    Special,
}

/// A key on a keyboard layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Character key
    Standard(StandardKey),
    /// Non-character key
    Special(SpecialKey),
}

impl Key {
    /// Returns the variant tag.
    #[must_use]
    pub const fn kind(&self) -> KeyKind {
        match self {
            Self::Standard(_) => KeyKind::Standard,
            Self::Special(_) => KeyKind::Special,
        }
    }

    /// Returns the key rectangle.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        match self {
            Self::Standard(key) => key.rect,
            Self::Special(key) => key.rect,
        }
    }

    /// Sets the key rectangle.
    pub fn set_rect(&mut self, rect: Rect) {
        match self {
            Self::Standard(key) => key.rect = rect,
            Self::Special(key) => key.rect = rect,
        }
    }

    /// Returns the standard key, if this is one.
    #[must_use]
    pub const fn as_standard(&self) -> Option<&StandardKey> {
        match self {
            Self::Standard(key) => Some(key),
            Self::Special(_) => None,
        }
    }

    /// Returns the special key, if this is one.
    #[must_use]
    pub const fn as_special(&self) -> Option<&SpecialKey> {
        match self {
            Self::Special(key) => Some(key),
            Self::Standard(_) => None,
        }
    }

}

impl From<StandardKey> for Key {
    fn from(key: StandardKey) -> Self {
        Self::Standard(key)
    }
}

impl From<SpecialKey> for Key {
    fn from(key: SpecialKey) -> Self {
        Self::Special(key)
    }
}

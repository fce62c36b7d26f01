//! Data models for keyboard layouts, keys and courses.
//!
//! Models are independent of the command layer and of any UI; they expose
//! plain getters and setters which the commands in [`crate::commands`] wrap.

pub mod course;
pub mod geometry;
pub mod key;
pub mod keyboard_layout;

// Re-export all model types
pub use course::Course;
pub use geometry::{Rect, Size};
pub use key::{Finger, Key, KeyKind, SpecialKey, SpecialKeyType, StandardKey};
pub use keyboard_layout::{KeyboardLayout, LayoutId};

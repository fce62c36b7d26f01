//! Keyboard layout document.

use crate::models::{Key, Size, SpecialKey, StandardKey};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identity of a layout document.
///
/// Two commands only merge if they target the same document, which is decided
/// by comparing ids rather than titles or contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LayoutId(Uuid);

impl LayoutId {
    /// Generates a fresh random id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for LayoutId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A keyboard layout: canvas size plus an ordered list of keys.
///
/// Key order is the visual/tab order and is preserved by all operations.
///
/// # Validation
///
/// - Every key lies within `[0, size)` on both axes
/// - Every key has a positive width and height
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardLayout {
    /// Document identity
    #[serde(default)]
    id: LayoutId,
    /// Display title (e.g., "German (Neo 2)")
    title: String,
    /// Identifier name (e.g., "de.neo")
    name: String,
    /// Canvas size in pixels
    size: Size,
    /// Keys in visual order
    keys: Vec<Key>,
}

impl KeyboardLayout {
    /// Creates an empty layout with a fresh id.
    pub fn new(title: impl Into<String>, name: impl Into<String>, size: Size) -> Self {
        Self {
            id: LayoutId::new(),
            title: title.into(),
            name: name.into(),
            size,
            keys: Vec::new(),
        }
    }

    /// Returns the document identity.
    #[must_use]
    pub const fn id(&self) -> LayoutId {
        self.id
    }

    /// Returns the display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the display title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Returns the identifier name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the identifier name.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Returns the canvas size.
    #[must_use]
    pub const fn size(&self) -> Size {
        self.size
    }

    /// Sets the canvas size.
    ///
    /// Keys are not moved; use `SetKeyboardLayoutSizeCommand` to resize with
    /// clamping.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// Returns the number of keys.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.keys.len()
    }

    /// Iterates over the keys in order.
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.keys.iter()
    }

    /// Returns the key at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    #[must_use]
    pub fn key(&self, index: usize) -> &Key {
        self.keys.get(index).unwrap_or_else(|| {
            panic!("key index {index} out of range ({} keys)", self.keys.len())
        })
    }

    /// Returns the key at `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn key_mut(&mut self, index: usize) -> &mut Key {
        let count = self.keys.len();
        self.keys
            .get_mut(index)
            .unwrap_or_else(|| panic!("key index {index} out of range ({count} keys)"))
    }

    /// Returns the standard key at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the key is a special key.
    #[must_use]
    pub fn standard_key(&self, index: usize) -> &StandardKey {
        match self.key(index) {
            Key::Standard(key) => key,
            Key::Special(_) => panic!("key {index} is a special key, expected a standard key"),
        }
    }

    /// Returns the standard key at `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the key is a special key.
    pub fn standard_key_mut(&mut self, index: usize) -> &mut StandardKey {
        match self.key_mut(index) {
            Key::Standard(key) => key,
            Key::Special(_) => panic!("key {index} is a special key, expected a standard key"),
        }
    }

    /// Returns the special key at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the key is a standard key.
    #[must_use]
    pub fn special_key(&self, index: usize) -> &SpecialKey {
        match self.key(index) {
            Key::Special(key) => key,
            Key::Standard(_) => panic!("key {index} is a standard key, expected a special key"),
        }
    }

    /// Returns the special key at `index` mutably.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range or the key is a standard key.
    pub fn special_key_mut(&mut self, index: usize) -> &mut SpecialKey {
        match self.key_mut(index) {
            Key::Special(key) => key,
            Key::Standard(_) => panic!("key {index} is a standard key, expected a special key"),
        }
    }

    /// Appends a key.
    pub fn add_key(&mut self, key: impl Into<Key>) {
        self.keys.push(key.into());
    }

    /// Inserts a key at `index`, shifting later keys up by one.
    ///
    /// # Panics
    ///
    /// Panics if `index > key_count()`.
    pub fn insert_key(&mut self, index: usize, key: impl Into<Key>) {
        self.keys.insert(index, key.into());
    }

    /// Removes the key at `index` and hands it to the caller.
    ///
    /// Later keys shift down by one.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn remove_key(&mut self, index: usize) -> Key {
        assert!(
            index < self.keys.len(),
            "key index {index} out of range ({} keys)",
            self.keys.len()
        );
        self.keys.remove(index)
    }

    /// Validates the layout structure.
    ///
    /// Checks:
    /// - Every key has a positive width and height
    /// - Every key lies within the canvas
    pub fn validate(&self) -> Result<()> {
        for (index, key) in self.keys.iter().enumerate() {
            let rect = key.rect();

            if rect.width <= 0 || rect.height <= 0 {
                anyhow::bail!(
                    "Key {} has an empty size ({}x{})",
                    index,
                    rect.width,
                    rect.height
                );
            }

            if !rect.fits(self.size) {
                anyhow::bail!(
                    "Key {} at ({}, {}) with size {}x{} lies outside the {}x{} layout",
                    index,
                    rect.left,
                    rect.top,
                    rect.width,
                    rect.height,
                    self.size.width,
                    self.size.height
                );
            }
        }

        Ok(())
    }
}

//! In-memory catalog of editable resources.
//!
//! The catalog lists courses and keyboard layouts in insertion order. Views
//! that only offer one kind of resource (the keyboard layout chooser of the
//! new-course form, for example) work on a filtered view.

use crate::models::{Course, KeyboardLayout};

/// Kind of a catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    /// Typing course
    Course,
    /// Keyboard layout
    KeyboardLayout,
}

/// Summary of a keyboard layout known to the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyboardLayoutEntry {
    /// Identifier name, referenced by courses
    pub name: String,
    /// Display title
    pub title: String,
}

impl From<&KeyboardLayout> for KeyboardLayoutEntry {
    fn from(layout: &KeyboardLayout) -> Self {
        Self {
            name: layout.name().to_string(),
            title: layout.title().to_string(),
        }
    }
}

/// One catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEntry {
    /// A course
    Course(Course),
    /// A keyboard layout
    KeyboardLayout(KeyboardLayoutEntry),
}

impl ResourceEntry {
    /// Kind of this entry.
    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::Course(_) => ResourceKind::Course,
            Self::KeyboardLayout(_) => ResourceKind::KeyboardLayout,
        }
    }

    /// Display title of this entry.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Course(course) => &course.title,
            Self::KeyboardLayout(layout) => &layout.title,
        }
    }
}

/// Ordered list of known resources.
#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    entries: Vec<ResourceEntry>,
}

impl ResourceCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a course.
    pub fn add_course(&mut self, course: Course) {
        tracing::debug!(id = %course.id, title = %course.title, "catalog: added course");
        self.entries.push(ResourceEntry::Course(course));
    }

    /// Adds a keyboard layout.
    pub fn add_keyboard_layout(&mut self, layout: impl Into<KeyboardLayoutEntry>) {
        let layout = layout.into();
        tracing::debug!(name = %layout.name, "catalog: added keyboard layout");
        self.entries.push(ResourceEntry::KeyboardLayout(layout));
    }

    /// All entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[ResourceEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the catalog has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one kind, in insertion order.
    pub fn filtered(&self, kind: ResourceKind) -> impl Iterator<Item = &ResourceEntry> {
        self.entries.iter().filter(move |entry| entry.kind() == kind)
    }

    /// Keyboard layouts, in insertion order.
    pub fn keyboard_layouts(&self) -> impl Iterator<Item = &KeyboardLayoutEntry> {
        self.entries.iter().filter_map(|entry| match entry {
            ResourceEntry::KeyboardLayout(layout) => Some(layout),
            ResourceEntry::Course(_) => None,
        })
    }

    /// Courses, in insertion order.
    pub fn courses(&self) -> impl Iterator<Item = &Course> {
        self.entries.iter().filter_map(|entry| match entry {
            ResourceEntry::Course(course) => Some(course),
            ResourceEntry::KeyboardLayout(_) => None,
        })
    }
}

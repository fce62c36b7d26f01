//! Typing course resource.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A typing course bound to one keyboard layout.
///
/// # Validation
///
/// - title must be non-empty
/// - keyboard_layout_name must be non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier (uuid v4, also used as the storage file stem)
    pub id: String,
    /// Display title
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Name of the keyboard layout the course is written for
    pub keyboard_layout_name: String,
}

impl Course {
    /// Creates a new course with a fresh id.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        keyboard_layout_name: impl Into<String>,
    ) -> Result<Self> {
        let course = Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            description: description.into(),
            keyboard_layout_name: keyboard_layout_name.into(),
        };
        course.validate()?;
        Ok(course)
    }

    /// Validates the course fields.
    pub fn validate(&self) -> Result<()> {
        if self.title.is_empty() {
            anyhow::bail!("Course title cannot be empty");
        }

        if self.keyboard_layout_name.is_empty() {
            anyhow::bail!("Course '{}' has no keyboard layout", self.title);
        }

        Ok(())
    }
}

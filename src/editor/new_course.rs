//! Form model for creating a new course.
//!
//! Holds the user's input (title, description, chosen keyboard layout) and
//! decides when the form may be submitted. The layout choice is a row in the
//! keyboard-layout-only view of the [`ResourceCatalog`].

use super::resources::ResourceCatalog;
use crate::models::Course;
use anyhow::Result;

/// Input state of the "new course" form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewCourseForm {
    title: String,
    description: String,
    keyboard_layout_row: Option<usize>,
}

impl NewCourseForm {
    /// Creates an empty form with no layout selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Title as entered.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Description as entered.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Selected row in the keyboard layout list.
    #[must_use]
    pub fn keyboard_layout_row(&self) -> Option<usize> {
        self.keyboard_layout_row
    }

    /// Selects a row in the keyboard layout list (`None` clears the selection).
    pub fn select_keyboard_layout(&mut self, row: Option<usize>) {
        self.keyboard_layout_row = row;
    }

    /// Whether the form can be submitted: a title is entered and a layout is selected.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.title.is_empty() && self.keyboard_layout_row.is_some()
    }

    /// Name of the selected keyboard layout, or an empty string if the
    /// selection does not resolve to a layout in `catalog`.
    #[must_use]
    pub fn keyboard_layout_name(&self, catalog: &ResourceCatalog) -> String {
        self.keyboard_layout_row
            .and_then(|row| catalog.keyboard_layouts().nth(row))
            .map(|layout| layout.name.clone())
            .unwrap_or_default()
    }

    /// Builds the course described by the form.
    pub fn create_course(&self, catalog: &ResourceCatalog) -> Result<Course> {
        if !self.is_valid() {
            anyhow::bail!("New course form is incomplete: a title and a keyboard layout are required");
        }

        Course::new(
            self.title.clone(),
            self.description.clone(),
            self.keyboard_layout_name(catalog),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{KeyboardLayout, Size};

    fn catalog() -> ResourceCatalog {
        let mut catalog = ResourceCatalog::new();
        catalog.add_course(Course::new("Existing", "", "us").unwrap());
        catalog.add_keyboard_layout(&KeyboardLayout::new("US", "us", Size::new(10, 10)));
        catalog.add_keyboard_layout(&KeyboardLayout::new("German", "de", Size::new(10, 10)));
        catalog
    }

    #[test]
    fn test_empty_form_is_invalid() {
        assert!(!NewCourseForm::new().is_valid());
    }

    #[test]
    fn test_requires_title_and_layout() {
        let mut form = NewCourseForm::new();
        form.set_title("Home Row");
        assert!(!form.is_valid());

        form.select_keyboard_layout(Some(0));
        assert!(form.is_valid());

        form.set_title("");
        assert!(!form.is_valid());
    }

    #[test]
    fn test_layout_name_uses_filtered_rows() {
        let catalog = catalog();
        let mut form = NewCourseForm::new();

        form.select_keyboard_layout(Some(1));
        assert_eq!(form.keyboard_layout_name(&catalog), "de");

        form.select_keyboard_layout(Some(5));
        assert_eq!(form.keyboard_layout_name(&catalog), "");

        form.select_keyboard_layout(None);
        assert_eq!(form.keyboard_layout_name(&catalog), "");
    }

    #[test]
    fn test_create_course() {
        let catalog = catalog();
        let mut form = NewCourseForm::new();
        form.set_title("Home Row");
        form.set_description("asdf jklö");
        form.select_keyboard_layout(Some(0));

        let course = form.create_course(&catalog).unwrap();
        assert_eq!(course.title, "Home Row");
        assert_eq!(course.description, "asdf jklö");
        assert_eq!(course.keyboard_layout_name, "us");
    }

    #[test]
    fn test_create_course_invalid_form_fails() {
        let catalog = catalog();
        let mut form = NewCourseForm::new();
        form.set_title("Home Row");
        assert!(form.create_course(&catalog).is_err());

        form.select_keyboard_layout(Some(9));
        assert!(form.create_course(&catalog).is_err());
    }
}

//! Integration tests for editing sessions and course creation.

use keylayout_editor::config::EditorConfig;
use keylayout_editor::editor::{LayoutEditor, NewCourseForm, ResourceCatalog, ResourceKind};
use keylayout_editor::history::HistoryConfig;
use keylayout_editor::models::{Course, Finger, KeyboardLayout, Rect, Size, SpecialKeyType};

mod fixtures;
use fixtures::*;

fn editor() -> LayoutEditor {
    LayoutEditor::new(five_key_layout(), &EditorConfig::default())
}

// ============================================================================
// Layout editing
// ============================================================================

#[test]
fn test_full_edit_session_undoes_to_original() {
    let original = five_key_layout();
    let mut editor = LayoutEditor::new(original.clone(), &EditorConfig::default());

    editor.set_title("German QWERTZ");
    editor.set_name("de");
    editor.set_finger(0, Finger::LeftRing);
    editor.set_haptic_marker(3, true);
    editor.set_special_key_type(2, SpecialKeyType::CapsLock);
    editor.set_special_key_label(2, "Caps Lock");
    editor.set_special_key_modifier_id(2, "");
    editor.set_key_rect(1, Rect::new(60, 10, 50, 50));
    editor.set_size(Size::new(250, 100));
    editor.remove_key(4);

    assert_eq!(editor.layout().title(), "German QWERTZ");
    assert_eq!(editor.layout().key_count(), 4);
    assert!(editor.layout().validate().is_ok());
    assert!(editor.is_modified());

    while editor.undo() {}

    assert_eq!(*editor.layout(), original);
    assert!(!editor.is_modified());
}

#[test]
fn test_actions_follow_history() {
    let mut editor = editor();
    assert!(!editor.actions().can_undo);
    assert_eq!(editor.actions().undo_text, None);

    editor.set_finger(0, Finger::RightRing);
    let actions = editor.actions();
    assert!(actions.can_undo);
    assert!(!actions.can_redo);
    assert_eq!(actions.undo_text.as_deref(), Some("Set key finger"));

    editor.undo();
    let actions = editor.actions();
    assert!(!actions.can_undo);
    assert!(actions.can_redo);
    assert_eq!(actions.redo_text.as_deref(), Some("Set key finger"));
}

#[test]
fn test_typing_a_label_is_one_undo_step() {
    let mut editor = editor();

    for label in ["L", "Le", "Lef", "Left", "Left Shift"] {
        editor.set_special_key_label(2, label);
    }

    assert_eq!(editor.history().count(), 1);
    editor.undo();
    assert_eq!(editor.layout().special_key(2).label, "Shift");
}

#[test]
fn test_save_point_separates_merges() {
    let mut editor = editor();

    editor.set_title("A");
    editor.mark_saved();
    editor.set_title("AB");

    assert_eq!(editor.history().count(), 2);
    assert!(editor.is_modified());

    editor.undo();
    assert!(!editor.is_modified());
    assert_eq!(editor.layout().title(), "A");
}

#[test]
fn test_new_edit_after_undo_discards_redo() {
    let mut editor = editor();

    editor.set_name("one");
    editor.set_title("two");
    editor.undo();
    editor.set_finger(1, Finger::LeftMiddle);

    assert!(!editor.redo());
    assert_eq!(editor.layout().name(), "one");
    assert_eq!(editor.layout().title(), "Test Layout");
}

#[test]
fn test_configured_undo_limit_applies() {
    let mut config = EditorConfig::default();
    config.history = HistoryConfig { undo_limit: 2 };
    let mut editor = LayoutEditor::new(empty_layout(), &config);

    editor.set_title("a");
    editor.set_name("b");
    editor.set_size(Size::new(640, 480));

    assert_eq!(editor.history().count(), 2);
    assert!(editor.undo());
    assert!(editor.undo());
    assert!(!editor.undo());
    assert_eq!(editor.layout().title(), "a");
}

#[test]
#[should_panic(expected = "expected a special key")]
fn test_special_key_edit_on_standard_key_panics() {
    let mut editor = editor();
    editor.set_special_key_label(0, "oops");
}

#[test]
#[should_panic(expected = "out of range")]
fn test_remove_out_of_range_panics() {
    let mut editor = editor();
    editor.remove_key(5);
}

// ============================================================================
// Course creation
// ============================================================================

fn catalog() -> ResourceCatalog {
    let mut catalog = ResourceCatalog::new();
    catalog.add_keyboard_layout(&KeyboardLayout::new("US QWERTY", "us", Size::new(800, 300)));
    catalog.add_course(Course::new("Touch Typing", "Basics", "us").unwrap());
    catalog.add_keyboard_layout(&KeyboardLayout::new("Dvorak", "dvorak", Size::new(800, 300)));
    catalog
}

#[test]
fn test_catalog_filters_by_kind() {
    let catalog = catalog();

    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.filtered(ResourceKind::KeyboardLayout).count(), 2);
    assert_eq!(catalog.filtered(ResourceKind::Course).count(), 1);

    let names: Vec<_> = catalog.keyboard_layouts().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["us", "dvorak"]);
}

#[test]
fn test_new_course_from_selected_layout() {
    let mut catalog = catalog();
    let mut form = NewCourseForm::new();
    assert!(!form.is_valid());

    form.set_title("Dvorak Drills");
    form.set_description("Home row first");
    assert!(!form.is_valid());

    form.select_keyboard_layout(Some(1));
    assert!(form.is_valid());
    assert_eq!(form.keyboard_layout_name(&catalog), "dvorak");

    let course = form.create_course(&catalog).unwrap();
    assert_eq!(course.title, "Dvorak Drills");
    assert_eq!(course.description, "Home row first");
    assert_eq!(course.keyboard_layout_name, "dvorak");

    catalog.add_course(course);
    assert_eq!(catalog.courses().count(), 2);
}

#[test]
fn test_new_course_with_stale_selection_fails() {
    let catalog = catalog();
    let mut form = NewCourseForm::new();
    form.set_title("Ghost");
    form.select_keyboard_layout(Some(7));

    assert!(form.is_valid());
    assert_eq!(form.keyboard_layout_name(&catalog), "");
    assert!(form.create_course(&catalog).is_err());
}

#[test]
fn test_edited_layout_appears_in_catalog() {
    let mut editor = LayoutEditor::new(empty_layout(), &EditorConfig::default());
    editor.set_title("Colemak");
    editor.set_name("colemak");
    let layout = editor.into_layout();

    let mut catalog = ResourceCatalog::new();
    catalog.add_keyboard_layout(&layout);

    let entry = catalog.keyboard_layouts().next().unwrap();
    assert_eq!(entry.title, "Colemak");
    assert_eq!(entry.name, "colemak");
}

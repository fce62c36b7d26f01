//! Editor state: layout editing sessions and resource management.
//!
//! This layer sits between views and the command/history core. It owns the
//! documents being edited and exposes the state views bind to.

pub mod new_course;
pub mod resources;
pub mod session;

pub use new_course::NewCourseForm;
pub use resources::{KeyboardLayoutEntry, ResourceCatalog, ResourceEntry, ResourceKind};
pub use session::{EditorActions, LayoutEditor};

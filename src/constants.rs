//! Application-wide constants.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "keylayout-editor";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "KeyLayoutEditor";

/// Environment variable overriding the config directory (used by tests).
pub const CONFIG_DIR_ENV: &str = "KEYLAYOUT_EDITOR_CONFIG_DIR";

/// Largest accepted undo limit.
pub const MAX_UNDO_LIMIT: usize = 10_000;

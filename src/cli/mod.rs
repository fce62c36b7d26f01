//! CLI command handlers.
//!
//! Headless, scriptable access to the editor's settings.

pub mod common;
pub mod config;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliErrorKind, CliResult, ExitCode};
pub use config::ConfigArgs;

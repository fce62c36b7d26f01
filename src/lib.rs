//! KeyLayout Editor Library
//!
//! This library provides the editing core for typing-tutor resources:
//! keyboard layout documents, undoable edit commands over them, the undo
//! history, and the editor state built on top.

// Module declarations
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod editor;
pub mod history;
pub mod logging;
pub mod models;

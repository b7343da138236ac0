//! Terminal runtime for the Galleon engine.
//!
//! This crate is the presentation layer the engine core treats as an
//! external collaborator: it owns keystroke editing, history recall, and
//! rendering. Each finalized line is handed to the session, and the
//! suggestion engine's completion is rendered as a dimmed inline hint.
//!
//! # Modules
//!
//! - [`editor`] - Line editor abstraction over rustyline
//! - [`repl`] - The interactive loop
//! - [`content`] - Demo world and JSON content loading

pub mod content;
pub mod editor;
pub mod repl;

pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use repl::Repl;

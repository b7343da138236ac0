//! Galleon - Text adventure engine
//!
//! This crate re-exports all layers of the Galleon engine for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: galleon_runtime     — REPL, line editor, demo content
//! Layer 2: galleon_interpreter — Grammar, resolver, continuations, suggestions
//! Layer 1: galleon_events      — Use/command/move hook tables
//!          galleon_world       — Rooms, exits, objects, inventory
//! Layer 0: galleon_foundation  — Core types (ids, directions, responses, errors)
//! ```

pub use galleon_events as events;
pub use galleon_foundation as foundation;
pub use galleon_interpreter as interpreter;
pub use galleon_runtime as runtime;
pub use galleon_world as world;

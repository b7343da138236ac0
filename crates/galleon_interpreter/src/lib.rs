//! Command interpreter for the Galleon text-adventure engine.
//!
//! This crate turns one raw input line into a world mutation plus a tagged
//! response.
//!
//! # Architecture
//!
//! ```text
//! "use keycard with door"
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ CONTINUATION     │  → a pending disambiguation menu or second-object
//! │ CHECK            │    prompt consumes the whole line and flow stops here
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ DISPATCHER       │  → verb "use" via synonym table, argument string
//! │ (grammar table)  │    "keycard with door"
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ OBJECT           │  → NotFound | Found(ref) | Ambiguous(candidates),
//! │ RESOLVER         │    searched over inventory then room
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ EVENT HOOKS      │  → content override, or the verb's default logic
//! └──────────────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │ SUGGESTION       │  → completion table rebuilt from the mutated world
//! │ REBUILD          │    before the response is handed back
//! └──────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`grammar`] - The verb table: synonyms, response kinds, executors
//! - [`resolver`] - Name to object lookup across room and inventory scopes
//! - [`continuation`] - The single-slot multi-turn interaction state
//! - [`suggestion`] - Completion table and backtracking lookup
//! - [`dispatch`] - Verb executors and default verb logic
//! - [`session`] - One player's explicit session state

pub mod continuation;
pub mod dispatch;
pub mod grammar;
pub mod resolver;
pub mod session;
pub mod suggestion;

pub use continuation::{Continuation, ResumeAction};
pub use grammar::{ResponseKind, Verb, VerbEntry, GRAMMAR};
pub use resolver::{resolve, Resolution, ResolvedRef, Scope, Scopes};
pub use session::Session;
pub use suggestion::{SuggestionNode, SuggestionTable, MAX_SUGGESTION_DEPTH};

//! Error types for the Galleon engine.
//!
//! Uses `thiserror` for ergonomic error definition.
//!
//! Player-facing failures (unknown commands, unresolvable names, invalid
//! disambiguation replies) are not errors: they become
//! [`Response::Error`](crate::Response::Error) text and never interrupt a
//! session. The types here cover the two remaining categories: genuine
//! runtime failures ([`Error`]) and content-authoring defects
//! ([`ContentIssue`]) detected once at load, logged, and skipped.

use thiserror::Error;

use crate::direction::Direction;
use crate::ids::{ObjectId, RoomId};

/// Convenient result alias for Galleon operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Galleon operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a malformed-content error.
    #[must_use]
    pub fn content(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Content(message.into()))
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// An I/O operation failed (terminal, content file).
    #[error("i/o error: {0}")]
    Io(String),

    /// A content file could not be parsed into content structures.
    #[error("malformed content: {0}")]
    Content(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Which of the three hook tables a key belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookKind {
    /// Use hooks, keyed by object or ordered object pair.
    Use,
    /// Command hooks, keyed by (command, object).
    Command,
    /// Move hooks, keyed by (room, direction).
    Move,
}

impl std::fmt::Display for HookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            HookKind::Use => "use",
            HookKind::Command => "command",
            HookKind::Move => "move",
        };
        write!(f, "{name}")
    }
}

/// A content-authoring defect detected at load time.
///
/// These are logged and the offending entry skipped; the session continues in
/// a best-effort state. They are surfaced to tooling and tests through the
/// issue lists returned by the world and hook-table build steps.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ContentIssue {
    /// Two rooms declared the same id; the first declaration wins.
    #[error("duplicate room id {id}")]
    DuplicateRoomId {
        /// The contested room id.
        id: RoomId,
    },

    /// Two objects declared the same id; the first declaration wins.
    #[error("duplicate object id {id} declared in room {room}")]
    DuplicateObjectId {
        /// The contested object id.
        id: ObjectId,
        /// The room whose declaration was skipped.
        room: RoomId,
    },

    /// An exit references a room id that does not exist; the slot is emptied.
    #[error("exit {direction} of room {room} references unknown room {target}")]
    DanglingExit {
        /// The room carrying the exit.
        room: RoomId,
        /// The exit slot.
        direction: Direction,
        /// The missing target room id.
        target: RoomId,
    },

    /// The declared starting room does not exist.
    #[error("starting room {id} does not exist")]
    UnknownStartingRoom {
        /// The missing starting room id.
        id: RoomId,
    },

    /// An object name contains the reserved phrase `" with "`, which
    /// conflicts with the `use` command grammar.
    #[error("object {id} name {name:?} contains the reserved phrase \" with \"")]
    ReservedObjectName {
        /// The object carrying the name.
        id: ObjectId,
        /// The offending name or alternate name.
        name: String,
    },

    /// Two hooks declared the same key; the first declaration wins.
    #[error("duplicate {kind} hook key ({key})")]
    DuplicateHookKey {
        /// Which hook table the collision occurred in.
        kind: HookKind,
        /// Rendered form of the contested key.
        key: String,
    },
}

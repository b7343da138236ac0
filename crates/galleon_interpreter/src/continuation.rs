//! The single-slot multi-turn interaction state.
//!
//! At most one continuation exists per session. While one is pending, the
//! entire next raw input line bypasses the dispatcher and is handed to the
//! continuation; the slot is emptied before handling, so a handler that
//! installs a successor always writes into an empty slot and nested
//! disambiguations chain sequentially instead of overwriting anything.

use crate::resolver::ResolvedRef;

/// A pending multi-turn interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Continuation {
    /// A numbered disambiguation menu is on screen. The next line must be an
    /// integer in `1..=candidates.len()`; anything else cancels.
    AwaitingDisambiguation {
        /// The matching objects, in the order they were listed.
        candidates: Vec<ResolvedRef>,
        /// The action to resume once a candidate is chosen.
        resume: ResumeAction,
    },
    /// A `use … with …` is waiting for its second object. The next line is
    /// taken verbatim as the second object's name.
    AwaitingSecondObject {
        /// The already-resolved first object.
        first: ResolvedRef,
    },
}

/// What a disambiguation choice resumes, carrying any payload captured when
/// the continuation was opened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResumeAction {
    /// Examine the chosen object.
    Examine,
    /// Take the chosen object.
    Take,
    /// Drop the chosen object.
    Drop,
    /// Use the chosen object on its own.
    UseAlone,
    /// The chosen object is the first of a pair; the second phrase was
    /// already typed and is carried here verbatim (it may be empty, in which
    /// case the player is asked for the second object).
    UseWithPhrase {
        /// The pending with-phrase, exactly as typed.
        phrase: String,
    },
    /// The chosen object is the second of a pair.
    UseAsSecond {
        /// The already-resolved first object.
        first: ResolvedRef,
    },
}

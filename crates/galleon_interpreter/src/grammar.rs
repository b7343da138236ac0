//! The command grammar table.
//!
//! One entry per canonical verb. Each entry carries the synonym words that
//! resolve to it, a response-kind tag, a help line, a suggestion enumerator
//! feeding the completion table, and the executor run by the dispatcher.

use galleon_foundation::Response;
use galleon_world::{Inventory, World};

use crate::dispatch;
use crate::session::Session;
use crate::suggestion::{self, SuggestionNode};

/// A canonical verb. Discriminants index into [`GRAMMAR`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verb {
    /// Describe the room or an object.
    Examine,
    /// Move through an exit.
    Go,
    /// Pick up an object.
    Take,
    /// Drop a held object.
    Drop,
    /// List held objects.
    Inventory,
    /// Use one object, or two together.
    Use,
    /// Switch to the map view.
    Map,
    /// Show the command list.
    Help,
}

/// How a verb's response is rendered by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResponseKind {
    /// Plain display text.
    Text,
    /// A scene change to the named view.
    Navigate(&'static str),
}

/// One grammar table entry.
#[derive(Debug, PartialEq)]
pub struct VerbEntry {
    /// The canonical verb.
    pub verb: Verb,
    /// Canonical command word.
    pub canonical: &'static str,
    /// Synonym words that resolve to this verb.
    pub synonyms: &'static [&'static str],
    /// Response-kind tag for the presentation layer.
    pub kind: ResponseKind,
    /// One-line description shown by `help`.
    pub help: &'static str,
    /// Enumerates the valid next tokens given current world state.
    pub suggest: fn(&World, &Inventory) -> SuggestionNode,
    /// Executes the verb on the already-tokenized argument string.
    pub exec: fn(&mut Session, &str) -> Response,
}

/// The grammar table, in [`Verb`] discriminant order.
pub const GRAMMAR: &[VerbEntry] = &[
    VerbEntry {
        verb: Verb::Examine,
        canonical: "examine",
        synonyms: &["look", "x"],
        kind: ResponseKind::Text,
        help: "Describe the current room or a specific object",
        suggest: suggestion::suggest_examine,
        exec: dispatch::exec_examine,
    },
    VerbEntry {
        verb: Verb::Go,
        canonical: "go",
        synonyms: &["walk", "head"],
        kind: ResponseKind::Text,
        help: "Move through an exit (north, east, south, west)",
        suggest: suggestion::suggest_go,
        exec: dispatch::exec_go,
    },
    VerbEntry {
        verb: Verb::Take,
        canonical: "take",
        synonyms: &["grab", "get"],
        kind: ResponseKind::Text,
        help: "Pick up an object in the room",
        suggest: suggestion::suggest_take,
        exec: dispatch::exec_take,
    },
    VerbEntry {
        verb: Verb::Drop,
        canonical: "drop",
        synonyms: &["leave"],
        kind: ResponseKind::Text,
        help: "Drop a held object in the current room",
        suggest: suggestion::suggest_drop,
        exec: dispatch::exec_drop,
    },
    VerbEntry {
        verb: Verb::Inventory,
        canonical: "inventory",
        synonyms: &["inv", "i"],
        kind: ResponseKind::Text,
        help: "List the objects you are carrying",
        suggest: suggestion::suggest_none,
        exec: dispatch::exec_inventory,
    },
    VerbEntry {
        verb: Verb::Use,
        canonical: "use",
        synonyms: &[],
        kind: ResponseKind::Text,
        help: "Use an object on its own, or with another object",
        suggest: suggestion::suggest_use,
        exec: dispatch::exec_use,
    },
    VerbEntry {
        verb: Verb::Map,
        canonical: "map",
        synonyms: &["navigate"],
        kind: ResponseKind::Navigate("map"),
        help: "Open the map view",
        suggest: suggestion::suggest_none,
        exec: dispatch::exec_map,
    },
    VerbEntry {
        verb: Verb::Help,
        canonical: "help",
        synonyms: &["commands"],
        kind: ResponseKind::Text,
        help: "Show this command list",
        suggest: suggestion::suggest_help,
        exec: dispatch::exec_help,
    },
];

/// Resolves a typed word (already lower-cased) to its grammar entry, through
/// the synonym table.
#[must_use]
pub fn lookup(word: &str) -> Option<&'static VerbEntry> {
    GRAMMAR
        .iter()
        .find(|entry| entry.canonical == word || entry.synonyms.contains(&word))
}

/// Returns the grammar entry for a verb.
#[must_use]
pub fn entry(verb: Verb) -> &'static VerbEntry {
    &GRAMMAR[verb as usize]
}

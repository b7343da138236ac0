//! The predictive-completion table and its backtracking lookup.
//!
//! The table is an immutable value: a nested mapping from command words (and
//! their synonyms) through valid argument tokens, capped at three levels. It
//! is rebuilt wholesale from the live world whenever state changes, so a
//! suggestion can never outlive the object or room it came from. Rebuilding
//! is cheap: identical subtrees (every synonym shares its verb's subtree)
//! are structurally shared.

use im::OrdMap;

use galleon_world::{GameObject, Inventory, World};

use crate::grammar::GRAMMAR;

/// Maximum nesting depth of the table: command, first argument, second
/// argument. Deep enough for `use <obj> <obj>` (the literal `with` is
/// stripped before lookup, mirroring how the table omits it).
pub const MAX_SUGGESTION_DEPTH: usize = 3;

/// One level of valid continuations below a token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SuggestionNode {
    children: OrdMap<String, SuggestionNode>,
}

impl SuggestionNode {
    /// A node with no continuations.
    #[must_use]
    pub fn leaf() -> Self {
        Self::default()
    }

    /// A node whose children are all leaves.
    #[must_use]
    pub fn from_names(names: impl IntoIterator<Item = String>) -> Self {
        Self {
            children: names
                .into_iter()
                .map(|name| (name, SuggestionNode::leaf()))
                .collect(),
        }
    }

    /// A node with explicit child subtrees.
    #[must_use]
    pub fn with_children(children: impl IntoIterator<Item = (String, SuggestionNode)>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Returns the child subtrees, keyed by token.
    #[must_use]
    pub fn children(&self) -> &OrdMap<String, SuggestionNode> {
        &self.children
    }

    /// Returns true when this node offers no continuations.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// The completion table of one session, derived from World + Inventory.
#[derive(Clone, Debug, Default)]
pub struct SuggestionTable {
    entries: OrdMap<String, SuggestionNode>,
}

impl SuggestionTable {
    /// Builds the table from current world state.
    ///
    /// For each canonical verb and each of its synonyms, the verb's
    /// suggestion enumerator produces the subtree of valid next tokens.
    #[must_use]
    pub fn rebuild(world: &World, inventory: &Inventory) -> Self {
        let mut entries = OrdMap::new();
        for entry in GRAMMAR {
            let node = (entry.suggest)(world, inventory);
            for synonym in entry.synonyms {
                entries.insert((*synonym).to_string(), node.clone());
            }
            entries.insert(entry.canonical.to_string(), node);
        }
        Self { entries }
    }

    /// Returns the top-level entries, keyed by command word.
    #[must_use]
    pub fn entries(&self) -> &OrdMap<String, SuggestionNode> {
        &self.entries
    }

    /// Computes the completion of the text typed so far.
    ///
    /// Returns the suffix that would extend the input to the first
    /// fully-successful candidate chain, with the already-typed portion
    /// stripped off, or an empty string when no chain succeeds. Inputs
    /// ending in whitespace never complete (there is no partial word).
    #[must_use]
    pub fn complete(&self, input: &str) -> String {
        if input.is_empty() || input.ends_with(char::is_whitespace) {
            return String::new();
        }
        let mut line = input.trim().to_lowercase();
        if line.starts_with("use ") {
            // The use grammar's "with" separator is not part of the table.
            line = line.replace(" with ", " ");
        }
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            return String::new();
        }
        search(&self.entries, &words, 0, None).unwrap_or_default()
    }
}

/// Depth-bounded backtracking search.
///
/// At each level one or more remaining words are grouped into a candidate
/// prefix (object names are multi-word); every candidate sharing that prefix
/// is tried in order, recursing on the remaining words, before the next
/// grouping is attempted. A greedy single-candidate match would be wrong:
/// a prefix can match multiple tokens that only diverge a level deeper.
fn search<'t>(
    level: &'t OrdMap<String, SuggestionNode>,
    words: &[&str],
    depth: usize,
    matched: Option<(&'t str, usize)>,
) -> Option<String> {
    if words.is_empty() {
        return matched.map(|(candidate, typed_len)| candidate[typed_len..].to_string());
    }
    if depth >= MAX_SUGGESTION_DEPTH {
        return None;
    }

    for split in 1..=words.len() {
        let prefix = words[..split].join(" ");
        for (candidate, node) in level.iter() {
            if !candidate.starts_with(prefix.as_str()) {
                continue;
            }
            let matched = Some((candidate.as_str(), prefix.len()));
            if let Some(found) = search(&node.children, &words[split..], depth + 1, matched) {
                return Some(found);
            }
        }
    }
    None
}

// Suggestion enumerators, one per grammar entry.

pub(crate) fn suggest_examine(world: &World, inventory: &Inventory) -> SuggestionNode {
    SuggestionNode::from_names(reachable_names(world, inventory))
}

pub(crate) fn suggest_go(_world: &World, _inventory: &Inventory) -> SuggestionNode {
    SuggestionNode::from_names(
        galleon_foundation::Direction::ALL
            .iter()
            .map(ToString::to_string),
    )
}

pub(crate) fn suggest_take(world: &World, _inventory: &Inventory) -> SuggestionNode {
    let names = world.current_room().into_iter().flat_map(|room| {
        room.objects()
            .filter(|obj| obj.pickupable())
            .map(lowercase_name)
    });
    SuggestionNode::from_names(names)
}

pub(crate) fn suggest_drop(_world: &World, inventory: &Inventory) -> SuggestionNode {
    SuggestionNode::from_names(inventory.iter().map(lowercase_name))
}

pub(crate) fn suggest_use(world: &World, inventory: &Inventory) -> SuggestionNode {
    let names = reachable_names(world, inventory);
    let with_targets = SuggestionNode::from_names(names.clone());
    SuggestionNode::with_children(
        names
            .into_iter()
            .map(|name| (name, with_targets.clone())),
    )
}

pub(crate) fn suggest_help(_world: &World, _inventory: &Inventory) -> SuggestionNode {
    SuggestionNode::from_names(GRAMMAR.iter().map(|entry| entry.canonical.to_string()))
}

pub(crate) fn suggest_none(_world: &World, _inventory: &Inventory) -> SuggestionNode {
    SuggestionNode::leaf()
}

fn reachable_names(world: &World, inventory: &Inventory) -> Vec<String> {
    let mut names: Vec<String> = inventory.iter().map(lowercase_name).collect();
    if let Some(room) = world.current_room() {
        names.extend(room.objects().map(lowercase_name));
    }
    names
}

fn lowercase_name(object: &GameObject) -> String {
    object.name().to_lowercase()
}

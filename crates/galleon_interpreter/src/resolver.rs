//! Object resolution: typed name to world object(s).
//!
//! Matching is case-insensitive against an object's display name or any of
//! its alternate names. Because names are not unique, resolution has three
//! outcomes; callers never silently pick a candidate from an ambiguity, it
//! always routes through the continuation manager.

use galleon_foundation::ObjectId;
use galleon_world::{GameObject, Inventory, World};

/// Where a resolved object was found.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    /// The player's inventory.
    Inventory,
    /// The player's current room.
    Room,
}

/// A resolved object reference: id plus the scope it was found in.
///
/// Only the id crosses turn boundaries (inside a continuation payload), never
/// a live object reference; the object is looked up again when acted on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRef {
    /// The object's world-unique id.
    pub id: ObjectId,
    /// The scope the object was found in.
    pub scope: Scope,
}

/// Which scopes a resolution searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Scopes {
    /// Search the player's inventory.
    pub inventory: bool,
    /// Search the current room.
    pub room: bool,
}

impl Scopes {
    /// Inventory and room. Used by examine and use.
    pub const ALL: Scopes = Scopes {
        inventory: true,
        room: true,
    };
    /// Room only. Used by take.
    pub const ROOM_ONLY: Scopes = Scopes {
        inventory: false,
        room: true,
    };
    /// Inventory only. Used by drop.
    pub const INVENTORY_ONLY: Scopes = Scopes {
        inventory: true,
        room: false,
    };
}

/// Outcome of resolving a typed name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// No reachable object responds to the name.
    NotFound,
    /// Exactly one object responds.
    Found(ResolvedRef),
    /// Two or more objects respond. Candidates preserve a deterministic
    /// order: inventory first (insertion order), then room (id order).
    Ambiguous(Vec<ResolvedRef>),
}

/// Resolves a typed name against the selected scopes.
#[must_use]
pub fn resolve(name: &str, scopes: Scopes, world: &World, inventory: &Inventory) -> Resolution {
    let query = name.trim().to_lowercase();
    if query.is_empty() {
        return Resolution::NotFound;
    }

    let mut candidates = Vec::new();
    if scopes.inventory {
        for object in inventory.iter().filter(|obj| obj.answers_to(&query)) {
            candidates.push(ResolvedRef {
                id: object.id().clone(),
                scope: Scope::Inventory,
            });
        }
    }
    if scopes.room {
        if let Some(room) = world.current_room() {
            for object in room.objects().filter(|obj| obj.answers_to(&query)) {
                candidates.push(ResolvedRef {
                    id: object.id().clone(),
                    scope: Scope::Room,
                });
            }
        }
    }

    match candidates.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Found(candidates.remove(0)),
        _ => Resolution::Ambiguous(candidates),
    }
}

/// Looks a resolved reference back up in the live world state.
///
/// Returns `None` when the object has moved or been removed since it was
/// resolved (a hook may have relocated it between turns).
#[must_use]
pub fn object<'a>(
    world: &'a World,
    inventory: &'a Inventory,
    target: &ResolvedRef,
) -> Option<&'a GameObject> {
    match target.scope {
        Scope::Inventory => inventory.get(&target.id),
        Scope::Room => world.current_room().and_then(|room| room.object(&target.id)),
    }
}

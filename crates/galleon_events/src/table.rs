//! The built hook lookup tables.

use std::collections::HashMap;

use tracing::warn;

use galleon_foundation::{ContentIssue, Direction, HookKind, ObjectId, RoomId};

use crate::decl::{CommandHandler, HookSet, MoveHandler, UseHandler};

/// Result of a paired use-hook lookup.
pub enum UseLookup<'a> {
    /// A handler is registered under this exact key.
    Handler(&'a UseHandler),
    /// No handler under this key, but one exists under the reversed pair.
    /// Used only to produce the "try reversing them" hint; the reversed
    /// handler is never executed with swapped roles.
    Reversed,
    /// No handler under this key or its reverse.
    Missing,
}

/// The three immutable hook tables of one session.
///
/// Built once by [`HookTable::build`]; queried by the dispatcher after name
/// resolution and before default verb logic.
#[derive(Default)]
pub struct HookTable {
    single_use: HashMap<ObjectId, UseHandler>,
    paired_use: HashMap<(ObjectId, ObjectId), UseHandler>,
    command: HashMap<(String, ObjectId), CommandHandler>,
    movement: HashMap<(RoomId, Direction), MoveHandler>,
}

impl HookTable {
    /// Creates an empty table (no hooks registered).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds the three declared lists into the three tables.
    ///
    /// A second insertion under an already-used key is a collision: it is
    /// logged, returned as a [`ContentIssue::DuplicateHookKey`], and skipped.
    /// The first declaration wins, matching how the world build keeps the
    /// first of two duplicate object declarations.
    #[must_use]
    pub fn build(set: HookSet) -> (Self, Vec<ContentIssue>) {
        let mut table = Self::new();
        let mut issues = Vec::new();

        for decl in set.use_hooks {
            match decl.with_obj {
                Some(with_obj) => {
                    let key = (decl.use_obj, with_obj);
                    if table.paired_use.contains_key(&key) {
                        issues.push(ContentIssue::DuplicateHookKey {
                            kind: HookKind::Use,
                            key: format!("{} with {}", key.0, key.1),
                        });
                    } else {
                        table.paired_use.insert(key, decl.handler);
                    }
                }
                None => {
                    if table.single_use.contains_key(&decl.use_obj) {
                        issues.push(ContentIssue::DuplicateHookKey {
                            kind: HookKind::Use,
                            key: decl.use_obj.to_string(),
                        });
                    } else {
                        table.single_use.insert(decl.use_obj, decl.handler);
                    }
                }
            }
        }

        for decl in set.command_hooks {
            let key = (decl.command, decl.object);
            if table.command.contains_key(&key) {
                issues.push(ContentIssue::DuplicateHookKey {
                    kind: HookKind::Command,
                    key: format!("{} {}", key.0, key.1),
                });
            } else {
                table.command.insert(key, decl.handler);
            }
        }

        for decl in set.move_hooks {
            let key = (decl.room, decl.direction);
            if table.movement.contains_key(&key) {
                issues.push(ContentIssue::DuplicateHookKey {
                    kind: HookKind::Move,
                    key: format!("{} {}", key.0, key.1),
                });
            } else {
                table.movement.insert(key, decl.handler);
            }
        }

        for issue in &issues {
            warn!(%issue, "hook table collision, declaration skipped");
        }

        (table, issues)
    }

    /// Looks up a use hook for one object or an ordered pair.
    ///
    /// With a `with_obj`, the reversed pair is checked only when the exact
    /// key misses, and only to report [`UseLookup::Reversed`].
    #[must_use]
    pub fn use_hook(&self, use_obj: &ObjectId, with_obj: Option<&ObjectId>) -> UseLookup<'_> {
        match with_obj {
            Some(with_obj) => {
                let key = (use_obj.clone(), with_obj.clone());
                if let Some(handler) = self.paired_use.get(&key) {
                    UseLookup::Handler(handler)
                } else if self.paired_use.contains_key(&(with_obj.clone(), use_obj.clone())) {
                    UseLookup::Reversed
                } else {
                    UseLookup::Missing
                }
            }
            None => match self.single_use.get(use_obj) {
                Some(handler) => UseLookup::Handler(handler),
                None => UseLookup::Missing,
            },
        }
    }

    /// Looks up a command hook.
    #[must_use]
    pub fn command_hook(&self, command: &str, object: &ObjectId) -> Option<&CommandHandler> {
        self.command.get(&(command.to_string(), object.clone()))
    }

    /// Looks up a move hook.
    #[must_use]
    pub fn move_hook(&self, room: &RoomId, direction: Direction) -> Option<&MoveHandler> {
        self.movement.get(&(room.clone(), direction))
    }

    /// Returns the number of registered hooks across all three tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.single_use.len() + self.paired_use.len() + self.command.len() + self.movement.len()
    }

    /// Returns true when no hooks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! One player's session state.
//!
//! Everything a command can touch lives in this one explicit value: the
//! world, the inventory, the hook tables, the single continuation slot, the
//! bounded history, and the current suggestion table. Nothing is ambient, so
//! multiple sessions can coexist by constructing multiple values.

use galleon_events::HookTable;
use galleon_foundation::{CommandHistory, Response};
use galleon_world::{Inventory, World};

use crate::continuation::Continuation;
use crate::dispatch;
use crate::suggestion::SuggestionTable;

/// A live session: one world, one inventory, one continuation slot.
pub struct Session {
    pub(crate) world: World,
    pub(crate) inventory: Inventory,
    pub(crate) hooks: HookTable,
    pub(crate) continuation: Option<Continuation>,
    pub(crate) history: CommandHistory,
    pub(crate) suggestions: SuggestionTable,
}

impl Session {
    /// Creates a session over a built world and hook table, with an empty
    /// inventory. The suggestion table is derived immediately so completion
    /// works before the first command.
    #[must_use]
    pub fn new(world: World, hooks: HookTable) -> Self {
        let inventory = Inventory::new();
        let suggestions = SuggestionTable::rebuild(&world, &inventory);
        Self {
            world,
            inventory,
            hooks,
            continuation: None,
            history: CommandHistory::new(),
            suggestions,
        }
    }

    /// Interprets one finalized input line and returns the response.
    ///
    /// The pipeline runs to completion before returning: a pending
    /// continuation consumes the whole line, otherwise the line is parsed
    /// and dispatched; hooks run and mutate the world; the suggestion table
    /// is rebuilt from the mutated state; only then is the response handed
    /// back.
    pub fn handle_line(&mut self, line: &str) -> Response {
        let line = line.trim();
        if line.is_empty() {
            return Response::text(String::new());
        }
        self.history.record(line);

        // Taking the slot returns the machine to Idle before the line is
        // handled; a handler that installs a successor writes into an empty
        // slot, so nested interactions chain instead of overwriting.
        let response = match self.continuation.take() {
            Some(pending) => self.resume_continuation(pending, line),
            None => dispatch::run(self, line),
        };

        self.suggestions = SuggestionTable::rebuild(&self.world, &self.inventory);
        response
    }

    /// Computes the completion of a partially typed line.
    ///
    /// Read-only: the presentation layer calls this for rendering and never
    /// mutates interpreter state.
    #[must_use]
    pub fn complete(&self, input: &str) -> String {
        self.suggestions.complete(input)
    }

    /// Returns the current suggestion table.
    #[must_use]
    pub fn suggestions(&self) -> &SuggestionTable {
        &self.suggestions
    }

    /// Returns the world.
    #[must_use]
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Returns the world mutably (for tooling and tests).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Returns the inventory.
    #[must_use]
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Returns the command history.
    #[must_use]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Returns true while a multi-turn interaction is pending.
    #[must_use]
    pub fn awaiting_continuation(&self) -> bool {
        self.continuation.is_some()
    }
}

//! Content-defined event hooks.
//!
//! An event is a manipulation of the game world triggered by using objects,
//! by running a command on a specific object, or by moving out of a specific
//! room. Content declares hooks as three lists ([`HookSet`]); a pure build
//! step folds them into three immutable lookup tables ([`HookTable`]) once
//! per session, reporting key collisions instead of silently doubling.
//!
//! The dispatcher queries the tables after name resolution and before any
//! default verb logic runs:
//!
//! - use hooks: keyed by a single object id or an order-sensitive id pair.
//!   A handler returning `None` means the combination explicitly fails;
//!   there is no default use behavior to fall back to.
//! - command hooks: keyed by (canonical command, object id). A handler
//!   returning `None` means "run the verb's default logic".
//! - move hooks: keyed by (room id, direction). A handler returning `None`
//!   means default movement; otherwise [`MoveHookOutcome`] controls whether
//!   its text replaces or precedes the default outcome.

pub mod decl;
pub mod table;

pub use decl::{
    CommandHandler, CommandHookDecl, HookSet, MoveHandler, MoveHookDecl, MoveHookOutcome,
    UseHandler, UseHookDecl,
};
pub use table::{HookTable, UseLookup};

//! Hook declarations, as authored by content.

use galleon_foundation::{Direction, ObjectId, RoomId};
use galleon_world::{Inventory, World};

/// Handler for a use hook.
///
/// Returning `None` means the combination explicitly fails and the fixed
/// "cannot use" message is shown.
pub type UseHandler = Box<dyn Fn(&mut World, &mut Inventory) -> Option<String>>;

/// Handler for a command hook.
///
/// Returning `None` means "run the verb's default logic"; returning text
/// replaces the default logic entirely.
pub type CommandHandler = Box<dyn Fn(&mut World, &mut Inventory) -> Option<String>>;

/// Handler for a move hook.
///
/// Returning `None` means "run the default movement logic".
pub type MoveHandler = Box<dyn Fn(&mut World, &mut Inventory) -> Option<MoveHookOutcome>>;

/// Structured result of a move hook.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveHookOutcome {
    /// When true, only [`text`](Self::text) is shown and default movement is
    /// suppressed. When false, the text (if non-empty) precedes the default
    /// movement outcome.
    pub replace: bool,
    /// Text to show.
    pub text: String,
}

impl MoveHookOutcome {
    /// An outcome that replaces the default movement entirely.
    #[must_use]
    pub fn replace(text: impl Into<String>) -> Self {
        Self {
            replace: true,
            text: text.into(),
        }
    }

    /// An outcome whose text is shown before the default movement outcome.
    #[must_use]
    pub fn prefix(text: impl Into<String>) -> Self {
        Self {
            replace: false,
            text: text.into(),
        }
    }
}

/// One declared use hook: a single object, or an order-sensitive pair.
pub struct UseHookDecl {
    /// The object being used.
    pub use_obj: ObjectId,
    /// The object it is used on; `None` for a single-object hook.
    pub with_obj: Option<ObjectId>,
    /// The handler to run.
    pub handler: UseHandler,
}

/// One declared command hook.
pub struct CommandHookDecl {
    /// Canonical command name (e.g. "examine").
    pub command: String,
    /// The object the override applies to.
    pub object: ObjectId,
    /// The handler to run.
    pub handler: CommandHandler,
}

/// One declared move hook.
pub struct MoveHookDecl {
    /// The room the hook intercepts movement out of.
    pub room: RoomId,
    /// The direction of movement intercepted.
    pub direction: Direction,
    /// The handler to run.
    pub handler: MoveHandler,
}

/// The three declared hook lists, as handed over by content at session start.
#[derive(Default)]
pub struct HookSet {
    /// Declared use hooks.
    pub use_hooks: Vec<UseHookDecl>,
    /// Declared command hooks.
    pub command_hooks: Vec<CommandHookDecl>,
    /// Declared move hooks.
    pub move_hooks: Vec<MoveHookDecl>,
}

impl HookSet {
    /// Creates an empty hook set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a single-object use hook.
    #[must_use]
    pub fn on_use(
        mut self,
        use_obj: impl Into<ObjectId>,
        handler: impl Fn(&mut World, &mut Inventory) -> Option<String> + 'static,
    ) -> Self {
        self.use_hooks.push(UseHookDecl {
            use_obj: use_obj.into(),
            with_obj: None,
            handler: Box::new(handler),
        });
        self
    }

    /// Declares a two-object use hook. Key order is significant: the hook
    /// fires for `use A with B`, not for `use B with A`.
    #[must_use]
    pub fn on_use_with(
        mut self,
        use_obj: impl Into<ObjectId>,
        with_obj: impl Into<ObjectId>,
        handler: impl Fn(&mut World, &mut Inventory) -> Option<String> + 'static,
    ) -> Self {
        self.use_hooks.push(UseHookDecl {
            use_obj: use_obj.into(),
            with_obj: Some(with_obj.into()),
            handler: Box::new(handler),
        });
        self
    }

    /// Declares a command hook.
    #[must_use]
    pub fn on_command(
        mut self,
        command: impl Into<String>,
        object: impl Into<ObjectId>,
        handler: impl Fn(&mut World, &mut Inventory) -> Option<String> + 'static,
    ) -> Self {
        self.command_hooks.push(CommandHookDecl {
            command: command.into(),
            object: object.into(),
            handler: Box::new(handler),
        });
        self
    }

    /// Declares a move hook.
    #[must_use]
    pub fn on_move(
        mut self,
        room: impl Into<RoomId>,
        direction: Direction,
        handler: impl Fn(&mut World, &mut Inventory) -> Option<MoveHookOutcome> + 'static,
    ) -> Self {
        self.move_hooks.push(MoveHookDecl {
            room: room.into(),
            direction,
            handler: Box::new(handler),
        });
        self
    }
}

//! World model for the Galleon text-adventure engine.
//!
//! The world is pure data plus mutators: rooms with four fixed exit slots,
//! objects that live in exactly one room or in the player's inventory, and a
//! player position. It is built once per session from declarative
//! [`content`] structures; content-integrity problems (duplicate ids,
//! dangling exits) are detected during that build, logged, and skipped
//! rather than aborting the load.
//!
//! # Modules
//!
//! - [`content`] - Declarative content structures consumed at session start
//! - [`object`] - Interactable game objects
//! - [`room`] - Rooms, exits, and exit statuses
//! - [`inventory`] - The player's ordered object collection
//! - [`world`] - The room graph and player position

pub mod content;
pub mod inventory;
pub mod object;
pub mod room;
pub mod world;

pub use content::{ExitContent, ExitsContent, ObjectContent, RoomContent, WorldContent};
pub use inventory::Inventory;
pub use object::GameObject;
pub use room::{Exit, ExitStatus, Room, NUM_EXITS};
pub use world::World;

//! Declarative content structures.
//!
//! A session is created from one [`WorldContent`] value. Producing that value
//! (from a file, from embedded data) is the host's responsibility; the engine
//! core only consumes the in-memory structures and validates their
//! invariants during [`World::from_content`](crate::World::from_content).

use serde::{Deserialize, Serialize};

use galleon_foundation::{Direction, ObjectId, RoomId};

use crate::room::ExitStatus;

/// A whole world: the room graph plus the starting position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldContent {
    /// Display name of the world.
    pub name: String,
    /// Id of the room the player starts in.
    pub starting_room: RoomId,
    /// All room declarations.
    pub rooms: Vec<RoomContent>,
}

/// One room declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomContent {
    /// Unique room id.
    pub id: RoomId,
    /// Display name.
    pub name: String,
    /// Room description shown by a full examine.
    pub desc: String,
    /// The four exit slots.
    #[serde(default)]
    pub exits: ExitsContent,
    /// Objects initially placed in the room.
    #[serde(default)]
    pub objects: Vec<ObjectContent>,
    /// Optional display coordinates for external map visualization.
    /// Never interpreted by the engine core.
    #[serde(default)]
    pub coords: Option<(i32, i32)>,
}

/// The four exit slots of a room declaration, each empty or filled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitsContent {
    /// Exit to the north, if any.
    #[serde(default)]
    pub north: Option<ExitContent>,
    /// Exit to the east, if any.
    #[serde(default)]
    pub east: Option<ExitContent>,
    /// Exit to the south, if any.
    #[serde(default)]
    pub south: Option<ExitContent>,
    /// Exit to the west, if any.
    #[serde(default)]
    pub west: Option<ExitContent>,
}

impl ExitsContent {
    /// Returns the declared exit in the given direction.
    #[must_use]
    pub fn get(&self, direction: Direction) -> Option<&ExitContent> {
        match direction {
            Direction::North => self.north.as_ref(),
            Direction::East => self.east.as_ref(),
            Direction::South => self.south.as_ref(),
            Direction::West => self.west.as_ref(),
        }
    }
}

/// One filled exit slot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExitContent {
    /// Id of the target room.
    pub to: RoomId,
    /// Initial status; defaults to unlocked.
    #[serde(default)]
    pub status: ExitStatus,
}

/// One object declaration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectContent {
    /// Unique object id.
    pub id: ObjectId,
    /// Display name; does not have to be unique.
    pub name: String,
    /// Alternative names this object also responds to
    /// (e.g. "Door Key" may also respond to "key").
    #[serde(default)]
    pub alt_names: Vec<String>,
    /// Object description.
    pub desc: String,
    /// If true, the player can add this object to their inventory.
    #[serde(default)]
    pub pickupable: bool,
}

//! Rooms, exits, and exit statuses.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use galleon_foundation::{Direction, ObjectId, RoomId};

use crate::object::GameObject;

/// Number of fixed exit slots per room.
pub const NUM_EXITS: usize = 4;

/// Whether an exit can currently be traversed.
///
/// Locked and Jammed both block movement identically; they are distinguished
/// only for display and event purposes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitStatus {
    /// Movement succeeds.
    #[default]
    Unlocked,
    /// Movement blocked; can typically be opened by an event.
    Locked,
    /// Movement blocked.
    Jammed,
}

/// A filled exit slot: a target room and a traversal status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Exit {
    /// Id of the room this exit leads to.
    pub to: RoomId,
    /// Current traversal status.
    pub status: ExitStatus,
}

/// A node in the world graph.
///
/// Objects are kept in an ordered map keyed by id, which fixes their
/// enumeration order and keeps ambiguity candidate lists reproducible.
#[derive(Clone, Debug)]
pub struct Room {
    id: RoomId,
    name: String,
    desc: String,
    exits: [Option<Exit>; NUM_EXITS],
    objects: OrdMap<ObjectId, GameObject>,
    visited: bool,
    coords: Option<(i32, i32)>,
}

impl Room {
    /// Creates a room with empty exit slots and no objects.
    #[must_use]
    pub fn new(
        id: RoomId,
        name: impl Into<String>,
        desc: impl Into<String>,
        coords: Option<(i32, i32)>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            desc: desc.into(),
            exits: [None, None, None, None],
            objects: OrdMap::new(),
            visited: false,
            coords,
        }
    }

    /// Returns the room id.
    #[must_use]
    pub fn id(&self) -> &RoomId {
        &self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn desc(&self) -> &str {
        &self.desc
    }

    /// Replaces the description.
    pub fn set_desc(&mut self, desc: impl Into<String>) {
        self.desc = desc.into();
    }

    /// Returns the room name, optionally followed by the description.
    #[must_use]
    pub fn info(&self, full: bool) -> String {
        if full {
            format!("{}\n{}", self.name, self.desc)
        } else {
            self.name.clone()
        }
    }

    /// Returns the exit in the given direction, if the slot is filled.
    #[must_use]
    pub fn exit(&self, direction: Direction) -> Option<&Exit> {
        self.exits[direction.index()].as_ref()
    }

    /// Fills or empties an exit slot.
    pub fn set_exit(&mut self, direction: Direction, exit: Option<Exit>) {
        self.exits[direction.index()] = exit;
    }

    /// Changes the status of a filled exit slot.
    ///
    /// Returns false (and changes nothing) when the slot is empty.
    pub fn set_exit_status(&mut self, direction: Direction, status: ExitStatus) -> bool {
        match &mut self.exits[direction.index()] {
            Some(exit) => {
                exit.status = status;
                true
            }
            None => false,
        }
    }

    /// Returns true once the player has entered this room.
    #[must_use]
    pub fn visited(&self) -> bool {
        self.visited
    }

    /// Marks the room as visited.
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Returns the display coordinates, if declared.
    #[must_use]
    pub fn coords(&self) -> Option<(i32, i32)> {
        self.coords
    }

    /// Places an object in the room, replacing any object with the same id.
    pub fn insert_object(&mut self, object: GameObject) {
        self.objects.insert(object.id().clone(), object);
    }

    /// Removes an object from the room.
    pub fn remove_object(&mut self, id: &ObjectId) -> Option<GameObject> {
        self.objects.remove(id)
    }

    /// Returns an object by id.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&GameObject> {
        self.objects.get(id)
    }

    /// Returns a mutable object by id.
    pub fn object_mut(&mut self, id: &ObjectId) -> Option<&mut GameObject> {
        self.objects.get_mut(id)
    }

    /// Iterates over the room's objects in id order.
    pub fn objects(&self) -> impl Iterator<Item = &GameObject> {
        self.objects.values()
    }

    /// Returns the number of objects in the room.
    #[must_use]
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }
}

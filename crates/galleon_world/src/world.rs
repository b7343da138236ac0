//! The room graph and player position.

use std::collections::HashSet;

use im::OrdMap;
use tracing::warn;

use galleon_foundation::{ContentIssue, Direction, ObjectId, RoomId};

use crate::content::WorldContent;
use crate::object::{GameObject, RESERVED_NAME_PHRASE};
use crate::room::{Exit, ExitStatus, Room};

/// The live world of one session: all rooms plus the player's position.
///
/// Created once per session from [`WorldContent`] and destroyed at session
/// end. Rooms are kept in an ordered map keyed by id for reproducible
/// enumeration.
#[derive(Clone, Debug)]
pub struct World {
    name: String,
    rooms: OrdMap<RoomId, Room>,
    player_room: RoomId,
}

impl World {
    /// Builds a world from declarative content.
    ///
    /// Content-integrity problems are detected here, once: duplicate room or
    /// object ids (first declaration wins), exits referencing unknown rooms
    /// (the slot is emptied), an unknown starting room (falls back to the
    /// first room in id order), and object names containing the reserved
    /// phrase `" with "`. Each problem is logged and returned as a
    /// [`ContentIssue`]; the offending entry is skipped rather than aborting
    /// the load.
    #[must_use]
    pub fn from_content(content: WorldContent) -> (Self, Vec<ContentIssue>) {
        let mut issues = Vec::new();
        let mut seen_objects: HashSet<ObjectId> = HashSet::new();
        let mut rooms: OrdMap<RoomId, Room> = OrdMap::new();
        let mut declared_exits = Vec::new();

        for room_content in content.rooms {
            if rooms.contains_key(&room_content.id) {
                issues.push(ContentIssue::DuplicateRoomId {
                    id: room_content.id,
                });
                continue;
            }

            let mut room = Room::new(
                room_content.id.clone(),
                room_content.name,
                room_content.desc,
                room_content.coords,
            );

            for object_content in room_content.objects {
                if seen_objects.contains(&object_content.id) {
                    issues.push(ContentIssue::DuplicateObjectId {
                        id: object_content.id,
                        room: room_content.id.clone(),
                    });
                    continue;
                }
                seen_objects.insert(object_content.id.clone());

                let object = GameObject::from_content(object_content);
                check_reserved_names(&object, &mut issues);
                room.insert_object(object);
            }

            for direction in Direction::ALL {
                if let Some(exit) = room_content.exits.get(direction) {
                    declared_exits.push((room_content.id.clone(), direction, exit.clone()));
                }
            }

            rooms.insert(room_content.id.clone(), room);
        }

        // Exits are wired in a second pass so a slot can reference a room
        // declared later in the content.
        for (room_id, direction, exit) in declared_exits {
            if rooms.contains_key(&exit.to) {
                if let Some(room) = rooms.get_mut(&room_id) {
                    room.set_exit(
                        direction,
                        Some(Exit {
                            to: exit.to,
                            status: exit.status,
                        }),
                    );
                }
            } else {
                issues.push(ContentIssue::DanglingExit {
                    room: room_id,
                    direction,
                    target: exit.to,
                });
            }
        }

        let mut player_room = content.starting_room;
        if !rooms.contains_key(&player_room) {
            issues.push(ContentIssue::UnknownStartingRoom {
                id: player_room.clone(),
            });
            if let Some(first) = rooms.keys().next() {
                player_room = first.clone();
            }
        }
        if let Some(room) = rooms.get_mut(&player_room) {
            room.mark_visited();
        }

        for issue in &issues {
            warn!(%issue, "content integrity issue, entry skipped");
        }

        (
            Self {
                name: content.name,
                rooms,
                player_room,
            },
            issues,
        )
    }

    /// Returns the world's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the id of the room the player is in.
    #[must_use]
    pub fn player_room(&self) -> &RoomId {
        &self.player_room
    }

    /// Returns a room by id.
    #[must_use]
    pub fn room(&self, id: &RoomId) -> Option<&Room> {
        self.rooms.get(id)
    }

    /// Returns a mutable room by id.
    pub fn room_mut(&mut self, id: &RoomId) -> Option<&mut Room> {
        self.rooms.get_mut(id)
    }

    /// Returns the room the player is in.
    #[must_use]
    pub fn current_room(&self) -> Option<&Room> {
        self.rooms.get(&self.player_room)
    }

    /// Returns the room the player is in, mutably.
    pub fn current_room_mut(&mut self) -> Option<&mut Room> {
        self.rooms.get_mut(&self.player_room)
    }

    /// Iterates over all rooms in id order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Returns the number of rooms.
    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Moves the player through an exit.
    ///
    /// Fails (returns false, no mutation) when the slot is empty or its
    /// status is not [`ExitStatus::Unlocked`]. On success the player's room
    /// is updated and the destination is marked visited on first entry.
    pub fn move_player(&mut self, direction: Direction) -> bool {
        let Some(exit) = self.current_room().and_then(|room| room.exit(direction)) else {
            return false;
        };
        if exit.status != ExitStatus::Unlocked {
            return false;
        }
        let target = exit.to.clone();

        let Some(destination) = self.rooms.get_mut(&target) else {
            return false;
        };
        if !destination.visited() {
            destination.mark_visited();
        }
        self.player_room = target;
        true
    }

    /// Changes the status of a filled exit slot of a room.
    ///
    /// Returns false when the room does not exist or the slot is empty.
    pub fn set_exit_status(
        &mut self,
        room: &RoomId,
        direction: Direction,
        status: ExitStatus,
    ) -> bool {
        match self.rooms.get_mut(room) {
            Some(room) => room.set_exit_status(direction, status),
            None => false,
        }
    }

    /// Describes the player's room: name only, or name plus description.
    #[must_use]
    pub fn player_room_info(&self, full: bool) -> String {
        match self.current_room() {
            Some(room) => room.info(full),
            None => "Room does not exist!".to_string(),
        }
    }
}

fn check_reserved_names(object: &GameObject, issues: &mut Vec<ContentIssue>) {
    if object.name().to_lowercase().contains(RESERVED_NAME_PHRASE) {
        issues.push(ContentIssue::ReservedObjectName {
            id: object.id().clone(),
            name: object.name().to_string(),
        });
    }
    for alt in object.alt_names() {
        if alt.contains(RESERVED_NAME_PHRASE) {
            issues.push(ContentIssue::ReservedObjectName {
                id: object.id().clone(),
                name: alt.clone(),
            });
        }
    }
}

//! Demo content and JSON content loading.
//!
//! World data (rooms, exits, objects) is declarative and can be loaded from
//! a JSON file. Hook handlers are code, so hooks can only be declared here
//! (or by whatever host embeds the engine); worlds loaded from external
//! files run without hooks.

use std::fs;
use std::path::Path;

use tracing::info;

use galleon_events::{HookSet, HookTable, MoveHookOutcome};
use galleon_foundation::{Direction, Error, Result, RoomId};
use galleon_interpreter::Session;
use galleon_world::{
    ExitContent, ExitStatus, ExitsContent, ObjectContent, RoomContent, World, WorldContent,
};

/// Loads world content from a JSON file.
///
/// # Errors
///
/// Returns an error when the file cannot be read or does not parse as
/// [`WorldContent`].
pub fn load_world(path: &Path) -> Result<WorldContent> {
    let data = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("{}: {e}", path.display())))?;
    let content: WorldContent = serde_json::from_str(&data)
        .map_err(|e| Error::content(format!("{}: {e}", path.display())))?;
    info!(world = %content.name, rooms = content.rooms.len(), "loaded world content");
    Ok(content)
}

/// Builds a session from content and declared hooks. Content-integrity
/// issues are logged by the build steps and the session starts best-effort.
#[must_use]
pub fn session_from_content(content: WorldContent, hooks: HookSet) -> Session {
    let (world, _issues) = World::from_content(content);
    let (table, _issues) = HookTable::build(hooks);
    Session::new(world, table)
}

/// Builds the demo session: the demo ship plus its hooks.
#[must_use]
pub fn demo_session() -> Session {
    session_from_content(demo_world(), demo_hooks())
}

/// The demo ship: four rooms, a locked engine room, and a pair of idols
/// that share a name.
#[must_use]
pub fn demo_world() -> WorldContent {
    WorldContent {
        name: "The Galleon".to_string(),
        starting_room: RoomId::new("rm_bridge"),
        rooms: vec![
            RoomContent {
                id: RoomId::new("rm_bridge"),
                name: "Bridge".to_string(),
                desc: "Dark consoles ring the captain's chair. A corridor runs aft."
                    .to_string(),
                exits: ExitsContent {
                    south: Some(ExitContent {
                        to: RoomId::new("rm_corridor"),
                        status: ExitStatus::Unlocked,
                    }),
                    ..ExitsContent::default()
                },
                objects: vec![
                    ObjectContent {
                        id: "obj_console".into(),
                        name: "Navigation Console".to_string(),
                        alt_names: vec!["console".to_string()],
                        desc: "Its screen is cracked but alive.".to_string(),
                        pickupable: false,
                    },
                    ObjectContent {
                        id: "obj_flare".into(),
                        name: "Flare Gun".to_string(),
                        alt_names: vec!["flare".to_string(), "gun".to_string()],
                        desc: "One shell left.".to_string(),
                        pickupable: true,
                    },
                ],
                coords: Some((0, 0)),
            },
            RoomContent {
                id: RoomId::new("rm_corridor"),
                name: "Main Corridor".to_string(),
                desc: "A narrow corridor. The engine room door to the south is sealed."
                    .to_string(),
                exits: ExitsContent {
                    north: Some(ExitContent {
                        to: RoomId::new("rm_bridge"),
                        status: ExitStatus::Unlocked,
                    }),
                    south: Some(ExitContent {
                        to: RoomId::new("rm_engine_room"),
                        status: ExitStatus::Locked,
                    }),
                    east: Some(ExitContent {
                        to: RoomId::new("rm_cargo_hold"),
                        status: ExitStatus::Unlocked,
                    }),
                    ..ExitsContent::default()
                },
                objects: vec![
                    ObjectContent {
                        id: "obj_keycard".into(),
                        name: "Engineer Keycard".to_string(),
                        alt_names: vec!["keycard".to_string(), "card".to_string()],
                        desc: "A scuffed keycard on a lanyard.".to_string(),
                        pickupable: true,
                    },
                    ObjectContent {
                        id: "obj_door".into(),
                        name: "Engine Door".to_string(),
                        alt_names: vec!["door".to_string()],
                        desc: "Heavy steel, with a card reader beside it.".to_string(),
                        pickupable: false,
                    },
                ],
                coords: Some((0, 1)),
            },
            RoomContent {
                id: RoomId::new("rm_engine_room"),
                name: "Engine Room".to_string(),
                desc: "The engine turns over slowly, half asleep.".to_string(),
                exits: ExitsContent {
                    north: Some(ExitContent {
                        to: RoomId::new("rm_corridor"),
                        status: ExitStatus::Unlocked,
                    }),
                    ..ExitsContent::default()
                },
                objects: vec![ObjectContent {
                    id: "obj_manifold".into(),
                    name: "Pressure Manifold".to_string(),
                    alt_names: vec!["manifold".to_string()],
                    desc: "Needles hover in the green.".to_string(),
                    pickupable: false,
                }],
                coords: Some((0, 2)),
            },
            RoomContent {
                id: RoomId::new("rm_cargo_hold"),
                name: "Cargo Hold".to_string(),
                desc: "Crates strain against their nets. Something glints between them."
                    .to_string(),
                exits: ExitsContent {
                    west: Some(ExitContent {
                        to: RoomId::new("rm_corridor"),
                        status: ExitStatus::Unlocked,
                    }),
                    ..ExitsContent::default()
                },
                objects: vec![
                    ObjectContent {
                        id: "obj_idol_gold".into(),
                        name: "Golden Idol".to_string(),
                        alt_names: vec!["idol".to_string()],
                        desc: "Heavier than it looks.".to_string(),
                        pickupable: true,
                    },
                    ObjectContent {
                        id: "obj_idol_replica".into(),
                        name: "Idol Replica".to_string(),
                        alt_names: vec!["idol".to_string()],
                        desc: "Painted plaster.".to_string(),
                        pickupable: true,
                    },
                ],
                coords: Some((1, 1)),
            },
        ],
    }
}

/// Hooks for the demo ship.
#[must_use]
pub fn demo_hooks() -> HookSet {
    HookSet::new()
        .on_use_with("obj_keycard", "obj_door", |world, _inventory| {
            world.set_exit_status(
                &RoomId::new("rm_corridor"),
                Direction::South,
                ExitStatus::Unlocked,
            );
            if let Some(door) = world
                .room_mut(&RoomId::new("rm_corridor"))
                .and_then(|room| room.object_mut(&"obj_door".into()))
            {
                door.set_desc("Heavy steel, standing open.");
            }
            Some("You unlocked the door!".to_string())
        })
        .on_use("obj_flare", |_world, _inventory| {
            Some("A red streak arcs away over the water.".to_string())
        })
        .on_command("examine", "obj_console", |_world, _inventory| {
            Some("Charts scroll past: the heading is locked in.".to_string())
        })
        .on_move("rm_cargo_hold", Direction::West, |_world, _inventory| {
            Some(MoveHookOutcome::prefix("The idols rattle as you leave."))
        })
}

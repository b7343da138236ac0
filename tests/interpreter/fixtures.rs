//! Shared test fixture: a small ship with every hook kind.
//!
//! Layout (player starts on the bridge):
//!
//! ```text
//!   Bridge ── south ──> Corridor ── east ──> Cargo Hold
//!                          │
//!                        south (locked)
//!                          │
//!                       Engine Room
//! ```

use galleon_events::{HookSet, HookTable, MoveHookOutcome};
use galleon_foundation::{Direction, ObjectId, RoomId};
use galleon_interpreter::Session;
use galleon_world::{
    ExitContent, ExitStatus, ExitsContent, ObjectContent, RoomContent, World, WorldContent,
};

pub fn object(id: &str, name: &str, alt: &[&str], pickupable: bool) -> ObjectContent {
    ObjectContent {
        id: ObjectId::new(id),
        name: name.to_string(),
        alt_names: alt.iter().map(ToString::to_string).collect(),
        desc: format!("You look closely at the {name}."),
        pickupable,
    }
}

pub fn ship_content() -> WorldContent {
    WorldContent {
        name: "Test Ship".to_string(),
        starting_room: RoomId::new("rm_bridge"),
        rooms: vec![
            RoomContent {
                id: RoomId::new("rm_bridge"),
                name: "Bridge".to_string(),
                desc: "Dark consoles ring the captain's chair.".to_string(),
                exits: ExitsContent {
                    south: Some(ExitContent {
                        to: RoomId::new("rm_corridor"),
                        status: ExitStatus::Unlocked,
                    }),
                    ..ExitsContent::default()
                },
                objects: vec![
                    object("obj_console", "Navigation Console", &["console"], false),
                    object("obj_sword", "Sword", &["blade"], true),
                    object("obj_torch", "Torch", &["torch"], true),
                ],
                coords: Some((0, 0)),
            },
            RoomContent {
                id: RoomId::new("rm_corridor"),
                name: "Main Corridor".to_string(),
                desc: "A narrow corridor with a sealed door aft.".to_string(),
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
                    object("obj_keycard", "Engineer Keycard", &["keycard"], true),
                    object("obj_door", "Engine Door", &["door"], false),
                ],
                coords: Some((0, 1)),
            },
            RoomContent {
                id: RoomId::new("rm_engine_room"),
                name: "Engine Room".to_string(),
                desc: "The engine turns over slowly.".to_string(),
                exits: ExitsContent {
                    north: Some(ExitContent {
                        to: RoomId::new("rm_corridor"),
                        status: ExitStatus::Unlocked,
                    }),
                    ..ExitsContent::default()
                },
                objects: vec![],
                coords: Some((0, 2)),
            },
            RoomContent {
                id: RoomId::new("rm_cargo_hold"),
                name: "Cargo Hold".to_string(),
                desc: "Crates strain against their nets.".to_string(),
                exits: ExitsContent {
                    west: Some(ExitContent {
                        to: RoomId::new("rm_corridor"),
                        status: ExitStatus::Unlocked,
                    }),
                    ..ExitsContent::default()
                },
                objects: vec![
                    object("obj_idol_gold", "Golden Idol", &["idol"], true),
                    object("obj_idol_replica", "Idol Replica", &["idol"], true),
                ],
                coords: Some((1, 1)),
            },
        ],
    }
}

pub fn ship_hooks() -> HookSet {
    HookSet::new()
        .on_use_with("obj_keycard", "obj_door", |world, _| {
            world.set_exit_status(
                &RoomId::new("rm_corridor"),
                Direction::South,
                ExitStatus::Unlocked,
            );
            Some("You unlocked the door!".to_string())
        })
        .on_use_with("obj_idol_gold", "obj_keycard", |_, _| {
            Some("The idol's eyes flash.".to_string())
        })
        .on_command("examine", "obj_console", |_, _| {
            Some("The console glows softly.".to_string())
        })
        .on_move("rm_cargo_hold", Direction::West, |_, _| {
            Some(MoveHookOutcome::prefix("The idols rattle as you leave."))
        })
        .on_move("rm_bridge", Direction::East, |_, _| {
            Some(MoveHookOutcome::replace("Only open sky that way."))
        })
}

pub fn ship_session() -> Session {
    let (world, world_issues) = World::from_content(ship_content());
    assert!(world_issues.is_empty(), "{world_issues:?}");
    let (hooks, hook_issues) = HookTable::build(ship_hooks());
    assert!(hook_issues.is_empty(), "{hook_issues:?}");
    Session::new(world, hooks)
}

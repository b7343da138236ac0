//! Player movement tests.

use galleon_foundation::{Direction, RoomId};
use galleon_world::{
    ExitContent, ExitStatus, ExitsContent, RoomContent, World, WorldContent,
};

fn ship() -> World {
    let (world, issues) = World::from_content(WorldContent {
        name: "Ship".to_string(),
        starting_room: RoomId::new("rm_deck"),
        rooms: vec![
            RoomContent {
                id: RoomId::new("rm_deck"),
                name: "Deck".to_string(),
                desc: "Open sky.".to_string(),
                exits: ExitsContent {
                    south: Some(ExitContent {
                        to: RoomId::new("rm_hold"),
                        status: ExitStatus::Unlocked,
                    }),
                    east: Some(ExitContent {
                        to: RoomId::new("rm_cabin"),
                        status: ExitStatus::Locked,
                    }),
                    west: Some(ExitContent {
                        to: RoomId::new("rm_cabin"),
                        status: ExitStatus::Jammed,
                    }),
                    ..ExitsContent::default()
                },
                objects: vec![],
                coords: None,
            },
            RoomContent {
                id: RoomId::new("rm_hold"),
                name: "Hold".to_string(),
                desc: "Dark and damp.".to_string(),
                exits: ExitsContent {
                    north: Some(ExitContent {
                        to: RoomId::new("rm_deck"),
                        status: ExitStatus::Unlocked,
                    }),
                    ..ExitsContent::default()
                },
                objects: vec![],
                coords: None,
            },
            RoomContent {
                id: RoomId::new("rm_cabin"),
                name: "Cabin".to_string(),
                desc: "Snug.".to_string(),
                exits: ExitsContent::default(),
                objects: vec![],
                coords: None,
            },
        ],
    });
    assert!(issues.is_empty());
    world
}

#[test]
fn moves_only_through_unlocked_exits() {
    let mut world = ship();

    // Empty slot.
    assert!(!world.move_player(Direction::North));
    assert_eq!(world.player_room().as_str(), "rm_deck");

    // Locked and jammed both block identically.
    assert!(!world.move_player(Direction::East));
    assert!(!world.move_player(Direction::West));
    assert_eq!(world.player_room().as_str(), "rm_deck");

    // Unlocked succeeds.
    assert!(world.move_player(Direction::South));
    assert_eq!(world.player_room().as_str(), "rm_hold");
}

#[test]
fn destination_is_marked_visited_on_first_entry() {
    let mut world = ship();
    assert!(!world.room(&RoomId::new("rm_hold")).unwrap().visited());

    world.move_player(Direction::South);
    assert!(world.room(&RoomId::new("rm_hold")).unwrap().visited());

    // Going back and forth keeps both visited.
    world.move_player(Direction::North);
    world.move_player(Direction::South);
    assert!(world.room(&RoomId::new("rm_deck")).unwrap().visited());
    assert!(world.room(&RoomId::new("rm_hold")).unwrap().visited());
}

#[test]
fn unlocking_an_exit_allows_movement() {
    let mut world = ship();
    assert!(!world.move_player(Direction::East));

    assert!(world.set_exit_status(&RoomId::new("rm_deck"), Direction::East, ExitStatus::Unlocked));
    assert!(world.move_player(Direction::East));
    assert_eq!(world.player_room().as_str(), "rm_cabin");
}

#[test]
fn set_exit_status_fails_for_missing_room_or_empty_slot() {
    let mut world = ship();
    assert!(!world.set_exit_status(&RoomId::new("rm_ghost"), Direction::North, ExitStatus::Locked));
    assert!(!world.set_exit_status(&RoomId::new("rm_cabin"), Direction::North, ExitStatus::Locked));
}

#[test]
fn room_info_includes_description_only_when_full() {
    let world = ship();
    assert_eq!(world.player_room_info(false), "Deck");
    assert_eq!(world.player_room_info(true), "Deck\nOpen sky.");
}

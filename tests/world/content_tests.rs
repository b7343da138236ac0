//! Content validation tests.
//!
//! Content-integrity problems are detected once at load, reported for
//! tooling, and the offending entry is skipped; the load never aborts.

use galleon_foundation::{ContentIssue, Direction, ObjectId, RoomId};
use galleon_world::{
    ExitContent, ExitsContent, GameObject, ObjectContent, RoomContent, World, WorldContent,
};

fn room(id: &str, name: &str) -> RoomContent {
    RoomContent {
        id: RoomId::new(id),
        name: name.to_string(),
        desc: format!("{name}."),
        exits: ExitsContent::default(),
        objects: vec![],
        coords: None,
    }
}

fn object(id: &str, name: &str) -> ObjectContent {
    ObjectContent {
        id: ObjectId::new(id),
        name: name.to_string(),
        alt_names: vec![],
        desc: String::new(),
        pickupable: false,
    }
}

#[test]
fn every_exit_slot_references_an_existing_room() {
    let mut galley = room("rm_galley", "Galley");
    galley.exits.north = Some(ExitContent {
        to: RoomId::new("rm_deck"),
        status: galleon_world::ExitStatus::Unlocked,
    });
    let content = WorldContent {
        name: "Ship".to_string(),
        starting_room: RoomId::new("rm_galley"),
        rooms: vec![galley, room("rm_deck", "Deck")],
    };

    let (world, issues) = World::from_content(content);
    assert!(issues.is_empty());
    for checked in world.rooms() {
        for dir in Direction::ALL {
            if let Some(exit) = checked.exit(dir) {
                assert!(world.room(&exit.to).is_some());
            }
        }
    }
}

#[test]
fn dangling_exit_is_reported_and_slot_emptied() {
    let mut galley = room("rm_galley", "Galley");
    galley.exits.east = Some(ExitContent {
        to: RoomId::new("rm_nowhere"),
        status: galleon_world::ExitStatus::Unlocked,
    });
    let content = WorldContent {
        name: "Ship".to_string(),
        starting_room: RoomId::new("rm_galley"),
        rooms: vec![galley],
    };

    let (world, issues) = World::from_content(content);
    assert_eq!(
        issues,
        vec![ContentIssue::DanglingExit {
            room: RoomId::new("rm_galley"),
            direction: Direction::East,
            target: RoomId::new("rm_nowhere"),
        }]
    );
    let galley = world.room(&RoomId::new("rm_galley")).unwrap();
    assert!(galley.exit(Direction::East).is_none());
}

#[test]
fn exits_may_reference_rooms_declared_later() {
    let mut first = room("rm_a", "A");
    first.exits.south = Some(ExitContent {
        to: RoomId::new("rm_b"),
        status: galleon_world::ExitStatus::Unlocked,
    });
    let content = WorldContent {
        name: "Ship".to_string(),
        starting_room: RoomId::new("rm_a"),
        rooms: vec![first, room("rm_b", "B")],
    };

    let (world, issues) = World::from_content(content);
    assert!(issues.is_empty());
    let a = world.room(&RoomId::new("rm_a")).unwrap();
    assert_eq!(a.exit(Direction::South).map(|e| e.to.as_str()), Some("rm_b"));
}

#[test]
fn duplicate_object_ids_are_reported_once_each_and_first_wins() {
    let mut galley = room("rm_galley", "Galley");
    galley.objects.push(object("obj_mug", "Tin Mug"));
    let mut deck = room("rm_deck", "Deck");
    deck.objects.push(object("obj_mug", "Other Mug"));
    deck.objects.push(object("obj_mug", "Third Mug"));
    let content = WorldContent {
        name: "Ship".to_string(),
        starting_room: RoomId::new("rm_galley"),
        rooms: vec![galley, deck],
    };

    let (world, issues) = World::from_content(content);
    assert_eq!(issues.len(), 2);
    assert!(issues
        .iter()
        .all(|i| matches!(i, ContentIssue::DuplicateObjectId { .. })));

    let galley = world.room(&RoomId::new("rm_galley")).unwrap();
    assert_eq!(
        galley
            .object(&ObjectId::new("obj_mug"))
            .map(GameObject::name),
        Some("Tin Mug")
    );
    let deck = world.room(&RoomId::new("rm_deck")).unwrap();
    assert_eq!(deck.object_count(), 0);
}

#[test]
fn duplicate_room_id_keeps_the_first_declaration() {
    let content = WorldContent {
        name: "Ship".to_string(),
        starting_room: RoomId::new("rm_galley"),
        rooms: vec![room("rm_galley", "Galley"), room("rm_galley", "Impostor")],
    };

    let (world, issues) = World::from_content(content);
    assert_eq!(
        issues,
        vec![ContentIssue::DuplicateRoomId {
            id: RoomId::new("rm_galley"),
        }]
    );
    assert_eq!(world.room_count(), 1);
    assert_eq!(
        world.room(&RoomId::new("rm_galley")).map(|r| r.name()),
        Some("Galley")
    );
}

#[test]
fn reserved_phrase_in_names_is_reported() {
    let mut galley = room("rm_galley", "Galley");
    galley.objects.push(ObjectContent {
        id: ObjectId::new("obj_rod"),
        name: "Rod With Reel".to_string(),
        alt_names: vec!["pole with reel".to_string()],
        desc: String::new(),
        pickupable: true,
    });
    let content = WorldContent {
        name: "Ship".to_string(),
        starting_room: RoomId::new("rm_galley"),
        rooms: vec![galley],
    };

    let (_, issues) = World::from_content(content);
    let reserved: Vec<_> = issues
        .iter()
        .filter(|i| matches!(i, ContentIssue::ReservedObjectName { .. }))
        .collect();
    assert_eq!(reserved.len(), 2);
}

#[test]
fn unknown_starting_room_falls_back_to_first_room() {
    let content = WorldContent {
        name: "Ship".to_string(),
        starting_room: RoomId::new("rm_ghost"),
        rooms: vec![room("rm_deck", "Deck"), room("rm_galley", "Galley")],
    };

    let (world, issues) = World::from_content(content);
    assert!(issues
        .iter()
        .any(|i| matches!(i, ContentIssue::UnknownStartingRoom { .. })));
    assert_eq!(world.player_room().as_str(), "rm_deck");
    assert!(world.current_room().is_some_and(|r| r.visited()));
}

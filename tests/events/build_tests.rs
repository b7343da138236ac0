//! Hook table construction tests.

use galleon_events::{HookSet, HookTable};
use galleon_foundation::{ContentIssue, Direction, HookKind};

#[test]
fn builds_three_tables_from_declared_lists() {
    let set = HookSet::new()
        .on_use("obj_horn", |_, _| Some("A low note rolls out.".into()))
        .on_use_with("obj_key", "obj_chest", |_, _| Some("It opens.".into()))
        .on_command("examine", "obj_chart", |_, _| Some("Coastlines.".into()))
        .on_move("rm_deck", Direction::North, |_, _| None);

    let (table, issues) = HookTable::build(set);
    assert!(issues.is_empty());
    assert_eq!(table.len(), 4);
    assert!(!table.is_empty());
}

#[test]
fn empty_set_builds_an_empty_table() {
    let (table, issues) = HookTable::build(HookSet::new());
    assert!(issues.is_empty());
    assert!(table.is_empty());
}

#[test]
fn each_collision_is_reported_with_its_table() {
    let set = HookSet::new()
        .on_use("obj_horn", |_, _| None)
        .on_use("obj_horn", |_, _| None)
        .on_use_with("obj_key", "obj_chest", |_, _| None)
        .on_use_with("obj_key", "obj_chest", |_, _| None)
        .on_command("take", "obj_chart", |_, _| None)
        .on_command("take", "obj_chart", |_, _| None)
        .on_move("rm_deck", Direction::North, |_, _| None)
        .on_move("rm_deck", Direction::North, |_, _| None);

    let (table, issues) = HookTable::build(set);
    assert_eq!(table.len(), 4);
    assert_eq!(issues.len(), 4);

    let kinds: Vec<HookKind> = issues
        .iter()
        .map(|issue| match issue {
            ContentIssue::DuplicateHookKey { kind, .. } => *kind,
            other => panic!("unexpected issue {other:?}"),
        })
        .collect();
    assert_eq!(
        kinds,
        vec![HookKind::Use, HookKind::Use, HookKind::Command, HookKind::Move]
    );
}

#[test]
fn reversed_pair_is_not_a_collision() {
    let set = HookSet::new()
        .on_use_with("obj_key", "obj_chest", |_, _| None)
        .on_use_with("obj_chest", "obj_key", |_, _| None);

    let (table, issues) = HookTable::build(set);
    assert!(issues.is_empty());
    assert_eq!(table.len(), 2);
}

#[test]
fn single_and_paired_use_keys_do_not_collide() {
    let set = HookSet::new()
        .on_use("obj_key", |_, _| None)
        .on_use_with("obj_key", "obj_chest", |_, _| None);

    let (table, issues) = HookTable::build(set);
    assert!(issues.is_empty());
    assert_eq!(table.len(), 2);
}

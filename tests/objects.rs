mod common;

use brooklands::geometry::Direction;
use brooklands::objects::{GameObject, MoveRules, ObjectIndex, Step};
use glam::IVec2;

const RULES: MoveRules = MoveRules { tile_size: 32, speed: 4 };

fn setup(objects: &[GameObject]) -> ObjectIndex {
    let mut index = ObjectIndex::new();
    index.rebuild(objects);
    index
}

// ── Blocking ─────────────────────────────────────────────────────────────────

#[test]
fn solid_tile_blocks_but_turns() {
    let map = common::map(0, &[".#"]);
    let mut player = GameObject::player(IVec2::ZERO, 32);
    let mut index = setup(std::slice::from_ref(&player));
    player.intents.set(Direction::Right, true);

    assert_eq!(player.update(0, &map, &mut index, RULES), Step::Blocked(Direction::Right));
    assert_eq!(player.position(), IVec2::ZERO);
    assert_eq!(player.facing(), Direction::Right);
    assert!(!player.is_moving());
}

#[test]
fn grid_edge_blocks() {
    let map = common::map(0, &[".."]);
    let mut player = GameObject::player(IVec2::ZERO, 32);
    let mut index = setup(std::slice::from_ref(&player));
    player.intents.set(Direction::Up, true);
    assert_eq!(player.update(0, &map, &mut index, RULES), Step::Blocked(Direction::Up));
}

#[test]
fn occupied_cell_blocks() {
    let map = common::map(0, &["..."]);
    let mut objects = vec![
        GameObject::player(IVec2::ZERO, 32),
        GameObject::npc(5, "teacher", IVec2::new(1, 0), Direction::Down, 32),
    ];
    let mut index = setup(&objects);
    objects[0].intents.set(Direction::Right, true);
    assert_eq!(objects[0].update(0, &map, &mut index, RULES), Step::Blocked(Direction::Right));
}

#[test]
fn non_blocking_object_can_be_walked_through() {
    let map = common::map(0, &["..."]);
    let mut objects = vec![
        GameObject::player(IVec2::ZERO, 32),
        GameObject::npc(5, "ghost", IVec2::new(1, 0), Direction::Down, 32).with_blocking(false),
    ];
    let mut index = setup(&objects);
    assert_eq!(index.occupant(IVec2::new(1, 0)), None);
    objects[0].intents.set(Direction::Right, true);
    assert_eq!(objects[0].update(0, &map, &mut index, RULES), Step::Started(Direction::Right));
}

// ── Moving ───────────────────────────────────────────────────────────────────

#[test]
fn move_claims_destination_immediately() {
    let map = common::map(0, &["..."]);
    let mut player = GameObject::player(IVec2::ZERO, 32);
    let mut index = setup(std::slice::from_ref(&player));
    player.intents.set(Direction::Right, true);

    assert_eq!(player.update(0, &map, &mut index, RULES), Step::Started(Direction::Right));
    assert_eq!(player.position(), IVec2::new(1, 0));
    assert_eq!(player.pixel(), IVec2::new(4, 0));
    assert_eq!(index.occupant(IVec2::new(1, 0)), Some(0));
    assert_eq!(index.occupant(IVec2::ZERO), None);
}

#[test]
fn claimed_cell_blocks_a_second_mover() {
    let map = common::map(0, &["...", "..."]);
    let mut objects = vec![
        GameObject::player(IVec2::ZERO, 32),
        GameObject::npc(0, "friend", IVec2::new(1, 1), Direction::Up, 32),
    ];
    let mut index = setup(&objects);
    objects[0].intents.set(Direction::Right, true);
    objects[1].intents.set(Direction::Up, true);

    assert_eq!(objects[0].update(0, &map, &mut index, RULES), Step::Started(Direction::Right));
    assert_eq!(objects[1].update(1, &map, &mut index, RULES), Step::Blocked(Direction::Up));
}

#[test]
fn move_completes_after_tile_over_speed_ticks() {
    let map = common::map(0, &["..."]);
    let mut player = GameObject::player(IVec2::ZERO, 32);
    let mut index = setup(std::slice::from_ref(&player));
    player.intents.set(Direction::Right, true);

    let mut steps = Vec::new();
    for _ in 0..8 {
        steps.push(player.update(0, &map, &mut index, RULES));
    }
    assert_eq!(steps[0], Step::Started(Direction::Right));
    assert!(steps[1..7].iter().all(|s| *s == Step::Moving(Direction::Right)));
    assert_eq!(steps[7], Step::Arrived(IVec2::new(1, 0)));
    assert_eq!(player.pixel(), IVec2::new(32, 0));
    assert!(!player.intents.get(Direction::Right));
    assert_eq!(player.update(0, &map, &mut index, RULES), Step::Idle);
}

#[test]
fn intent_changes_mid_move_are_ignored() {
    let map = common::map(0, &["...", "..."]);
    let mut player = GameObject::player(IVec2::ZERO, 32);
    let mut index = setup(std::slice::from_ref(&player));
    player.intents.set(Direction::Right, true);
    player.update(0, &map, &mut index, RULES);
    player.intents.set(Direction::Down, true);
    assert_eq!(player.update(0, &map, &mut index, RULES), Step::Moving(Direction::Right));
}

// ── Sprites ──────────────────────────────────────────────────────────────────

#[test]
fn sprite_name_encodes_direction_and_frame() {
    let map = common::map(0, &["..."]);
    let mut player = GameObject::player(IVec2::ZERO, 32);
    assert_eq!(player.sprite_name(), "player_down_0");

    let mut index = setup(std::slice::from_ref(&player));
    player.intents.set(Direction::Right, true);
    player.update(0, &map, &mut index, RULES);
    assert_eq!(player.sprite_name(), "player_right_1");
    for _ in 0..4 {
        player.update(0, &map, &mut index, RULES);
    }
    assert_eq!(player.sprite_name(), "player_right_2");
}

#[test]
fn face_towards_picks_dominant_axis() {
    let mut npc = GameObject::npc(1, "friend", IVec2::new(5, 5), Direction::Down, 32);
    npc.face_towards(IVec2::new(2, 4));
    assert_eq!(npc.facing(), Direction::Left);
    npc.face_towards(IVec2::new(5, 5));
    assert_eq!(npc.facing(), Direction::Left);
    assert_eq!(npc.facing_cell(), IVec2::new(4, 5));
}

#[test]
fn relocate_drops_move_in_progress() {
    let map = common::map(0, &["..."]);
    let mut player = GameObject::player(IVec2::ZERO, 32);
    let mut index = setup(std::slice::from_ref(&player));
    player.intents.set(Direction::Right, true);
    player.update(0, &map, &mut index, RULES);
    player.relocate(IVec2::new(2, 0), 32);
    assert!(!player.is_moving());
    assert!(!player.intents.any());
    assert_eq!(player.pixel(), IVec2::new(64, 0));
}

#[test]
fn rebuild_lets_later_object_win_shared_cell() {
    let objects = vec![
        GameObject::player(IVec2::ZERO, 32),
        GameObject::npc(3, "friend", IVec2::ZERO, Direction::Down, 32),
    ];
    let index = setup(&objects);
    assert_eq!(index.occupant(IVec2::ZERO), Some(1));
    assert_eq!(index.len(), 1);
}

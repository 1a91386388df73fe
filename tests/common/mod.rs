#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use glam::{IVec2, UVec2};

use brooklands::audio::{AudioService, Clip};
use brooklands::config::GameConfig;
use brooklands::geometry::Direction;
use brooklands::hooks::{GameHooks, HomeActivity, NpcRole};
use brooklands::map::{InteractiveText, MapCatalog, MapId, MapSource, NpcSpawn, TileMap};
use brooklands::tiles::{Tile, TileKind};
use brooklands::world::WorldState;

// ── Maps ─────────────────────────────────────────────────────────────────────

/// `.` floor, `#` wall, `D` door, `T` sign, `B` bed (asks to confirm).
pub fn school_tiles() -> Vec<Tile> {
    vec![
        Tile::new('.', "floor", false, TileKind::Floor),
        Tile::new('#', "wall", true, TileKind::Floor),
        Tile::new('D', "door", false, TileKind::Door),
        Tile::new('T', "sign", true, TileKind::Interactive { opens_menu: false }),
        Tile::new('B', "bed", true, TileKind::Interactive { opens_menu: true }),
        Tile::new('n', "bed", true, TileKind::Interactive { opens_menu: true }),
    ]
}

pub fn source(id: MapId, rows: &[&str]) -> MapSource {
    MapSource {
        id,
        name: format!("map {id}"),
        grid: rows.join("\n"),
        tiles: school_tiles(),
        fallback: '#',
        minimap_id: 0,
        icon: IVec2::ZERO,
        interactive: HashMap::new(),
        npcs: Vec::new(),
    }
}

pub fn map(id: MapId, rows: &[&str]) -> TileMap {
    TileMap::from_source(source(id, rows)).unwrap()
}

pub fn with_sign(mut src: MapSource, at: IVec2, text: &str) -> MapSource {
    src.interactive.insert(at, InteractiveText { portrait: 3, text: text.into() });
    src
}

pub fn with_npc(mut src: MapSource, id: u32, at: IVec2) -> MapSource {
    src.npcs.push(NpcSpawn { id, position: at, facing: Direction::Down, sprite: "npc".into() });
    src
}

/// `w × h` open floor.
pub fn open_floor(id: MapId, w: usize, h: usize) -> TileMap {
    let row = ".".repeat(w);
    let rows: Vec<&str> = (0..h).map(|_| row.as_str()).collect();
    map(id, &rows)
}

pub fn catalog(maps: impl IntoIterator<Item = TileMap>) -> MapCatalog {
    let mut catalog = MapCatalog::new();
    for map in maps {
        catalog.insert(map);
    }
    catalog
}

/// 640×480 logical screen; moves finish in one tick.
pub fn config() -> GameConfig {
    GameConfig {
        viewport_cells: UVec2::new(20, 15),
        tile_size: 32,
        walk_speed: 32,
        text_speed: 1000,
        transition_ticks: 3,
        ..GameConfig::default()
    }
    .normalized()
}

pub fn world(maps: impl IntoIterator<Item = TileMap>, start_map: MapId, start: IVec2) -> WorldState {
    WorldState::new(config(), catalog(maps), start_map, start).unwrap()
}

// ── Recording audio ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Sound {
    Play(Clip),
    Loop(Clip),
    Stop,
}

#[derive(Clone, Default)]
pub struct RecordingAudio {
    pub log: Rc<RefCell<Vec<Sound>>>,
}

impl AudioService for RecordingAudio {
    fn play(&mut self, clip: Clip) { self.log.borrow_mut().push(Sound::Play(clip)); }
    fn loop_music(&mut self, clip: Clip) { self.log.borrow_mut().push(Sound::Loop(clip)); }
    fn stop(&mut self) { self.log.borrow_mut().push(Sound::Stop); }
}

// ── Recording hooks ──────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Call {
    NpcInteraction(u32),
    NpcAnswer(u32, NpcRole, bool),
    GiftItem(u32, u8),
    MapImage(u32),
    Friend(u8),
    Grade(u8),
    Lesson(u8),
    GoHome(bool),
    Home(HomeActivity),
    Boost(u8),
    NewGameFinished,
    NewDayFinished,
    AfterActivityFinished,
    LessonFinished,
}

#[derive(Default)]
pub struct RecordingHooks {
    pub calls: Vec<Call>,
}

impl GameHooks for RecordingHooks {
    fn npc_interaction(&mut self, _w: &mut WorldState, npc: u32) { self.calls.push(Call::NpcInteraction(npc)); }
    fn npc_answer(&mut self, _w: &mut WorldState, npc: u32, role: NpcRole, yes: bool) {
        self.calls.push(Call::NpcAnswer(npc, role, yes));
    }
    fn npc_gift_item(&mut self, _w: &mut WorldState, npc: u32, slot: u8) { self.calls.push(Call::GiftItem(npc, slot)); }
    fn load_map_image(&mut self, _w: &mut WorldState, floor: u32) { self.calls.push(Call::MapImage(floor)); }
    fn load_friend(&mut self, _w: &mut WorldState, friend: u8) { self.calls.push(Call::Friend(friend)); }
    fn load_grade(&mut self, _w: &mut WorldState, subject: u8) { self.calls.push(Call::Grade(subject)); }
    fn lesson_action(&mut self, _w: &mut WorldState, action: u8) { self.calls.push(Call::Lesson(action)); }
    fn go_home(&mut self, _w: &mut WorldState, yes: bool) { self.calls.push(Call::GoHome(yes)); }
    fn home_activity(&mut self, _w: &mut WorldState, activity: HomeActivity) { self.calls.push(Call::Home(activity)); }
    fn grade_boost(&mut self, _w: &mut WorldState, subject: u8) { self.calls.push(Call::Boost(subject)); }
    fn new_game_finished(&mut self, _w: &mut WorldState) { self.calls.push(Call::NewGameFinished); }
    fn new_day_finished(&mut self, _w: &mut WorldState) { self.calls.push(Call::NewDayFinished); }
    fn after_activity_finished(&mut self, _w: &mut WorldState) { self.calls.push(Call::AfterActivityFinished); }
    fn lesson_finished(&mut self, _w: &mut WorldState) { self.calls.push(Call::LessonFinished); }
}

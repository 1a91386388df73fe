pub mod index;

pub use index::ObjectIndex;

use glam::IVec2;

use crate::geometry::{Direction, approach};
use crate::map::TileMap;

/// Index of an object in the world's object list.
pub type ObjectId = usize;

/// What an object is. Interaction dispatches on this tag.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ObjectKind {
    Player,
    Npc { id: u32 },
}

/// Pending movement requests, one flag per direction.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Intents {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Intents {
    pub fn set(&mut self, dir: Direction, on: bool) {
        match dir {
            Direction::Up => self.up = on,
            Direction::Down => self.down = on,
            Direction::Left => self.left = on,
            Direction::Right => self.right = on,
        }
    }

    pub fn get(&self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.up,
            Direction::Down => self.down,
            Direction::Left => self.left,
            Direction::Right => self.right,
        }
    }

    /// Highest-priority requested direction (up, down, left, right).
    pub fn first(&self) -> Option<Direction> {
        Direction::ALL.into_iter().find(|&d| self.get(d))
    }

    pub fn any(&self) -> bool {
        self.first().is_some()
    }
}

/// Movement tuning shared by every object.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveRules {
    pub tile_size: i32,
    /// Pixels travelled per tick while moving.
    pub speed: i32,
}

/// Result of one [`GameObject::update`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Idle,
    /// A move was requested but the destination is solid or occupied.
    Blocked(Direction),
    /// A new move began this tick (the destination cell is now claimed).
    Started(Direction),
    /// Still sliding towards the claimed cell.
    Moving(Direction),
    /// The move finished; the object rests on this cell.
    Arrived(IVec2),
}

/// Any grid-occupying, per-tick-updating, renderable entity.
///
/// State machine: idle ↔ moving(direction). A move claims the destination
/// cell immediately (so nothing else can enter it) and then slides the pixel
/// position there at [`MoveRules::speed`].
#[derive(Clone, Debug)]
pub struct GameObject {
    kind: ObjectKind,
    position: IVec2,
    pixel: IVec2,
    facing: Direction,
    pub intents: Intents,
    moving: Option<Direction>,
    sprite: String,
    blocking: bool,
    /// Ticks spent moving; drives the walk-cycle frame.
    stride: u32,
}

impl GameObject {
    pub fn new(kind: ObjectKind, sprite: impl Into<String>, position: IVec2, facing: Direction, tile_size: u32) -> Self {
        Self {
            kind,
            position,
            pixel: position * tile_size as i32,
            facing,
            intents: Intents::default(),
            moving: None,
            sprite: sprite.into(),
            blocking: true,
            stride: 0,
        }
    }

    pub fn player(position: IVec2, tile_size: u32) -> Self {
        Self::new(ObjectKind::Player, "player", position, Direction::Down, tile_size)
    }

    pub fn npc(id: u32, sprite: impl Into<String>, position: IVec2, facing: Direction, tile_size: u32) -> Self {
        Self::new(ObjectKind::Npc { id }, sprite, position, facing, tile_size)
    }

    pub fn with_blocking(mut self, blocking: bool) -> Self {
        self.blocking = blocking;
        self
    }

    pub fn kind(&self) -> ObjectKind { self.kind }
    pub fn position(&self) -> IVec2 { self.position }
    /// Pixel position, equal to `position × tile_size` when at rest.
    pub fn pixel(&self) -> IVec2 { self.pixel }
    pub fn facing(&self) -> Direction { self.facing }
    pub fn is_moving(&self) -> bool { self.moving.is_some() }
    pub fn is_blocking(&self) -> bool { self.blocking }

    pub fn npc_id(&self) -> Option<u32> {
        match self.kind {
            ObjectKind::Npc { id } => Some(id),
            ObjectKind::Player => None,
        }
    }

    /// The cell directly in front of the object.
    pub fn facing_cell(&self) -> IVec2 {
        self.position + self.facing.delta()
    }

    pub fn face(&mut self, dir: Direction) {
        self.facing = dir;
    }

    /// Turn to look at `target`; no-op if standing on it.
    pub fn face_towards(&mut self, target: IVec2) {
        if let Some(dir) = Direction::towards(self.position, target) {
            self.facing = dir;
        }
    }

    /// Sprite for the current direction and walk frame:
    /// `"{sprite}_{direction}_{frame}"`, frame 0 when idle, 1/2 alternating
    /// every four ticks while moving.
    pub fn sprite_name(&self) -> String {
        let frame = if self.moving.is_some() { 1 + (self.stride / 4) % 2 } else { 0 };
        format!("{}_{}_{}", self.sprite, self.facing.name(), frame)
    }

    /// Place the object on `position` at rest, dropping any move in progress.
    pub fn relocate(&mut self, position: IVec2, tile_size: u32) {
        self.position = position;
        self.pixel = position * tile_size as i32;
        self.moving = None;
        self.intents = Intents::default();
        self.stride = 0;
    }

    /// Advance one tick.
    ///
    /// Idle with an intent: face that way, then start a move if `map` allows
    /// the destination and `index` shows no other object on it; otherwise
    /// stay put. Moving: slide towards the claimed cell and clear the intent
    /// once the cell is reached.
    pub fn update(&mut self, me: ObjectId, map: &TileMap, index: &mut ObjectIndex, rules: MoveRules) -> Step {
        if let Some(dir) = self.moving {
            return self.slide(dir, rules);
        }

        let Some(dir) = self.intents.first() else {
            return Step::Idle;
        };
        self.facing = dir;

        let dest = self.position + dir.delta();
        if !map.is_walkable(dest) || index.is_blocked_for(dest, me) {
            return Step::Blocked(dir);
        }

        if self.blocking {
            index.relocate(me, self.position, dest);
        }
        self.position = dest;
        self.moving = Some(dir);
        self.stride = 0;

        match self.slide(dir, rules) {
            Step::Moving(_) => Step::Started(dir),
            arrived => arrived,
        }
    }

    fn slide(&mut self, dir: Direction, rules: MoveRules) -> Step {
        let target = self.position * rules.tile_size;
        self.pixel = approach(self.pixel, target, rules.speed.max(1));
        self.stride += 1;
        if self.pixel == target {
            self.moving = None;
            self.intents.set(dir, false);
            Step::Arrived(self.position)
        } else {
            Step::Moving(dir)
        }
    }
}

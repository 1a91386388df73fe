// =============================================================================
// GEOMETRY.RS: Grid directions and cell arithmetic
//
// Grid coordinates are `IVec2` with (0, 0) at the top-left cell, x growing to
// the right and y growing downwards. Pixel coordinates use the same axes.
// =============================================================================

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// A grid cell position `(col, row)`.
pub type Position = IVec2;

/// One of the four walkable directions.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    #[default]
    Down,
    Left,
    Right,
}

impl Direction {
    /// Priority order used when several movement intents are set at once.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit step in grid space.
    #[inline]
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -1),
            Direction::Down => IVec2::new(0, 1),
            Direction::Left => IVec2::new(-1, 0),
            Direction::Right => IVec2::new(1, 0),
        }
    }

    /// Lower-case name, used to build sprite names (`player_left_1`).
    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Dominant direction pointing from `from` towards `to`.
    ///
    /// Horizontal wins ties. Returns `None` when both points are equal.
    pub fn towards(from: IVec2, to: IVec2) -> Option<Self> {
        let d = to - from;
        if d == IVec2::ZERO {
            return None;
        }
        if d.x.abs() >= d.y.abs() {
            Some(if d.x > 0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if d.y > 0 { Direction::Down } else { Direction::Up })
        }
    }
}

/// Move `current` towards `target` by at most `speed` on each axis.
///
/// Used for smooth pixel interpolation between cells.
pub fn approach(current: IVec2, target: IVec2, speed: i32) -> IVec2 {
    let step = |c: i32, t: i32| {
        if c < t { (c + speed).min(t) } else { (c - speed).max(t) }
    };
    IVec2::new(step(current.x, target.x), step(current.y, target.y))
}

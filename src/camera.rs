use glam::{IVec2, UVec2};

/// Visible sub-window of the grid for one tick.
///
/// `origin` is the grid cell drawn at the top-left of the viewport and
/// `offset` (the sub-cell pixel remainder, `diffX`/`diffY`) is subtracted from
/// every cell's screen position so scrolling is smooth between cells.
///
/// Derived fresh every tick from the player's pixel position; never cached.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Camera {
    /// Top-left visible cell. Negative when a small grid is centred.
    pub origin: IVec2,
    /// Pixel remainder in `[0, tile_size)` on each axis.
    pub offset: IVec2,
    /// Viewport size in cells.
    pub viewport: UVec2,
    /// Tile edge length in pixels.
    pub tile_size: u32,
}

impl Camera {
    /// Centre the viewport on `focal` (a pixel position, normally the
    /// player's), clamping against `grid` bounds.
    ///
    /// Per axis:
    /// - grid larger than the viewport: the pixel origin
    ///   `focal - ⌊viewport/2⌋ × tile` is clamped to `[0, (grid - viewport) × tile]`,
    ///   so `origin >= 0` and `origin + viewport <= grid` always hold;
    /// - grid no larger than the viewport: the grid is centred in whole
    ///   cells, giving a zero or negative origin and no pixel offset. The
    ///   compositor pads the surrounding cells with the fallback tile.
    ///
    /// Pure: the same inputs always produce the same camera.
    pub fn compute(focal: IVec2, viewport: UVec2, grid: UVec2, tile_size: u32) -> Self {
        let tile = tile_size.max(1) as i32;
        let (ox, dx) = axis(focal.x, viewport.x as i32, grid.x as i32, tile);
        let (oy, dy) = axis(focal.y, viewport.y as i32, grid.y as i32, tile);
        Self {
            origin: IVec2::new(ox, oy),
            offset: IVec2::new(dx, dy),
            viewport,
            tile_size: tile as u32,
        }
    }

    /// Pixel position of the viewport's top-left corner in world space.
    pub fn world_origin(&self) -> IVec2 {
        self.origin * self.tile_size as i32 + self.offset
    }

    /// Screen position of the viewport-relative cell `(i, j)`.
    pub fn cell_to_screen(&self, rel: IVec2) -> IVec2 {
        rel * self.tile_size as i32 - self.offset
    }

    /// Screen position of a world pixel position.
    pub fn world_to_screen(&self, pixel: IVec2) -> IVec2 {
        pixel - self.world_origin()
    }

    /// Whether an object at `cell` is drawn: inside the viewport plus a
    /// one-cell margin on every side (inclusive).
    pub fn is_visible(&self, cell: IVec2) -> bool {
        let lo = self.origin - IVec2::ONE;
        let hi = self.origin + self.viewport.as_ivec2() + IVec2::ONE;
        cell.x >= lo.x && cell.x <= hi.x && cell.y >= lo.y && cell.y <= hi.y
    }
}

/// `(origin cell, pixel remainder)` along one axis.
fn axis(focal: i32, view: i32, grid: i32, tile: i32) -> (i32, i32) {
    if grid <= view {
        return (-((view - grid) / 2), 0);
    }
    let max = (grid - view) * tile;
    let px = (focal - (view / 2) * tile).clamp(0, max);
    (px.div_euclid(tile), px.rem_euclid(tile))
}

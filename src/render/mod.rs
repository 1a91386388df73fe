// =============================================================================
// RENDER: Viewport compositor
//
// `paint` draws one frame of a `WorldState` into any `Canvas`:
//   special screen → full-screen fill (+ its text box) and nothing else
//   normal         → background tiles, objects, status bar, text box, menu,
//                    menu picture
// The CPU framebuffer and the wgpu presenter are the production canvas;
// tests record draw calls instead.
// =============================================================================

pub mod framebuffer;
pub mod images;
pub mod overlay;
pub mod present;
pub mod text;

pub use framebuffer::FrameBuffer;
pub use images::ImageLibrary;
pub use present::Presenter;
pub use text::Font;

use glam::{IVec2, UVec2};

use crate::world::{Screen, WorldState};

// ── Color ──────────────────────────────────────────────────────────────────

/// Straight-alpha RGBA8.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Color(pub [u8; 4]);

impl Color {
    pub const WHITE: Self = Self([255, 255, 255, 255]);
    pub const BLACK: Self = Self([0, 0, 0, 255]);
    pub const GRAY: Self = Self([153, 153, 153, 255]);
    pub const DARK_GRAY: Self = Self([51, 51, 51, 255]);
    pub const NAVY: Self = Self([16, 24, 64, 235]);
    pub const YELLOW: Self = Self([255, 221, 0, 255]);
    /// Drawn in place of any image that failed to load.
    pub const PLACEHOLDER: Self = Self([255, 0, 255, 255]);
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);
}

// ── Canvas ─────────────────────────────────────────────────────────────────

/// Paint target in logical pixels. Drawing outside the canvas is clipped,
/// never an error.
pub trait Canvas {
    fn size(&self) -> UVec2;
    fn fill_rect(&mut self, pos: IVec2, size: UVec2, color: Color);
    /// Draw the named image scaled to `size`. Unknown names draw a
    /// placeholder.
    fn draw_image(&mut self, name: &str, pos: IVec2, size: UVec2);
    /// Draw one line of text with its top-left at `pos`.
    fn draw_text(&mut self, text: &str, pos: IVec2, color: Color);
    /// Horizontal advance of an average character, for wrapping.
    fn char_width(&self) -> u32 { 8 }
    fn line_height(&self) -> u32 { 16 }
}

/// Paint one frame.
pub fn paint(world: &WorldState, canvas: &mut dyn Canvas) {
    match world.screen() {
        Screen::NewGame | Screen::NewDay | Screen::AfterActivity => {
            canvas.fill_rect(IVec2::ZERO, canvas.size(), Color::BLACK);
            if let Some(text_box) = &world.ui.text_box {
                overlay::text_box(canvas, text_box);
            }
            return;
        }
        Screen::TransitionFade => {
            canvas.fill_rect(IVec2::ZERO, canvas.size(), Color::BLACK);
            return;
        }
        Screen::Normal => {}
    }

    background(world, canvas);
    objects(world, canvas);
    overlay::status_bar(canvas, world.day, world.period_label());
    if let Some(text_box) = &world.ui.text_box {
        overlay::text_box(canvas, text_box);
    }
    if let Some(id) = world.ui.menu_id() {
        overlay::menu(canvas, world, id);
    }
    if let Some(picture) = &world.ui.picture {
        overlay::picture(canvas, picture);
    }
}

/// Tiles for every cell of the viewport plus a one-cell border, so partial
/// cells at the edges are covered while scrolling. Cells outside the grid
/// draw the map's fallback tile.
fn background(world: &WorldState, canvas: &mut dyn Canvas) {
    let camera = world.camera();
    let map = world.map();
    let tile = UVec2::splat(camera.tile_size);
    let view = camera.viewport.as_ivec2();
    for j in -1..view.y + 1 {
        for i in -1..view.x + 1 {
            let rel = IVec2::new(i, j);
            let cell = map.tile_at(camera.origin + rel);
            canvas.draw_image(cell.image(), camera.cell_to_screen(rel), tile);
        }
    }
}

/// Objects within one cell of the viewport, in list order.
fn objects(world: &WorldState, canvas: &mut dyn Canvas) {
    let camera = world.camera();
    let tile = UVec2::splat(camera.tile_size);
    for obj in world.objects().iter().filter(|o| camera.is_visible(o.position())) {
        canvas.draw_image(&obj.sprite_name(), camera.world_to_screen(obj.pixel()), tile);
    }
}

// ── Letterbox viewport math ───────────────────────────────────────────────────
//
// The largest axis-uniform scaled rectangle that fits the logical framebuffer
// inside the physical window, centred on both axes. The presenter draws into
// it; mouse positions are mapped back out of it before hit-testing.

use glam::IVec2;

use crate::ui::rect_contains;
use crate::window::WindowConfig;

/// Rectangle in physical pixels that centres the game view while preserving
/// its aspect ratio (letterbox / pillarbox).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    const EMPTY: Viewport = Viewport { x: 0.0, y: 0.0, width: 0.0, height: 0.0 };
}

/// Calculate the letterbox `Viewport` for `config`.
///
/// ```text
/// scale = min(physical_width / logical_width, physical_height / logical_height)
/// x     = (physical_width  - logical_width  * scale) / 2
/// y     = (physical_height - logical_height * scale) / 2
/// ```
///
/// A zero logical dimension yields a zero-sized viewport at the origin.
pub fn letterbox_viewport(config: &WindowConfig) -> Viewport {
    if config.logical_width == 0 || config.logical_height == 0 {
        return Viewport::EMPTY;
    }

    let pw = config.physical_width  as f32;
    let ph = config.physical_height as f32;
    let lw = config.logical_width   as f32;
    let lh = config.logical_height  as f32;

    let scale = (pw / lw).min(ph / lh);

    let width  = lw * scale;
    let height = lh * scale;
    Viewport { x: (pw - width) / 2.0, y: (ph - height) / 2.0, width, height }
}

/// Map a physical cursor position to logical framebuffer pixels.
///
/// `None` when the cursor is over the bars or the viewport is empty.
pub fn physical_to_logical(config: &WindowConfig, physical: (f64, f64)) -> Option<IVec2> {
    let v = letterbox_viewport(config);
    if v.width <= 0.0 || v.height <= 0.0 {
        return None;
    }
    let lx = ((physical.0 as f32 - v.x) * config.logical_width as f32 / v.width).floor() as i32;
    let ly = ((physical.1 as f32 - v.y) * config.logical_height as f32 / v.height).floor() as i32;
    rect_contains(0, 0, config.logical_width as i32, config.logical_height as i32, lx, ly)
        .then(|| IVec2::new(lx, ly))
}

// ── UI overlays: status bar, text box, menus ─────────────────────────────────

use glam::{IVec2, UVec2};

use crate::render::{Canvas, Color};
use crate::ui::menu_table::{self, MenuId};
use crate::ui::{Picture, TextBox, word_wrap};
use crate::world::WorldState;

const PAD: i32 = 8;
const BORDER: u32 = 2;
const PORTRAIT: u32 = 64;
const TEXT_BOX_HEIGHT: u32 = 96;
const PICTURE: u32 = 256;
const MARKER: u32 = 8;

/// Filled panel with a one-colour border.
fn panel(canvas: &mut dyn Canvas, pos: IVec2, size: UVec2) {
    canvas.fill_rect(pos, size, Color::WHITE);
    let inner = size.saturating_sub(UVec2::splat(BORDER * 2));
    canvas.fill_rect(pos + IVec2::splat(BORDER as i32), inner, Color::NAVY);
}

pub fn status_bar(canvas: &mut dyn Canvas, day: u32, period: &str) {
    let text = format!("Day {day}  {period}");
    let width = canvas.char_width() * text.chars().count() as u32 + PAD as u32 * 2;
    let height = canvas.line_height() + PAD as u32;
    panel(canvas, IVec2::ZERO, UVec2::new(width, height));
    canvas.draw_text(&text, IVec2::new(PAD, PAD / 2), Color::WHITE);
}

/// Bottom-of-screen box: optional portrait on the left, revealed lines
/// word-wrapped to the remaining width.
pub fn text_box(canvas: &mut dyn Canvas, text_box: &TextBox) {
    let screen = canvas.size();
    let size = UVec2::new(screen.x.saturating_sub(PAD as u32 * 2), TEXT_BOX_HEIGHT);
    let pos = IVec2::new(PAD, screen.y as i32 - TEXT_BOX_HEIGHT as i32 - PAD);
    panel(canvas, pos, size);

    let mut text_x = pos.x + PAD;
    if text_box.portrait() > 0 {
        let portrait_pos = IVec2::new(text_x, pos.y + (TEXT_BOX_HEIGHT - PORTRAIT) as i32 / 2);
        canvas.draw_image(&format!("portrait_{}", text_box.portrait()), portrait_pos, UVec2::splat(PORTRAIT));
        text_x += PORTRAIT as i32 + PAD;
    }

    let cols = (size.x as i32 - (text_x - pos.x) - PAD).max(0) as usize / canvas.char_width().max(1) as usize;
    let line_height = canvas.line_height() as i32;
    let mut y = pos.y + PAD;
    for line in text_box.visible_lines() {
        for wrapped in word_wrap(&line, cols) {
            canvas.draw_text(&wrapped, IVec2::new(text_x, y), Color::WHITE);
            y += line_height;
        }
    }

    if text_box.is_skippable() && !text_box.is_prompt() {
        let marker = IVec2::new(pos.x + size.x as i32 - PAD * 2, pos.y + TEXT_BOX_HEIGHT as i32 - PAD * 2);
        canvas.fill_rect(marker, UVec2::splat(6), Color::YELLOW);
    }
}

/// Panel around every region of menu `id`, with region labels at their
/// clickable rectangles. The items menu lists inventory counts instead.
pub fn menu(canvas: &mut dyn Canvas, world: &WorldState, id: MenuId) {
    let Some(spec) = world.menus.get(id) else { return };
    let width = canvas.size().x as i32;

    if id == menu_table::ITEMS || spec.regions.is_empty() {
        item_list(canvas, world);
        return;
    }

    let lo = spec.regions.iter().map(|r| r.rect.origin(width)).reduce(IVec2::min).unwrap_or(IVec2::ZERO);
    let hi = spec
        .regions
        .iter()
        .map(|r| r.rect.origin(width) + r.rect.size())
        .reduce(IVec2::max)
        .unwrap_or(IVec2::ZERO);
    let pos = lo - IVec2::splat(PAD);
    panel(canvas, pos, (hi - lo + IVec2::splat(PAD * 2)).max(IVec2::ZERO).as_uvec2());

    let ctx = world.hit_context();
    let gated = spec.feedback_gate && ctx.feedback_pending;
    for region in &spec.regions {
        let enabled = !gated && world.menus.hit(id, region.rect.origin(width) + IVec2::ONE, &ctx) == Some(region);
        let color = if enabled { Color::WHITE } else { Color::GRAY };
        canvas.draw_text(&region.label, region.rect.origin(width), color);
    }
}

/// Picture in a panel on the left half of the screen, marker centred on
/// its point.
pub fn picture(canvas: &mut dyn Canvas, picture: &Picture) {
    let pos = IVec2::new(PAD * 2, 40);
    panel(canvas, pos - IVec2::splat(PAD), UVec2::splat(PICTURE + PAD as u32 * 2));
    canvas.draw_image(&picture.image, pos, UVec2::splat(PICTURE));
    if let Some(marker) = picture.marker {
        let half = IVec2::splat(MARKER as i32 / 2);
        canvas.fill_rect(pos + marker - half, UVec2::splat(MARKER), Color::YELLOW);
    }
}

fn item_list(canvas: &mut dyn Canvas, world: &WorldState) {
    let line_height = canvas.line_height() as i32;
    let width = canvas.char_width() as i32 * 20 + PAD * 2;
    let height = line_height * (world.items.len() as i32 + 1) + PAD * 2;
    let pos = IVec2::new(canvas.size().x as i32 - width - PAD, 24);
    panel(canvas, pos, UVec2::new(width as u32, height as u32));

    canvas.draw_text("Items", pos + IVec2::splat(PAD), Color::YELLOW);
    for (pocket, counts) in world.items.iter().enumerate() {
        let line = format!("{}: {} {} {} {}", pocket + 1, counts[0], counts[1], counts[2], counts[3]);
        let y = pos.y + PAD + line_height * (pocket as i32 + 1);
        canvas.draw_text(&line, IVec2::new(pos.x + PAD, y), Color::WHITE);
    }
}

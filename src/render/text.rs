use std::collections::HashMap;
use std::fs;
use std::path::Path;

use glam::{IVec2, UVec2};
use image::RgbaImage;
use serde::Deserialize;

use crate::error::LoadError;

/// Atlas image file inside the fonts directory.
pub const FONT_IMAGE: &str = "font.png";
/// Glyph map file inside the fonts directory.
pub const FONT_GLYPHS: &str = "font.json";

// ── Glyph ────────────────────────────────────────────────────────────────────

/// Pixel rectangle of one character in the font atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    /// How far to advance the cursor after drawing this glyph.
    pub x_advance: u32,
}

// ── Font ─────────────────────────────────────────────────────────────────────

/// A bitmap font: atlas pixels plus a char-keyed glyph table.
pub struct Font {
    pub glyphs: HashMap<char, Glyph>,
    /// Vertical distance between successive baselines in pixels.
    pub line_height: u32,
    pub atlas: RgbaImage,
}

impl Font {
    /// Parse the **atlas JSON** format, where each key is a single character
    /// and the value is a pixel rectangle in the atlas:
    ///
    /// ```json
    /// { "A": { "x": 0, "y": 0, "w": 8, "h": 12 }, ... }
    /// ```
    ///
    /// Multi-character keys are ignored. `x_advance` is the glyph width.
    pub fn from_atlas_json(json: &str, atlas: RgbaImage) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        struct AtlasEntry { x: u32, y: u32, w: u32, h: u32 }

        let raw: HashMap<String, AtlasEntry> = serde_json::from_str(json)?;

        let line_height = raw.values().map(|e| e.h).max().unwrap_or(0);

        let glyphs = raw
            .into_iter()
            .filter_map(|(key, entry)| {
                let mut chars = key.chars();
                let ch = chars.next()?;
                if chars.next().is_some() { return None; }
                Some((ch, Glyph { x: entry.x, y: entry.y, width: entry.w, height: entry.h, x_advance: entry.w }))
            })
            .collect();

        Ok(Self { glyphs, line_height, atlas })
    }

    /// Load `dir/font.png` and `dir/font.json`.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, LoadError> {
        let image_path = dir.as_ref().join(FONT_IMAGE);
        let glyph_path = dir.as_ref().join(FONT_GLYPHS);
        let atlas = image::open(&image_path)
            .map_err(|source| LoadError::Image { path: image_path, source })?
            .to_rgba8();
        let json = fs::read_to_string(&glyph_path)
            .map_err(|source| LoadError::Io { path: glyph_path.clone(), source })?;
        Self::from_atlas_json(&json, atlas).map_err(|source| LoadError::Json { path: glyph_path, source })
    }

    /// Width in pixels of `text` on one line. Unknown characters take no space.
    pub fn text_width(&self, text: &str) -> u32 {
        text.chars().filter_map(|c| self.glyphs.get(&c)).map(|g| g.x_advance).sum()
    }

    /// Mean advance, used to turn a pixel width into a column count.
    pub fn average_advance(&self) -> u32 {
        if self.glyphs.is_empty() {
            return 0;
        }
        self.glyphs.values().map(|g| g.x_advance).sum::<u32>() / self.glyphs.len() as u32
    }
}

// ── layout ───────────────────────────────────────────────────────────────────

/// One glyph to copy: `src` rectangle in the atlas → `dest` top-left on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedGlyph {
    pub src: IVec2,
    pub size: UVec2,
    pub dest: IVec2,
}

/// Lay `text` out starting at `start` (top-left).
///
/// `'\n'` returns to `start.x` one line lower. Characters absent from the
/// font are skipped without advancing.
pub fn layout(text: &str, font: &Font, start: IVec2) -> Vec<PlacedGlyph> {
    let mut cursor = start;
    let mut placed = Vec::new();
    for ch in text.chars() {
        if ch == '\n' {
            cursor = IVec2::new(start.x, cursor.y + font.line_height as i32);
            continue;
        }
        let Some(glyph) = font.glyphs.get(&ch) else { continue };
        placed.push(PlacedGlyph {
            src: IVec2::new(glyph.x as i32, glyph.y as i32),
            size: UVec2::new(glyph.width, glyph.height),
            dest: cursor,
        });
        cursor.x += glyph.x_advance as i32;
    }
    placed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn font() -> Font {
        let json = r#"{ "A": {"x": 0, "y": 0, "w": 8, "h": 12},
                        "B": {"x": 8, "y": 0, "w": 6, "h": 12},
                        "AB": {"x": 0, "y": 0, "w": 1, "h": 1} }"#;
        Font::from_atlas_json(json, RgbaImage::new(16, 12)).unwrap()
    }

    #[test]
    fn multi_char_keys_are_ignored() {
        let f = font();
        assert_eq!(f.glyphs.len(), 2);
        assert_eq!(f.line_height, 12);
    }

    #[test]
    fn layout_advances_and_wraps() {
        let f = font();
        let placed = layout("AB\nA?", &f, IVec2::new(10, 20));
        let dests: Vec<IVec2> = placed.iter().map(|p| p.dest).collect();
        assert_eq!(dests, vec![IVec2::new(10, 20), IVec2::new(18, 20), IVec2::new(10, 32)]);
        assert_eq!(placed[1].src, IVec2::new(8, 0));
    }

    #[test]
    fn text_width_skips_unknown() {
        assert_eq!(font().text_width("AB?"), 14);
    }
}

use glam::{IVec2, UVec2};
use image::{Rgba, RgbaImage};

use crate::render::images::ImageLibrary;
use crate::render::text::{Font, layout};
use crate::render::{Canvas, Color};

/// CPU canvas over an RGBA8 image, borrowed for one frame.
///
/// Images are scaled nearest-neighbour and alpha-blended; fully transparent
/// pixels are skipped. Text is copied glyph by glyph from the font atlas,
/// tinted with the requested colour.
pub struct FrameBuffer<'a> {
    pixels: &'a mut RgbaImage,
    images: &'a ImageLibrary,
    font: Option<&'a Font>,
}

impl<'a> FrameBuffer<'a> {
    pub fn new(pixels: &'a mut RgbaImage, images: &'a ImageLibrary, font: Option<&'a Font>) -> Self {
        Self { pixels, images, font }
    }

    pub fn pixels(&self) -> &RgbaImage {
        &*self.pixels
    }

    /// Visible part of `pos..pos + size`, as `(x0, y0, x1, y1)`.
    fn clip(&self, pos: IVec2, size: UVec2) -> Option<(u32, u32, u32, u32)> {
        let (w, h) = self.pixels.dimensions();
        let end = pos + size.as_ivec2();
        let x0 = pos.x.clamp(0, w as i32) as u32;
        let y0 = pos.y.clamp(0, h as i32) as u32;
        let x1 = end.x.clamp(0, w as i32) as u32;
        let y1 = end.y.clamp(0, h as i32) as u32;
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }

    fn blend(&mut self, x: u32, y: u32, src: [u8; 4]) {
        let a = src[3] as u32;
        if a == 0 {
            return;
        }
        let dst = self.pixels.get_pixel_mut(x, y);
        if a == 255 {
            *dst = Rgba(src);
            return;
        }
        for c in 0..3 {
            dst.0[c] = ((src[c] as u32 * a + dst.0[c] as u32 * (255 - a)) / 255) as u8;
        }
        dst.0[3] = 255;
    }
}

impl Canvas for FrameBuffer<'_> {
    fn size(&self) -> UVec2 {
        UVec2::from(self.pixels.dimensions())
    }

    fn fill_rect(&mut self, pos: IVec2, size: UVec2, color: Color) {
        let Some((x0, y0, x1, y1)) = self.clip(pos, size) else { return };
        if color.0[3] == 255 {
            let width = self.pixels.width() as usize;
            let texels: &mut [[u8; 4]] = bytemuck::cast_slice_mut(&mut **self.pixels);
            for y in y0 as usize..y1 as usize {
                texels[y * width + x0 as usize..y * width + x1 as usize].fill(color.0);
            }
            return;
        }
        for y in y0..y1 {
            for x in x0..x1 {
                self.blend(x, y, color.0);
            }
        }
    }

    fn draw_image(&mut self, name: &str, pos: IVec2, size: UVec2) {
        let images = self.images;
        let Some(image) = images.lookup(name) else {
            self.fill_rect(pos, size, Color::PLACEHOLDER);
            return;
        };
        let Some((x0, y0, x1, y1)) = self.clip(pos, size) else { return };
        let (iw, ih) = image.dimensions();
        for y in y0..y1 {
            let sy = ((y as i32 - pos.y) as u32 * ih / size.y.max(1)).min(ih.saturating_sub(1));
            for x in x0..x1 {
                let sx = ((x as i32 - pos.x) as u32 * iw / size.x.max(1)).min(iw.saturating_sub(1));
                self.blend(x, y, image.get_pixel(sx, sy).0);
            }
        }
    }

    fn draw_text(&mut self, text: &str, pos: IVec2, color: Color) {
        let Some(font) = self.font else { return };
        for glyph in layout(text, font, pos) {
            let Some((x0, y0, x1, y1)) = self.clip(glyph.dest, glyph.size) else { continue };
            for y in y0..y1 {
                for x in x0..x1 {
                    let sx = glyph.src.x as u32 + (x as i32 - glyph.dest.x) as u32;
                    let sy = glyph.src.y as u32 + (y as i32 - glyph.dest.y) as u32;
                    let Some(texel) = font.atlas.get_pixel_checked(sx, sy) else { continue };
                    let alpha = (texel.0[3] as u32 * color.0[3] as u32 / 255) as u8;
                    self.blend(x, y, [color.0[0], color.0[1], color.0[2], alpha]);
                }
            }
        }
    }

    fn char_width(&self) -> u32 {
        self.font.map_or(8, |f| f.average_advance().max(1))
    }

    fn line_height(&self) -> u32 {
        self.font.map_or(16, |f| f.line_height.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_is_clipped_to_bounds() {
        let mut pixels = RgbaImage::new(4, 4);
        let images = ImageLibrary::new();
        let mut fb = FrameBuffer::new(&mut pixels, &images, None);
        fb.fill_rect(IVec2::new(-2, 2), UVec2::new(4, 10), Color::WHITE);
        assert_eq!(fb.pixels().get_pixel(1, 3).0, [255, 255, 255, 255]);
        assert_eq!(fb.pixels().get_pixel(2, 3).0, [0, 0, 0, 0]);
        assert_eq!(fb.pixels().get_pixel(0, 1).0, [0, 0, 0, 0]);
    }

    #[test]
    fn translucent_fill_blends_over_existing() {
        let mut pixels = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 255]));
        let images = ImageLibrary::new();
        let mut fb = FrameBuffer::new(&mut pixels, &images, None);
        fb.fill_rect(IVec2::ZERO, UVec2::ONE, Color([255, 255, 255, 51]));
        assert_eq!(fb.pixels().get_pixel(0, 0).0, [51, 51, 51, 255]);
    }

    #[test]
    fn missing_image_draws_placeholder() {
        let mut pixels = RgbaImage::new(2, 2);
        let images = ImageLibrary::new();
        let mut fb = FrameBuffer::new(&mut pixels, &images, None);
        fb.draw_image("nope", IVec2::ZERO, UVec2::ONE);
        assert_eq!(fb.pixels().get_pixel(0, 0).0, Color::PLACEHOLDER.0);
    }

    #[test]
    fn image_is_scaled_nearest() {
        let mut src = RgbaImage::new(2, 1);
        src.put_pixel(0, 0, Rgba([255, 0, 0, 255]));
        src.put_pixel(1, 0, Rgba([0, 0, 255, 255]));
        let mut images = ImageLibrary::new();
        images.insert("rb", src);
        let mut pixels = RgbaImage::new(4, 2);
        let mut fb = FrameBuffer::new(&mut pixels, &images, None);
        fb.draw_image("rb", IVec2::ZERO, UVec2::new(4, 2));
        assert_eq!(fb.pixels().get_pixel(1, 1).0, [255, 0, 0, 255]);
        assert_eq!(fb.pixels().get_pixel(2, 0).0, [0, 0, 255, 255]);
    }
}

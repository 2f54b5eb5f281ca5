//! Gradient bitmap generation for one glow strip.
//!
//! The strip is drawn ring by ring: ring 0 touches the host window and
//! carries the strongest alpha, ring `THICKNESS - 1` is the outermost and
//! fully transparent. Each ring is a straight line along the host edge
//! plus a fading tail at both ends that rounds off the corners.
//!
//! Pixels are straight (not premultiplied) `0xAARRGGBB`, row-major.
//! Every write is composited source-over onto what is already there, so
//! on strips too short for their corner tails the two tails blend.

use crate::{ALPHA_RAMP, Color, Side, THICKNESS};

/// A 32-bit ARGB pixel buffer holding one rendered glow strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlowBitmap {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
}

impl GlowBitmap {
    /// Creates a fully transparent bitmap.
    pub fn transparent(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![0; (width as usize) * (height as usize)],
        }
    }

    /// Renders the glow for `side` into a strip sized for an overlay
    /// window of `width x height`.
    ///
    /// Horizontal strips are always `THICKNESS` rows tall and vertical
    /// strips `THICKNESS` columns wide, whatever the other dimension.
    ///
    /// # Panics
    ///
    /// Panics if `ramp` does not hold exactly one color per ring.
    pub fn render(side: Side, width: i32, height: i32, ramp: &[Color]) -> Self {
        assert_eq!(
            ramp.len(),
            ALPHA_RAMP.len(),
            "color ramp must have one entry per ring"
        );

        if side.is_horizontal() {
            let mut bmp = Self::transparent(width, THICKNESS);
            bmp.draw_horizontal(side, ramp);
            bmp
        } else {
            let mut bmp = Self::transparent(THICKNESS, height);
            bmp.draw_vertical(side, ramp);
            bmp
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Row-major pixels.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Returns the pixel at `(x, y)`, or `None` outside the bitmap.
    pub fn pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Copies the bitmap into `dst` with color channels premultiplied by
    /// alpha, the layout `UpdateLayeredWindow` expects with `AC_SRC_ALPHA`.
    ///
    /// Copies `min(dst.len(), pixels.len())` pixels.
    pub fn write_premultiplied(&self, dst: &mut [u32]) {
        for (out, &px) in dst.iter_mut().zip(&self.pixels) {
            *out = premultiply(px);
        }
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some((y * self.width + x) as usize)
    }

    /// Composites one pixel source-over, silently dropping writes
    /// outside the bitmap.
    fn put(&mut self, x: i32, y: i32, color: Color, alpha: i32) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = source_over(self.pixels[i], color, alpha.clamp(0, 255) as u32);
        }
    }

    fn draw_horizontal(&mut self, side: Side, ramp: &[Color]) {
        let x_left = THICKNESS * 2 - 1;
        let x_right = self.width - THICKNESS * 2;

        for (i, (&alpha, &color)) in ALPHA_RAMP.iter().zip(ramp).enumerate() {
            let ring = i as i32;
            let alpha = i32::from(alpha);
            let y = if side == Side::Top {
                THICKNESS - 1 - ring
            } else {
                ring
            };

            for x in x_left.min(x_right)..=x_left.max(x_right) {
                self.put(x, y, color, alpha);
            }

            let decay = alpha / (THICKNESS + ring);
            for j in 0..THICKNESS - 1 {
                let a = (alpha - decay * j).max(0);
                self.put(x_left - 1 - j, y, color, a);
                self.put(x_right + 1 + j, y, color, a);
            }
            for j in THICKNESS - 1..THICKNESS + 1 + ring {
                let a = (alpha - decay * j).max(0) / 2;
                self.put(x_left - 1 - j, y, color, a);
                self.put(x_right + 1 + j, y, color, a);
            }
        }
    }

    // Corner tails here are one pixel shorter than on horizontal strips.
    fn draw_vertical(&mut self, side: Side, ramp: &[Color]) {
        let y_top = THICKNESS * 2;
        let y_bottom = self.height - THICKNESS * 2 - 1;

        for (i, (&alpha, &color)) in ALPHA_RAMP.iter().zip(ramp).enumerate() {
            let ring = i as i32;
            let alpha = i32::from(alpha);
            let x = if side == Side::Right {
                ring
            } else {
                THICKNESS - 1 - ring
            };

            for y in y_top.min(y_bottom)..=y_top.max(y_bottom) {
                self.put(x, y, color, alpha);
            }

            let decay = alpha / (THICKNESS + ring);
            for j in 0..THICKNESS {
                let a = (alpha - decay * j).max(0);
                self.put(x, y_top - 1 - j, color, a);
                self.put(x, y_bottom + 1 + j, color, a);
            }
            for j in THICKNESS..THICKNESS + ring {
                let a = (alpha - decay * j).max(0) / 2;
                self.put(x, y_top - 1 - j, color, a);
                self.put(x, y_bottom + 1 + j, color, a);
            }
        }
    }
}

/// Straight-alpha source-over of `color` at `alpha` onto `dst`.
fn source_over(dst: u32, color: Color, alpha: u32) -> u32 {
    if alpha == 0 {
        return dst;
    }
    let dst_alpha = dst >> 24;
    // Both terms are scaled by 255.
    let src_weight = alpha * 255;
    let dst_weight = dst_alpha * (255 - alpha);
    let total = src_weight + dst_weight;

    let channel = |src: u8, shift: u32| {
        let d = (dst >> shift) & 0xFF;
        (u32::from(src) * src_weight + d * dst_weight + total / 2) / total
    };
    let out_alpha = (total + 127) / 255;
    (out_alpha << 24)
        | (channel(color.r, 16) << 16)
        | (channel(color.g, 8) << 8)
        | channel(color.b, 0)
}

fn premultiply(px: u32) -> u32 {
    let a = px >> 24;
    let scale = |shift: u32| ((((px >> shift) & 0xFF) * a + 127) / 255) << shift;
    (a << 24) | scale(16) | scale(8) | scale(0)
}

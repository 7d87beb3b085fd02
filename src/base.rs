//! Rendering base: buffer-clipped blending over a pixel format

use std::cmp::max;
use std::cmp::min;

use crate::Color;
use crate::PixelData;
use crate::PixelDraw;

/// Clips every span to the buffer extents before handing it to the
/// underlying pixel format
#[derive(Debug)]
pub struct RenderingBase<T> {
    pub pixf: T,
}

impl<T: PixelDraw> RenderingBase<T> {
    pub fn new(pixf: T) -> RenderingBase<T> {
        RenderingBase { pixf }
    }
    /// Fill the image with a single color
    pub fn clear<C: Color>(&mut self, color: C) {
        self.pixf.fill(color);
    }
    /// Inclusive pixel limits of the buffer
    pub fn limits(&self) -> (i64, i64, i64, i64) {
        let w = self.pixf.width() as i64;
        let h = self.pixf.height() as i64;
        (0, w - 1, 0, h - 1)
    }
    /// Blend a row of pixels from `x1` to `x2` with a single coverage value
    pub fn blend_hline<C: Color>(&mut self, x1: i64, y: i64, x2: i64, c: C, cover: u64) {
        let (xmin, xmax, ymin, ymax) = self.limits();
        let (x1, x2) = if x2 > x1 { (x1, x2) } else { (x2, x1) };
        if y > ymax || y < ymin || x1 > xmax || x2 < xmin {
            return;
        }
        let x1 = max(x1, xmin);
        let x2 = min(x2, xmax);
        self.pixf.blend_hline(x1, y, x2 - x1 + 1, c, cover);
    }
    /// Blend a row of `len` pixels starting at `x` with per-pixel coverage
    pub fn blend_solid_hspan<C: Color>(&mut self, x: i64, y: i64, len: i64, c: C, covers: &[u64]) {
        let (xmin, xmax, ymin, ymax) = self.limits();
        if y > ymax || y < ymin {
            return;
        }
        let (mut x, mut len, mut off) = (x, len, 0);
        if x < xmin {
            len -= xmin - x;
            if len <= 0 {
                return;
            }
            off += xmin - x;
            x = xmin;
        }
        if x + len > xmax {
            len = xmax - x + 1;
            if len <= 0 {
                return;
            }
        }
        self.pixf.blend_solid_hspan(x, y, len, c, &covers[off as usize..]);
    }
}

impl<T: PixelData> PixelData for RenderingBase<T> {
    fn pixeldata(&self) -> &[u8] {
        self.pixf.pixeldata()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Rgb8, Rgba8};
    use crate::pixfmt::Pixfmt;
    use crate::Pixel;
    use crate::Source;

    #[test]
    fn hline_clipped_to_buffer() {
        let mut data = vec![0u8; 4 * 2 * 3];
        let pixf = Pixfmt::<Rgb8>::from_buf(&mut data, 4, 2, 12);
        let mut base = RenderingBase::new(pixf);
        base.blend_hline(-10, 0, 10, Rgb8::white(), 255);
        for x in 0..4 {
            assert_eq!(base.pixf.get((x, 0)), Rgba8::white());
        }
        // out of range row ignored
        base.blend_hline(0, 5, 3, Rgb8::white(), 255);
        assert_eq!(base.pixf.get((0, 1)), Rgba8::new(0, 0, 0, 255));
    }

    #[test]
    fn hspan_offsets_covers_when_clipped_left() {
        let mut data = vec![0u8; 4 * 1 * 3];
        let pixf = Pixfmt::<Rgb8>::from_buf(&mut data, 4, 1, 12);
        let mut base = RenderingBase::new(pixf);
        let covers = [255u64, 255, 64, 64];
        base.blend_solid_hspan(-2, 0, 4, Rgb8::white(), &covers);
        // the first two covers fall off the left edge
        assert_eq!(base.pixf.get((0, 0)), Rgba8::new(64, 64, 64, 255));
        assert_eq!(base.pixf.get((1, 0)), Rgba8::new(64, 64, 64, 255));
        assert_eq!(base.pixf.get((2, 0)), Rgba8::new(0, 0, 0, 255));
    }
}

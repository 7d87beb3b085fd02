//! Pixel formats over a rendering buffer

use std::marker::PhantomData;

use crate::blend::{blend_op, BlendMode};
use crate::buffer::RenderingBuffer;
use crate::color::{Gray8, Rgb8, Rgba8};
use crate::math::{lerp_u8, multiply_u8, prelerp_u8};
use crate::Color;
use crate::Pixel;
use crate::PixelData;
use crate::PixelDraw;
use crate::Source;

/// Pixel format wrapper around a borrowed rendering buffer
///
/// The type parameter selects the byte layout: [Gray8](../color/struct.Gray8.html)
/// (1 byte), [Rgb8](../color/struct.Rgb8.html) (3 bytes) or
/// [Rgba8](../color/struct.Rgba8.html) (4 bytes, straight alpha)
#[derive(Debug)]
pub struct Pixfmt<'a, T> {
    pub rbuf: RenderingBuffer<'a>,
    phantom: PhantomData<T>,
}

pub type PixfmtGray8<'a> = Pixfmt<'a, Gray8>;
pub type PixfmtRgb24<'a> = Pixfmt<'a, Rgb8>;
pub type PixfmtRgba32<'a> = Pixfmt<'a, Rgba8>;

impl<'a, T> Pixfmt<'a, T>
where
    Pixfmt<'a, T>: Pixel,
{
    /// Attach the format to a caller-owned buffer
    ///
    /// A negative `stride` selects bottom-up row order
    pub fn from_buf(data: &'a mut [u8], width: usize, height: usize, stride: i64) -> Self {
        Pixfmt {
            rbuf: RenderingBuffer::from_buf(data, width, height, Self::bpp(), stride),
            phantom: PhantomData,
        }
    }
    /// Fill the buffer with 255 (white / opaque white)
    pub fn clear(&mut self) {
        self.rbuf.clear();
    }
}

impl<'a, T> PixelData for Pixfmt<'a, T> {
    fn pixeldata(&self) -> &[u8] {
        self.rbuf.data
    }
}

impl<'a> Source for Pixfmt<'a, Rgba8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let p = &self.rbuf[id];
        Rgba8::new(p[0], p[1], p[2], p[3])
    }
}

impl<'a> Pixel for Pixfmt<'a, Rgba8> {
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn height(&self) -> usize {
        self.rbuf.height
    }
    fn bpp() -> usize {
        4
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
        p[3] = c.alpha8();
    }
    fn blend_pix<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64) {
        let alpha = multiply_u8(c.alpha8(), cover as u8);
        let pix0 = self.get(id);
        let pix = mix_pix_rgba(pix0, Rgba8::from_trait(c), alpha);
        self.set(id, pix);
    }
    fn blend_pix_op<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64, op: BlendMode) {
        let out = blend_op(op, self.get(id), Rgba8::from_trait(c), cover);
        self.set(id, out);
    }
}
impl<'a> PixelDraw for Pixfmt<'a, Rgba8> {}

impl<'a> Source for Pixfmt<'a, Rgb8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let p = &self.rbuf[id];
        Rgba8::new(p[0], p[1], p[2], 255)
    }
}

impl<'a> Pixel for Pixfmt<'a, Rgb8> {
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn height(&self) -> usize {
        self.rbuf.height
    }
    fn bpp() -> usize {
        3
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let p = &mut self.rbuf[id];
        p[0] = c.red8();
        p[1] = c.green8();
        p[2] = c.blue8();
    }
    fn blend_pix<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64) {
        let alpha = multiply_u8(c.alpha8(), cover as u8);
        let pix0 = self.get(id);
        let pix = mix_pix_rgb(pix0, Rgb8::from_trait(c), alpha);
        self.set(id, pix);
    }
    fn blend_pix_op<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64, op: BlendMode) {
        let out = blend_op(op, self.get(id), Rgba8::from_trait(c), cover);
        self.set(id, out);
    }
}
impl<'a> PixelDraw for Pixfmt<'a, Rgb8> {}

impl<'a> Source for Pixfmt<'a, Gray8> {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        let v = self.rbuf[id][0];
        Rgba8::new(v, v, v, 255)
    }
}

impl<'a> Pixel for Pixfmt<'a, Gray8> {
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn height(&self) -> usize {
        self.rbuf.height
    }
    fn bpp() -> usize {
        1
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        self.rbuf[id][0] = Gray8::from_trait(c).value;
    }
    fn blend_pix<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64) {
        let alpha = multiply_u8(c.alpha8(), cover as u8);
        let v0 = self.rbuf[id][0];
        let v = lerp_u8(v0, Gray8::from_trait(c).value, alpha);
        self.rbuf[id][0] = v;
    }
    fn blend_pix_op<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64, op: BlendMode) {
        let out = blend_op(op, self.get(id), Rgba8::from_trait(c), cover);
        self.set(id, out);
    }
}
impl<'a> PixelDraw for Pixfmt<'a, Gray8> {}

/// Blend a straight-alpha color into a straight-alpha pixel
///
/// Components interpolate, alphas accumulate toward opaque
fn mix_pix_rgba(p: Rgba8, c: Rgba8, alpha: u8) -> Rgba8 {
    Rgba8::new(
        lerp_u8(p.r, c.r, alpha),
        lerp_u8(p.g, c.g, alpha),
        lerp_u8(p.b, c.b, alpha),
        prelerp_u8(p.a, alpha, alpha),
    )
}

fn mix_pix_rgb(p: Rgba8, c: Rgb8, alpha: u8) -> Rgb8 {
    Rgb8::new(
        lerp_u8(p.r, c.r, alpha),
        lerp_u8(p.g, c.g, alpha),
        lerp_u8(p.b, c.b, alpha),
    )
}

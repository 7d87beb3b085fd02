//! Anti-aliased 2D rasterization into caller-owned pixel buffers
//!
//! The crate draws lines and polygons, with or without anti-aliasing,
//! directly into a raw byte buffer supplied by the caller. The pipeline is
//! the classic scanline one:
//!
//! ```text
//! Canvas::draw_line / draw_polygon
//!   Path / Stroke          -- geometry and stroke outline generation
//!   RasterizerScanline     -- clip, then accumulate coverage cells
//!   render_scanlines
//!     sweep_scanline       -- cells -> ScanlineU8 spans
//!     RenderingScanline*   -- spans -> RenderingBase -> Pixfmt blending
//! ```
//!
//! [Canvas](canvas/struct.Canvas.html) is the drawing entry point;
//! [GraphicsState](graphics_state/struct.GraphicsState.html) is the style
//! record consulted by layers built on top of it.
//!
//! # Example
//!
//!     use pixcanvas::{Canvas, Rgb8};
//!
//!     let (w, h, stride) = (100, 100, 300);
//!     let mut buf = vec![255u8; h * stride];
//!     let mut canvas = Canvas::<Rgb8>::new(&mut buf, w, h, stride as i64).unwrap();
//!     canvas.draw_line(10.0, 10.0, 90.0, 80.0, 3.0, &[200, 30, 30], true).unwrap();

pub mod base;
pub mod blend;
pub mod buffer;
pub mod canvas;
pub mod cell;
pub mod clip;
pub mod color;
pub mod graphics_state;
pub mod image_mask;
pub mod math;
pub mod paths;
pub mod pixfmt;
pub mod ppm;
pub mod raster;
pub mod render;
pub mod scan;
pub mod stroke;

pub use crate::base::*;
pub use crate::blend::*;
pub use crate::buffer::*;
pub use crate::canvas::*;
pub use crate::cell::*;
pub use crate::clip::*;
pub use crate::color::*;
pub use crate::graphics_state::*;
pub use crate::image_mask::*;
pub use crate::paths::*;
pub use crate::pixfmt::*;
pub use crate::raster::*;
pub use crate::render::*;
pub use crate::scan::*;
pub use crate::stroke::*;

use crate::color::Rgba8;

pub(crate) const POLY_SUBPIXEL_SHIFT: i64 = 8;
pub(crate) const POLY_SUBPIXEL_SCALE: i64 = 1 << POLY_SUBPIXEL_SHIFT;
pub(crate) const POLY_SUBPIXEL_MASK: i64 = POLY_SUBPIXEL_SCALE - 1;

/// Access to Colors
///
/// Components are available as f64 in [0,1] or u8 in [0,255]
pub trait Color: std::fmt::Debug + Copy {
    /// Get red as f64 in [0,1]
    fn red(&self) -> f64;
    /// Get green as f64 in [0,1]
    fn green(&self) -> f64;
    /// Get blue as f64 in [0,1]
    fn blue(&self) -> f64;
    /// Get alpha as f64 in [0,1]
    fn alpha(&self) -> f64;
    /// Get red as u8 in [0,255]
    fn red8(&self) -> u8;
    /// Get green as u8 in [0,255]
    fn green8(&self) -> u8;
    /// Get blue as u8 in [0,255]
    fn blue8(&self) -> u8;
    /// Get alpha as u8 in [0,255]
    fn alpha8(&self) -> u8;
    /// Is the color fully transparent
    fn is_transparent(&self) -> bool {
        self.alpha8() == 0
    }
    /// Is the color fully opaque
    fn is_opaque(&self) -> bool {
        self.alpha8() == 255
    }
}

/// Construction of a color from a raw channel array
///
/// Channel count and order are pixel-format specific: 1 byte for
/// grayscale, 3 for RGB, 4 for RGBA with straight alpha
pub trait FromChannels: Sized {
    /// Number of channels expected in the input slice
    const CHANNELS: usize;
    /// Convert a channel slice, `None` if the length does not match
    fn from_channels(v: &[u8]) -> Option<Self>;
}

/// Source of pixel values
pub trait Source {
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Pixel format operations over a rendering buffer
pub trait Pixel: Source {
    /// Width of the buffer in pixels
    fn width(&self) -> usize;
    /// Height of the buffer in pixels
    fn height(&self) -> usize;
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Maximum coverage value
    fn cover_mask() -> u64 {
        255
    }
    /// Set the pixel at (`x`,`y`) to the color `c`
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
    /// Blend the color `c` into the pixel at (`x`,`y`), scaled by `cover`
    ///
    /// Plain alpha compositing, used by the scanline renderers
    fn blend_pix<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64);
    /// Composite the color `c` into the pixel at (`x`,`y`) with the given
    /// [BlendMode](../blend/enum.BlendMode.html), scaled by `cover`
    fn blend_pix_op<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64, op: BlendMode);
}

/// Drawing operations on top of [Pixel](trait.Pixel.html)
///
/// Coordinates are assumed to be within the buffer; clipping happens one
/// level up in [RenderingBase](base/struct.RenderingBase.html)
pub trait PixelDraw: Pixel {
    /// Fill the image with the color `c`
    fn fill<C: Color>(&mut self, c: C) {
        let (w, h) = (self.width(), self.height());
        for y in 0..h {
            for x in 0..w {
                self.set((x, y), c);
            }
        }
    }
    /// Copy or blend the pixel at (`x`,`y`) with the color `c`
    ///
    /// Copies for opaque colors, blends otherwise, skips fully
    /// transparent colors
    fn copy_or_blend_pix<C: Color>(&mut self, id: (usize, usize), c: C) {
        if !c.is_transparent() {
            if c.is_opaque() {
                self.set(id, c);
            } else {
                self.blend_pix(id, c, Self::cover_mask());
            }
        }
    }
    /// Copy or blend the pixel at (`x`,`y`) with the color `c` and a
    /// coverage value
    fn copy_or_blend_pix_with_cover<C: Color>(&mut self, id: (usize, usize), c: C, cover: u64) {
        if !c.is_transparent() {
            if c.is_opaque() && cover == Self::cover_mask() {
                self.set(id, c);
            } else {
                self.blend_pix(id, c, cover);
            }
        }
    }
    /// Blend `len` pixels along a row with a single coverage value
    fn blend_hline<C: Color>(&mut self, x: i64, y: i64, len: i64, c: C, cover: u64) {
        if c.is_transparent() {
            return;
        }
        let (x, y, len) = (x as usize, y as usize, len as usize);
        if c.is_opaque() && cover == Self::cover_mask() {
            for i in 0..len {
                self.set((x + i, y), c);
            }
        } else {
            for i in 0..len {
                self.blend_pix((x + i, y), c, cover);
            }
        }
    }
    /// Blend `len` pixels along a row with per-pixel coverage
    fn blend_solid_hspan<C: Color>(&mut self, x: i64, y: i64, len: i64, c: C, covers: &[u64]) {
        debug_assert!(len as usize <= covers.len());
        for (i, &cover) in covers.iter().take(len as usize).enumerate() {
            self.copy_or_blend_pix_with_cover((x as usize + i, y as usize), c, cover);
        }
    }
}

/// Access to the raw bytes of an image
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Source of verticies forming a path
pub trait VertexSource {
    /// Convert the source to a flat list of path verticies
    fn xconvert(&self) -> Vec<Vertex<f64>>;
}

/// Render scanlines to an image
pub trait Render {
    /// Render a single scanline to the image
    fn render(&mut self, sl: &ScanlineU8);
    /// Set the color used for rendering
    fn color<C: Color>(&mut self, color: &C);
    /// Prepare the renderer
    fn prepare(&self) {}
}

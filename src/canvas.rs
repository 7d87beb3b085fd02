//! Canvas: line and polygon drawing onto a caller-owned buffer

use log::trace;
use thiserror::Error;

use crate::base::RenderingBase;
use crate::paths::Path;
use crate::pixfmt::Pixfmt;
use crate::raster::{FillingRule, RasterizerScanline};
use crate::render::{render_scanlines, RenderingScanlineAASolid, RenderingScanlineBinSolid};
use crate::scan::ScanlineU8;
use crate::stroke::{LineCap, Stroke};
use crate::Color;
use crate::FromChannels;
use crate::Pixel;
use crate::PixelDraw;
use crate::Render;

/// Construction or draw-call precondition failure
///
/// All preconditions fail fast, before any pixel is touched
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CanvasError {
    #[error("canvas extents must be nonzero, got {width}x{height}")]
    ZeroExtent { width: usize, height: usize },
    #[error("stride {stride} holds fewer than {width} pixels at {bpp} bytes per pixel")]
    StrideTooSmall { stride: i64, width: usize, bpp: usize },
    #[error("buffer of {len} bytes holds fewer than {height} rows of {row_bytes} bytes")]
    BufferTooSmall { len: usize, height: usize, row_bytes: usize },
    #[error("expected {expected} color channels, got {got}")]
    ChannelCount { expected: usize, got: usize },
    #[error("point list of {len} values is not a list of (x, y) pairs")]
    OddPointList { len: usize },
}

/// Anti-aliased drawing onto a caller-owned pixel buffer
///
/// The canvas borrows the buffer for its lifetime and writes nothing
/// anywhere else. The rasterizer and scanline are reused across draw
/// calls; each call resets them, so no coverage leaks between calls.
/// Geometry outside the buffer is clipped, never an error.
///
/// The pixel format is selected by the color type parameter:
/// [Gray8](color/struct.Gray8.html), [Rgb8](color/struct.Rgb8.html) or
/// [Rgba8](color/struct.Rgba8.html)
#[derive(Debug)]
pub struct Canvas<'a, T>
where
    T: Color + FromChannels,
    Pixfmt<'a, T>: PixelDraw,
{
    base: RenderingBase<Pixfmt<'a, T>>,
    ras: RasterizerScanline,
    sl: ScanlineU8,
}

pub type CanvasGray8<'a> = Canvas<'a, crate::color::Gray8>;
pub type CanvasRgb24<'a> = Canvas<'a, crate::color::Rgb8>;
pub type CanvasRgba32<'a> = Canvas<'a, crate::color::Rgba8>;

impl<'a, T> Canvas<'a, T>
where
    T: Color + FromChannels,
    Pixfmt<'a, T>: PixelDraw,
{
    /// Bind a canvas to a caller-owned buffer
    ///
    /// `stride` is in bytes; a negative value selects bottom-up row
    /// order. The buffer must hold `height` full rows
    pub fn new(
        buf: &'a mut [u8],
        width: usize,
        height: usize,
        stride: i64,
    ) -> Result<Self, CanvasError> {
        let bpp = Pixfmt::<'a, T>::bpp();
        if width == 0 || height == 0 {
            return Err(CanvasError::ZeroExtent { width, height });
        }
        let row_bytes = stride.unsigned_abs() as usize;
        if row_bytes < width * bpp {
            return Err(CanvasError::StrideTooSmall { stride, width, bpp });
        }
        if buf.len() < height * row_bytes {
            return Err(CanvasError::BufferTooSmall {
                len: buf.len(),
                height,
                row_bytes,
            });
        }
        let pixf = Pixfmt::from_buf(buf, width, height, stride);
        let mut ras = RasterizerScanline::new();
        ras.clip_box(0.0, 0.0, width as f64, height as f64);
        Ok(Canvas {
            base: RenderingBase::new(pixf),
            ras,
            sl: ScanlineU8::new(),
        })
    }
    /// Width of the bound buffer in pixels
    pub fn width(&self) -> usize {
        self.base.pixf.width()
    }
    /// Height of the bound buffer in pixels
    pub fn height(&self) -> usize {
        self.base.pixf.height()
    }

    fn color_from(&self, c: &[u8]) -> Result<T, CanvasError> {
        T::from_channels(c).ok_or(CanvasError::ChannelCount {
            expected: T::CHANNELS,
            got: c.len(),
        })
    }

    /// Select the rendering path for this call only
    fn set_aa(&mut self, aa: bool) {
        if aa {
            self.ras.gamma_linear();
        } else {
            self.ras.gamma_threshold();
        }
    }

    fn render_solid(&mut self, color: T, aa: bool) {
        if aa {
            let mut ren = RenderingScanlineAASolid::with_base(&mut self.base);
            ren.color(&color);
            render_scanlines(&mut self.ras, &mut self.sl, &mut ren);
        } else {
            let mut ren = RenderingScanlineBinSolid::with_base(&mut self.base);
            ren.color(&color);
            render_scanlines(&mut self.ras, &mut self.sl, &mut ren);
        }
    }

    /// Draw a stroked line segment of the given width
    ///
    /// The stroke has square caps, so a zero-length segment with
    /// nonzero width draws a square dot. Zero or negative width draws
    /// nothing. `color` is a raw channel slice for the pixel format
    pub fn draw_line(
        &mut self,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        width: f64,
        color: &[u8],
        aa: bool,
    ) -> Result<(), CanvasError> {
        let c = self.color_from(color)?;
        if width <= 0.0 {
            return Ok(());
        }
        trace!(
            "draw_line ({:.3},{:.3})-({:.3},{:.3}) width {} aa {}",
            x0, y0, x1, y1, width, aa
        );
        let mut path = Path::new();
        path.move_to(x0, y0);
        path.line_to(x1, y1);
        let mut stroke = Stroke::new(path);
        stroke.width(width);
        stroke.line_cap(LineCap::Square);

        self.ras.reset();
        self.ras.filling_rule(FillingRule::NonZero);
        self.set_aa(aa);
        self.ras.add_path(&stroke);
        self.render_solid(c, aa);
        self.set_aa(true);
        Ok(())
    }

    /// Draw a polygon through `points`, a flat list of (x, y) pairs
    ///
    /// The interior is filled with the even-odd rule when `fill` is set;
    /// the boundary is stroked as a closed contour when `outline` is
    /// set, on top of the fill. Fewer than 3 points yield no fill; the
    /// outline degrades to a capsule (2 points) or a dot (1 point)
    #[allow(clippy::too_many_arguments)]
    pub fn draw_polygon(
        &mut self,
        points: &[f64],
        outline: bool,
        outline_width: f64,
        outline_color: &[u8],
        fill: bool,
        fill_color: &[u8],
        aa: bool,
    ) -> Result<(), CanvasError> {
        if points.len() % 2 != 0 {
            return Err(CanvasError::OddPointList { len: points.len() });
        }
        // validate both colors up front, even if unused
        let outline_c = self.color_from(outline_color)?;
        let fill_c = self.color_from(fill_color)?;
        let n = points.len() / 2;
        trace!(
            "draw_polygon {} points outline {} fill {} aa {}",
            n, outline, fill, aa
        );

        let mut path = Path::new();
        for (i, p) in points.chunks_exact(2).enumerate() {
            if i == 0 {
                path.move_to(p[0], p[1]);
            } else {
                path.line_to(p[0], p[1]);
            }
        }
        path.close_polygon();

        self.set_aa(aa);
        if fill && n >= 3 {
            self.ras.reset();
            self.ras.filling_rule(FillingRule::EvenOdd);
            self.ras.add_path(&path);
            self.render_solid(fill_c, aa);
        }
        if outline && outline_width > 0.0 && n >= 1 {
            let mut stroke = Stroke::new(path);
            stroke.width(outline_width);
            stroke.line_cap(LineCap::Square);
            self.ras.reset();
            self.ras.filling_rule(FillingRule::NonZero);
            self.ras.add_path(&stroke);
            self.render_solid(outline_c, aa);
        }
        self.set_aa(true);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Gray8, Rgb8};

    #[test]
    fn construction_errors() {
        let mut buf = vec![0u8; 16];
        assert_eq!(
            Canvas::<Rgb8>::new(&mut buf, 0, 4, 12).unwrap_err(),
            CanvasError::ZeroExtent { width: 0, height: 4 }
        );
        assert_eq!(
            Canvas::<Rgb8>::new(&mut buf, 4, 4, 8).unwrap_err(),
            CanvasError::StrideTooSmall { stride: 8, width: 4, bpp: 3 }
        );
        assert_eq!(
            Canvas::<Rgb8>::new(&mut buf, 4, 4, 12).unwrap_err(),
            CanvasError::BufferTooSmall { len: 16, height: 4, row_bytes: 12 }
        );
    }

    #[test]
    fn wrong_channel_count_is_rejected() {
        let mut buf = vec![0u8; 4 * 4];
        let mut canvas = Canvas::<Gray8>::new(&mut buf, 4, 4, 4).unwrap();
        let err = canvas
            .draw_line(0.0, 0.0, 3.0, 3.0, 1.0, &[1, 2, 3], true)
            .unwrap_err();
        assert_eq!(err, CanvasError::ChannelCount { expected: 1, got: 3 });
    }

    #[test]
    fn odd_point_list_is_rejected() {
        let mut buf = vec![0u8; 4 * 4];
        let mut canvas = Canvas::<Gray8>::new(&mut buf, 4, 4, 4).unwrap();
        let err = canvas
            .draw_polygon(&[0.0, 0.0, 1.0], true, 1.0, &[255], false, &[255], true)
            .unwrap_err();
        assert_eq!(err, CanvasError::OddPointList { len: 3 });
    }

    #[test]
    fn canvas_debug_formats() {
        let mut buf = vec![0u8; 4 * 4];
        let canvas = Canvas::<Gray8>::new(&mut buf, 4, 4, 4).unwrap();
        assert!(format!("{:?}", canvas).starts_with("Canvas"));
    }

    #[test]
    fn zero_width_line_draws_nothing() {
        let mut buf = vec![7u8; 8 * 8];
        let mut canvas = Canvas::<Gray8>::new(&mut buf, 8, 8, 8).unwrap();
        canvas
            .draw_line(1.0, 1.0, 7.0, 7.0, 0.0, &[255], true)
            .unwrap();
        assert!(buf.iter().all(|&v| v == 7));
    }
}

//! Scanline renderers

use crate::base::RenderingBase;
use crate::color::Rgba8;
use crate::raster::RasterizerScanline;
use crate::scan::ScanlineU8;
use crate::Color;
use crate::PixelData;
use crate::PixelDraw;
use crate::Render;
use crate::VertexSource;

/// Solid color renderer without anti-aliasing
///
/// Covers are ignored; every pixel in a span is painted fully
#[derive(Debug)]
pub struct RenderingScanlineBinSolid<'a, T>
where
    T: PixelDraw,
{
    pub base: &'a mut RenderingBase<T>,
    pub color: Rgba8,
}

/// Solid color renderer with anti-aliasing
#[derive(Debug)]
pub struct RenderingScanlineAASolid<'a, T>
where
    T: PixelDraw,
{
    pub base: &'a mut RenderingBase<T>,
    pub color: Rgba8,
}

/// Render one scanline, ignoring coverage
fn render_scanline_bin_solid<T, C>(sl: &ScanlineU8, ren: &mut RenderingBase<T>, color: C)
where
    T: PixelDraw,
    C: Color,
{
    let cover_full = 255;
    for span in &sl.spans {
        ren.blend_hline(span.x, sl.y, span.x - 1 + span.len.abs(), color, cover_full);
    }
}

/// Render one scanline with per-pixel coverage
fn render_scanline_aa_solid<T, C>(sl: &ScanlineU8, ren: &mut RenderingBase<T>, color: C)
where
    T: PixelDraw,
    C: Color,
{
    let y = sl.y;
    for span in &sl.spans {
        ren.blend_solid_hspan(span.x, y, span.len, color, &span.covers);
    }
}

impl<'a, T: PixelDraw> RenderingScanlineAASolid<'a, T> {
    /// Create a new renderer over a rendering base
    pub fn with_base(base: &'a mut RenderingBase<T>) -> Self {
        Self { base, color: Rgba8::black() }
    }
}
impl<'a, T: PixelDraw> RenderingScanlineBinSolid<'a, T> {
    /// Create a new renderer over a rendering base
    pub fn with_base(base: &'a mut RenderingBase<T>) -> Self {
        Self { base, color: Rgba8::black() }
    }
}

impl<'a, T: PixelDraw> Render for RenderingScanlineAASolid<'a, T> {
    fn render(&mut self, sl: &ScanlineU8) {
        render_scanline_aa_solid(sl, self.base, self.color);
    }
    fn color<C: Color>(&mut self, color: &C) {
        self.color = Rgba8::from_trait(*color);
    }
}
impl<'a, T: PixelDraw> Render for RenderingScanlineBinSolid<'a, T> {
    fn render(&mut self, sl: &ScanlineU8) {
        render_scanline_bin_solid(sl, self.base, self.color);
    }
    fn color<C: Color>(&mut self, color: &C) {
        self.color = Rgba8::from_trait(*color);
    }
}

impl<'a, T: PixelDraw + PixelData> PixelData for RenderingScanlineAASolid<'a, T> {
    fn pixeldata(&self) -> &[u8] {
        self.base.pixeldata()
    }
}
impl<'a, T: PixelDraw + PixelData> PixelData for RenderingScanlineBinSolid<'a, T> {
    fn pixeldata(&self) -> &[u8] {
        self.base.pixeldata()
    }
}

/// Render the rasterized shape to the image with the renderer's color
pub fn render_scanlines<REN>(ras: &mut RasterizerScanline, sl: &mut ScanlineU8, ren: &mut REN)
where
    REN: Render,
{
    if ras.rewind_scanlines() {
        sl.reset(ras.min_x(), ras.max_x());
        ren.prepare();
        while ras.sweep_scanline(sl) {
            ren.render(sl);
        }
    }
}

/// Rasterize and render a set of paths, one color each
pub fn render_all_paths<REN, VS, C>(
    ras: &mut RasterizerScanline,
    sl: &mut ScanlineU8,
    ren: &mut REN,
    paths: &[VS],
    colors: &[C],
) where
    C: Color,
    REN: Render,
    VS: VertexSource,
{
    debug_assert!(paths.len() == colors.len());
    for (path, color) in paths.iter().zip(colors.iter()) {
        ras.reset();
        ras.add_path(path);
        ren.color(color);
        render_scanlines(ras, sl, ren);
    }
}

//! Scanline rasterizer

use std::cmp::max;
use std::cmp::min;

use crate::cell::RasterizerCell;
use crate::clip::Clip;
use crate::paths::PathCommand;
use crate::scan::ScanlineU8;
use crate::VertexSource;
use crate::POLY_SUBPIXEL_SCALE;
use crate::POLY_SUBPIXEL_SHIFT;

/// Convert from f64 pixel coordinates to fixed subpixel coordinates
pub(crate) fn upscale(v: f64) -> i64 {
    (v * POLY_SUBPIXEL_SCALE as f64).round() as i64
}

/// Polygon filling rule
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum FillingRule {
    NonZero,
    EvenOdd,
}
impl Default for FillingRule {
    fn default() -> FillingRule {
        FillingRule::NonZero
    }
}

#[derive(Debug, PartialEq, Copy, Clone)]
enum PathStatus {
    Initial,
    Closed,
    MoveTo,
    LineTo,
}
impl Default for PathStatus {
    fn default() -> PathStatus {
        PathStatus::Initial
    }
}

/// Rasterizer from paths to sorted coverage cells to scanlines
///
/// Holds the clipper, the cell accumulator, the filling rule and the
/// gamma table applied to coverage values. Reusable: `reset` clears the
/// accumulated shape but keeps the clip box, rule and gamma.
#[derive(Debug)]
pub struct RasterizerScanline {
    clipper: Clip,
    outline: RasterizerCell,
    status: PathStatus,
    x0: i64,
    y0: i64,
    scan_y: i64,
    filling_rule: FillingRule,
    gamma: Vec<u64>,
}

impl RasterizerScanline {
    pub fn new() -> Self {
        Self {
            clipper: Clip::new(),
            status: PathStatus::Initial,
            outline: RasterizerCell::new(),
            x0: 0,
            y0: 0,
            scan_y: 0,
            filling_rule: FillingRule::NonZero,
            gamma: (0..256).collect(),
        }
    }
    /// Reset the rasterizer, clearing the accumulated cells
    pub fn reset(&mut self) {
        self.outline.reset();
        self.status = PathStatus::Initial;
    }
    /// Set the polygon filling rule
    pub fn filling_rule(&mut self, rule: FillingRule) {
        self.filling_rule = rule;
    }
    /// Set the gamma function mapping coverage to coverage
    ///
    /// The function is sampled into a 256 entry table. The identity
    /// leaves anti-aliasing linear; a step at 0.5 turns coverage binary
    pub fn gamma<F>(&mut self, gfunc: F)
    where
        F: Fn(f64) -> f64,
    {
        let aa_shift = 8;
        let aa_scale = 1 << aa_shift;
        let aa_mask = f64::from(aa_scale - 1);
        self.gamma = (0..256)
            .map(|i| gfunc(f64::from(i) / aa_mask))
            .map(|v| (v * aa_mask).round() as u64)
            .collect();
    }
    /// Restore the identity gamma
    pub fn gamma_linear(&mut self) {
        self.gamma = (0..256).collect();
    }
    /// Install a 0.5 threshold gamma, making every pixel all or nothing
    pub fn gamma_threshold(&mut self) {
        self.gamma(|v| if v < 0.5 { 0.0 } else { 1.0 });
    }
    /// Set the clip box in pixel coordinates
    pub fn clip_box(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.clipper
            .clip_box(upscale(x1), upscale(y1), upscale(x2), upscale(y2));
    }
    /// Add a path, closing any open polygon first
    pub fn add_path<VS: VertexSource>(&mut self, path: &VS) {
        if self.outline.sorted() {
            self.reset();
        }
        for seg in path.xconvert() {
            match seg.cmd {
                PathCommand::LineTo => self.line_to_d(seg.x, seg.y),
                PathCommand::MoveTo => self.move_to_d(seg.x, seg.y),
                PathCommand::Close => self.close_polygon(),
            }
        }
    }
    pub fn move_to_d(&mut self, x: f64, y: f64) {
        self.close_polygon();
        self.x0 = upscale(x);
        self.y0 = upscale(y);
        self.clipper.move_to(self.x0, self.y0);
        self.status = PathStatus::MoveTo;
    }
    pub fn line_to_d(&mut self, x: f64, y: f64) {
        let x = upscale(x);
        let y = upscale(y);
        self.clipper.line_to(&mut self.outline, x, y);
        self.status = PathStatus::LineTo;
    }
    /// Close the current polygon back to its starting point
    pub fn close_polygon(&mut self) {
        if self.status == PathStatus::LineTo {
            self.clipper.line_to(&mut self.outline, self.x0, self.y0);
            self.status = PathStatus::Closed;
        }
    }
    /// Close and sort; false if nothing was accumulated
    pub fn rewind_scanlines(&mut self) -> bool {
        self.close_polygon();
        self.outline.sort_cells();
        if self.outline.total_cells() == 0 {
            false
        } else {
            self.scan_y = self.outline.min_y;
            true
        }
    }
    pub fn min_x(&self) -> i64 {
        self.outline.min_x
    }
    pub fn max_x(&self) -> i64 {
        self.outline.max_x
    }
    /// Sweep the next non-empty scanline into `sl`
    ///
    /// Walks the sorted cells of the current row, accumulating the
    /// running cover and emitting a cell per partially covered pixel and
    /// a span for fully interior runs. Returns false past the last row
    pub fn sweep_scanline(&mut self, sl: &mut ScanlineU8) -> bool {
        loop {
            if self.scan_y < 0 {
                self.scan_y += 1;
                continue;
            }
            if self.scan_y > self.outline.max_y {
                return false;
            }
            sl.reset_spans();
            let mut num_cells = self.outline.scanline_num_cells(self.scan_y);
            let cells = self.outline.scanline_cells(self.scan_y);
            let mut cover = 0;
            let mut iter = cells.iter();

            if let Some(mut cur_cell) = iter.next() {
                while num_cells > 0 {
                    let mut x = cur_cell.x;
                    let mut area = cur_cell.area;
                    cover += cur_cell.cover;
                    num_cells -= 1;
                    // accumulate all cells with the same x
                    while num_cells > 0 {
                        cur_cell = iter.next().unwrap();
                        if cur_cell.x != x {
                            break;
                        }
                        area += cur_cell.area;
                        cover += cur_cell.cover;
                        num_cells -= 1;
                    }
                    if area != 0 {
                        let alpha =
                            self.calculate_alpha((cover << (POLY_SUBPIXEL_SHIFT + 1)) - area);
                        if alpha > 0 {
                            sl.add_cell(x, alpha);
                        }
                        x += 1;
                    }
                    if num_cells > 0 && cur_cell.x > x {
                        let alpha = self.calculate_alpha(cover << (POLY_SUBPIXEL_SHIFT + 1));
                        if alpha > 0 {
                            sl.add_span(x, cur_cell.x - x, alpha);
                        }
                    }
                }
            }
            if sl.num_spans() != 0 {
                break;
            }
            self.scan_y += 1;
        }
        sl.finalize(self.scan_y);
        self.scan_y += 1;
        true
    }
    /// Map an accumulated area to an 8 bit alpha, honoring the filling
    /// rule and the gamma table
    fn calculate_alpha(&self, area: i64) -> u64 {
        let aa_shift = 8;
        let aa_scale = 1 << aa_shift;
        let aa_scale2 = aa_scale * 2;
        let aa_mask = aa_scale - 1;
        let aa_mask2 = aa_scale2 - 1;

        let mut cover = area >> (POLY_SUBPIXEL_SHIFT * 2 + 1 - aa_shift);
        cover = cover.abs();
        if self.filling_rule == FillingRule::EvenOdd {
            cover &= aa_mask2;
            if cover > aa_scale {
                cover = aa_scale2 - cover;
            }
        }
        cover = max(0, min(cover, aa_mask));
        self.gamma[cover as usize]
    }
}

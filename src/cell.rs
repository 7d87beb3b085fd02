//! Coverage cell accumulation
//!
//! Lines in 1/256 subpixel coordinates are decomposed into per-pixel
//! cells carrying a `cover` (vertical extent crossed) and an `area`
//! (twice the covered area within the cell). Summing covers left to
//! right along a scanline yields the winding contribution at each pixel.

use std::cmp::max;
use std::cmp::min;

use crate::POLY_SUBPIXEL_MASK;
use crate::POLY_SUBPIXEL_SCALE;
use crate::POLY_SUBPIXEL_SHIFT;

/// Coverage cell at an integer pixel location
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Cell {
    pub x: i64,
    pub y: i64,
    pub cover: i64,
    pub area: i64,
}

impl Cell {
    fn new() -> Self {
        Cell {
            x: std::i64::MAX,
            y: std::i64::MAX,
            cover: 0,
            area: 0,
        }
    }
    fn at(x: i64, y: i64) -> Self {
        Cell { x, y, cover: 0, area: 0 }
    }
    fn equal(&self, x: i64, y: i64) -> bool {
        self.x == x && self.y == y
    }
    fn is_empty(&self) -> bool {
        self.cover == 0 && self.area == 0
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::new()
    }
}

/// Cell accumulator for the scanline rasterizer
///
/// Cells are appended as lines are walked, then binned and sorted by
/// scanline on the first sweep. `reset` clears content but keeps the
/// allocations for the next shape.
#[derive(Debug)]
pub struct RasterizerCell {
    cells: Vec<Cell>,
    pub min_x: i64,
    pub max_x: i64,
    pub min_y: i64,
    pub max_y: i64,
    sorted_y: Vec<Vec<Cell>>,
}

impl RasterizerCell {
    pub fn new() -> Self {
        Self {
            cells: vec![],
            min_x: std::i64::MAX,
            min_y: std::i64::MAX,
            max_x: std::i64::MIN,
            max_y: std::i64::MIN,
            sorted_y: vec![],
        }
    }
    pub fn reset(&mut self) {
        self.max_x = std::i64::MIN;
        self.max_y = std::i64::MIN;
        self.min_x = std::i64::MAX;
        self.min_y = std::i64::MAX;
        self.sorted_y.clear();
        self.cells.clear();
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }
    /// True once the cells were binned by `sort_cells`
    pub fn sorted(&self) -> bool {
        !self.sorted_y.is_empty()
    }
    /// Bin cells by scanline and sort each bin by x
    ///
    /// Idempotent until the next `reset`
    pub fn sort_cells(&mut self) {
        if !self.sorted_y.is_empty() || self.max_y < 0 {
            return;
        }
        self.sorted_y = vec![vec![]; (self.max_y + 1) as usize];
        for c in self.cells.iter() {
            if c.y >= 0 {
                self.sorted_y[c.y as usize].push(*c);
            }
        }
        for row in self.sorted_y.iter_mut() {
            row.sort_by(|a, b| a.x.cmp(&b.x));
        }
    }
    pub fn scanline_num_cells(&self, y: i64) -> usize {
        self.sorted_y[y as usize].len()
    }
    pub fn scanline_cells(&self, y: i64) -> &[Cell] {
        &self.sorted_y[y as usize]
    }

    fn curr_cell_not_equal(&self, x: i64, y: i64) -> bool {
        match self.cells.last() {
            None => true,
            Some(cur) => !cur.equal(x, y),
        }
    }
    fn pop_last_cell_if_empty(&mut self) {
        if let Some(last) = self.cells.last() {
            if last.is_empty() {
                self.cells.pop();
            }
        }
    }
    /// Start accumulating into the cell at (`x`,`y`), retiring the
    /// previous cell (dropped if it gathered nothing)
    fn set_curr_cell(&mut self, x: i64, y: i64) {
        if self.curr_cell_not_equal(x, y) {
            self.pop_last_cell_if_empty();
            self.cells.push(Cell::at(x, y));
        }
    }
    // cover/area increments always apply to the cell set_curr_cell
    // just created, so last_mut() cannot fail
    fn curr_cell(&mut self) -> &mut Cell {
        self.cells.last_mut().unwrap()
    }

    /// Accumulate a line segment spanning a single scanline `ey`
    ///
    /// y values are subpixel offsets within the scanline
    fn render_hline(&mut self, ey: i64, x1: i64, y1: i64, x2: i64, y2: i64) {
        let ex1 = x1 >> POLY_SUBPIXEL_SHIFT;
        let ex2 = x2 >> POLY_SUBPIXEL_SHIFT;
        let fx1 = x1 & POLY_SUBPIXEL_MASK;
        let fx2 = x2 & POLY_SUBPIXEL_MASK;

        // Horizontal line contributes no cover
        if y1 == y2 {
            self.set_curr_cell(ex2, ey);
            return;
        }

        // Within a single cell
        if ex1 == ex2 {
            let cell = self.curr_cell();
            cell.cover += y2 - y1;
            cell.area += (fx1 + fx2) * (y2 - y1);
            return;
        }

        // Crosses cell boundaries: run a Bresenham-style walk, spreading
        // the vertical delta across the crossed cells
        let (p, first, incr, dx) = if x2 - x1 < 0 {
            (fx1 * (y2 - y1), 0, -1, x1 - x2)
        } else {
            ((POLY_SUBPIXEL_SCALE - fx1) * (y2 - y1), POLY_SUBPIXEL_SCALE, 1, x2 - x1)
        };
        let mut delta = p / dx;
        let mut xmod = p % dx;
        if xmod < 0 {
            delta -= 1;
            xmod += dx;
        }
        {
            let cell = self.curr_cell();
            cell.cover += delta;
            cell.area += (fx1 + first) * delta;
        }
        let mut ex1 = ex1 + incr;
        self.set_curr_cell(ex1, ey);
        let mut y1 = y1 + delta;

        if ex1 != ex2 {
            let p = POLY_SUBPIXEL_SCALE * (y2 - y1 + delta);
            let mut lift = p / dx;
            let mut rem = p % dx;
            if rem < 0 {
                lift -= 1;
                rem += dx;
            }
            xmod -= dx;

            while ex1 != ex2 {
                delta = lift;
                xmod += rem;
                if xmod >= 0 {
                    xmod -= dx;
                    delta += 1;
                }
                {
                    let cell = self.curr_cell();
                    cell.cover += delta;
                    cell.area += POLY_SUBPIXEL_SCALE * delta;
                }
                y1 += delta;
                ex1 += incr;
                self.set_curr_cell(ex1, ey);
            }
        }
        delta = y2 - y1;
        let cell = self.curr_cell();
        cell.cover += delta;
        cell.area += (fx2 + POLY_SUBPIXEL_SCALE - first) * delta;
    }

    /// Accumulate a line segment in subpixel coordinates
    pub fn line(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        let dx_limit = 16384 << POLY_SUBPIXEL_SHIFT;
        let dx = x2 - x1;
        // Split very long lines to keep the fixed point math in range
        if dx >= dx_limit || dx <= -dx_limit {
            let cx = (x1 + x2) / 2;
            let cy = (y1 + y2) / 2;
            self.line(x1, y1, cx, cy);
            self.line(cx, cy, x2, y2);
            return;
        }
        let dy = y2 - y1;
        let ex1 = x1 >> POLY_SUBPIXEL_SHIFT;
        let ex2 = x2 >> POLY_SUBPIXEL_SHIFT;
        let ey1 = y1 >> POLY_SUBPIXEL_SHIFT;
        let ey2 = y2 >> POLY_SUBPIXEL_SHIFT;
        let fy1 = y1 & POLY_SUBPIXEL_MASK;
        let fy2 = y2 & POLY_SUBPIXEL_MASK;

        self.min_x = min(ex2, min(ex1, self.min_x));
        self.min_y = min(ey2, min(ey1, self.min_y));
        self.max_x = max(ex2, max(ex1, self.max_x));
        self.max_y = max(ey2, max(ey1, self.max_y));

        self.set_curr_cell(ex1, ey1);

        // Within a single scanline
        if ey1 == ey2 {
            self.render_hline(ey1, x1, fy1, x2, fy2);
            self.pop_last_cell_if_empty();
            return;
        }

        // Vertical line: whole cover goes to one cell per scanline
        if dx == 0 {
            let ex = x1 >> POLY_SUBPIXEL_SHIFT;
            let two_fx = (x1 - (ex << POLY_SUBPIXEL_SHIFT)) << 1;

            let (first, incr) = if dy < 0 { (0, -1) } else { (POLY_SUBPIXEL_SCALE, 1) };
            let delta = first - fy1;
            {
                let cell = self.curr_cell();
                cell.cover += delta;
                cell.area += two_fx * delta;
            }

            let mut ey1 = ey1 + incr;
            self.set_curr_cell(ex, ey1);
            let delta = first + first - POLY_SUBPIXEL_SCALE;
            let area = two_fx * delta;
            while ey1 != ey2 {
                {
                    let cell = self.curr_cell();
                    cell.cover = delta;
                    cell.area = area;
                }
                ey1 += incr;
                self.set_curr_cell(ex, ey1);
            }
            let delta = fy2 - POLY_SUBPIXEL_SCALE + first;
            let cell = self.curr_cell();
            cell.cover += delta;
            cell.area += two_fx * delta;
            return;
        }

        // General case: one render_hline per crossed scanline
        let (p, first, incr, dy) = if dy < 0 {
            (fy1 * dx, 0, -1, -dy)
        } else {
            ((POLY_SUBPIXEL_SCALE - fy1) * dx, POLY_SUBPIXEL_SCALE, 1, dy)
        };
        let mut delta = p / dy;
        let mut xmod = p % dy;
        if xmod < 0 {
            delta -= 1;
            xmod += dy;
        }
        let mut x_from = x1 + delta;
        self.render_hline(ey1, x1, fy1, x_from, first);
        let mut ey1 = ey1 + incr;
        self.set_curr_cell(x_from >> POLY_SUBPIXEL_SHIFT, ey1);
        if ey1 != ey2 {
            let p = POLY_SUBPIXEL_SCALE * dx;
            let mut lift = p / dy;
            let mut rem = p % dy;
            if rem < 0 {
                lift -= 1;
                rem += dy;
            }
            xmod -= dy;
            while ey1 != ey2 {
                delta = lift;
                xmod += rem;
                if xmod >= 0 {
                    xmod -= dy;
                    delta += 1;
                }
                let x_to = x_from + delta;
                self.render_hline(ey1, x_from, POLY_SUBPIXEL_SCALE - first, x_to, first);
                x_from = x_to;
                ey1 += incr;
                self.set_curr_cell(x_from >> POLY_SUBPIXEL_SHIFT, ey1);
            }
        }
        self.render_hline(ey1, x_from, POLY_SUBPIXEL_SCALE - first, x2, fy2);
        self.pop_last_cell_if_empty();
    }
}

//! Clipping region for the rasterizer

use crate::cell::RasterizerCell;

/// Axis-aligned rectangle
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rectangle<T: PartialOrd + Copy> {
    /// Minimum x value
    pub x1: T,
    /// Minimum y value
    pub y1: T,
    /// Maximum x value
    pub x2: T,
    /// Maximum y value
    pub y2: T,
}

impl<T> Rectangle<T>
where
    T: PartialOrd + Copy,
{
    /// Create a new Rectangle
    ///
    /// Values are sorted before storing
    pub fn new(x1: T, y1: T, x2: T, y2: T) -> Self {
        let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
        let (y1, y2) = if y1 > y2 { (y2, y1) } else { (y1, y2) };
        Self { x1, y1, x2, y2 }
    }
    /// Location of a point relative to the rectangle as a bitset of
    /// [LEFT], [RIGHT], [BOTTOM] and [TOP]
    ///
    /// [LEFT]: constant.LEFT.html
    /// [RIGHT]: constant.RIGHT.html
    /// [BOTTOM]: constant.BOTTOM.html
    /// [TOP]: constant.TOP.html
    pub fn clip_flags(&self, x: T, y: T) -> u8 {
        clip_flags(&x, &y, &self.x1, &self.y1, &self.x2, &self.y2)
    }
}

/// Inside the region
pub const INSIDE: u8 = 0b0000;
/// Left of the region
pub const LEFT: u8 = 0b0000_0001;
/// Right of the region
pub const RIGHT: u8 = 0b0000_0010;
/// Below the region
pub const BOTTOM: u8 = 0b0000_0100;
/// Above the region
pub const TOP: u8 = 0b0000_1000;

/// Region code of a point relative to a rectangle, Cohen-Sutherland style
fn clip_flags<T: PartialOrd>(x: &T, y: &T, x1: &T, y1: &T, x2: &T, y2: &T) -> u8 {
    let mut code = INSIDE;
    if x < x1 {
        code |= LEFT;
    }
    if x > x2 {
        code |= RIGHT;
    }
    if y < y1 {
        code |= BOTTOM;
    }
    if y > y2 {
        code |= TOP;
    }
    code
}

/// Line clipper feeding a [RasterizerCell](../cell/struct.RasterizerCell.html)
///
/// Works in subpixel coordinates. Geometry outside the box is not simply
/// discarded: it is flattened onto the box edges so the winding along the
/// boundary stays correct
#[derive(Debug, Default)]
pub struct Clip {
    /// Current x position
    x1: i64,
    /// Current y position
    y1: i64,
    /// Rectangle to clip on
    clip_box: Option<Rectangle<i64>>,
    /// Clip flags of the current position
    clip_flag: u8,
}

fn mul_div(a: i64, b: i64, c: i64) -> i64 {
    let (a, b, c) = (a as f64, b as f64, c as f64);
    (a * b / c).round() as i64
}

impl Clip {
    pub fn new() -> Self {
        Self {
            x1: 0,
            y1: 0,
            clip_box: None,
            clip_flag: INSIDE,
        }
    }
    /// Clip a line along the top and bottom of the region
    fn line_clip_y(
        &self,
        ras: &mut RasterizerCell,
        x1: i64,
        y1: i64,
        x2: i64,
        y2: i64,
        f1: u8,
        f2: u8,
    ) {
        let b = match self.clip_box {
            None => return,
            Some(ref b) => b,
        };
        let f1 = f1 & (TOP | BOTTOM);
        let f2 = f2 & (TOP | BOTTOM);
        // Fully visible in y
        if f1 == INSIDE && f2 == INSIDE {
            ras.line(x1, y1, x2, y2);
            return;
        }
        // Both ends above or both below
        if f1 == f2 {
            return;
        }
        let (mut tx1, mut ty1, mut tx2, mut ty2) = (x1, y1, x2, y2);
        if f1 == BOTTOM {
            tx1 = x1 + mul_div(b.y1 - y1, x2 - x1, y2 - y1);
            ty1 = b.y1;
        }
        if f1 == TOP {
            tx1 = x1 + mul_div(b.y2 - y1, x2 - x1, y2 - y1);
            ty1 = b.y2;
        }
        if f2 == BOTTOM {
            tx2 = x1 + mul_div(b.y1 - y1, x2 - x1, y2 - y1);
            ty2 = b.y1;
        }
        if f2 == TOP {
            tx2 = x1 + mul_div(b.y2 - y1, x2 - x1, y2 - y1);
            ty2 = b.y2;
        }
        ras.line(tx1, ty1, tx2, ty2);
    }

    /// Draw a line from the current position to (x2,y2), clipped
    ///
    /// (x2,y2) becomes the new current position
    pub fn line_to(&mut self, ras: &mut RasterizerCell, x2: i64, y2: i64) {
        if let Some(ref b) = self.clip_box {
            let f2 = b.clip_flags(x2, y2);
            // Both ends above or both below: nothing to draw
            let fy1 = (TOP | BOTTOM) & self.clip_flag;
            let fy2 = (TOP | BOTTOM) & f2;
            if fy1 != INSIDE && fy1 == fy2 {
                self.x1 = x2;
                self.y1 = y2;
                self.clip_flag = f2;
                return;
            }
            let (x1, y1, f1) = (self.x1, self.y1, self.clip_flag);
            match (f1 & (LEFT | RIGHT), f2 & (LEFT | RIGHT)) {
                (INSIDE, INSIDE) => self.line_clip_y(ras, x1, y1, x2, y2, f1, f2),
                (INSIDE, RIGHT) => {
                    let y3 = y1 + mul_div(b.x2 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x2, y3);
                    self.line_clip_y(ras, x1, y1, b.x2, y3, f1, f3);
                    self.line_clip_y(ras, b.x2, y3, b.x2, y2, f3, f2);
                }
                (RIGHT, INSIDE) => {
                    let y3 = y1 + mul_div(b.x2 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x2, y3);
                    self.line_clip_y(ras, b.x2, y1, b.x2, y3, f1, f3);
                    self.line_clip_y(ras, b.x2, y3, x2, y2, f3, f2);
                }
                (INSIDE, LEFT) => {
                    let y3 = y1 + mul_div(b.x1 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x1, y3);
                    self.line_clip_y(ras, x1, y1, b.x1, y3, f1, f3);
                    self.line_clip_y(ras, b.x1, y3, b.x1, y2, f3, f2);
                }
                (RIGHT, LEFT) => {
                    let y3 = y1 + mul_div(b.x2 - x1, y2 - y1, x2 - x1);
                    let y4 = y1 + mul_div(b.x1 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x2, y3);
                    let f4 = b.clip_flags(b.x1, y4);
                    self.line_clip_y(ras, b.x2, y1, b.x2, y3, f1, f3);
                    self.line_clip_y(ras, b.x2, y3, b.x1, y4, f3, f4);
                    self.line_clip_y(ras, b.x1, y4, b.x1, y2, f4, f2);
                }
                (LEFT, INSIDE) => {
                    let y3 = y1 + mul_div(b.x1 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x1, y3);
                    self.line_clip_y(ras, b.x1, y1, b.x1, y3, f1, f3);
                    self.line_clip_y(ras, b.x1, y3, x2, y2, f3, f2);
                }
                (LEFT, RIGHT) => {
                    let y3 = y1 + mul_div(b.x1 - x1, y2 - y1, x2 - x1);
                    let y4 = y1 + mul_div(b.x2 - x1, y2 - y1, x2 - x1);
                    let f3 = b.clip_flags(b.x1, y3);
                    let f4 = b.clip_flags(b.x2, y4);
                    self.line_clip_y(ras, b.x1, y1, b.x1, y3, f1, f3);
                    self.line_clip_y(ras, b.x1, y3, b.x2, y4, f3, f4);
                    self.line_clip_y(ras, b.x2, y4, b.x2, y2, f4, f2);
                }
                (LEFT, LEFT) => self.line_clip_y(ras, b.x1, y1, b.x1, y2, f1, f2),
                (RIGHT, RIGHT) => self.line_clip_y(ras, b.x2, y1, b.x2, y2, f1, f2),
                (_, _) => unreachable!("clip flags {:?} {:?}", f1, f2),
            }
            self.clip_flag = f2;
        } else {
            ras.line(self.x1, self.y1, x2, y2);
        }
        self.x1 = x2;
        self.y1 = y2;
    }
    /// Move the current position to (x2,y2)
    pub fn move_to(&mut self, x2: i64, y2: i64) {
        self.x1 = x2;
        self.y1 = y2;
        if let Some(ref b) = self.clip_box {
            self.clip_flag = b.clip_flags(x2, y2);
        }
    }
    /// Define the clipping region in subpixel coordinates
    pub fn clip_box(&mut self, x1: i64, y1: i64, x2: i64, y2: i64) {
        self.clip_box = Some(Rectangle::new(x1, y1, x2, y2));
    }
}

//! Path stroking
//!
//! # Example
//!
//!     // Input Path
//!     let mut path = pixcanvas::Path::new();
//!     path.move_to(  0.0,   0.0);
//!     path.line_to(100.0, 100.0);
//!     path.line_to(200.0,  50.0);
//!
//!     // Stroke
//!     let mut stroke = pixcanvas::Stroke::new(path);
//!     stroke.width(2.5);
//!     stroke.line_cap(pixcanvas::LineCap::Square);
//!     stroke.line_join(pixcanvas::LineJoin::Miter);
//!     stroke.miter_limit(5.0);
//!
//!     // Draw
//!     let mut ras = pixcanvas::RasterizerScanline::new();
//!     ras.add_path(&stroke);

use std::f64::consts::PI;

use crate::paths::cross;
use crate::paths::len;
use crate::paths::split;
use crate::paths::PathCommand;
use crate::paths::Vertex;
use crate::VertexSource;

/// Line end cap style
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LineCap {
    Butt,
    Square,
    Round,
}
/// Line join style on the outside of a corner
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum LineJoin {
    Miter,
    MiterRevert,
    Round,
    Bevel,
    MiterRound,
    MiterAccurate,
    None,
}
/// Line join style on the inside of a corner
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum InnerJoin {
    Bevel,
    Miter,
    Jag,
    Round,
}

/// Stroke outline generator for a vertex source
///
/// Converts a polyline into the closed outline of its stroked shape:
/// caps at open ends, joins at corners. A subpath that degenerates to a
/// single point becomes a dot shaped by the cap style (square cap gives
/// a square, round a circle, butt nothing).
#[derive(Debug)]
pub struct Stroke<T: VertexSource> {
    /// Source of verticies
    source: T,
    /// Half width of the line in pixels, can be negative
    width: f64,
    /// Absolute value of the half width
    width_abs: f64,
    /// Limit to consider segments almost collinear
    width_eps: f64,
    /// Sign of the width
    width_sign: f64,
    /// Maximum miter length at joins, in widths
    miter_limit: f64,
    /// Maximum inner miter length at joins, in widths
    inner_miter_limit: f64,
    /// Approximation scale for arcs
    approx_scale: f64,
    line_cap: LineCap,
    line_join: LineJoin,
    inner_join: InnerJoin,
}

impl<T> VertexSource for Stroke<T>
where
    T: VertexSource,
{
    fn xconvert(&self) -> Vec<Vertex<f64>> {
        self.stroke()
    }
}

macro_rules! prev {
    ($i:expr, $n:expr) => {
        ($i + $n - 1) % $n
    };
}
macro_rules! curr {
    ($i:expr, $n:expr) => {
        $i
    };
}
macro_rules! next {
    ($i:expr, $n:expr) => {
        ($i + 1) % $n
    };
}

impl<T> Stroke<T>
where
    T: VertexSource,
{
    /// Create a new Stroke from a vertex source
    pub fn new(source: T) -> Self {
        Self {
            source,
            width: 0.5,
            width_abs: 0.5,
            width_eps: 0.5 / 1024.0,
            width_sign: 1.0,
            miter_limit: 4.0,
            inner_miter_limit: 1.01,
            approx_scale: 1.0,
            inner_join: InnerJoin::Miter,
            line_cap: LineCap::Butt,
            line_join: LineJoin::Miter,
        }
    }
    /// Set the stroke width
    pub fn width(&mut self, width: f64) {
        self.width = width / 2.0;
        self.width_abs = self.width.abs();
        self.width_sign = if self.width < 0.0 { -1.0 } else { 1.0 };
    }
    /// Set the line cap style
    pub fn line_cap(&mut self, line_cap: LineCap) {
        self.line_cap = line_cap;
    }
    /// Set the line join style
    ///
    /// `MiterAccurate` and `None` are not implemented and fall back
    /// to `Miter`
    pub fn line_join(&mut self, line_join: LineJoin) {
        self.line_join = match line_join {
            LineJoin::MiterAccurate | LineJoin::None => LineJoin::Miter,
            j => j,
        };
    }
    /// Set the inner join style
    pub fn inner_join(&mut self, inner_join: InnerJoin) {
        self.inner_join = inner_join;
    }
    /// Set the miter limit
    pub fn miter_limit(&mut self, miter_limit: f64) {
        self.miter_limit = miter_limit;
    }
    /// Set the inner miter limit
    pub fn inner_miter_limit(&mut self, inner_miter_limit: f64) {
        self.inner_miter_limit = inner_miter_limit;
    }
    /// Set the approximation scale for arcs
    pub fn approximation_scale(&mut self, scale: f64) {
        self.approx_scale = scale;
    }

    /// Cap at the end of the segment v0 -> v1
    fn calc_cap(&self, v0: &Vertex<f64>, v1: &Vertex<f64>) -> Vec<Vertex<f64>> {
        let mut out = vec![];
        let dx = v1.x - v0.x;
        let dy = v1.y - v0.y;
        let len = (dx * dx + dy * dy).sqrt();
        let dx1 = self.width * dy / len;
        let dy1 = self.width * dx / len;

        match self.line_cap {
            LineCap::Square => {
                let dx2 = dy1 * self.width_sign;
                let dy2 = dx1 * self.width_sign;
                out.push(Vertex::line_to(v0.x - dx1 - dx2, v0.y + dy1 - dy2));
                out.push(Vertex::line_to(v0.x + dx1 - dx2, v0.y - dy1 - dy2));
            }
            LineCap::Butt => {
                out.push(Vertex::line_to(v0.x - dx1, v0.y + dy1));
                out.push(Vertex::line_to(v0.x + dx1, v0.y - dy1));
            }
            LineCap::Round => {
                let da =
                    2.0 * (self.width_abs / (self.width_abs + 0.125 / self.approx_scale)).acos();
                let n = (PI / da).round() as usize;
                let da = PI / (n + 1) as f64;
                out.push(Vertex::line_to(v0.x - dx1, v0.y + dy1));
                if self.width_sign > 0.0 {
                    let mut a1 = dy1.atan2(-dx1);
                    a1 += da;
                    for _ in 0..n {
                        out.push(Vertex::line_to(
                            v0.x + a1.cos() * self.width,
                            v0.y + a1.sin() * self.width,
                        ));
                        a1 += da;
                    }
                } else {
                    let mut a1 = (-dy1).atan2(dx1);
                    a1 -= da;
                    for _ in 0..n {
                        out.push(Vertex::line_to(
                            v0.x + a1.cos() * self.width,
                            v0.y + a1.sin() * self.width,
                        ));
                        a1 -= da;
                    }
                }
                out.push(Vertex::line_to(v0.x + dx1, v0.y - dy1));
            }
        }
        out
    }

    /// Dot at an isolated vertex, shaped by the cap style
    fn calc_dot(&self, v: &Vertex<f64>) -> Vec<Vertex<f64>> {
        let mut out = vec![];
        let w = self.width_abs;
        if w <= 0.0 {
            return out;
        }
        match self.line_cap {
            LineCap::Butt => {}
            LineCap::Square => {
                out.push(Vertex::move_to(v.x - w, v.y - w));
                out.push(Vertex::line_to(v.x + w, v.y - w));
                out.push(Vertex::line_to(v.x + w, v.y + w));
                out.push(Vertex::line_to(v.x - w, v.y + w));
                out.push(Vertex::close_polygon(v.x - w, v.y + w));
            }
            LineCap::Round => {
                let da = 2.0 * (w / (w + 0.125 / self.approx_scale)).acos();
                let n = ((2.0 * PI / da).ceil() as usize).max(4);
                let da = 2.0 * PI / n as f64;
                out.push(Vertex::move_to(v.x + w, v.y));
                let mut a = da;
                for _ in 1..n {
                    out.push(Vertex::line_to(v.x + w * a.cos(), v.y + w * a.sin()));
                    a += da;
                }
                let last = out[out.len() - 1];
                out.push(Vertex::close_polygon(last.x, last.y));
            }
        }
        out
    }

    /// Arc around (x,y) from direction (dx1,dy1) to (dx2,dy2)
    fn calc_arc(
        &self,
        x: f64,
        y: f64,
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
    ) -> Vec<Vertex<f64>> {
        let mut out = vec![];
        let mut a1 = (dy1 * self.width_sign).atan2(dx1 * self.width_sign);
        let mut a2 = (dy2 * self.width_sign).atan2(dx2 * self.width_sign);
        let mut da =
            2.0 * (self.width_abs / (self.width_abs + 0.125 / self.approx_scale)).acos();
        out.push(Vertex::line_to(x + dx1, y + dy1));
        if self.width_sign > 0.0 {
            if a1 > a2 {
                a2 += 2.0 * PI;
            }
            let n = ((a2 - a1) / da) as i64;
            da = (a2 - a1) / (n + 1) as f64;
            a1 += da;
            for _ in 0..n {
                out.push(Vertex::line_to(
                    x + a1.cos() * self.width,
                    y + a1.sin() * self.width,
                ));
                a1 += da;
            }
        } else {
            if a1 < a2 {
                a2 -= 2.0 * PI;
            }
            let n = ((a1 - a2) / da) as i64;
            da = (a1 - a2) / (n + 1) as f64;
            a1 -= da;
            for _ in 0..n {
                out.push(Vertex::line_to(
                    x + a1.cos() * self.width,
                    y + a1.sin() * self.width,
                ));
                a1 -= da;
            }
        }
        out.push(Vertex::line_to(x + dx2, y + dy2));
        out
    }

    /// Miter join of the segments p0->p1 and p1->p2
    #[allow(clippy::too_many_arguments)]
    fn calc_miter(
        &self,
        p0: &Vertex<f64>,
        p1: &Vertex<f64>,
        p2: &Vertex<f64>,
        dx1: f64,
        dy1: f64,
        dx2: f64,
        dy2: f64,
        join: LineJoin,
        mlimit: f64,
        dbevel: f64,
    ) -> Vec<Vertex<f64>> {
        let mut out = vec![];
        let mut xi = p1.x;
        let mut yi = p1.y;
        let mut di = 1.0;
        let lim = self.width_abs * mlimit;
        let mut miter_limit_exceeded = true;
        let mut intersection_failed = true;
        if let Some((xit, yit)) = calc_intersection(
            p0.x + dx1,
            p0.y - dy1,
            p1.x + dx1,
            p1.y - dy1,
            p1.x + dx2,
            p1.y - dy2,
            p2.x + dx2,
            p2.y - dy2,
        ) {
            xi = xit;
            yi = yit;
            let pz = Vertex::line_to(xi, yi);
            di = len(p1, &pz);
            if di <= lim {
                // Within the miter limit
                out.push(Vertex::line_to(xi, yi));
                miter_limit_exceeded = false;
            }
            intersection_failed = false;
        } else {
            // The three points most probably lie on one straight line.
            // Check whether the next segment continues the previous one
            // or reverses back over it
            let x2 = p1.x + dx1;
            let y2 = p1.y - dy1;
            let pz = Vertex::line_to(x2, y2);
            if (cross(p0, p1, &pz) < 0.0) == (cross(p1, p2, &pz) < 0.0) {
                out.push(Vertex::line_to(p1.x + dx1, p1.y - dy1));
                miter_limit_exceeded = false;
            }
        }

        if miter_limit_exceeded {
            match join {
                LineJoin::MiterRevert => {
                    // Simple bevel, as in SVG and PDF
                    out.push(Vertex::line_to(p1.x + dx1, p1.y - dy1));
                    out.push(Vertex::line_to(p1.x + dx2, p1.y - dy2));
                }
                LineJoin::Round => out.extend(self.calc_arc(p1.x, p1.y, dx1, -dy1, dx2, -dy2)),
                _ => {
                    if intersection_failed {
                        let mlimit = mlimit * self.width_sign;
                        out.push(Vertex::line_to(
                            p1.x + dx1 + dy1 * mlimit,
                            p1.y - dy1 + dx1 * mlimit,
                        ));
                        out.push(Vertex::line_to(
                            p1.x + dx2 - dy2 * mlimit,
                            p1.y - dy2 - dx2 * mlimit,
                        ));
                    } else {
                        let x1 = p1.x + dx1;
                        let y1 = p1.y - dy1;
                        let x2 = p1.x + dx2;
                        let y2 = p1.y - dy2;
                        let di = (lim - dbevel) / (di - dbevel);
                        out.push(Vertex::line_to(x1 + (xi - x1) * di, y1 + (yi - y1) * di));
                        out.push(Vertex::line_to(x2 + (xi - x2) * di, y2 + (yi - y2) * di));
                    }
                }
            }
        }
        out
    }

    /// Join of the segments p0->p1 and p1->p2
    fn calc_join(
        &self,
        p0: &Vertex<f64>,
        p1: &Vertex<f64>,
        p2: &Vertex<f64>,
    ) -> Vec<Vertex<f64>> {
        let mut out = vec![];
        let len1 = len(p1, p0);
        let len2 = len(p2, p1);
        if len1 == 0.0 || len2 == 0.0 {
            // repeated point, nothing to join
            return out;
        }
        // Perpendicular offsets of the two segments
        let dx1 = self.width * (p1.y - p0.y) / len1;
        let dy1 = self.width * (p1.x - p0.x) / len1;
        let dx2 = self.width * (p2.y - p1.y) / len2;
        let dy2 = self.width * (p2.x - p1.x) / len2;
        let cp = cross(p0, p1, p2);

        if cp != 0.0 && cp.is_sign_positive() == self.width.is_sign_positive() {
            // Inner join
            let mut limit = if len1 < len2 {
                len1 / self.width_abs
            } else {
                len2 / self.width_abs
            };
            if limit < self.inner_miter_limit {
                limit = self.inner_miter_limit;
            }
            match self.inner_join {
                InnerJoin::Bevel => {
                    out.push(Vertex::line_to(p1.x + dx1, p1.y - dy1));
                    out.push(Vertex::line_to(p1.x + dx2, p1.y - dy2));
                }
                InnerJoin::Miter => {
                    out.extend(self.calc_miter(
                        p0,
                        p1,
                        p2,
                        dx1,
                        dy1,
                        dx2,
                        dy2,
                        LineJoin::MiterRevert,
                        limit,
                        0.0,
                    ));
                }
                InnerJoin::Jag | InnerJoin::Round => {
                    let cp = (dx1 - dx2).powi(2) + (dy1 - dy2).powi(2);
                    if cp < len1.powi(2) && cp < len2.powi(2) {
                        out.extend(self.calc_miter(
                            p0,
                            p1,
                            p2,
                            dx1,
                            dy1,
                            dx2,
                            dy2,
                            LineJoin::MiterRevert,
                            limit,
                            0.0,
                        ));
                    } else if self.inner_join == InnerJoin::Jag {
                        out.push(Vertex::line_to(p1.x + dx1, p1.y - dy1));
                        out.push(Vertex::line_to(p1.x, p1.y));
                        out.push(Vertex::line_to(p1.x + dx2, p1.y - dy2));
                    } else {
                        out.push(Vertex::line_to(p1.x + dx1, p1.y - dy1));
                        out.push(Vertex::line_to(p1.x, p1.y));
                        out.extend(self.calc_arc(p1.x, p1.y, dx2, -dy2, dx1, -dy1));
                        out.push(Vertex::line_to(p1.x, p1.y));
                        out.push(Vertex::line_to(p1.x + dx2, p1.y - dy2));
                    }
                }
            }
        } else {
            // Outer join
            let dx = (dx1 + dx2) / 2.0;
            let dy = (dy1 + dy2) / 2.0;
            let dbevel = (dx * dx + dy * dy).sqrt();

            // For almost collinear segments a miter point is visually
            // identical to the bevel and adds one point instead of two
            if (self.line_join == LineJoin::Round || self.line_join == LineJoin::Bevel)
                && self.approx_scale * (self.width_abs - dbevel) < self.width_eps
            {
                if let Some((dx, dy)) = calc_intersection(
                    p0.x + dx1,
                    p0.y - dy1,
                    p1.x + dx1,
                    p1.y - dy1,
                    p1.x + dx2,
                    p1.y - dy2,
                    p2.x + dx2,
                    p2.y - dy2,
                ) {
                    out.push(Vertex::line_to(dx, dy));
                } else {
                    out.push(Vertex::line_to(p1.x + dx1, p1.y - dy1));
                }
                return out;
            }
            match self.line_join {
                LineJoin::Miter | LineJoin::MiterRevert | LineJoin::MiterRound => {
                    out.extend(self.calc_miter(
                        p0,
                        p1,
                        p2,
                        dx1,
                        dy1,
                        dx2,
                        dy2,
                        self.line_join,
                        self.miter_limit,
                        dbevel,
                    ))
                }
                LineJoin::Round => out.extend(self.calc_arc(p1.x, p1.y, dx1, -dy1, dx2, -dy2)),
                LineJoin::Bevel => {
                    out.push(Vertex::line_to(p1.x + dx1, p1.y - dy1));
                    out.push(Vertex::line_to(p1.x + dx2, p1.y - dy2));
                }
                LineJoin::None | LineJoin::MiterAccurate => {}
            }
        }
        out
    }

    /// Generate the stroke outline of the source
    fn stroke(&self) -> Vec<Vertex<f64>> {
        let mut all_out = vec![];
        let v0 = &self.source.xconvert();
        // Walk subpaths separated by MoveTo commands
        for (m1, m2) in split(v0) {
            let v = clean_path(&v0[m1..=m2]);
            if v.is_empty() {
                continue;
            }
            let closed = is_path_closed(&v);
            // Degenerate subpath: a point, with or without a Close tag
            let drawable = v.iter().filter(|x| x.cmd == PathCommand::LineTo).count();
            if drawable == 0 {
                all_out.extend(self.calc_dot(&v[0]));
                continue;
            }
            let n = if closed { v.len() - 1 } else { v.len() };
            let (n1, n2) = if closed { (0, n) } else { (1, n - 1) };

            // Forward pass along one side of the line
            let mut outf = vec![];
            if !closed {
                outf.extend(self.calc_cap(&v[0], &v[1]));
            }
            for i in n1..n2 {
                outf.extend(self.calc_join(&v[prev!(i, n)], &v[curr!(i, n)], &v[next!(i, n)]));
            }
            if closed {
                let last = outf[outf.len() - 1];
                outf.push(Vertex::close_polygon(last.x, last.y));
            }

            // Backward pass along the other side
            let mut outb = vec![];
            if !closed {
                outb.extend(self.calc_cap(&v[n - 1], &v[n - 2]));
            }
            for i in (n1..n2).rev() {
                outb.extend(self.calc_join(&v[next!(i, n)], &v[curr!(i, n)], &v[prev!(i, n)]));
            }
            if closed {
                outb[0].cmd = PathCommand::MoveTo;
            }
            let last = outb[outb.len() - 1];
            outb.push(Vertex::close_polygon(last.x, last.y));

            outf[0].cmd = PathCommand::MoveTo;
            outf.extend(outb);
            all_out.extend(outf);
        }
        all_out
    }
}

/// Intersection of the lines a->b and c->d
///
/// `None` for parallel or collinear lines
fn calc_intersection(
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
    cx: f64,
    cy: f64,
    dx: f64,
    dy: f64,
) -> Option<(f64, f64)> {
    let intersection_epsilon = 1.0e-30;
    let num = (ay - cy) * (dx - cx) - (ax - cx) * (dy - cy);
    let den = (bx - ax) * (dy - cy) - (by - ay) * (dx - cx);
    if den.abs() < intersection_epsilon {
        return None;
    }
    let r = num / den;
    Some((ax + r * (bx - ax), ay + r * (by - ay)))
}

/// A path is closed if any vertex carries a Close command
fn is_path_closed(verts: &[Vertex<f64>]) -> bool {
    verts.iter().any(|v| v.cmd == PathCommand::Close)
}

/// Remove repeated verticies (closer than 1e-6)
///
/// For closed paths, trailing points coincident with the first point
/// are dropped as well. Can reduce a subpath to a bare MoveTo
fn clean_path(v: &[Vertex<f64>]) -> Vec<Vertex<f64>> {
    let mut mark = vec![];
    if !v.is_empty() {
        mark.push(0);
    }
    for i in 1..v.len() {
        match v[i].cmd {
            PathCommand::LineTo => {
                if len(&v[i - 1], &v[i]) >= 1e-6 {
                    mark.push(i);
                }
            }
            _ => mark.push(i),
        }
    }
    let mut out: Vec<_> = mark.into_iter().map(|i| v[i]).collect();
    if !is_path_closed(&out) {
        return out;
    }
    let first = out[0];
    while let Some(i) = last_line_to(&out) {
        if len(&first, &out[i]) >= 1e-6 {
            break;
        }
        out.remove(i);
    }
    out
}

/// Index of the last LineTo vertex
fn last_line_to(v: &[Vertex<f64>]) -> Option<usize> {
    let mut i = v.len() - 1;
    while i > 0 {
        if v[i].cmd == PathCommand::LineTo {
            return Some(i);
        }
        i -= 1;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths::Path;

    fn bounds(verts: &[Vertex<f64>]) -> (f64, f64, f64, f64) {
        let mut b = (f64::MAX, f64::MAX, f64::MIN, f64::MIN);
        for v in verts {
            b.0 = b.0.min(v.x);
            b.1 = b.1.min(v.y);
            b.2 = b.2.max(v.x);
            b.3 = b.3.max(v.y);
        }
        b
    }

    #[test]
    fn butt_cap_bounds() {
        let mut path = Path::new();
        path.move_to(10.0, 10.0);
        path.line_to(20.0, 10.0);
        let mut stroke = Stroke::new(path);
        stroke.width(4.0);
        let out = stroke.xconvert();
        let (x1, y1, x2, y2) = bounds(&out);
        assert!((x1 - 10.0).abs() < 1e-9);
        assert!((x2 - 20.0).abs() < 1e-9);
        assert!((y1 - 8.0).abs() < 1e-9);
        assert!((y2 - 12.0).abs() < 1e-9);
    }

    #[test]
    fn square_cap_extends_ends() {
        let mut path = Path::new();
        path.move_to(10.0, 10.0);
        path.line_to(20.0, 10.0);
        let mut stroke = Stroke::new(path);
        stroke.width(4.0);
        stroke.line_cap(LineCap::Square);
        let out = stroke.xconvert();
        let (x1, _, x2, _) = bounds(&out);
        assert!((x1 - 8.0).abs() < 1e-9);
        assert!((x2 - 22.0).abs() < 1e-9);
    }

    #[test]
    fn zero_length_square_dot() {
        let mut path = Path::new();
        path.move_to(10.0, 10.0);
        path.line_to(10.0, 10.0);
        let mut stroke = Stroke::new(path);
        stroke.width(4.0);
        stroke.line_cap(LineCap::Square);
        let out = stroke.xconvert();
        let (x1, y1, x2, y2) = bounds(&out);
        assert!((x1 - 8.0).abs() < 1e-9 && (x2 - 12.0).abs() < 1e-9);
        assert!((y1 - 8.0).abs() < 1e-9 && (y2 - 12.0).abs() < 1e-9);
    }

    #[test]
    fn zero_length_butt_draws_nothing() {
        let mut path = Path::new();
        path.move_to(10.0, 10.0);
        path.line_to(10.0, 10.0);
        let mut stroke = Stroke::new(path);
        stroke.width(4.0);
        assert!(stroke.xconvert().is_empty());
    }

    #[test]
    fn zero_length_round_dot_radius() {
        let mut path = Path::new();
        path.move_to(10.0, 10.0);
        let mut stroke = Stroke::new(path);
        stroke.width(6.0);
        stroke.line_cap(LineCap::Round);
        let out = stroke.xconvert();
        assert!(!out.is_empty());
        for v in &out {
            let r = ((v.x - 10.0).powi(2) + (v.y - 10.0).powi(2)).sqrt();
            assert!((r - 3.0).abs() < 1e-9);
        }
    }

    #[test]
    fn join_styles_shape_a_sharp_corner() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(20.0, 1.0);
        path.line_to(0.0, 2.0);
        let mut miter = Stroke::new(path.xconvert());
        miter.width(2.0);
        miter.miter_limit(50.0);
        let mut bevel = Stroke::new(path.xconvert());
        bevel.width(2.0);
        bevel.line_join(LineJoin::Bevel);
        bevel.inner_join(InnerJoin::Jag);
        bevel.inner_miter_limit(1.5);
        bevel.approximation_scale(2.0);
        // the long miter spike extends past where the bevel stops
        let (_, _, mx, _) = bounds(&miter.xconvert());
        let (_, _, bx, _) = bounds(&bevel.xconvert());
        assert!(mx > bx);
        assert!(mx > 20.0);
    }

    #[test]
    fn closed_triangle_produces_two_rings() {
        let mut path = Path::new();
        path.move_to(0.0, 0.0);
        path.line_to(10.0, 0.0);
        path.line_to(5.0, 8.0);
        path.close_polygon();
        let mut stroke = Stroke::new(path);
        stroke.width(1.0);
        let out = stroke.xconvert();
        let moves = out.iter().filter(|v| v.cmd == PathCommand::MoveTo).count();
        let closes = out.iter().filter(|v| v.cmd == PathCommand::Close).count();
        assert_eq!(moves, 2);
        assert_eq!(closes, 2);
    }
}

//! Path of drawing commands

use crate::VertexSource;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathCommand {
    MoveTo,
    LineTo,
    Close,
}
impl Default for PathCommand {
    fn default() -> PathCommand {
        PathCommand::MoveTo
    }
}

/// Point with a path command
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Vertex<T> {
    pub x: T,
    pub y: T,
    pub cmd: PathCommand,
}

impl<T> Vertex<T> {
    pub fn new(x: T, y: T, cmd: PathCommand) -> Self {
        Self { x, y, cmd }
    }
    pub fn move_to(x: T, y: T) -> Self {
        Self::new(x, y, PathCommand::MoveTo)
    }
    pub fn line_to(x: T, y: T) -> Self {
        Self::new(x, y, PathCommand::LineTo)
    }
    pub fn close_polygon(x: T, y: T) -> Self {
        Self::new(x, y, PathCommand::Close)
    }
}

/// Distance between two verticies
pub fn len(a: &Vertex<f64>, b: &Vertex<f64>) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Cross product of the vectors p1->p2 and p2->p
pub fn cross(p1: &Vertex<f64>, p2: &Vertex<f64>, p: &Vertex<f64>) -> f64 {
    (p.x - p2.x) * (p2.y - p1.y) - (p.y - p2.y) * (p2.x - p1.x)
}

/// Split a vertex list into subpath index ranges, one per MoveTo
///
/// Returned pairs are inclusive (start, end) indicies. A MoveTo
/// immediately followed by another MoveTo forms a single vertex subpath
pub fn split(v: &[Vertex<f64>]) -> Vec<(usize, usize)> {
    let mut pairs = vec![];
    let mut start: Option<usize> = None;
    for (i, vt) in v.iter().enumerate() {
        if vt.cmd == PathCommand::MoveTo {
            if let Some(s) = start {
                pairs.push((s, i - 1));
            }
            start = Some(i);
        }
    }
    if let Some(s) = start {
        pairs.push((s, v.len() - 1));
    }
    pairs
}

/// Flat list of path verticies
#[derive(Debug, Default)]
pub struct Path {
    pub vertices: Vec<Vertex<f64>>,
}

impl VertexSource for Path {
    fn xconvert(&self) -> Vec<Vertex<f64>> {
        self.vertices.clone()
    }
}

impl VertexSource for Vec<Vertex<f64>> {
    fn xconvert(&self) -> Vec<Vertex<f64>> {
        self.clone()
    }
}

impl Path {
    pub fn new() -> Self {
        Self { vertices: vec![] }
    }
    pub fn remove_all(&mut self) {
        self.vertices.clear();
    }
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.vertices.push(Vertex::move_to(x, y));
    }
    pub fn line_to(&mut self, x: f64, y: f64) {
        self.vertices.push(Vertex::line_to(x, y));
    }
    /// Close the current polygon
    ///
    /// A no-op unless the last command was a LineTo
    pub fn close_polygon(&mut self) {
        if let Some(last) = self.vertices.last() {
            if last.cmd == PathCommand::LineTo {
                self.vertices.push(Vertex::close_polygon(last.x, last.y));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_requires_line_to() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0);
        p.close_polygon();
        assert_eq!(p.vertices.len(), 1);
        p.line_to(1.0, 0.0);
        p.close_polygon();
        assert_eq!(p.vertices.last().unwrap().cmd, PathCommand::Close);
        p.remove_all();
        assert!(p.vertices.is_empty());
    }

    #[test]
    fn split_subpaths() {
        let mut p = Path::new();
        p.move_to(0.0, 0.0);
        p.line_to(1.0, 0.0);
        p.move_to(5.0, 5.0);
        p.move_to(9.0, 9.0);
        p.line_to(9.0, 10.0);
        assert_eq!(split(&p.vertices), vec![(0, 1), (2, 2), (3, 4)]);
    }
}

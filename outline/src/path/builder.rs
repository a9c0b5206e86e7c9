use super::Path;

use crate::edge::*;
use crate::geo::*;

///
/// Builds an immutable `Path` by appending edges at a moving pen position
///
/// The pen is construction-time state only: it never becomes part of the
/// finished path. The pen starts at the origin.
///
pub struct PathBuilder {
    path:   Path,
    pen:    Point,
}

impl PathBuilder {
    ///
    /// Creates a builder with an empty path and the pen at the origin
    ///
    pub fn new() -> PathBuilder {
        PathBuilder {
            path:   Path::new(),
            pen:    Point::new(0.0, 0.0),
        }
    }

    ///
    /// Moves the pen without appending an edge
    ///
    pub fn move_to(&mut self, pos: Point) {
        self.pen = pos;
    }

    ///
    /// Appends a line from the pen to `pos`, leaving the pen at `pos`
    ///
    pub fn line_to(&mut self, pos: Point) {
        self.path.push(Line::new(self.pen, pos));
        self.pen = pos;
    }

    ///
    /// Appends a closed rectangle of the given length and unit height, leaving
    /// the pen at `origin`
    ///
    /// The height matches the rasterizer's unit scanline granularity and is not
    /// parameterized.
    ///
    pub fn rect(&mut self, origin: Point, length: f64) {
        let p0 = origin;
        let p1 = Point::new(origin.x, origin.y + 1.0);
        let p2 = Point::new(origin.x + length, origin.y + 1.0);
        let p3 = Point::new(origin.x + length, origin.y);

        self.path.push(Line::new(p0, p1));
        self.path.push(Line::new(p1, p2));
        self.path.push(Line::new(p2, p3));
        self.path.push(Line::new(p3, p0));

        self.pen = p0;
    }

    ///
    /// Appends an arc, leaving the pen at the arc's end point
    ///
    /// When the pen is not already at the arc's start point, a connecting line
    /// is inserted first.
    ///
    pub fn arc(&mut self, center: Point, radius: f64, start_angle: f64, end_angle: f64) {
        let arc = Arc::new(center, radius, start_angle, end_angle);

        if self.pen != arc.start_point() {
            self.path.push(Line::new(self.pen, arc.start_point()));
        }

        self.pen = arc.end_point();
        self.path.push(arc);
    }

    ///
    /// Finishes construction, yielding the immutable path
    ///
    pub fn build(self) -> Path {
        self.path
    }
}

impl Default for PathBuilder {
    fn default() -> PathBuilder {
        PathBuilder::new()
    }
}

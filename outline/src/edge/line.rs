use super::descriptor::*;

use crate::geo::*;

use smallvec::*;

///
/// A directed straight line between two points
///
/// Horizontal and zero-length lines are legal path components: they contribute
/// no crossings of their own, but a query line that touches one of their
/// vertices is still reported as degenerate.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Line {
    start:  Point,
    end:    Point,
}

impl Line {
    ///
    /// Creates a line between two points
    ///
    #[inline]
    pub fn new(start: Point, end: Point) -> Line {
        Line { start, end }
    }
}

impl Edge for Line {
    fn intercepts(&self, y_pos: f64) -> Intercepts {
        // A query line through either vertex can't be classified: the crossing belongs equally to the neighbouring edge
        if self.start.y == y_pos || self.end.y == y_pos {
            return Intercepts::Degenerate;
        }

        // A horizontal line contributes no single crossing point
        if self.start.y == self.end.y {
            return Intercepts::Valid(smallvec![]);
        }

        // No crossing when both endpoints lie strictly on the same side
        if (self.start.y < y_pos) == (self.end.y < y_pos) {
            return Intercepts::Valid(smallvec![]);
        }

        // Exactly one crossing: interpolate x along the gradient
        let gradient    = (self.end.x - self.start.x) / (self.end.y - self.start.y);
        let x_pos       = gradient * (y_pos - self.start.y) + self.start.x;

        Intercepts::Valid(smallvec![x_pos])
    }

    #[inline]
    fn start_point(&self) -> Point {
        self.start
    }

    #[inline]
    fn end_point(&self) -> Point {
        self.end
    }

    fn bounding_box(&self) -> Bounds {
        Bounds::new(
            Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y)),
            Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)))
    }
}

use super::point::*;

///
/// An axis-aligned region guaranteed to contain an edge
///
/// The empty region is inverted (min above max), so it acts as the identity
/// when bounding boxes are folded together with `union()`.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Bounds {
    pub min: Point,
    pub max: Point,
}

impl Bounds {
    ///
    /// Creates the bounds with the specified corners
    ///
    #[inline]
    pub fn new(min: Point, max: Point) -> Bounds {
        Bounds { min, max }
    }

    ///
    /// Creates the empty bounds (contains no points)
    ///
    #[inline]
    pub fn empty() -> Bounds {
        Bounds {
            min: Point::new(f64::INFINITY, f64::INFINITY),
            max: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    ///
    /// The smallest bounds containing both this region and another one
    ///
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

use crate::geo::*;

use smallvec::*;

///
/// The result of asking an edge where it crosses a horizontal query line
///
/// `Valid` carries the x positions of the crossings, in no particular order (an
/// empty list means the query line misses the edge entirely). `Degenerate` means
/// the query line passed exactly through a structurally significant point (a
/// vertex, a tangent point or an angular boundary), so the crossing count cannot
/// be trusted and the caller should sample again at a nearby y position.
///
#[derive(Clone, PartialEq, Debug)]
pub enum Intercepts {
    Valid(SmallVec<[f64; 2]>),
    Degenerate,
}

///
/// An edge is a path component that can report where it crosses a horizontal scanline
///
/// Edges are immutable once constructed: the same query always produces the same
/// answer, and edges can be shared freely between threads while a frame renders.
///
pub trait Edge : Send + Sync {
    ///
    /// The x positions where this edge crosses the horizontal line at `y_pos`
    ///
    fn intercepts(&self, y_pos: f64) -> Intercepts;

    ///
    /// The point where this edge begins
    ///
    fn start_point(&self) -> Point;

    ///
    /// The point where this edge ends
    ///
    fn end_point(&self) -> Point;

    ///
    /// A region containing every point of this edge (it does not have to be tight)
    ///
    fn bounding_box(&self) -> Bounds;
}

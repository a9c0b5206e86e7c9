mod builder;

pub use builder::*;

use crate::edge::*;
use crate::geo::*;

use smallvec::*;

///
/// An ordered collection of edges forming one or more path outlines
///
/// Paths implement `Edge` themselves, so a path can contain other paths and a
/// whole scene composes into a single edge. Construction is append-only: once a
/// path has been handed to the rasterizer there is no way to mutate the edges
/// it already contains.
///
pub struct Path {
    edges: Vec<Box<dyn Edge>>,
}

impl Path {
    ///
    /// Creates a path with no edges
    ///
    pub fn new() -> Path {
        Path { edges: vec![] }
    }

    ///
    /// Appends an edge (or a nested path) to this path
    ///
    pub fn push(&mut self, edge: impl Edge + 'static) {
        self.edges.push(Box::new(edge));
    }

    ///
    /// The number of edges stored directly in this path
    ///
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    ///
    /// True if this path contains no edges
    ///
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

impl Default for Path {
    fn default() -> Path {
        Path::new()
    }
}

impl Edge for Path {
    fn intercepts(&self, y_pos: f64) -> Intercepts {
        let mut crossings = smallvec![];

        for edge in self.edges.iter() {
            match edge.intercepts(y_pos) {
                Intercepts::Valid(xs)   => crossings.extend(xs),

                // One ambiguous member corrupts the crossing parity for everything
                // after it, so the whole composite result is discarded
                Intercepts::Degenerate  => return Intercepts::Degenerate,
            }
        }

        Intercepts::Valid(crossings)
    }

    fn start_point(&self) -> Point {
        self.edges.first().map(|edge| edge.start_point()).unwrap_or(Point::new(0.0, 0.0))
    }

    fn end_point(&self) -> Point {
        self.edges.last().map(|edge| edge.end_point()).unwrap_or(Point::new(0.0, 0.0))
    }

    fn bounding_box(&self) -> Bounds {
        self.edges.iter()
            .fold(Bounds::empty(), |bounds, edge| bounds.union(edge.bounding_box()))
    }
}

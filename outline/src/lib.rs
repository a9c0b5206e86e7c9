//!
//! # vexel_outline
//!
//! Describes vector path outlines built from straight lines and circular arcs.
//! Every component, including a whole path, satisfies the same small contract:
//! report the x positions where it crosses a horizontal query line, or report
//! that the query line hit a structurally significant point and the sample
//! should be retried nearby. That contract is everything the scanline
//! rasterizer in `vexel_raster` needs to compute per-pixel coverage.
//!

/// Basic geometric value types (points and bounding regions)
pub mod geo;

/// The scanline intercept contract and the line and arc primitives
pub mod edge;

/// Composite paths and the pen-based path builder
pub mod path;

pub use geo::*;
pub use edge::*;
pub use path::*;

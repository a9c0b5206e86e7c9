//!
//! # vexel_raster
//!
//! A software scan-converter for `vexel_outline` paths. Every pixel of the
//! output is an even-odd coverage integral: the pixel's vertical extent is
//! divided into sub-bands, each sub-band samples the path's scanline crossings
//! at a slightly jittered height (retrying past degenerate samples), and the
//! horizontal overlap between the resulting fill spans and the pixel is
//! averaged into a grayscale intensity. There is no GPU and no path-filling
//! library behind this: the whole renderer is the coverage computation.
//!

/// Per-pixel coverage evaluation: sub-band supersampling and even-odd fill spans
pub mod coverage;

/// Frame rendering: the raster driver, the coverage buffer and the presentation targets
pub mod render;

pub use vexel_outline as outline;

pub use coverage::*;
pub use render::*;

use super::coverage_buffer::*;

use crate::coverage::*;

use vexel_outline::*;

///
/// Fills in one row of coverage values
///
/// Rows whose vertical extent lies entirely outside the path's bounding box are
/// left at zero: no sample taken inside them can produce a crossing.
///
fn render_row(path: &(impl Edge + ?Sized), bounds: &Bounds, y: usize, row: &mut [f64]) {
    let row_top = y as f64;

    if row_top + 1.0 <= bounds.min.y || row_top >= bounds.max.y {
        return;
    }

    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = pixel_coverage(path, x, y);
    }
}

///
/// Rasterizes a path into a fresh coverage buffer of the specified resolution
///
/// This is a pure function: the same path and resolution always produce a
/// bit-identical buffer. Each pixel is evaluated independently, row by row.
///
#[cfg(not(feature = "multithreading"))]
pub fn render_frame(path: &(impl Edge + ?Sized), width: usize, height: usize) -> CoverageBuffer {
    let mut frame = CoverageBuffer::new(width, height);
    if width == 0 {
        return frame;
    }

    let bounds = path.bounding_box();

    frame.pixels_mut()
        .chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| render_row(path, &bounds, y, row));

    frame
}

///
/// Rasterizes a path into a fresh coverage buffer of the specified resolution
///
/// This is a pure function: the same path and resolution always produce a
/// bit-identical buffer. Pixel writes are disjoint, so the rows are rendered in
/// parallel without any locking.
///
#[cfg(feature = "multithreading")]
pub fn render_frame(path: &(impl Edge + ?Sized), width: usize, height: usize) -> CoverageBuffer {
    use rayon::prelude::*;

    let mut frame = CoverageBuffer::new(width, height);
    if width == 0 {
        return frame;
    }

    let bounds = path.bounding_box();

    frame.pixels_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| render_row(path, &bounds, y, row));

    frame
}

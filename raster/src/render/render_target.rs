use super::coverage_buffer::*;

///
/// Somewhere a finished coverage frame can be presented
///
/// Targets convert the coverage values into their own native pixel format; the
/// frame itself is never mutated. A target may be handed a fresh frame on every
/// tick of an external driving loop.
///
pub trait RenderTarget {
    ///
    /// Presents a single finished frame
    ///
    fn render(&mut self, frame: &CoverageBuffer);
}

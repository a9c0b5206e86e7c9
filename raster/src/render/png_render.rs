#[cfg(feature = "render_png")]
mod render_png {
    use super::super::coverage_buffer::*;
    use super::super::render_target::*;

    use std::io::{Write, BufWriter};

    ///
    /// Render target that writes a frame as an RGBA PNG to a stream
    ///
    /// The coverage intensity is replicated across the color channels with full
    /// opacity, so the output is a grayscale image in RGBA form.
    ///
    pub struct PngRenderTarget<TStream>
    where
        TStream: Write,
    {
        writer: png::Writer<BufWriter<TStream>>,
    }

    impl<TStream> PngRenderTarget<TStream>
    where
        TStream: Write,
    {
        ///
        /// Creates a PNG writer that will write a frame of the specified size to a stream
        ///
        pub fn from_stream(target: TStream, width: usize, height: usize) -> Self {
            let mut encoder = png::Encoder::new(BufWriter::new(target), width as u32, height as u32);

            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            PngRenderTarget {
                writer: encoder.write_header().unwrap(),
            }
        }
    }

    impl<TStream> RenderTarget for PngRenderTarget<TStream>
    where
        TStream: Write,
    {
        fn render(&mut self, frame: &CoverageBuffer) {
            self.writer.write_image_data(&frame.to_rgba_bytes()).unwrap();
        }
    }
}

#[cfg(feature = "render_png")]
pub use render_png::*;

#[cfg(feature = "render_term")]
mod render_term {
    use super::super::coverage_buffer::*;
    use super::super::png_render::*;
    use super::super::render_target::*;

    use base64::engine::general_purpose;
    use base64::{Engine as _};

    use std::io::{stdout, Write};

    ///
    /// Render target that shows frames inline in an iTerm2-compatible terminal
    ///
    /// Each frame is encoded as an in-memory PNG and printed using the iTerm
    /// inline-image escape sequence.
    ///
    pub struct TermRenderTarget {
        width:  usize,
        height: usize,
    }

    impl TermRenderTarget {
        ///
        /// Creates a terminal rendering target
        ///
        pub fn new(width: usize, height: usize) -> TermRenderTarget {
            TermRenderTarget {
                width, height
            }
        }
    }

    impl RenderTarget for TermRenderTarget {
        fn render(&mut self, frame: &CoverageBuffer) {
            // Encode the frame as PNG data in memory (the writer has to go out of
            // scope before the data can be read back)
            let mut png_data: Vec<u8> = vec![];

            {
                let mut png_target = PngRenderTarget::from_stream(&mut png_data, self.width, self.height);
                png_target.render(frame);
            }

            // Write out the iterm escape sequence
            let base64 = general_purpose::STANDARD_NO_PAD.encode(&png_data);
            print!("\x1b]1337;File=inline=1:{}\x07", base64);

            stdout().flush().unwrap();
        }
    }
}

#[cfg(feature = "render_term")]
pub use render_term::*;

///
/// A finished grayscale frame: one coverage value in [0, 1] per pixel
///
/// Pixels are stored row-major with y increasing downward. The buffer is
/// produced fresh by `render_frame` and handed to a presentation target by
/// reference; targets read it but never change it.
///
#[derive(Clone, PartialEq)]
pub struct CoverageBuffer {
    width:  usize,
    height: usize,
    pixels: Vec<f64>,
}

impl CoverageBuffer {
    ///
    /// Creates a buffer of the specified size with every pixel at zero coverage
    ///
    pub fn new(width: usize, height: usize) -> CoverageBuffer {
        CoverageBuffer {
            width:  width,
            height: height,
            pixels: vec![0.0; width * height],
        }
    }

    ///
    /// Width of the buffer in pixels
    ///
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    ///
    /// Height of the buffer in pixels
    ///
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    ///
    /// The coverage value for a single pixel
    ///
    #[inline]
    pub fn coverage(&self, x: usize, y: usize) -> f64 {
        self.pixels[x + y * self.width]
    }

    ///
    /// All pixels in row-major order
    ///
    #[inline]
    pub fn pixels(&self) -> &[f64] {
        &self.pixels
    }

    ///
    /// Mutable access for the frame renderer filling the buffer in
    ///
    #[inline]
    pub(crate) fn pixels_mut(&mut self) -> &mut [f64] {
        &mut self.pixels
    }

    ///
    /// Converts the frame to RGBA bytes: the intensity is replicated across the
    /// color channels and the alpha channel is fully opaque
    ///
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);

        for coverage in self.pixels.iter() {
            let level = (coverage * 255.0) as u8;
            bytes.extend_from_slice(&[level, level, level, 255]);
        }

        bytes
    }
}

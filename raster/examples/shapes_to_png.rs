use vexel_raster::outline::*;
use vexel_raster::render::*;

use std::f64::consts::PI;
use std::fs::File;

///
/// Builds the demo scene for a single frame of the animation
///
/// The scene is a closed quad, two long unit-height rectangles (the second one
/// drifts downward as the frame index advances), and a disc with a wedge cut
/// out of it.
///
fn build_frame_path(frame: usize) -> Path {
    let mut builder = PathBuilder::new();

    // Closed quad
    let p0 = Point::new(10.0, 20.0);
    let p1 = Point::new(20.0, 30.0);
    let p2 = Point::new(40.0, 35.0);
    let p3 = Point::new(30.0, 25.0);

    builder.move_to(p0);
    builder.line_to(p1);
    builder.line_to(p2);
    builder.line_to(p3);
    builder.line_to(p0);

    // Unit-height rectangles (the second one animates)
    builder.rect(Point::new(130.0, 30.0), 100.0);
    builder.rect(Point::new(130.5, 40.0 + (frame as f64) / 15.0), 100.0);

    // Wedge-cut disc: the builder inserts the line from the center out to the
    // arc's start point, and the closing line returns to the center
    let center = Point::new(50.0, 50.0);
    builder.move_to(center);
    builder.arc(center, 30.0, PI / 4.0, 2.0 * PI + PI / 8.0);
    builder.line_to(center);

    builder.build()
}

///
/// Renders the first frame of the demo scene to shapes.png
///
pub fn main() {
    let path    = build_frame_path(0);
    let frame   = render_frame(&path, 320, 240);

    let file        = File::create("shapes.png").unwrap();
    let mut target  = PngRenderTarget::from_stream(file, 320, 240);

    target.render(&frame);
}

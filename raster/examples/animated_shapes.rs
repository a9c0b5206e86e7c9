use vexel_raster::outline::*;
use vexel_raster::render::*;

use std::f64::consts::PI;
use std::thread;
use std::time::Duration;

///
/// Builds the demo scene for a single frame of the animation
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

    // Unit-height rectangles (the second one drifts downward over time)
    builder.rect(Point::new(130.0, 30.0), 100.0);
    builder.rect(Point::new(130.5, 40.0 + (frame as f64) / 15.0), 100.0);

    // Wedge-cut disc
    let center = Point::new(50.0, 50.0);
    builder.move_to(center);
    builder.arc(center, 30.0, PI / 4.0, 2.0 * PI + PI / 8.0);
    builder.line_to(center);

    builder.build()
}

///
/// Animates the demo scene in an iTerm2-compatible terminal
///
/// The frame index advances once per tick whether or not the previous frame was
/// slow to present, so the animation never falls behind its own clock.
///
pub fn main() {
    let mut target = TermRenderTarget::new(320, 240);

    for frame in 0..600 {
        let path    = build_frame_path(frame);
        let buffer  = render_frame(&path, 320, 240);

        // Successive frames overdraw each other from the top-left corner
        print!("\x1b[H");
        target.render(&buffer);

        thread::sleep(Duration::from_millis(16));
    }

    println!();
}

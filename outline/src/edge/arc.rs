use super::descriptor::*;

use crate::geo::*;

use smallvec::*;

use std::f64::consts::{PI, FRAC_PI_2};

///
/// A circular arc swept counter-clockwise from a start angle to an end angle
///
/// Angles are in radians. The sweep window is half-open: a crossing is only
/// reported when its angle lies strictly inside `(start_angle, end_angle)`
/// after being wrapped by whole turns into `[start_angle, start_angle + 2π)`.
/// A radius of zero or less produces an arc that is never crossed.
///
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Arc {
    center:         Point,
    radius:         f64,
    start_angle:    f64,
    end_angle:      f64,
}

///
/// Wraps an angle by whole turns until it lies in the window `[start, end)`
///
/// When the window is narrower than a full turn the result can end up below
/// `start`: that signals the angle is outside of the window.
///
fn wrap_angle(mut angle: f64, start: f64, end: f64) -> f64 {
    while angle < start {
        angle += 2.0 * PI;
    }
    while end <= angle {
        angle -= 2.0 * PI;
    }

    angle
}

impl Arc {
    ///
    /// Creates an arc with the specified center, radius and angular sweep
    ///
    #[inline]
    pub fn new(center: Point, radius: f64, start_angle: f64, end_angle: f64) -> Arc {
        Arc { center, radius, start_angle, end_angle }
    }
}

impl Edge for Arc {
    fn intercepts(&self, y_pos: f64) -> Intercepts {
        // A circle that has collapsed to a point is never crossed
        if self.radius <= 0.0 {
            return Intercepts::Valid(smallvec![]);
        }

        // The query line misses the circle's vertical span entirely
        if y_pos < self.center.y - self.radius || y_pos > self.center.y + self.radius {
            return Intercepts::Valid(smallvec![]);
        }

        // Solve the circle equation at this height: two candidates symmetric about the center
        let half_chord  = (self.radius * self.radius - (y_pos - self.center.y) * (y_pos - self.center.y)).sqrt();
        let left_x      = self.center.x - half_chord;
        let right_x     = self.center.x + half_chord;

        // Coincident candidates mean the query line is tangent at the top or bottom
        if left_x == right_x {
            return Intercepts::Degenerate;
        }

        // The principal asin solution and its mirror lie in complementary halves of
        // the circle: pair whichever falls in the left half with the left candidate
        let principal   = wrap_angle(((y_pos - self.center.y) / self.radius).asin(), 0.0, 2.0 * PI);
        let mirror      = wrap_angle(PI - principal, 0.0, 2.0 * PI);

        let (left_angle, right_angle) = if principal < FRAC_PI_2 || principal >= 3.0 * FRAC_PI_2 {
            (mirror, principal)
        } else {
            (principal, mirror)
        };

        // Wrap both angles into this arc's own sweep window
        let left_angle  = wrap_angle(left_angle, self.start_angle, self.end_angle);
        let right_angle = wrap_angle(right_angle, self.start_angle, self.end_angle);

        // An angle landing exactly on the sweep boundary can't be classified as inside or outside
        if left_angle == self.start_angle || left_angle == self.end_angle
            || right_angle == self.start_angle || right_angle == self.end_angle {
            return Intercepts::Degenerate;
        }

        // Keep the candidates whose angle lies strictly inside the sweep
        let mut crossings = smallvec![];

        if self.start_angle < left_angle && left_angle < self.end_angle {
            crossings.push(left_x);
        }
        if self.start_angle < right_angle && right_angle < self.end_angle {
            crossings.push(right_x);
        }

        Intercepts::Valid(crossings)
    }

    fn start_point(&self) -> Point {
        Point::new(
            self.radius * self.start_angle.cos() + self.center.x,
            self.radius * self.start_angle.sin() + self.center.y)
    }

    fn end_point(&self) -> Point {
        Point::new(
            self.radius * self.end_angle.cos() + self.center.x,
            self.radius * self.end_angle.sin() + self.center.y)
    }

    fn bounding_box(&self) -> Bounds {
        let radius = self.radius.max(0.0);

        Bounds::new(
            Point::new(self.center.x - radius, self.center.y - radius),
            Point::new(self.center.x + radius, self.center.y + radius))
    }
}

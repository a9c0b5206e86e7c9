use vexel_outline::*;

use std::f64::consts::PI;

fn crossings(intercepts: Intercepts) -> Vec<f64> {
    match intercepts {
        Intercepts::Valid(crossings)    => crossings.into_iter().collect(),
        Intercepts::Degenerate          => panic!("Expected a valid crossing list"),
    }
}

#[test]
fn full_circle_has_two_crossings_symmetric_about_the_center() {
    let circle = Arc::new(Point::new(10.0, 10.0), 5.0, 0.0, 2.0 * PI);

    for y_pos in [6.5, 8.0, 9.25, 11.5, 12.5, 14.0] {
        let crossings = crossings(circle.intercepts(y_pos));

        assert!(crossings.len() == 2, "Should be two crossings at y={}, found {:?}", y_pos, crossings);
        assert!((crossings[0] + crossings[1] - 20.0).abs() < 1e-9, "Crossings at y={} should be symmetric about x=10, found {:?}", y_pos, crossings);
        assert!(crossings[0] < crossings[1], "Crossings should be reported left to right, found {:?}", crossings);
    }
}

#[test]
fn crossing_width_matches_the_circle_equation() {
    let circle = Arc::new(Point::new(10.0, 10.0), 5.0, 0.0, 2.0 * PI);

    // At y = 13 the half-chord is sqrt(5^2 - 3^2) = 4
    let crossings = crossings(circle.intercepts(13.0));

    assert!((crossings[0] - 6.0).abs() < 1e-9, "Left crossing should be at x=6, found {:?}", crossings);
    assert!((crossings[1] - 14.0).abs() < 1e-9, "Right crossing should be at x=14, found {:?}", crossings);
}

#[test]
fn query_outside_the_vertical_span_misses() {
    let circle = Arc::new(Point::new(10.0, 10.0), 5.0, 0.0, 2.0 * PI);

    assert!(crossings(circle.intercepts(4.5)).is_empty(), "Above the circle should miss");
    assert!(crossings(circle.intercepts(15.5)).is_empty(), "Below the circle should miss");
}

#[test]
fn tangent_queries_are_degenerate() {
    let circle = Arc::new(Point::new(10.0, 10.0), 5.0, 0.0, 2.0 * PI);

    assert!(circle.intercepts(5.0) == Intercepts::Degenerate, "Tangent at the top should be degenerate");
    assert!(circle.intercepts(15.0) == Intercepts::Degenerate, "Tangent at the bottom should be degenerate");
}

#[test]
fn query_on_an_angular_boundary_is_degenerate() {
    // At the center height the crossing angles are exactly 0 and pi, and 0 is
    // this arc's start boundary
    let circle = Arc::new(Point::new(10.0, 10.0), 5.0, 0.0, 2.0 * PI);

    assert!(circle.intercepts(10.0) == Intercepts::Degenerate, "Center-height query lands on the sweep boundary");
}

#[test]
fn zero_radius_arc_is_never_crossed() {
    let arc = Arc::new(Point::new(10.0, 10.0), 0.0, 0.0, 2.0 * PI);

    assert!(crossings(arc.intercepts(10.0)).is_empty(), "Zero radius should never be crossed");
    assert!(crossings(arc.intercepts(9.0)).is_empty(), "Zero radius should never be crossed");
}

#[test]
fn half_arc_is_only_crossed_inside_its_sweep() {
    // Angles 0..pi sweep the half of the circle below the center (y grows downward)
    let lower_half = Arc::new(Point::new(10.0, 10.0), 5.0, 0.0, PI);

    let below = crossings(lower_half.intercepts(12.0));
    let above = crossings(lower_half.intercepts(8.0));

    assert!(below.len() == 2, "Query below the center should cross twice, found {:?}", below);
    assert!(above.is_empty(), "Query above the center should miss, found {:?}", above);
}

#[test]
fn sweep_longer_than_a_full_turn_reports_both_crossings() {
    // The demo scene's wedge disc: the sweep covers everything except the wedge
    // between pi/8 and pi/4, so a center-height query crosses on both sides
    let wedge = Arc::new(Point::new(50.0, 50.0), 30.0, PI / 4.0, 2.0 * PI + PI / 8.0);

    let crossings = crossings(wedge.intercepts(50.0));

    assert!(crossings.len() == 2, "Should be two crossings, found {:?}", crossings);
    assert!((crossings[0] - 20.0).abs() < 1e-9, "Left crossing should be at x=20, found {:?}", crossings);
    assert!((crossings[1] - 80.0).abs() < 1e-9, "Right crossing should be at x=80, found {:?}", crossings);
}

#[test]
fn backwards_sweep_is_never_crossed() {
    let backwards = Arc::new(Point::new(10.0, 10.0), 5.0, PI, PI / 2.0);

    assert!(crossings(backwards.intercepts(12.0)).is_empty(), "An empty sweep window has no inside");
}

#[test]
fn arc_endpoints_lie_on_the_circle() {
    let arc     = Arc::new(Point::new(50.0, 50.0), 30.0, PI / 4.0, 2.0 * PI + PI / 8.0);
    let start   = arc.start_point();
    let end     = arc.end_point();

    assert!((start.x - (50.0 + 30.0 * (PI / 4.0).cos())).abs() < 1e-12, "Start x should be on the circle, found {:?}", start);
    assert!((start.y - (50.0 + 30.0 * (PI / 4.0).sin())).abs() < 1e-12, "Start y should be on the circle, found {:?}", start);
    assert!((end.x - (50.0 + 30.0 * (PI / 8.0).cos())).abs() < 1e-9, "End x should wrap past a full turn, found {:?}", end);
    assert!((end.y - (50.0 + 30.0 * (PI / 8.0).sin())).abs() < 1e-9, "End y should wrap past a full turn, found {:?}", end);
}

#[test]
fn arc_bounding_box_is_the_circle_bounding_box() {
    let arc     = Arc::new(Point::new(10.0, 10.0), 5.0, 0.0, PI);
    let bounds  = arc.bounding_box();

    assert!(bounds.min == Point::new(5.0, 5.0), "Min corner should be (5,5), found {:?}", bounds.min);
    assert!(bounds.max == Point::new(15.0, 15.0), "Max corner should be (15,15), found {:?}", bounds.max);
}

use vexel_outline::*;

fn crossings(intercepts: Intercepts) -> Vec<f64> {
    match intercepts {
        Intercepts::Valid(crossings)    => crossings.into_iter().collect(),
        Intercepts::Degenerate          => panic!("Expected a valid crossing list"),
    }
}

#[test]
fn crossing_is_interpolated_along_the_gradient() {
    let line = Line::new(Point::new(2.0, 0.0), Point::new(6.0, 8.0));

    let crossings = crossings(line.intercepts(2.0));

    assert!(crossings.len() == 1, "Should be one crossing, found {:?}", crossings);
    assert!((crossings[0] - 3.0).abs() < 1e-12, "Crossing should be at x=3, found {:?}", crossings);
}

#[test]
fn crossing_is_independent_of_direction() {
    let downwards   = Line::new(Point::new(2.0, 0.0), Point::new(6.0, 8.0));
    let upwards     = Line::new(Point::new(6.0, 8.0), Point::new(2.0, 0.0));

    let downward_crossings  = crossings(downwards.intercepts(2.0));
    let upward_crossings    = crossings(upwards.intercepts(2.0));

    assert!(downward_crossings == upward_crossings, "Crossings should match, found {:?} and {:?}", downward_crossings, upward_crossings);
}

#[test]
fn query_through_a_vertex_is_degenerate() {
    let line = Line::new(Point::new(2.0, 0.0), Point::new(6.0, 8.0));

    assert!(line.intercepts(0.0) == Intercepts::Degenerate, "Start vertex should be degenerate");
    assert!(line.intercepts(8.0) == Intercepts::Degenerate, "End vertex should be degenerate");
}

#[test]
fn horizontal_line_never_contributes_a_crossing() {
    let line = Line::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0));

    assert!(crossings(line.intercepts(4.75)).is_empty(), "Query above should miss");
    assert!(crossings(line.intercepts(5.25)).is_empty(), "Query below should miss");
}

#[test]
fn query_through_a_horizontal_line_is_degenerate() {
    let line = Line::new(Point::new(0.0, 5.0), Point::new(10.0, 5.0));

    assert!(line.intercepts(5.0) == Intercepts::Degenerate, "Coincident query touches both vertices");
}

#[test]
fn no_crossing_when_both_endpoints_are_on_the_same_side() {
    let line = Line::new(Point::new(2.0, 1.0), Point::new(6.0, 4.0));

    assert!(crossings(line.intercepts(0.5)).is_empty(), "Query above the line should miss");
    assert!(crossings(line.intercepts(4.5)).is_empty(), "Query below the line should miss");
}

#[test]
fn zero_length_line_contributes_nothing() {
    let line = Line::new(Point::new(3.0, 3.0), Point::new(3.0, 3.0));

    assert!(crossings(line.intercepts(2.0)).is_empty(), "A point has no crossings");
    assert!(line.intercepts(3.0) == Intercepts::Degenerate, "Query through the point is degenerate");
}

#[test]
fn line_bounding_box_contains_both_endpoints() {
    let line    = Line::new(Point::new(6.0, 1.0), Point::new(2.0, 8.0));
    let bounds  = line.bounding_box();

    assert!(bounds.min == Point::new(2.0, 1.0), "Min corner should be (2,1), found {:?}", bounds.min);
    assert!(bounds.max == Point::new(6.0, 8.0), "Max corner should be (6,8), found {:?}", bounds.max);
}

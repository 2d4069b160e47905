use shape_collision::collision::{circle_circle, rect_rect};
use shape_collision::{Circle, Polygon, Rect, Response, Shape, ShapeKind, Vec2};

const EPSILON: f32 = 1e-3;

fn sample_shapes() -> Vec<Shape> {
    let mut triangle = Polygon::new(vec![Vec2::new(3.0, -1.0), Vec2::new(7.0, 2.0), Vec2::new(2.0, 4.0)]);
    triangle.rotate(0.3);

    vec![
        Circle::new(Vec2::new(0.0, 0.0), 3.0).into(),
        Circle::new(Vec2::new(4.0, 1.3), 2.0).into(),
        Circle::new(Vec2::new(50.0, 50.0), 1.0).into(),
        Rect::new(Vec2::new(-2.0, -1.0), Vec2::new(3.0, 2.5)).into(),
        Rect::new(Vec2::new(2.5, -4.0), Vec2::new(6.0, 0.5)).into(),
        Rect::from_dims(2.0, 2.0, Vec2::new(-40.0, 10.0)).into(),
        Polygon::from_sides(6, Vec2::new(1.1, 0.6), 3.0).into(),
        triangle.into(),
        Polygon::from_sides(5, Vec2::new(-30.0, -30.0), 2.0).into(),
    ]
}

/// Every ordered pair of distinct sample shapes.
fn pairs(shapes: &[Shape]) -> impl Iterator<Item = (&Shape, &Shape)> {
    shapes
        .iter()
        .enumerate()
        .flat_map(move |(i, a)| shapes.iter().enumerate().filter(move |(j, _)| *j != i).map(move |(_, b)| (a, b)))
}

#[test]
fn samples_cover_every_kind_pair_with_a_collision() {
    let shapes = sample_shapes();
    for kind_a in ShapeKind::ALL {
        for kind_b in ShapeKind::ALL {
            let hit = pairs(&shapes)
                .filter(|(a, b)| a.kind() == kind_a && b.kind() == kind_b)
                .any(|(a, b)| a.overlaps(b));
            assert!(hit, "no colliding sample pair for {kind_a:?} vs {kind_b:?}");
        }
    }
}

#[test]
fn dispatch_is_symmetric() {
    let shapes = sample_shapes();
    for (a, b) in pairs(&shapes) {
        let ab = a.collide(b);
        let ba = b.collide(a);
        assert_eq!(ab.is_some(), ba.is_some(), "{a} vs {b}");

        if let (Some(ab), Some(ba)) = (ab, ba) {
            assert!(
                (ab.normal + ba.normal).length() < EPSILON,
                "normals not opposite for {a} vs {b}: {:?} / {:?}",
                ab.normal,
                ba.normal
            );
            assert!((ab.depth - ba.depth).abs() < EPSILON);
        }
    }
}

#[test]
fn responses_are_unit_normals_with_non_negative_depth() {
    let shapes = sample_shapes();
    for (a, b) in pairs(&shapes) {
        if let Some(res) = a.collide(b) {
            assert!((res.normal.length() - 1.0).abs() < EPSILON, "{a} vs {b}: {res:?}");
            assert!(res.depth >= 0.0, "{a} vs {b}: {res:?}");
        }
    }
}

#[test]
fn normal_points_from_first_towards_second() {
    let shapes = sample_shapes();
    for (a, b) in pairs(&shapes) {
        if let Some(res) = a.collide(b) {
            assert!(res.normal.dot(b.center() - a.center()) >= -EPSILON, "{a} vs {b}: {res:?}");
        }
    }
}

fn assert_resolved(a: &Shape, b: &Shape) {
    if let Some(res) = a.collide(b) {
        assert!(res.depth < EPSILON, "{a} still overlaps {b} by {}", res.depth);
    }
}

#[test]
fn moving_first_shape_by_response_separates() {
    let shapes = sample_shapes();
    for (a, b) in pairs(&shapes) {
        let Some(res) = a.collide(b) else { continue };

        let mut moved = a.clone();
        moved.translate(res.translation_for_a());
        assert_resolved(&moved, b);
    }
}

#[test]
fn moving_second_shape_by_response_separates() {
    let shapes = sample_shapes();
    for (a, b) in pairs(&shapes) {
        let Some(res) = a.collide(b) else { continue };

        let mut moved = b.clone();
        moved.translate(res.normal * res.depth);
        assert_resolved(a, &moved);
    }
}

#[test]
fn queries_do_not_mutate() {
    let shapes = sample_shapes();
    let before = shapes.clone();
    for (a, b) in pairs(&shapes) {
        let _ = a.collide(b);
        let _ = a.overlaps(b);
        let _ = a.point_inside(b.center());
        let _ = a.aabb();
        let _ = a.to_string();
    }
    assert_eq!(shapes, before);
}

#[test]
fn translate_round_trip_restores_geometry() {
    let delta = Vec2::new(12.34, -56.78);
    for shape in sample_shapes() {
        let mut moved = shape.clone();
        moved.translate(delta).translate(-delta);

        let (orig, back) = (shape.aabb(), moved.aabb());
        assert!((orig.min - back.min).length() < EPSILON, "{shape} -> {moved}");
        assert!((orig.max - back.max).length() < EPSILON, "{shape} -> {moved}");
        assert!((shape.center() - moved.center()).length() < EPSILON);

        if let (Shape::Polygon(p), Shape::Polygon(q)) = (&shape, &moved) {
            for (u, v) in p.points().iter().zip(q.points()) {
                assert!((*u - *v).length() < EPSILON);
            }
        }
    }
}

#[test]
fn polygon_derived_data_stays_consistent() {
    let mut polygon = Polygon::from_sides(8, Vec2::new(3.0, -2.0), 4.0);
    for step in 0..50 {
        if step % 3 == 0 {
            polygon.scale(1.1);
        } else {
            polygon.rotate(0.7);
        }
        assert_eq!(polygon.normals().len(), polygon.points().len());
        for normal in polygon.normals() {
            assert!((normal.length() - 1.0).abs() < EPSILON);
        }
        let mean = polygon.points().iter().fold(Vec2::ZERO, |acc, p| acc + *p) / polygon.points().len() as f32;
        assert!((polygon.center() - mean).length() < EPSILON);
    }
}

#[test]
fn circle_circle_boundary() {
    let mut res = Response::default();
    assert!(circle_circle(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0, Some(&mut res)));
    assert!(res.depth.abs() < EPSILON);
    assert!(!circle_circle(Vec2::ZERO, 5.0, Vec2::new(10.001, 0.0), 5.0, None));
}

#[test]
fn rect_rect_equal_penetration() {
    let mut res = Response::default();
    assert!(rect_rect(
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(5.0, 5.0),
        Vec2::new(15.0, 15.0),
        Some(&mut res)
    ));
    assert_eq!(res.normal, Vec2::new(0.0, 1.0));
    assert!((res.depth - 5.0).abs() < EPSILON);
}

#[test]
fn hexagon_contains_its_center() {
    let hexagon = Shape::from(Polygon::from_sides(6, Vec2::ZERO, 10.0));
    assert!(hexagon.point_inside(Vec2::ZERO));
    assert!(!hexagon.point_inside(Vec2::new(100.0, 100.0)));
}

fn assert_opposite(a: &Shape, b: &Shape) {
    let ab = a.collide(b).expect("shapes should overlap");
    let ba = b.collide(a).expect("shapes should overlap");
    assert!(
        (ab.normal + ba.normal).length() < EPSILON,
        "normals not opposite for {a} vs {b}: {:?} / {:?}",
        ab.normal,
        ba.normal
    );
    assert!((ab.depth - ba.depth).abs() < EPSILON);
}

fn box_polygon(min: Vec2, max: Vec2) -> Shape {
    Polygon::new(vec![min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]).into()
}

#[test]
fn symmetric_when_centers_line_up_across_the_shallow_axis() {
    // Tall boxes sharing an x center: x is the shallowest axis, the centers differ only in y.
    let (a_min, a_max) = (Vec2::new(0.0, 0.0), Vec2::new(2.0, 10.0));
    let (b_min, b_max) = (Vec2::new(0.0, 5.0), Vec2::new(2.0, 15.0));

    assert_opposite(&Rect::new(a_min, a_max).into(), &Rect::new(b_min, b_max).into());
    assert_opposite(&box_polygon(a_min, a_max), &box_polygon(b_min, b_max));
    assert_opposite(&Rect::new(a_min, a_max).into(), &box_polygon(b_min, b_max));
}

#[test]
fn symmetric_for_concentric_shapes_of_different_size() {
    let (outer_min, outer_max) = (Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
    let (inner_min, inner_max) = (Vec2::new(2.0, 2.0), Vec2::new(8.0, 8.0));

    assert_opposite(&Rect::new(outer_min, outer_max).into(), &Rect::new(inner_min, inner_max).into());
    assert_opposite(&box_polygon(outer_min, outer_max), &box_polygon(inner_min, inner_max));
}

#[test]
fn polygons_scaled_to_a_point_never_report_unbounded_depth() {
    let mut a = Shape::from(Polygon::from_sides(4, Vec2::new(0.0, 0.0), 1.0));
    let mut b = Shape::from(Polygon::from_sides(4, Vec2::new(100.0, 0.0), 1.0));
    a.scale(0.0);
    b.scale(0.0);
    assert!(a.collide(&b).is_none());
    assert!(b.collide(&a).is_none());

    let circle = Shape::from(Circle::new(Vec2::new(0.5, 0.0), 1.0));
    let res = circle.collide(&a).expect("point lies inside the circle");
    assert!(res.depth.is_finite());
    assert!(res.depth <= 1.0 + EPSILON);
}

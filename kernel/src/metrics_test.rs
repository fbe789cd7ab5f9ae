use super::*;

fn right_345() -> Triangle {
    Triangle::new(Point::new(100.0, 100.0), Point::new(260.0, 100.0), Point::new(100.0, 220.0))
}

#[test]
fn right_triangle_bundle() {
    let tri = right_345();
    let m = derived_metrics(&tri, &Tolerances::default());
    assert!((m.angles.alpha - 90.0).abs() < 0.5);
    assert_eq!(m.angle_class, AngleClass::Right);
    assert_eq!(m.side_class, SideClass::Scalene);
    assert!(m.orthocenter.distance(tri.a) < 1e-6);
    assert!(m.circumcircle.center.distance(tri.b.midpoint(tri.c)) < 1e-6);
    assert!((m.area - 9600.0).abs() < 1e-6);
    assert!((m.perimeter - 480.0).abs() < 1e-9);
}

#[test]
fn degenerate_bundle_is_finite() {
    let tri = Triangle::new(Point::new(10.0, 10.0), Point::new(200.0, 10.0), Point::new(390.0, 10.0));
    let m = derived_metrics(&tri, &Tolerances::default());
    let points = [m.centroid, m.orthocenter, m.circumcircle.center, m.incircle.center];
    assert!(points.iter().all(|p| p.is_finite()));
    assert!(m.circumcircle.radius.is_finite());
    assert!(m.incircle.radius.is_finite());
    assert!(m.area.is_finite());
}

#[test]
fn recomputes_after_vertex_move() {
    let mut tri = right_345();
    let before = derived_metrics(&tri, &Tolerances::default());
    tri.a = Point::new(180.0, 20.0);
    let after = derived_metrics(&tri, &Tolerances::default());
    assert_ne!(before.centroid, after.centroid);
    assert_ne!(after.angle_class, AngleClass::Right);
}

#[test]
fn serializes_class_tags_lowercase() {
    let m = derived_metrics(&right_345(), &Tolerances::default());
    let json = serde_json::to_value(m).unwrap();
    assert_eq!(json["angle_class"], "right");
    assert_eq!(json["side_class"], "scalene");
    assert!(json["circumcircle"]["radius"].is_number());
}

#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-10;

fn point_approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < EPSILON && (a.y - b.y).abs() < EPSILON
}

// --- Defaults ---

#[test]
fn default_is_identity() {
    let vp = Viewport::default();
    assert_eq!(vp.screen_to_model(Point::new(50.0, 75.0)), Some(Point::new(50.0, 75.0)));
}

// --- screen_to_model ---

#[test]
fn screen_to_model_with_scale() {
    let vp = Viewport::scale_translate(2.0, 0.0, 0.0);
    let model = vp.screen_to_model(Point::new(40.0, 80.0));
    assert_eq!(model, Some(Point::new(20.0, 40.0)));
}

#[test]
fn screen_to_model_with_offset() {
    // Element placed at (100, 50) on the page, drawn at half size.
    let vp = Viewport::scale_translate(0.5, 100.0, 50.0);
    let model = vp.screen_to_model(Point::new(200.0, 150.0));
    assert_eq!(model, Some(Point::new(200.0, 200.0)));
}

#[test]
fn screen_to_model_undoes_rotation() {
    // Quarter turn: model x axis maps to screen y.
    let vp = Viewport { a: 0.0, b: 1.0, c: -1.0, d: 0.0, e: 10.0, f: 0.0 };
    let screen = vp.model_to_screen(Point::new(3.0, 4.0));
    let Some(back) = vp.screen_to_model(screen) else {
        panic!("rotation is invertible");
    };
    assert!(point_approx_eq(back, Point::new(3.0, 4.0)));
}

#[test]
fn singular_transform_maps_nothing() {
    let vp = Viewport::scale_translate(0.0, 0.0, 0.0);
    assert!(!vp.is_invertible());
    assert!(vp.screen_to_model(Point::new(1.0, 1.0)).is_none());
}

#[test]
fn non_finite_transform_maps_nothing() {
    let vp = Viewport { e: f64::NAN, ..Viewport::default() };
    assert!(vp.screen_to_model(Point::new(1.0, 1.0)).is_none());
}

// --- model_to_screen ---

#[test]
fn model_to_screen_with_scale_and_offset() {
    let vp = Viewport::scale_translate(1.5, 20.0, 10.0);
    let screen = vp.model_to_screen(Point::new(100.0, 200.0));
    assert_eq!(screen, Point::new(170.0, 310.0));
}

#[test]
fn round_trip_fractional_scale() {
    let vp = Viewport::scale_translate(0.75, 13.7, -42.3);
    let model = Point::new(333.3, 99.9);
    let Some(back) = vp.screen_to_model(vp.model_to_screen(model)) else {
        panic!("scale transform is invertible");
    };
    assert!(point_approx_eq(model, back));
}

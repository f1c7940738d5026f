//! Shared fixtures for snap integration tests.

use snapgeom::bbox::Bbox;
use snapgeom::{Outline, Point};
use snapfit::Shape;

/// A full-rectangle shape: four vertices, four edges, bounds matching the
/// outline, anchored at the rectangle's top-left corner.
pub fn rect_shape(x: f64, y: f64, w: f64, h: f64) -> Shape {
    Shape::builder()
        .bounds(Bbox::from_xywh(x, y, w, h))
        .outline(Outline::closed(vec![
            Point::new(0., 0.),
            Point::new(w, 0.),
            Point::new(w, h),
            Point::new(0., h),
        ]))
        .origin(Point::new(x, y))
        .build()
        .expect("valid shape")
}

/// A right-pointing triangle: its only right-facing vertex sits at `tip_y`
/// in absolute coordinates.
pub fn triangle_shape(x: f64, y: f64, w: f64, h: f64, tip_y: f64) -> Shape {
    Shape::builder()
        .bounds(Bbox::from_xywh(x, y, w, h))
        .outline(Outline::closed(vec![
            Point::new(0., 0.),
            Point::new(w, tip_y - y),
            Point::new(0., h),
        ]))
        .origin(Point::new(x, y))
        .build()
        .expect("valid shape")
}

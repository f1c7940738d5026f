use float_eq::assert_float_eq;
use snapgeom::bbox::Bbox;
use snapgeom::transform::Translate;
use snapgeom::{Outline, Point};
use snapfit::{detect_axis, display, resolve, spacing, Dir, Error, Shape, Side};

mod common;
use common::{rect_shape, triangle_shape};

#[test]
fn unit_squares_snap_edge_to_edge() {
    let a = rect_shape(0., 0., 10., 10.);
    let b = rect_shape(20., 0., 10., 10.);

    assert_eq!(detect_axis(&a, &b), Ok(Dir::Horiz));
    assert_float_eq!(spacing(&a, &b, Dir::Horiz).unwrap(), 10., abs <= 1e-9);

    let result = resolve(&a, &b, Dir::Horiz).expect("squares must align");
    assert_float_eq!(result.translation, -10., abs <= 1e-9);
    assert_eq!(result.mover, Side::Right);
    assert_float_eq!(result.final_gap, 0., abs <= 1e-9);
}

#[test]
fn vertically_offset_squares_still_snap() {
    // The y projections only partially overlap: the probe at the moving
    // shape's extreme vertex recovers via the clamped retry, and the result
    // matches the fully aligned case.
    let a = rect_shape(0., 0., 10., 10.);
    let b = rect_shape(20., 5., 10., 10.);

    assert_eq!(detect_axis(&a, &b), Ok(Dir::Horiz));

    let result = resolve(&a, &b, Dir::Horiz).expect("offset squares must align");
    assert_float_eq!(result.translation, -10., abs <= 1e-9);
    assert_eq!(result.mover, Side::Right);
    assert_float_eq!(result.final_gap, 0., abs <= 1e-9);
}

#[test]
fn stacked_shapes_snap_vertically() {
    let a = rect_shape(0., 0., 10., 10.);
    let b = rect_shape(0., 30., 10., 10.);

    assert_eq!(detect_axis(&a, &b), Ok(Dir::Vert));
    assert_float_eq!(spacing(&a, &b, Dir::Vert).unwrap(), 20., abs <= 1e-9);

    let result = resolve(&a, &b, Dir::Vert).expect("stacked shapes must align");
    assert_float_eq!(result.translation, -20., abs <= 1e-9);
    assert_eq!(result.mover, Side::Bot);
    assert_float_eq!(result.final_gap, 0., abs <= 1e-9);
}

#[test]
fn diagonal_selection_is_rejected() {
    let a = rect_shape(0., 0., 10., 10.);
    let b = rect_shape(15., 15., 10., 10.);
    // The caller contract: resolve is never reached for a diagonal pair.
    assert_eq!(detect_axis(&a, &b), Err(Error::DiagonalLayout));
}

#[test]
fn triangle_tip_meets_facing_edge() {
    // The triangle's tip at mid-height probes the block's left edge directly.
    let tri = triangle_shape(0., 0., 10., 10., 5.);
    let block = rect_shape(14., 0., 10., 10.);

    let result = resolve(&tri, &block, Dir::Horiz).expect("tip must meet the edge");
    assert_float_eq!(result.translation, -4., abs <= 1e-9);
    assert_eq!(result.mover, Side::Right);
    // Box-to-box gap stays zero even though the contact is vertex-to-edge.
    assert_float_eq!(result.final_gap, 0., abs <= 1e-9);
}

#[test]
fn no_facing_crossings_is_unalignable() {
    // Point outlines cannot be crossed at any probed coordinate, even after
    // the clamped and nudged retries, in either direction.
    let dot = |x: f64, y: f64| {
        Shape::builder()
            .bounds(Bbox::from_xywh(x, y, 1., 1.))
            .outline(Outline::new(
                vec![Point::new(0.5, 0.5)],
                vec![(0, 0).into()],
            ))
            .origin(Point::new(x, y))
            .build()
            .expect("valid shape")
    };
    let a = dot(0., 0.);
    let b = dot(20., 50.);
    assert_eq!(resolve(&a, &b, Dir::Horiz), Err(Error::Unalignable));
}

#[test]
fn outcome_is_input_order_independent() {
    let a = rect_shape(0., 0., 10., 10.);
    let b = rect_shape(20., 5., 10., 10.);

    let fwd = resolve(&a, &b, Dir::Horiz).unwrap();
    let rev = resolve(&b, &a, Dir::Horiz).unwrap();
    assert_float_eq!(fwd.translation.abs(), rev.translation.abs(), abs <= 1e-9);
    assert_float_eq!(fwd.final_gap, rev.final_gap, abs <= 1e-9);
    // Roles are positional, so the mover names the same physical shape.
    assert_eq!(fwd.mover, rev.mover);
}

#[test]
fn resolving_twice_is_idempotent() {
    let a = rect_shape(0., 0., 10., 10.);
    let mut b = rect_shape(20., 5., 10., 10.);

    let first = resolve(&a, &b, Dir::Horiz).unwrap();
    assert_eq!(first.mover, Side::Right);
    b.translate_along(Dir::Horiz, first.translation);

    let second = resolve(&a, &b, Dir::Horiz).unwrap();
    assert_float_eq!(second.translation, 0., abs <= 1e-6);
    assert_float_eq!(second.final_gap, first.final_gap, abs <= 1e-6);
}

#[test]
fn preview_spacing_formats_for_display() {
    let a = rect_shape(0., 0., 10., 10.);
    let b = rect_shape(22.125, 0., 10., 10.);

    let gap = spacing(&a, &b, Dir::Horiz).unwrap();
    assert_eq!(display::format_spacing(gap), "12.125");

    let snapped = resolve(&a, &b, Dir::Horiz).unwrap();
    assert_eq!(display::format_spacing(snapped.final_gap), "0");
}

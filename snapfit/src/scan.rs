//! Extremum search and ray-edge intersection scanning.
//!
//! Both operations work on a [`Shape`]'s outline in absolute coordinates and
//! are phrased in terms of a [`Side`]: `Side::Right` means "rightmost",
//! `Side::Top` means "topmost" (minimal y in y-down space), and so on. The
//! side's [`coord_dir`](Side::coord_dir) is the axis being searched, its
//! [`sign`](Side::sign) the search direction along that axis.

use snapgeom::{Point, Side, Sign, Span};

use crate::shape::Shape;

/// How far a failed probe is nudged along the perpendicular axis before
/// giving up, in document units.
pub const PROBE_NUDGE: f64 = 0.5;

/// Finds the outline vertex of `shape` that lies furthest towards `side`.
///
/// Scans every vertex in absolute coordinates and keeps the one with the
/// extreme coordinate along `side.coord_dir()`. Ties go to the first vertex
/// encountered, so the result is deterministic for a fixed vertex order.
/// Returns [`None`] when the shape has no vertices.
pub fn extreme_vertex(shape: &Shape, side: Side) -> Option<Point> {
    let dir = side.coord_dir();
    let sign = side.sign();

    let mut best: Option<Point> = None;
    for pt in shape.abs_points() {
        let better = match best {
            None => true,
            Some(b) => match sign {
                Sign::Pos => pt.coord(dir) > b.coord(dir),
                Sign::Neg => pt.coord(dir) < b.coord(dir),
            },
        };
        if better {
            best = Some(pt);
        }
    }
    best
}

/// Casts a probe line through `shape`'s outline and returns the extreme
/// crossing coordinate towards `side`.
///
/// The probe is perpendicular to `side.coord_dir()` and fixed at coordinate
/// `at` on the perpendicular axis: `probe(s, Side::Left, y)` answers "what is
/// the leftmost x at which the horizontal line through `y` crosses `s`?".
///
/// Every segment whose perpendicular span contains `at` (inclusive, so a
/// segment lying exactly on the probe counts) contributes one crossing:
/// the segment's constant coordinate if it runs perpendicular to the probe,
/// its near endpoint if it runs parallel, and a linear interpolation at `at`
/// otherwise. Returns [`None`] when no segment qualifies.
pub fn probe(shape: &Shape, side: Side, at: f64) -> Option<f64> {
    let dir = side.coord_dir();
    let perp = dir.other();
    let sign = side.sign();

    let mut best: Option<f64> = None;
    for seg in shape.outline.segments.iter() {
        let Some((p0, p1)) = shape.abs_endpoints(*seg) else {
            continue;
        };
        if !Span::new(p0.coord(perp), p1.coord(perp)).contains_point(at) {
            continue;
        }

        let crossing = if p0.coord(dir) == p1.coord(dir) {
            p0.coord(dir)
        } else if p0.coord(perp) == p1.coord(perp) {
            match sign {
                Sign::Neg => p0.coord(dir).min(p1.coord(dir)),
                Sign::Pos => p0.coord(dir).max(p1.coord(dir)),
            }
        } else {
            let t = (at - p0.coord(perp)) / (p1.coord(perp) - p0.coord(perp));
            p0.coord(dir) + t * (p1.coord(dir) - p0.coord(dir))
        };

        best = Some(match (best, sign) {
            (None, _) => crossing,
            (Some(b), Sign::Neg) => b.min(crossing),
            (Some(b), Sign::Pos) => b.max(crossing),
        });
    }
    best
}

/// [`probe`], with a bounded retry when the exact coordinate misses.
///
/// A facing vertex often sits a fraction of a unit outside the target's
/// outline due to coordinate rounding at shared extrema. When the exact probe
/// crosses nothing, the probe is retried once:
///
/// - if `at` lies outside the target bounds' perpendicular span entirely, at
///   the nearer end of that span;
/// - otherwise at `at + 0.5`, then `at - 0.5` ([`PROBE_NUDGE`]).
///
/// This is a bounded-epsilon fallback, not exact arithmetic; it recovers
/// crossings lost to rounding but makes no geometric guarantee. Returns
/// [`None`] if every attempt misses or the target has empty bounds.
pub fn probe_with_fallback(shape: &Shape, side: Side, at: f64) -> Option<f64> {
    if let Some(crossing) = probe(shape, side, at) {
        return Some(crossing);
    }

    let bounds = shape.bounds.as_rect()?;
    let span = bounds.span(side.coord_dir().other());
    if at < span.start() {
        probe(shape, side, span.start())
    } else if at > span.stop() {
        probe(shape, side, span.stop())
    } else {
        probe(shape, side, at + PROBE_NUDGE).or_else(|| probe(shape, side, at - PROBE_NUDGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapgeom::bbox::Bbox;
    use snapgeom::{Outline, Segment};

    fn shape(bounds: Bbox, outline: Outline, origin: Point) -> Shape {
        Shape::new(bounds, outline, origin)
    }

    /// A unit-ish rectangle outline with local vertices and a matching bbox.
    fn rect_shape(x: f64, y: f64, w: f64, h: f64) -> Shape {
        shape(
            Bbox::from_xywh(x, y, w, h),
            Outline::closed(vec![
                Point::new(0., 0.),
                Point::new(w, 0.),
                Point::new(w, h),
                Point::new(0., h),
            ]),
            Point::new(x, y),
        )
    }

    #[test]
    fn extreme_vertex_each_side() {
        let s = rect_shape(10., 20., 4., 2.);
        assert_eq!(extreme_vertex(&s, Side::Left).unwrap().x, 10.);
        assert_eq!(extreme_vertex(&s, Side::Right).unwrap().x, 14.);
        assert_eq!(extreme_vertex(&s, Side::Top).unwrap().y, 20.);
        assert_eq!(extreme_vertex(&s, Side::Bot).unwrap().y, 22.);
    }

    #[test]
    fn extreme_vertex_ties_take_first() {
        // Both right-edge vertices share x = 4; the first in vertex order wins.
        let s = rect_shape(0., 0., 4., 2.);
        let top_right = extreme_vertex(&s, Side::Right).unwrap();
        assert_eq!(top_right, Point::new(4., 0.));
        let top_left = extreme_vertex(&s, Side::Top).unwrap();
        assert_eq!(top_left, Point::new(0., 0.));
    }

    #[test]
    fn extreme_vertex_empty_outline() {
        let s = shape(Bbox::from_xywh(0., 0., 1., 1.), Outline::default(), Point::zero());
        assert!(extreme_vertex(&s, Side::Right).is_none());
    }

    #[test]
    fn probe_vertical_edge_is_constant() {
        let s = rect_shape(10., 0., 4., 4.);
        // Leftmost x at any height inside the rect is its left edge.
        assert_eq!(probe(&s, Side::Left, 2.), Some(10.));
        assert_eq!(probe(&s, Side::Right, 2.), Some(14.));
    }

    #[test]
    fn probe_parallel_edge_takes_near_endpoint() {
        // A single horizontal segment from (0, 5) to (10, 5).
        let s = shape(
            Bbox::from_xywh(0., 5., 10., 0.),
            Outline::open(vec![Point::new(0., 5.), Point::new(10., 5.)]),
            Point::zero(),
        );
        assert_eq!(probe(&s, Side::Left, 5.), Some(0.));
        assert_eq!(probe(&s, Side::Right, 5.), Some(10.));
        // The probe only counts the segment at its exact height.
        assert_eq!(probe(&s, Side::Left, 5.1), None);
    }

    #[test]
    fn probe_interpolates_slanted_edges() {
        // A diagonal from (0, 0) to (10, 10): at y = 4 it crosses x = 4.
        let s = shape(
            Bbox::from_xywh(0., 0., 10., 10.),
            Outline::open(vec![Point::new(0., 0.), Point::new(10., 10.)]),
            Point::zero(),
        );
        assert_eq!(probe(&s, Side::Left, 4.), Some(4.));
        // Same segment probed vertically: at x = 4 it crosses y = 4.
        assert_eq!(probe(&s, Side::Top, 4.), Some(4.));
    }

    #[test]
    fn probe_keeps_extreme_crossing() {
        // A triangle: the probe at mid-height crosses both the vertical left
        // edge and the slanted hypotenuse.
        let s = shape(
            Bbox::from_xywh(0., 0., 10., 10.),
            Outline::closed(vec![
                Point::new(0., 0.),
                Point::new(10., 10.),
                Point::new(0., 10.),
            ]),
            Point::zero(),
        );
        assert_eq!(probe(&s, Side::Left, 5.), Some(0.));
        assert_eq!(probe(&s, Side::Right, 5.), Some(5.));
    }

    #[test]
    fn probe_respects_origin_offset() {
        let mut s = rect_shape(0., 0., 4., 4.);
        s.origin = Point::new(100., 50.);
        s.bounds = Bbox::from_xywh(100., 50., 4., 4.);
        assert_eq!(probe(&s, Side::Left, 52.), Some(100.));
        assert_eq!(probe(&s, Side::Left, 2.), None);
    }

    #[test]
    fn probe_outside_span_misses() {
        let s = rect_shape(0., 0., 4., 4.);
        assert_eq!(probe(&s, Side::Left, -1.), None);
        assert_eq!(probe(&s, Side::Left, 4.5), None);
        // Inclusive bounds: the corners still count.
        assert_eq!(probe(&s, Side::Left, 0.), Some(0.));
        assert_eq!(probe(&s, Side::Left, 4.), Some(0.));
    }

    #[test]
    fn probe_skips_bad_segments() {
        let s = shape(
            Bbox::from_xywh(0., 0., 4., 4.),
            Outline::new(
                vec![Point::new(0., 0.), Point::new(0., 4.)],
                vec![Segment::new(0, 1), Segment::new(1, 9)],
            ),
            Point::zero(),
        );
        assert_eq!(probe(&s, Side::Left, 2.), Some(0.));
    }

    #[test]
    fn probe_degenerate_segment_is_a_point_crossing() {
        let s = shape(
            Bbox::from_xywh(3., 3., 0., 0.),
            Outline::new(vec![Point::new(3., 3.)], vec![Segment::new(0, 0)]),
            Point::zero(),
        );
        assert_eq!(probe(&s, Side::Left, 3.), Some(3.));
        assert_eq!(probe(&s, Side::Left, 3.1), None);
    }

    #[test]
    fn fallback_clamps_to_near_bound() {
        let s = rect_shape(0., 10., 4., 4.);
        // Probing above the rect recovers at its top edge, below at its bottom.
        assert_eq!(probe_with_fallback(&s, Side::Left, 5.), Some(0.));
        assert_eq!(probe_with_fallback(&s, Side::Left, 20.), Some(0.));
    }

    #[test]
    fn fallback_nudges_inside_bounds() {
        // An open outline covering only the lower half of the reported
        // bounds: an in-span probe at y = 11.8 misses the outline but is
        // within half a unit of it.
        let s = shape(
            Bbox::from_xywh(0., 10., 4., 4.),
            Outline::open(vec![Point::new(0., 12.), Point::new(0., 14.)]),
            Point::zero(),
        );
        assert_eq!(probe(&s, Side::Left, 11.8), None);
        assert_eq!(probe_with_fallback(&s, Side::Left, 11.8), Some(0.));
        // Beyond the nudge the probe stays a miss.
        assert_eq!(probe_with_fallback(&s, Side::Left, 11.2), None);
    }

    #[test]
    fn fallback_without_bounds_gives_up() {
        let s = shape(
            Bbox::empty(),
            Outline::open(vec![Point::new(0., 0.), Point::new(0., 4.)]),
            Point::zero(),
        );
        assert_eq!(probe_with_fallback(&s, Side::Left, 10.), None);
    }
}

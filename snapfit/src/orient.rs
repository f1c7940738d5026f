//! Snap-axis detection from two shapes' bounding boxes.

use serde::{Deserialize, Serialize};
use snapgeom::Dir;

use crate::error::{Error, Result};
use crate::log::debug;
use crate::shape::Shape;

/// The policy used to pick a snap axis from two bounding boxes.
///
/// Axis detection is caller-held configuration: the host passes a policy (or
/// takes the default) on every call, and the core keeps no session state.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum OrientPolicy {
    /// Classifies the two bounds by their projected overlaps, and reports an
    /// error when the layout is diagonal or overlapping; see [`detect_axis`].
    ///
    /// This is the primary policy: it is the only one able to report an
    /// invalid selection, which hosts use to disable the snap action.
    #[default]
    Classify,
    /// Always answers: picks the axis with the smaller absolute bounding-box
    /// gap, falling back to [`Dir::Horiz`] on ties or missing bounds.
    NearestGap,
}

/// Picks the snap axis for two shapes using the default
/// [`Classify`](OrientPolicy::Classify) policy.
///
/// Projects both bounding boxes onto each axis and classifies the four
/// possible overlap combinations. Projections that merely touch at an
/// endpoint count as separated, so shapes already in edge contact still
/// classify cleanly:
///
/// - overlap on neither axis: the shapes are diagonally separated and no
///   single-axis translation can bring them together ([`Error::DiagonalLayout`]);
/// - overlap on both axes: the shapes already intersect in projection
///   ([`Error::AmbiguousLayout`]);
/// - overlap on x only: the shapes are stacked, so movement is vertical;
/// - overlap on y only: the shapes are side-by-side, so movement is
///   horizontal.
pub fn detect_axis(a: &Shape, b: &Shape) -> Result<Dir> {
    detect_axis_with(OrientPolicy::Classify, a, b)
}

/// Picks the snap axis for two shapes using the given policy.
pub fn detect_axis_with(policy: OrientPolicy, a: &Shape, b: &Shape) -> Result<Dir> {
    match policy {
        OrientPolicy::Classify => classify(a, b),
        OrientPolicy::NearestGap => Ok(nearest_gap(a, b)),
    }
}

fn classify(a: &Shape, b: &Shape) -> Result<Dir> {
    let ra = a.bounds_rect()?;
    let rb = b.bounds_rect()?;

    let overlap_x = ra.hspan().overlaps(&rb.hspan());
    let overlap_y = ra.vspan().overlaps(&rb.vspan());

    match (overlap_x, overlap_y) {
        (false, false) => Err(Error::DiagonalLayout),
        (true, true) => Err(Error::AmbiguousLayout),
        (true, false) => Ok(Dir::Vert),
        (false, true) => Ok(Dir::Horiz),
    }
}

fn nearest_gap(a: &Shape, b: &Shape) -> Dir {
    let (Ok(ra), Ok(rb)) = (a.bounds_rect(), b.bounds_rect()) else {
        return Dir::Horiz;
    };

    let gap = |dir: Dir| {
        let (sa, sb) = (ra.span(dir), rb.span(dir));
        let (first, second) = if sb.start() < sa.start() {
            (sb, sa)
        } else {
            (sa, sb)
        };
        (second.start() - first.stop()).abs()
    };

    let (gx, gy) = (gap(Dir::Horiz), gap(Dir::Vert));
    let dir = if gy < gx { Dir::Vert } else { Dir::Horiz };
    debug!("nearest-gap detection: x gap {gx}, y gap {gy} -> {dir}");
    dir
}

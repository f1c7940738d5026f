//! The alignment resolver: turns the scan primitives into a signed
//! translation and a resulting gap.

use serde::{Deserialize, Serialize};
use snapgeom::{Dir, Rect, Side, Sign};

use crate::error::{Error, Result};
use crate::log::debug;
use crate::scan::{extreme_vertex, probe_with_fallback};
use crate::shape::Shape;

/// The outcome of a snap computation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Alignment {
    /// The signed distance the mover travels along the snap axis.
    pub translation: f64,
    /// The role of the shape that receives the translation: `Left`/`Right`
    /// for a horizontal snap, `Top`/`Bot` for a vertical one. Roles follow
    /// the same ordering as [`spacing`]: the shape whose bounds start at the
    /// smaller coordinate along the axis is `Left`/`Top`, with ties going to
    /// the first input.
    pub mover: Side,
    /// The bounding-box gap between the two shapes after the translation is
    /// applied.
    pub final_gap: f64,
}

/// Orders two shapes along `dir` by the start of their bounds.
///
/// Ties keep the input order, so the result is deterministic.
fn order_along<'a>(a: &'a Shape, b: &'a Shape, dir: Dir) -> Result<(&'a Shape, &'a Shape)> {
    let ra = a.bounds_rect()?;
    let rb = b.bounds_rect()?;
    if rb.span(dir).start() < ra.span(dir).start() {
        Ok((b, a))
    } else {
        Ok((a, b))
    }
}

/// The current bounding-box spacing between two shapes along `dir`.
///
/// This is the caller-facing preview value: the distance from the trailing
/// edge of the first shape's bounds to the leading edge of the second's.
/// Negative when the bounds already overlap along the axis.
pub fn spacing(a: &Shape, b: &Shape, dir: Dir) -> Result<f64> {
    let (first, second) = order_along(a, b, dir)?;
    let first = first.bounds_rect()?;
    let second = second.bounds_rect()?;
    Ok(second.span(dir).start() - first.span(dir).stop())
}

/// The distance moving `second` would travel: from the extreme vertex of
/// `first` on its facing side, probe into `second` for its nearest facing
/// crossing.
fn forward_candidate(first: &Shape, second: &Shape, dir: Dir) -> Option<f64> {
    let facing = Side::with_dir_and_sign(dir, Sign::Pos);
    let extreme = extreme_vertex(first, facing)?;
    let crossing = probe_with_fallback(second, facing.other(), extreme.coord(dir.other()))?;
    Some(extreme.coord(dir) - crossing)
}

/// The symmetric candidate: probe from `second`'s facing extreme into
/// `first`; moving `first` by the result closes the gap.
fn inverse_candidate(first: &Shape, second: &Shape, dir: Dir) -> Option<f64> {
    let facing = Side::with_dir_and_sign(dir, Sign::Neg);
    let extreme = extreme_vertex(second, facing)?;
    let crossing = probe_with_fallback(first, facing.other(), extreme.coord(dir.other()))?;
    Some(extreme.coord(dir) - crossing)
}

/// Computes the minimal translation that brings `a` and `b` into
/// edge-to-edge contact along `dir`.
///
/// Both move strategies are tried: the forward candidate moves the
/// second-ordered shape towards the first, the inverse candidate moves the
/// first towards the second. When both probes succeed the candidate with the
/// smaller absolute translation wins, ties favoring the forward candidate;
/// when only one succeeds it is used unconditionally; when neither does, the
/// shapes cannot be aligned by a single-axis translation
/// ([`Error::Unalignable`]).
///
/// The reported [`final_gap`](Alignment::final_gap) is recomputed from the
/// post-translation bounding boxes rather than reused from the probe: the
/// probe measures vertex-to-edge distance, while the gap callers display is
/// box-to-box spacing.
pub fn resolve(a: &Shape, b: &Shape, dir: Dir) -> Result<Alignment> {
    if !a.has_geometry() || !b.has_geometry() {
        return Err(Error::MissingGeometry);
    }

    let (first, second) = order_along(a, b, dir)?;
    let forward = forward_candidate(first, second, dir);
    let inverse = inverse_candidate(first, second, dir);
    debug!("{dir} snap candidates: forward {forward:?}, inverse {inverse:?}");

    let (translation, moves) = match (forward, inverse) {
        (None, None) => return Err(Error::Unalignable),
        (Some(f), None) => (f, Sign::Pos),
        (None, Some(i)) => (i, Sign::Neg),
        (Some(f), Some(i)) => {
            if f.abs() <= i.abs() {
                (f, Sign::Pos)
            } else {
                (i, Sign::Neg)
            }
        }
    };

    let along = |r: Rect| r.span(dir);
    let first_rect = first.bounds_rect()?;
    let second_rect = second.bounds_rect()?;
    let final_gap = match moves {
        Sign::Pos => along(second_rect).start() + translation - along(first_rect).stop(),
        Sign::Neg => along(second_rect).start() - (along(first_rect).stop() + translation),
    };

    Ok(Alignment {
        translation,
        mover: Side::with_dir_and_sign(dir, moves),
        final_gap,
    })
}

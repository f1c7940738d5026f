//! The shape value type consumed by every snap operation.

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use snapgeom::bbox::Bbox;
use snapgeom::transform::Translate;
use snapgeom::{Outline, Point, Rect, Segment};

use crate::error::{Error, Result};

/// A straight-edged vector shape in document space.
///
/// This is the unit of input to the snapping core. Hosts build one per
/// document node: the bounding box and origin come from the node's absolute
/// placement, the outline from its vector network. The bounding box is
/// caller-provided and trusted; it is never recomputed from the vertices.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize, PartialEq)]
pub struct Shape {
    /// Host-reported absolute bounding box.
    ///
    /// Empty bounds mean the host could not read the node's dimensions.
    pub bounds: Bbox,
    /// The outline, in shape-local coordinates.
    #[builder(default)]
    pub outline: Outline,
    /// The render-space anchor added to every outline vertex to obtain
    /// absolute coordinates. Distinct from the bounding box anchor.
    #[builder(default)]
    pub origin: Point,
}

impl Shape {
    /// Creates a new [`Shape`].
    pub fn new(bounds: Bbox, outline: Outline, origin: Point) -> Self {
        Self {
            bounds,
            outline,
            origin,
        }
    }

    /// Returns a new [`ShapeBuilder`].
    #[inline]
    pub fn builder() -> ShapeBuilder {
        ShapeBuilder::default()
    }

    /// Returns `true` if the shape carries enough geometry to participate in
    /// a snap computation: non-empty bounds, and at least one vertex and one
    /// segment.
    pub fn has_geometry(&self) -> bool {
        !self.bounds.is_empty() && !self.outline.is_empty()
    }

    /// Returns the bounds as a [`Rect`], or [`Error::MissingGeometry`] if empty.
    pub fn bounds_rect(&self) -> Result<Rect> {
        self.bounds.as_rect().ok_or(Error::MissingGeometry)
    }

    /// Iterates the outline vertices in absolute coordinates.
    pub fn abs_points(&self) -> impl Iterator<Item = Point> + '_ {
        self.outline.points.iter().map(|pt| pt.translated(self.origin))
    }

    /// Resolves a segment to its endpoints in absolute coordinates.
    ///
    /// Returns [`None`] for segments with out-of-range vertex indices.
    pub fn abs_endpoints(&self, seg: Segment) -> Option<(Point, Point)> {
        let (p0, p1) = self.outline.endpoints(seg)?;
        Some((p0.translated(self.origin), p1.translated(self.origin)))
    }
}

impl Translate for Shape {
    /// Moves the whole shape: the anchor carries the outline with it, and the
    /// bounds move in lockstep.
    fn translate(&mut self, p: Point) {
        self.origin.translate(p);
        self.bounds.translate(p);
    }
}

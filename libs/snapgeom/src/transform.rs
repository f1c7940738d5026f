//! Translation traits.
//!
//! The snapping core only ever computes rigid axis-aligned translations, so
//! these traits are the whole transform story: no rotation, no scaling.

use super::{Dir, Point};
use crate::bbox::Bbox;

/// A trait for specifying how an object is translated by a [`Point`].
pub trait Translate {
    /// Translates the object by a [`Point`] through mutation.
    fn translate(&mut self, p: Point);

    /// Creates a translated copy of the object.
    fn translated(&self, p: Point) -> Self
    where
        Self: Clone,
    {
        let mut out = self.clone();
        out.translate(p);
        out
    }

    /// Translates the object by `delta` along direction `dir` only.
    fn translate_along(&mut self, dir: Dir, delta: f64) {
        self.translate(Point::offset(delta, dir));
    }
}

impl Translate for Point {
    fn translate(&mut self, p: Point) {
        self.x += p.x;
        self.y += p.y;
    }
}

impl Translate for Bbox {
    fn translate(&mut self, p: Point) {
        if self.is_empty() {
            return;
        }
        self.p0.translate(p);
        self.p1.translate(p);
    }
}

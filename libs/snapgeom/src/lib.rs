//! Core geometric value types for document-space vector shapes.
//!
//! All coordinates are `f64` in a y-down document space: x grows to the
//! right, y grows downward, and a bounding box is anchored at its top-left
//! corner.

use std::fmt::Display;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use self::transform::Translate;

pub mod bbox;
pub mod transform;

/// A point in two-dimensional document-space.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new [`Point`] from (x,y) coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Creates a new point from the given direction and coordinates.
    ///
    /// If `dir` is [`Dir::Horiz`], `a` becomes the x-coordinate and `b` becomes the y-coordinate.
    /// If `dir` is [`Dir::Vert`], `a` becomes the y-coordinate and `b` becomes the x-coordinate.
    pub fn from_dir_coords(dir: Dir, a: f64, b: f64) -> Self {
        match dir {
            Dir::Horiz => Self::new(a, b),
            Dir::Vert => Self::new(b, a),
        }
    }

    /// Returns the origin, (0, 0).
    #[inline]
    pub fn zero() -> Self {
        Self { x: 0., y: 0. }
    }

    /// Creates a new [`Point`] that serves as an offset in direction `dir`.
    pub fn offset(val: f64, dir: Dir) -> Self {
        match dir {
            Dir::Horiz => Self { x: val, y: 0. },
            Dir::Vert => Self { x: 0., y: val },
        }
    }

    /// Gets the coordinate associated with direction `dir`.
    pub fn coord(&self, dir: Dir) -> f64 {
        match dir {
            Dir::Horiz => self.x,
            Dir::Vert => self.y,
        }
    }

    /// Creates a new [`Point`] shifted by `p.x` in the x-dimension and by `p.y` in the y-dimension.
    #[inline]
    pub fn translated(&self, p: Point) -> Self {
        let mut pt = *self;
        pt.translate(p);
        pt
    }
}

impl std::ops::Add<Point> for Point {
    type Output = Self;
    fn add(self, rhs: Point) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl std::ops::AddAssign<Point> for Point {
    fn add_assign(&mut self, rhs: Point) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub<Point> for Point {
    type Output = Self;
    fn sub(self, rhs: Point) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::ops::SubAssign<Point> for Point {
    fn sub_assign(&mut self, rhs: Point) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl From<(f64, f64)> for Point {
    fn from(value: (f64, f64)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

/// A one-dimensional span.
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Span {
    start: f64,
    stop: f64,
}

impl Span {
    /// Creates a new [`Span`] between two coordinates.
    pub fn new(start: f64, stop: f64) -> Self {
        Self {
            start: start.min(stop),
            stop: start.max(stop),
        }
    }

    /// Creates a new [`Span`] between two coordinates.
    ///
    /// The caller must ensure that `start` is less than or equal to `stop`.
    pub const fn new_unchecked(start: f64, stop: f64) -> Self {
        Self { start, stop }
    }

    /// Creates a span of zero length encompassing the given coordinate.
    pub fn from_point(x: f64) -> Self {
        Self { start: x, stop: x }
    }

    /// Creates a new [`Span`] with the given start and length.
    pub fn with_start_and_length(start: f64, length: f64) -> Self {
        Self {
            stop: start + length,
            start,
        }
    }

    /// Gets the starting ([`Sign::Neg`]) or stopping ([`Sign::Pos`]) point of a span.
    #[inline]
    pub fn point(&self, sign: Sign) -> f64 {
        match sign {
            Sign::Neg => self.start,
            Sign::Pos => self.stop,
        }
    }

    /// Gets the center of the span.
    #[inline]
    pub fn center(&self) -> f64 {
        (self.start + self.stop) / 2.
    }

    /// Gets the length of the span.
    #[inline]
    pub fn length(&self) -> f64 {
        self.stop - self.start
    }

    /// Gets the start of the span.
    #[inline]
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Gets the stop of the span.
    #[inline]
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Checks if the span intersects with the [`Span`] `other`.
    ///
    /// Intersection is inclusive: spans that merely share an endpoint intersect.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.stop < self.start || self.stop < other.start)
    }

    /// Checks if the span shares a positive-length interval with the [`Span`] `other`.
    ///
    /// Unlike [`Span::intersects`], spans that only touch at an endpoint do
    /// not overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.stop && other.start < self.stop
    }

    /// Checks if the span contains the coordinate `x`, inclusive of both endpoints.
    #[inline]
    pub fn contains_point(&self, x: f64) -> bool {
        self.start <= x && x <= self.stop
    }

    /// Creates a new [`Span`] spanning both `self` and `other`.
    pub fn union(self, other: Self) -> Self {
        Self {
            start: self.start.min(other.start),
            stop: self.stop.max(other.stop),
        }
    }
}

impl From<Span> for (f64, f64) {
    #[inline]
    fn from(s: Span) -> Self {
        (s.start(), s.stop())
    }
}

/// An enumeration of axis-aligned directions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Dir {
    /// The horizontal, or x-aligned, direction.
    Horiz,
    /// The vertical, or y-aligned, direction.
    Vert,
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("error parsing direction `{original}`; expected horizontal or vertical")]
pub struct DirParseError {
    original: String,
}

impl FromStr for Dir {
    type Err = DirParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowercase = s.to_lowercase();
        match lowercase.trim() {
            "vertical" | "vert" | "v" => Ok(Self::Vert),
            "horizontal" | "horiz" | "h" => Ok(Self::Horiz),
            _ => Err(DirParseError {
                original: s.to_string(),
            }),
        }
    }
}

impl Dir {
    /// Returns the perpendicular direction.
    pub fn other(self) -> Self {
        match self {
            Self::Horiz => Self::Vert,
            Self::Vert => Self::Horiz,
        }
    }
}

impl Default for Dir {
    #[inline]
    fn default() -> Self {
        Self::Horiz
    }
}

impl Display for Dir {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Horiz => write!(f, "horizontal"),
            Self::Vert => write!(f, "vertical"),
        }
    }
}

impl std::ops::Not for Dir {
    type Output = Self;
    /// Exclamation Operator returns the opposite direction
    fn not(self) -> Self::Output {
        self.other()
    }
}

/// Enumeration over possible signs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Sign {
    /// Positive.
    Pos,
    /// Negative.
    Neg,
}

impl Sign {
    #[inline]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Pos => 1.,
            Self::Neg => -1.,
        }
    }
}

impl std::ops::Not for Sign {
    type Output = Self;
    /// Flips the [`Sign`].
    fn not(self) -> Self::Output {
        match self {
            Self::Pos => Self::Neg,
            Self::Neg => Self::Pos,
        }
    }
}

/// An enumeration of the sides of an axis-aligned rectangle.
///
/// Since document-space is y-down, the top side carries the smaller
/// y-coordinate and the bottom side the larger one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Side {
    Top,
    Right,
    Bot,
    Left,
}

impl Side {
    /// Gets the direction of the coordinate corresponding to this side.
    ///
    /// Top and bottom edges are y-coordinates, so they are on the **vertical** axis.
    /// Left and right edges are x-coordinates, so they are on the **horizontal** axis.
    ///
    /// Also see [`Side::edge_dir`].
    pub fn coord_dir(&self) -> Dir {
        use Dir::*;
        use Side::*;
        match self {
            Top | Bot => Vert,
            Left | Right => Horiz,
        }
    }

    /// Gets the direction of the edge corresponding to this side.
    ///
    /// Top and bottom edges are **horizontal** line segments;
    /// left and right edges are **vertical** line segments.
    ///
    /// Also see [`Side::coord_dir`].
    pub fn edge_dir(&self) -> Dir {
        use Dir::*;
        use Side::*;
        match self {
            Top | Bot => Horiz,
            Left | Right => Vert,
        }
    }

    /// Returns the opposite side.
    pub fn other(&self) -> Self {
        match self {
            Side::Top => Side::Bot,
            Side::Right => Side::Left,
            Side::Bot => Side::Top,
            Side::Left => Side::Right,
        }
    }

    /// Returns the sign corresponding to moving towards this side.
    ///
    /// In y-down space, bottom and right are the positive sides.
    pub fn sign(&self) -> Sign {
        use Side::*;
        use Sign::*;
        match self {
            Bot | Right => Pos,
            Top | Left => Neg,
        }
    }

    /// Returns the side corresponding with the given [`Dir`] and [`Sign`].
    pub fn with_dir_and_sign(dir: Dir, sign: Sign) -> Side {
        match dir {
            Dir::Horiz => match sign {
                Sign::Pos => Side::Right,
                Sign::Neg => Side::Left,
            },
            Dir::Vert => match sign {
                Sign::Pos => Side::Bot,
                Sign::Neg => Side::Top,
            },
        }
    }

    /// Returns the sides that bound the given direction.
    pub fn with_dir(dir: Dir) -> impl Iterator<Item = Side> {
        match dir {
            Dir::Horiz => [Side::Left, Side::Right].into_iter(),
            Dir::Vert => [Side::Top, Side::Bot].into_iter(),
        }
    }
}

impl std::ops::Not for Side {
    type Output = Self;
    /// Exclamation Operator returns the opposite side
    fn not(self) -> Self::Output {
        self.other()
    }
}

/// An edge of an outline, stored as a pair of indices into the outline's
/// vertex sequence.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    /// Creates a new [`Segment`] connecting the vertices at `start` and `end`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl From<(usize, usize)> for Segment {
    fn from(value: (usize, usize)) -> Self {
        Self {
            start: value.0,
            end: value.1,
        }
    }
}

/// A straight-edged vector outline.
///
/// Consists of an ordered sequence of shape-local vertices and an explicit
/// set of segments indexing into it. The segments need not form a single
/// closed loop: open polylines and disconnected edge sets are legal.
#[derive(Debug, Default, Clone, Serialize, Deserialize, PartialEq)]
pub struct Outline {
    pub points: Vec<Point>,
    pub segments: Vec<Segment>,
}

impl Outline {
    /// Creates a new [`Outline`] from vertices and segments.
    pub fn new(points: Vec<Point>, segments: Vec<Segment>) -> Self {
        Self { points, segments }
    }

    /// Creates a closed outline from a vertex loop.
    ///
    /// Each vertex is connected to the next, and the last back to the first.
    pub fn closed(points: Vec<Point>) -> Self {
        let n = points.len();
        let segments = (0..n).map(|i| Segment::new(i, (i + 1) % n)).collect();
        Self { points, segments }
    }

    /// Creates an open polyline from a vertex chain.
    pub fn open(points: Vec<Point>) -> Self {
        let segments = (1..points.len()).map(|i| Segment::new(i - 1, i)).collect();
        Self { points, segments }
    }

    /// Resolves a segment to its two endpoints.
    ///
    /// Returns [`None`] if either index is out of range; such segments
    /// contribute no geometry.
    pub fn endpoints(&self, seg: Segment) -> Option<(Point, Point)> {
        Some((
            *self.points.get(seg.start)?,
            *self.points.get(seg.end)?,
        ))
    }

    /// Returns `true` if the outline carries no usable geometry.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() || self.segments.is_empty()
    }
}

impl Translate for Outline {
    fn translate(&mut self, p: Point) {
        for pt in self.points.iter_mut() {
            pt.translate(p);
        }
    }
}

/// An axis-aligned rectangle, specified by top-left and bottom-right corners.
#[derive(Debug, Default, Copy, Clone, Serialize, Deserialize, PartialEq, PartialOrd)]
pub struct Rect {
    /// The top-left corner, closest to negative infinity in both x and y.
    pub p0: Point,
    /// The bottom-right corner, closest to positive infinity in both x and y.
    pub p1: Point,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(p0: Point, p1: Point) -> Self {
        Self {
            p0: Point::new(p0.x.min(p1.x), p0.y.min(p1.y)),
            p1: Point::new(p0.x.max(p1.x), p0.y.max(p1.y)),
        }
    }

    /// Creates a rectangle from its top-left anchor and dimensions.
    ///
    /// This is the `{x, y, width, height}` form in which hosts report
    /// bounding boxes. The caller should ensure `w` and `h` are non-negative.
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self::new(Point::new(x, y), Point::new(x + w, y + h))
    }

    /// Creates an empty rectangle containing the given point.
    pub fn from_point(p: Point) -> Self {
        Self { p0: p, p1: p }
    }

    /// Creates a rectangle from horizontal and vertical [`Span`]s.
    pub fn from_spans(h: Span, v: Span) -> Self {
        Self {
            p0: Point::new(h.start(), v.start()),
            p1: Point::new(h.stop(), v.stop()),
        }
    }

    /// Returns the top y-coordinate of the rectangle.
    #[inline]
    pub fn top(&self) -> f64 {
        self.p0.y
    }

    /// Returns the bottom y-coordinate of the rectangle.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.p1.y
    }

    /// Returns the left x-coordinate of the rectangle.
    #[inline]
    pub fn left(&self) -> f64 {
        self.p0.x
    }

    /// Returns the right x-coordinate of the rectangle.
    #[inline]
    pub fn right(&self) -> f64 {
        self.p1.x
    }

    /// Returns the horizontal span of the rectangle.
    pub fn hspan(&self) -> Span {
        Span::new_unchecked(self.p0.x, self.p1.x)
    }

    /// Returns the vertical span of the rectangle.
    pub fn vspan(&self) -> Span {
        Span::new_unchecked(self.p0.y, self.p1.y)
    }

    /// Returns the span of the rectangle along direction `dir`.
    pub fn span(&self, dir: Dir) -> Span {
        match dir {
            Dir::Horiz => self.hspan(),
            Dir::Vert => self.vspan(),
        }
    }

    /// Returns the width (ie. the horizontal dimension).
    #[inline]
    pub fn width(&self) -> f64 {
        self.p1.x - self.p0.x
    }

    /// Returns the height (ie. the vertical dimension).
    #[inline]
    pub fn height(&self) -> f64 {
        self.p1.y - self.p0.y
    }

    /// Returns the length of the rectangle along direction `dir`.
    pub fn length(&self, dir: Dir) -> f64 {
        self.span(dir).length()
    }

    /// Returns the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new((self.p0.x + self.p1.x) / 2., (self.p0.y + self.p1.y) / 2.)
    }

    /// Returns the coordinate of the given side.
    ///
    /// [`Side::Top`] and [`Side::Left`] are the smaller coordinates of their
    /// axes; [`Side::Bot`] and [`Side::Right`] the larger ones.
    pub fn side(&self, side: Side) -> f64 {
        self.span(side.coord_dir()).point(side.sign())
    }

    /// Returns true if the rectangle contains [`Point`] `pt`.
    ///
    /// Containment is inclusive of all four edges.
    pub fn contains(&self, pt: Point) -> bool {
        self.p0.x <= pt.x && pt.x <= self.p1.x && self.p0.y <= pt.y && pt.y <= self.p1.y
    }
}

impl Translate for Rect {
    fn translate(&mut self, p: Point) {
        self.p0.translate(p);
        self.p1.translate(p);
    }
}

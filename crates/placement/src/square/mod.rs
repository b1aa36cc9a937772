//! Axis-aligned rectangles ("squares") and their derived points and lines.
//!
//! Purpose
//! - Containment and overlap predicates between rectangles.
//! - Named anchor points on a 3×3 grid (start/center/end per axis) that all
//!   corner, edge and center queries are built from.
//! - Bounding box (`outline`) of a collection.
//!
//! Invariants
//! - Corners are normalized on construction: `v1` is the per-axis minimum and
//!   `v2` the per-axis maximum, whichever order the caller passed them in.
//!   Fields are private so the invariant holds for every `Square` value.
//!
//! Known limitation
//! - `in_square`/`out_square`/`cross_square` test corners only. Two
//!   rectangles overlapping in a plus shape (no corner of one inside the
//!   other) are reported as `out_square`.
//!
//! Code cross-refs: `vector::{min_by_xy, max_by_xy}`, `line::Line`.

use std::fmt;
use std::str::FromStr;

use crate::error::PlacementError;
use crate::line::Line;
use crate::vector::{max_by_xy, min_by_xy, Vector};

/// Axis-aligned rectangle between two opposite corners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Square {
    v1: Vector,
    v2: Vector,
}

impl Square {
    /// Rectangle spanned by two opposite corners, in any order.
    ///
    /// Corners must not contain NaN: `f64::min`/`f64::max` would silently
    /// pick the other coordinate. Checked in debug builds.
    pub fn new(a: impl Into<Vector>, b: impl Into<Vector>) -> Self {
        let a = a.into();
        let b = b.into();
        debug_assert!(
            !(a.x.is_nan() || a.y.is_nan() || b.x.is_nan() || b.y.is_nan()),
            "NaN square corner: {a:?}, {b:?}"
        );
        Self {
            v1: Vector::new(a.x.min(b.x), a.y.min(b.y)),
            v2: Vector::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Rectangle from one corner plus an extent; the other corner is
    /// `corner + (width, height)`. Negative extents grow towards smaller
    /// coordinates.
    pub fn from_size(corner: impl Into<Vector>, width: f64, height: f64) -> Self {
        let corner = corner.into();
        Self::new(corner, corner + Vector::new(width, height))
    }

    /// Start corner (per-axis minimum).
    #[inline]
    pub fn v1(&self) -> Vector {
        self.v1
    }

    /// End corner (per-axis maximum).
    #[inline]
    pub fn v2(&self) -> Vector {
        self.v2
    }

    #[inline]
    pub fn width(&self) -> f64 {
        (self.v1.x - self.v2.x).abs()
    }

    #[inline]
    pub fn height(&self) -> f64 {
        (self.v1.y - self.v2.y).abs()
    }

    /// `(width, height)` as an offset vector.
    #[inline]
    pub fn size(&self) -> Vector {
        Vector::new(self.width(), self.height())
    }
}

// ---------------------- COMPARISON ----------------------

/// Closed containment: points on the border are inside.
pub fn point_in_square(a: &Square, b: &Vector) -> bool {
    a.v1.x <= b.x && b.x <= a.v2.x && a.v1.y <= b.y && b.y <= a.v2.y
}

/// Every corner of `b` lies in `a`.
pub fn in_square(a: &Square, b: &Square) -> bool {
    square_corner_points(b)
        .iter()
        .all(|corner| point_in_square(a, corner))
}

/// No corner of `b` lies in `a`.
pub fn out_square(a: &Square, b: &Square) -> bool {
    square_corner_points(b)
        .iter()
        .all(|corner| !point_in_square(a, corner))
}

/// Some but not all corners of `b` lie in `a`.
pub fn cross_square(a: &Square, b: &Square) -> bool {
    !in_square(a, b) && !out_square(a, b)
}

// ---------------------- SELECTION ----------------------

/// Position along one axis of a square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Start,
    Center,
    End,
}

impl Anchor {
    pub const ALL: [Anchor; 3] = [Anchor::Start, Anchor::Center, Anchor::End];

    /// Coordinate of this anchor on the span `start..=end`.
    ///
    /// `End` is `end` itself rather than `start + (end - start)`, which can
    /// round past `end`.
    #[inline]
    pub fn resolve(self, start: f64, end: f64) -> f64 {
        match self {
            Anchor::Start => start,
            Anchor::Center => start + (end - start) / 2.0,
            Anchor::End => end,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Center => "center",
            Anchor::End => "end",
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Anchor {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Anchor::Start),
            "center" => Ok(Anchor::Center),
            "end" => Ok(Anchor::End),
            other => Err(PlacementError::invalid(format!(
                "unknown anchor {other:?} (expected start, center or end)"
            ))),
        }
    }
}

/// Anchor point of `item`.
///
/// ```text
/// ------------------
/// |s-s   c-s   e-s |
/// |s-c   c-c   e-c |
/// |s-e   c-e   e-e |
/// ------------------
/// ```
pub fn by_square_point(item: &Square, x: Anchor, y: Anchor) -> Vector {
    Vector::new(
        x.resolve(item.v1.x, item.v2.x),
        y.resolve(item.v1.y, item.v2.y),
    )
}

/// Bounding box of all `items`; `None` when empty.
pub fn outline(items: &[Square]) -> Option<Square> {
    let ends: Vec<Vector> = items
        .iter()
        .map(|item| by_square_point(item, Anchor::End, Anchor::End))
        .collect();
    let starts: Vec<Vector> = items
        .iter()
        .map(|item| by_square_point(item, Anchor::Start, Anchor::Start))
        .collect();
    let end_corner = max_by_xy(&ends)?;
    let start_corner = min_by_xy(&starts)?;
    Some(Square::new(start_corner, end_corner))
}

/// Main lines of a square, see [`square_lines`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SquareLines {
    /// Left, center and right edge, each full height.
    pub vertical: [Line; 3],
    /// Top, middle and bottom edge, each full width.
    pub horizontal: [Line; 3],
    /// Start-start to end-end, then end-start to start-end.
    pub diagonal: [Line; 2],
}

impl SquareLines {
    /// All eight lines: verticals, horizontals, diagonals.
    pub fn iter(&self) -> impl Iterator<Item = &Line> + '_ {
        self.vertical
            .iter()
            .chain(self.horizontal.iter())
            .chain(self.diagonal.iter())
    }
}

pub fn square_lines(item: &Square) -> SquareLines {
    use Anchor::{Center, End, Start};
    let p = |x, y| by_square_point(item, x, y);
    SquareLines {
        vertical: [
            Line::new(p(Start, Start), p(Start, End)),
            Line::new(p(Center, Start), p(Center, End)),
            Line::new(p(End, Start), p(End, End)),
        ],
        horizontal: [
            Line::new(p(Start, Start), p(End, Start)),
            Line::new(p(Start, Center), p(End, Center)),
            Line::new(p(Start, End), p(End, End)),
        ],
        diagonal: [
            Line::new(p(Start, Start), p(End, End)),
            Line::new(p(End, Start), p(Start, End)),
        ],
    }
}

/// All nine anchor points, x-major: `(start, start), (start, center), .., (end, end)`.
pub fn square_points(item: &Square) -> [Vector; 9] {
    let mut out = [Vector::ZERO; 9];
    let grid = Anchor::ALL
        .iter()
        .flat_map(|&x| Anchor::ALL.iter().map(move |&y| (x, y)));
    for (slot, (x, y)) in out.iter_mut().zip(grid) {
        *slot = by_square_point(item, x, y);
    }
    out
}

/// The four true corners: `(start, start), (start, end), (end, start), (end, end)`.
pub fn square_corner_points(item: &Square) -> [Vector; 4] {
    use Anchor::{End, Start};
    [
        by_square_point(item, Start, Start),
        by_square_point(item, Start, End),
        by_square_point(item, End, Start),
        by_square_point(item, End, End),
    ]
}

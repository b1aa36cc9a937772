//! Line segments between two vectors.
//!
//! - `Line::length` is the Euclidean distance of the endpoints.
//! - Length predicates and extreme selection mirror the vector ones.
//! - `cross_by_line` is a strict-interior segment crossing test: parallel or
//!   collinear segments never cross, and touching at an endpoint is not a
//!   crossing.

use nalgebra::{Matrix2, Vector2};

use crate::compare::{compare_and_select_by, eq_by, ge_by, gt_by, le_by, lt_by};
use crate::vector::Vector;

/// Segment from `v1` to `v2`. Zero-length segments are allowed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub v1: Vector,
    pub v2: Vector,
}

impl Line {
    /// Endpoints may be vectors or bare numbers (broadcast to both axes).
    #[inline]
    pub fn new(v1: impl Into<Vector>, v2: impl Into<Vector>) -> Self {
        Self {
            v1: v1.into(),
            v2: v2.into(),
        }
    }

    /// Displacement `v2 - v1`.
    #[inline]
    pub fn direction(&self) -> Vector {
        self.v2 - self.v1
    }

    #[inline]
    pub fn length(&self) -> f64 {
        Vector2::<f64>::from(self.direction()).norm()
    }
}

/// Signed area of the parallelogram spanned by `a` and `b`.
#[inline]
fn parallelogram_area(a: Vector, b: Vector) -> f64 {
    let a: Vector2<f64> = a.into();
    let b: Vector2<f64> = b.into();
    Matrix2::from_columns(&[a, b]).determinant()
}

// ---------------------- COMPARISON ----------------------

#[inline]
pub fn eq_by_length(a: &Line, b: &Line) -> bool {
    eq_by(a, b, Line::length)
}
#[inline]
pub fn lt_by_length(a: &Line, b: &Line) -> bool {
    lt_by(a, b, Line::length)
}
#[inline]
pub fn gt_by_length(a: &Line, b: &Line) -> bool {
    gt_by(a, b, Line::length)
}
#[inline]
pub fn le_by_length(a: &Line, b: &Line) -> bool {
    le_by(a, b, Line::length)
}
#[inline]
pub fn ge_by_length(a: &Line, b: &Line) -> bool {
    ge_by(a, b, Line::length)
}

/// True iff the segments intersect strictly inside both of them.
///
/// `lambda` locates the hit along `a` from `a.v1`, `gamma` along `b` from
/// `b.v2`; both must lie in the open interval (0, 1).
pub fn cross_by_line(a: &Line, b: &Line) -> bool {
    let det = parallelogram_area(a.direction(), b.direction());
    if det == 0.0 {
        return false;
    }

    let lambda = ((b.v2.y - b.v1.y) * (b.v2.x - a.v1.x) + (b.v1.x - b.v2.x) * (b.v2.y - a.v1.y))
        / det;
    let gamma = ((a.v1.y - a.v2.y) * (b.v2.x - a.v1.x) + (a.v2.x - a.v1.x) * (b.v2.y - a.v1.y))
        / det;

    (0.0 < lambda && lambda < 1.0) && (0.0 < gamma && gamma < 1.0)
}

// ---------------------- SELECTION ----------------------

/// First longest line.
pub fn max_by_length(items: &[Line]) -> Option<&Line> {
    compare_and_select_by(items, gt_by_length)
}

/// First shortest line.
pub fn min_by_length(items: &[Line]) -> Option<&Line> {
    compare_and_select_by(items, lt_by_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn line(a: (f64, f64), b: (f64, f64)) -> Line {
        Line::new(a, b)
    }

    #[test]
    fn length_is_euclidean() {
        assert_eq!(line((0.0, 0.0), (3.0, 4.0)).length(), 5.0);
        assert_eq!(line((1.0, 1.0), (1.0, 1.0)).length(), 0.0);
        assert_eq!(Line::new(0.0, 2.0).length(), 8.0_f64.sqrt());
    }

    #[test]
    fn determinant_matches_cross_product() {
        let a = Vector::new(1.0, 0.0);
        let b = Vector::new(0.0, 2.5);
        assert!((parallelogram_area(a, b) - 2.5).abs() < 1e-12);
        assert!((parallelogram_area(b, a) + 2.5).abs() < 1e-12);
    }

    #[test]
    fn length_comparisons() {
        let short = line((0.0, 0.0), (1.0, 0.0));
        let long = line((0.0, 0.0), (0.0, 2.0));
        let same = line((5.0, 5.0), (5.0, 6.0));
        assert!(lt_by_length(&short, &long) && le_by_length(&short, &long));
        assert!(gt_by_length(&long, &short) && ge_by_length(&long, &short));
        assert!(eq_by_length(&short, &same));
        assert!(le_by_length(&short, &same) && ge_by_length(&short, &same));
        assert!(!lt_by_length(&short, &same) && !gt_by_length(&short, &same));
    }

    #[test]
    fn select_by_length() {
        let items = vec![
            line((0.0, 0.0), (1.0, 0.0)),
            line((0.0, 0.0), (3.0, 4.0)),
            line((0.0, 0.0), (0.0, 5.0)),
            line((0.0, 0.0), (0.0, 0.5)),
        ];
        assert_eq!(max_by_length(&items), Some(&items[1]));
        assert_eq!(min_by_length(&items), Some(&items[3]));
        assert!(max_by_length(&[]).is_none());
        assert!(min_by_length(&[]).is_none());
    }

    #[test]
    fn diagonals_cross() {
        let a = line((0.0, 0.0), (4.0, 4.0));
        let b = line((0.0, 4.0), (4.0, 0.0));
        assert!(cross_by_line(&a, &b));
        assert!(cross_by_line(&b, &a));
    }

    #[test]
    fn parallel_lines_do_not_cross() {
        let a = line((0.0, 0.0), (4.0, 0.0));
        let b = line((0.0, 1.0), (4.0, 1.0));
        assert!(!cross_by_line(&a, &b));
    }

    #[test]
    fn collinear_overlap_is_not_a_crossing() {
        let a = line((0.0, 0.0), (4.0, 0.0));
        let b = line((2.0, 0.0), (6.0, 0.0));
        assert!(!cross_by_line(&a, &b));
    }

    #[test]
    fn endpoint_touch_is_not_a_crossing() {
        let a = line((0.0, 0.0), (2.0, 0.0));
        let b = line((2.0, 0.0), (2.0, 2.0));
        assert!(!cross_by_line(&a, &b));
        // T-junction: b starts on the interior of a.
        let t = line((1.0, 0.0), (1.0, 3.0));
        assert!(!cross_by_line(&a, &t));
    }

    #[test]
    fn disjoint_segments_on_crossing_carriers() {
        // Carrier lines cross at (5, 5), outside both segments.
        let a = line((0.0, 0.0), (1.0, 1.0));
        let b = line((10.0, 0.0), (9.0, 1.0));
        assert!(!cross_by_line(&a, &b));
    }

    #[test]
    fn zero_length_never_crosses() {
        let dot = line((1.0, 1.0), (1.0, 1.0));
        let a = line((0.0, 0.0), (2.0, 2.0));
        assert!(!cross_by_line(&dot, &a));
        assert!(!cross_by_line(&a, &dot));
    }

    proptest! {
        #[test]
        fn prop_crossing_is_symmetric(
            ax in -100i32..100, ay in -100i32..100, bx in -100i32..100, by in -100i32..100,
            cx in -100i32..100, cy in -100i32..100, dx in -100i32..100, dy in -100i32..100,
        ) {
            let a = line((ax as f64, ay as f64), (bx as f64, by as f64));
            let b = line((cx as f64, cy as f64), (dx as f64, dy as f64));
            prop_assert_eq!(cross_by_line(&a, &b), cross_by_line(&b, &a));
        }

        #[test]
        fn prop_length_is_symmetric_and_non_negative(
            ax in -1e3..1e3f64, ay in -1e3..1e3f64, bx in -1e3..1e3f64, by in -1e3..1e3f64,
        ) {
            let l = line((ax, ay), (bx, by));
            let r = line((bx, by), (ax, ay));
            prop_assert!(l.length() >= 0.0);
            prop_assert!((l.length() - r.length()).abs() < 1e-9);
        }
    }
}

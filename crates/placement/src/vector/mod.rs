//! 2D vectors: points and displacements share one type.
//!
//! Purpose
//! - `Vector` is the coordinate value every other placement type is built from.
//! - Arithmetic is generic over [`XY`], so richer caller types (a labelled
//!   marker, a sprite anchor) keep their extra fields while only x/y change.
//!
//! Conventions
//! - Operands are [`Delta`]s: a bare number applies to both axes, a vector
//!   applies per axis.
//! - Dividing by a zero (or NaN) operand leaves that axis unchanged.
//! - Selections over an empty slice return `None`.
//!
//! Code cross-refs: `compare::{compare_and_select_by, eq_by, lt_by, ..}`,
//! `square::outline` (folds corners with `min_by_xy`/`max_by_xy`).

use std::ops;

use nalgebra::Vector2;

use crate::compare::{compare_and_select_by, eq_by, ge_by, gt_by, le_by, lt_by};
use crate::error::PlacementError;

/// Anything that carries a 2D position.
pub trait XY {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    /// Copy of `self` with both coordinates replaced and every other field kept.
    fn with_xy(&self, x: f64, y: f64) -> Self
    where
        Self: Sized;
}

/// A point or displacement in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    /// Origin.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };
    /// Neutral start value for max folds.
    pub const MINIMAL: Vector = Vector {
        x: f64::NEG_INFINITY,
        y: f64::NEG_INFINITY,
    };
    /// Neutral start value for min folds.
    pub const MAXIMAL: Vector = Vector {
        x: f64::INFINITY,
        y: f64::INFINITY,
    };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Same value on both axes.
    #[inline]
    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v }
    }

    /// Copy the coordinates of any positioned value.
    #[inline]
    pub fn from_xy<P: XY + ?Sized>(p: &P) -> Self {
        Self { x: p.x(), y: p.y() }
    }
}

impl XY for Vector {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn with_xy(&self, x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl XY for Vector2<f64> {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }
    #[inline]
    fn y(&self) -> f64 {
        self.y
    }
    #[inline]
    fn with_xy(&self, x: f64, y: f64) -> Self {
        Vector2::new(x, y)
    }
}

impl From<f64> for Vector {
    fn from(v: f64) -> Self {
        Self::splat(v)
    }
}

impl From<(f64, f64)> for Vector {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Vector {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<f64>> for Vector {
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vector> for Vector2<f64> {
    fn from(v: Vector) -> Self {
        Vector2::new(v.x, v.y)
    }
}

/// One component broadcasts to both axes, two components are `[x, y]`.
impl TryFrom<&[f64]> for Vector {
    type Error = PlacementError;

    fn try_from(components: &[f64]) -> Result<Self, Self::Error> {
        let v = match *components {
            [v] => Self::splat(v),
            [x, y] => Self::new(x, y),
            _ => {
                return Err(PlacementError::invalid(format!(
                    "vector needs 1 or 2 components, got {}",
                    components.len()
                )))
            }
        };
        if v.x.is_nan() || v.y.is_nan() {
            return Err(PlacementError::invalid("vector component is NaN"));
        }
        Ok(v)
    }
}

impl ops::Add for Vector {
    type Output = Vector;
    #[inline]
    fn add(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl ops::Sub for Vector {
    type Output = Vector;
    #[inline]
    fn sub(self, rhs: Vector) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl ops::Mul<f64> for Vector {
    type Output = Vector;
    #[inline]
    fn mul(self, rhs: f64) -> Self::Output {
        Vector::new(self.x * rhs, self.y * rhs)
    }
}

impl ops::Neg for Vector {
    type Output = Vector;
    #[inline]
    fn neg(self) -> Self::Output {
        Vector::new(-self.x, -self.y)
    }
}

/// Arithmetic operand: a scalar for both axes or a per-axis vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Delta {
    Scalar(f64),
    Vector(Vector),
}

impl Delta {
    /// Per-axis view of the operand.
    #[inline]
    pub fn vector(self) -> Vector {
        match self {
            Delta::Scalar(v) => Vector::splat(v),
            Delta::Vector(v) => v,
        }
    }
}

impl From<f64> for Delta {
    fn from(v: f64) -> Self {
        Delta::Scalar(v)
    }
}

impl From<Vector> for Delta {
    fn from(v: Vector) -> Self {
        Delta::Vector(v)
    }
}

impl From<(f64, f64)> for Delta {
    fn from(v: (f64, f64)) -> Self {
        Delta::Vector(v.into())
    }
}

#[inline]
fn per_axis(delta: impl Into<Delta>) -> Vector {
    let delta: Delta = delta.into();
    delta.vector()
}

// ---------------------- MOVING ----------------------

pub fn move_by_x<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    let d = per_axis(delta);
    item.with_xy(item.x() + d.x, item.y())
}

pub fn move_by_y<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    let d = per_axis(delta);
    item.with_xy(item.x(), item.y() + d.y)
}

pub fn move_by_xy<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    let d = per_axis(delta);
    item.with_xy(item.x() + d.x, item.y() + d.y)
}

/// Alias for [`move_by_x`].
#[inline]
pub fn add_by_x<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    move_by_x(item, delta)
}

/// Alias for [`move_by_y`].
#[inline]
pub fn add_by_y<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    move_by_y(item, delta)
}

/// Alias for [`move_by_xy`].
#[inline]
pub fn add_by_xy<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    move_by_xy(item, delta)
}

pub fn subtract_by_x<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    move_by_x(item, multiply_by_xy(&per_axis(delta), -1.0))
}

pub fn subtract_by_y<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    move_by_y(item, multiply_by_xy(&per_axis(delta), -1.0))
}

pub fn subtract_by_xy<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    move_by_xy(item, multiply_by_xy(&per_axis(delta), -1.0))
}

pub fn multiply_by_x<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    let d = per_axis(delta);
    item.with_xy(item.x() * d.x, item.y())
}

pub fn multiply_by_y<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    let d = per_axis(delta);
    item.with_xy(item.x(), item.y() * d.y)
}

pub fn multiply_by_xy<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    let d = per_axis(delta);
    item.with_xy(item.x() * d.x, item.y() * d.y)
}

/// `value / divisor`, or `value` unchanged when the divisor is zero or NaN.
#[inline]
fn div_or_keep(value: f64, divisor: f64) -> f64 {
    if divisor == 0.0 || divisor.is_nan() {
        value
    } else {
        value / divisor
    }
}

pub fn divide_by_x<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    let d = per_axis(delta);
    item.with_xy(div_or_keep(item.x(), d.x), item.y())
}

pub fn divide_by_y<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    let d = per_axis(delta);
    item.with_xy(item.x(), div_or_keep(item.y(), d.y))
}

pub fn divide_by_xy<T: XY>(item: &T, delta: impl Into<Delta>) -> T {
    let d = per_axis(delta);
    item.with_xy(div_or_keep(item.x(), d.x), div_or_keep(item.y(), d.y))
}

// ---------------------- COMPARISON ----------------------

#[inline]
pub fn eq_by_x<T: XY>(a: &T, b: &T) -> bool {
    eq_by(a, b, T::x)
}
#[inline]
pub fn eq_by_y<T: XY>(a: &T, b: &T) -> bool {
    eq_by(a, b, T::y)
}
/// Both axes equal.
#[inline]
pub fn eq_by_xy<T: XY>(a: &T, b: &T) -> bool {
    eq_by_x(a, b) && eq_by_y(a, b)
}

#[inline]
pub fn lt_by_x<T: XY>(a: &T, b: &T) -> bool {
    lt_by(a, b, T::x)
}
#[inline]
pub fn lt_by_y<T: XY>(a: &T, b: &T) -> bool {
    lt_by(a, b, T::y)
}
/// Strictly smaller on both axes.
#[inline]
pub fn lt_by_xy<T: XY>(a: &T, b: &T) -> bool {
    lt_by_x(a, b) && lt_by_y(a, b)
}

#[inline]
pub fn gt_by_x<T: XY>(a: &T, b: &T) -> bool {
    gt_by(a, b, T::x)
}
#[inline]
pub fn gt_by_y<T: XY>(a: &T, b: &T) -> bool {
    gt_by(a, b, T::y)
}
/// Strictly greater on both axes.
#[inline]
pub fn gt_by_xy<T: XY>(a: &T, b: &T) -> bool {
    gt_by_x(a, b) && gt_by_y(a, b)
}

#[inline]
pub fn le_by_x<T: XY>(a: &T, b: &T) -> bool {
    le_by(a, b, T::x)
}
#[inline]
pub fn le_by_y<T: XY>(a: &T, b: &T) -> bool {
    le_by(a, b, T::y)
}
/// `lt_by_xy || eq_by_xy`: strictly smaller on both axes, or identical.
///
/// A vector that is smaller on one axis and equal on the other is neither.
#[inline]
pub fn le_by_xy<T: XY>(a: &T, b: &T) -> bool {
    lt_by_xy(a, b) || eq_by_xy(a, b)
}

#[inline]
pub fn ge_by_x<T: XY>(a: &T, b: &T) -> bool {
    ge_by(a, b, T::x)
}
#[inline]
pub fn ge_by_y<T: XY>(a: &T, b: &T) -> bool {
    ge_by(a, b, T::y)
}
/// `gt_by_xy || eq_by_xy`, see [`le_by_xy`].
#[inline]
pub fn ge_by_xy<T: XY>(a: &T, b: &T) -> bool {
    gt_by_xy(a, b) || eq_by_xy(a, b)
}

// ---------------------- SELECTION ----------------------

/// First item with the largest x.
pub fn max_by_x<T: XY>(items: &[T]) -> Option<&T> {
    compare_and_select_by(items, gt_by_x)
}

/// First item with the largest y.
pub fn max_by_y<T: XY>(items: &[T]) -> Option<&T> {
    compare_and_select_by(items, gt_by_y)
}

/// First item with the smallest x.
pub fn min_by_x<T: XY>(items: &[T]) -> Option<&T> {
    compare_and_select_by(items, lt_by_x)
}

/// First item with the smallest y.
pub fn min_by_y<T: XY>(items: &[T]) -> Option<&T> {
    compare_and_select_by(items, lt_by_y)
}

/// `(max x, max y)` over all items; need not be one of the items.
pub fn max_by_xy<T: XY>(items: &[T]) -> Option<Vector> {
    Some(Vector::new(max_by_x(items)?.x(), max_by_y(items)?.y()))
}

/// `(min x, min y)` over all items; need not be one of the items.
pub fn min_by_xy<T: XY>(items: &[T]) -> Option<Vector> {
    Some(Vector::new(min_by_x(items)?.x(), min_by_y(items)?.y()))
}

/// Center of the bounding box of `items` (not the arithmetic mean).
pub fn avg_by_xy<T: XY>(items: &[T]) -> Option<Vector> {
    let max = max_by_xy(items)?;
    let min = min_by_xy(items)?;
    Some(Vector::new(
        min.x + (max.x - min.x) / 2.0,
        min.y + (max.y - min.y) / 2.0,
    ))
}

// ---------------------- FILTERING ----------------------

/// Items sharing `item`'s x, in input order.
pub fn same_by_x<T: XY + Clone, P: XY + ?Sized>(items: &[T], item: &P) -> Vec<T> {
    same_by(items, item, eq_by_x)
}

/// Items sharing `item`'s y, in input order.
pub fn same_by_y<T: XY + Clone, P: XY + ?Sized>(items: &[T], item: &P) -> Vec<T> {
    same_by(items, item, eq_by_y)
}

/// Items at exactly `item`'s position, in input order.
pub fn same_by_xy<T: XY + Clone, P: XY + ?Sized>(items: &[T], item: &P) -> Vec<T> {
    same_by(items, item, eq_by_xy)
}

fn same_by<T, P>(items: &[T], item: &P, eq: fn(&Vector, &Vector) -> bool) -> Vec<T>
where
    T: XY + Clone,
    P: XY + ?Sized,
{
    let target = Vector::from_xy(item);
    items
        .iter()
        .filter(|i| eq(&target, &Vector::from_xy(*i)))
        .cloned()
        .collect()
}

//! Flat 2D placement geometry: vectors, line segments, axis-aligned squares.
//!
//! Everything here is a pure function over small `Copy` values. Results are
//! freshly built; inputs are never mutated.
//!
//! Modules
//! - [`compare`]: key-based predicates and the first-wins extreme selector.
//! - [`vector`]: points/displacements, per-axis arithmetic, selection, filtering.
//! - [`line`]: segments, length ordering, strict crossing test.
//! - [`square`]: rectangles, containment, anchor points, outline, line/point sets.
//!
//! ```
//! use placement::prelude::*;
//!
//! let a = Square::new((0.0, 0.0), (2.0, 2.0));
//! let b = Square::new((3.0, 3.0), (5.0, 5.0));
//! assert_eq!(outline(&[a, b]), Some(Square::new((0.0, 0.0), (5.0, 5.0))));
//! assert_eq!(
//!     by_square_point(&b, Anchor::Center, Anchor::Center),
//!     Vector::new(4.0, 4.0)
//! );
//! ```

pub mod compare;
pub mod error;
pub mod line;
pub mod square;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::PlacementError;
pub use line::Line;
pub use nalgebra::Vector2 as Vec2;
pub use square::{Anchor, Square, SquareLines};
pub use vector::{Delta, Vector, XY};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compare::{compare_and_select_by, eq_by, ge_by, gt_by, le_by, lt_by};
    pub use crate::error::PlacementError;
    pub use crate::line::{
        cross_by_line, eq_by_length, ge_by_length, gt_by_length, le_by_length, lt_by_length,
        max_by_length, min_by_length, Line,
    };
    pub use crate::square::{
        by_square_point, cross_square, in_square, out_square, outline, point_in_square,
        square_corner_points, square_lines, square_points, Anchor, Square, SquareLines,
    };
    pub use crate::vector::{
        add_by_x, add_by_xy, add_by_y, avg_by_xy, divide_by_x, divide_by_xy, divide_by_y,
        eq_by_x, eq_by_xy, eq_by_y, ge_by_x, ge_by_xy, ge_by_y, gt_by_x, gt_by_xy, gt_by_y,
        le_by_x, le_by_xy, le_by_y, lt_by_x, lt_by_xy, lt_by_y, max_by_x, max_by_xy, max_by_y,
        min_by_x, min_by_xy, min_by_y, move_by_x, move_by_xy, move_by_y, multiply_by_x,
        multiply_by_xy, multiply_by_y, same_by_x, same_by_xy, same_by_y, subtract_by_x,
        subtract_by_xy, subtract_by_y, Delta, Vector, XY,
    };
    pub use nalgebra::Vector2 as Vec2;
}

//! Lay out cards on a board and print how they relate.
//!
//! Usage:
//!   cargo run -p placement --example card_grid
//!   cargo run -p placement --example card_grid -- 4
//!
//! Places an n×n grid of cards (default 3) centered on the anchor points of a
//! board, then prints the outline and which cards spill over the board edge.

use placement::prelude::*;

fn main() {
    let n: usize = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(3)
        .max(1);
    let board = Square::from_size((0.0, 0.0), 90.0, 60.0);
    let card = Vector::new(20.0, 12.0);
    let span = (n.max(2) - 1) as f64;

    let mut cards = Vec::with_capacity(n * n);
    for i in 0..n {
        for j in 0..n {
            let step = Vector::new(i as f64 / span, j as f64 / span);
            let center = add_by_xy(&board.v1(), multiply_by_xy(&board.size(), step));
            let corner = subtract_by_xy(&center, divide_by_xy(&card, 2.0));
            cards.push(Square::from_size(corner, card.x, card.y));
        }
    }

    if let Some(bbox) = outline(&cards) {
        println!(
            "outline: {:?} -> {:?} ({} x {})",
            bbox.v1(),
            bbox.v2(),
            bbox.width(),
            bbox.height()
        );
    }
    for (k, c) in cards.iter().enumerate() {
        let relation = if in_square(&board, c) {
            "inside"
        } else if cross_square(&board, c) {
            "spills over"
        } else {
            "outside"
        };
        let center = by_square_point(c, Anchor::Center, Anchor::Center);
        println!("card {k} at ({:.1}, {:.1}): {relation}", center.x, center.y);
    }
}

//! Layout queries backing the CLI subcommands. Each returns a serializable report.

use anyhow::{bail, Result};
use placement::line::cross_by_line;
use placement::square::{
    by_square_point, cross_square, in_square, out_square, outline, square_lines,
};
use placement::{Anchor, Square, Vector};
use serde::Serialize;

use crate::layout::Layout;

#[derive(Debug, PartialEq, Serialize)]
pub struct SquareOut {
    pub v1: [f64; 2],
    pub v2: [f64; 2],
    pub width: f64,
    pub height: f64,
}

impl From<&Square> for SquareOut {
    fn from(s: &Square) -> Self {
        Self {
            v1: point(s.v1()),
            v2: point(s.v2()),
            width: s.width(),
            height: s.height(),
        }
    }
}

fn point(v: Vector) -> [f64; 2] {
    [v.x, v.y]
}

#[derive(Debug, PartialEq, Serialize)]
pub struct OutlineReport {
    pub squares: usize,
    pub outline: SquareOut,
}

/// Bounding box of the whole layout.
pub fn outline_report(layout: &Layout) -> Result<OutlineReport> {
    let Some(bbox) = outline(&layout.squares) else {
        bail!("layout has no squares; outline is undefined");
    };
    tracing::info!(squares = layout.len(), v1 = ?bbox.v1(), v2 = ?bbox.v2(), "outline");
    Ok(OutlineReport {
        squares: layout.len(),
        outline: SquareOut::from(&bbox),
    })
}

/// How square `b` sits relative to square `a`, judged by `b`'s corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Relation {
    In,
    Out,
    Cross,
}

impl Relation {
    pub fn of(a: &Square, b: &Square) -> Self {
        if in_square(a, b) {
            Relation::In
        } else if out_square(a, b) {
            Relation::Out
        } else {
            debug_assert!(cross_square(a, b));
            Relation::Cross
        }
    }
}

#[derive(Debug, PartialEq, Serialize)]
pub struct RelationOut {
    pub a: String,
    pub b: String,
    pub relation: Relation,
}

/// Relation of every square to every other square (ordered pairs).
pub fn relate_report(layout: &Layout) -> Vec<RelationOut> {
    let mut out = Vec::with_capacity(layout.len() * layout.len().saturating_sub(1));
    for (i, a) in layout.squares.iter().enumerate() {
        for (j, b) in layout.squares.iter().enumerate() {
            if i == j {
                continue;
            }
            out.push(RelationOut {
                a: layout.ids[i].clone(),
                b: layout.ids[j].clone(),
                relation: Relation::of(a, b),
            });
        }
    }
    tracing::info!(pairs = out.len(), "relate");
    out
}

#[derive(Debug, PartialEq, Serialize)]
pub struct AnchorOut {
    pub x: &'static str,
    pub y: &'static str,
    pub at: [f64; 2],
}

#[derive(Debug, PartialEq, Serialize)]
pub struct PointsOut {
    pub id: String,
    pub points: Vec<AnchorOut>,
}

/// The nine anchor points of every square.
pub fn points_report(layout: &Layout) -> Vec<PointsOut> {
    layout
        .ids
        .iter()
        .zip(&layout.squares)
        .map(|(id, square)| PointsOut {
            id: id.clone(),
            points: Anchor::ALL
                .iter()
                .flat_map(|&x| Anchor::ALL.iter().map(move |&y| (x, y)))
                .map(|(x, y)| AnchorOut {
                    x: x.as_str(),
                    y: y.as_str(),
                    at: point(by_square_point(square, x, y)),
                })
                .collect(),
        })
        .collect()
}

#[derive(Debug, PartialEq, Serialize)]
pub struct CrossingOut {
    pub a: String,
    pub b: String,
    pub crossings: usize,
}

/// For every unordered pair of squares, how many of their main lines cross.
pub fn crossings_report(layout: &Layout) -> Vec<CrossingOut> {
    let lines: Vec<_> = layout.squares.iter().map(square_lines).collect();
    let mut out = Vec::new();
    for i in 0..lines.len() {
        for j in (i + 1)..lines.len() {
            let crossings = lines[i]
                .iter()
                .flat_map(|la| lines[j].iter().map(move |lb| (la, lb)))
                .filter(|(la, lb)| cross_by_line(la, lb))
                .count();
            tracing::debug!(a = %layout.ids[i], b = %layout.ids[j], crossings, "pair");
            out.push(CrossingOut {
                a: layout.ids[i].clone(),
                b: layout.ids[j].clone(),
                crossings,
            });
        }
    }
    tracing::info!(pairs = out.len(), "crossings");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout(text: &str) -> Layout {
        Layout::parse(text).unwrap()
    }

    #[test]
    fn outline_spans_all_squares() {
        let l = layout(
            r#"{"squares": [{"v1": [0, 0], "v2": [2, 2]}, {"v1": [3, 3], "v2": [5, 5]}]}"#,
        );
        let report = outline_report(&l).unwrap();
        assert_eq!(report.squares, 2);
        assert_eq!(
            report.outline,
            SquareOut {
                v1: [0.0, 0.0],
                v2: [5.0, 5.0],
                width: 5.0,
                height: 5.0
            }
        );
    }

    #[test]
    fn outline_of_empty_layout_fails() {
        let l = layout(r#"{"squares": []}"#);
        assert!(outline_report(&l).is_err());
    }

    #[test]
    fn relations_cover_ordered_pairs() {
        let l = layout(
            r#"{"squares": [
                {"id": "big", "v1": [0, 0], "width": 10, "height": 10},
                {"id": "small", "v1": [2, 2], "width": 1, "height": 1},
                {"id": "edge", "v1": [8, 4], "width": 5, "height": 2},
                {"id": "far", "v1": [20, 20], "width": 1, "height": 1}
            ]}"#,
        );
        let report = relate_report(&l);
        assert_eq!(report.len(), 12);
        let find = |a: &str, b: &str| {
            report
                .iter()
                .find(|r| r.a == a && r.b == b)
                .map(|r| r.relation)
        };
        assert_eq!(find("big", "small"), Some(Relation::In));
        assert_eq!(find("small", "big"), Some(Relation::Out));
        assert_eq!(find("big", "edge"), Some(Relation::Cross));
        assert_eq!(find("big", "far"), Some(Relation::Out));
    }

    #[test]
    fn relation_serializes_lowercase() {
        let json = serde_json::to_string(&Relation::Cross).unwrap();
        assert_eq!(json, "\"cross\"");
    }

    #[test]
    fn points_are_nine_per_square() {
        let l = layout(r#"{"squares": [{"id": "s", "v1": [0, 0], "v2": [10, 20]}]}"#);
        let report = points_report(&l);
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].points.len(), 9);
        let center = report[0]
            .points
            .iter()
            .find(|p| p.x == "center" && p.y == "center")
            .unwrap();
        assert_eq!(center.at, [5.0, 10.0]);
        let value = serde_json::to_value(&report[0].points[7]).unwrap();
        assert_eq!(value["x"], "end");
        assert_eq!(value["y"], "center");
    }

    #[test]
    fn plus_shape_lines_cross_even_though_corners_do_not() {
        let l = layout(
            r#"{"squares": [
                {"id": "h", "v1": [0, 4], "v2": [10, 6]},
                {"id": "v", "v1": [4, 0], "v2": [6, 10]}
            ]}"#,
        );
        assert!(relate_report(&l)
            .iter()
            .all(|r| r.relation == Relation::Out));
        let report = crossings_report(&l);
        assert_eq!(report.len(), 1);
        assert!(report[0].crossings > 0);
    }

    #[test]
    fn far_apart_squares_have_no_crossings() {
        let l = layout(
            r#"{"squares": [
                {"v1": [0, 0], "v2": [1, 1]},
                {"v1": [5, 5], "v2": [6, 6]},
                {"v1": [9, 0], "v2": [10, 1]}
            ]}"#,
        );
        let report = crossings_report(&l);
        assert_eq!(report.len(), 3);
        assert!(report.iter().all(|c| c.crossings == 0));
    }
}

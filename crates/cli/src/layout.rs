//! JSON layout input: a list of squares given by two corners or by corner + size.
//!
//! ```json
//! {"squares": [
//!   {"id": "header", "v1": [0, 0], "v2": [100, 10]},
//!   {"v1": [10, 20], "width": 30, "height": 40},
//!   {"v1": [5], "v2": [8]}
//! ]}
//! ```
//!
//! A one-element coordinate broadcasts to both axes. Squares without an `id`
//! are named by their index.

use anyhow::{Context, Result};
use placement::{PlacementError, Square, Vector};
use serde::Deserialize;
use std::fs;
use std::io::Read;

#[derive(Debug, Deserialize)]
struct LayoutFile {
    squares: Vec<SquareSpec>,
}

#[derive(Debug, Deserialize)]
struct SquareSpec {
    #[serde(default)]
    id: Option<String>,
    v1: Vec<f64>,
    #[serde(default)]
    v2: Option<Vec<f64>>,
    #[serde(default)]
    width: Option<f64>,
    #[serde(default)]
    height: Option<f64>,
}

impl SquareSpec {
    fn to_square(&self) -> Result<Square, PlacementError> {
        let v1 = Vector::try_from(self.v1.as_slice())?;
        match (&self.v2, self.width, self.height) {
            (Some(v2), None, None) => Ok(Square::new(v1, Vector::try_from(v2.as_slice())?)),
            (None, Some(width), Some(height)) => Ok(Square::from_size(v1, width, height)),
            _ => Err(PlacementError::invalid(
                "square needs either `v2` or both `width` and `height`",
            )),
        }
    }
}

/// Decoded layout: squares plus their display names, index-aligned.
#[derive(Debug)]
pub struct Layout {
    pub ids: Vec<String>,
    pub squares: Vec<Square>,
}

impl Layout {
    pub fn parse(text: &str) -> Result<Self> {
        let file: LayoutFile = serde_json::from_str(text).context("decoding layout JSON")?;
        let mut ids = Vec::with_capacity(file.squares.len());
        let mut squares = Vec::with_capacity(file.squares.len());
        for (index, spec) in file.squares.iter().enumerate() {
            let square = spec
                .to_square()
                .with_context(|| format!("square #{index}"))?;
            let id = spec.id.clone().unwrap_or_else(|| index.to_string());
            tracing::debug!(id = %id, v1 = ?square.v1(), v2 = ?square.v2(), "square");
            ids.push(id);
            squares.push(square);
        }
        Ok(Self { ids, squares })
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }
}

/// Read a layout from a file path, or from stdin when `input` is `-`.
pub fn read_layout(input: &str) -> Result<Layout> {
    let text = if input == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("reading layout from stdin")?;
        buf
    } else {
        fs::read_to_string(input).with_context(|| format!("reading layout {input}"))?
    };
    Layout::parse(&text)
}

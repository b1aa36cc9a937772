//! `<output>.provenance.json`: which layout a written result was computed from.

use anyhow::{Context, Result};
use placement::square::outline;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::layout::Layout;
use crate::query::SquareOut;

/// Sidecar record written next to every `--out` result.
#[derive(Debug, Serialize)]
pub struct Sidecar<'a> {
    pub placement_version: &'static str,
    pub command: &'a str,
    pub input: &'a str,
    pub squares: usize,
    pub ids: &'a [String],
    /// Bounding box of the input layout; `None` when it has no squares.
    pub outline: Option<SquareOut>,
    pub output: String,
}

impl<'a> Sidecar<'a> {
    pub fn new(command: &'a str, input: &'a str, layout: &'a Layout, output: &Path) -> Self {
        Self {
            placement_version: placement::VERSION,
            command,
            input,
            squares: layout.len(),
            ids: &layout.ids,
            outline: outline(&layout.squares).as_ref().map(SquareOut::from),
            output: output.display().to_string(),
        }
    }
}

/// `outline.json` -> `outline.provenance.json`, in the same directory.
pub fn sidecar_path(output: &Path) -> PathBuf {
    output.with_extension("provenance.json")
}

/// Write `sidecar` next to its output and return the sidecar's path.
pub fn write_sidecar(sidecar: &Sidecar<'_>) -> Result<PathBuf> {
    let path = sidecar_path(Path::new(&sidecar.output));
    fs::write(&path, serde_json::to_vec_pretty(sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

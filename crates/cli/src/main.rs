mod layout;
mod provenance;
mod query;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::Value;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::layout::{read_layout, Layout};
use crate::provenance::{write_sidecar, Sidecar};

#[derive(Parser)]
#[command(name = "cli", version)]
#[command(about = "Placement queries over a JSON layout of squares")]
struct Cmd {
    /// Layout JSON file; `-` reads stdin
    #[arg(long, global = true, default_value = "-")]
    input: String,

    /// Write the JSON result here (plus a provenance sidecar) instead of stdout
    #[arg(long, global = true)]
    out: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Bounding box of all squares
    Outline,
    /// In/out/cross relation for every ordered pair of squares
    Relate,
    /// The nine anchor points of every square
    Points,
    /// Number of crossing main lines for every pair of squares
    Crossings,
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Outline => "outline",
            Action::Relate => "relate",
            Action::Points => "points",
            Action::Crossings => "crossings",
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let layout = read_layout(&cmd.input)?;
    let result = run(&cmd.action, &layout)?;
    emit(&cmd, &layout, &result)
}

fn run(action: &Action, layout: &Layout) -> Result<Value> {
    tracing::info!(action = action.name(), squares = layout.len(), "run");
    if layout.is_empty() {
        tracing::warn!("layout has no squares");
    }
    let value = match action {
        Action::Outline => serde_json::to_value(query::outline_report(layout)?)?,
        Action::Relate => serde_json::to_value(query::relate_report(layout))?,
        Action::Points => serde_json::to_value(query::points_report(layout))?,
        Action::Crossings => serde_json::to_value(query::crossings_report(layout))?,
    };
    Ok(value)
}

fn emit(cmd: &Cmd, layout: &Layout, result: &Value) -> Result<()> {
    let Some(out) = cmd.out.as_deref() else {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    };
    let out_path = Path::new(out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(result)?)
        .with_context(|| format!("writing {out}"))?;
    let sidecar = Sidecar::new(cmd.action.name(), &cmd.input, layout, out_path);
    let prov_path = write_sidecar(&sidecar)?;
    tracing::info!(out, provenance = %prov_path.display(), "wrote");
    Ok(())
}

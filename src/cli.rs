//! Command line interface.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tabforge_designer::{write_dxf, write_svg};
use tabforge_settings::ProjectConfig;
use tracing::info;

use crate::job::{run_job, JobOutput};

/// Generate finger-jointed boxes and drawers for laser cutting.
#[derive(Parser, Debug)]
#[command(name = "tabforge")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Job file (.json or .toml)
    pub config: PathBuf,

    /// Write the packed layout as SVG
    #[arg(long, value_name = "PATH")]
    pub svg: Option<PathBuf>,

    /// Write the packed layout as DXF
    #[arg(long, value_name = "PATH")]
    pub dxf: Option<PathBuf>,

    /// Write panels, layout, metrics and warnings as JSON
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Reject out-of-range parameters instead of clamping them
    #[arg(long)]
    pub strict: bool,

    /// Lay panels out in a single row instead of packing them
    #[arg(long)]
    pub no_pack: bool,
}

/// Run one job and write the requested outputs. The summary goes to `out`.
pub fn run(args: &Args, out: &mut impl Write) -> Result<JobOutput> {
    let mut config = ProjectConfig::load_from_file(&args.config)
        .with_context(|| format!("Failed to load {}", args.config.display()))?;
    if args.no_pack {
        config.export.pack = false;
    }

    let output = run_job(&config, args.strict)?;

    if let Some(path) = &args.svg {
        write_svg(&output.layout, &config.export.svg, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated: {}", path.display());
    }
    if let Some(path) = &args.dxf {
        write_dxf(&output.layout, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated: {}", path.display());
    }
    if let Some(path) = &args.json {
        let json = serde_json::to_string_pretty(&output)?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Generated: {}", path.display());
    }

    write_summary(&output, out)?;
    Ok(output)
}

fn write_summary(output: &JobOutput, out: &mut impl Write) -> Result<()> {
    writeln!(
        out,
        "{}: {} panels on {:.1} x {:.1} mm",
        output.project,
        output.panels.len(),
        output.layout.width,
        output.layout.height
    )?;
    for panel in &output.metrics.panels {
        writeln!(
            out,
            "  {:<16} {:>9.1} mm2  cut {:>8.1} mm",
            panel.id, panel.area, panel.cut_length
        )?;
    }
    writeln!(
        out,
        "  total cut {:.1} mm, score {:.1} mm, engrave {:.1} mm",
        output.metrics.total_cut_length,
        output.metrics.total_score_length,
        output.metrics.total_engrave_length
    )?;
    for warning in &output.warnings {
        writeln!(out, "warning: {warning}")?;
    }
    Ok(())
}

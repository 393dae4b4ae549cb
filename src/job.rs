//! Job runner: config in, packed layout and warnings out.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tabforge_camtools::metrics::DesignMetrics;
use tabforge_camtools::nesting::{Layout, SheetPacker};
use tabforge_camtools::tabbed_box::Panel;
use tabforge_camtools::{SlidingDrawerMaker, TabbedBoxMaker};
use tabforge_settings::{Project, ProjectConfig};
use tracing::{info, warn};

#[derive(Debug, Clone, Serialize)]
pub struct JobOutput {
    pub project: &'static str,
    pub panels: Vec<Panel>,
    pub layout: Layout,
    pub metrics: DesignMetrics,
    /// Design warnings followed by packing warnings
    pub warnings: Vec<String>,
}

fn generate(project: &Project, strict: bool) -> Result<(Vec<Panel>, Vec<String>)> {
    Ok(match project {
        Project::Box(settings) => {
            let maker = if strict {
                TabbedBoxMaker::try_new(settings.clone()).context("Invalid box parameters")?
            } else {
                TabbedBoxMaker::new(settings.clone())
            };
            let design = maker.generate();
            (design.panels, design.warnings)
        }
        Project::Drawer(settings) => {
            let maker = if strict {
                SlidingDrawerMaker::try_new(settings.clone())
                    .context("Invalid drawer parameters")?
            } else {
                SlidingDrawerMaker::new(settings.clone())
            };
            let design = maker.generate();
            (design.panels, design.warnings)
        }
    })
}

/// Generate, decorate and lay out the project in `config`.
///
/// With `strict` the config is validated first and out-of-range parameters are
/// rejected instead of clamped.
pub fn run_job(config: &ProjectConfig, strict: bool) -> Result<JobOutput> {
    if strict {
        config.validate().context("Job file failed validation")?;
    }

    let (mut panels, mut warnings) = generate(&config.project, strict)?;

    for artwork in &config.artwork {
        let Some(panel) = panels.iter_mut().find(|p| p.id == artwork.panel) else {
            bail!("Artwork targets unknown panel '{}'", artwork.panel);
        };
        *panel = artwork
            .importer()
            .merge_onto(panel, &artwork.path_data)
            .with_context(|| format!("Failed to import artwork for panel '{}'", artwork.panel))?;
    }

    let packer = SheetPacker::new(config.sheet.clone());
    let layout = if config.export.pack {
        packer.pack(&panels)
    } else {
        packer.single_row(&panels)
    };
    warnings.extend(layout.warnings.iter().cloned());

    for warning in &warnings {
        warn!("{warning}");
    }
    info!(
        project = config.project.name(),
        panels = panels.len(),
        width = layout.width,
        height = layout.height,
        "Job complete"
    );

    Ok(JobOutput {
        project: config.project.name(),
        metrics: DesignMetrics::measure(&panels),
        panels: layout.panels.clone(),
        layout,
        warnings,
    })
}

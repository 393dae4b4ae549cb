//! Job configuration
//!
//! A job file describes one project (a box or a drawer), the stock sheet to
//! pack its panels onto, optional artwork to merge onto panels and the export
//! styling. Files are `.json` or `.toml`; every section has defaults so a file
//! only needs the values it changes.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tabforge_camtools::nesting::SheetSettings;
use tabforge_camtools::tabbed_box::{BoxSettings, CutKind, DrawerSettings};
use tabforge_designer::{ArtworkImporter, SvgExportOptions};
use tracing::debug;

/// What to generate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Project {
    Box(BoxSettings),
    Drawer(DrawerSettings),
}

impl Default for Project {
    fn default() -> Self {
        Project::Box(BoxSettings::default())
    }
}

impl Project {
    pub fn name(&self) -> &'static str {
        match self {
            Project::Box(_) => "box",
            Project::Drawer(_) => "drawer",
        }
    }
}

/// Path data merged onto one generated panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtworkSettings {
    /// Id of the target panel, e.g. `lid` or `drawer-front`
    pub panel: String,
    pub path_data: String,
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub flip_y: bool,
    pub kind: CutKind,
}

impl Default for ArtworkSettings {
    fn default() -> Self {
        Self {
            panel: String::new(),
            path_data: String::new(),
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            flip_y: true,
            kind: CutKind::Engrave,
        }
    }
}

impl ArtworkSettings {
    pub fn importer(&self) -> ArtworkImporter {
        ArtworkImporter::new(self.scale, self.offset_x, self.offset_y, self.kind)
            .with_flip_y(self.flip_y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Pack panels onto the sheet; otherwise lay them out in a single row
    pub pack: bool,
    pub svg: SvgExportOptions,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            pack: true,
            svg: SvgExportOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub project: Project,
    pub sheet: SheetSettings,
    pub artwork: Vec<ArtworkSettings>,
    pub export: ExportSettings,
}

enum Format {
    Json,
    Toml,
}

fn format_of(path: &Path) -> SettingsResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
    }
}

impl ProjectConfig {
    pub fn new(project: Project) -> Self {
        Self {
            project,
            ..Self::default()
        }
    }

    /// Load a job file (JSON or TOML).
    ///
    /// Only the file syntax is checked here; out-of-range geometry is clamped
    /// by the generators. Call [`ProjectConfig::validate`] to reject it instead.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = format_of(path)?;
        let content = std::fs::read_to_string(path)?;
        let config = match format {
            Format::Json => Self::from_json(&content)?,
            Format::Toml => Self::from_toml(&content)?,
        };
        debug!(path = %path.display(), project = config.project.name(), "Loaded job file");
        Ok(config)
    }

    /// Save a job file (JSON or TOML). The config is validated first.
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let format = format_of(path)?;
        self.validate()?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn from_json(content: &str) -> SettingsResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn from_toml(content: &str) -> SettingsResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Strict checks: project parameters, sheet extents and artwork.
    pub fn validate(&self) -> SettingsResult<()> {
        match &self.project {
            Project::Box(settings) => settings.validate()?,
            Project::Drawer(settings) => settings.validate()?,
        }

        for (key, value) in [("sheet.width", self.sheet.width), ("sheet.height", self.sheet.height)] {
            if let Some(value) = value {
                if !value.is_finite() || value <= 0.0 {
                    return Err(SettingsError::invalid(key, "must be > 0"));
                }
            }
        }
        if !self.sheet.spacing.is_finite() || self.sheet.spacing < 0.0 {
            return Err(SettingsError::invalid("sheet.spacing", "must be >= 0"));
        }

        for (index, artwork) in self.artwork.iter().enumerate() {
            if artwork.panel.is_empty() {
                return Err(SettingsError::invalid(
                    format!("artwork[{index}].panel"),
                    "must name a panel",
                ));
            }
            if !artwork.scale.is_finite() || artwork.scale <= 0.0 {
                return Err(SettingsError::invalid(
                    format!("artwork[{index}].scale"),
                    "must be > 0",
                ));
            }
        }

        for kind in CutKind::ALL {
            let width = self.export.svg.style(kind).stroke_width;
            if !width.is_finite() || width <= 0.0 {
                return Err(SettingsError::invalid(
                    format!("export.svg.{kind}.stroke_width"),
                    "must be > 0",
                ));
            }
        }

        Ok(())
    }
}

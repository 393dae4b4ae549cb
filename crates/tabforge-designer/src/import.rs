//! # Artwork Import
//!
//! Merges externally produced path data (logos, labels, vent patterns) onto a
//! generated panel as auxiliary cut, score or engrave paths.
//!
//! Supports:
//! - Scale and offset into the panel's coordinate space
//! - Optional vertical flip for y-down sources such as SVG
//! - Tagging every imported subpath with a laser operation

use crate::error::DesignerResult;
use crate::path_parser::{parse_path_data, Subpath};
use tabforge_camtools::tabbed_box::{CutKind, CutPath, Panel};
use tabforge_core::{Bounds, Point};
use tracing::debug;

/// Places path data onto panels.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtworkImporter {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    /// Mirror the artwork vertically about its own bounding box
    pub flip_y: bool,
    pub kind: CutKind,
}

impl Default for ArtworkImporter {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
            flip_y: true,
            kind: CutKind::Engrave,
        }
    }
}

impl ArtworkImporter {
    pub fn new(scale: f64, offset_x: f64, offset_y: f64, kind: CutKind) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
            kind,
            ..Self::default()
        }
    }

    pub fn with_flip_y(mut self, flip_y: bool) -> Self {
        self.flip_y = flip_y;
        self
    }

    /// Parse `data` and return its subpaths transformed into panel space.
    pub fn import(&self, data: &str) -> DesignerResult<Vec<CutPath>> {
        let subpaths = parse_path_data(data)?;
        let bounds = Bounds::from_points(subpaths.iter().flat_map(|s| s.points.iter()));
        let Some(bounds) = bounds else {
            return Ok(Vec::new());
        };

        Ok(subpaths
            .into_iter()
            .map(|subpath| self.transform(subpath, &bounds))
            .collect())
    }

    /// Copy of `panel` carrying the imported artwork.
    pub fn merge_onto(&self, panel: &Panel, data: &str) -> DesignerResult<Panel> {
        let paths = self.import(data)?;
        debug!(panel = %panel.id, paths = paths.len(), kind = %self.kind, "Merged artwork");
        Ok(paths
            .into_iter()
            .fold(panel.clone(), |panel, path| panel.with_cut_path(path)))
    }

    fn transform(&self, subpath: Subpath, bounds: &Bounds) -> CutPath {
        let points = subpath
            .points
            .iter()
            .map(|p| {
                let y = if self.flip_y {
                    bounds.min_y + bounds.max_y - p.y
                } else {
                    p.y
                };
                Point::new(
                    p.x * self.scale + self.offset_x,
                    y * self.scale + self.offset_y,
                )
            })
            .collect();
        CutPath::new(self.kind, points, subpath.closed)
    }
}

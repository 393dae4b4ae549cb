//! Panel metrics and cross-panel validation

use crate::tabbed_box::panel::{CutKind, Panel, PanelRole};
use serde::{Deserialize, Serialize};
use tabforge_core::constants::ALIGNMENT_EPSILON;
use tabforge_core::perimeter;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelMetrics {
    pub id: String,
    pub role: PanelRole,
    pub area: f64,
    /// Outline perimeter plus any auxiliary `cut` paths
    pub cut_length: f64,
    pub score_length: f64,
    pub engrave_length: f64,
    pub vertex_count: usize,
}

impl PanelMetrics {
    pub fn measure(panel: &Panel) -> Self {
        let aux_length = |kind: CutKind| -> f64 { panel.cut_paths_of(kind).map(|p| p.length()).sum() };
        Self {
            id: panel.id.clone(),
            role: panel.role,
            area: panel.area(),
            cut_length: perimeter(&panel.outline, true) + aux_length(CutKind::Cut),
            score_length: aux_length(CutKind::Score),
            engrave_length: aux_length(CutKind::Engrave),
            vertex_count: panel.outline.len(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DesignMetrics {
    pub panels: Vec<PanelMetrics>,
    pub total_area: f64,
    pub total_cut_length: f64,
    pub total_score_length: f64,
    pub total_engrave_length: f64,
    pub total_vertices: usize,
}

impl DesignMetrics {
    pub fn measure(panels: &[Panel]) -> Self {
        let panels: Vec<PanelMetrics> = panels.iter().map(PanelMetrics::measure).collect();
        Self {
            total_area: panels.iter().map(|m| m.area).sum(),
            total_cut_length: panels.iter().map(|m| m.cut_length).sum(),
            total_score_length: panels.iter().map(|m| m.score_length).sum(),
            total_engrave_length: panels.iter().map(|m| m.engrave_length).sum(),
            total_vertices: panels.iter().map(|m| m.vertex_count).sum(),
            panels,
        }
    }
}

/// Compare extents of panels that must line up once assembled: the bottom's
/// width against the front and back widths, and the bottom's depth against
/// the left and right widths. Returns one warning per mismatch.
pub fn check_alignment(panels: &[Panel]) -> Vec<String> {
    let Some(bottom) = panels.iter().find(|p| p.role == PanelRole::Bottom) else {
        return Vec::new();
    };

    panels
        .iter()
        .filter_map(|panel| {
            let expected = match panel.role {
                PanelRole::Front | PanelRole::Back => bottom.width,
                PanelRole::Left | PanelRole::Right => bottom.height,
                _ => return None,
            };
            let axis = if matches!(panel.role, PanelRole::Front | PanelRole::Back) {
                "width"
            } else {
                "depth"
            };
            ((panel.width - expected).abs() > ALIGNMENT_EPSILON).then(|| {
                format!(
                    "Panel '{}' width {:.3} mm does not match bottom {} {:.3} mm",
                    panel.id, panel.width, axis, expected
                )
            })
        })
        .collect()
}

//! Sliding drawer composer
//!
//! A drawer is two boxes: an open-front shell with a fixed top, and a closed,
//! lidless box sized from the shell cavity minus clearance whose front gets a
//! thumb notch.

use crate::error::CamToolResult;
use crate::tabbed_box::{
    carve_thumb_notch, BoxDimensions, BoxSettings, BoxStyle, DimensionReference, DrawerSettings,
    LidStyle, Panel, PanelRole, TabbedBoxMaker,
};
use serde::{Deserialize, Serialize};
use tabforge_core::constants::ALIGNMENT_EPSILON;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrawerDesign {
    pub shell: BoxDimensions,
    pub drawer: BoxDimensions,
    /// Space the drawer needs in the shell mouth, clearance included
    pub opening_width: f64,
    pub opening_height: f64,
    pub panels: Vec<Panel>,
    pub warnings: Vec<String>,
}

impl DrawerDesign {
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }
}

pub struct SlidingDrawerMaker {
    settings: DrawerSettings,
}

impl SlidingDrawerMaker {
    pub fn new(settings: DrawerSettings) -> Self {
        Self {
            settings: settings.sanitized(),
        }
    }

    pub fn try_new(settings: DrawerSettings) -> CamToolResult<Self> {
        settings.validate()?;
        Ok(Self::new(settings))
    }

    pub fn settings(&self) -> &DrawerSettings {
        &self.settings
    }

    pub fn shell_settings(&self) -> BoxSettings {
        let s = &self.settings;
        BoxSettings {
            width: s.width,
            height: s.height,
            depth: s.depth,
            reference: s.reference,
            thickness: s.thickness,
            kerf: s.kerf,
            apply_kerf: s.apply_kerf,
            box_style: BoxStyle::FingerAllEdges,
            lid: LidStyle::None,
            open_front: true,
            finger: s.finger.clone(),
            ..BoxSettings::default()
        }
    }

    pub fn generate(&self) -> DrawerDesign {
        let s = &self.settings;
        let mut warnings = Vec::new();

        let shell_design = TabbedBoxMaker::new(self.shell_settings()).generate();
        let shell = shell_design.dimensions;
        warnings.extend(shell_design.warnings);

        let raw = [
            ("width", shell.inner_width - s.clearance.width),
            (
                "height",
                shell.inner_height - s.clearance.height - s.bottom_offset,
            ),
            ("depth", shell.inner_depth - s.clearance.depth),
        ];
        for (axis, size) in raw {
            if size <= 0.0 {
                warnings.push(format!(
                    "Drawer {axis} is {size:.3} mm after clearance; clamped to the minimum size"
                ));
            }
        }

        let drawer_settings = BoxSettings {
            width: raw[0].1,
            height: raw[1].1,
            depth: raw[2].1,
            reference: DimensionReference::Outside,
            thickness: s.thickness,
            kerf: s.kerf,
            apply_kerf: s.apply_kerf,
            box_style: BoxStyle::FingerAllEdges,
            lid: LidStyle::None,
            open_front: false,
            finger: s.finger.clone(),
            ..BoxSettings::default()
        };
        let drawer_design = TabbedBoxMaker::new(drawer_settings).generate();
        let drawer = drawer_design.dimensions;
        warnings.extend(drawer_design.warnings);

        let opening_width = drawer.outer_width + s.clearance.width;
        let opening_height = drawer.outer_height + s.clearance.height + s.bottom_offset;
        debug!(
            drawer_width = drawer.outer_width,
            drawer_height = drawer.outer_height,
            drawer_depth = drawer.outer_depth,
            opening_width,
            opening_height,
            "Sized drawer"
        );

        if opening_height > shell.inner_height + ALIGNMENT_EPSILON {
            warnings.push(format!(
                "Drawer needs {opening_height:.3} mm of height but the shell opening is {:.3} mm",
                shell.inner_height
            ));
        }
        if opening_width > shell.inner_width + ALIGNMENT_EPSILON {
            warnings.push(format!(
                "Drawer needs {opening_width:.3} mm of width but the shell opening is {:.3} mm",
                shell.inner_width
            ));
        }
        if s.kerf > s.clearance.smallest() {
            warnings.push(format!(
                "Kerf {:.3} mm exceeds the smallest clearance {:.3} mm",
                s.kerf,
                s.clearance.smallest()
            ));
        }

        let shell_panels = shell_design
            .panels
            .into_iter()
            .map(|panel| panel.with_id_prefix("shell-"));
        let drawer_panels = drawer_design.panels.into_iter().map(|panel| {
            let panel = panel.with_id_prefix("drawer-");
            if panel.role == PanelRole::Front {
                self.drawer_front(panel)
            } else {
                panel
            }
        });
        let panels = shell_panels.chain(drawer_panels).collect();

        for warning in &warnings {
            warn!("{warning}");
        }

        DrawerDesign {
            shell,
            drawer,
            opening_width,
            opening_height,
            panels,
            warnings,
        }
    }

    fn drawer_front(&self, panel: Panel) -> Panel {
        let outline = carve_thumb_notch(&panel.outline, &self.settings.thumb_notch)
            .unwrap_or_else(|| panel.outline.clone());
        let mut front = Panel::from_outline(panel.id, PanelRole::DrawerFront, outline);
        front.cut_paths = panel.cut_paths;
        front
    }
}

/// Generate a shell and drawer in one call.
pub fn compose_drawer(settings: &DrawerSettings) -> DrawerDesign {
    SlidingDrawerMaker::new(settings.clone()).generate()
}

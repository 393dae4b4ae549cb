//! Tabbed Box Maker
//!
//! Turns [`BoxSettings`] into flat, finger-jointed panels. Every seam uses one
//! [`FingerPattern`] computed from the shared edge length; one panel takes it
//! as `Tab` and its neighbour as `Slot`, so mating edges are complementary by
//! construction.

pub mod assembler;
pub mod dimensions;
pub mod dividers;
pub mod edge;
pub mod finger;
pub mod lid;
pub mod notch;
pub mod outline;
pub mod panel;
pub mod types;

pub use assembler::{EdgeJoint, PanelAssembler, PanelSpec, Side};
pub use dimensions::BoxDimensions;
pub use edge::{build_edge, EdgeBuilder, EdgeDirection};
pub use finger::{FingerPattern, FingerSegment};
pub use notch::carve_thumb_notch;
pub use outline::{offset_outline, simplify_closed};
pub use panel::{CutKind, CutPath, Panel, PanelRole};
pub use types::{
    BoxSettings, BoxStyle, DimensionReference, DividerSettings, DrawerClearance, DrawerSettings,
    FingerSettings, GrooveSettings, LidStyle, LipSettings, ThumbNotchSettings,
};

use crate::error::CamToolResult;
use crate::metrics::check_alignment;
use serde::{Deserialize, Serialize};
use tabforge_core::constants::POINT_EPSILON;
use tracing::{debug, warn};

/// Everything generated for one box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxDesign {
    pub dimensions: BoxDimensions,
    pub wall_height: f64,
    pub panels: Vec<Panel>,
    pub warnings: Vec<String>,
}

impl BoxDesign {
    pub fn panel(&self, id: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.id == id)
    }
}

pub struct TabbedBoxMaker {
    settings: BoxSettings,
    dimensions: BoxDimensions,
    assembler: PanelAssembler,
}

impl TabbedBoxMaker {
    /// Build a maker from clamped settings; never fails.
    pub fn new(settings: BoxSettings) -> Self {
        let settings = settings.sanitized();
        let dimensions = BoxDimensions::derive(&settings);
        let assembler = PanelAssembler::new(settings.kerf_offset());
        Self {
            settings,
            dimensions,
            assembler,
        }
    }

    /// Like [`TabbedBoxMaker::new`] but rejects out-of-range settings instead of clamping.
    pub fn try_new(settings: BoxSettings) -> CamToolResult<Self> {
        settings.validate()?;
        Ok(Self::new(settings))
    }

    pub fn settings(&self) -> &BoxSettings {
        &self.settings
    }

    pub fn dimensions(&self) -> &BoxDimensions {
        &self.dimensions
    }

    pub fn wall_height(&self) -> f64 {
        self.dimensions.wall_height(&self.settings)
    }

    pub fn generate(&self) -> BoxDesign {
        let settings = &self.settings;
        debug!(
            style = ?settings.box_style,
            lid = ?settings.lid,
            open_front = settings.open_front,
            outer_width = self.dimensions.outer_width,
            outer_height = self.dimensions.outer_height,
            outer_depth = self.dimensions.outer_depth,
            "Generating box"
        );

        let mut panels = match (settings.box_style, settings.open_front) {
            (BoxStyle::FingerAllEdges, false) => self.finger_all_edges(),
            (BoxStyle::FingerAllEdges, true) => self.finger_all_edges_open_front(),
            (BoxStyle::FingerVerticalEdges, open_front) => self.finger_vertical_edges(open_front),
        };

        if !settings.open_front {
            if settings.lid == LidStyle::SlidingLid {
                if let Some(groove) =
                    lid::sliding_groove(settings, &self.dimensions, self.wall_height())
                {
                    for panel in panels
                        .iter_mut()
                        .filter(|p| matches!(p.role, PanelRole::Left | PanelRole::Right))
                    {
                        panel.cut_paths.push(groove.clone());
                    }
                }
            }
            panels.extend(lid::build_lid(settings, &self.dimensions, &self.assembler));
        }

        panels.extend(dividers::build_dividers(
            settings,
            &self.dimensions,
            &self.assembler,
        ));

        let mut warnings = check_alignment(&panels);
        warnings.extend(self.kerf_warning());
        for warning in &warnings {
            warn!("{warning}");
        }

        BoxDesign {
            dimensions: self.dimensions,
            wall_height: self.wall_height(),
            panels,
            warnings,
        }
    }

    fn pattern(&self, length: f64) -> FingerPattern {
        let finger = &self.settings.finger;
        FingerPattern::generate(length, finger.min_finger, finger.max_finger)
    }

    /// Pattern shared by the vertical seams in vertical-edge mode.
    fn vertical_pattern(&self) -> FingerPattern {
        let wall = self.wall_height();
        let tabs = match self.settings.finger.tab_count {
            Some(count) => count as usize,
            None => self.pattern(wall).tab_count(),
        };
        FingerPattern::with_tab_count(wall, tabs)
    }

    /// Finger width of the narrowest seam the current style cuts.
    fn narrowest_finger(&self) -> f64 {
        let dims = &self.dimensions;
        match self.settings.box_style {
            BoxStyle::FingerAllEdges => [dims.outer_width, dims.outer_depth, self.wall_height()]
                .into_iter()
                .map(|length| self.pattern(length).finger_width)
                .fold(f64::INFINITY, f64::min),
            BoxStyle::FingerVerticalEdges => self.vertical_pattern().finger_width,
        }
    }

    /// Compensating by the full kerf leaves no gap between fingers this narrow.
    fn kerf_warning(&self) -> Option<String> {
        let settings = &self.settings;
        if !settings.apply_kerf {
            return None;
        }
        let finger = self.narrowest_finger();
        (finger <= settings.kerf + POINT_EPSILON).then(|| {
            format!(
                "Kerf {:.3} mm closes the {:.3} mm finger gaps; joints will not mate",
                settings.kerf, finger
            )
        })
    }

    fn finger_all_edges(&self) -> Vec<Panel> {
        let dims = &self.dimensions;
        let t = self.settings.thickness;
        let wall = self.wall_height();
        let p_w = self.pattern(dims.outer_width);
        let p_d = self.pattern(dims.outer_depth);
        let p_h = self.pattern(wall);

        let front_spec = PanelSpec::new(dims.outer_width, wall, t)
            .bottom(EdgeJoint::Tab(p_w.clone()))
            .right(EdgeJoint::Tab(p_h.clone()))
            .left(EdgeJoint::Tab(p_h.clone()));
        let side_spec = PanelSpec::new(dims.outer_depth, wall, t)
            .bottom(EdgeJoint::Tab(p_d.clone()))
            .right(EdgeJoint::Slot(p_h.clone()))
            .left(EdgeJoint::Slot(p_h));
        let bottom_spec = PanelSpec::new(dims.outer_width, dims.outer_depth, t)
            .bottom(EdgeJoint::Slot(p_w.clone()))
            .top(EdgeJoint::Slot(p_w))
            .right(EdgeJoint::Slot(p_d.clone()))
            .left(EdgeJoint::Slot(p_d));

        let front = self.assembler.assemble("front", PanelRole::Front, &front_spec);
        let back = front.renamed("back", PanelRole::Back);
        let left = self.assembler.assemble("left", PanelRole::Left, &side_spec);
        let right = left.renamed("right", PanelRole::Right);
        let bottom = self
            .assembler
            .assemble("bottom", PanelRole::Bottom, &bottom_spec);

        vec![front, back, left, right, bottom]
    }

    fn finger_all_edges_open_front(&self) -> Vec<Panel> {
        let dims = &self.dimensions;
        let t = self.settings.thickness;
        let wall = self.wall_height();
        let p_w = self.pattern(dims.outer_width);
        let p_d = self.pattern(dims.outer_depth);
        let p_h = self.pattern(wall);

        let back_spec = PanelSpec::new(dims.outer_width, wall, t)
            .bottom(EdgeJoint::Tab(p_w.clone()))
            .right(EdgeJoint::Tab(p_h.clone()))
            .top(EdgeJoint::Tab(p_w.clone()))
            .left(EdgeJoint::Tab(p_h.clone()));
        // Left wall seen from outside: front on its left edge, back on its right.
        let left_spec = PanelSpec::new(dims.outer_depth, wall, t)
            .bottom(EdgeJoint::Tab(p_d.clone()))
            .right(EdgeJoint::Slot(p_h.clone()))
            .top(EdgeJoint::Tab(p_d.clone()));
        let right_spec = PanelSpec::new(dims.outer_depth, wall, t)
            .bottom(EdgeJoint::Tab(p_d.clone()))
            .top(EdgeJoint::Tab(p_d.clone()))
            .left(EdgeJoint::Slot(p_h));
        let cap_spec = PanelSpec::new(dims.outer_width, dims.outer_depth, t)
            .right(EdgeJoint::Slot(p_d.clone()))
            .top(EdgeJoint::Slot(p_w))
            .left(EdgeJoint::Slot(p_d));

        let bottom = self
            .assembler
            .assemble("bottom", PanelRole::Bottom, &cap_spec);
        let top = bottom.renamed("top", PanelRole::Top);
        vec![
            self.assembler.assemble("back", PanelRole::Back, &back_spec),
            self.assembler.assemble("left", PanelRole::Left, &left_spec),
            self.assembler.assemble("right", PanelRole::Right, &right_spec),
            bottom,
            top,
        ]
    }

    fn finger_vertical_edges(&self, open_front: bool) -> Vec<Panel> {
        let dims = &self.dimensions;
        let t = self.settings.thickness;
        let wall = self.wall_height();
        let p_h = self.vertical_pattern();
        debug!(tabs = p_h.tab_count(), "Vertical seam tab count");

        let front_spec = PanelSpec::new(dims.outer_width, wall, t)
            .right(EdgeJoint::Tab(p_h.clone()))
            .left(EdgeJoint::Tab(p_h.clone()));
        let back = self.assembler.assemble("back", PanelRole::Back, &front_spec);
        let bottom = self.assembler.rectangle(
            "bottom",
            PanelRole::Bottom,
            dims.outer_width,
            dims.outer_depth,
        );

        if open_front {
            let left_spec = PanelSpec::new(dims.outer_depth, wall, t)
                .right(EdgeJoint::Slot(p_h.clone()));
            let right_spec = PanelSpec::new(dims.outer_depth, wall, t).left(EdgeJoint::Slot(p_h));
            let top = bottom.renamed("top", PanelRole::Top);
            vec![
                back,
                self.assembler.assemble("left", PanelRole::Left, &left_spec),
                self.assembler.assemble("right", PanelRole::Right, &right_spec),
                bottom,
                top,
            ]
        } else {
            let side_spec = PanelSpec::new(dims.outer_depth, wall, t)
                .right(EdgeJoint::Slot(p_h.clone()))
                .left(EdgeJoint::Slot(p_h));
            let front = back.renamed("front", PanelRole::Front);
            let left = self.assembler.assemble("left", PanelRole::Left, &side_spec);
            let right = left.renamed("right", PanelRole::Right);
            vec![front, back, left, right, bottom]
        }
    }
}

/// Generate a box in one call.
pub fn compose_box(settings: &BoxSettings) -> BoxDesign {
    TabbedBoxMaker::new(settings.clone()).generate()
}

//! Lid panels and sliding-lid grooves

use super::assembler::PanelAssembler;
use super::dimensions::BoxDimensions;
use super::panel::{CutKind, CutPath, Panel, PanelRole};
use super::types::{BoxSettings, LidStyle};
use tabforge_core::constants::MIN_DIMENSION;
use tracing::debug;

/// Panels making up the lid for `settings.lid`; empty for [`LidStyle::None`].
pub fn build_lid(
    settings: &BoxSettings,
    dims: &BoxDimensions,
    assembler: &PanelAssembler,
) -> Vec<Panel> {
    let t = settings.thickness;
    match settings.lid {
        LidStyle::None => Vec::new(),
        LidStyle::FlatLid => vec![assembler.rectangle(
            "lid",
            PanelRole::Lid,
            dims.outer_width,
            dims.outer_depth,
        )],
        LidStyle::FlatLidWithLip => {
            let inset = settings.lip.inset;
            let lip_width = (dims.inner_width - 2.0 * inset).max(MIN_DIMENSION);
            let lip_depth = (dims.inner_depth - 2.0 * inset).max(MIN_DIMENSION);
            let side_length = (lip_depth - 2.0 * t).max(MIN_DIMENSION);
            let height = settings.lip.height;

            let guide = CutPath::rectangle(CutKind::Score, t + inset, t + inset, lip_width, lip_depth);
            let lid = assembler
                .rectangle("lid", PanelRole::Lid, dims.outer_width, dims.outer_depth)
                .with_cut_path(guide);

            debug!(lip_width, lip_depth, side_length, "Built lid lip");
            vec![
                lid,
                assembler.rectangle("lid-lip-front", PanelRole::LidLip, lip_width, height),
                assembler.rectangle("lid-lip-back", PanelRole::LidLip, lip_width, height),
                assembler.rectangle("lid-lip-left", PanelRole::LidLip, side_length, height),
                assembler.rectangle("lid-lip-right", PanelRole::LidLip, side_length, height),
            ]
        }
        LidStyle::SlidingLid => vec![assembler.rectangle(
            "lid",
            PanelRole::Lid,
            dims.inner_width,
            dims.inner_depth,
        )],
    }
}

/// Score line guiding a sliding lid, drawn on the left and right walls.
///
/// It spans the inner depth, its top sits `groove.offset` below the wall top
/// and it is `min(groove.depth, wall_height - groove.offset)` tall. `None`
/// when the offset leaves no room on the wall.
pub fn sliding_groove(
    settings: &BoxSettings,
    dims: &BoxDimensions,
    wall_height: f64,
) -> Option<CutPath> {
    let top = wall_height - settings.groove.offset;
    let height = settings.groove.depth.min(top);
    if height <= 0.0 {
        return None;
    }
    Some(CutPath::rectangle(
        CutKind::Score,
        settings.thickness,
        top - height,
        dims.inner_depth,
        height,
    ))
}

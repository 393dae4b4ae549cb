//! Slotted divider strips
//!
//! Dividers running along the depth (`divider-x`) are slotted from the top and
//! those running along the width (`divider-z`) from the bottom, so each
//! crossing pair slides together halfway.

use super::assembler::PanelAssembler;
use super::dimensions::BoxDimensions;
use super::outline::simplify_closed;
use super::panel::{Panel, PanelRole};
use super::types::BoxSettings;
use tabforge_core::constants::MIN_THICKNESS;
use tabforge_core::Point;
use tracing::debug;

pub fn build_dividers(
    settings: &BoxSettings,
    dims: &BoxDimensions,
    assembler: &PanelAssembler,
) -> Vec<Panel> {
    let grid = &settings.dividers;
    if !grid.enabled() {
        return Vec::new();
    }

    let height = dims.inner_height;
    let slot_width = (settings.thickness + grid.clearance).max(MIN_THICKNESS);
    let slot_depth = height / 2.0;

    let x_slots: Vec<f64> = (1..grid.count_z)
        .map(|j| j as f64 * dims.inner_depth / grid.count_z as f64)
        .collect();
    let z_slots: Vec<f64> = (1..grid.count_x)
        .map(|i| i as f64 * dims.inner_width / grid.count_x as f64)
        .collect();

    debug!(
        count_x = grid.count_x,
        count_z = grid.count_z,
        slot_width,
        slot_depth,
        "Building dividers"
    );

    let x_outline = assembler.finish(&carve_slots(
        dims.inner_depth,
        height,
        &x_slots,
        slot_width,
        slot_depth,
        true,
    ));
    let z_outline = assembler.finish(&carve_slots(
        dims.inner_width,
        height,
        &z_slots,
        slot_width,
        slot_depth,
        false,
    ));

    let x_dividers = (1..grid.count_x).map(|n| {
        Panel::from_outline(
            format!("divider-x-{n}"),
            PanelRole::DividerX,
            x_outline.clone(),
        )
    });
    let z_dividers = (1..grid.count_z).map(|n| {
        Panel::from_outline(
            format!("divider-z-{n}"),
            PanelRole::DividerZ,
            z_outline.clone(),
        )
    });
    x_dividers.chain(z_dividers).collect()
}

/// Outline of a `width` x `height` strip with rectangular slots centred on
/// `centers`, cut `depth` deep from the top or bottom edge. Slot edges are
/// clamped to the strip.
pub fn carve_slots(
    width: f64,
    height: f64,
    centers: &[f64],
    slot_width: f64,
    depth: f64,
    from_top: bool,
) -> Vec<Point> {
    let mut slots: Vec<(f64, f64)> = centers
        .iter()
        .map(|c| {
            (
                (c - slot_width / 2.0).clamp(0.0, width),
                (c + slot_width / 2.0).clamp(0.0, width),
            )
        })
        .collect();
    slots.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut points = vec![Point::new(0.0, 0.0)];
    if from_top {
        points.push(Point::new(width, 0.0));
        points.push(Point::new(width, height));
        for &(start, end) in slots.iter().rev() {
            points.extend([
                Point::new(end, height),
                Point::new(end, height - depth),
                Point::new(start, height - depth),
                Point::new(start, height),
            ]);
        }
        points.push(Point::new(0.0, height));
    } else {
        for &(start, end) in &slots {
            points.extend([
                Point::new(start, 0.0),
                Point::new(start, depth),
                Point::new(end, depth),
                Point::new(end, 0.0),
            ]);
        }
        points.push(Point::new(width, 0.0));
        points.push(Point::new(width, height));
        points.push(Point::new(0.0, height));
    }

    simplify_closed(&points)
}

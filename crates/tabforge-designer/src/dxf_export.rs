//! # DXF Export
//!
//! Writes a packed [`Layout`] as an R2000 DXF drawing with one layer per laser
//! operation (`CUT`, `SCORE`, `ENGRAVE`). Every path becomes a lightweight
//! polyline; DXF is y-up so sheet coordinates are flipped on the way out.

use dxf::entities::{Entity, EntityType, LwPolyline};
use dxf::enums::AcadVersion;
use dxf::tables::Layer;
use dxf::{Color, Drawing, LwPolylineVertex};
use std::path::Path;
use tabforge_camtools::nesting::Layout;
use tabforge_camtools::tabbed_box::CutKind;
use tabforge_core::Point;
use tracing::{debug, info};

use crate::error::DesignerResult;
use crate::svg_export::sheet_paths;

/// Layer name used for `kind`.
pub fn layer_name(kind: CutKind) -> &'static str {
    match kind {
        CutKind::Cut => "CUT",
        CutKind::Score => "SCORE",
        CutKind::Engrave => "ENGRAVE",
    }
}

fn layer_color(kind: CutKind) -> Color {
    match kind {
        CutKind::Cut => Color::from_index(1),
        CutKind::Score => Color::from_index(5),
        CutKind::Engrave => Color::from_index(7),
    }
}

fn polyline(points: &[Point], closed: bool, sheet_height: f64) -> LwPolyline {
    let mut points = points.to_vec();
    let closed = closed
        || match (points.first(), points.last()) {
            (Some(first), Some(last)) if points.len() > 2 => first.coincides(last),
            _ => false,
        };
    if closed && points.len() > 2 {
        if let (Some(first), Some(last)) = (points.first(), points.last()) {
            if first.coincides(last) {
                points.pop();
            }
        }
    }

    let vertices = points
        .iter()
        .map(|p| LwPolylineVertex {
            x: p.x,
            y: sheet_height - p.y,
            ..Default::default()
        })
        .collect();
    let mut poly = LwPolyline {
        vertices,
        ..Default::default()
    };
    poly.set_is_closed(closed);
    poly
}

/// Build the DXF drawing for `layout`. Overflowing placements are left out.
pub fn layout_drawing(layout: &Layout) -> Drawing {
    let mut drawing = Drawing::new();
    drawing.header.version = AcadVersion::R2000;

    for kind in CutKind::ALL {
        drawing.add_layer(Layer {
            name: layer_name(kind).to_string(),
            color: layer_color(kind),
            ..Default::default()
        });
    }

    let mut count = 0usize;
    for face in layout.placements.iter().filter(|p| !p.overflow) {
        for kind in CutKind::ALL {
            for (points, closed) in sheet_paths(face, kind) {
                if points.len() < 2 {
                    continue;
                }
                let mut entity = Entity::new(EntityType::LwPolyline(polyline(
                    &points,
                    closed,
                    layout.height,
                )));
                entity.common.layer = layer_name(kind).to_string();
                drawing.add_entity(entity);
                count += 1;
            }
        }
    }

    debug!(entities = count, "Built DXF drawing");
    drawing
}

/// Serialise `layout` to DXF bytes.
pub fn export_layout_dxf(layout: &Layout) -> DesignerResult<Vec<u8>> {
    let drawing = layout_drawing(layout);
    let mut buffer = Vec::new();
    drawing.save(&mut buffer)?;
    Ok(buffer)
}

pub fn write_dxf(layout: &Layout, path: &Path) -> DesignerResult<()> {
    let bytes = export_layout_dxf(layout)?;
    std::fs::write(path, &bytes)?;
    info!("Wrote DXF layout to {}", path.display());
    Ok(())
}

//! # SVG Export
//!
//! Writes a packed [`Layout`] as a millimetre-sized SVG document with one
//! group per laser operation, so cut, score and engrave paths can be mapped to
//! separate power settings in the laser software.

use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::path::Path;
use tabforge_camtools::nesting::{Layout, PlacedFace};
use tabforge_camtools::tabbed_box::CutKind;
use tabforge_core::{format_coord, format_path_data, Point};
use tracing::debug;

use crate::error::DesignerResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgStyle {
    pub stroke: String,
    pub stroke_width: f64,
}

impl SvgStyle {
    fn new(stroke: &str) -> Self {
        Self {
            stroke: stroke.to_string(),
            stroke_width: 0.1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgExportOptions {
    pub cut: SvgStyle,
    pub score: SvgStyle,
    pub engrave: SvgStyle,
    /// Emit a `<title>` per panel with its id
    pub label_panels: bool,
}

impl Default for SvgExportOptions {
    fn default() -> Self {
        Self {
            cut: SvgStyle::new("#ff0000"),
            score: SvgStyle::new("#0000ff"),
            engrave: SvgStyle::new("#000000"),
            label_panels: true,
        }
    }
}

impl SvgExportOptions {
    pub fn style(&self, kind: CutKind) -> &SvgStyle {
        match kind {
            CutKind::Cut => &self.cut,
            CutKind::Score => &self.score,
            CutKind::Engrave => &self.engrave,
        }
    }
}

/// Every path of `kind` on a placed panel, in sheet coordinates.
pub(crate) fn sheet_paths(face: &PlacedFace, kind: CutKind) -> Vec<(Vec<Point>, bool)> {
    let mut paths = Vec::new();
    if kind == CutKind::Cut {
        paths.push((face.sheet_outline(), true));
    }
    for path in face.panel.cut_paths_of(kind) {
        let points = path.points.iter().map(|p| face.to_sheet(p)).collect();
        paths.push((points, path.closed));
    }
    paths
}

/// Render `layout` as an SVG document. Overflowing placements are left out.
pub fn export_layout_svg(layout: &Layout, options: &SvgExportOptions) -> String {
    let width = format_coord(layout.width);
    let height = format_coord(layout.height);
    let mut svg = String::new();

    let _ = writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}mm" height="{height}mm" viewBox="0 0 {width} {height}">"#
    );

    let placed: Vec<&PlacedFace> = layout.placements.iter().filter(|p| !p.overflow).collect();
    for kind in CutKind::ALL {
        let style = options.style(kind);
        let _ = writeln!(
            svg,
            r#"  <g id="{kind}" stroke="{}" fill="none" stroke-width="{}">"#,
            escape_xml(&style.stroke),
            format_coord(style.stroke_width)
        );
        for face in &placed {
            for (points, closed) in sheet_paths(face, kind) {
                if points.len() < 2 {
                    continue;
                }
                let data = format_path_data(&points, closed);
                if options.label_panels {
                    let _ = writeln!(
                        svg,
                        r#"    <path d="{data}"><title>{}</title></path>"#,
                        escape_xml(&face.panel.id)
                    );
                } else {
                    let _ = writeln!(svg, r#"    <path d="{data}"/>"#);
                }
            }
        }
        let _ = writeln!(svg, "  </g>");
    }
    svg.push_str("</svg>\n");

    debug!(panels = placed.len(), bytes = svg.len(), "Rendered SVG layout");
    svg
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

pub fn write_svg(layout: &Layout, options: &SvgExportOptions, path: &Path) -> DesignerResult<()> {
    std::fs::write(path, export_layout_svg(layout, options))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabforge_camtools::nesting::{SheetPacker, SheetSettings};
    use tabforge_camtools::tabbed_box::{CutPath, Panel, PanelRole};

    fn layout() -> Layout {
        let panel = Panel::from_outline(
            "lid",
            PanelRole::Lid,
            vec![
                Point::new(0.0, 0.0),
                Point::new(20.0, 0.0),
                Point::new(20.0, 10.0),
                Point::new(0.0, 10.0),
            ],
        )
        .with_cut_path(CutPath::rectangle(CutKind::Score, 2.0, 2.0, 4.0, 4.0));
        SheetPacker::new(SheetSettings::virtual_sheet(0.0)).pack(&[panel])
    }

    #[test]
    fn test_groups_per_operation() {
        let svg = export_layout_svg(&layout(), &SvgExportOptions::default());
        assert!(svg.contains(r##"<g id="cut" stroke="#ff0000""##));
        assert!(svg.contains(r##"<g id="score" stroke="#0000ff""##));
        assert!(svg.contains(r##"<g id="engrave" stroke="#000000""##));
        assert!(svg.contains(r#"width="20.000mm""#));
        assert!(svg.contains(r#"viewBox="0 0 20.000 10.000""#));
        assert_eq!(svg.matches("<path").count(), 2);
    }

    #[test]
    fn test_ids_and_colours_are_escaped() {
        let mut layout = layout();
        layout.placements[0].panel.id = r#"lid <"A&B">"#.to_string();
        let options = SvgExportOptions {
            cut: SvgStyle::new(r#"red" onload="x"#),
            ..SvgExportOptions::default()
        };
        let svg = export_layout_svg(&layout, &options);
        assert!(svg.contains("<title>lid &lt;&quot;A&amp;B&quot;&gt;</title>"));
        assert!(svg.contains(r#"stroke="red&quot; onload=&quot;x""#));
        assert!(!svg.contains("<\"A"));
    }

    #[test]
    fn test_outline_is_flipped_to_sheet_space() {
        let svg = export_layout_svg(
            &layout(),
            &SvgExportOptions {
                label_panels: false,
                ..SvgExportOptions::default()
            },
        );
        assert!(svg.contains(r#"<path d="M0.000 10.000 H20.000 V0.000 H0.000 Z"/>"#));
        assert!(svg.contains(r#"<path d="M2.000 8.000 H6.000 V4.000 H2.000 Z"/>"#));
    }
}

use std::fs;
use tabforge_camtools::nesting::{SheetPacker, SheetSettings};
use tabforge_camtools::tabbed_box::{compose_box, BoxSettings, CutKind, CutPath, LidStyle, Panel, PanelRole};
use tabforge_core::Point;
use tabforge_designer::{export_layout_svg, parse_path_data, write_svg, SvgExportOptions};
use tempfile::TempDir;

#[test]
fn test_every_panel_is_exported() {
    let design = compose_box(&BoxSettings {
        lid: LidStyle::FlatLidWithLip,
        ..BoxSettings::default()
    });
    let layout = SheetPacker::new(SheetSettings::virtual_sheet(5.0)).pack(&design.panels);
    let svg = export_layout_svg(&layout, &SvgExportOptions::default());

    for panel in &design.panels {
        assert!(svg.contains(&format!("<title>{}</title>", panel.id)), "{}", panel.id);
    }
    let scores: usize = design
        .panels
        .iter()
        .map(|p| p.cut_paths_of(CutKind::Score).count())
        .sum();
    let cuts: usize = design.panels.len()
        + design
            .panels
            .iter()
            .map(|p| p.cut_paths_of(CutKind::Cut).count())
            .sum::<usize>();
    assert_eq!(svg.matches("<path").count(), cuts + scores);
}

#[test]
fn test_exported_paths_stay_inside_view_box() {
    let design = compose_box(&BoxSettings::default());
    let layout = SheetPacker::new(SheetSettings::default()).pack(&design.panels);
    let svg = export_layout_svg(
        &layout,
        &SvgExportOptions {
            label_panels: false,
            ..SvgExportOptions::default()
        },
    );

    for line in svg.lines().filter(|l| l.contains("<path d=\"")) {
        let start = line.find("d=\"").unwrap() + 3;
        let end = start + line[start..].find('"').unwrap();
        for subpath in parse_path_data(&line[start..end]).unwrap() {
            for p in subpath.points {
                assert!(p.x >= -1e-3 && p.x <= layout.width + 1e-3);
                assert!(p.y >= -1e-3 && p.y <= layout.height + 1e-3);
            }
        }
    }
}

#[test]
fn test_overflow_is_skipped() {
    let big = Panel::from_outline(
        "huge",
        PanelRole::Bottom,
        vec![
            Point::new(0.0, 0.0),
            Point::new(500.0, 0.0),
            Point::new(500.0, 500.0),
            Point::new(0.0, 500.0),
        ],
    )
    .with_cut_path(CutPath::rectangle(CutKind::Engrave, 1.0, 1.0, 5.0, 5.0));
    let layout = SheetPacker::new(SheetSettings {
        width: Some(100.0),
        height: Some(100.0),
        spacing: 0.0,
        auto_rotate: true,
    })
    .pack(&[big]);
    let svg = export_layout_svg(&layout, &SvgExportOptions::default());
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("huge"));
}

#[test]
fn test_write_svg_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("box.svg");
    let design = compose_box(&BoxSettings::default());
    let layout = SheetPacker::new(SheetSettings::default()).pack(&design.panels);
    write_svg(&layout, &SvgExportOptions::default(), &path).unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("<?xml"));
    assert!(content.trim_end().ends_with("</svg>"));
}

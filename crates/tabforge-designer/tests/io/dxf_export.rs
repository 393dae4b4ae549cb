use dxf::entities::EntityType;
use dxf::Drawing;
use std::io::Cursor;
use tabforge_camtools::nesting::{SheetPacker, SheetSettings};
use tabforge_camtools::tabbed_box::{compose_box, BoxSettings, CutKind, LidStyle};
use tabforge_designer::{export_layout_dxf, write_dxf};
use tempfile::TempDir;

fn lipped_layout() -> tabforge_camtools::Layout {
    let design = compose_box(&BoxSettings {
        lid: LidStyle::FlatLidWithLip,
        ..BoxSettings::default()
    });
    SheetPacker::new(SheetSettings::virtual_sheet(5.0)).pack(&design.panels)
}

#[test]
fn test_layers_and_entities() {
    let layout = lipped_layout();
    let bytes = export_layout_dxf(&layout).unwrap();
    let drawing = Drawing::load(&mut Cursor::new(bytes)).unwrap();

    let layers: Vec<String> = drawing.layers().map(|l| l.name.clone()).collect();
    for name in ["CUT", "SCORE", "ENGRAVE"] {
        assert!(layers.iter().any(|l| l == name), "missing layer {name}");
    }

    let mut cut = 0;
    let mut score = 0;
    for entity in drawing.entities() {
        match &entity.specific {
            EntityType::LwPolyline(poly) => {
                assert!(poly.vertices.len() >= 2);
                match entity.common.layer.as_str() {
                    "CUT" => {
                        assert_eq!(poly.flags & 1, 1);
                        cut += 1;
                    }
                    "SCORE" => score += 1,
                    other => panic!("unexpected layer {other}"),
                }
            }
            other => panic!("unexpected entity {other:?}"),
        }
    }

    let expected_scores: usize = layout
        .placements
        .iter()
        .map(|p| p.panel.cut_paths_of(CutKind::Score).count())
        .sum();
    assert_eq!(cut, layout.placements.len());
    assert_eq!(score, expected_scores);
    assert!(score > 0);
}

#[test]
fn test_coordinates_are_y_up() {
    let layout = lipped_layout();
    let bytes = export_layout_dxf(&layout).unwrap();
    let drawing = Drawing::load(&mut Cursor::new(bytes)).unwrap();
    for entity in drawing.entities() {
        if let EntityType::LwPolyline(poly) = &entity.specific {
            for v in &poly.vertices {
                assert!(v.y >= -1e-6 && v.y <= layout.height + 1e-6);
                assert!(v.x >= -1e-6 && v.x <= layout.width + 1e-6);
            }
        }
    }
}

#[test]
fn test_write_dxf_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("box.dxf");
    write_dxf(&lipped_layout(), &path).unwrap();
    let mut file = std::fs::File::open(&path).unwrap();
    let drawing = Drawing::load(&mut file).unwrap();
    assert!(drawing.entities().count() > 0);
}

//! Sheet packing scenarios

use tabforge_camtools::nesting::{SheetPacker, SheetSettings};
use tabforge_camtools::tabbed_box::{compose_box, BoxSettings, LidStyle, Panel, PanelRole};
use tabforge_core::Point;

fn square(id: &str, size: f64) -> Panel {
    Panel::from_outline(
        id,
        PanelRole::Front,
        vec![
            Point::new(0.0, 0.0),
            Point::new(size, 0.0),
            Point::new(size, size),
            Point::new(0.0, size),
        ],
    )
}

#[test]
fn test_scenario_fifth_square_overflows() {
    let panels: Vec<Panel> = (1..=5).map(|i| square(&format!("p{i}"), 50.0)).collect();
    let packer = SheetPacker::new(SheetSettings {
        width: Some(120.0),
        height: Some(120.0),
        spacing: 10.0,
        auto_rotate: true,
    });
    let layout = packer.pack(&panels);

    let placed: Vec<(f64, f64)> = layout
        .placements
        .iter()
        .filter(|p| !p.overflow)
        .map(|p| (p.x, p.y))
        .collect();
    assert_eq!(placed, vec![(0.0, 0.0), (60.0, 0.0), (0.0, 60.0), (60.0, 60.0)]);
    assert_eq!(layout.overflow_count(), 1);

    let overflow = layout.placements.iter().find(|p| p.overflow).unwrap();
    assert_eq!(overflow.panel.id, "p5");
    assert_eq!((overflow.x, overflow.y), (0.0, 0.0));

    assert_eq!(layout.warnings.len(), 1);
    assert!(layout.warnings[0].contains("p5"));
    assert!(layout.warnings[0].contains("50.000 x 50.000"));

    assert_eq!(layout.width, 120.0);
    assert_eq!(layout.height, 120.0);
    assert_eq!(layout.panels[4].offset, None);
}

#[test]
fn test_box_panels_stay_on_sheet() {
    let design = compose_box(&BoxSettings {
        lid: LidStyle::FlatLidWithLip,
        ..BoxSettings::default()
    });
    let packer = SheetPacker::new(SheetSettings {
        width: Some(300.0),
        height: Some(300.0),
        spacing: 4.0,
        auto_rotate: true,
    });
    let layout = packer.pack(&design.panels);
    assert_eq!(layout.placements.len(), design.panels.len());

    for placement in layout.placements.iter().filter(|p| !p.overflow) {
        assert!(placement.x >= 0.0 && placement.y >= 0.0);
        assert!(placement.x + placement.width() <= 300.0 + 1e-6);
        assert!(placement.y + placement.height() <= 300.0 + 1e-6);
        for p in placement.sheet_outline() {
            assert!(p.x >= placement.x - 1e-6 && p.x <= placement.x + placement.width() + 1e-6);
            assert!(p.y >= placement.y - 1e-6 && p.y <= placement.y + placement.height() + 1e-6);
        }
    }
}

#[test]
fn test_virtual_sheet_places_everything() {
    let design = compose_box(&BoxSettings::default());
    let layout = SheetPacker::new(SheetSettings::virtual_sheet(5.0)).pack(&design.panels);
    assert_eq!(layout.overflow_count(), 0);
    assert!(layout.warnings.is_empty());
    assert!(layout.panels.iter().all(|p| p.offset.is_some()));
}

//! Sliding drawer scenarios

use tabforge_camtools::drawer::compose_drawer;
use tabforge_camtools::tabbed_box::{
    DimensionReference, DrawerClearance, DrawerSettings, PanelRole,
};
use tabforge_core::constants::ALIGNMENT_EPSILON;

#[test]
fn test_drawer_slides_into_shell() {
    let settings = DrawerSettings {
        width: 200.0,
        height: 90.0,
        depth: 180.0,
        reference: DimensionReference::Outside,
        clearance: DrawerClearance {
            width: 1.5,
            height: 1.0,
            depth: 2.0,
        },
        bottom_offset: 0.5,
        ..DrawerSettings::default()
    };
    let design = compose_drawer(&settings);
    assert!(design.warnings.is_empty(), "{:?}", design.warnings);

    assert!(design.opening_width <= design.shell.inner_width + ALIGNMENT_EPSILON);
    assert!(design.opening_height <= design.shell.inner_height + ALIGNMENT_EPSILON);
    assert!((design.drawer.outer_depth - (design.shell.inner_depth - 2.0)).abs() < 1e-9);
    assert!(
        (design.drawer.outer_height - (design.shell.inner_height - 1.0 - 0.5)).abs() < 1e-9
    );

    let shell_front = design.panels.iter().find(|p| p.id == "shell-front");
    assert!(shell_front.is_none());
    let fronts: Vec<_> = design
        .panels
        .iter()
        .filter(|p| p.role == PanelRole::DrawerFront)
        .collect();
    assert_eq!(fronts.len(), 1);
    assert_eq!(fronts[0].id, "drawer-front");
}

#[test]
fn test_thumb_notch_stays_inside_front() {
    let design = compose_drawer(&DrawerSettings::default());
    let front = design.panel("drawer-front").unwrap();
    let back = design.panel("drawer-back").unwrap();

    assert!((front.width - back.width).abs() < 1e-9);
    assert!((front.height - back.height).abs() < 1e-9);

    let radius = (front.width.min(front.height) * 0.18).clamp(4.0, 18.0);
    let lowest_arc_point = front
        .outline
        .iter()
        .filter(|p| p.y > front.height / 2.0 && p.x > front.width / 4.0 && p.x < front.width * 0.75)
        .map(|p| p.y)
        .fold(f64::INFINITY, f64::min);
    assert!((lowest_arc_point - (front.height - radius)).abs() < 0.1);
}

#[test]
fn test_inside_reference_shell() {
    let settings = DrawerSettings {
        reference: DimensionReference::Inside,
        width: 100.0,
        height: 50.0,
        depth: 100.0,
        ..DrawerSettings::default()
    };
    let design = compose_drawer(&settings);
    assert_eq!(design.shell.inner_width, 100.0);
    assert_eq!(design.shell.outer_height, 56.0);
    assert!((design.drawer.outer_width - 99.0).abs() < 1e-9);
    assert!(design.warnings.is_empty(), "{:?}", design.warnings);
}

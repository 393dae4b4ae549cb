//! Box generation scenarios and outline invariants

use tabforge_camtools::tabbed_box::{
    compose_box, BoxSettings, BoxStyle, CutKind, DimensionReference, DividerSettings,
    FingerPattern, FingerSettings, LidStyle, Panel, PanelRole,
};
use tabforge_core::constants::{ALIGNMENT_EPSILON, POINT_EPSILON};
use tabforge_core::{crossing_count, is_counter_clockwise, Point};

fn scenario_settings() -> BoxSettings {
    BoxSettings {
        width: 100.0,
        height: 60.0,
        depth: 80.0,
        thickness: 3.0,
        ..BoxSettings::default()
    }
}

fn assert_clean_outline(panel: &Panel) {
    let outline = &panel.outline;
    let n = outline.len();
    assert!(n >= 3, "{} has {} vertices", panel.id, n);
    assert!(is_counter_clockwise(outline), "{} is not CCW", panel.id);
    for i in 0..n {
        let prev = outline[(i + n - 1) % n];
        let cur = outline[i];
        let next = outline[(i + 1) % n];
        assert!(!cur.coincides(&next), "{} repeats {:?}", panel.id, cur);
        let same_x = (prev.x - cur.x).abs() <= POINT_EPSILON && (cur.x - next.x).abs() <= POINT_EPSILON;
        let same_y = (prev.y - cur.y).abs() <= POINT_EPSILON && (cur.y - next.y).abs() <= POINT_EPSILON;
        assert!(!same_x && !same_y, "{} has a collinear vertex {:?}", panel.id, cur);
    }
}

/// Height of the horizontal outline edge crossing `x` inside the band `y <= band`.
fn bottom_edge_depth(outline: &[Point], x: f64, band: f64) -> Option<f64> {
    let n = outline.len();
    (0..n).find_map(|i| {
        let a = outline[i];
        let b = outline[(i + 1) % n];
        let horizontal = (a.y - b.y).abs() <= POINT_EPSILON && a.y <= band;
        let spans = x > a.x.min(b.x) && x < a.x.max(b.x);
        (horizontal && spans).then_some(a.y)
    })
}

#[test]
fn test_scenario_closed_box_aligns() {
    let design = compose_box(&scenario_settings());
    assert!(design.warnings.is_empty(), "{:?}", design.warnings);

    let bottom = design.panel("bottom").unwrap();
    for id in ["front", "back"] {
        let panel = design.panel(id).unwrap();
        assert!((panel.width - bottom.width).abs() < ALIGNMENT_EPSILON);
    }
    for id in ["left", "right"] {
        let panel = design.panel(id).unwrap();
        assert!((panel.width - bottom.height).abs() < ALIGNMENT_EPSILON);
    }
    for panel in &design.panels {
        assert_clean_outline(panel);
    }
}

#[test]
fn test_front_and_bottom_seam_is_complementary() {
    let settings = scenario_settings();
    let design = compose_box(&settings);
    let front = design.panel("front").unwrap();
    let bottom = design.panel("bottom").unwrap();
    let pattern = FingerPattern::generate(design.dimensions.outer_width, 5.0, 15.0);
    let t = settings.thickness;

    for segment in &pattern.segments {
        let mid = (segment.start + segment.end) / 2.0;
        let front_depth = bottom_edge_depth(&front.outline, mid, t + POINT_EPSILON).unwrap();
        let bottom_depth = bottom_edge_depth(&bottom.outline, mid, t + POINT_EPSILON).unwrap();
        assert!(
            (front_depth + bottom_depth - t).abs() < 1e-9,
            "segment at {mid}: front {front_depth}, bottom {bottom_depth}"
        );
        if segment.is_tab {
            assert!((front_depth - t).abs() < 1e-9);
        }
    }
}

#[test]
fn test_scenario_sliding_lid_grooves() {
    let settings = BoxSettings {
        lid: LidStyle::SlidingLid,
        ..scenario_settings()
    };
    let design = compose_box(&settings);
    assert!(design.warnings.is_empty(), "{:?}", design.warnings);

    for id in ["left", "right"] {
        let panel = design.panel(id).unwrap();
        let scores: Vec<_> = panel.cut_paths_of(CutKind::Score).collect();
        assert_eq!(scores.len(), 1, "{id}");
        let expected = settings
            .groove
            .depth
            .min(panel.height - settings.groove.offset);
        let bounds = scores[0].bounds().unwrap();
        assert!((bounds.height() - expected).abs() < 1e-9);
    }
    for id in ["front", "back", "bottom"] {
        assert_eq!(design.panel(id).unwrap().cut_paths.len(), 0);
    }

    let lid = design.panel("lid").unwrap();
    assert!((lid.width - 100.0).abs() < 1e-9);
    assert!((lid.height - 80.0).abs() < 1e-9);
}

#[test]
fn test_scenario_dividers_without_cross_slots() {
    let settings = BoxSettings {
        dividers: DividerSettings {
            count_x: 3,
            count_z: 1,
            clearance: 0.2,
        },
        ..scenario_settings()
    };
    let design = compose_box(&settings);
    let dividers: Vec<&Panel> = design
        .panels
        .iter()
        .filter(|p| p.role == PanelRole::DividerX)
        .collect();
    assert_eq!(dividers.len(), 2);
    for divider in dividers {
        assert_eq!(divider.outline.len(), 4);
        assert!((divider.width - 80.0).abs() < 1e-9);
        assert!((divider.height - 60.0).abs() < 1e-9);
    }
    assert!(!design.panels.iter().any(|p| p.role == PanelRole::DividerZ));
}

#[test]
fn test_generation_is_deterministic() {
    let settings = BoxSettings {
        lid: LidStyle::FlatLidWithLip,
        apply_kerf: true,
        dividers: DividerSettings {
            count_x: 2,
            count_z: 3,
            clearance: 0.1,
        },
        ..scenario_settings()
    };
    let first = compose_box(&settings);
    let second = compose_box(&settings);
    assert_eq!(first, second);
}

#[test]
fn test_dimension_invariant_across_references() {
    for reference in [DimensionReference::Inside, DimensionReference::Outside] {
        for lid in [LidStyle::None, LidStyle::FlatLid, LidStyle::SlidingLid] {
            let settings = BoxSettings {
                reference,
                lid,
                ..scenario_settings()
            };
            let dims = compose_box(&settings).dimensions;
            assert!((dims.outer_width - dims.inner_width - 6.0).abs() < 1e-9);
            assert!((dims.outer_depth - dims.inner_depth - 6.0).abs() < 1e-9);
            let caps = if lid == LidStyle::None { 3.0 } else { 6.0 };
            assert!((dims.outer_height - dims.inner_height - caps).abs() < 1e-9);
        }
    }
}

#[test]
fn test_kerf_compensation_widens_panels() {
    let settings = BoxSettings {
        apply_kerf: true,
        kerf: 0.2,
        ..scenario_settings()
    };
    let design = compose_box(&settings);
    assert!(design.warnings.is_empty(), "{:?}", design.warnings);
    let front = design.panel("front").unwrap();
    assert!((front.width - 106.2).abs() < 1e-9);
    for panel in &design.panels {
        assert_clean_outline(panel);
        assert_eq!(crossing_count(&panel.outline), 0, "{} self-intersects", panel.id);
    }
}

#[test]
fn test_kerf_wider_than_finger_gaps_keeps_outlines_simple() {
    let settings = BoxSettings {
        apply_kerf: true,
        kerf: 1.0,
        finger: FingerSettings {
            min_finger: 0.5,
            max_finger: 0.8,
            tab_count: None,
        },
        ..scenario_settings()
    };
    let design = compose_box(&settings);
    assert!(design.warnings.iter().any(|w| w.starts_with("Kerf 1.000 mm closes")));

    for panel in &design.panels {
        assert_clean_outline(panel);
        assert_eq!(crossing_count(&panel.outline), 0, "{} self-intersects", panel.id);
    }
    let front = design.panel("front").unwrap();
    assert!((front.width - (design.dimensions.outer_width + 1.0)).abs() < 1e-6);
}

#[test]
fn test_every_style_produces_clean_outlines() {
    for box_style in [BoxStyle::FingerAllEdges, BoxStyle::FingerVerticalEdges] {
        for open_front in [false, true] {
            for lid in [
                LidStyle::None,
                LidStyle::FlatLid,
                LidStyle::FlatLidWithLip,
                LidStyle::SlidingLid,
            ] {
                let design = compose_box(&BoxSettings {
                    box_style,
                    open_front,
                    lid,
                    ..scenario_settings()
                });
                assert!(design.warnings.is_empty(), "{:?}", design.warnings);
                for panel in &design.panels {
                    assert_clean_outline(panel);
                }
                assert_eq!(design.panel("front").is_some(), !open_front);
                assert_eq!(design.panel("top").is_some(), open_front);
            }
        }
    }
}

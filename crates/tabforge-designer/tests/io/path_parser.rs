use proptest::prelude::*;
use tabforge_camtools::tabbed_box::{compose_box, BoxSettings};
use tabforge_designer::{parse_path_data, DesignerError};

#[test]
fn test_generated_outlines_parse_back() {
    let design = compose_box(&BoxSettings::default());
    for panel in &design.panels {
        let subpaths = parse_path_data(&panel.path_data).unwrap();
        assert_eq!(subpaths.len(), 1, "panel {}", panel.id);
        assert!(subpaths[0].closed);
        assert_eq!(subpaths[0].points.len(), panel.outline.len(), "panel {}", panel.id);
        for (parsed, original) in subpaths[0].points.iter().zip(&panel.outline) {
            assert!(parsed.approx_eq(original, 1e-3), "panel {}", panel.id);
        }
    }
}

#[test]
fn test_multiple_subpaths() {
    let subpaths = parse_path_data("M0 0 L10 0 L10 10 Z M20 20 h5 v5").unwrap();
    assert_eq!(subpaths.len(), 2);
    assert!(subpaths[0].closed);
    assert!(!subpaths[1].closed);
    assert_eq!(subpaths[1].points.len(), 3);
}

#[test]
fn test_arc_command_is_rejected() {
    let err = parse_path_data("M0 0 a1 1 0 0 1 2 2").unwrap_err();
    assert!(matches!(
        err,
        DesignerError::UnsupportedPathCommand { command: 'a', position: 5 }
    ));
    assert!(err.to_string().contains("offset 5"));
}

proptest! {
    #[test]
    fn prop_rectangles_parse(x in -500.0f64..500.0, y in -500.0f64..500.0, w in 0.5f64..200.0, h in 0.5f64..200.0) {
        let data = format!("M{x} {y} h{w} v{h} H{x} Z");
        let subpaths = parse_path_data(&data).unwrap();
        prop_assert_eq!(subpaths.len(), 1);
        prop_assert_eq!(subpaths[0].points.len(), 4);
        prop_assert!((subpaths[0].points[2].x - (x + w)).abs() < 1e-9);
        prop_assert!((subpaths[0].points[2].y - (y + h)).abs() < 1e-9);
    }
}

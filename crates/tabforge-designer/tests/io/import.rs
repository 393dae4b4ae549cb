use tabforge_camtools::tabbed_box::{compose_box, BoxSettings, CutKind, LidStyle};
use tabforge_designer::{ArtworkImporter, DesignerError};

#[test]
fn test_logo_lands_on_lid() {
    let design = compose_box(&BoxSettings {
        lid: LidStyle::FlatLid,
        ..BoxSettings::default()
    });
    let lid = design.panel("lid").unwrap();
    let importer = ArtworkImporter::new(0.5, 20.0, 15.0, CutKind::Engrave);
    let merged = importer
        .merge_onto(lid, "M0 0 L40 0 L40 20 L0 20 Z M10 5 L30 15")
        .unwrap();

    assert_eq!(merged.id, "lid");
    assert_eq!(merged.outline, lid.outline);
    let engraved: Vec<_> = merged.cut_paths_of(CutKind::Engrave).collect();
    assert_eq!(engraved.len(), 2);

    let bounds = engraved[0].bounds().unwrap();
    assert_eq!(bounds.min_x, 20.0);
    assert_eq!(bounds.max_x, 40.0);
    assert_eq!(bounds.min_y, 15.0);
    assert_eq!(bounds.max_y, 25.0);

    // The diagonal runs downward once the y-down source is flipped.
    let diagonal = &engraved[1].points;
    assert!(diagonal[0].y > diagonal[1].y);
}

#[test]
fn test_import_without_flip() {
    let importer = ArtworkImporter::new(1.0, 0.0, 0.0, CutKind::Score).with_flip_y(false);
    let paths = importer.import("M0 0 L10 10").unwrap();
    assert_eq!(paths[0].points[1].y, 10.0);
    assert_eq!(paths[0].kind, CutKind::Score);
    assert_eq!(paths[0].path_data, "M0.000 0.000 L10.000 10.000");
}

#[test]
fn test_bad_data_propagates() {
    let design = compose_box(&BoxSettings::default());
    let front = design.panel("front").unwrap();
    let err = ArtworkImporter::default()
        .merge_onto(front, "M0 0 S1 1 2 2")
        .unwrap_err();
    assert!(matches!(err, DesignerError::UnsupportedPathCommand { command: 'S', .. }));
}

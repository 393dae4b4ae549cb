use tabforge_camtools::tabbed_box::{
    BoxSettings, BoxStyle, CutKind, DividerSettings, DrawerSettings, LidStyle,
};
use tabforge_settings::{ArtworkSettings, Project, ProjectConfig, SettingsError};
use tempfile::TempDir;

fn sample() -> ProjectConfig {
    ProjectConfig {
        project: Project::Box(BoxSettings {
            width: 140.0,
            box_style: BoxStyle::FingerVerticalEdges,
            lid: LidStyle::FlatLidWithLip,
            dividers: DividerSettings {
                count_x: 3,
                ..DividerSettings::default()
            },
            ..BoxSettings::default()
        }),
        artwork: vec![ArtworkSettings {
            panel: "lid".to_string(),
            path_data: "M0 0 L10 0 L10 10 Z".to_string(),
            kind: CutKind::Score,
            ..ArtworkSettings::default()
        }],
        ..ProjectConfig::default()
    }
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job.json");
    let config = sample();
    config.save_to_file(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"kind\": \"box\""));
    assert!(content.contains("\"finger_vertical_edges\""));

    let loaded = ProjectConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job.toml");
    let config = ProjectConfig::new(Project::Drawer(DrawerSettings {
        width: 180.0,
        ..DrawerSettings::default()
    }));
    config.save_to_file(&path).unwrap();

    let loaded = ProjectConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);

    let sample = sample();
    sample.save_to_file(&path).unwrap();
    assert_eq!(ProjectConfig::load_from_file(&path).unwrap(), sample);
}

#[test]
fn test_save_refuses_invalid_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("job.json");
    let config = ProjectConfig::new(Project::Box(BoxSettings {
        open_front: true,
        lid: LidStyle::SlidingLid,
        ..BoxSettings::default()
    }));
    assert!(matches!(
        config.save_to_file(&path),
        Err(SettingsError::Parameter(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_load_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    assert!(matches!(
        ProjectConfig::load_from_file(&missing),
        Err(SettingsError::Io(_))
    ));

    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{ \"project\": ").unwrap();
    assert!(matches!(
        ProjectConfig::load_from_file(&broken),
        Err(SettingsError::Json(_))
    ));

    let unknown = dir.path().join("unknown.toml");
    std::fs::write(&unknown, "[project]\nkind = \"crate\"\n").unwrap();
    assert!(matches!(
        ProjectConfig::load_from_file(&unknown),
        Err(SettingsError::TomlDe(_))
    ));
}

use drawerzen_core::{BinSize, ConfigError, EngineConfig};

#[test]
fn test_config_json_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");

    let mut config = EngineConfig::default();
    config.standard_sizes = vec![BinSize::new(84.0, 84.0), BinSize::new(42.0, 42.0)];
    config.min_gap_cells = 3;
    config.save_to_file(&path).unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_toml_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.toml");

    let config = EngineConfig::default();
    config.save_to_file(&path).unwrap();

    let loaded = EngineConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_config_rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.yaml");
    std::fs::write(&path, "gridPitchMm: 21").unwrap();

    let err = EngineConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedFormat(ref ext) if ext == "yaml"));
}

#[test]
fn test_config_rejects_invalid_values_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("engine.json");
    std::fs::write(&path, r#"{"gridPitchMm": -21.0}"#).unwrap();

    let err = EngineConfig::load_from_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidSetting { .. }));
}

#[test]
fn test_config_missing_file() {
    let err = EngineConfig::load_from_file(std::path::Path::new("/nonexistent/engine.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigError::IoError(_)));
}

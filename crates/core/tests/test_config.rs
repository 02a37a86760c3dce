//! Tests for configuration parsing

use codemap_core::config::CONFIG_FILE_NAME;
use codemap_core::CodemapConfig;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = CodemapConfig::default();
    assert_eq!(config.structure.max_depth, 3);
    assert_eq!(config.structure.allowed_hidden, vec![".git", ".github"]);
    assert_eq!(config.statistics.largest_files, 10);
    assert_eq!(config.statistics.max_entries, 0);
}

#[test]
fn test_empty_toml_equals_default() {
    let config: CodemapConfig = toml::from_str("").unwrap();
    assert_eq!(config.structure.max_depth, 3);
    assert_eq!(config.statistics.largest_files, 10);
}

#[test]
fn test_partial_sections() {
    let toml_str = r#"
[structure]
max_depth = 5

[statistics]
max_entries = 1000
"#;
    let config: CodemapConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(config.structure.max_depth, 5);
    assert_eq!(config.structure.allowed_hidden, vec![".git", ".github"]);
    assert_eq!(config.statistics.largest_files, 10);
    assert_eq!(config.statistics.max_entries, 1000);
}

#[test]
fn test_serialize_config() {
    let config = CodemapConfig::default();
    let toml_str = toml::to_string(&config).unwrap();
    assert!(toml_str.contains("max_depth"));
    assert!(toml_str.contains("largest_files"));
}

#[test]
fn test_find_and_load_walks_ancestors() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(CONFIG_FILE_NAME),
        "[structure]\nmax_depth = 7\n",
    )
    .unwrap();
    let nested = tmp.path().join("a").join("b");
    std::fs::create_dir_all(&nested).unwrap();

    let config = CodemapConfig::find_and_load(&nested).unwrap();
    assert_eq!(config.structure.max_depth, 7);
}

#[test]
fn test_save_round_trip() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE_NAME);

    let mut config = CodemapConfig::default();
    config.statistics.largest_files = 25;
    config.save(&path).unwrap();

    let loaded = CodemapConfig::from_file(&path).unwrap();
    assert_eq!(loaded.statistics.largest_files, 25);
}

#[test]
fn test_invalid_toml_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "[structure\nmax_depth = ").unwrap();
    assert!(CodemapConfig::from_file(&path).is_err());
}

use super::*;
use serial_test::serial;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("tree.yaml");
    std::fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn test_config_default() {
    let config = TreeConfig::default();
    assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
    assert!(!config.validate_on_mutation);
}

#[test]
fn test_config_for_test() {
    let config = TreeConfig::for_test();
    assert!(config.validate_on_mutation);
    assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
}

#[test]
#[serial]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "initial_capacity: 256\nvalidate_on_mutation: true\n");

    let config = TreeConfig::load(Some(&path)).unwrap();
    assert_eq!(config.initial_capacity, 256);
    assert!(config.validate_on_mutation);
}

#[test]
#[serial]
fn test_load_partial_file_keeps_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "validate_on_mutation: true\n");

    let config = TreeConfig::load(Some(&path)).unwrap();
    assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
    assert!(config.validate_on_mutation);
}

#[test]
#[serial]
fn test_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "initial_capacity: 256\n");

    std::env::set_var("RBSET__INITIAL_CAPACITY", "1024");
    let result = TreeConfig::load(Some(&path));
    std::env::remove_var("RBSET__INITIAL_CAPACITY");

    assert_eq!(result.unwrap().initial_capacity, 1024);
}

#[test]
#[serial]
fn test_config_env_var_selects_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "initial_capacity: 8\n");

    std::env::set_var(CONFIG_ENV_VAR, &path);
    let result = TreeConfig::load(None);
    std::env::remove_var(CONFIG_ENV_VAR);

    assert_eq!(result.unwrap().initial_capacity, 8);
}

#[test]
#[serial]
fn test_missing_explicit_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.yaml");

    let result = TreeConfig::load(Some(&missing.to_string_lossy()));
    assert!(matches!(result, Err(ConfigError::Load(_))));
}

#[test]
#[serial]
fn test_oversized_capacity_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "initial_capacity: 99999999999999\n");

    assert!(TreeConfig::load(Some(&path)).is_err());
}

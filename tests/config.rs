use teammanager::config::Config;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.database.url, "sqlite://teammanager.db?mode=rwc");
    assert_eq!(config.database.max_connections, 4);
    assert_eq!(config.pagination.default_page_size, 20);
    assert_eq!(config.pagination.max_page_size, 100);
    assert!(!config.logging.enabled);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.database.max_connections = 0;
    assert!(config.validate().is_err());

    config = Config::default();
    config.pagination.default_page_size = 500;
    assert!(config.validate().is_err());

    config = Config::default();
    config.pagination.max_page_size = 5000;
    assert!(config.validate().is_err());

    config = Config::default();
    config.logging.level = "chatty".to_string();
    assert!(config.validate().is_err());

    config = Config::default();
    config.database.url = "  ".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_page_size_resolution() {
    let config = Config::default();
    assert_eq!(config.pagination.page_size(None), 20);
    assert_eq!(config.pagination.page_size(Some(0)), 1);
    assert_eq!(config.pagination.page_size(Some(50)), 50);
    assert_eq!(config.pagination.page_size(Some(10_000)), 100);
}

#[test]
fn test_partial_config_deserialization() {
    let partial_toml = r#"
[database]
url = "sqlite::memory:"

[logging]
enabled = true
level = "debug"
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.database.url, "sqlite::memory:");
    assert!(config.logging.enabled);
    assert_eq!(config.logging.level_filter(), Some(log::LevelFilter::Debug));

    // unspecified values use defaults
    assert_eq!(config.database.max_connections, 4);
    assert_eq!(config.pagination.default_page_size, 20);
    assert!(config.validate().is_ok());
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.database.url, default_config.database.url);
    assert_eq!(config.pagination.max_page_size, default_config.pagination.max_page_size);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_generate_and_load_default_config() {
    let dir = std::env::temp_dir().join(format!("teammanager-config-test-{}", std::process::id()));
    let path = dir.join("config.toml");

    Config::generate_default_config(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Team manager configuration file"));

    let loaded = Config::load_from_file(&path).unwrap();
    assert_eq!(loaded.database.url, Config::default().database.url);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    let dir = std::env::temp_dir().join(format!("teammanager-invalid-config-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    std::fs::write(&path, "[pagination]\ndefault_page_size = 0\n").unwrap();

    assert!(Config::load_from_file(&path).is_err());

    let _ = std::fs::remove_dir_all(&dir);
}

use std::sync::mpsc;

use log::{Level, LevelFilter, Log, Record};
use teammanager::config::LoggingConfig;
use teammanager::logger::Logger;

#[test]
fn test_config_based_logging_disabled() {
    let logger = Logger::from_config(&LoggingConfig::default()).unwrap();
    assert!(!logger.is_enabled());
    assert!(!logger.has_file_writer());
    assert_eq!(logger.level(), LevelFilter::Info);

    // installing a disabled logger is a no-op
    assert!(logger.install().is_ok());
}

#[test]
fn test_invalid_level_is_rejected() {
    let config = LoggingConfig {
        enabled: false,
        level: "loud".to_string(),
    };
    assert!(Logger::from_config(&config).is_err());
}

#[test]
fn test_log_line_format() {
    let config = LoggingConfig {
        enabled: false,
        level: "debug".to_string(),
    };
    let logger = Logger::from_config(&config).unwrap();

    let (tx, rx) = mpsc::channel::<String>();
    let (_, sink) = logger.base_dispatch().chain(tx).into_log();

    sink.log(
        &Record::builder()
            .args(format_args!("Creating project 'Website'"))
            .level(Level::Debug)
            .target("teammanager::repositories::project")
            .build(),
    );
    sink.log(
        &Record::builder()
            .args(format_args!("filtered out"))
            .level(Level::Trace)
            .target("teammanager")
            .build(),
    );

    let lines: Vec<String> = rx.try_iter().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("DEBUG teammanager::repositories::project]"));
    assert!(lines[0].ends_with("Creating project 'Website'\n"));
}

#[test]
fn test_log_file_path() {
    if let Ok(path) = Logger::get_log_file_path() {
        assert!(path.ends_with("teammanager/teammanager.log"));
    }
}

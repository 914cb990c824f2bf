//! Logging Tests

use inverse_domain::Error;
use inverse_infrastructure::constants::DEFAULT_LOG_LEVEL;
use inverse_infrastructure::logging::{LoggingConfig, init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("debug").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("INFO").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    assert!(parse_log_level("invalid").is_err());
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, DEFAULT_LOG_LEVEL);
    assert!(!config.json_format);
    assert!(config.file_output.is_none());
}

#[test]
fn test_init_logging_rejects_unknown_level() {
    let config = LoggingConfig {
        level: "loud".to_string(),
        ..LoggingConfig::default()
    };

    match init_logging(config) {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("loud")),
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

#[test]
fn test_init_logging_writes_json_file_and_rejects_second_install() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        json_format: true,
        file_output: Some(dir.path().join("registry.log")),
        ..LoggingConfig::default()
    };
    init_logging(config).expect("first subscriber should install");

    let written = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .find(|path| path.to_string_lossy().contains("registry.log"))
        .expect("rolling log file should exist");
    let contents = std::fs::read_to_string(written).unwrap();
    assert!(contents.contains("Logging initialized"));
    assert!(contents.trim_start().starts_with('{'));

    match init_logging(LoggingConfig::default()) {
        Err(Error::Configuration { message, source }) => {
            assert!(message.contains("Failed to install logging subscriber"));
            assert!(source.is_some());
        }
        other => panic!("Expected Configuration error, got {:?}", other),
    }
}

use crate::conf::{AnalyzerConfig, ConfigError, DEFAULT_MAX_LINE_LENGTH, MalformedPolicy};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn empty_config_uses_defaults() {
    let cfg: AnalyzerConfig = "".parse().unwrap();

    assert_eq!(cfg, AnalyzerConfig::default());
    assert_eq!(cfg.max_line_length, DEFAULT_MAX_LINE_LENGTH);
    assert_eq!(cfg.on_malformed, MalformedPolicy::Skip);
}

#[test]
fn parses_all_fields() {
    let cfg: AnalyzerConfig = r#"
        max_line_length = 2048
        on_malformed = "abort"
    "#
    .parse()
    .unwrap();

    assert_eq!(cfg.max_line_length, 2048);
    assert_eq!(cfg.on_malformed, MalformedPolicy::Abort);
}

#[test]
fn rejects_zero_line_length() {
    let err = "max_line_length = 0".parse::<AnalyzerConfig>().unwrap_err();

    assert!(matches!(
        err,
        ConfigError::Invalid {
            field: "max_line_length",
            ..
        }
    ));
}

#[test]
fn rejects_unknown_policy() {
    let err = r#"on_malformed = "ignore""#
        .parse::<AnalyzerConfig>()
        .unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn rejects_unknown_fields() {
    let err = "max_lines = 10".parse::<AnalyzerConfig>().unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn loads_from_file() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("logstat.toml");
    fs::write(&path, "max_line_length = 80\n").unwrap();

    // Act
    let cfg = AnalyzerConfig::from_file(&path).unwrap();

    // Assert
    assert_eq!(cfg.max_line_length, 80);
    assert_eq!(cfg.on_malformed, MalformedPolicy::Skip);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = AnalyzerConfig::from_file(&path).unwrap_err();

    match err {
        ConfigError::ReadFile { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("Expected ReadFile, got {:?}", other),
    }
}

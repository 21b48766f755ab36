use crate::cli::{AnalyzeArgs, LinesArgs, run_lines};
use std::fs;
use tempfile::tempdir;

#[test]
fn lines_rejects_zero_length_limit() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("access.log");
    fs::write(&path, "a line\n").unwrap();

    // Act
    let err = run_lines(LinesArgs {
        file: path,
        max_line_length: 0,
    })
    .unwrap_err();

    // Assert
    assert_eq!(
        err.to_string(),
        "invalid value for `max_line_length`: must be greater than zero"
    );
}

#[test]
fn analyze_rejects_zero_length_limit() {
    let args = AnalyzeArgs {
        file: "access.log".into(),
        config: None,
        max_line_length: Some(0),
        strict: false,
        json: false,
    };

    assert!(args.resolve_config().is_err());
}

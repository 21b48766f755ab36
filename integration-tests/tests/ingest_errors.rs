use integration_tests::harness::{fixture_path, write_log};
use logstat_core::conf::{AnalyzerConfig, MalformedPolicy};
use logstat_core::ingest::{IngestError, analyze_file};
use logstat_core::record::MalformedReason;
use tempfile::tempdir;

const VALID: &str = r#"1.2.3.4 - - [10/Oct/2023:13:55:36 +0000] "GET /index.html HTTP/1.1" 200 1024 "-" "Mozilla/5.0""#;

/// The strict fixture config aborts on the first malformed line
#[test]
fn strict_config_aborts_with_line_number() {
    let cfg = AnalyzerConfig::from_file(&fixture_path("strict.toml")).unwrap();
    assert_eq!(cfg.on_malformed, MalformedPolicy::Abort);

    let err = analyze_file(&fixture_path("access.log"), &cfg).unwrap_err();

    match err {
        IngestError::Malformed { line, source } => {
            assert_eq!(line, 6);
            assert_eq!(source.reason(), MalformedReason::Grammar);
        }
        other => panic!("Expected Malformed, got {:?}", other),
    }
}

#[test]
fn unknown_method_is_reported_as_such() {
    let dir = tempdir().unwrap();
    let path = write_log(
        dir.path(),
        "access.log",
        &[
            VALID,
            r#"1.2.3.4 - - [10/Oct/2023:13:55:36 +0000] "BREW /pot HTTP/1.1" 418 0 "-" "-""#,
        ],
    );
    let cfg = AnalyzerConfig {
        on_malformed: MalformedPolicy::Abort,
        ..AnalyzerConfig::default()
    };

    let err = analyze_file(&path, &cfg).unwrap_err();

    assert!(matches!(
        err,
        IngestError::Malformed { line: 2, ref source } if source.reason() == MalformedReason::Method
    ));
}

#[test]
fn line_too_long_stops_the_run() {
    let dir = tempdir().unwrap();
    let long = format!("{VALID}{}", " ".repeat(1024));
    let path = write_log(dir.path(), "access.log", &[VALID, long.as_str(), VALID]);

    let err = analyze_file(&path, &AnalyzerConfig::default()).unwrap_err();

    match err {
        IngestError::LineTooLong { line, max, length } => {
            assert_eq!(line, 2);
            assert_eq!(max, 1024);
            assert_eq!(length, long.chars().count());
        }
        other => panic!("Expected LineTooLong, got {:?}", other),
    }
}

#[test]
fn missing_file_and_directory_are_rejected() {
    let dir = tempdir().unwrap();

    let missing = analyze_file(&dir.path().join("nope.log"), &AnalyzerConfig::default());
    let directory = analyze_file(dir.path(), &AnalyzerConfig::default());

    assert!(matches!(missing, Err(IngestError::FileNotFound { .. })));
    assert!(matches!(directory, Err(IngestError::NotAFile { .. })));
}

use std::fs;
use std::path::{Path, PathBuf};

/// Absolute path of a file under `integration-tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Write `lines` as a newline-terminated log file inside `dir`.
pub fn write_log(dir: &Path, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.join(name);
    let mut contents = lines.join("\n");
    contents.push('\n');
    fs::write(&path, contents).expect("failed to write test log");
    path
}

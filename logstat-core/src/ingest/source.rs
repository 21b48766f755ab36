use crate::ingest::IngestError;
use std::fs::{self, File};
use std::io;
use std::path::Path;

/// Open a log file after checking that it exists and is a regular file.
pub fn open_log_file(path: &Path) -> Result<File, IngestError> {
    check_log_file(path)?;
    File::open(path).map_err(|e| IngestError::io(path, e))
}

/// Validate `path` and return the file's size in bytes.
pub fn check_log_file(path: &Path) -> Result<u64, IngestError> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(IngestError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(IngestError::io(path, e)),
    };

    if !meta.is_file() {
        return Err(IngestError::NotAFile {
            path: path.to_path_buf(),
        });
    }

    Ok(meta.len())
}

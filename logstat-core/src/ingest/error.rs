use crate::record::ParseError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("path is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("line {line} is {length} characters long; the maximum is {max}")]
    LineTooLong {
        line: usize,
        length: usize,
        max: usize,
    },

    #[error("line {line}: {source}")]
    Malformed {
        line: usize,
        #[source]
        source: ParseError,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IngestError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

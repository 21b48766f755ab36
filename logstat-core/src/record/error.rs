use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed log line ({reason}): {line}")]
    MalformedLogLine { line: String, reason: MalformedReason },
}

/// What part of the grammar a rejected line violated.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    #[error("line does not match the combined log format")]
    Grammar,

    #[error("unparsable timestamp")]
    Timestamp,

    #[error("unknown HTTP method")]
    Method,

    #[error("response size out of range")]
    ResponseSize,
}

impl ParseError {
    pub(crate) fn malformed(line: &str, reason: MalformedReason) -> Self {
        Self::MalformedLogLine {
            line: line.to_owned(),
            reason,
        }
    }

    pub fn line(&self) -> &str {
        match self {
            Self::MalformedLogLine { line, .. } => line,
        }
    }

    pub fn reason(&self) -> MalformedReason {
        match self {
            Self::MalformedLogLine { reason, .. } => *reason,
        }
    }
}

use crate::ingest::IngestError;
use serde::Serialize;
use std::io::BufRead;
use std::path::PathBuf;
use tracing::debug;

/// One line of input, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

/// Line count and length extremes, in characters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total_lines: usize,
    pub longest: Option<usize>,
    pub shortest: Option<usize>,
}

impl LineStats {
    pub fn record(&mut self, length: usize) {
        self.total_lines += 1;
        self.longest = Some(self.longest.map_or(length, |l| l.max(length)));
        self.shortest = Some(self.shortest.map_or(length, |s| s.min(length)));
    }
}

/// Iterator over the lines of a reader that enforces a length limit.
///
/// Bytes that are not valid UTF-8 are replaced with U+FFFD. Yields
/// [`IngestError::LineTooLong`] for an over-long line and stops after the
/// first error of any kind.
pub struct LineReader<R> {
    inner: R,
    origin: PathBuf,
    max_line_length: usize,
    number: usize,
    stats: LineStats,
    done: bool,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, max_line_length: usize) -> Self {
        Self {
            inner,
            origin: PathBuf::from("<input>"),
            max_line_length,
            number: 0,
            stats: LineStats::default(),
            done: false,
        }
    }

    /// Name used for the input in IO errors.
    pub fn with_origin(mut self, origin: impl Into<PathBuf>) -> Self {
        self.origin = origin.into();
        self
    }

    /// Statistics over the lines yielded so far.
    pub fn stats(&self) -> LineStats {
        self.stats
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = Result<Line, IngestError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut buf = Vec::new();
        match self.inner.read_until(b'\n', &mut buf) {
            Ok(0) => {
                self.done = true;
                return None;
            }
            Ok(_) => {}
            Err(e) => {
                self.done = true;
                return Some(Err(IngestError::io(self.origin.clone(), e)));
            }
        }

        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }

        self.number += 1;

        // Invalid UTF-8 becomes U+FFFD; the line still reaches the parser.
        let text = match String::from_utf8(buf) {
            Ok(text) => text,
            Err(e) => {
                debug!(line = self.number, "replacing invalid UTF-8");
                String::from_utf8_lossy(e.as_bytes()).into_owned()
            }
        };
        let length = text.chars().count();
        if length > self.max_line_length {
            self.done = true;
            return Some(Err(IngestError::LineTooLong {
                line: self.number,
                length,
                max: self.max_line_length,
            }));
        }

        self.stats.record(length);
        Some(Ok(Line {
            number: self.number,
            text,
        }))
    }
}

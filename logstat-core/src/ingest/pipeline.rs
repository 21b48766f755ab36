use crate::conf::{AnalyzerConfig, MalformedPolicy};
use crate::ingest::{IngestError, LineReader, LineStats, open_log_file};
use crate::record::parse_line;
use crate::stats::StatisticsAggregator;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Outcome of a completed run over one input.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub stats: StatisticsAggregator,
    pub lines: LineStats,
    /// Malformed lines that were skipped.
    pub skipped: usize,
}

/// Parse every line of `reader` and aggregate the results.
pub fn analyze_reader<R: BufRead>(
    mut reader: LineReader<R>,
    config: &AnalyzerConfig,
) -> Result<Analysis, IngestError> {
    let mut stats = StatisticsAggregator::new();
    let mut skipped = 0;

    for line in reader.by_ref() {
        let line = line?;

        match parse_line(&line.text) {
            Ok(record) => {
                trace!(line = line.number, path = record.path(), "parsed");
                stats.add_entry(&record);
            }
            Err(source) => match config.on_malformed {
                MalformedPolicy::Skip => {
                    warn!(line = line.number, reason = %source.reason(), "skipping malformed line");
                    skipped += 1;
                }
                MalformedPolicy::Abort => {
                    return Err(IngestError::Malformed {
                        line: line.number,
                        source,
                    });
                }
            },
        }
    }

    let lines = reader.stats();
    info!(
        lines = lines.total_lines,
        skipped,
        visits = stats.total_visits(),
        "analysis complete"
    );

    Ok(Analysis {
        stats,
        lines,
        skipped,
    })
}

/// Open `path` and run [`analyze_reader`] over it.
pub fn analyze_file(path: &Path, config: &AnalyzerConfig) -> Result<Analysis, IngestError> {
    let file = open_log_file(path)?;
    debug!(path = %path.display(), max_line_length = config.max_line_length, "analyzing");

    let reader = LineReader::new(BufReader::new(file), config.max_line_length).with_origin(path);
    analyze_reader(reader, config)
}

/// Count lines and track their lengths without parsing them.
pub fn measure_lines<R: BufRead>(mut reader: LineReader<R>) -> Result<LineStats, IngestError> {
    for line in reader.by_ref() {
        line?;
    }
    Ok(reader.stats())
}

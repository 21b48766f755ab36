use crate::cli::render::{render_json, render_line_stats, render_report};
use crate::conf::{AnalyzerConfig, DEFAULT_MAX_LINE_LENGTH, MalformedPolicy};
use crate::ingest::{LineReader, analyze_file, measure_lines, open_log_file};
use anyhow::{Context, Result};
use clap::Args;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Path to the access log
    pub file: PathBuf,

    /// Analyzer config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Override the maximum accepted line length
    #[arg(long)]
    pub max_line_length: Option<usize>,

    /// Abort on the first malformed line instead of skipping it
    #[arg(long)]
    pub strict: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct LinesArgs {
    /// Path to the access log
    pub file: PathBuf,

    /// Maximum accepted line length
    #[arg(long, default_value_t = DEFAULT_MAX_LINE_LENGTH)]
    pub max_line_length: usize,
}

impl AnalyzeArgs {
    /// File config first, then command-line overrides.
    pub fn resolve_config(&self) -> Result<AnalyzerConfig> {
        let mut cfg = match &self.config {
            Some(path) => AnalyzerConfig::from_file(path)?,
            None => AnalyzerConfig::default(),
        };

        if let Some(max) = self.max_line_length {
            cfg.max_line_length = max;
        }
        if self.strict {
            cfg.on_malformed = MalformedPolicy::Abort;
        }

        cfg.validate()?;
        Ok(cfg)
    }
}

pub fn run_analyze(args: AnalyzeArgs) -> Result<()> {
    let cfg = args.resolve_config()?;

    let analysis = analyze_file(&args.file, &cfg)
        .with_context(|| format!("failed to analyze {}", args.file.display()))?;

    if args.json {
        println!("{}", render_json(&analysis)?);
    } else {
        print!("{}", render_report(&analysis, io::stdout().is_terminal()));
    }

    Ok(())
}

pub fn run_lines(args: LinesArgs) -> Result<()> {
    AnalyzerConfig {
        max_line_length: args.max_line_length,
        ..AnalyzerConfig::default()
    }
    .validate()?;

    let file = open_log_file(&args.file)?;
    let reader = LineReader::new(BufReader::new(file), args.max_line_length).with_origin(&args.file);

    let stats = measure_lines(reader)
        .with_context(|| format!("failed to read {}", args.file.display()))?;

    print!("{}", render_line_stats(&stats));
    Ok(())
}

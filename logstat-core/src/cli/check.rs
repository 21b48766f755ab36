use crate::ingest::check_log_file;
use anyhow::Result;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Paths to check; reads paths from stdin when omitted
    pub paths: Vec<PathBuf>,
}

pub fn run_check(args: CheckArgs) -> Result<()> {
    if args.paths.is_empty() {
        let stdin = io::stdin();
        run_interactive(stdin.lock(), io::stdout())?;
        return Ok(());
    }

    let mut failed = 0;
    for path in &args.paths {
        match check_log_file(path) {
            Ok(size) => println!("✔ {} ({} bytes)", path.display(), size),
            Err(e) => {
                failed += 1;
                println!("✘ {e}");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} paths are not readable log files", args.paths.len());
    }
    Ok(())
}

/// Prompt for paths until `exit` or `quit`; returns how many valid files were seen.
pub fn run_interactive<R: BufRead, W: Write>(input: R, mut out: W) -> io::Result<usize> {
    let mut valid = 0;

    writeln!(out, "Log file path checker. Type 'exit' or 'quit' to stop.")?;

    let mut lines = input.lines();
    loop {
        write!(out, "Path: ")?;
        out.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let entry = line.trim();

        if entry.eq_ignore_ascii_case("exit") || entry.eq_ignore_ascii_case("quit") {
            break;
        }
        if entry.is_empty() {
            writeln!(out, "Path must not be empty.")?;
            continue;
        }

        match check_log_file(Path::new(entry)) {
            Ok(size) => {
                valid += 1;
                writeln!(out, "✔ valid file #{valid} ({size} bytes)")?;
            }
            Err(e) => writeln!(out, "✘ {e}")?,
        }
    }

    writeln!(out, "Done. Valid files checked: {valid}")?;
    Ok(valid)
}

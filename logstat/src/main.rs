use clap::{Parser, Subcommand};
use logstat_core::cli::{self, AnalyzeArgs, CheckArgs, LinesArgs};
use logstat_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "logstat",
    version,
    about = "logstat: traffic analytics for Apache combined access logs"
)]
struct Cli {
    /// Emit diagnostics as JSON (defaults to JSON when stderr is not a terminal)
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse an access log and print traffic statistics
    Analyze(AnalyzeArgs),

    /// Count lines and report the longest and shortest
    Lines(LinesArgs),

    /// Check that paths point to readable log files
    Check(CheckArgs),

    /// Analyzer config tooling
    Config {
        #[command(subcommand)]
        cmd: cli::conf::ConfigCmd,
    },
}

fn main() {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        default_log_format()
    };
    init_logging(format);

    let result = match cli.command {
        Command::Analyze(args) => cli::run_analyze(args),
        Command::Lines(args) => cli::run_lines(args),
        Command::Check(args) => cli::run_check(args),
        Command::Config { cmd } => cli::conf::run_config(cmd),
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

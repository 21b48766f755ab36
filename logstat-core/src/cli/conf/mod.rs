mod check;
mod dump;

pub use check::*;
use clap::Subcommand;
pub use dump::*;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum ConfigCmd {
    /// Validate an analyzer config file and exit
    Check {
        /// Path to the config file
        #[arg(default_value = "logstat.toml")]
        path: PathBuf,
    },

    /// Print the resolved configuration
    Dump {
        #[arg(default_value = "logstat.toml")]
        path: PathBuf,

        /// Output as TOML instead of JSON
        #[arg(long)]
        toml: bool,
    },
}

pub fn run_config(cmd: ConfigCmd) -> anyhow::Result<()> {
    match cmd {
        ConfigCmd::Check { path } => check(path),
        ConfigCmd::Dump { path, toml } => dump(path, toml),
    }
}

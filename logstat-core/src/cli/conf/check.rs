use crate::conf::{AnalyzerConfig, ConfigError};
use std::path::PathBuf;

pub fn check(path: PathBuf) -> anyhow::Result<()> {
    match AnalyzerConfig::from_file(&path) {
        Ok(cfg) => {
            println!("✔ Config loaded successfully");
            println!("✔ max_line_length = {}", cfg.max_line_length);
            println!("✔ on_malformed = {:?}", cfg.on_malformed);
            Ok(())
        }
        Err(err) => {
            eprintln!("{err}");
            if let Some(hint) = config_error_hint(&err) {
                eprintln!();
                eprintln!("{hint}");
            }
            std::process::exit(1);
        }
    }
}

pub fn config_error_hint(err: &ConfigError) -> Option<&'static str> {
    match err {
        ConfigError::Parse { .. } => Some(
            "Analyzer configs accept two optional keys.\n\
             \n\
             Example:\n\
             \n\
             max_line_length = 1024\n\
             on_malformed    = \"skip\"   # or \"abort\"",
        ),

        ConfigError::Invalid {
            field: "max_line_length",
            ..
        } => Some("`max_line_length` is a character count and must be at least 1."),

        _ => None,
    }
}
